//! Notifications Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LoadState, NavBar, NotificationCard, StatusLine, LOADING_TEXT};
use crate::models::Notification;
use crate::page::Page;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let (notifications, set_notifications) = signal(LoadState::<Vec<Notification>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::notifications().await;
            if let Err(e) = &result {
                log::warn!("[NOTIF] Load failed: {}", e);
            }
            set_notifications.set(result.into());
        });
    });

    let list = move || match notifications.get() {
        LoadState::Loading => view! { <StatusLine text=LOADING_TEXT /> }.into_any(),
        LoadState::Failed(message) => view! { <StatusLine text=message /> }.into_any(),
        LoadState::Ready(items) if items.is_empty() => {
            view! { <StatusLine text="Tidak ada notifikasi." /> }.into_any()
        }
        LoadState::Ready(items) => items
            .into_iter()
            .map(|notification| view! { <NotificationCard notification=notification /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <NavBar current=Page::Notifications />
        <main class="container">
            <div id="notifList">{list}</div>
        </main>
    }
}
