//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Avatar, LoadState, NavBar, StatusLine, LOADING_TEXT};
use crate::models::User;
use crate::page::Page;

const EMPTY_BIO: &str = "Bio belum diisi";

fn bio_text(user: &User) -> String {
    user.bio
        .as_deref()
        .filter(|bio| !bio.is_empty())
        .unwrap_or(EMPTY_BIO)
        .to_string()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (profile, set_profile) = signal(LoadState::<User>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::me().await;
            if let Err(e) = &result {
                log::warn!("[PROFILE] me failed: {}", e);
            }
            set_profile.set(result.into());
        });
    });

    let card = move || match profile.get() {
        LoadState::Loading => view! { <StatusLine text=LOADING_TEXT /> }.into_any(),
        LoadState::Failed(message) => view! { <StatusLine text=message /> }.into_any(),
        LoadState::Ready(user) => {
            let bio = bio_text(&user);
            let avatar_name = user.username.clone();
            view! {
                <div class="post-card" style="flex-direction:column;text-align:center;">
                    <Avatar name=avatar_name centered=true />
                    <h2>"@" {user.username}</h2>
                    <p>"ID: " {user.id}</p>
                    <p>{bio}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <NavBar current=Page::Profile />
        <main class="container">
            <div id="profileCard">{card}</div>
        </main>
    }
}
