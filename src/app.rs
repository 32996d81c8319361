//! NexForum Frontend App
//!
//! Picks the page component for the current document and guards authenticated pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::page::{navigate, Page};
use crate::pages::{AuthPage, ExplorePage, HomePage, NotificationsPage, ProfilePage};
use crate::store::SessionState;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionState::load();
    let logged_in = session.token.is_some();
    let store = Store::new(session);
    provide_context(store);

    let Some(page) = Page::current() else {
        log::warn!("[APP] No page matches this document");
        return ().into_any();
    };

    // Redirect before any page logic runs
    if page.requires_auth() && !logged_in {
        log::info!("[APP] {:?} requires login, redirecting", page);
        navigate(Page::Auth);
        return ().into_any();
    }

    log::info!("[APP] Mounting {:?}", page);
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Explore => view! { <ExplorePage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::Notifications => view! { <NotificationsPage /> }.into_any(),
        Page::Auth => view! { <AuthPage /> }.into_any(),
    }
}
