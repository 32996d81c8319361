//! Navigation Bar Component
//!
//! Links between the content pages plus logout.

use leptos::prelude::*;

use crate::page::{navigate, Page};
use crate::store::{store_clear_token, use_session_store};

const NAV_LINKS: &[(Page, &str)] = &[
    (Page::Home, "Beranda"),
    (Page::Explore, "Jelajah"),
    (Page::Notifications, "Notifikasi"),
    (Page::Profile, "Profil"),
];

#[component]
pub fn NavBar(current: Page) -> impl IntoView {
    view! {
        <nav class="top-nav">
            <span class="brand">"NexForum"</span>
            <div class="nav-links">
                {NAV_LINKS.iter().map(|(page, label)| {
                    let class = if *page == current { "nav-link active" } else { "nav-link" };
                    view! { <a class=class href=page.file_name()>{*label}</a> }
                }).collect_view()}
            </div>
            <LogoutButton />
        </nav>
    }
}

/// Clears the session and returns to the login page
#[component]
pub fn LogoutButton() -> impl IntoView {
    let store = use_session_store();

    let logout = move |_| {
        log::info!("[SESSION] Logging out");
        store_clear_token(&store);
        navigate(Page::Auth);
    };

    view! {
        <button id="logoutBtn" class="logout-btn" on:click=logout>"Keluar"</button>
    }
}
