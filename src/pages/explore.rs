//! Explore Page
//!
//! Public feed, readable without logging in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LoadState, NavBar, PostList};
use crate::models::Post;
use crate::page::Page;
use crate::store::{store_is_logged_in, use_session_store};

#[component]
pub fn ExplorePage() -> impl IntoView {
    let store = use_session_store();
    let (feed, set_feed) = signal(LoadState::<Vec<Post>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::explore().await;
            if let Err(e) = &result {
                log::warn!("[EXPLORE] Feed failed: {}", e);
            }
            set_feed.set(result.into());
        });
    });

    view! {
        <Show
            when=move || store_is_logged_in(&store)
            fallback=|| view! {
                <nav class="top-nav">
                    <span class="brand">"NexForum"</span>
                    <a class="nav-link" href=Page::Auth.file_name()>"Masuk"</a>
                </nav>
            }
        >
            <NavBar current=Page::Explore />
        </Show>
        <main class="container">
            <PostList list_id="exploreList" state=feed empty_text="Belum ada post." />
        </main>
    }
}
