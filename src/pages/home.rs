//! Home Page
//!
//! Timeline of followed users with the post composer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LoadState, NavBar, PostList};
use crate::models::Post;
use crate::page::{alert, Page};

async fn load_timeline(set_timeline: WriteSignal<LoadState<Vec<Post>>>) {
    set_timeline.set(LoadState::Loading);
    let result = api::timeline().await;
    match &result {
        Ok(posts) => log::info!("[HOME] Loaded {} posts", posts.len()),
        Err(e) => log::warn!("[HOME] Timeline failed: {}", e),
    }
    set_timeline.set(result.into());
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (timeline, set_timeline) = signal(LoadState::<Vec<Post>>::Loading);
    let (content, set_content) = signal(String::new());
    let (posting, set_posting) = signal(false);

    // Load on mount
    Effect::new(move |_| {
        spawn_local(load_timeline(set_timeline));
    });

    let submit_post = move |_| {
        let text = content.get().trim().to_string();
        if text.is_empty() { return; }
        set_posting.set(true);

        spawn_local(async move {
            match api::create_post(&text).await {
                Ok(()) => {
                    set_content.set(String::new());
                    load_timeline(set_timeline).await;
                }
                Err(e) => {
                    log::warn!("[HOME] create_post failed: {}", e);
                    alert(&e.to_string());
                }
            }
            set_posting.set(false);
        });
    };

    view! {
        <NavBar current=Page::Home />
        <main class="container">
            <section class="composer">
                <textarea
                    id="postContent"
                    placeholder="Apa yang sedang kamu pikirkan?"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                <button id="postBtn" disabled=move || posting.get() on:click=submit_post>
                    "Posting"
                </button>
            </section>
            <PostList list_id="timelineList" state=timeline empty_text="Belum ada postingan." />
        </main>
    }
}
