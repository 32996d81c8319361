//! Post Card Component
//!
//! Renders one post of a feed.

use leptos::prelude::*;

use crate::components::{Avatar, LoadState, StatusLine, LOADING_TEXT};
use crate::format::format_date;
use crate::models::Post;

const DEFAULT_USERNAME: &str = "user";

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let username = post
        .username
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    let avatar_name = username.clone();

    view! {
        <article class="post-card">
            <Avatar name=avatar_name />
            <div class="post-main">
                <div class="post-header">
                    <span class="post-username">"@" {username}</span>
                    <span class="post-time">{format_date(&post.created_at)}</span>
                </div>
                // Text node: content is never parsed as markup
                <div class="post-content">{post.content}</div>
            </div>
        </article>
    }
}

/// Feed body: loading line, empty line, error line or the cards
#[component]
pub fn PostList(
    list_id: &'static str,
    state: ReadSignal<LoadState<Vec<Post>>>,
    empty_text: &'static str,
) -> impl IntoView {
    let body = move || match state.get() {
        LoadState::Loading => view! { <StatusLine text=LOADING_TEXT /> }.into_any(),
        LoadState::Failed(message) => view! { <StatusLine text=message /> }.into_any(),
        LoadState::Ready(posts) if posts.is_empty() => {
            view! { <StatusLine text=empty_text /> }.into_any()
        }
        LoadState::Ready(posts) => posts
            .into_iter()
            .map(|post| view! { <PostCard post=post /> })
            .collect_view()
            .into_any(),
    };

    view! { <div id=list_id class="post-list">{body}</div> }
}
