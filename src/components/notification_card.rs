use leptos::prelude::*;

use crate::components::Avatar;
use crate::format::{notification_actor, notification_text};
use crate::models::Notification;

#[component]
pub fn NotificationCard(notification: Notification) -> impl IntoView {
    let actor = notification_actor(&notification).to_string();
    let text = notification_text(&notification);
    let avatar_name = actor.clone();

    view! {
        <div class="post-card">
            <Avatar name=avatar_name />
            <div class="post-main">
                <div class="post-username">"@" {actor}</div>
                <div class="post-content">{text}</div>
            </div>
        </div>
    }
}
