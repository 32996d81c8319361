use leptos::prelude::*;

/// Loading, empty and failure line (styled `error` for every state)
#[component]
pub fn StatusLine(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="error">{text}</p> }
}
