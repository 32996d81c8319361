use leptos::prelude::*;

use crate::format::initials;

/// Round avatar showing the name's initials
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    view! {
        <div class="avatar" style=if centered { "margin:0 auto;" } else { "" }>
            {initials(&name)}
        </div>
    }
}
