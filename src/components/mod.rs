//! UI Components
//!
//! Render helpers shared by the pages.

mod avatar;
mod load_state;
mod nav_bar;
mod notification_card;
mod post_card;
mod status_line;

pub use avatar::Avatar;
pub use load_state::{LoadState, LOADING_TEXT};
pub use nav_bar::NavBar;
pub use notification_card::NotificationCard;
pub use post_card::PostList;
pub use status_line::StatusLine;
