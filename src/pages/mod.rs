//! Pages
//!
//! One component per HTML page.

mod auth;
mod explore;
mod home;
mod notifications;
mod profile;

pub use auth::AuthPage;
pub use explore::ExplorePage;
pub use home::HomePage;
pub use notifications::NotificationsPage;
pub use profile::ProfilePage;
