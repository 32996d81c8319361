//! Client Configuration
//!
//! Compile-time defaults, overridable through environment variables at build time.

/// API endpoint (all actions go through `?action=`)
pub const DEFAULT_API_BASE: &str = match option_env!("NEXFORUM_API_BASE") {
    Some(url) => url,
    None => "https://nexforum.wuaze.com/api/index.php",
};

/// localStorage key holding the session token
pub const TOKEN_KEY: &str = "nexforum_token";

/// localStorage key for a runtime API base override
pub const API_BASE_KEY: &str = "nexforum_api_base";

/// Page file names used for redirects and navigation
pub const HOME_PAGE: &str = "index.html";
pub const EXPLORE_PAGE: &str = "explore.html";
pub const PROFILE_PAGE: &str = "profile.html";
pub const NOTIFICATIONS_PAGE: &str = "notifications.html";
pub const AUTH_PAGE: &str = "auth.html";
