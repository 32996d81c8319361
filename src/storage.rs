//! Browser Storage
//!
//! Thin wrappers over `window.localStorage` for the session token and settings.

use web_sys::Storage;

use crate::config::{API_BASE_KEY, DEFAULT_API_BASE, TOKEN_KEY};
use crate::error::ApiError;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Stored session token, if any
pub fn get_token() -> Option<String> {
    let token = local_storage()?.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

pub fn set_token(token: &str) -> Result<(), ApiError> {
    let storage = local_storage().ok_or(ApiError::Storage("localStorage unavailable"))?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| ApiError::Storage("failed to save token"))
}

pub fn clear_token() -> Result<(), ApiError> {
    let storage = local_storage().ok_or(ApiError::Storage("localStorage unavailable"))?;
    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| ApiError::Storage("failed to remove token"))
}

/// API base URL: runtime override from localStorage, else the build default
pub fn api_base() -> String {
    let stored = local_storage()
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());
    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_trims_trailing_slash() {
        assert_eq!(normalize_base("https://example.com/api/index.php/"), "https://example.com/api/index.php");
        assert_eq!(normalize_base("  http://localhost:8000/api.php "), "http://localhost:8000/api.php");
    }

    #[test]
    fn test_default_base_is_normalized() {
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}
