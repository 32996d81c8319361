//! Session Store
//!
//! Uses Leptos reactive_stores; the token is persisted to localStorage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::storage;

#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Token sent as the `Authorization` header
    pub token: Option<String>,
}

impl SessionState {
    /// State restored from localStorage
    pub fn load() -> Self {
        Self {
            token: storage::get_token(),
        }
    }
}

pub type SessionStore = Store<SessionState>;

pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_logged_in(store: &SessionStore) -> bool {
    store.token().get().is_some()
}

pub fn store_set_token(store: &SessionStore, token: String) -> Result<(), ApiError> {
    storage::set_token(&token)?;
    *store.token().write() = Some(token);
    Ok(())
}

pub fn store_clear_token(store: &SessionStore) {
    if let Err(e) = storage::clear_token() {
        log::warn!("[SESSION] {}", e);
    }
    *store.token().write() = None;
}
