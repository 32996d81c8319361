//! Load State Type
//!
//! Status of a view backed by one API call.

use crate::error::ApiError;

pub const LOADING_TEXT: &str = "Memuat...";

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Error message to display
    Failed(String),
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok() {
        let state: LoadState<Vec<u32>> = Ok(vec![1, 2]).into();
        assert_eq!(state, LoadState::Ready(vec![1, 2]));
    }

    #[test]
    fn test_from_err_keeps_display_message() {
        let state: LoadState<()> = Err(ApiError::server(500, None)).into();
        assert_eq!(state, LoadState::Failed("HTTP 500".to_string()));

        let state: LoadState<()> = Err(ApiError::InvalidResponse).into();
        assert_eq!(state, LoadState::Failed("Respon tidak valid dari server".to_string()));
    }
}
