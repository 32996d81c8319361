use super::{api_fetch, decode, HttpMethod};
use crate::error::ApiError;
use crate::models::User;

/// Profile of the logged-in user
pub async fn me() -> Result<User, ApiError> {
    decode(api_fetch("me", HttpMethod::Get, None, true).await?)
}
