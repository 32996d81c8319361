use super::{api_fetch, decode_list, HttpMethod};
use crate::error::ApiError;
use crate::models::Notification;

pub async fn notifications() -> Result<Vec<Notification>, ApiError> {
    decode_list(api_fetch("notifications", HttpMethod::Get, None, true).await?)
}
