//! Post and feed endpoints

use serde::Serialize;

use super::{api_fetch, decode_list, to_body, HttpMethod};
use crate::error::ApiError;
use crate::models::Post;

#[derive(Serialize)]
pub struct CreatePostArgs<'a> {
    pub content: &'a str,
}

/// Posts from followed users (authenticated)
pub async fn timeline() -> Result<Vec<Post>, ApiError> {
    decode_list(api_fetch("timeline", HttpMethod::Get, None, true).await?)
}

/// Public feed
pub async fn explore() -> Result<Vec<Post>, ApiError> {
    decode_list(api_fetch("explore", HttpMethod::Get, None, false).await?)
}

pub async fn create_post(content: &str) -> Result<(), ApiError> {
    let body = to_body(&CreatePostArgs { content })?;
    api_fetch("create_post", HttpMethod::Post, Some(body), true).await?;
    Ok(())
}
