//! Authentication endpoints

use serde::Serialize;

use super::{api_fetch, decode, to_body, HttpMethod};
use crate::error::ApiError;
use crate::models::LoginResponse;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Exchange credentials for a session token
pub async fn login(args: &LoginArgs<'_>) -> Result<String, ApiError> {
    let data = api_fetch("login", HttpMethod::Post, Some(to_body(args)?), false).await?;
    let response: LoginResponse = decode(data)?;
    Ok(response.token)
}

pub async fn register(args: &RegisterArgs<'_>) -> Result<(), ApiError> {
    api_fetch("register", HttpMethod::Post, Some(to_body(args)?), false).await?;
    Ok(())
}
