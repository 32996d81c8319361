//! NexForum API Wrappers
//!
//! Every call goes to `{API_BASE}?action=<action>`, organized by domain.

mod auth;
mod notifications;
mod posts;
mod user;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::storage;

pub use auth::*;
pub use notifications::*;
pub use posts::*;
pub use user::*;

/// Same set `encodeURIComponent` leaves untouched.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

pub fn action_url(base: &str, action: &str) -> String {
    format!("{}?action={}", base, utf8_percent_encode(action, QUERY_COMPONENT))
}

/// Turns a raw HTTP answer into JSON or the error the UI should display.
pub fn interpret_response(status: u16, ok: bool, text: &str) -> Result<Value, ApiError> {
    let data = if text.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str::<Value>(text).map_err(|_| ApiError::InvalidResponse)?
    };

    if !ok {
        let message = match data.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Bool(false)) => None,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(other) => Some(other.to_string()),
        };
        return Err(ApiError::server(status, message));
    }

    Ok(data)
}

pub fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|_| ApiError::InvalidResponse)
}

/// Feed endpoints answer with an array; anything else counts as an empty feed.
pub fn decode_list<T: DeserializeOwned>(data: Value) -> Result<Vec<T>, ApiError> {
    match data {
        Value::Array(_) => decode(data),
        _ => Ok(Vec::new()),
    }
}

pub fn to_body<T: Serialize>(args: &T) -> Result<Value, ApiError> {
    serde_json::to_value(args).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Send one request and return the parsed JSON body.
pub async fn api_fetch(
    action: &str,
    method: HttpMethod,
    body: Option<Value>,
    auth: bool,
) -> Result<Value, ApiError> {
    let url = action_url(&storage::api_base(), action);
    log::debug!("[API] {:?} {}", method, action);

    let builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
    }
    .header("Content-Type", "application/json");

    let builder = match storage::get_token() {
        Some(token) if auth => builder.header("Authorization", &token),
        _ => builder,
    };

    let request = match body {
        Some(body) => builder.body(body.to_string())?,
        None => builder.build()?,
    };

    let response = request.send().await.map_err(|e| {
        log::warn!("[API] {} failed: {}", action, e);
        ApiError::from(e)
    })?;
    let status = response.status();
    let ok = response.ok();
    let text = response.text().await?;

    interpret_response(status, ok, &text).map_err(|e| {
        log::warn!("[API] {} -> {}: {}", action, status, e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;
    use serde_json::json;

    const BASE: &str = "https://nexforum.wuaze.com/api/index.php";

    #[test]
    fn test_action_url_plain() {
        assert_eq!(action_url(BASE, "timeline"), format!("{}?action=timeline", BASE));
        assert_eq!(action_url(BASE, "create_post"), format!("{}?action=create_post", BASE));
    }

    #[test]
    fn test_action_url_encodes_like_encode_uri_component() {
        assert_eq!(action_url(BASE, "a b&c=d"), format!("{}?action=a%20b%26c%3Dd", BASE));
        assert_eq!(action_url(BASE, "x-y_z.!~*'()"), format!("{}?action=x-y_z.!~*'()", BASE));
        assert_eq!(action_url(BASE, "é"), format!("{}?action=%C3%A9", BASE));
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(interpret_response(200, true, "").unwrap(), json!({}));
        assert_eq!(interpret_response(502, false, "").unwrap_err().to_string(), "HTTP 502");
    }

    #[test]
    fn test_whitespace_body_is_invalid_response() {
        assert_eq!(interpret_response(200, true, "   ").unwrap_err(), ApiError::InvalidResponse);
        assert_eq!(interpret_response(200, true, "\n").unwrap_err(), ApiError::InvalidResponse);
    }

    #[test]
    fn test_falsy_error_field_falls_back_to_status() {
        assert_eq!(interpret_response(422, false, r#"{"error":0}"#).unwrap_err().to_string(), "HTTP 422");
        assert_eq!(interpret_response(422, false, r#"{"error":false}"#).unwrap_err().to_string(), "HTTP 422");
        assert_eq!(interpret_response(422, false, r#"{"error":null}"#).unwrap_err().to_string(), "HTTP 422");
        assert_eq!(interpret_response(422, false, r#"{"error":7}"#).unwrap_err().to_string(), "7");
    }

    #[test]
    fn test_non_json_is_invalid_response() {
        let err = interpret_response(200, true, "<html>oops</html>").unwrap_err();
        assert_eq!(err, ApiError::InvalidResponse);
        // Also when the status is an error: parsing happens first.
        let err = interpret_response(500, false, "Fatal error").unwrap_err();
        assert_eq!(err, ApiError::InvalidResponse);
    }

    #[test]
    fn test_error_status_uses_error_field() {
        let err = interpret_response(401, false, r#"{"error":"Unauthorized"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(err, ApiError::Server { status: 401, message: "Unauthorized".into() });
    }

    #[test]
    fn test_error_status_without_error_field() {
        let err = interpret_response(503, false, "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503");
        let err = interpret_response(400, false, r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400");
    }

    #[test]
    fn test_ok_status_with_error_field_passes_through() {
        let data = interpret_response(200, true, r#"{"error":"ignored"}"#).unwrap();
        assert_eq!(data["error"], "ignored");
    }

    #[test]
    fn test_decode_list_coerces_non_arrays() {
        let posts: Vec<Post> = decode_list(json!({})).unwrap();
        assert!(posts.is_empty());

        let posts: Vec<Post> = decode_list(json!([
            { "id": 1, "username": "budi", "content": "halo", "created_at": "2024-05-01 10:00:00" }
        ])).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "halo");
    }

    #[test]
    fn test_decode_list_rejects_malformed_items() {
        let result: Result<Vec<Post>, _> = decode_list(json!([1, 2, 3]));
        assert_eq!(result.unwrap_err(), ApiError::InvalidResponse);
    }
}
