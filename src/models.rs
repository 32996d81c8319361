//! Frontend Models
//!
//! Data structures matching API responses.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Post as returned by `timeline` and `explore`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Current user as returned by `me`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub from_username: Option<String>,
    /// Only set for truthy ids: `0` and `""` mean no post
    #[serde(default, deserialize_with = "truthy_id")]
    pub post_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ========================
// Id decoding
// ========================

/// Ids arrive as numbers or strings depending on the backend driver.
fn value_to_id(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_id(value).ok_or_else(|| serde::de::Error::custom("id is null"))
}

fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_id(Value::deserialize(deserializer)?))
}

fn truthy_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let falsy = match &value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        _ => false,
    };
    Ok(if falsy { None } else { value_to_id(value) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_accepts_numeric_and_string_ids() {
        let numeric: Post = serde_json::from_value(json!({
            "id": 7, "username": "budi", "content": "halo", "created_at": "2024-01-02 03:04:05"
        })).unwrap();
        assert_eq!(numeric.id.as_deref(), Some("7"));

        let string: Post = serde_json::from_value(json!({
            "id": "7", "content": "halo", "created_at": "2024-01-02 03:04:05"
        })).unwrap();
        assert_eq!(string.id.as_deref(), Some("7"));
        assert_eq!(string.username, None);
    }

    #[test]
    fn test_user_requires_id() {
        let user: User = serde_json::from_value(json!({ "id": 12, "username": "sari", "bio": null })).unwrap();
        assert_eq!(user.id, "12");
        assert_eq!(user.bio, None);

        let missing = serde_json::from_value::<User>(json!({ "username": "sari" }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_notification_type_field() {
        let n: Notification = serde_json::from_value(json!({
            "type": "like", "from_username": "andi", "post_id": null
        })).unwrap();
        assert_eq!(n.kind, "like");
        assert_eq!(n.from_username.as_deref(), Some("andi"));
        assert_eq!(n.post_id, None);
    }

    #[test]
    fn test_notification_post_id_follows_truthiness() {
        let post_id = |raw: Value| {
            serde_json::from_value::<Notification>(json!({ "type": "like", "post_id": raw }))
                .unwrap()
                .post_id
        };
        assert_eq!(post_id(json!(0)), None);
        assert_eq!(post_id(json!("")), None);
        assert_eq!(post_id(json!(false)), None);
        assert_eq!(post_id(json!("0")).as_deref(), Some("0"));
        assert_eq!(post_id(json!(15)).as_deref(), Some("15"));
    }

    #[test]
    fn test_login_response_without_token_is_rejected() {
        assert!(serde_json::from_value::<LoginResponse>(json!({})).is_err());
    }
}
