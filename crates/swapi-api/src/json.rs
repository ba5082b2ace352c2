//! JSON response bodies with a configurable layout.
//!
//! Responses are pretty-printed by default so the API is readable from a
//! browser or `curl`; [`JsonStyle::Compact`] turns that off.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Layout of serialized response bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStyle {
    /// Indented, one field per line.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

impl JsonStyle {
    /// `Pretty` when `pretty` is true, `Compact` otherwise.
    pub const fn from_flag(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }
}

/// A JSON response serialized with a given [`JsonStyle`].
#[derive(Debug, Clone)]
pub struct ApiJson<T> {
    value: T,
    style: JsonStyle,
}

impl<T> ApiJson<T> {
    /// Wrap `value` for serialization with `style`.
    pub const fn new(value: T, style: JsonStyle) -> Self {
        Self { value, style }
    }
}

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        let body = match self.style {
            JsonStyle::Pretty => serde_json::to_vec_pretty(&self.value),
            JsonStyle::Compact => serde_json::to_vec(&self.value),
        };

        match body {
            Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
            Err(e) => ApiError::Serialization(e).into_response(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn pretty_body_is_indented() {
        let value = serde_json::json!({ "count": 1, "results": [] });
        let text = body_text(ApiJson::new(value, JsonStyle::Pretty).into_response()).await;
        assert!(text.contains("\n  \"count\": 1"));
    }

    #[tokio::test]
    async fn compact_body_has_no_whitespace() {
        let value = serde_json::json!({ "count": 1 });
        let text = body_text(ApiJson::new(value, JsonStyle::Compact).into_response()).await;
        assert_eq!(text, r#"{"count":1}"#);
    }

    #[test]
    fn style_from_flag() {
        assert_eq!(JsonStyle::from_flag(true), JsonStyle::Pretty);
        assert_eq!(JsonStyle::from_flag(false), JsonStyle::Compact);
    }
}
