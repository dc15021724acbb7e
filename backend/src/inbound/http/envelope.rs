//! JSON envelope wrapping every todo API response.
//!
//! ```text
//! { "success": true,  "data": [...], "count": 2 }
//! { "success": true,  "message": "Todo created successfully", "data": {...} }
//! { "success": false, "error": "Invalid todo ID format" }
//! ```
//!
//! Members that carry no value are omitted rather than rendered as `null`.

use serde::{Deserialize, Serialize};

/// Response body shared by all todo endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiEnvelope<T> {
    fn empty(success: bool) -> Self {
        Self {
            success,
            data: None,
            message: None,
            error: None,
            count: None,
        }
    }

    /// Successful payload with a success message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: Some(message.into()),
            ..Self::empty(true)
        }
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// Successful collection payload; `count` mirrors the number of items.
    pub fn listing(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            data: Some(items),
            ..Self::empty(true)
        }
    }
}

impl ApiEnvelope<()> {
    /// Success without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(true)
        }
    }

    /// Failure carrying the client-facing error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::empty(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn listing_counts_items() {
        let body = serde_json::to_value(ApiEnvelope::listing(vec!["a", "b"])).expect("serialise");
        assert_eq!(body, json!({ "success": true, "data": ["a", "b"], "count": 2 }));
    }

    #[rstest]
    fn empty_listing_reports_zero() {
        let body = serde_json::to_value(ApiEnvelope::<Vec<u8>>::listing(Vec::new()))
            .expect("serialise");
        assert_eq!(body, json!({ "success": true, "data": [], "count": 0 }));
    }

    #[rstest]
    fn message_only_omits_data() {
        let body = serde_json::to_value(ApiEnvelope::message("Todo deleted successfully"))
            .expect("serialise");
        assert_eq!(
            body,
            json!({ "success": true, "message": "Todo deleted successfully" })
        );
    }

    #[rstest]
    fn failure_carries_only_error() {
        let body = serde_json::to_value(ApiEnvelope::failure("boom")).expect("serialise");
        assert_eq!(body, json!({ "success": false, "error": "boom" }));
    }
}
