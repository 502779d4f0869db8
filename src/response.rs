//! Standard response envelope: `{success, data}` or `{success, error}`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Collapse into the payload, or the reported error message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (_, _, Some(error)) => Err(error),
            (true, None, None) => Err("response carried no data".into()),
            (false, _, None) => Err("Unknown error occurred".into()),
        }
    }
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::ok(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error() {
        let v = serde_json::to_value(Envelope::ok(vec![1, 2])).unwrap();
        assert_eq!(v, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let v = serde_json::to_value(Envelope::<()>::failure("boom")).unwrap();
        assert_eq!(v, json!({"success": false, "error": "boom"}));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i32,
    }

    #[test]
    fn payload_type_needs_no_default() {
        let ok: Envelope<Row> = serde_json::from_value(json!({"success": true, "data": {"id": 3}})).unwrap();
        assert_eq!(ok.into_result(), Ok(Row { id: 3 }));
        let failed: Envelope<Row> = serde_json::from_value(json!({"success": false, "error": "down"})).unwrap();
        assert_eq!(failed.into_result(), Err("down".to_string()));
    }

    #[test]
    fn failure_without_message_still_yields_text() {
        let env: Envelope<i32> = serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(env.into_result(), Err("Unknown error occurred".to_string()));
    }
}
