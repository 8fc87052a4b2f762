use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but request-validation failures return a
/// list of field errors instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Human-readable detail; non-string values are rendered as JSON
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
