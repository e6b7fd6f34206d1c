//! # Plugin Calls
//!
//! Request/response side of the bridge. The UI invokes a named method on a
//! plugin; the plugin resolves with a JSON payload or rejects.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// A single control call from the UI to a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginCall {
    /// Correlation id for logging.
    pub call_id: Uuid,
    /// Target plugin name.
    pub plugin: String,
    /// Method name on the plugin.
    pub method: String,
    /// Call arguments.
    pub data: Value,
}

impl PluginCall {
    /// Create a call with an empty argument object.
    pub fn new(plugin: impl Into<String>, method: impl Into<String>) -> Self {
        Self::with_data(plugin, method, Value::Object(Map::new()))
    }

    /// Create a call carrying arguments.
    pub fn with_data(plugin: impl Into<String>, method: impl Into<String>, data: Value) -> Self {
        Self {
            call_id: Uuid::new_v4(),
            plugin: plugin.into(),
            method: method.into(),
            data,
        }
    }
}

/// Rejection returned to the caller of a plugin method.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct CallRejection {
    /// Human readable message shown to the UI.
    pub message: String,
    /// Optional machine readable code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CallRejection {
    /// Reject with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Reject with a message and code.
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Outcome of a plugin call.
pub type CallResult = Result<Value, CallRejection>;

/// A native plugin reachable over the bridge.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Name the UI uses to address this plugin.
    fn name(&self) -> &str;

    /// Handle one control call.
    async fn handle_call(&self, call: PluginCall) -> CallResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_call_has_empty_object() {
        let call = PluginCall::new("NotificationListener", "checkPermission");
        assert_eq!(call.data, json!({}));
        assert_eq!(call.method, "checkPermission");
    }

    #[test]
    fn test_rejection_display_is_message() {
        let rejection = CallRejection::with_code("nope", "DENIED");
        assert_eq!(rejection.to_string(), "nope");
        assert_eq!(rejection.code.as_deref(), Some("DENIED"));
    }

    #[test]
    fn test_rejection_without_code_omits_field() {
        let value = serde_json::to_value(CallRejection::new("nope")).unwrap();
        assert_eq!(value, json!({ "message": "nope" }));
    }
}
