//! Bridge protocol for the `NotificationListener` plugin
//!
//! | Method | Resolves | Rejects |
//! |--------|----------|---------|
//! | `checkPermission` | `{ granted }` | never |
//! | `requestPermission` | `{ granted }` | never |
//! | `startListening` | `{}` | permission not granted |
//! | `stopListening` | `{}` | never |
//!
//! Event `notificationReceived`: `{ title, body, packageName, timestamp }`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListenerError;

/// Plugin name on the bridge.
pub const PLUGIN_NAME: &str = "NotificationListener";

/// Event carrying a classified transaction to the UI.
pub const NOTIFICATION_RECEIVED_EVENT: &str = "notificationReceived";

/// Rejection code for `startListening` without permission.
pub const PERMISSION_DENIED_CODE: &str = "PERMISSION_DENIED";

/// Payload of the permission methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatus {
    pub granted: bool,
}

/// Methods the plugin answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginMethod {
    CheckPermission,
    RequestPermission,
    StartListening,
    StopListening,
}

impl PluginMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginMethod::CheckPermission => "checkPermission",
            PluginMethod::RequestPermission => "requestPermission",
            PluginMethod::StartListening => "startListening",
            PluginMethod::StopListening => "stopListening",
        }
    }
}

impl FromStr for PluginMethod {
    type Err = ListenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkPermission" => Ok(PluginMethod::CheckPermission),
            "requestPermission" => Ok(PluginMethod::RequestPermission),
            "startListening" => Ok(PluginMethod::StartListening),
            "stopListening" => Ok(PluginMethod::StopListening),
            other => Err(ListenerError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names_round_trip() {
        for method in [
            PluginMethod::CheckPermission,
            PluginMethod::RequestPermission,
            PluginMethod::StartListening,
            PluginMethod::StopListening,
        ] {
            assert_eq!(method.as_str().parse::<PluginMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            "removeAllListeners".parse::<PluginMethod>(),
            Err(ListenerError::UnknownMethod("removeAllListeners".into()))
        );
    }
}
