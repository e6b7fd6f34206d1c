//! Permission check against the OS secure-settings store
//!
//! The OS keeps the enabled notification listeners as one colon-separated
//! string of flattened component names (`package/class`). Access is granted
//! when this component's name is one of the entries.

use tracing::trace;

use crate::config::ListenerConfig;
use crate::ports::{PermissionRegistry, SecureSettingsSource};

/// Secure-settings key listing enabled notification listeners.
pub const ENABLED_NOTIFICATION_LISTENERS: &str = "enabled_notification_listeners";

/// [`PermissionRegistry`] backed by the secure-settings store.
pub struct SecureSettingsPermission<S: SecureSettingsSource> {
    source: S,
    component_name: String,
}

impl<S: SecureSettingsSource> SecureSettingsPermission<S> {
    pub fn new(source: S, component_name: impl Into<String>) -> Self {
        Self {
            source,
            component_name: component_name.into(),
        }
    }

    /// Use the component identity from `config`.
    pub fn from_config(source: S, config: &ListenerConfig) -> Self {
        Self::new(source, config.component_name.clone())
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }
}

impl<S: SecureSettingsSource> PermissionRegistry for SecureSettingsPermission<S> {
    fn is_listener_enabled(&self) -> bool {
        let Some(enabled) = self.source.get_string(ENABLED_NOTIFICATION_LISTENERS) else {
            trace!("No enabled listeners recorded");
            return false;
        };

        is_component_enabled(&enabled, &self.component_name)
    }
}

/// Exact match of `component_name` against a colon-separated listener list.
pub fn is_component_enabled(enabled: &str, component_name: &str) -> bool {
    if component_name.is_empty() {
        return false;
    }
    enabled
        .split(':')
        .map(str::trim)
        .any(|entry| entry == component_name)
}
