//! Listener configuration
//!
//! Only the wiring is configurable. The monitored packages and the keyword
//! set are fixed at build time.

use std::env;

use shared_bridge::DEFAULT_CHANNEL_CAPACITY;

/// Default flattened component name of the listener service, as it appears
/// in the OS list of enabled listeners.
pub const DEFAULT_COMPONENT_NAME: &str =
    "app.banklistener/app.banklistener.BankNotificationListenerService";

/// Listener wiring configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Identity matched against the OS enabled-listener list
    pub component_name: String,
    /// Event channel capacity of the in-process bridge
    pub bridge_capacity: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            bridge_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ListenerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NL_COMPONENT_NAME`: listener component identity
    /// - `NL_BRIDGE_CAPACITY`: bridge event channel capacity
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            component_name: lookup("NL_COMPONENT_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.component_name),

            bridge_capacity: lookup("NL_BRIDGE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&capacity: &usize| capacity > 0)
                .unwrap_or(defaults.bridge_capacity),
        }
    }

    pub fn with_component_name(mut self, component_name: impl Into<String>) -> Self {
        self.component_name = component_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListenerConfig::default();
        assert_eq!(config.component_name, DEFAULT_COMPONENT_NAME);
        assert_eq!(config.bridge_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ListenerConfig::from_lookup(|key| match key {
            "NL_COMPONENT_NAME" => Some("pkg/pkg.Service".to_string()),
            "NL_BRIDGE_CAPACITY" => Some("16".to_string()),
            _ => None,
        });
        assert_eq!(config.component_name, "pkg/pkg.Service");
        assert_eq!(config.bridge_capacity, 16);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = ListenerConfig::from_lookup(|key| match key {
            "NL_COMPONENT_NAME" => Some("  ".to_string()),
            "NL_BRIDGE_CAPACITY" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config, ListenerConfig::default());
    }
}
