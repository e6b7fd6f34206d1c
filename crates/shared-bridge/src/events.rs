//! # Bridge Events
//!
//! Named events pushed from native plugins to attached UI listeners.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event emitted by a plugin.
///
/// `plugin` and `event_name` together identify the channel a listener attaches
/// to (for example `NotificationListener` / `notificationReceived`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeEvent {
    /// Name of the emitting plugin.
    pub plugin: String,
    /// Event name listeners subscribe to.
    pub event_name: String,
    /// JSON payload delivered to the listener.
    pub data: Value,
}

impl BridgeEvent {
    /// Create a new event.
    pub fn new(plugin: impl Into<String>, event_name: impl Into<String>, data: Value) -> Self {
        Self {
            plugin: plugin.into(),
            event_name: event_name.into(),
            data,
        }
    }
}

/// Filter for listener attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Plugin to listen to. `None` means any plugin.
    pub plugin: Option<String>,
    /// Event names to include. Empty means all events.
    pub event_names: Vec<String>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for one named event of one plugin.
    #[must_use]
    pub fn event(plugin: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            plugin: Some(plugin.into()),
            event_names: vec![event_name.into()],
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &BridgeEvent) -> bool {
        let plugin_match = self
            .plugin
            .as_deref()
            .map_or(true, |plugin| plugin == event.plugin);

        let name_match =
            self.event_names.is_empty() || self.event_names.iter().any(|n| *n == event.event_name);

        plugin_match && name_match
    }
}
