//! Outbound Ports (Driven Ports)
//!
//! Dependencies the listener needs from the host platform and the consumer.

use std::sync::Arc;

use crate::domain::TransactionEvent;

/// OS registry of enabled notification listeners.
pub trait PermissionRegistry: Send + Sync {
    /// Whether this listener is enabled in OS settings right now.
    fn is_listener_enabled(&self) -> bool;
}

/// Navigation to the OS listener-settings screen.
pub trait SettingsLauncher: Send + Sync {
    /// Open the settings screen. Returns immediately; the user acts later.
    fn open_listener_settings(&self);
}

/// Read access to the OS secure-settings store.
pub trait SecureSettingsSource: Send + Sync {
    /// Raw string value for `key`, if set.
    fn get_string(&self, key: &str) -> Option<String>;
}

impl<S: SecureSettingsSource + ?Sized> SecureSettingsSource for Arc<S> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

/// Consumer of classified transaction events.
///
/// `emit` is fire-and-forget: no acknowledgment and no retry. If the
/// consumer cannot take the event right now, the event is lost.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: TransactionEvent);
}
