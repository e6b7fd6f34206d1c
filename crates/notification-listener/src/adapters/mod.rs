//! Adapters Layer
//!
//! Connects the listener to its surroundings:
//! - `NotificationListenerPlugin`: exposes control calls on the plugin bridge
//! - `BridgeSink`: forwards transaction events to the UI as `notificationReceived`
//! - `SecureSettingsPermission`: permission check against the OS enabled-listener list
//! - `UnsupportedPlatform`: fallback where no listener service exists

pub mod bridge_sink;
pub mod plugin;
pub mod secure_settings;
pub mod unsupported;

pub use bridge_sink::BridgeSink;
pub use plugin::NotificationListenerPlugin;
pub use secure_settings::{is_component_enabled, SecureSettingsPermission, ENABLED_NOTIFICATION_LISTENERS};
pub use unsupported::UnsupportedPlatform;
