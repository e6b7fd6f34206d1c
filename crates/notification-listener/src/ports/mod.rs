//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - control calls from the UI and callbacks from the host OS
//! - Driven Ports (outbound) - permission registry, settings screen, and event sink

pub mod inbound;
pub mod outbound;

pub use inbound::{NotificationCallbacks, NotificationListenerApi};
pub use outbound::{EventSink, PermissionRegistry, SecureSettingsSource, SettingsLauncher};
