//! # Notification Listener
//!
//! Watches every notification the device posts, keeps only those from a
//! fixed set of banking apps, classifies them as financial transactions with
//! keyword heuristics, and forwards matches to the app UI.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure classification logic, no I/O
//!   - `classify`: source filter + keyword test → `Option<TransactionEvent>`
//!   - `MONITORED_PACKAGES`, `TRANSACTION_KEYWORDS`: fixed at build time
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `NotificationListenerApi`: control calls (driving)
//!   - `NotificationCallbacks`: host OS callbacks (driving)
//!   - `PermissionRegistry`, `SettingsLauncher`, `EventSink`: driven
//!
//! - **State** (`state.rs`): `SinkSlot`, the single-slot sink mailbox
//!
//! - **Service Layer** (`service.rs`): `ListenerBridge` implements both
//!   driving ports
//!
//! - **Adapters Layer** (`adapters/`): plugin bridge and OS permission
//!
//! ## Pipeline
//!
//! ```text
//! host OS ──on_notification_posted──→ [sink attached?] ──no──→ drop
//!                                           │ yes
//!                                           ▼
//!                                   [monitored package?] ──no──→ drop
//!                                           │ yes
//!                                           ▼
//!                                   [keyword in text?] ──no──→ drop
//!                                           │ yes
//!                                           ▼
//!                                    sink.emit(event) ──→ notificationReceived ──→ UI
//! ```
//!
//! Drops are silent. Nothing is queued or replayed.
//!
//! ## Wiring
//!
//! ```ignore
//! use notification_listener::{ListenerBridge, NotificationListenerPlugin, UnsupportedPlatform};
//! use shared_bridge::InMemoryBridge;
//! use std::sync::Arc;
//!
//! let platform = Arc::new(UnsupportedPlatform);
//! let listener = Arc::new(ListenerBridge::new(platform.clone(), platform));
//! let bridge = Arc::new(InMemoryBridge::new());
//! NotificationListenerPlugin::install(listener.clone(), &bridge);
//!
//! // host OS callback thread:
//! // listener.on_notification_posted(&raw);
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod state;

// Re-exports for convenience
pub use adapters::{BridgeSink, NotificationListenerPlugin, SecureSettingsPermission, UnsupportedPlatform};
pub use config::ListenerConfig;
pub use domain::{classify, DropReason, RawNotification, TransactionEvent};
pub use error::{ListenerError, ListenerResult};
pub use events::{PermissionStatus, NOTIFICATION_RECEIVED_EVENT, PLUGIN_NAME};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{
    EventSink, NotificationCallbacks, NotificationListenerApi, PermissionRegistry,
    SecureSettingsSource, SettingsLauncher,
};
pub use service::ListenerBridge;
pub use state::{ListenerState, SinkSlot};
