//! # Shared Bridge - Native ↔ UI Plugin Bridge
//!
//! In-process model of the cross-runtime message bridge that connects native
//! plugins to application code.
//!
//! ## Channels
//!
//! ```text
//! ┌──────────────┐     call(plugin, method, data)     ┌──────────────┐
//! │   App UI     │ ─────────────────────────────────→ │    Plugin    │
//! │              │ ←──────── resolve / reject ─────── │              │
//! │              │                                    │              │
//! │              │ ←──── notify_listeners(event) ──── │              │
//! └──────────────┘        (fire-and-forget)           └──────────────┘
//! ```
//!
//! - **Control calls** are request/response: each [`PluginCall`] resolves
//!   with a JSON payload or rejects with a [`CallRejection`].
//! - **Events** are pushed to whichever listeners are attached at emit time.
//!   An event with no listener is dropped; nothing is queued for late
//!   listeners.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod call;
pub mod emitter;
pub mod events;
pub mod listener;

pub use call::{CallRejection, CallResult, Plugin, PluginCall};
pub use emitter::{EventEmitter, InMemoryBridge};
pub use events::{BridgeEvent, EventFilter};
pub use listener::{Listener, ListenerRecvError};

/// Maximum events buffered per listener before a slow listener starts lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Rejection code used when a plugin has no handler for a method.
pub const UNIMPLEMENTED_CODE: &str = "UNIMPLEMENTED";

/// Rejection code used when no plugin is registered under a name.
pub const PLUGIN_NOT_FOUND_CODE: &str = "PLUGIN_NOT_FOUND";
