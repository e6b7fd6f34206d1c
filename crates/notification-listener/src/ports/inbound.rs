//! Inbound Ports (Driving Ports)
//!
//! Two callers drive the listener, usually from different threads:
//! - the UI, through control calls (`NotificationListenerApi`)
//! - the host OS, through notification callbacks (`NotificationCallbacks`)

use std::sync::Arc;

use crate::domain::RawNotification;
use crate::error::ListenerResult;
use crate::ports::outbound::EventSink;
use crate::state::ListenerState;

/// Control operations exposed to the UI.
pub trait NotificationListenerApi: Send + Sync {
    /// Whether listener access is currently granted. Queried live, never cached.
    fn check_permission(&self) -> bool;

    /// Ask the user to grant listener access.
    ///
    /// Opens the OS settings screen if access is missing and returns the
    /// status right after, without waiting for the user. A `false` result
    /// may turn `true` later; callers re-check with
    /// [`check_permission`](Self::check_permission).
    fn request_permission(&self) -> bool;

    /// Register `sink` as the single receiver of transaction events.
    ///
    /// Permission is re-checked on every call. Fails with
    /// `PermissionDenied` and leaves the state unchanged if access is
    /// missing. A previously registered sink is replaced.
    fn start_listening(&self, sink: Arc<dyn EventSink>) -> ListenerResult<()>;

    /// Clear the registered sink. Idempotent.
    fn stop_listening(&self);

    /// Clear the registered sink only if it is still `sink`.
    ///
    /// Returns true if the slot was cleared.
    fn detach_sink(&self, sink: &Arc<dyn EventSink>) -> bool;

    /// Current attachment state.
    fn listener_state(&self) -> ListenerState;
}

/// Callbacks invoked by the host OS for every notification in the system.
pub trait NotificationCallbacks: Send + Sync {
    /// A notification was posted.
    fn on_notification_posted(&self, notification: &RawNotification);

    /// A notification was removed. Implementations ignore this.
    fn on_notification_removed(&self, notification: &RawNotification);
}
