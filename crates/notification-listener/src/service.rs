//! Listener Bridge Service
//!
//! Receives every notification the host OS posts, filters and classifies it,
//! and forwards accepted events to the attached sink. Also answers the UI's
//! control calls.
//!
//! Delivery is best-effort. Notifications posted while no sink is attached,
//! or while the sink is being replaced or cleared, are dropped and never
//! replayed.

use std::sync::Arc;

use listener_telemetry::log_notification_event;
use tracing::{debug, info, warn};

use crate::domain::{evaluate, is_monitored_package, DropReason, RawNotification};
use crate::error::{ListenerError, ListenerResult};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{
    EventSink, NotificationCallbacks, NotificationListenerApi, PermissionRegistry,
    SettingsLauncher,
};
use crate::state::{ListenerState, SinkSlot};

/// Listener Bridge implementation
///
/// Implements both driving ports using injected permission and settings
/// dependencies. One instance is shared (behind an `Arc`) by the UI control
/// path and the OS delivery path.
pub struct ListenerBridge<P: PermissionRegistry, L: SettingsLauncher> {
    permissions: Arc<P>,
    settings: Arc<L>,
    slot: Arc<SinkSlot>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<P: PermissionRegistry, L: SettingsLauncher> ListenerBridge<P, L> {
    /// Create a bridge with its own empty sink slot and metrics disabled.
    pub fn new(permissions: Arc<P>, settings: Arc<L>) -> Self {
        Self::with_slot(permissions, settings, Arc::new(SinkSlot::new()))
    }

    /// Create a bridge over an existing sink slot.
    pub fn with_slot(permissions: Arc<P>, settings: Arc<L>, slot: Arc<SinkSlot>) -> Self {
        Self {
            permissions,
            settings,
            slot,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Attach a metrics recorder.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Shared sink slot.
    pub fn slot(&self) -> &Arc<SinkSlot> {
        &self.slot
    }

    fn drop_notification(&self, notification: &RawNotification, reason: DropReason) {
        self.metrics.record_dropped(reason);
        if matches!(reason, DropReason::NotTransaction | DropReason::SinkCleared) {
            log_notification_event!(
                debug,
                notification.source_package_id,
                "Notification dropped",
                reason = %reason
            );
        }
    }
}

impl<P: PermissionRegistry, L: SettingsLauncher> NotificationListenerApi for ListenerBridge<P, L> {
    fn check_permission(&self) -> bool {
        self.permissions.is_listener_enabled()
    }

    fn request_permission(&self) -> bool {
        if !self.permissions.is_listener_enabled() {
            info!("Listener access missing, opening listener settings");
            self.settings.open_listener_settings();
        }
        self.permissions.is_listener_enabled()
    }

    fn start_listening(&self, sink: Arc<dyn EventSink>) -> ListenerResult<()> {
        if !self.permissions.is_listener_enabled() {
            self.metrics.record_permission_denied();
            warn!("start_listening rejected: listener access not granted");
            return Err(ListenerError::PermissionDenied);
        }

        let replaced = self.slot.attach(sink).is_some();
        info!(replaced, "Sink attached, listening for bank notifications");
        Ok(())
    }

    fn stop_listening(&self) {
        if self.slot.detach().is_some() {
            info!("Sink detached, listening stopped");
        }
    }

    fn detach_sink(&self, sink: &Arc<dyn EventSink>) -> bool {
        let cleared = self.slot.detach_if_current(sink);
        if cleared {
            info!("Consumer detached its sink");
        }
        cleared
    }

    fn listener_state(&self) -> ListenerState {
        self.slot.state()
    }
}

impl<P: PermissionRegistry, L: SettingsLauncher> NotificationCallbacks for ListenerBridge<P, L> {
    fn on_notification_posted(&self, notification: &RawNotification) {
        self.metrics.record_received();

        if self.slot.state() == ListenerState::Detached {
            self.drop_notification(notification, DropReason::NoActiveSink);
            return;
        }

        if is_monitored_package(&notification.source_package_id)
            && (notification.title.is_none() || notification.body.is_none())
        {
            debug!(
                package = %notification.source_package_id,
                has_title = notification.title.is_some(),
                has_body = notification.body.is_some(),
                "Notification text missing, reading as empty"
            );
        }

        let event = match evaluate(notification) {
            Ok(event) => event,
            Err(reason) => {
                self.drop_notification(notification, reason);
                return;
            }
        };

        log_notification_event!(
            debug,
            event.source_package_id,
            "Transaction notification",
            title = %event.title,
            body = %event.body
        );
        self.metrics.record_classified();

        // Re-read: the sink may have been replaced or cleared since the check.
        let Some(sink) = self.slot.current() else {
            self.drop_notification(notification, DropReason::SinkCleared);
            return;
        };

        sink.emit(event);
        self.metrics.record_emitted();
    }

    fn on_notification_removed(&self, _notification: &RawNotification) {}
}
