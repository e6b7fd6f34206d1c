//! Event sink that forwards transactions over the plugin bridge
//!
//! Each accepted transaction becomes one `notificationReceived` event on the
//! bridge. Emission is fire-and-forget: with no UI listener attached the
//! event is lost.

use std::sync::Arc;

use shared_bridge::{BridgeEvent, EventEmitter};
use tracing::{trace, warn};

use crate::domain::TransactionEvent;
use crate::events::{NOTIFICATION_RECEIVED_EVENT, PLUGIN_NAME};
use crate::ports::EventSink;

pub struct BridgeSink<E: EventEmitter> {
    emitter: Arc<E>,
}

impl<E: EventEmitter> BridgeSink<E> {
    pub fn new(emitter: Arc<E>) -> Self {
        Self { emitter }
    }
}

impl<E: EventEmitter> EventSink for BridgeSink<E> {
    fn emit(&self, event: TransactionEvent) {
        let data = match serde_json::to_value(&event) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Failed to encode transaction event");
                return;
            }
        };

        let delivered = self.emitter.notify_listeners(BridgeEvent::new(
            PLUGIN_NAME,
            NOTIFICATION_RECEIVED_EVENT,
            data,
        ));
        trace!(delivered, package = %event.source_package_id, "Transaction event emitted");
    }
}
