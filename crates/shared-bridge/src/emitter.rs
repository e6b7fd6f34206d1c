//! # Event Emitter
//!
//! Emitting side of the bridge plus the in-process bridge implementation.

use crate::call::{CallRejection, CallResult, Plugin, PluginCall};
use crate::events::{BridgeEvent, EventFilter};
use crate::listener::Listener;
use crate::{DEFAULT_CHANNEL_CAPACITY, PLUGIN_NOT_FOUND_CODE};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Trait for pushing events to the UI.
///
/// Emission is fire-and-forget: there is no acknowledgment, and an event
/// with no attached listener is lost.
pub trait EventEmitter: Send + Sync {
    /// Emit an event to the listeners attached right now.
    ///
    /// Returns the number of listeners the event was handed to.
    fn notify_listeners(&self, event: BridgeEvent) -> usize;

    /// Total events emitted, delivered or not.
    fn events_emitted(&self) -> u64;
}

/// In-memory bridge.
///
/// Uses `tokio::sync::broadcast` for the event channel and a name-keyed
/// registry for plugins.
pub struct InMemoryBridge {
    sender: broadcast::Sender<BridgeEvent>,
    plugins: RwLock<HashMap<String, Arc<dyn Plugin>>>,
    events_emitted: AtomicU64,
}

impl InMemoryBridge {
    /// Create a bridge with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bridge with the given channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            plugins: RwLock::new(HashMap::new()),
            events_emitted: AtomicU64::new(0),
        }
    }

    /// Attach a listener for events matching `filter`.
    #[must_use]
    pub fn add_listener(&self, filter: EventFilter) -> Listener {
        debug!(plugin = ?filter.plugin, events = ?filter.event_names, "Listener attached");
        Listener::new(self.sender.subscribe(), filter)
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Register a plugin under its own name, replacing any previous one.
    pub fn register_plugin(&self, plugin: Arc<dyn Plugin>) {
        let name = plugin.name().to_string();
        debug!(plugin = %name, "Plugin registered");
        self.plugins.write().insert(name, plugin);
    }

    /// Dispatch a control call to its plugin.
    pub async fn call(&self, call: PluginCall) -> CallResult {
        let plugin = self.plugins.read().get(&call.plugin).cloned();

        let Some(plugin) = plugin else {
            debug!(plugin = %call.plugin, method = %call.method, "Call to unknown plugin");
            return Err(CallRejection::with_code(
                format!("Plugin {} is not registered", call.plugin),
                PLUGIN_NOT_FOUND_CODE,
            ));
        };

        trace!(call_id = %call.call_id, plugin = %call.plugin, method = %call.method, "Dispatching call");
        plugin.handle_call(call).await
    }
}

impl Default for InMemoryBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter for InMemoryBridge {
    fn notify_listeners(&self, event: BridgeEvent) -> usize {
        self.events_emitted.fetch_add(1, Ordering::Relaxed);

        let plugin = event.plugin.clone();
        let event_name = event.event_name.clone();

        match self.sender.send(event) {
            Ok(receivers) => {
                trace!(plugin = %plugin, event = %event_name, receivers, "Event emitted");
                receivers
            }
            Err(_) => {
                debug!(plugin = %plugin, event = %event_name, "Event dropped (no listeners)");
                0
            }
        }
    }

    fn events_emitted(&self) -> u64 {
        self.events_emitted.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct EchoPlugin;

    #[async_trait]
    impl Plugin for EchoPlugin {
        fn name(&self) -> &str {
            "Echo"
        }

        async fn handle_call(&self, call: PluginCall) -> CallResult {
            match call.method.as_str() {
                "echo" => Ok(call.data),
                other => Err(CallRejection::new(format!("no method {other}"))),
            }
        }
    }

    #[test]
    fn test_emit_without_listeners() {
        let bridge = InMemoryBridge::new();
        let delivered = bridge.notify_listeners(BridgeEvent::new("P", "e", Value::Null));
        assert_eq!(delivered, 0);
        assert_eq!(bridge.events_emitted(), 1);
    }

    #[test]
    fn test_emit_with_listeners() {
        let bridge = InMemoryBridge::new();
        let _a = bridge.add_listener(EventFilter::all());
        let _b = bridge.add_listener(EventFilter::all());

        let delivered = bridge.notify_listeners(BridgeEvent::new("P", "e", Value::Null));
        assert_eq!(delivered, 2);
        assert_eq!(bridge.listener_count(), 2);
    }

    #[test]
    fn test_dropped_listener_detaches() {
        let bridge = InMemoryBridge::new();
        let listener = bridge.add_listener(EventFilter::all());
        assert_eq!(bridge.listener_count(), 1);
        drop(listener);
        assert_eq!(bridge.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_call_registered_plugin() {
        let bridge = InMemoryBridge::new();
        bridge.register_plugin(Arc::new(EchoPlugin));

        let result = bridge
            .call(PluginCall::with_data("Echo", "echo", json!({ "a": 1 })))
            .await;
        assert_eq!(result, Ok(json!({ "a": 1 })));

        let rejected = bridge.call(PluginCall::new("Echo", "missing")).await;
        assert!(rejected.is_err());
    }

    #[tokio::test]
    async fn test_call_unknown_plugin() {
        let bridge = InMemoryBridge::new();
        let err = bridge
            .call(PluginCall::new("Nope", "anything"))
            .await
            .unwrap_err();
        assert_eq!(err.code.as_deref(), Some(PLUGIN_NOT_FOUND_CODE));
    }
}
