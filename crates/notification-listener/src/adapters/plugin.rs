//! `NotificationListener` bridge plugin
//!
//! Exposes the listener's control operations to the UI as plugin methods and
//! registers a [`BridgeSink`] as the event sink on `startListening`. The plugin
//! owns one sink for its lifetime, so repeated `startListening` calls
//! re-register the same sink.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use shared_bridge::{
    CallRejection, CallResult, EventEmitter, InMemoryBridge, Plugin, PluginCall,
    UNIMPLEMENTED_CODE,
};
use tracing::debug;

use crate::adapters::bridge_sink::BridgeSink;
use crate::error::ListenerError;
use crate::events::{PermissionStatus, PluginMethod, PERMISSION_DENIED_CODE, PLUGIN_NAME};
use crate::ports::{EventSink, NotificationListenerApi};

pub struct NotificationListenerPlugin<A: NotificationListenerApi> {
    api: Arc<A>,
    sink: Arc<dyn EventSink>,
}

impl<A: NotificationListenerApi> NotificationListenerPlugin<A> {
    /// Create the plugin, emitting transaction events through `emitter`.
    pub fn new<E: EventEmitter + 'static>(api: Arc<A>, emitter: Arc<E>) -> Self {
        Self {
            api,
            sink: Arc::new(BridgeSink::new(emitter)),
        }
    }

    /// The UI side went away. Clears the sink if this plugin still owns it.
    pub fn detach(&self) -> bool {
        self.api.detach_sink(&self.sink)
    }

    fn permission_status(granted: bool) -> Value {
        json!(PermissionStatus { granted })
    }

    fn dispatch(&self, method: PluginMethod) -> Result<Value, ListenerError> {
        match method {
            PluginMethod::CheckPermission => {
                Ok(Self::permission_status(self.api.check_permission()))
            }
            PluginMethod::RequestPermission => {
                Ok(Self::permission_status(self.api.request_permission()))
            }
            PluginMethod::StartListening => {
                self.api.start_listening(self.sink.clone())?;
                Ok(json!({}))
            }
            PluginMethod::StopListening => {
                self.api.stop_listening();
                Ok(json!({}))
            }
        }
    }
}

impl<A: NotificationListenerApi + 'static> NotificationListenerPlugin<A> {
    /// Create the plugin and register it on an in-process bridge.
    pub fn install(api: Arc<A>, bridge: &Arc<InMemoryBridge>) -> Arc<Self> {
        let plugin = Arc::new(Self::new(api, bridge.clone()));
        bridge.register_plugin(plugin.clone());
        plugin
    }
}

fn rejection(error: ListenerError) -> CallRejection {
    let code = match error {
        ListenerError::PermissionDenied => PERMISSION_DENIED_CODE,
        ListenerError::UnknownMethod(_) => UNIMPLEMENTED_CODE,
    };
    CallRejection::with_code(error.to_string(), code)
}

#[async_trait]
impl<A: NotificationListenerApi + 'static> Plugin for NotificationListenerPlugin<A> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn handle_call(&self, call: PluginCall) -> CallResult {
        debug!(call_id = %call.call_id, method = %call.method, "NotificationListener call");

        call.method
            .parse::<PluginMethod>()
            .and_then(|method| self.dispatch(method))
            .map_err(rejection)
    }
}
