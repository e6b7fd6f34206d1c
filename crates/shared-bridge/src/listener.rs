//! # Event Listener
//!
//! Receiving side of the bridge's event channel.

use crate::events::{BridgeEvent, EventFilter};
use thiserror::Error;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tracing::warn;

/// Errors from listener operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListenerRecvError {
    /// The bridge was dropped.
    #[error("Bridge closed")]
    Closed,
}

/// A UI-side listener attached to the bridge.
///
/// Sees only events emitted after it attached. Dropping the handle detaches
/// it. A listener that falls more than the channel capacity behind loses the
/// oldest events and carries on from the newest retained one.
pub struct Listener {
    receiver: broadcast::Receiver<BridgeEvent>,
    filter: EventFilter,
}

impl Listener {
    pub(crate) fn new(receiver: broadcast::Receiver<BridgeEvent>, filter: EventFilter) -> Self {
        Self { receiver, filter }
    }

    /// Wait for the next event this listener is interested in.
    ///
    /// `None` means the bridge is gone and nothing more will arrive.
    pub async fn recv(&mut self) -> Option<BridgeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, filter = ?self.filter, "UI listener fell behind, events lost");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next interesting event if one is already buffered.
    ///
    /// Non-matching and lagged-over events are skipped. `Ok(None)` once the
    /// buffer holds nothing more for this listener.
    pub fn try_recv(&mut self) -> Result<Option<BridgeEvent>, ListenerRecvError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(missed, filter = ?self.filter, "UI listener fell behind, events lost");
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(ListenerRecvError::Closed),
            }
        }
    }

    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{EventEmitter, InMemoryBridge};
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_listener_recv_matching_only() {
        let bridge = InMemoryBridge::new();
        let mut listener = bridge.add_listener(EventFilter::event("P", "wanted"));

        bridge.notify_listeners(BridgeEvent::new("P", "ignored", json!(1)));
        bridge.notify_listeners(BridgeEvent::new("P", "wanted", json!(2)));

        let received = timeout(Duration::from_millis(100), listener.recv())
            .await
            .expect("timeout")
            .expect("closed");
        assert_eq!(received.data, json!(2));
    }

    #[tokio::test]
    async fn test_try_recv_empty() {
        let bridge = InMemoryBridge::new();
        let mut listener = bridge.add_listener(EventFilter::all());
        assert_eq!(listener.try_recv(), Ok(None));
    }

    #[tokio::test]
    async fn test_recv_after_bridge_dropped() {
        let bridge = InMemoryBridge::new();
        let mut listener = bridge.add_listener(EventFilter::all());
        drop(bridge);
        assert!(listener.recv().await.is_none());
        assert_eq!(listener.try_recv(), Err(ListenerRecvError::Closed));
    }

    #[test]
    fn test_lagging_listener_resumes_with_newest() {
        let bridge = InMemoryBridge::with_capacity(2);
        let mut listener = bridge.add_listener(EventFilter::all());

        for n in 0..5 {
            bridge.notify_listeners(BridgeEvent::new("P", "e", json!(n)));
        }

        let received: Vec<_> = std::iter::from_fn(|| listener.try_recv().unwrap())
            .map(|event| event.data)
            .collect();
        assert_eq!(received, vec![json!(3), json!(4)]);
    }
}
