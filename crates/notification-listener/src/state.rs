//! Listener state: the single-slot sink mailbox
//!
//! ```text
//! [DETACHED] ──start_listening (granted)──→ [ATTACHED]
//!     ↑                                         │  ↺ start_listening replaces the sink
//!     └──────── stop_listening / detach ────────┘
//! ```
//!
//! The slot is shared between the control plane (attach/detach, UI thread)
//! and the delivery plane (OS notification callbacks). Readers clone the
//! `Arc` under a short read lock and emit outside it, so a reader sees either
//! the old or the new sink. Once `detach` returns, every later `current`
//! observes the empty slot.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::ports::EventSink;

/// Whether a sink is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerState {
    /// No sink; incoming notifications are dropped unprocessed
    Detached,
    /// A sink is registered; notifications are classified and emitted
    Attached,
}

/// Holds at most one sink.
#[derive(Default)]
pub struct SinkSlot {
    sink: RwLock<Option<Arc<dyn EventSink>>>,
}

impl SinkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sink`, returning the one it replaced.
    pub fn attach(&self, sink: Arc<dyn EventSink>) -> Option<Arc<dyn EventSink>> {
        self.sink.write().replace(sink)
    }

    /// Clear the slot, returning the sink that was registered.
    pub fn detach(&self) -> Option<Arc<dyn EventSink>> {
        self.sink.write().take()
    }

    /// Clear the slot only if it still holds `sink`.
    pub fn detach_if_current(&self, sink: &Arc<dyn EventSink>) -> bool {
        let mut slot = self.sink.write();
        match slot.as_ref() {
            Some(current) if same_sink(current, sink) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Snapshot of the registered sink.
    pub fn current(&self) -> Option<Arc<dyn EventSink>> {
        self.sink.read().clone()
    }

    pub fn state(&self) -> ListenerState {
        if self.sink.read().is_some() {
            ListenerState::Attached
        } else {
            ListenerState::Detached
        }
    }
}

impl std::fmt::Debug for SinkSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkSlot")
            .field("state", &self.state())
            .finish()
    }
}

// Compare data pointers only; vtable pointers for the same type can differ
// across codegen units.
fn same_sink(a: &Arc<dyn EventSink>, b: &Arc<dyn EventSink>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionEvent;

    struct NullSink;

    impl EventSink for NullSink {
        fn emit(&self, _event: TransactionEvent) {}
    }

    fn sink() -> Arc<dyn EventSink> {
        Arc::new(NullSink)
    }

    #[test]
    fn test_starts_detached() {
        let slot = SinkSlot::new();
        assert_eq!(slot.state(), ListenerState::Detached);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_attach_replaces_previous() {
        let slot = SinkSlot::new();
        let first = sink();
        let second = sink();

        assert!(slot.attach(first.clone()).is_none());
        let replaced = slot.attach(second.clone()).expect("first sink replaced");

        assert!(same_sink(&replaced, &first));
        assert!(same_sink(&slot.current().unwrap(), &second));
        assert_eq!(slot.state(), ListenerState::Attached);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let slot = SinkSlot::new();
        slot.attach(sink());

        assert!(slot.detach().is_some());
        assert!(slot.detach().is_none());
        assert_eq!(slot.state(), ListenerState::Detached);
    }

    #[test]
    fn test_detach_if_current_keeps_newer_sink() {
        let slot = SinkSlot::new();
        let old = sink();
        let new = sink();

        slot.attach(old.clone());
        slot.attach(new.clone());

        assert!(!slot.detach_if_current(&old));
        assert_eq!(slot.state(), ListenerState::Attached);

        assert!(slot.detach_if_current(&new));
        assert_eq!(slot.state(), ListenerState::Detached);
    }

    #[test]
    fn test_snapshot_survives_detach() {
        let slot = SinkSlot::new();
        slot.attach(sink());

        let snapshot = slot.current().unwrap();
        slot.detach();

        // The in-flight holder keeps a valid handle; the slot is empty.
        snapshot.emit(TransactionEvent {
            title: String::new(),
            body: String::new(),
            source_package_id: "com.bradesco".into(),
            timestamp: 0,
        });
        assert!(slot.current().is_none());
    }
}
