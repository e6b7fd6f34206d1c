//! Metrics hooks for the notification pipeline
//!
//! Counts what happens to every notification the host delivers: received,
//! dropped (by reason), classified, or emitted to the sink.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::DropReason;

/// Thread-safe pipeline counters.
#[derive(Default, Debug)]
pub struct Metrics {
    /// Notifications delivered by the host
    pub notifications_received: AtomicU64,
    /// Dropped because no sink was attached
    pub dropped_no_sink: AtomicU64,
    /// Dropped because the source package is not monitored
    pub dropped_unmonitored: AtomicU64,
    /// Dropped because no keyword matched
    pub dropped_not_transaction: AtomicU64,
    /// Classified as transactions, whether or not a sink took them
    pub transactions_classified: AtomicU64,
    /// Dropped because the sink was cleared during processing
    pub dropped_sink_cleared: AtomicU64,
    /// Events handed to a sink
    pub events_emitted: AtomicU64,
    /// `start_listening` calls rejected for missing permission
    pub permission_denials: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.notifications_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped(&self, reason: DropReason) {
        let counter = match reason {
            DropReason::NoActiveSink => &self.dropped_no_sink,
            DropReason::UnmonitoredSource => &self.dropped_unmonitored,
            DropReason::NotTransaction => &self.dropped_not_transaction,
            DropReason::SinkCleared => &self.dropped_sink_cleared,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_classified(&self) {
        self.transactions_classified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_emitted(&self) {
        self.events_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_permission_denied(&self) {
        self.permission_denials.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            notifications_received: self.notifications_received.load(Ordering::Relaxed),
            dropped_no_sink: self.dropped_no_sink.load(Ordering::Relaxed),
            dropped_unmonitored: self.dropped_unmonitored.load(Ordering::Relaxed),
            dropped_not_transaction: self.dropped_not_transaction.load(Ordering::Relaxed),
            transactions_classified: self.transactions_classified.load(Ordering::Relaxed),
            dropped_sink_cleared: self.dropped_sink_cleared.load(Ordering::Relaxed),
            events_emitted: self.events_emitted.load(Ordering::Relaxed),
            permission_denials: self.permission_denials.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub notifications_received: u64,
    pub dropped_no_sink: u64,
    pub dropped_unmonitored: u64,
    pub dropped_not_transaction: u64,
    pub transactions_classified: u64,
    pub dropped_sink_cleared: u64,
    pub events_emitted: u64,
    pub permission_denials: u64,
}

impl MetricsSnapshot {
    /// Total notifications that did not reach a sink.
    pub fn total_dropped(&self) -> u64 {
        self.dropped_no_sink
            + self.dropped_unmonitored
            + self.dropped_not_transaction
            + self.dropped_sink_cleared
    }
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_received(&self);
    fn record_dropped(&self, reason: DropReason);
    /// A notification passed classification and is about to be emitted.
    fn record_classified(&self);
    fn record_emitted(&self);
    fn record_permission_denied(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_received(&self) {}
    fn record_dropped(&self, _: DropReason) {}
    fn record_classified(&self) {}
    fn record_emitted(&self) {}
    fn record_permission_denied(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_received(&self) {
        Metrics::record_received(self);
    }

    fn record_dropped(&self, reason: DropReason) {
        Metrics::record_dropped(self, reason);
    }

    fn record_classified(&self) {
        Metrics::record_classified(self);
    }

    fn record_emitted(&self) {
        Metrics::record_emitted(self);
    }

    fn record_permission_denied(&self) {
        Metrics::record_permission_denied(self);
    }
}
