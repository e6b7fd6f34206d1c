//! Notification records flowing through the pipeline

use serde::{Deserialize, Serialize};

/// A notification as delivered by the host OS.
///
/// The host may post notifications with no text content at all; `title` and
/// `body` are `None` in that case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotification {
    /// Package id of the app that posted the notification
    pub source_package_id: String,
    /// Title text, if any
    #[serde(default)]
    pub title: Option<String>,
    /// Body text, if any
    #[serde(default)]
    pub body: Option<String>,
    /// Post time reported by the host, in epoch milliseconds
    pub posted_at_epoch_millis: i64,
}

impl RawNotification {
    /// Create a notification with no text content.
    pub fn new(source_package_id: impl Into<String>, posted_at_epoch_millis: i64) -> Self {
        Self {
            source_package_id: source_package_id.into(),
            title: None,
            body: None,
            posted_at_epoch_millis,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Title text, empty when the host supplied none.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Body text, empty when the host supplied none.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// A notification accepted as a financial transaction.
///
/// Serializes to the `notificationReceived` payload:
/// `{ title, body, packageName, timestamp }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Original-case title
    pub title: String,
    /// Original-case body
    pub body: String,
    /// Package id of the posting app
    #[serde(rename = "packageName")]
    pub source_package_id: String,
    /// Host post time, epoch milliseconds
    pub timestamp: i64,
}

/// Why a notification did not reach a sink.
///
/// None of these are errors. They exist for debug logging and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// No sink attached when the notification arrived
    NoActiveSink,
    /// Posting app is not a monitored bank
    UnmonitoredSource,
    /// Text contains no transaction keyword
    NotTransaction,
    /// The sink was detached while the notification was being classified
    SinkCleared,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::NoActiveSink => "no_active_sink",
            DropReason::UnmonitoredSource => "unmonitored_source",
            DropReason::NotTransaction => "not_transaction",
            DropReason::SinkCleared => "sink_cleared",
        }
    }
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_text_reads_as_empty() {
        let raw = RawNotification::new("com.bradesco", 1);
        assert_eq!(raw.title_text(), "");
        assert_eq!(raw.body_text(), "");
    }

    #[test]
    fn test_deserialize_without_text_fields() {
        let raw: RawNotification = serde_json::from_value(json!({
            "sourcePackageId": "com.nu.production",
            "postedAtEpochMillis": 1_700_000_000_000_i64
        }))
        .unwrap();
        assert_eq!(raw.title, None);
        assert_eq!(raw.body, None);
    }

    #[test]
    fn test_event_payload_shape() {
        let event = TransactionEvent {
            title: "Compra aprovada".into(),
            body: "R$ 45,00".into(),
            source_package_id: "com.nu.production".into(),
            timestamp: 42,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "title": "Compra aprovada",
                "body": "R$ 45,00",
                "packageName": "com.nu.production",
                "timestamp": 42
            })
        );
    }
}
