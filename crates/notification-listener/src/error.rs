//! Error types for the notification listener

use thiserror::Error;

/// Errors reported to direct callers of the listener's control operations.
///
/// Conditions on the delivery path (missing text, no attached sink, a sink
/// cleared mid-flight) are not errors; they are absorbed and recorded as a
/// [`DropReason`](crate::domain::DropReason).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("Notification access permission not granted")]
    PermissionDenied,

    #[error("Method not implemented: {0}")]
    UnknownMethod(String),
}

/// Result type for listener operations
pub type ListenerResult<T> = Result<T, ListenerError>;
