//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Notification and event records
//! - The monitored package allow-list
//! - The transaction keyword set
//! - The classifier
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No shared state

pub mod classifier;
pub mod keywords;
pub mod notification;
pub mod packages;

pub use classifier::{classify, evaluate};
pub use keywords::{is_transaction_text, TRANSACTION_KEYWORDS};
pub use notification::{DropReason, RawNotification, TransactionEvent};
pub use packages::{is_monitored_package, MONITORED_PACKAGES};
