//! # Listener Telemetry
//!
//! Structured logging for the bank notification listener.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use listener_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NL_SERVICE_NAME` | `bank-notification-listener` | Service name in logs |
//! | `NL_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `NL_CONSOLE_OUTPUT` | `true` | Write logs to the console |
//! | `NL_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
