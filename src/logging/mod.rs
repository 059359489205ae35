//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use ordertests::logging::init_logging;
//! use ordertests::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an order-test fetch
///
/// # Example
///
/// ```no_run
/// use ordertests::log_fetch_start;
///
/// let url = "https://orders.example.com/tests";
/// let range = "2023-01-01 .. 2023-01-07";
/// log_fetch_start!(url, range);
/// ```
#[macro_export]
macro_rules! log_fetch_start {
    ($url:expr, $range:expr) => {
        tracing::info!(
            url = %$url,
            range = %$range,
            "Fetching order tests"
        );
    };
}

/// Log the completion of an order-test fetch
///
/// # Example
///
/// ```no_run
/// use ordertests::log_fetch_complete;
/// use std::time::Duration;
///
/// log_fetch_complete!(23, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_fetch_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Order tests fetched"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use ordertests::log_error_with_context;
/// use ordertests::domain::FetchError;
///
/// let error = FetchError::ConnectionFailed("refused".to_string());
/// log_error_with_context!(&error, "Order-test fetch failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
