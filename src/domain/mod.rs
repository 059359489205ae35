//! Domain models and types for the order-test viewer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderTestId`], [`PatientId`])
//! - **Records** ([`OrderTestRecord`])
//! - **Date ranges** ([`DateRange`], [`ValidRange`], [`RangeError`])
//! - **Error types** ([`ViewerError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Date ranges
//!
//! Only a validated range can be fetched:
//!
//! ```rust
//! use ordertests::domain::DateRange;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let range = DateRange::parse("2023-01-01", "2023-01-08").unwrap();
//! let valid = range.validate(now).unwrap().expect("range is complete");
//! assert_eq!(valid.start_iso(), "2023-01-01T00:00:00.000Z");
//! ```

pub mod errors;
pub mod ids;
pub mod range;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{FetchError, ViewerError};
pub use ids::{OrderTestId, PatientId};
pub use order_test::OrderTestRecord;
pub use range::{parse_bound, DateRange, RangeError, ValidRange, MAX_RANGE_DAYS};
pub use result::Result;
