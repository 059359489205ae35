//! Order-test source trait definition
//!
//! `OrderTestSource` abstracts where order-test records come from, so the
//! range fetcher can run against the HTTP endpoint in production and an
//! in-memory source in tests.

use crate::domain::{FetchError, OrderTestRecord, ValidRange};
use async_trait::async_trait;

/// Trait for order-test record sources
///
/// # Example
///
/// ```no_run
/// use ordertests::adapters::orders::{HttpOrderTestSource, OrderTestSource};
/// use ordertests::config::EndpointConfig;
/// use ordertests::domain::DateRange;
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpOrderTestSource::new(&EndpointConfig::default())?;
/// let range = DateRange::parse("2023-01-01", "2023-01-07")?
///     .validate(Utc::now())?
///     .expect("both bounds set");
///
/// let records = source.fetch_range(&range).await?;
/// println!("Fetched {} order tests", records.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait OrderTestSource: Send + Sync {
    /// Fetch every record whose sample was collected within `range`
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for transport failures, non-success
    /// statuses, and bodies that cannot be decoded.
    async fn fetch_range(&self, range: &ValidRange)
        -> Result<Vec<OrderTestRecord>, FetchError>;

    /// Where records are fetched from, for logging
    fn base_url(&self) -> &str;
}
