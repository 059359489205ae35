//! Core logic of the order-test viewer.
//!
//! # Modules
//!
//! - [`fetcher`] - Range selection, fetch lifecycle and display state
//! - [`paginator`] - Page math and page-control layout
//! - [`table`] - Fixed-schema table rendering
//! - [`view`] - Full view composition (error slot, states, table, controls)
//! - [`clock`] / [`notify`] - Injected capabilities
//!
//! # Example
//!
//! ```rust,no_run
//! use ordertests::adapters::orders::HttpOrderTestSource;
//! use ordertests::config::EndpointConfig;
//! use ordertests::core::{render_view, LogNotifier, OrderTestRangeFetcher, SystemClock, ViewFormat};
//! use ordertests::domain::DateRange;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpOrderTestSource::new(&EndpointConfig::default())?;
//! let mut fetcher = OrderTestRangeFetcher::new(
//!     Arc::new(source),
//!     Arc::new(SystemClock),
//!     Arc::new(LogNotifier),
//! );
//!
//! fetcher
//!     .select_and_fetch(DateRange::parse("2023-01-01", "2023-01-07")?)
//!     .await?;
//! fetcher.select_page(1);
//!
//! print!("{}", render_view(&fetcher, ViewFormat::Text));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod fetcher;
pub mod notify;
pub mod paginator;
pub mod table;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fetcher::{DisplayState, FetchOutcome, FetchRequest, OrderTestRangeFetcher};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use paginator::{PageControl, Paginator, PAGE_SIZE};
pub use table::{Column, TableRenderer, TableRow, COLUMN_COUNT};
pub use view::{render_view, ViewFormat, EMPTY_MESSAGE, LOADING_MESSAGE};
