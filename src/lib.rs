// Ordertests - COVID-19 order-test viewer
// Copyright (c) 2025 Ordertests Contributors
// Licensed under the MIT License

//! # Ordertests - COVID-19 order-test viewer
//!
//! Fetches COVID-19 order-test records for a date range of at most seven
//! days from a public statistics endpoint and presents them as a paginated
//! fixed-schema table.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Range fetcher, paginator, table and view rendering
//! - [`adapters`] - The HTTP order-test source
//! - [`domain`] - Records, date ranges, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ordertests::adapters::orders::HttpOrderTestSource;
//! use ordertests::config::load_config_or_default;
//! use ordertests::core::{LogNotifier, OrderTestRangeFetcher, SystemClock};
//! use ordertests::domain::DateRange;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("ordertests.toml")?;
//!     let source = HttpOrderTestSource::new(&config.endpoint)?;
//!
//!     let mut fetcher = OrderTestRangeFetcher::new(
//!         Arc::new(source),
//!         Arc::new(SystemClock),
//!         Arc::new(LogNotifier),
//!     )
//!     .with_pagination(&config.pagination);
//!
//!     fetcher
//!         .select_and_fetch(DateRange::parse("2023-01-01", "2023-01-07")?)
//!         .await?;
//!
//!     println!("{} order tests on {} pages", fetcher.records().len(), fetcher.page_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Overlapping fetches
//!
//! [`core::OrderTestRangeFetcher::select_range`] returns a detached
//! [`core::FetchRequest`]. Interactive callers send it on a task of their own
//! and hand the outcome back through [`core::OrderTestRangeFetcher::apply`];
//! whichever outcome is applied last determines the displayed records.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
