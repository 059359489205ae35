//! Fetch command implementation
//!
//! This module implements the `fetch` command: fetch one date range and
//! print a single page of the result.

use crate::adapters::orders::HttpOrderTestSource;
use crate::config::{load_config_or_default, ViewerConfig};
use crate::core::{render_view, LogNotifier, OrderTestRangeFetcher, SystemClock, ViewFormat};
use crate::domain::DateRange;
use clap::{Args, ValueEnum};
use std::sync::Arc;

/// Output format for rendered pages
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// HTML fragment
    Html,
    /// JSON array of the page's records
    Json,
}

impl OutputFormat {
    pub(crate) fn view_format(self) -> ViewFormat {
        match self {
            OutputFormat::Html => ViewFormat::Html,
            OutputFormat::Text | OutputFormat::Json => ViewFormat::Text,
        }
    }
}

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Range start (YYYY-MM-DD or RFC 3339 timestamp)
    #[arg(long)]
    pub start: String,

    /// Range end (YYYY-MM-DD or RFC 3339 timestamp), at most 7 days after start
    #[arg(long)]
    pub end: String,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the endpoint base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

impl FetchArgs {
    /// Execute the fetch command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(start = %self.start, end = %self.end, "Starting fetch command");

        let config = match load_with_override(config_path, self.base_url.as_deref()) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let source = match HttpOrderTestSource::new(&config.endpoint) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to initialize order-test client: {e}");
                return Ok(2);
            }
        };

        let mut fetcher = OrderTestRangeFetcher::new(
            Arc::new(source),
            Arc::new(SystemClock),
            Arc::new(LogNotifier),
        )
        .with_pagination(&config.pagination);

        let range = match DateRange::parse(&self.start, &self.end) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Invalid range: {e}");
                return Ok(3);
            }
        };

        if let Err(e) = fetcher.select_and_fetch(range).await {
            eprintln!("Invalid range: {e}");
            return Ok(3); // Range validation exit code
        }

        if let Some(error) = fetcher.last_fetch_error() {
            eprintln!("Failed to fetch order tests: {error}");
            return Ok(4); // Connection error exit code
        }

        fetcher.select_page(self.page.saturating_sub(1));

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(fetcher.visible_records())?);
            }
            format => print!("{}", render_view(&fetcher, format.view_format())),
        }

        Ok(0)
    }
}

/// Loads configuration and applies a base-URL override
///
/// Prints the problem and returns the configuration-error exit code on
/// failure.
pub(crate) fn load_with_override(
    config_path: &str,
    base_url: Option<&str>,
) -> Result<ViewerConfig, i32> {
    let mut config = match load_config_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(2);
        }
    };

    if let Some(url) = base_url {
        tracing::info!(base_url = %url, "Overriding endpoint base URL from CLI");
        config.endpoint.base_url = url.to_string();
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        eprintln!("Configuration validation failed: {e}");
        return Err(2);
    }

    Ok(config)
}
