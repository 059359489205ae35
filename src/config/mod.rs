//! Configuration management for the order-test viewer.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `ORDERTESTS_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`EndpointConfig`] - Order-test endpoint URL and timeout
//! - [`PaginationConfig`] - Page-control layout and page reset behaviour
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [endpoint]
//! base_url = "https://biostatistics.salud.pr.gov/orders/tests/covid-19/minimal"
//!
//! [pagination]
//! reset_on_new_data = false
//! margin_pages = 2
//! page_range = 5
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, EndpointConfig, LoggingConfig, PaginationConfig, ViewerConfig,
    DEFAULT_BASE_URL,
};
