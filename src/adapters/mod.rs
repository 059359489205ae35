//! External system integrations.
//!
//! - [`orders`] - Order-test REST endpoint
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the core
//! component can be exercised with in-memory implementations.
//!
//! ```rust,no_run
//! use ordertests::adapters::orders::HttpOrderTestSource;
//! use ordertests::config::EndpointConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EndpointConfig {
//!     base_url: "https://orders.example.com/orders/tests/covid-19/minimal".to_string(),
//!     timeout_seconds: Some(30),
//! };
//!
//! let source = HttpOrderTestSource::new(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod orders;
