//! Order-test endpoint adapter
//!
//! This module provides the integration with the order-test REST endpoint:
//! the [`OrderTestSource`] seam, its HTTP implementation, and the response
//! models.

pub mod http;
pub mod models;
pub mod source;

pub use http::{build_query_url, HttpOrderTestSource, END_PARAM, START_PARAM};
pub use models::{OrderTestEnvelope, OrderTestResponse};
pub use source::OrderTestSource;
