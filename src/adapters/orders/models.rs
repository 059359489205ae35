//! Order-test endpoint response models
//!
//! The endpoint has been observed answering in two shapes: a bare JSON
//! array of records, or an object carrying the array under `orderTests`
//! (some deployments call the field `records`). Both decode to the same
//! record list; anything else is an invalid response.

use crate::domain::{FetchError, OrderTestRecord};
use serde::Deserialize;

/// Order-test response body
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderTestResponse {
    /// `[ {...}, {...} ]`
    Bare(Vec<OrderTestRecord>),

    /// `{ "orderTests": [ {...} ] }`
    Wrapped(OrderTestEnvelope),
}

/// Object form of the response
#[derive(Debug, Clone, Deserialize)]
pub struct OrderTestEnvelope {
    #[serde(rename = "orderTests", alias = "records")]
    pub order_tests: Vec<OrderTestRecord>,
}

impl OrderTestResponse {
    /// Decodes a response body
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidResponse`] if the body is not JSON or
    /// matches neither response shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(body).map_err(|e| {
            FetchError::InvalidResponse(format!(
                "expected an array of order tests or an object with an 'orderTests' array: {e}"
            ))
        })
    }

    /// The records, whichever shape carried them
    pub fn into_records(self) -> Vec<OrderTestRecord> {
        match self {
            OrderTestResponse::Bare(records) => records,
            OrderTestResponse::Wrapped(envelope) => envelope.order_tests,
        }
    }
}
