//! HTTP order-test source
//!
//! Issues a single GET per range against the configured endpoint. There is
//! no retry and, unless `endpoint.timeout_seconds` is set, no timeout.

use super::models::OrderTestResponse;
use super::source::OrderTestSource;
use crate::config::EndpointConfig;
use crate::domain::{FetchError, OrderTestRecord, Result, ValidRange, ViewerError};
use crate::{log_fetch_complete, log_fetch_start};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use url::Url;

/// Query parameter carrying the range start
pub const START_PARAM: &str = "sampleCollectedStartDate";

/// Query parameter carrying the range end
pub const END_PARAM: &str = "sampleCollectedEndDate";

/// reqwest-backed [`OrderTestSource`]
///
/// # Example
///
/// ```no_run
/// use ordertests::adapters::orders::HttpOrderTestSource;
/// use ordertests::config::EndpointConfig;
///
/// # fn example() -> ordertests::domain::Result<()> {
/// let source = HttpOrderTestSource::new(&EndpointConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub struct HttpOrderTestSource {
    base_url: Url,
    client: Client,
}

impl HttpOrderTestSource {
    /// Create a new HTTP source from endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ViewerError::Configuration(format!(
                "Invalid endpoint base URL '{}': {e}",
                config.base_url
            ))
        })?;

        let mut client_builder = ClientBuilder::new();
        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        let client = client_builder.build().map_err(|e| {
            ViewerError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { base_url, client })
    }

    /// URL requested for `range`
    pub fn query_url(&self, range: &ValidRange) -> Url {
        build_query_url(&self.base_url, range)
    }
}

/// Appends the range bounds to `base` as ISO-8601 query parameters
///
/// Existing query parameters on the base URL are kept.
pub fn build_query_url(base: &Url, range: &ValidRange) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(START_PARAM, &range.start_iso())
        .append_pair(END_PARAM, &range.end_iso());
    url
}

#[async_trait]
impl OrderTestSource for HttpOrderTestSource {
    async fn fetch_range(
        &self,
        range: &ValidRange,
    ) -> std::result::Result<Vec<OrderTestRecord>, FetchError> {
        let url = self.query_url(range);
        log_fetch_start!(url, range);
        let started = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(e.to_string())
            } else {
                FetchError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        let records = OrderTestResponse::from_slice(&body)?.into_records();
        log_fetch_complete!(records.len(), started.elapsed());
        Ok(records)
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;

    fn january_range() -> ValidRange {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        DateRange::parse("2023-01-01", "2023-01-08")
            .unwrap()
            .validate(now)
            .unwrap()
            .unwrap()
    }

    fn source_for(url: String) -> HttpOrderTestSource {
        let config = EndpointConfig {
            base_url: url,
            timeout_seconds: Some(5),
        };
        HttpOrderTestSource::new(&config).unwrap()
    }

    #[test]
    fn test_query_url_contains_iso_bounds() {
        let base = Url::parse("https://orders.example.com/covid-19/minimal").unwrap();
        let url = build_query_url(&base, &january_range());

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (START_PARAM.to_string(), "2023-01-01T00:00:00.000Z".to_string()),
                (END_PARAM.to_string(), "2023-01-08T00:00:00.000Z".to_string()),
            ]
        );
        assert_eq!(url.path(), "/covid-19/minimal");
    }

    #[test]
    fn test_query_url_keeps_existing_params() {
        let base = Url::parse("https://orders.example.com/tests?format=minimal").unwrap();
        let url = build_query_url(&base, &january_range());
        assert_eq!(url.query_pairs().count(), 3);
        assert!(url.as_str().contains("format=minimal"));
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = EndpointConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: None,
        };
        assert!(matches!(
            HttpOrderTestSource::new(&config),
            Err(ViewerError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_range_bare_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(START_PARAM.into(), "2023-01-01T00:00:00.000Z".into()),
                Matcher::UrlEncoded(END_PARAM.into(), "2023-01-08T00:00:00.000Z".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"orderTestId": "OT-1", "orderTestResult": "Positive"}]"#)
            .expect(1)
            .create_async()
            .await;

        let source = source_for(format!("{}/orders", server.url()));
        let records = source.fetch_range(&january_range()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_test_result.as_deref(), Some("Positive"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_range_wrapped_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"orderTests": [{"orderTestId": "A"}, {"orderTestId": "B"}]}"#)
            .create_async()
            .await;

        let source = source_for(format!("{}/orders", server.url()));
        let records = source.fetch_range(&january_range()).await.unwrap();

        assert_eq!(records.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_range_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let source = source_for(format!("{}/orders", server.url()));
        let err = source.fetch_range(&january_range()).await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_range_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/orders")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let source = source_for(format!("{}/orders", server.url()));
        let err = source.fetch_range(&january_range()).await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_range_connection_refused() {
        let source = source_for("http://127.0.0.1:1/orders".to_string());
        let err = source.fetch_range(&january_range()).await.unwrap_err();

        assert!(matches!(
            err,
            FetchError::ConnectionFailed(_) | FetchError::Timeout(_)
        ));
    }
}
