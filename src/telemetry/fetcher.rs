use crate::config::DashboardConfig;
use crate::telemetry::error::FetchError;
use crate::telemetry::payload::parse_payload;
use crate::types::reading::Reading;
use bon::bon;
use log::{error, info, warn};
use reqwest::{Client, Url};

/// Issues the telemetry GET and turns the response into readings.
#[derive(Debug, Clone)]
pub struct TelemetryFetcher {
    endpoint: Url,
    client: Client,
}

#[bon]
impl TelemetryFetcher {
    /// Creates a fetcher for `endpoint`, optionally reusing an existing `reqwest` client.
    #[builder]
    pub fn new(endpoint: Url, client: Option<Client>) -> Self {
        Self {
            endpoint,
            client: client.unwrap_or_default(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::builder().endpoint(config.endpoint.clone()).build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the devices payload and flattens it, in payload order.
    ///
    /// # Errors
    ///
    /// [`FetchError::NetworkRequest`] if the request cannot be sent,
    /// [`FetchError::HttpStatus`] for non-success responses,
    /// [`FetchError::BodyRead`] if the body cannot be read, and
    /// [`FetchError::MalformedPayload`] if it does not have the expected shape.
    pub async fn fetch_readings(&self) -> Result<Vec<Reading>, FetchError> {
        let url = self.endpoint.to_string();
        info!("Fetching telemetry from {}", url);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::BodyRead(url.clone(), e))?;
        let readings =
            parse_payload(&body).map_err(|e| FetchError::MalformedPayload(url.clone(), e))?;
        info!("Received {} readings from {}", readings.len(), url);
        Ok(readings)
    }

    /// Like [`fetch_readings`](Self::fetch_readings), but any failure is logged and
    /// yields an empty list instead of an error.
    pub async fn load_readings(&self) -> Vec<Reading> {
        match self.fetch_readings().await {
            Ok(readings) => readings,
            Err(e) => {
                error!("Error fetching data: {}", error_chain(&e));
                Vec::new()
            }
        }
    }
}

/// Renders an error together with its sources, outermost first.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::payload::tests::TWO_DEVICES;
    use crate::test_support::{local_client, refused_url, serve_once};
    use std::time::Duration;

    #[tokio::test]
    async fn fetches_and_flattens() {
        let url = serve_once("200 OK", TWO_DEVICES, Duration::ZERO).await;
        let fetcher = TelemetryFetcher::builder().endpoint(url).client(local_client()).build();
        let readings = fetcher.fetch_readings().await.unwrap();
        assert_eq!(readings.len(), 4);
    }

    #[tokio::test]
    async fn http_status_is_reported() {
        let url = serve_once("503 Service Unavailable", "[]", Duration::ZERO).await;
        let fetcher = TelemetryFetcher::builder().endpoint(url).client(local_client()).build();
        let err = fetcher.fetch_readings().await.unwrap_err();
        match err {
            FetchError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_reported() {
        let url = serve_once("200 OK", r#"{"error": "nope"}"#, Duration::ZERO).await;
        let fetcher = TelemetryFetcher::builder().endpoint(url).client(local_client()).build();
        let err = fetcher.fetch_readings().await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(..)));
    }

    #[tokio::test]
    async fn network_failure_loads_nothing() {
        let fetcher = TelemetryFetcher::builder()
            .endpoint(refused_url().await)
            .client(local_client())
            .build();
        let err = fetcher.fetch_readings().await.unwrap_err();
        assert!(matches!(err, FetchError::NetworkRequest(..)));

        // The swallowing boundary turns the same failure into an empty list
        assert!(fetcher.load_readings().await.is_empty());
    }

    #[test]
    fn error_chain_includes_sources() {
        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::MalformedPayload("http://host/".to_string(), parse);
        let message = error_chain(&err);
        assert!(message.starts_with("Unexpected telemetry payload from http://host/: "));
    }
}
