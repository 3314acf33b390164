//! HTTP record source backed by `reqwest`

use std::time::Duration;

use log::{debug, info};
use serde_json::Value;

use crate::error::ExtractionError;
use crate::extract::{ExtractRequest, RawBatch, RecordSource};

/// Record source reached over HTTP, e.g. `https://randomuser.me/api/`
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecordSource {
    /// Build a source with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ExtractionError> {
        let endpoint = endpoint.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ExtractionError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch(&self, request: &ExtractRequest) -> Result<RawBatch, ExtractionError> {
        let transport = |source| ExtractionError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };

        debug!(
            "GET {} results={} seed={}",
            self.endpoint,
            request.results(),
            request.seed()
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&request.query())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ExtractionError::MalformedPayload(e.to_string()))?;

        let batch = RawBatch::from_response(body)?;
        info!("Extracted {} users from {}", batch.len(), self.endpoint);
        Ok(batch)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
