//! Extractor: obtains a raw batch of user records from a record source.
//!
//! A batch is either non-empty or a typed failure; there is no half-built
//! response for downstream stages to stumble over.

pub mod http;

use std::future::Future;

use serde_json::Value;

use crate::error::ExtractionError;

pub use http::HttpRecordSource;

/// Parameters of a single extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    results: usize,
    seed: String,
}

impl ExtractRequest {
    /// Validate and build a request. The count must be positive.
    pub fn new(results: usize, seed: impl Into<String>) -> Result<Self, ExtractionError> {
        if results == 0 {
            return Err(ExtractionError::InvalidCount(results));
        }
        Ok(Self {
            results,
            seed: seed.into(),
        })
    }

    #[must_use]
    pub fn results(&self) -> usize {
        self.results
    }

    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Query parameters sent to the record source
    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 3] {
        [
            ("results", self.results.to_string()),
            ("seed", self.seed.clone()),
            ("format", "json".to_string()),
        ]
    }
}

/// A non-empty, ordered batch of raw record objects
#[derive(Debug, Clone)]
pub struct RawBatch {
    records: Vec<Value>,
}

impl RawBatch {
    /// Interpret a decoded response body.
    ///
    /// Accepts `{"results": [...]}` with at least one element. An `error`
    /// member reported by the service is surfaced as a service failure.
    pub fn from_response(body: Value) -> Result<Self, ExtractionError> {
        let Value::Object(mut body) = body else {
            return Err(ExtractionError::MalformedPayload(
                "response is not a JSON object".to_string(),
            ));
        };

        if let Some(error) = body.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(ExtractionError::Service(message));
        }

        match body.remove("results") {
            Some(Value::Array(records)) if records.is_empty() => Err(ExtractionError::Empty),
            Some(Value::Array(records)) => Ok(Self { records }),
            Some(_) => Err(ExtractionError::MalformedPayload(
                "`results` is not an array".to_string(),
            )),
            None => Err(ExtractionError::MalformedPayload(
                "missing `results` member".to_string(),
            )),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed batch
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Something that can produce raw user records on request
pub trait RecordSource {
    /// Fetch one batch. Same seed and count should yield the same sequence;
    /// that is the source's contract, not verified here.
    fn fetch(
        &self,
        request: &ExtractRequest,
    ) -> impl Future<Output = Result<RawBatch, ExtractionError>> + Send;

    /// Human readable location for logs and reports
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_count_is_rejected() {
        assert!(matches!(
            ExtractRequest::new(0, "1234"),
            Err(ExtractionError::InvalidCount(0))
        ));
    }

    #[test]
    fn test_query_parameters() {
        let request = ExtractRequest::new(200, "1234").unwrap();
        let query = request.query();
        assert_eq!(query[0], ("results", "200".to_string()));
        assert_eq!(query[1], ("seed", "1234".to_string()));
        assert_eq!(query[2], ("format", "json".to_string()));
    }

    #[test]
    fn test_empty_results_is_distinct_failure() {
        let err = RawBatch::from_response(json!({ "results": [] })).unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[test]
    fn test_service_error_member() {
        let err = RawBatch::from_response(json!({ "error": "Uh oh" })).unwrap_err();
        assert!(matches!(err, ExtractionError::Service(msg) if msg == "Uh oh"));
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            RawBatch::from_response(json!([1, 2])),
            Err(ExtractionError::MalformedPayload(_))
        ));
        assert!(matches!(
            RawBatch::from_response(json!({ "info": {} })),
            Err(ExtractionError::MalformedPayload(_))
        ));
        assert!(matches!(
            RawBatch::from_response(json!({ "results": "x" })),
            Err(ExtractionError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch =
            RawBatch::from_response(json!({ "results": [{ "n": 1 }, { "n": 2 }] })).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[1]["n"], 2);
    }
}
