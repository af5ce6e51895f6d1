//! HTTP request/response types and error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error_handling::{BatchError, SinkError};

/// Body of `POST /scrape`.
///
/// Exactly one of `raw_text`/`urls` is expected to supply inputs; a non-empty
/// `urls` list takes precedence over the pasted text.
#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    /// Freeform pasted text: URLs/paths separated by newlines, commas, tabs,
    /// semicolons, or whitespace.
    #[serde(default)]
    pub raw_text: Option<String>,

    /// Explicit URL/path list; entries are trimmed and blanks dropped.
    #[serde(default)]
    pub urls: Option<Vec<String>>,

    /// Skip links found inside `<header>`, `<footer>`, and `<nav>`.
    #[serde(default)]
    pub ignore_header_footer: bool,
}

/// Success body of `POST /scrape`.
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    /// Always `true` on the success path; partial failures are warnings.
    pub ok: bool,
    /// Deduplicated raw inputs accepted into the batch.
    pub input_count: usize,
    /// Inputs that normalized to a canonical URL.
    pub normalized_count: usize,
    /// One human-readable warning per failed normalization or fetch.
    pub errors: Vec<String>,
}

/// Fatal request outcomes, each mapped to a distinct status code.
#[derive(Debug)]
pub enum ApiError {
    /// Deduplicated input count outside `[1, 150]`.
    BadBatchSize(String),
    /// Every input failed normalization.
    NoValidInputs(Vec<String>),
    /// The sink rejected the write or could not be reached.
    Sink(SinkError),
}

impl From<BatchError> for ApiError {
    fn from(e: BatchError) -> Self {
        match e {
            BatchError::BadBatchSize { .. } => ApiError::BadBatchSize(e.to_string()),
            BatchError::NoValidInputs { errors } => ApiError::NoValidInputs(errors),
        }
    }
}

impl From<SinkError> for ApiError {
    fn from(e: SinkError) -> Self {
        ApiError::Sink(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadBatchSize(detail) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": detail }),
            ),
            ApiError::NoValidInputs(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "ok": false,
                    "error": "No valid URLs/paths for the target site.",
                    "errors": errors,
                }),
            ),
            ApiError::Sink(SinkError::Configuration(name)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "ok": false, "error": format!("Server misconfigured: missing {name}") }),
            ),
            ApiError::Sink(e) => (
                StatusCode::BAD_GATEWAY,
                json!({ "ok": false, "error": format!("Failed to publish results: {e}") }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};

    #[test]
    fn test_bad_batch_size_maps_to_400() {
        let err: ApiError = BatchError::BadBatchSize {
            got: 151,
            min: MIN_BATCH_SIZE,
            max: MAX_BATCH_SIZE,
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_valid_inputs_maps_to_422() {
        let err: ApiError = BatchError::NoValidInputs {
            errors: vec!["x -> bad".to_string()],
        }
        .into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_missing_configuration_maps_to_500() {
        let err: ApiError = SinkError::Configuration("GSHEETS_SPREADSHEET_ID".into()).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_sink_write_failure_maps_to_502() {
        let err: ApiError = SinkError::Api(StatusCode::FORBIDDEN).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_scrape_request_defaults() {
        let req: ScrapeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.raw_text.is_none());
        assert!(req.urls.is_none());
        assert!(!req.ignore_header_footer);
    }

    #[test]
    fn test_scrape_response_shape() {
        let body = serde_json::to_value(ScrapeResponse {
            ok: true,
            input_count: 3,
            normalized_count: 2,
            errors: vec!["warning".to_string()],
        })
        .unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["input_count"], 3);
        assert_eq!(body["normalized_count"], 2);
        assert_eq!(body["errors"][0], "warning");
    }
}
