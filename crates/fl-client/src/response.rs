//! HTTP response handling and error-body classification.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?;
        value.parse::<u64>().ok().map(Duration::from_secs)
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// Decoding goes through `serde_json` directly so that shape mismatches
    /// surface as `ErrorKind::Json` rather than an opaque transport error.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await.map_err(Error::from)?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Extension trait for classifying Salesforce API responses.
pub trait ResponseExt {
    /// Check for an error response and convert it to a structured error.
    fn check_api_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_api_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Classify a non-2xx response into an error kind.
///
/// 404 wins over structured-body parsing so callers can always branch on
/// "does not exist" distinctly, even though Salesforce wraps 404s in the
/// same `[{errorCode, message}]` body shape as validation failures.
fn parse_error_response(status: u16, body: &str) -> Error {
    if status == 404 {
        let message = first_structured_message(body).unwrap_or_else(|| body.to_string());
        return Error::new(ErrorKind::NotFound(message));
    }

    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after: None });
    }

    // Structured field-level errors (array format, occasionally a bare object)
    if let Some(err) = parse_structured_error(body) {
        return Error::new(ErrorKind::Api {
            error_code: err.error_code,
            message: err.message,
            fields: err.fields.unwrap_or_default(),
        });
    }

    Error::new(ErrorKind::Http {
        status,
        message: body.to_string(),
    })
}

fn parse_structured_error(body: &str) -> Option<ApiErrorResponse> {
    if let Ok(errors) = serde_json::from_str::<Vec<ApiErrorResponse>>(body) {
        return errors.into_iter().next();
    }
    serde_json::from_str::<ApiErrorResponse>(body).ok()
}

fn first_structured_message(body: &str) -> Option<String> {
    parse_structured_error(body).map(|e| e.message)
}

/// Salesforce API error response format.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(alias = "errorCode")]
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}
