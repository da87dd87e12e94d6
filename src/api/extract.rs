//! Request-scoped context and body decoding for handlers.

use std::convert::Infallible;
use std::fmt;

use axum::body::Bytes;
use axum::extract::FromRequestParts;
use axum::extract::rejection::BytesRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::{Span, error};

use crate::api::middleware::request_id::REQUEST_ID_HEADER;
use crate::error::AppError;

/// Correlation identifier of the current request.
///
/// Populated from the `x-request-id` header assigned by
/// [`crate::api::middleware::request_id::set_layer`]. Falls back to `-` when the
/// header is missing so handlers can run outside the full router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Opens the logging span for one handler invocation.
    ///
    /// Every log line the handler emits inside this span carries the handler
    /// name and this request id.
    pub fn span(&self, handler: &'static str) -> Span {
        tracing::info_span!("handler", handler, request_id = %self.0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(&REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .unwrap_or("-");

        Ok(Self(id.to_string()))
    }
}

/// Decodes a JSON request body.
///
/// The `Content-Type` header is not consulted: any body that parses as `T` is
/// accepted, so `curl -d '{...}'` without `-H` works.
///
/// # Errors
///
/// [`AppError::Decode`] when the body cannot be read or is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, AppError> {
    let bytes = body.map_err(|e| {
        error!(error = %e, "failed to read request body");
        AppError::Decode
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!(error = %e, "failed to decode request body");
        AppError::Decode
    })
}
