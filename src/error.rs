//! Errors returned by HTTP handlers and their JSON rendering.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::response::StatusResponse;

/// User-facing handler failure.
///
/// The display string is exactly what the client sees in the `error` field.
/// Storage failures are collapsed into the operation-level variants
/// ([`AppError::SaveFailed`], [`AppError::DeleteFailed`], [`AppError::Internal`])
/// after the handler has logged the underlying cause.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("failed to decode request")]
    Decode,

    #[error("invalid request")]
    Validation,

    #[error("alias is empty")]
    EmptyAlias,

    #[error("failed to add url")]
    SaveFailed,

    #[error("failed to delete url")]
    DeleteFailed,

    #[error("internal error")]
    Internal,

    #[error("unauthorized")]
    Unauthorized,
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Handler failures keep `200 OK` so clients only see the envelope's
    /// `status` field; authentication is the one exception.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(StatusResponse::error(self.to_string()))).into_response();

        if self == AppError::Unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="url-alias""#),
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(AppError::Decode.to_string(), "failed to decode request");
        assert_eq!(AppError::Validation.to_string(), "invalid request");
        assert_eq!(AppError::EmptyAlias.to_string(), "alias is empty");
        assert_eq!(AppError::SaveFailed.to_string(), "failed to add url");
        assert_eq!(AppError::DeleteFailed.to_string(), "failed to delete url");
        assert_eq!(AppError::Internal.to_string(), "internal error");
    }

    #[test]
    fn test_handler_errors_keep_ok_status() {
        assert_eq!(AppError::Internal.into_response().status(), StatusCode::OK);
        assert_eq!(AppError::Validation.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn test_unauthorized_sets_challenge() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
