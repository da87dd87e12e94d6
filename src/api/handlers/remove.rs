//! Handler for deleting an alias mapping.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::{Instrument, error, info};
use validator::Validate;

use crate::api::dto::remove::RemoveRequest;
use crate::api::dto::response::StatusResponse;
use crate::api::extract::{RequestId, decode_json};
use crate::domain::repositories::UrlStorage;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for `alias`.
///
/// # Endpoint
///
/// `DELETE /url` or `POST /url/remove`
///
/// # Request Body
///
/// ```json
/// { "alias": "ex" }
/// ```
///
/// # Errors
///
/// `failed to decode request`, `invalid request`, or `failed to delete url`
/// for any storage failure (an unknown alias included).
pub async fn remove_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    remove_url(state.storage.as_ref(), body)
        .instrument(request_id.span("url.remove"))
        .await
}

async fn remove_url(
    storage: &dyn UrlStorage,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let req: RemoveRequest = decode_json(body)?;

    info!(request = ?req, "request body decoded");

    if let Err(e) = req.validate() {
        error!(error = %e, "invalid request");
        return Err(AppError::Validation);
    }

    if let Err(e) = storage.delete_mapping(&req.alias).await {
        info!(error = %e, "failed to delete url");
        return Err(AppError::DeleteFailed);
    }

    info!(alias = %req.alias, "url deleted");

    Ok(Json(StatusResponse::ok(req.alias)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockUrlStorage, StorageError};
    use std::sync::Arc;

    async fn call(mock: MockUrlStorage, alias: &str) -> Result<Json<StatusResponse>, AppError> {
        remove_handler(
            State(AppState::new(Arc::new(mock))),
            RequestId("test".to_string()),
            Ok(Bytes::from(serde_json::json!({ "alias": alias }).to_string())),
        )
        .await
    }

    #[tokio::test]
    async fn test_remove_success() {
        let mut mock = MockUrlStorage::new();
        mock.expect_delete_mapping()
            .withf(|alias| alias == "ex")
            .times(1)
            .returning(|_| Ok(()));

        let Json(response) = call(mock, "ex").await.unwrap();

        assert_eq!(response.alias.as_deref(), Some("ex"));
    }

    #[tokio::test]
    async fn test_empty_alias_never_reaches_storage() {
        let mut mock = MockUrlStorage::new();
        mock.expect_delete_mapping().times(0);

        assert_eq!(call(mock, "").await.unwrap_err(), AppError::Validation);
    }

    #[tokio::test]
    async fn test_unknown_alias_fails() {
        let mut mock = MockUrlStorage::new();
        mock.expect_delete_mapping().times(1).returning(|alias| {
            Err(StorageError::NotFound {
                op: "test",
                alias: alias.to_string(),
            })
        });

        assert_eq!(call(mock, "ex").await.unwrap_err(), AppError::DeleteFailed);
    }
}
