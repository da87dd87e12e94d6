//! Handler for storing a new alias mapping.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::{Instrument, error, info};
use validator::Validate;

use crate::api::dto::response::StatusResponse;
use crate::api::dto::save::SaveRequest;
use crate::api::extract::{RequestId, decode_json};
use crate::domain::repositories::UrlStorage;
use crate::error::AppError;
use crate::state::AppState;

/// Stores `url` under a caller-chosen `alias`.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// JSON, whatever the `Content-Type` header says.
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// Failures are returned as `{"status":"Error","error":...}` with one of
/// `failed to decode request`, `invalid request` or `failed to add url`.
/// A taken alias is reported as `failed to add url`; nothing is overwritten.
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    save_url(state.storage.as_ref(), body)
        .instrument(request_id.span("url.save"))
        .await
}

async fn save_url(
    storage: &dyn UrlStorage,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let req: SaveRequest = decode_json(body)?;

    info!(request = ?req, "request body decoded");

    if let Err(e) = req.validate() {
        error!(error = %e, "invalid request");
        return Err(AppError::Validation);
    }

    if req.alias.is_empty() {
        info!("failed to add url, empty alias");
        return Err(AppError::SaveFailed);
    }

    if let Err(e) = storage.create_mapping(&req.url, &req.alias).await {
        error!(error = %e, duplicate = e.is_duplicate(), "failed to add url");
        return Err(AppError::SaveFailed);
    }

    info!(alias = %req.alias, "url added");

    Ok(Json(StatusResponse::ok(req.alias)))
}
