//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{Instrument, error, info};

use crate::api::extract::RequestId;
use crate::domain::repositories::UrlStorage;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with the target in the `Location` header.
///
/// # Errors
///
/// - `alias is empty` when the path segment is empty (storage is not queried)
/// - `internal error` for any storage failure, including an unknown alias
pub async fn redirect_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    redirect(state.storage.as_ref(), alias)
        .instrument(request_id.span("redirect"))
        .await
}

/// `GET /`: the alias segment is empty, so this always answers `alias is empty`.
pub async fn redirect_root_handler(
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Response, AppError> {
    redirect(state.storage.as_ref(), String::new())
        .instrument(request_id.span("redirect"))
        .await
}

async fn redirect(storage: &dyn UrlStorage, alias: String) -> Result<Response, AppError> {
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::EmptyAlias);
    }

    let url = storage.get_mapping(&alias).await.map_err(|e| {
        error!(error = %e, not_found = e.is_not_found(), "failed to get url");
        AppError::Internal
    })?;

    let location = HeaderValue::from_str(&url).map_err(|e| {
        error!(error = %e, url = %url, "stored url is not a valid header value");
        AppError::Internal
    })?;

    info!(url = %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
