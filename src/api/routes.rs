//! API route configuration.

use crate::api::handlers::{remove_handler, save_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes that create or delete mappings.
///
/// These are the routes optionally guarded by Basic authentication in
/// [`crate::routes::router`].
///
/// # Endpoints
///
/// - `POST   /url`          - Store a new alias mapping
/// - `DELETE /url`          - Delete a mapping (alias in JSON body)
/// - `POST   /url/remove`   - Same as `DELETE /url`, for clients that cannot send DELETE bodies
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler).delete(remove_handler))
        .route("/url/remove", post(remove_handler))
}
