//! HTTP Basic authentication for the mutating routes.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const PASSWORD_TAG_CONTEXT: &[u8] = b"url-alias basic auth";

/// Username and password accepted by [`layer`].
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl BasicCredentials {
    /// Password comparison runs in constant time: both sides are keyed into an
    /// HMAC and the tags are checked with `verify_slice`.
    fn matches(&self, user: &str, password: Option<&str>) -> bool {
        let (Some(expected), Some(candidate)) = (
            password_tag(self.password.as_bytes()),
            password.and_then(|p| password_tag(p.as_bytes())),
        ) else {
            return false;
        };

        let password_ok = candidate
            .verify_slice(&expected.finalize().into_bytes())
            .is_ok();

        password_ok && self.user == user
    }
}

fn password_tag(password: &[u8]) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(password).ok()?;
    mac.update(PASSWORD_TAG_CONTEXT);
    Some(mac)
}

/// Rejects requests whose `Authorization: Basic` header does not match the
/// configured credentials.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if the
/// header is missing, malformed, or carries the wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(Arc::new(credentials), auth::layer));
/// ```
pub async fn layer(
    State(credentials): State<Arc<BasicCredentials>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            warn!("authorization header is missing or invalid");
            AppError::Unauthorized
        })?;

    if !credentials.matches(&user, password.as_deref()) {
        warn!(user = %user, "invalid credentials");
        return Err(AppError::Unauthorized);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match() {
        let credentials = BasicCredentials {
            user: "admin".to_string(),
            password: "secret".to_string(),
        };

        assert!(credentials.matches("admin", Some("secret")));
        assert!(!credentials.matches("admin", Some("wrong")));
        assert!(!credentials.matches("admin", None));
        assert!(!credentials.matches("root", Some("secret")));
        assert!(!credentials.matches("admin", Some("")));
        assert!(!credentials.matches("admin", Some("secret ")));
    }

    #[test]
    fn test_debug_masks_password() {
        let credentials = BasicCredentials {
            user: "admin".to_string(),
            password: "secret".to_string(),
        };

        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("secret"));
    }
}
