//! Status envelope shared by every JSON response.

use serde::Serialize;

/// Outcome marker serialized as `"OK"` or `"Error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Response envelope.
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// { "status": "Error", "error": "invalid request" }
/// ```
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl StatusResponse {
    /// Success envelope echoing the alias that was acted on.
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            error: None,
            alias: Some(alias.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
            alias: None,
        }
    }
}
