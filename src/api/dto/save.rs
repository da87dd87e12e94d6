//! DTO for the save endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to store a new alias mapping.
///
/// Missing fields deserialize to empty strings so that they are reported as
/// validation failures rather than decode failures.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL; must parse as an absolute URL.
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Caller-chosen alias.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Alias must be 1-255 characters"))]
    pub alias: String,
}
