//! DTO for the remove endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to delete an alias mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct RemoveRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Alias is required"))]
    pub alias: String,
}
