use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for 404 and 500 responses.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub message: String,
}
