use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
