use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to build response: {0}")]
    ResponseBuild(#[from] http::Error),
}

/// JSON body returned when a response cannot be produced normally.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
