use serde::{Deserialize, Serialize};

/// Request metadata echoed back to the caller.
///
/// `path` and `method` are copied verbatim from the inbound request.
/// `env` is left out of the JSON entirely when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub path: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub env: String,
}
