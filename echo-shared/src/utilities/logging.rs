use serde_json::json;
use log::{info, error};

/// Logs one handled invocation as a single JSON line.
pub fn log_invocation(method: &str, path: &str) {
    info!("{}", json!({
        "event": "invocation",
        "method": method,
        "path": path
    }));
}

/// Logs an outgoing response as a single JSON line.
pub fn log_response(status: u16, body: &str) {
    info!("{}", json!({
        "event": "response",
        "status": status,
        "body": body
    }));
}

/// Logs an error event as a single JSON line.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}
