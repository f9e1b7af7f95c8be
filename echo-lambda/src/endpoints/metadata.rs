use lambda_http::Request;
use echo_shared::models::payload::ResponsePayload;
use echo_shared::utilities::config::AppConfig;
use echo_shared::utilities::requests::{raw_request_path, request_method};

pub fn handle(event: &Request, config: &AppConfig) -> ResponsePayload {
    ResponsePayload {
        path: raw_request_path(event),
        method: request_method(event),
        env: config.env.clone(),
    }
}
