use lambda_http::{Body, Request, Response};
use echo_shared::utilities::config::{self, AppConfig};
use echo_shared::utilities::logging::log_invocation;
use echo_shared::utilities::responses::success_response;
use crate::endpoints::metadata;

/// Lambda entrypoint. Every method and path is answered by the metadata echo.
pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    handle_lambda_with_config(event, config::app_config()).await
}

pub async fn handle_lambda_with_config(event: Request, config: &AppConfig) -> Result<Response<Body>, lambda_http::Error> {
    let payload = metadata::handle(&event, config);
    log_invocation(&payload.method, &payload.path);
    success_response(payload)
}
