use http::StatusCode;
use lambda_http::{Response, Body};
use serde::Serialize;
use crate::models::errors::{ErrorBody, HandlerError};
use crate::utilities::logging::{log_error, log_response};

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    json_response(data, StatusCode::OK)
}

pub fn error_response(message: &str, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = ErrorBody { error: message.to_string() };
    Ok(response_with_code(&body, code)?)
}

/// Serializes `data` and responds with `code`. A serialization failure
/// becomes a 500 with a JSON error body instead of a partial response.
pub fn json_response<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    match response_with_code(&data, code) {
        Ok(response) => Ok(response),
        Err(HandlerError::Serialization(e)) => {
            log_error("response_serialization", &e.to_string());
            error_response("Failed to serialize response", StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            log_error("response_build", &e.to_string());
            Err(e.into())
        }
    }
}

/// The body is fully serialized before status and headers are set.
pub fn response_with_code<T: Serialize + ?Sized>(data: &T, code: StatusCode) -> Result<Response<Body>, HandlerError> {
    let body = serde_json::to_string(data)?;
    log_response(code.as_u16(), &body);
    let response = Response::builder()
        .status(code)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?;
    Ok(response)
}
