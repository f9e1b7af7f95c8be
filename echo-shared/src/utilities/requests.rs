use lambda_http::{Request, RequestExt};

/// Returns the request path exactly as the platform supplied it.
///
/// The raw HTTP path recorded by the runtime wins over the URI path, so
/// API Gateway stage prefixes survive. The runtime reports an empty raw
/// path when it recorded none; the URI path is used then. A query string,
/// when present, is appended verbatim. Nothing is decoded or normalized.
pub fn raw_request_path(event: &Request) -> String {
    let raw = event.raw_http_path();
    let path = if raw.is_empty() {
        event.uri().path().to_string()
    } else {
        raw.to_string()
    };
    match event.uri().query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    }
}

/// Returns the request method as received, known verb or not.
pub fn request_method(event: &Request) -> String {
    event.method().as_str().to_string()
}
