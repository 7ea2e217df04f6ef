use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID for the current call, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Caller-supplied ID, ignoring blank or non-ASCII header values.
fn caller_request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Tags the request with an ID, reusing the caller's `x-request-id` or
/// minting a `UUIDv4`. Everything the handler logs is recorded under a
/// `request` span carrying the ID, and the ID is echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = caller_request_id(req.headers())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %req.method(),
        path = req.uri().path(),
    );
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).instrument(span).await;
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}
