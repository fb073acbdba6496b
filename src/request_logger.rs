//! Request logging
//!
//! Writes method, path and body of every request before it is handled

use axum::body::Body;
use axum::body::to_bytes;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::Error;

/// Largest body that is read, same as the default JSON limit
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Middleware logging the request, the body is passed on untouched
pub async fn log_request(request: Request, next: Next) -> Result<Response, Error> {
    let (parts, body) = request.into_parts();

    let body = to_bytes(body, MAX_BODY_SIZE)
        .await
        .map_err(|err| Error::bad_request("Could not read request body").with_description(err))?;

    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %String::from_utf8_lossy(&body),
        "Incoming request"
    );

    Ok(next
        .run(Request::from_parts(parts, Body::from(body)))
        .await)
}
