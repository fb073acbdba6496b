//! The root!
//!
//! Greeting at `/` and the response for everything nobody else handles

use axum::response::Html;

use crate::api::Error;

/// The greeting on `/`
#[allow(clippy::unused_async)]
pub async fn greeting() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// All requests without a matching route end up in this function
#[allow(clippy::unused_async)]
pub async fn unknown_endpoint() -> Error {
    Error::not_found("unknown endpoint")
}
