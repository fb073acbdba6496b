//! API response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

/// Hold data for a successful API interaction
///
/// The data is sent as is, without a wrapper
pub struct Success<V>
where
    V: Serialize,
{
    status_code: StatusCode,
    data: Option<V>,
}

impl<V> Success<V>
where
    V: Serialize,
{
    pub fn ok(data: V) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: Some(data),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            data: None,
        }
    }
}

impl<V> IntoResponse for Success<V>
where
    V: Serialize,
{
    fn into_response(self) -> Response {
        if let Some(data) = self.data {
            (self.status_code, Json(data)).into_response()
        } else {
            self.status_code.into_response()
        }
    }
}

/// Hold data for a failed API interaction
///
/// Without a message the response has an empty body
#[derive(Debug)]
pub struct Error {
    status_code: StatusCode,
    message: Option<String>,
    description: Option<String>,
}

impl Error {
    fn with_status<M>(status_code: StatusCode, message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code,
            message: Some(message.to_string()),
            description: None,
        }
    }

    pub fn bad_request<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self::with_status(StatusCode::NOT_FOUND, message)
    }

    /// Not found, with an empty body
    pub fn not_found_without_body() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            message: None,
            description: None,
        }
    }

    pub fn with_description<M>(self, description: M) -> Self
    where
        M: ToString,
    {
        Self {
            description: Some(description.to_string()),
            ..self
        }
    }
}

#[derive(Serialize)]
struct ErrorWrapper {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.message {
            Some(error) => (
                self.status_code,
                Json(ErrorWrapper {
                    error,
                    description: self.description,
                }),
            )
                .into_response(),
            None => self.status_code.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::CONTENT_TYPE;

    use super::*;

    #[test]
    fn test_error_without_body() {
        let response = Error::not_found_without_body().into_response();

        assert_eq!(StatusCode::NOT_FOUND, response.status());
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_error_with_message_is_json() {
        let response = Error::bad_request("content missing").into_response();

        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        assert_eq!(
            Some(mime::APPLICATION_JSON.as_ref()),
            response
                .headers()
                .get(CONTENT_TYPE)
                .map(|value| value.to_str().unwrap())
        );
    }
}
