//! API request helpers

use axum::body::Body;
use axum::body::to_bytes;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::Json;
use axum::extract::Path;
use axum::extract::Request;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::request_logger::MAX_BODY_SIZE;

use super::Error;

/// Parse a note ID from a path segment
///
/// Leading and trailing whitespace is ignored, integral numbers like `2.0`
/// count as `2` and `0x`, `0o` and `0b` prefixed integers are read in their
/// base. Everything else is not an ID of any note.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn parse_note_id(id: &str) -> Option<u64> {
    let id = id.trim();

    if let Ok(id) = id.parse::<u64>() {
        return Some(id);
    }

    if let Some(id) = parse_prefixed_integer(id) {
        return Some(id);
    }

    id.parse::<f64>()
        .ok()
        .filter(|id| id.is_finite() && id.fract() == 0.0 && *id >= 0.0 && *id <= u64::MAX as f64)
        .map(|id| id as u64)
}

fn parse_prefixed_integer(id: &str) -> Option<u64> {
    let (prefix, digits) = id.split_at_checked(2)?;

    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    // `from_str_radix` accepts a sign, prefixed numbers do not
    if digits.starts_with(['+', '-']) {
        return None;
    }

    u64::from_str_radix(digits, radix).ok()
}

fn parse_json<J>(json: Result<Json<J>, JsonRejection>) -> Result<J, Error> {
    match json {
        Ok(Json(json)) => Ok(json),
        Err(err) => match err {
            JsonRejection::JsonDataError(err) => {
                let description = std::error::Error::source(&err)
                    .map_or_else(|| err.body_text(), ToString::to_string);

                Err(Error::bad_request("Data error").with_description(description))
            }
            JsonRejection::JsonSyntaxError(err) => {
                let description = std::error::Error::source(&err)
                    .map_or_else(|| err.body_text(), ToString::to_string);

                Err(Error::bad_request("JSON syntax error").with_description(description))
            }
            JsonRejection::MissingJsonContentType(_err) => Err(Error::bad_request(
                "Missing `application/json` content type",
            )),
            JsonRejection::BytesRejection(err) => {
                Err(Error::bad_request("Invalid characters in JSON").with_description(err))
            }
            err => Err(Error::bad_request("Unknown JSON error").with_description(err)),
        },
    }
}

/// Wrapper for the JSON extractor
///
/// Rejections become JSON errors. A request without a body is read as `{}`,
/// with or without content type.
pub struct Form<F>(pub F);

impl<S, F> FromRequest<S> for Form<F>
where
    F: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();

        let body = to_bytes(body, MAX_BODY_SIZE)
            .await
            .map_err(|err| Error::bad_request("Could not read request body").with_description(err))?;

        if body.is_empty() {
            return parse_json(Json::<F>::from_bytes(b"{}")).map(Form);
        }

        let req = Request::from_parts(parts, Body::from(body));

        parse_json(Json::<F>::from_request(req, state).await).map(Form)
    }
}

fn parse_path<P>(path: Result<Path<P>, PathRejection>) -> Result<P, Error> {
    match path {
        Ok(Path(path)) => Ok(path),
        Err(err) => match err {
            PathRejection::FailedToDeserializePathParams(err) => {
                Err(Error::bad_request("Invalid path parameter").with_description(err))
            }
            PathRejection::MissingPathParams(err) => {
                Err(Error::bad_request("Missing path parameter").with_description(err))
            }
            err => Err(Error::bad_request("Unknown path error").with_description(err)),
        },
    }
}

/// Wrapper for the path extractor
pub struct PathParameters<P>(pub P);

impl<S, P> FromRequestParts<S> for PathParameters<P>
where
    P: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_path(Path::<P>::from_request_parts(parts, state).await).map(PathParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id() {
        assert_eq!(Some(2), parse_note_id("2"));
        assert_eq!(Some(2), parse_note_id(" 2 "));
        assert_eq!(Some(2), parse_note_id("2.0"));
        assert_eq!(Some(0), parse_note_id("0"));
    }

    #[test]
    fn test_parse_note_id_with_prefix() {
        assert_eq!(Some(2), parse_note_id("0x2"));
        assert_eq!(Some(255), parse_note_id("0XfF"));
        assert_eq!(Some(2), parse_note_id("0o2"));
        assert_eq!(Some(2), parse_note_id("0b10"));
        assert_eq!(None, parse_note_id("0x"));
        assert_eq!(None, parse_note_id("0x-2"));
        assert_eq!(None, parse_note_id("0b12"));
        assert_eq!(None, parse_note_id("-0x2"));
    }

    #[test]
    fn test_parse_note_id_without_number() {
        assert_eq!(None, parse_note_id("abc"));
        assert_eq!(None, parse_note_id(""));
        assert_eq!(None, parse_note_id("2.5"));
        assert_eq!(None, parse_note_id("-1"));
        assert_eq!(None, parse_note_id("NaN"));
        assert_eq!(None, parse_note_id("inf"));
    }
}
