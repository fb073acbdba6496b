use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::http::header::ORIGIN;

use crate::tests::helper;

#[tokio::test]
async fn test_root() {
    let mut app = helper::setup_test_app();

    let (status_code, content_type, body) = helper::root(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(mime::TEXT_HTML_UTF_8.as_ref().to_string()), content_type);
    assert_eq!("<h1>Hello World!</h1>", body);
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let mut app = helper::setup_test_app();

    for uri in ["/unknown", "/api", "/api/", "/api/unknown", "/api/notes/1/more"] {
        let (status_code, error) =
            helper::request_without_body(&mut app, Method::GET, uri).await;
        assert_eq!(StatusCode::NOT_FOUND, status_code, "{uri}");
        assert_eq!(Some("unknown endpoint".to_string()), error, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_method() {
    let mut app = helper::setup_test_app();

    let requests = [
        (Method::PUT, "/api/notes"),
        (Method::DELETE, "/api/notes"),
        (Method::POST, "/api/notes/1"),
        (Method::PATCH, "/api/notes/1"),
        (Method::POST, "/"),
    ];

    for (method, uri) in requests {
        let (status_code, error) = helper::request_without_body(&mut app, method, uri).await;
        assert_eq!(StatusCode::NOT_FOUND, status_code, "{uri}");
        assert_eq!(Some("unknown endpoint".to_string()), error, "{uri}");
    }

    // the note is still there
    let (status_code, _, _) = helper::single_note(&mut app, "1").await;
    assert_eq!(StatusCode::OK, status_code);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let mut app = helper::setup_test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/notes")
        .header(ORIGIN, "https://www.example.com")
        .body(Body::empty())
        .unwrap();

    let (status_code, headers, _) = helper::send(&mut app, request).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(
        Some("*"),
        headers
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|header| header.to_str().unwrap())
    );
}
