use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_invalid_json() {
    let mut app = helper::setup_test_app();

    // wrong data type
    let body = r#"{"content":5}"#;
    let (status_code, _, error) =
        helper::maybe_create_note_with_raw_body(&mut app, body, true).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!("Data error".to_string(), error.error);
    assert_eq!(
        Some("content: invalid type: integer `5`, expected a string at line 1 column 12".to_string()),
        error.description
    );

    // syntax error
    let body = r#"{"}"#;
    let (status_code, _, error) =
        helper::maybe_create_note_with_raw_body(&mut app, body, true).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!("JSON syntax error".to_string(), error.error);
    assert!(error.description.is_some());

    // missing content type
    let body = r#"{"content":"test"}"#;
    let (status_code, _, error) =
        helper::maybe_create_note_with_raw_body(&mut app, body, false).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!(
        "Missing `application/json` content type".to_string(),
        error.error
    );

    // empty object has no content
    let body = r"{}";
    let (status_code, _, error) =
        helper::maybe_create_note_with_raw_body(&mut app, body, true).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(
        Some(helper::Error {
            error: "content missing".to_string(),
            description: None,
        }),
        error
    );

    // empty body, with and without content type
    for include_content_type in [true, false] {
        let (status_code, _, error) =
            helper::maybe_create_note_with_raw_body(&mut app, "", include_content_type).await;
        assert_eq!(StatusCode::BAD_REQUEST, status_code);
        assert_eq!(
            Some(helper::Error {
                error: "content missing".to_string(),
                description: None,
            }),
            error
        );
    }

    // nothing was added
    let (_, notes) = helper::list_notes(&mut app).await;
    assert_eq!(Some(3), notes.map(|notes| notes.len()));
}
