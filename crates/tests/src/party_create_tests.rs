use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{get, get_text, post_form, test_app};

#[tokio::test]
async fn create_party_success() {
    let (app, _pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/parties",
        &[
            ("case_id", "1"),
            ("name", "Jane Doe"),
            ("role", "Plaintiff"),
            ("contact_info", "jane@example.com"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Party added successfully");

    let (_, body) = get(&app, "/parties").await;
    let parties = body.as_array().unwrap();
    assert_eq!(parties.len(), 1);
    assert_eq!(parties[0]["case_id"], 1);
    assert_eq!(parties[0]["name"], "Jane Doe");
    assert_eq!(parties[0]["role"], "Plaintiff");
    assert_eq!(parties[0]["contact_info"], "jane@example.com");
    assert!(parties[0]["party_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_party_for_unknown_case() {
    let (app, _pool) = test_app().await;

    let (status, _) = post_form(
        &app,
        "/parties",
        &[
            ("case_id", "9999"),
            ("name", "John Roe"),
            ("role", "Defendant"),
            ("contact_info", "555-0100"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/parties").await;
    assert_eq!(body[0]["case_id"], 9999);
}

#[tokio::test]
async fn create_party_non_integer_case_id() {
    let (app, _pool) = test_app().await;

    let (status, _) = post_form(
        &app,
        "/parties",
        &[
            ("case_id", "abc"),
            ("name", "John Roe"),
            ("role", "Defendant"),
            ("contact_info", "555-0100"),
        ],
    )
    .await;
    assert!(status.is_client_error(), "got {status}");

    let (_, body) = get(&app, "/parties").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_party_blank_name() {
    let (app, _pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/parties",
        &[
            ("case_id", "1"),
            ("name", ""),
            ("role", "Witness"),
            ("contact_info", "n/a"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"]["name"].is_string());
}

#[tokio::test]
async fn create_party_form_fields() {
    let (app, _pool) = test_app().await;
    let (status, body) = get_text(&app, "/parties/create").await;

    assert_eq!(status, StatusCode::OK);
    for name in ["case_id", "name", "role", "contact_info"] {
        assert!(body.contains(&format!(r#"name="{name}""#)), "missing input {name}");
    }
}
