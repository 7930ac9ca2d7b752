use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{get, get_text, post_form, test_app};

#[tokio::test]
async fn create_judge_success() {
    let (app, _pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/judges",
        &[("name", "Hon. Sarah Mitchell"), ("qualification", "J.D., Yale")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Judge added successfully");

    let (_, body) = get(&app, "/judges").await;
    let judges = body.as_array().unwrap();
    assert_eq!(judges.len(), 1);
    assert_eq!(judges[0]["name"], "Hon. Sarah Mitchell");
    assert_eq!(judges[0]["qualification"], "J.D., Yale");
    assert!(judges[0]["judge_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_judge_blank_qualification() {
    let (app, _pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/judges",
        &[("name", "Hon. Sarah Mitchell"), ("qualification", "  ")],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]["qualification"].is_string());

    let (_, body) = get(&app, "/judges").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_judge_form_fields() {
    let (app, _pool) = test_app().await;
    let (status, body) = get_text(&app, "/judges/create").await;

    assert_eq!(status, StatusCode::OK);
    for name in ["name", "qualification"] {
        assert!(body.contains(&format!(r#"name="{name}""#)), "missing input {name}");
    }
}
