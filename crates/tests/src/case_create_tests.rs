use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{count_cases, create_test_case, get, post_form, test_app};

#[tokio::test]
async fn create_case_success() {
    let (app, _pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/cases",
        &[
            ("case_number", "CN-1"),
            ("opening_date", "2024-01-01"),
            ("description", "theft"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Case added successfully");

    let (status, body) = get(&app, "/cases").await;
    assert_eq!(status, StatusCode::OK);
    let cases = body.as_array().expect("response should be an array");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["case_number"], "CN-1");
    assert_eq!(cases[0]["opening_date"], "2024-01-01");
    assert_eq!(cases[0]["description"], "theft");
    assert!(cases[0]["case_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_case_assigns_fresh_identities() {
    let (app, _pool) = test_app().await;
    create_test_case(&app, "CN-1", "2024-01-01", "theft").await;
    create_test_case(&app, "CN-1", "2024-01-01", "theft").await;

    let (_, body) = get(&app, "/cases").await;
    let cases = body.as_array().unwrap();
    assert_eq!(cases.len(), 2, "duplicates are not detected");

    let first = cases[0]["case_id"].as_i64().unwrap();
    let second = cases[1]["case_id"].as_i64().unwrap();
    assert!(second > first, "identities should be distinct and ascending");
}

#[tokio::test]
async fn create_case_special_characters_stored_verbatim() {
    let (app, _pool) = test_app().await;
    create_test_case(&app, "CR-2024/007", "2024-03-15", "Smith & Jones <fraud>").await;

    let (_, body) = get(&app, "/cases").await;
    assert_eq!(body[0]["case_number"], "CR-2024/007");
    assert_eq!(body[0]["description"], "Smith & Jones <fraud>");
}

#[tokio::test]
async fn create_case_stores_trimmed_values() {
    let (app, _pool) = test_app().await;
    create_test_case(&app, "  CN-9 ", " 2024-01-01 ", " arson\t").await;

    let (_, body) = get(&app, "/cases").await;
    assert_eq!(body[0]["case_number"], "CN-9");
    assert_eq!(body[0]["opening_date"], "2024-01-01");
    assert_eq!(body[0]["description"], "arson");
}

#[tokio::test]
async fn create_case_invalid_date() {
    let (app, pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/cases",
        &[
            ("case_number", "CN-1"),
            ("opening_date", "01/02/2024"),
            ("description", "theft"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]["opening_date"].is_string());
    assert_eq!(count_cases(&pool).await, 0);
}

#[tokio::test]
async fn create_case_blank_field() {
    let (app, pool) = test_app().await;

    let (status, body) = post_form(
        &app,
        "/cases",
        &[
            ("case_number", "   "),
            ("opening_date", "2024-01-01"),
            ("description", "theft"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"]["case_number"].is_string());
    assert_eq!(count_cases(&pool).await, 0);
}

#[tokio::test]
async fn create_case_missing_field_rejected() {
    let (app, pool) = test_app().await;

    let (status, _body) = post_form(
        &app,
        "/cases",
        &[("case_number", "CN-1"), ("opening_date", "2024-01-01")],
    )
    .await;

    assert!(status.is_client_error(), "got {status}");
    assert_eq!(count_cases(&pool).await, 0);
}

#[tokio::test]
async fn create_case_form_fields() {
    let (app, _pool) = test_app().await;
    let (status, body) = crate::common::get_text(&app, "/cases/create").await;

    assert_eq!(status, StatusCode::OK);
    for name in ["case_number", "opening_date", "description"] {
        assert!(body.contains(&format!(r#"name="{name}""#)), "missing input {name}");
    }
}
