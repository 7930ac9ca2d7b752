use axum::{extract::State, response::Html, Form, Json};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

use shared_types::{AppError, Case, CreateCaseRequest};

use crate::error_convert::ValidateRequest;
use crate::pages::{Page, Pages};

/// Body returned after a case is stored.
pub const CASE_CREATED: &str = "Case added successfully";

/// GET /cases
#[utoipa::path(
    get,
    path = "/cases",
    responses(
        (status = 200, description = "Every case, in identity order", body = Vec<Case>),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_cases(State(pool): State<Pool<Sqlite>>) -> Result<Json<Vec<Case>>, AppError> {
    let cases = crate::repo::case::list_all(&pool).await?;
    Ok(Json(cases))
}

/// POST /cases
#[utoipa::path(
    post,
    path = "/cases",
    request_body(content = CreateCaseRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Case stored", body = String, content_type = "text/html"),
        (status = 422, description = "Invalid field values", body = AppError),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool))]
pub async fn create_case(
    State(pool): State<Pool<Sqlite>>,
    Form(body): Form<CreateCaseRequest>,
) -> Result<Html<&'static str>, AppError> {
    let body = body.trimmed();
    body.validate_request()?;

    let case = crate::repo::case::create(&pool, body).await?;
    tracing::info!(case_id = case.case_id, case_number = %case.case_number, "case created");
    Ok(Html(CASE_CREATED))
}

/// GET /cases/create
#[utoipa::path(
    get,
    path = "/cases/create",
    responses((status = 200, description = "New case form", body = String, content_type = "text/html")),
    tag = "cases"
)]
pub async fn create_case_form(State(pages): State<Arc<Pages>>) -> Result<Html<String>, AppError> {
    pages.render(Page::CaseForm)
}
