use axum::{extract::State, response::Html, Form, Json};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

use shared_types::{AppError, CreateJudgeRequest, Judge};

use crate::error_convert::ValidateRequest;
use crate::pages::{Page, Pages};

/// Body returned after a judge is stored.
pub const JUDGE_CREATED: &str = "Judge added successfully";

/// GET /judges
#[utoipa::path(
    get,
    path = "/judges",
    responses(
        (status = 200, description = "Every judge, in identity order", body = Vec<Judge>),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "judges"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_judges(State(pool): State<Pool<Sqlite>>) -> Result<Json<Vec<Judge>>, AppError> {
    let judges = crate::repo::judge::list_all(&pool).await?;
    Ok(Json(judges))
}

/// POST /judges
#[utoipa::path(
    post,
    path = "/judges",
    request_body(content = CreateJudgeRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Judge stored", body = String, content_type = "text/html"),
        (status = 422, description = "Invalid field values", body = AppError),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "judges"
)]
#[tracing::instrument(skip(pool))]
pub async fn create_judge(
    State(pool): State<Pool<Sqlite>>,
    Form(body): Form<CreateJudgeRequest>,
) -> Result<Html<&'static str>, AppError> {
    let body = body.trimmed();
    body.validate_request()?;

    let judge = crate::repo::judge::create(&pool, body).await?;
    tracing::info!(judge_id = judge.judge_id, "judge created");
    Ok(Html(JUDGE_CREATED))
}

/// GET /judges/create
#[utoipa::path(
    get,
    path = "/judges/create",
    responses((status = 200, description = "New judge form", body = String, content_type = "text/html")),
    tag = "judges"
)]
pub async fn create_judge_form(State(pages): State<Arc<Pages>>) -> Result<Html<String>, AppError> {
    pages.render(Page::JudgeForm)
}
