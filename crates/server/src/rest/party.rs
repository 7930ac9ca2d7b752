use axum::{extract::State, response::Html, Form, Json};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

use shared_types::{AppError, CreatePartyRequest, Party};

use crate::error_convert::ValidateRequest;
use crate::pages::{Page, Pages};

/// Body returned after a party is stored.
pub const PARTY_CREATED: &str = "Party added successfully";

/// GET /parties
#[utoipa::path(
    get,
    path = "/parties",
    responses(
        (status = 200, description = "Every party, in identity order", body = Vec<Party>),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "parties"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_parties(
    State(pool): State<Pool<Sqlite>>,
) -> Result<Json<Vec<Party>>, AppError> {
    let parties = crate::repo::party::list_all(&pool).await?;
    Ok(Json(parties))
}

/// POST /parties
///
/// The referenced case is not looked up; a party may point at a case that
/// does not exist.
#[utoipa::path(
    post,
    path = "/parties",
    request_body(content = CreatePartyRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Party stored", body = String, content_type = "text/html"),
        (status = 422, description = "Invalid field values", body = AppError),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "parties"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn create_party(
    State(pool): State<Pool<Sqlite>>,
    Form(body): Form<CreatePartyRequest>,
) -> Result<Html<&'static str>, AppError> {
    let body = body.trimmed();
    body.validate_request()?;

    let party = crate::repo::party::create(&pool, body).await?;
    tracing::info!(party_id = party.party_id, case_id = party.case_id, "party created");
    Ok(Html(PARTY_CREATED))
}

/// GET /parties/create
#[utoipa::path(
    get,
    path = "/parties/create",
    responses((status = 200, description = "New party form", body = String, content_type = "text/html")),
    tag = "parties"
)]
pub async fn create_party_form(State(pages): State<Arc<Pages>>) -> Result<Html<String>, AppError> {
    pages.render(Page::PartyForm)
}
