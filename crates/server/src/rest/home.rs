use axum::{extract::State, response::Html};
use std::sync::Arc;

use shared_types::AppError;

use crate::pages::{Page, Pages};

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", body = String, content_type = "text/html")),
    tag = "pages"
)]
pub async fn index(State(pages): State<Arc<Pages>>) -> Result<Html<String>, AppError> {
    pages.render(Page::Index)
}
