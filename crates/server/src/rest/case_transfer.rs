//! XML export and import of the Cases table.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

use shared_types::AppError;

use crate::case_xml::{self, CaseXmlError};
use crate::pages::{Page, Pages};

/// Multipart field carrying the uploaded document.
pub const XML_FILE_FIELD: &str = "xml_file";

/// Body returned after a successful import.
pub const CASES_IMPORTED: &str = "Cases table imported successfully";

/// Why an upload was refused. Every variant is reported as a 400.
#[derive(Debug, thiserror::Error)]
pub enum CaseImportError {
    #[error("{0}")]
    NotMultipart(#[from] MultipartRejection),
    #[error("unreadable upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("no `xml_file` field in the upload")]
    MissingFile,
    #[error("uploaded file is not UTF-8 text")]
    NotUtf8,
    #[error(transparent)]
    Document(#[from] CaseXmlError),
    #[error("storage rejected the import, nothing was changed: {0}")]
    Storage(#[from] AppError),
}

impl IntoResponse for CaseImportError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "case import rejected");
        (
            StatusCode::BAD_REQUEST,
            format!("Case import failed: {self}"),
        )
            .into_response()
    }
}

/// GET /export/cases
///
/// The document is embedded as-is in a `<pre>` block; field text is
/// already entity-escaped by the XML writer.
#[utoipa::path(
    get,
    path = "/export/cases",
    responses(
        (status = 200, description = "Cases document wrapped in <pre>", body = String, content_type = "text/html"),
        (status = 500, description = "Storage failure", body = AppError)
    ),
    tag = "transfer"
)]
#[tracing::instrument(skip(pool))]
pub async fn export_cases(State(pool): State<Pool<Sqlite>>) -> Result<Html<String>, AppError> {
    let cases = crate::repo::case::list_all(&pool).await?;
    let xml = case_xml::render_cases(&cases).map_err(|e| AppError::internal(e.to_string()))?;
    tracing::debug!(count = cases.len(), "cases exported");
    Ok(Html(format!("<pre>{xml}</pre>")))
}

async fn read_upload(mut multipart: Multipart) -> Result<String, CaseImportError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(XML_FILE_FIELD) {
            continue;
        }
        let bytes = field.bytes().await?;
        let text = String::from_utf8(bytes.to_vec()).map_err(|_| CaseImportError::NotUtf8)?;
        return Ok(match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        });
    }
    Err(CaseImportError::MissingFile)
}

/// POST /import/cases
///
/// Replaces every stored case with the uploaded document. The whole
/// document is validated before storage is touched, and the replacement
/// runs in one transaction, so a rejected upload leaves the table as it was.
#[utoipa::path(
    post,
    path = "/import/cases",
    responses(
        (status = 200, description = "Cases replaced", body = String, content_type = "text/html"),
        (status = 400, description = "Upload, document or storage error; nothing changed", body = String, content_type = "text/plain")
    ),
    tag = "transfer"
)]
#[tracing::instrument(skip(pool, multipart))]
pub async fn import_cases(
    State(pool): State<Pool<Sqlite>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<&'static str>, CaseImportError> {
    let xml = read_upload(multipart?).await?;
    let cases = case_xml::parse_cases(&xml)?;

    let removed = crate::repo::case::replace_all(&pool, &cases).await?;
    tracing::info!(removed, imported = cases.len(), "cases table replaced from XML");
    Ok(Html(CASES_IMPORTED))
}

/// GET /import/cases/form
#[utoipa::path(
    get,
    path = "/import/cases/form",
    responses((status = 200, description = "Upload form", body = String, content_type = "text/html")),
    tag = "transfer"
)]
pub async fn import_cases_form(State(pages): State<Arc<Pages>>) -> Result<Html<String>, AppError> {
    pages.render(Page::ImportCasesForm)
}
