use axum::extract::DefaultBodyLimit;
use axum::Router;
use shared_types::{
    AppError, AppErrorKind, Case, CreateCaseRequest, CreateJudgeRequest, CreatePartyRequest,
    FeatureFlags, Judge, Party,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health::{self, HealthResponse};
use crate::rest;

/// OpenAPI documentation for every route.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::home::index,
        rest::case::list_cases,
        rest::case::create_case,
        rest::case::create_case_form,
        rest::party::list_parties,
        rest::party::create_party,
        rest::party::create_party_form,
        rest::judge::list_judges,
        rest::judge::create_judge,
        rest::judge::create_judge_form,
        rest::case_transfer::export_cases,
        rest::case_transfer::import_cases,
        rest::case_transfer::import_cases_form,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        Case, CreateCaseRequest,
        Party, CreatePartyRequest,
        Judge, CreateJudgeRequest,
        HealthResponse,
    )),
    tags(
        (name = "pages", description = "Landing page"),
        (name = "cases", description = "Case records"),
        (name = "parties", description = "Parties to cases"),
        (name = "judges", description = "Judicial officers"),
        (name = "transfer", description = "XML export and import of the Cases table"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Court Records API",
        description = "Record keeping for court case administration",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build the full application router: every page and endpoint plus
/// `/health`, with `/docs` when the `docs` flag is on. Request bodies,
/// uploads included, are capped at `max_upload_bytes`.
pub fn app_router(state: AppState, flags: &FeatureFlags, max_upload_bytes: usize) -> Router {
    let router = rest::rest_router()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    let router = if flags.docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    };
    router.layer(DefaultBodyLimit::max(max_upload_bytes))
}
