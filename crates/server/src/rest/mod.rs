pub mod case;
pub mod case_transfer;
pub mod home;
pub mod judge;
pub mod party;

use axum::{routing::{get, post}, Router};
use crate::db::AppState;

/// Build the application router: landing page, entity lists, forms and
/// the Cases XML transfer endpoints.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        // Cases
        .route("/cases", get(case::list_cases).post(case::create_case))
        .route("/cases/create", get(case::create_case_form))
        // Parties
        .route("/parties", get(party::list_parties).post(party::create_party))
        .route("/parties/create", get(party::create_party_form))
        // Judges
        .route("/judges", get(judge::list_judges).post(judge::create_judge))
        .route("/judges/create", get(judge::create_judge_form))
        // XML transfer
        .route("/export/cases", get(case_transfer::export_cases))
        .route("/import/cases", post(case_transfer::import_cases))
        .route("/import/cases/form", get(case_transfer::import_cases_form))
}
