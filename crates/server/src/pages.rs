//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and registered with a single
//! [`Tera`] instance at startup, so a missing or broken template fails the
//! boot rather than the first request.

use axum::response::Html;
use shared_types::AppError;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("create_case_form.html", include_str!("../templates/create_case_form.html")),
    ("create_party_form.html", include_str!("../templates/create_party_form.html")),
    ("create_judge_form.html", include_str!("../templates/create_judge_form.html")),
    ("import_cases_form.html", include_str!("../templates/import_cases_form.html")),
];

/// Every page the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    CaseForm,
    PartyForm,
    JudgeForm,
    ImportCasesForm,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Index,
        Page::CaseForm,
        Page::PartyForm,
        Page::JudgeForm,
        Page::ImportCasesForm,
    ];

    fn template(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::CaseForm => "create_case_form.html",
            Page::PartyForm => "create_party_form.html",
            Page::JudgeForm => "create_judge_form.html",
            Page::ImportCasesForm => "import_cases_form.html",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Index => "Court Records",
            Page::CaseForm => "New case",
            Page::PartyForm => "New party",
            Page::JudgeForm => "New judge",
            Page::ImportCasesForm => "Import cases",
        }
    }
}

/// Compiled page templates.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render `page` to an HTML response body.
    pub fn render(&self, page: Page) -> Result<Html<String>, AppError> {
        let mut context = Context::new();
        context.insert("title", page.title());

        self.tera
            .render(page.template(), &context)
            .map(Html)
            .map_err(|e| {
                tracing::error!(template = page.template(), error = ?e, "template render failed");
                AppError::internal(format!("failed to render {}", page.template()))
            })
    }
}
