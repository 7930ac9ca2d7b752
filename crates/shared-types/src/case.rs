use serde::{Deserialize, Serialize};

use crate::common::trim_owned;

#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::common::{validate_iso_date, validate_not_blank};

// ── DB row struct ───────────────────────────────────────────────────

/// A court case record as stored in the `Cases` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Case {
    pub case_id: i64,
    pub case_number: String,
    /// Opening date as `YYYY-MM-DD`, stored as text.
    pub opening_date: String,
    pub description: String,
}

// ── Request types ───────────────────────────────────────────────────

/// Form submitted to `POST /cases`. Identity is assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateCaseRequest {
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub case_number: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_iso_date")))]
    pub opening_date: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub description: String,
}

impl CreateCaseRequest {
    /// Strip surrounding whitespace from every field. Stored values are
    /// always trimmed, matching what an XML import yields for the same text.
    pub fn trimmed(self) -> Self {
        Self {
            case_number: trim_owned(self.case_number),
            opening_date: trim_owned(self.opening_date),
            description: trim_owned(self.description),
        }
    }
}
