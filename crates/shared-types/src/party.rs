use serde::{Deserialize, Serialize};

use crate::common::trim_owned;

#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::common::validate_not_blank;

/// A party to a case. `case_id` is a plain reference; nothing checks that
/// the case exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Party {
    pub party_id: i64,
    pub case_id: i64,
    pub name: String,
    /// Procedural role, e.g. "plaintiff" or "defendant".
    pub role: String,
    pub contact_info: String,
}

/// Form submitted to `POST /parties`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreatePartyRequest {
    pub case_id: i64,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub name: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub role: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub contact_info: String,
}

impl CreatePartyRequest {
    /// Strip surrounding whitespace from the text fields.
    pub fn trimmed(self) -> Self {
        Self {
            case_id: self.case_id,
            name: trim_owned(self.name),
            role: trim_owned(self.role),
            contact_info: trim_owned(self.contact_info),
        }
    }
}
