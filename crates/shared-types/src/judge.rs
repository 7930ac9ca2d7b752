use serde::{Deserialize, Serialize};

use crate::common::trim_owned;

#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::common::validate_not_blank;

/// A judicial officer. Judges are not linked to cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Judge {
    pub judge_id: i64,
    pub name: String,
    pub qualification: String,
}

/// Form submitted to `POST /judges`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateJudgeRequest {
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub name: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_not_blank")))]
    pub qualification: String,
}

impl CreateJudgeRequest {
    pub fn trimmed(self) -> Self {
        Self {
            name: trim_owned(self.name),
            qualification: trim_owned(self.qualification),
        }
    }
}
