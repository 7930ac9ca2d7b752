use chrono::NaiveDate;

/// Date format accepted for `opening_date` (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a form value carries no content once surrounding whitespace is removed.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Drop surrounding whitespace, reusing the allocation when there is none.
pub fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Parse an ISO `YYYY-MM-DD` calendar date, rejecting impossible dates
/// such as `2024-02-30`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(feature = "validation")]
pub fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if is_blank(value) {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(feature = "validation")]
pub fn validate_iso_date(value: &str) -> Result<(), validator::ValidationError> {
    if parse_iso_date(value).is_none() {
        let mut err = validator::ValidationError::new("date");
        err.message = Some(format!("must be a date in YYYY-MM-DD form, got {value:?}").into());
        return Err(err);
    }
    Ok(())
}
