use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::interceptors::AppError;

pub const INVALID_DATE_OF_BIRTH: &str = "Invalid dateOfBirth value. Expected format is YYYY-MM-DD.";

static DATE_OF_BIRTH_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap()
});

/// Validate a request struct using validator
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| {
            let mut errors = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => m.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    format!("{}: {}", field, messages.join(", "))
                })
                .collect::<Vec<_>>();
            errors.sort();

            AppError::ValidationError(errors.join("; "))
        })
}

/// Parse an optional `YYYY-MM-DD` date of birth.
///
/// Absent or empty input yields `Ok(None)`. Anything else must match the
/// pattern and name a real calendar day.
pub fn parse_date_of_birth(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    if !DATE_OF_BIRTH_FORMAT.is_match(raw) {
        return Err(AppError::BadRequest(INVALID_DATE_OF_BIRTH.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::BadRequest(INVALID_DATE_OF_BIRTH.to_string()))
}
