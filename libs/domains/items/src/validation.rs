//! Input validation for items.

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ItemError, ItemResult};
use crate::models::{ItemFields, ItemInput};

/// chrono format matching `DD-MM-YYYY`.
const DATE_FORMAT: &str = "%d-%m-%Y";
const DATE_LEN: usize = 10;

/// Returns true iff `s` is exactly `DD-MM-YYYY` and names a real calendar day.
///
/// chrono alone accepts unpadded days and signed or short years, so the fixed
/// shape is checked before parsing.
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != DATE_LEN {
        return false;
    }

    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'-',
        _ => b.is_ascii_digit(),
    });

    shaped && NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}

/// `validator` rule wrapping [`is_valid_date`].
pub fn validate_date_format(date: &str) -> Result<(), ValidationError> {
    if !is_valid_date(date) {
        return Err(ValidationError::new("date_format"));
    }
    Ok(())
}

/// Presence failures win over format failures.
fn classify(errors: &ValidationErrors) -> ItemError {
    let missing = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .any(|e| e.code == "required" || e.code == "length");

    if missing {
        ItemError::MissingField
    } else {
        ItemError::InvalidDate
    }
}

impl ItemInput {
    /// Checks presence of both fields, then the date format.
    pub fn validated(self) -> ItemResult<ItemFields> {
        self.validate().map_err(|e| classify(&e))?;

        match (self.name, self.date) {
            (Some(name), Some(date)) => Ok(ItemFields { name, date }),
            _ => Err(ItemError::MissingField),
        }
    }
}
