use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum stored as text in the database.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(ParseStoredValue))` - The column holds a value the
///   code does not recognize
pub fn parse_stored<T: FromStr>(field: &'static str, value: &str) -> Result<T, AppError> {
    value.parse::<T>().map_err(|_| {
        InternalError::ParseStoredValue {
            field,
            value: value.to_string(),
        }
        .into()
    })
}

/// Canonical form of an email address: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Largest page a list endpoint will return.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Clamps a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn page_size(entries: u64) -> u64 {
    entries.clamp(1, MAX_PAGE_SIZE)
}

/// Number of pages needed to show `total` rows at `per_page` rows each.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
