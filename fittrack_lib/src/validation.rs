//! Input validation for user-supplied search terms and pagination arguments.

use crate::error::FitTrackError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: usize = 100;

/// Strip ASCII control characters, trim whitespace, and enforce a byte-length
/// limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, FitTrackError> {
    if input.len() > max_len {
        return Err(FitTrackError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(FitTrackError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search term: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, FitTrackError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a 1-indexed page number.
pub fn validate_page(page: i64) -> Result<usize, FitTrackError> {
    if page >= 1 {
        Ok(page as usize)
    } else {
        Err(FitTrackError::InvalidInput(format!(
            "page must be at least 1, got {}",
            page
        )))
    }
}

/// Validate a page size in `1..=MAX_PAGE_SIZE`.
pub fn validate_page_size(size: i64) -> Result<usize, FitTrackError> {
    if (1..=MAX_PAGE_SIZE as i64).contains(&size) {
        Ok(size as usize)
    } else {
        Err(FitTrackError::InvalidInput(format!(
            "page size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, size
        )))
    }
}

/// Validate a day-of-week number (1 = Monday .. 7 = Sunday).
pub fn validate_week_day(day: u8) -> Result<u8, FitTrackError> {
    if (1..=7).contains(&day) {
        Ok(day)
    } else {
        Err(FitTrackError::InvalidInput(format!(
            "week day must be between 1 and 7, got {}",
            day
        )))
    }
}
