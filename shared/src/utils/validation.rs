//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

static VERIFICATION_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{6}$").unwrap()
});

/// Check that a code is exactly six ASCII digits
pub fn is_valid_verification_code(code: &str) -> bool {
    // `\d` in the regex crate is Unicode-aware, so restrict to ASCII explicitly
    code.is_ascii() && VERIFICATION_CODE_REGEX.is_match(code)
}

/// Check if a string is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
