//! Canonical phone number value object.

use pl_shared::phone::{mask_phone_number, normalize_phone_number};
use serde::Serialize;
use std::fmt;

/// A phone number in canonical `+55...` form.
///
/// The only constructor is [`PhoneNumber::normalize`], which never fails;
/// the provider is the gate for numbers that are still malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_phone_number(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for logs
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_formatted_input() {
        let phone = PhoneNumber::normalize("(11) 98765-4321");
        assert_eq!(phone.as_str(), "+5511987654321");
        assert_eq!(phone.to_string(), "+5511987654321");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = PhoneNumber::normalize("011 98765 4321");
        let twice = PhoneNumber::normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_masked() {
        let phone = PhoneNumber::normalize("11987654321");
        assert_eq!(phone.masked(), "+55*******4321");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let phone = PhoneNumber::normalize("987654321");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+5511987654321\"");
    }
}
