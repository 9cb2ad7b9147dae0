//! Provider-reported verification status.

/// Status string returned by the provider. Only `approved` counts as verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    Other(String),
}

impl VerificationStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "pending" => VerificationStatus::Pending,
            "approved" => VerificationStatus::Approved,
            "canceled" => VerificationStatus::Canceled,
            other => VerificationStatus::Other(other.to_string()),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationStatus::Approved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Canceled => "canceled",
            VerificationStatus::Other(other) => other,
        }
    }
}

impl From<&str> for VerificationStatus {
    fn from(status: &str) -> Self {
        Self::parse(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_approved_is_approved() {
        assert!(VerificationStatus::parse("approved").is_approved());
        assert!(!VerificationStatus::parse("pending").is_approved());
        assert!(!VerificationStatus::parse("canceled").is_approved());
        assert!(!VerificationStatus::parse("APPROVED").is_approved());
        assert!(!VerificationStatus::parse("").is_approved());
    }

    #[test]
    fn test_round_trip_of_unknown_status() {
        let status = VerificationStatus::parse("max_attempts_reached");
        assert_eq!(status, VerificationStatus::Other("max_attempts_reached".into()));
        assert_eq!(status.as_str(), "max_attempts_reached");
    }
}
