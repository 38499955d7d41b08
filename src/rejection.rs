use std::fmt;

/// Outcome of update-request arbitration when the request is not honored.
///
/// Only `NotAMember` indicates a programmer error; the other variants are
/// the normal result of the authority rule and are never surfaced as errors.
#[derive(Debug, PartialEq)]
pub enum UpdateRejection {
    NotAMember,
    NoActiveProvider,
    NotTopmost,
}

impl fmt::Display for UpdateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateRejection::NotAMember => {
                write!(f, "Provider does not belong to this coordinator")
            }
            UpdateRejection::NoActiveProvider => write!(f, "No provider is active"),
            UpdateRejection::NotTopmost => {
                write!(f, "Provider is not the topmost active one")
            }
        }
    }
}

impl std::error::Error for UpdateRejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_member_display() {
        let rejection = UpdateRejection::NotAMember;
        assert_eq!(
            rejection.to_string(),
            "Provider does not belong to this coordinator"
        );
    }

    #[test]
    fn test_no_active_provider_display() {
        let rejection = UpdateRejection::NoActiveProvider;
        assert_eq!(rejection.to_string(), "No provider is active");
    }

    #[test]
    fn test_not_topmost_display() {
        let rejection = UpdateRejection::NotTopmost;
        assert_eq!(
            rejection.to_string(),
            "Provider is not the topmost active one"
        );
    }

    #[test]
    fn test_debug_format() {
        let rejection = UpdateRejection::NotTopmost;
        assert_eq!(format!("{:?}", rejection), "NotTopmost");
    }

    #[test]
    fn test_equality() {
        assert_eq!(UpdateRejection::NotAMember, UpdateRejection::NotAMember);
        assert_ne!(UpdateRejection::NotAMember, UpdateRejection::NotTopmost);
    }

    #[test]
    fn test_error_trait() {
        let rejection: &dyn std::error::Error = &UpdateRejection::NoActiveProvider;
        assert_eq!(rejection.to_string(), "No provider is active");
    }
}
