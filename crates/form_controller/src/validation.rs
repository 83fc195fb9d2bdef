use std::sync::LazyLock;

use regex::Regex;
use shared::{
    domain::{BusinessForm, FormField},
    error::FieldError,
};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks name, email and phone in that order and stops at the first failure.
/// Observations are never validated.
pub fn validate(form: &BusinessForm) -> Result<(), FieldError> {
    for field in FormField::VALIDATION_ORDER {
        let value = form.value(field).trim();
        if value.is_empty() {
            return Err(FieldError::RequiredField(field));
        }
        if field == FormField::Email && !is_valid_email(value) {
            return Err(FieldError::InvalidFormat(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> BusinessForm {
        BusinessForm::new(name, email, phone, "")
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(validate(&form("Acme", "a@b.com", "123")), Ok(()));
    }

    #[test]
    fn blank_required_fields_fail_in_order() {
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                validate(&form(blank, blank, blank)),
                Err(FieldError::RequiredField(FormField::Name))
            );
            assert_eq!(
                validate(&form("Acme", blank, "123")),
                Err(FieldError::RequiredField(FormField::Email))
            );
            assert_eq!(
                validate(&form("Acme", "a@b.com", blank)),
                Err(FieldError::RequiredField(FormField::Phone))
            );
        }
    }

    #[test]
    fn email_format_is_checked_before_phone() {
        assert_eq!(
            validate(&form("Acme", "not-an-email", "")),
            Err(FieldError::InvalidFormat(FormField::Email))
        );
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for email in [
            "ab.com",
            "a@bcom",
            "a@b.",
            "@b.com",
            "a@.com",
            "a b@c.com",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn email_pattern_accepts_simple_addresses() {
        for email in ["a@b.com", "first.last@sub.domain.org", "x@y.co"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn observations_are_optional() {
        let form = BusinessForm::new("Acme", "a@b.com", "123", "   ");
        assert_eq!(validate(&form), Ok(()));
    }
}
