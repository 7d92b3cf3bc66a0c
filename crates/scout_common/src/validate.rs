//! Per-field input validation.
//!
//! Rules are deliberately lenient: the goal is to catch obvious typos
//! (an email without a domain, a three-digit "phone number"), not to
//! implement the full RFCs.

use crate::candidate::Field;
use crate::error::ScoutError;
use regex::Regex;
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap())
}

fn years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.?\d*$").unwrap())
}

/// Validate a candidate answer for one intake field.
///
/// Returns the trimmed value on success; a recoverable
/// [`ScoutError::Validation`] with a human-readable reason otherwise.
pub fn validate_field(field: Field, value: &str) -> Result<String, ScoutError> {
    let value = value.trim();

    let reason = match field {
        Field::Email if !email_re().is_match(value) => {
            Some("it doesn't look like a valid email format")
        }
        Field::Phone if !phone_re().is_match(value) => {
            Some("it should be a valid phone number with at least 10 digits")
        }
        Field::YearsExperience if !years_re().is_match(value) => {
            Some("it should be a number (e.g., 5 or 3.5)")
        }
        Field::FullName if value.chars().count() < 2 => Some("it seems too short for a full name"),
        Field::TechStack if value.chars().count() < 10 => {
            Some("please share more detail about your tech stack")
        }
        _ if value.is_empty() => Some("it can't be empty"),
        _ => None,
    };

    match reason {
        Some(reason) => Err(ScoutError::Validation {
            field: field.label().to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plausible_addresses() {
        for addr in ["a@b.com", "first.last@example.co.uk", "dev+tag@corp.io"] {
            assert!(validate_field(Field::Email, addr).is_ok(), "{addr}");
        }
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for addr in ["a@b", "no-at-sign.com", "@example.com", "a b@c.com", ""] {
            assert!(validate_field(Field::Email, addr).is_err(), "{addr}");
        }
    }

    #[test]
    fn test_phone_requires_ten_characters() {
        assert!(validate_field(Field::Phone, "+1 (555) 867-5309").is_ok());
        assert!(validate_field(Field::Phone, "1234567890").is_ok());
        assert!(validate_field(Field::Phone, "12345").is_err());
        assert!(validate_field(Field::Phone, "call me maybe").is_err());
    }

    #[test]
    fn test_years_experience_numeric() {
        assert!(validate_field(Field::YearsExperience, "5").is_ok());
        assert!(validate_field(Field::YearsExperience, "3.5").is_ok());
        assert!(validate_field(Field::YearsExperience, "five").is_err());
        assert!(validate_field(Field::YearsExperience, "-2").is_err());
    }

    #[test]
    fn test_full_name_min_length() {
        assert!(validate_field(Field::FullName, "Jo").is_ok());
        assert!(validate_field(Field::FullName, "J").is_err());
    }

    #[test]
    fn test_tech_stack_needs_detail() {
        assert!(validate_field(Field::TechStack, "Rust, tokio, PostgreSQL").is_ok());
        assert!(validate_field(Field::TechStack, "Rust").is_err());
    }

    #[test]
    fn test_free_text_fields_reject_empty() {
        assert!(validate_field(Field::DesiredPosition, "Backend Engineer").is_ok());
        assert!(validate_field(Field::DesiredPosition, "   ").is_err());
        assert!(validate_field(Field::CurrentLocation, "Oslo").is_ok());
        assert!(validate_field(Field::CurrentLocation, "").is_err());
    }

    #[test]
    fn test_validated_value_is_trimmed() {
        let value = validate_field(Field::Email, "  a@b.com  ").unwrap();
        assert_eq!(value, "a@b.com");
    }
}
