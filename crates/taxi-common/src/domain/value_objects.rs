//! Value Objects - Immutable domain primitives with validation
//!
//! Value Objects are:
//! - Immutable
//! - Comparable by value (not identity)
//! - Self-validating
//! - Side-effect free

use crate::error::{DomainError, DomainResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Minimum digit count for a dialable phone number
pub const MIN_PHONE_DIGITS: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Email address (Value Object)
///
/// # Invariants
/// - At least one non-space, non-`@` character before a single `@`
/// - The domain holds a dot with non-space characters on both sides
/// - No whitespace anywhere, so surrounding spaces are rejected, not trimmed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create new email address with validation
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyEmail);
        }
        if !email_pattern().is_match(&value) {
            return Err(DomainError::InvalidEmail(value));
        }
        Ok(Self(value))
    }

    /// Get inner value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number (Value Object)
///
/// Holds only the digits of the entered number; separators such as
/// spaces, dashes, dots and parentheses are dropped.
///
/// # Invariants
/// - At least [`MIN_PHONE_DIGITS`] digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create from free-form user input
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value.trim().is_empty() {
            return Err(DomainError::EmptyPhone);
        }
        let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < MIN_PHONE_DIGITS {
            return Err(DomainError::PhoneTooShort {
                min: MIN_PHONE_DIGITS,
                actual: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// Get digits
    pub fn digits(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = EmailAddress::parse("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["user@", "user.com", "@example.com", "user@example", "us er@example.com"] {
            assert!(
                matches!(EmailAddress::parse(bad), Err(DomainError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_surrounding_whitespace_rejected() {
        assert!(matches!(EmailAddress::parse(" user@example.com"), Err(DomainError::InvalidEmail(_))));
        assert!(matches!(EmailAddress::parse("user@example.com "), Err(DomainError::InvalidEmail(_))));
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(EmailAddress::parse("   "), Err(DomainError::EmptyEmail));
    }

    #[test]
    fn test_multi_dot_domain() {
        assert!(EmailAddress::parse("a.b@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_phone_strips_formatting() {
        let phone = PhoneNumber::parse("(555) 123-4567").unwrap();
        assert_eq!(phone.digits(), "5551234567");
    }

    #[test]
    fn test_phone_too_short() {
        assert_eq!(
            PhoneNumber::parse("555-1234"),
            Err(DomainError::PhoneTooShort { min: 10, actual: 7 })
        );
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(PhoneNumber::parse(" "), Err(DomainError::EmptyPhone));
    }

    #[test]
    fn test_international_phone() {
        let phone = PhoneNumber::parse("+44 20 7946 0958").unwrap();
        assert_eq!(phone.digits(), "442079460958");
    }

    proptest::proptest! {
        #[test]
        fn prop_phone_accepts_any_formatting(digits in "[0-9]{10,15}", sep in "[ ().+-]{0,3}") {
            let formatted: String = digits
                .chars()
                .flat_map(|c| std::iter::once(c).chain(sep.chars()))
                .collect();
            let phone = PhoneNumber::parse(&formatted).unwrap();
            proptest::prop_assert_eq!(phone.digits(), digits.as_str());
        }
    }
}
