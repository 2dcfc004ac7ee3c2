//! Contact inquiry rules

use crate::domain::draft::ContactDraft;
use crate::domain::errors::FieldErrors;
use crate::domain::fields::ContactField;
use taxi_common::{is_present, DomainError, EmailAddress, PhoneNumber};

/// Validate a contact draft
pub fn validate_contact(draft: &ContactDraft) -> FieldErrors<ContactField> {
    let mut errors = FieldErrors::new();

    if !is_present(&draft.name) {
        errors.insert(ContactField::Name, "Name is required");
    }

    match EmailAddress::parse(draft.email.as_str()) {
        Ok(_) => {}
        Err(DomainError::EmptyEmail) => errors.insert(ContactField::Email, "Email is required"),
        Err(_) => errors.insert(ContactField::Email, "Please enter a valid email"),
    }

    match PhoneNumber::parse(&draft.phone) {
        Ok(_) => {}
        Err(DomainError::EmptyPhone) => errors.insert(ContactField::Phone, "Phone number is required"),
        Err(_) => errors.insert(
            ContactField::Phone,
            "Please enter a valid phone number (at least 10 digits)",
        ),
    }

    if !is_present(&draft.subject) {
        errors.insert(ContactField::Subject, "Subject is required");
    }

    if !is_present(&draft.message) {
        errors.insert(ContactField::Message, "Message is required");
    }

    errors
}
