//! Draft records
//!
//! The in-progress, user-editable values of a form. Every value is kept as
//! the raw string the user typed; interpretation happens in validation.

use super::catalog::ServiceTier;
use super::fields::{BookingField, ContactField, FieldName};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A form's editable values, addressed by field name
pub trait Draft: Default + Clone + Debug + Serialize + Send + Sync + 'static {
    type Field: FieldName;

    /// Current value of a field
    fn get(&self, field: Self::Field) -> &str;

    /// Replace a field's value
    fn set(&mut self, field: Self::Field, value: String);

    /// True when every field holds its empty default
    fn is_pristine(&self) -> bool;
}

/// Ride booking draft
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub passenger_name: String,
    pub contact_number: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Service tier identifier
    pub service_type: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            passenger_name: String::new(),
            contact_number: String::new(),
            pickup_location: String::new(),
            dropoff_location: String::new(),
            date: String::new(),
            time: String::new(),
            service_type: ServiceTier::default_tier().id.to_string(),
        }
    }
}

impl Draft for BookingDraft {
    type Field = BookingField;

    fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::PassengerName => &self.passenger_name,
            BookingField::ContactNumber => &self.contact_number,
            BookingField::PickupLocation => &self.pickup_location,
            BookingField::DropoffLocation => &self.dropoff_location,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::ServiceType => &self.service_type,
        }
    }

    fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::PassengerName => &mut self.passenger_name,
            BookingField::ContactNumber => &mut self.contact_number,
            BookingField::PickupLocation => &mut self.pickup_location,
            BookingField::DropoffLocation => &mut self.dropoff_location,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::ServiceType => &mut self.service_type,
        };
        *slot = value;
    }

    fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// Contact inquiry draft
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl Draft for ContactDraft {
    type Field = ContactField;

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
