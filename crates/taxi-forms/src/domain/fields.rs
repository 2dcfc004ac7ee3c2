//! Field names of the booking and contact forms
//!
//! Field names travel to and from the presentation layer in camelCase
//! (`passengerName`, `dropoffLocation`).

use crate::FormsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Which form a draft, error or event belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of field names for one form
pub trait FieldName:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = FormsError>
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// Every field, in display order
    const ALL: &'static [Self];

    /// The camelCase wire name
    fn as_str(&self) -> &'static str;
}

/// Implements `FieldName`, `Display` and `FromStr` from one name table
macro_rules! field_names {
    ($ty:ident, $kind:expr, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl FieldName for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FormsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(FormsError::UnknownField {
                        form: $kind,
                        name: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Booking form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    PassengerName,
    ContactNumber,
    PickupLocation,
    DropoffLocation,
    Date,
    Time,
    ServiceType,
}

field_names!(BookingField, FormKind::Booking, {
    PassengerName => "passengerName",
    ContactNumber => "contactNumber",
    PickupLocation => "pickupLocation",
    DropoffLocation => "dropoffLocation",
    Date => "date",
    Time => "time",
    ServiceType => "serviceType",
});

/// Contact form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

field_names!(ContactField, FormKind::Contact, {
    Name => "name",
    Email => "email",
    Phone => "phone",
    Subject => "subject",
    Message => "message",
});
