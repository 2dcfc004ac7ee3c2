//! Ride booking rules

use crate::domain::catalog::ServiceTier;
use crate::domain::draft::BookingDraft;
use crate::domain::errors::FieldErrors;
use crate::domain::fields::BookingField;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use taxi_common::{is_present, Clock, DomainError, PhoneNumber, DATE_FORMAT, TIME_FORMAT, TIME_FORMAT_SECONDS};

const MIN_NAME_CHARS: usize = 2;

/// Validate a booking draft against the current local time
pub fn validate_booking(draft: &BookingDraft, now: NaiveDateTime) -> FieldErrors<BookingField> {
    let mut errors = FieldErrors::new();
    let today = now.date();

    if !is_present(&draft.passenger_name) {
        errors.insert(BookingField::PassengerName, "Passenger name is required");
    } else if draft.passenger_name.trim().chars().count() < MIN_NAME_CHARS {
        errors.insert(BookingField::PassengerName, "Name must be at least 2 characters");
    }

    match PhoneNumber::parse(&draft.contact_number) {
        Ok(_) => {}
        Err(DomainError::EmptyPhone) => {
            errors.insert(BookingField::ContactNumber, "Contact number is required")
        }
        Err(_) => errors.insert(BookingField::ContactNumber, "Phone number must have at least 10 digits"),
    }

    if !is_present(&draft.pickup_location) {
        errors.insert(BookingField::PickupLocation, "Pickup location is required");
    }

    if !is_present(&draft.dropoff_location) {
        errors.insert(BookingField::DropoffLocation, "Drop-off location is required");
    }

    // Guarded on pickup only; an empty dropoff already carries its required error.
    if is_present(&draft.pickup_location)
        && draft.pickup_location.trim() == draft.dropoff_location.trim()
    {
        errors.insert(
            BookingField::DropoffLocation,
            "Drop-off location must be different from pickup location",
        );
    }

    let date = parse_date(&draft.date);
    if !is_present(&draft.date) {
        errors.insert(BookingField::Date, "Date is required");
    } else {
        match date {
            None => errors.insert(BookingField::Date, "Please select a valid date"),
            Some(d) if d < today => errors.insert(BookingField::Date, "Please select a future date"),
            Some(_) => {}
        }
    }

    if !is_present(&draft.time) {
        errors.insert(BookingField::Time, "Time is required");
    } else {
        match parse_time(&draft.time) {
            None => errors.insert(BookingField::Time, "Please select a valid time"),
            Some(t) => {
                if date == Some(today) && today.and_time(t) <= now {
                    errors.insert(BookingField::Time, "Please select a future time");
                }
            }
        }
    }

    if ServiceTier::find(draft.service_type.trim()).is_none() {
        errors.insert(BookingField::ServiceType, "Please select a valid service type");
    }

    errors
}

/// Earliest date a date picker should offer, as `YYYY-MM-DD`
///
/// Informational only: [`validate_booking`] re-checks the boundary at submit
/// time, so a stale picker cannot bypass it.
pub fn min_selectable_date(clock: &dyn Clock) -> String {
    clock.today().format(DATE_FORMAT).to_string()
}

// chrono accepts unpadded fields ("2024-6-1", "9:30"); pickers never emit
// them, so only values that format back to themselves are accepted.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == value)
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    [TIME_FORMAT, TIME_FORMAT_SECONDS].into_iter().find_map(|format| {
        NaiveTime::parse_from_str(value, format)
            .ok()
            .filter(|t| t.format(format).to_string() == value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::Draft;
    use crate::domain::fields::FieldName;
    use taxi_common::FixedClock;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-06-01 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            passenger_name: "Jane Doe".into(),
            contact_number: "(555) 123-4567".into(),
            pickup_location: "123 Main St".into(),
            dropoff_location: "456 Oak Avenue".into(),
            date: "2024-06-02".into(),
            time: "09:30".into(),
            service_type: "premium".into(),
        }
    }

    #[test]
    fn test_valid_booking() {
        assert!(validate_booking(&valid_draft(), now()).is_empty());
    }

    #[test]
    fn test_empty_booking_reports_every_required_field() {
        let errors = validate_booking(&BookingDraft::default(), now());
        assert_eq!(errors.get(BookingField::PassengerName), Some("Passenger name is required"));
        assert_eq!(errors.get(BookingField::ContactNumber), Some("Contact number is required"));
        assert_eq!(errors.get(BookingField::PickupLocation), Some("Pickup location is required"));
        assert_eq!(errors.get(BookingField::DropoffLocation), Some("Drop-off location is required"));
        assert_eq!(errors.get(BookingField::Date), Some("Date is required"));
        assert_eq!(errors.get(BookingField::Time), Some("Time is required"));
        // Default tier is valid
        assert!(!errors.contains(BookingField::ServiceType));
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_short_name() {
        let draft = BookingDraft { passenger_name: "  J  ".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::PassengerName), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let draft = BookingDraft { passenger_name: "   ".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::PassengerName), Some("Passenger name is required"));
    }

    #[test]
    fn test_contact_number_digits() {
        let draft = BookingDraft { contact_number: "555-123-456".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(
            errors.get(BookingField::ContactNumber),
            Some("Phone number must have at least 10 digits")
        );

        let draft = BookingDraft { contact_number: "+1 555.123.4567".into(), ..valid_draft() };
        assert!(validate_booking(&draft, now()).is_empty());
    }

    #[test]
    fn test_same_pickup_and_dropoff() {
        let draft = BookingDraft {
            pickup_location: "123 Main St".into(),
            dropoff_location: "123 Main St".into(),
            ..valid_draft()
        };
        let errors = validate_booking(&draft, now());
        assert_eq!(
            errors.get(BookingField::DropoffLocation),
            Some("Drop-off location must be different from pickup location")
        );
        assert!(!errors.contains(BookingField::PickupLocation));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_same_locations_compared_trimmed() {
        let draft = BookingDraft {
            pickup_location: "123 Main St ".into(),
            dropoff_location: " 123 Main St".into(),
            ..valid_draft()
        };
        let errors = validate_booking(&draft, now());
        assert_eq!(
            errors.get(BookingField::DropoffLocation),
            Some("Drop-off location must be different from pickup location")
        );
    }

    #[test]
    fn test_both_locations_empty_only_required_errors() {
        let draft = BookingDraft {
            pickup_location: " ".into(),
            dropoff_location: "".into(),
            ..valid_draft()
        };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::PickupLocation), Some("Pickup location is required"));
        assert_eq!(errors.get(BookingField::DropoffLocation), Some("Drop-off location is required"));
    }

    #[test]
    fn test_date_boundary() {
        let yesterday = BookingDraft { date: "2024-05-31".into(), ..valid_draft() };
        let errors = validate_booking(&yesterday, now());
        assert_eq!(errors.get(BookingField::Date), Some("Please select a future date"));

        let today = BookingDraft { date: "2024-06-01".into(), time: "18:00".into(), ..valid_draft() };
        assert!(!validate_booking(&today, now()).contains(BookingField::Date));
    }

    #[test]
    fn test_past_date_does_not_constrain_time() {
        let draft = BookingDraft { date: "2024-05-31".into(), time: "08:00".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert!(errors.contains(BookingField::Date));
        assert!(!errors.contains(BookingField::Time));
    }

    #[test]
    fn test_same_day_time_boundary() {
        let early = BookingDraft { date: "2024-06-01".into(), time: "13:59".into(), ..valid_draft() };
        let errors = validate_booking(&early, now());
        assert_eq!(errors.get(BookingField::Time), Some("Please select a future time"));

        let exact = BookingDraft { date: "2024-06-01".into(), time: "14:00".into(), ..valid_draft() };
        assert!(validate_booking(&exact, now()).contains(BookingField::Time));

        let later = BookingDraft { date: "2024-06-01".into(), time: "14:01".into(), ..valid_draft() };
        assert!(validate_booking(&later, now()).is_empty());
    }

    #[test]
    fn test_future_date_allows_any_time() {
        let draft = BookingDraft { date: "2024-06-02".into(), time: "00:01".into(), ..valid_draft() };
        assert!(validate_booking(&draft, now()).is_empty());
    }

    #[test]
    fn test_time_with_seconds() {
        let draft = BookingDraft { date: "2024-06-01".into(), time: "14:30:00".into(), ..valid_draft() };
        assert!(validate_booking(&draft, now()).is_empty());
    }

    #[test]
    fn test_malformed_date_and_time_fail_their_fields() {
        let draft = BookingDraft { date: "tomorrow".into(), time: "25:99".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::Date), Some("Please select a valid date"));
        assert_eq!(errors.get(BookingField::Time), Some("Please select a valid time"));
    }

    #[test]
    fn test_unpadded_date_and_time_rejected() {
        let draft = BookingDraft { date: "2024-6-2".into(), time: "9:30".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::Date), Some("Please select a valid date"));
        assert_eq!(errors.get(BookingField::Time), Some("Please select a valid time"));

        let padded = BookingDraft { date: " 2024-06-02 ".into(), time: "09:30".into(), ..valid_draft() };
        assert!(validate_booking(&padded, now()).is_empty());
    }

    #[test]
    fn test_unknown_service_type() {
        let draft = BookingDraft { service_type: "helicopter".into(), ..valid_draft() };
        let errors = validate_booking(&draft, now());
        assert_eq!(errors.get(BookingField::ServiceType), Some("Please select a valid service type"));
    }

    #[test]
    fn test_min_selectable_date() {
        let clock = FixedClock::new(now());
        assert_eq!(min_selectable_date(&clock), "2024-06-01");
    }

    proptest::proptest! {
        #[test]
        fn prop_validation_is_idempotent(
            name in ".{0,12}",
            phone in "[0-9 ()-]{0,16}",
            pickup in "[a-z ]{0,8}",
            dropoff in "[a-z ]{0,8}",
            day in 25u32..=30,
            hour in 0u32..24,
        ) {
            let draft = BookingDraft {
                passenger_name: name,
                contact_number: phone,
                pickup_location: pickup,
                dropoff_location: dropoff,
                date: format!("2024-05-{day:02}"),
                time: format!("{hour:02}:00"),
                service_type: "economy".into(),
            };
            proptest::prop_assert_eq!(validate_booking(&draft, now()), validate_booking(&draft, now()));
        }

        #[test]
        fn prop_missing_required_field_is_reported(index in 0usize..6) {
            let field = BookingField::ALL[index];
            let mut draft = valid_draft();
            draft.set(field, String::new());
            let errors = validate_booking(&draft, now());
            proptest::prop_assert!(errors.contains(field));
        }
    }
}
