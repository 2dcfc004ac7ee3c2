//! Service catalog
//!
//! Read-only reference data: the ride tiers a booking can select, the full
//! services listing and the contact channels.

use serde::Serialize;

/// A selectable ride class
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceTier {
    /// Identifier stored in the booking draft
    pub id: &'static str,
    pub name: &'static str,
    /// Label shown in the tier picker
    pub label: &'static str,
    pub base_price_cents: u32,
    /// Distance rate; `None` for flat "from" pricing
    pub per_km_cents: Option<u32>,
}

/// Tiers offered by the booking form, default first
pub static SERVICE_TIERS: [ServiceTier; 5] = [
    ServiceTier {
        id: "economy",
        name: "Economy",
        label: "Economy - $5 base",
        base_price_cents: 500,
        per_km_cents: Some(200),
    },
    ServiceTier {
        id: "premium",
        name: "Premium",
        label: "Premium - $10 base",
        base_price_cents: 1000,
        per_km_cents: Some(300),
    },
    ServiceTier {
        id: "xl",
        name: "XL",
        label: "XL - $15 base",
        base_price_cents: 1500,
        per_km_cents: Some(400),
    },
    ServiceTier {
        id: "executive",
        name: "Executive",
        label: "Executive - $20 base",
        base_price_cents: 2000,
        per_km_cents: Some(500),
    },
    ServiceTier {
        id: "airport",
        name: "Airport Transfer",
        label: "Airport Transfer - $25",
        base_price_cents: 2500,
        per_km_cents: None,
    },
];

impl ServiceTier {
    /// Look up a tier by identifier
    pub fn find(id: &str) -> Option<&'static ServiceTier> {
        SERVICE_TIERS.iter().find(|t| t.id == id)
    }

    /// The tier a fresh booking starts with
    pub fn default_tier() -> &'static ServiceTier {
        &SERVICE_TIERS[0]
    }

    /// Human readable pricing, e.g. `$5 base + $2/km` or `From $25`
    pub fn price_descriptor(&self) -> String {
        match self.per_km_cents {
            Some(rate) => format!("{} base + {}/km", dollars(self.base_price_cents), dollars(rate)),
            None => format!("From {}", dollars(self.base_price_cents)),
        }
    }
}

fn dollars(cents: u32) -> String {
    if cents % 100 == 0 {
        format!("${}", cents / 100)
    } else {
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

/// An entry of the services page
#[derive(Clone, Debug, Serialize)]
pub struct ServiceListing {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    /// Booking tier behind the listing, if it can be booked online
    pub tier: Option<&'static str>,
}

pub static SERVICES: [ServiceListing; 6] = [
    ServiceListing {
        name: "Economy",
        icon: "🚗",
        description: "Budget-friendly option for solo travelers and small groups",
        features: &["Seats 4 passengers", "Air-conditioned", "Best value for money"],
        price: "$5 base + $2/km",
        tier: Some("economy"),
    },
    ServiceListing {
        name: "Premium",
        icon: "🚙",
        description: "Comfortable ride with enhanced features and services",
        features: &["Seats 5 passengers", "Premium vehicles", "Water & snacks included"],
        price: "$10 base + $3/km",
        tier: Some("premium"),
    },
    ServiceListing {
        name: "XL",
        icon: "🚐",
        description: "Spacious option for groups and families",
        features: &["Seats 6+ passengers", "Extra luggage space", "Comfortable seating"],
        price: "$15 base + $4/km",
        tier: Some("xl"),
    },
    ServiceListing {
        name: "Executive",
        icon: "🚕",
        description: "Luxury service for corporate clients and special occasions",
        features: &["Premium seating", "Professional attire", "Business amenities"],
        price: "$20 base + $5/km",
        tier: Some("executive"),
    },
    ServiceListing {
        name: "Airport Transfer",
        icon: "✈️",
        description: "Dedicated service to and from the airport",
        features: &["Meet & greet", "Flight tracking", "Luggage assistance"],
        price: "From $25",
        tier: Some("airport"),
    },
    ServiceListing {
        name: "Hourly Rental",
        icon: "⏰",
        description: "Rent a taxi for hourly use",
        features: &["Flexible timing", "Maximum value", "Professional driver"],
        price: "$50/hour",
        tier: None,
    },
];

/// A way to reach the dispatch office
#[derive(Clone, Debug, Serialize)]
pub struct ContactChannel {
    pub kind: &'static str,
    pub icon: &'static str,
    pub lines: &'static [&'static str],
}

pub static CONTACT_CHANNELS: [ContactChannel; 5] = [
    ContactChannel { kind: "Phone", icon: "📞", lines: &["(555) 123-4567"] },
    ContactChannel { kind: "Email", icon: "📧", lines: &["support@bookataxl.com"] },
    ContactChannel { kind: "Address", icon: "📍", lines: &["123 Main Street", "City, State 12345"] },
    ContactChannel { kind: "Business Hours", icon: "🕐", lines: &["24/7 Available", "Always Here to Help"] },
    ContactChannel { kind: "Social", icon: "🌐", lines: &["Facebook", "Twitter", "Instagram"] },
];
