//! Catalog commands

use crate::output::OutputFormat;
use serde::Serialize;
use tabled::Tabled;
use taxi_forms::{CONTACT_CHANNELS, SERVICES};

#[derive(Debug, Serialize, Tabled)]
pub struct ServiceRow {
    #[tabled(rename = "Service")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Book with")]
    pub tier: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Features")]
    pub features: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ChannelRow {
    #[tabled(rename = "Channel")]
    pub kind: String,
    #[tabled(rename = "Details")]
    pub details: String,
}

pub fn service_rows() -> Vec<ServiceRow> {
    SERVICES
        .iter()
        .map(|s| ServiceRow {
            name: format!("{} {}", s.icon, s.name),
            price: s.price.to_string(),
            tier: s.tier.map(|t| format!("serviceType={}", t)).unwrap_or_else(|| "call us".into()),
            description: s.description.to_string(),
            features: s.features.join(", "),
        })
        .collect()
}

pub fn channel_rows() -> Vec<ChannelRow> {
    CONTACT_CHANNELS
        .iter()
        .map(|c| ChannelRow {
            kind: format!("{} {}", c.icon, c.kind),
            details: c.lines.join(", "),
        })
        .collect()
}

pub fn services(format: OutputFormat) -> Result<(), String> {
    format.print_rows(&service_rows());
    Ok(())
}

pub fn contact_info(format: OutputFormat) -> Result<(), String> {
    format.print_rows(&channel_rows());
    Ok(())
}
