//! Config commands

use crate::config::Config;
use crate::ConfigCommands;

fn show(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "(not set)".into())
}

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(profile).unwrap_or_default();
            match key.as_str() {
                "booking_reset_ms" => config.booking_reset_ms = Some(parse_ms(&value)?),
                "contact_reset_ms" => config.contact_reset_ms = Some(parse_ms(&value)?),
                "default_format" => config.default_format = Some(value),
                _ => return Err(format!("Unknown config key: {}", key)),
            }
            config.save(profile)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(profile).unwrap_or_default();
            let value = match key.as_str() {
                "booking_reset_ms" => show(config.booking_reset_ms),
                "contact_reset_ms" => show(config.contact_reset_ms),
                "default_format" => show(config.default_format),
                _ => return Err(format!("Unknown config key: {}", key)),
            };
            println!("{}: {}", key, value);
        }
        ConfigCommands::List => {
            let config = Config::load(profile).unwrap_or_default();
            println!("booking_reset_ms: {}", show(config.booking_reset_ms));
            println!("contact_reset_ms: {}", show(config.contact_reset_ms));
            println!("default_format: {}", show(config.default_format));
        }
    }
    Ok(())
}

fn parse_ms(value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("Expected milliseconds, got {:?}", value))
}
