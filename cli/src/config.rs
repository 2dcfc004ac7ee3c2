//! CLI Configuration

use crate::output::OutputFormat;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use taxi_forms::FormsConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub booking_reset_ms: Option<u64>,
    pub contact_reset_ms: Option<u64>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self, String> {
        let path = Self::config_path(profile)?;
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| e.to_string())?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf, String> {
        let path = Self::config_path(profile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, content).map_err(|e| e.to_string())?;
        Ok(path)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Reset delays for the forms, profile values over `base`
    pub fn forms_config(&self, mut forms: FormsConfig) -> FormsConfig {
        if let Some(ms) = self.booking_reset_ms {
            forms.booking.reset_delay_ms = ms;
        }
        if let Some(ms) = self.contact_reset_ms {
            forms.contact.reset_delay_ms = ms;
        }
        forms
    }

    pub fn output_format(&self) -> OutputFormat {
        self.default_format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
            .unwrap_or(OutputFormat::Table)
    }

    fn config_path(profile: Option<&str>) -> Result<PathBuf, String> {
        let home = dirs::home_dir().ok_or("Cannot find home directory")?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".bookataxi").join(filename))
    }
}
