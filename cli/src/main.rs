//! Book-a-Taxi CLI
//!
//! Terminal front end for the Book-a-Taxi site: browse the service catalog
//! and fill in the ride booking or contact forms interactively.
//!
//! # Usage
//!
//! ```bash
//! bookataxi services
//! bookataxi contact-info --format json
//! bookataxi book
//! printf 'name=Jo\nemail=jo@example.com\nsubmit\n' | bookataxi contact
//! bookataxi config set booking_reset_ms 1500
//! bookataxi --forms-config forms.json book
//! ```

use clap::{Parser, Subcommand};
use std::sync::Arc;
use taxi_common::SystemClock;
use taxi_forms::{BookingController, ContactController, FormsConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "bookataxi")]
#[command(author = "Book-a-Taxi")]
#[command(version)]
#[command(about = "Book-a-Taxi Command Line Interface", long_about = None)]
struct Cli {
    /// Output format (defaults to the profile's format, then table)
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    /// JSON file with per-form settings, applied beneath profile and flag values
    #[arg(long, env = "BOOKATAXI_FORMS_CONFIG")]
    forms_config: Option<String>,

    /// How long the booking confirmation stays up, in milliseconds
    #[arg(long, env = "BOOKATAXI_BOOKING_RESET_MS")]
    booking_reset_ms: Option<u64>,

    /// How long the contact confirmation stays up, in milliseconds
    #[arg(long, env = "BOOKATAXI_CONTACT_RESET_MS")]
    contact_reset_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ride services and prices
    Services,
    /// Show how to reach us
    ContactInfo,
    /// Book a ride interactively
    Book,
    /// Send us a message interactively
    Contact,
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the forms.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config not readable ({}), using defaults", e);
        config::Config::default()
    });
    let format = cli.format.unwrap_or_else(|| config.output_format());

    let base = match cli.forms_config.as_deref().map(FormsConfig::load).transpose() {
        Ok(base) => base.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut forms_config = config.forms_config(base);
    if let Some(ms) = cli.booking_reset_ms {
        forms_config.booking.reset_delay_ms = ms;
    }
    if let Some(ms) = cli.contact_reset_ms {
        forms_config.contact.reset_delay_ms = ms;
    }

    let result = match cli.command {
        Commands::Services => commands::catalog::services(format),
        Commands::ContactInfo => commands::catalog::contact_info(format),
        Commands::Book => {
            let controller = BookingController::new(Arc::new(SystemClock), &forms_config);
            commands::session::run(controller, format).await
        }
        Commands::Contact => {
            let controller = ContactController::new(Arc::new(SystemClock), &forms_config);
            commands::session::run(controller, format).await
        }
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
