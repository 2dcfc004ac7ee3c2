//! Interactive form sessions
//!
//! Reads one command per line from stdin and drives a submission
//! controller, redrawing the form after every change and when the
//! confirmation times out.

use crate::output::OutputFormat;
use colored::Colorize;
use std::time::Duration;
use taxi_forms::validation::min_selectable_date;
use taxi_forms::{
    FieldName, FormEvent, FormKind, FormSpec, FormsError, SubmissionController, SubmitOutcome, SERVICE_TIERS,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Edit { field: String, value: String },
    Submit,
    Show,
    /// Sleep, by default until a pending confirmation would time out
    Wait(Option<u64>),
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some((field, value)) = line.split_once('=') {
            return Ok(Self::Edit {
                field: field.trim().to_string(),
                value: value.to_string(),
            });
        }

        let mut words = line.split_whitespace();
        let command = match words.next() {
            None => return Ok(Self::Empty),
            Some(word) => word.to_ascii_lowercase(),
        };
        match command.as_str() {
            "submit" => Ok(Self::Submit),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "wait" => match words.next() {
                None => Ok(Self::Wait(None)),
                Some(ms) => ms
                    .parse()
                    .map(|ms| Self::Wait(Some(ms)))
                    .map_err(|_| format!("wait takes milliseconds, got {:?}", ms)),
            },
            other => Err(format!("Unknown command {:?}; type `help`", other)),
        }
    }
}

pub async fn run<F: FormSpec>(controller: SubmissionController<F>, format: OutputFormat) -> Result<(), String> {
    let mut events = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help(&controller);
    format.print_form(&controller.view());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break;
                };
                match SessionCommand::parse(&line) {
                    Ok(SessionCommand::Quit) => break,
                    Ok(command) => apply(&controller, command, format).await,
                    Err(e) => eprintln!("{}", e.yellow()),
                }
            }
            event = events.recv() => {
                match event {
                    Ok(FormEvent::Reset { .. }) => {
                        println!("{}", "The form is ready for a new request.".cyan());
                        format.print_form(&controller.view());
                    }
                    Ok(_) | Err(RecvError::Lagged(_)) => {}
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    if controller.teardown() {
        tracing::debug!("session closed while the confirmation was showing");
    }
    Ok(())
}

async fn apply<F: FormSpec>(controller: &SubmissionController<F>, command: SessionCommand, format: OutputFormat) {
    match command {
        SessionCommand::Edit { field, value } => match controller.edit_named(&field, value) {
            Ok(()) => {}
            Err(e @ FormsError::NotEditable) => eprintln!("{}", e.to_string().yellow()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        SessionCommand::Submit => match controller.submit() {
            Ok(SubmitOutcome::Accepted(submission)) => {
                tracing::debug!(id = %submission.id, "accepted");
                format.print_form(&controller.view());
            }
            Ok(SubmitOutcome::Rejected(_)) => format.print_form(&controller.view()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        SessionCommand::Show => format.print_form(&controller.view()),
        SessionCommand::Wait(ms) => {
            let delay = ms.map(Duration::from_millis).unwrap_or_else(|| controller.reset_delay());
            tokio::time::sleep(delay).await;
        }
        SessionCommand::Help => print_help(controller),
        SessionCommand::Quit | SessionCommand::Empty => {}
    }
}

fn print_help<F: FormSpec>(controller: &SubmissionController<F>) {
    let fields: Vec<&str> = F::Field::ALL.iter().map(|f| f.as_str()).collect();
    println!("{}", format!("{} form", F::KIND).bold());
    println!("  <field>=<value>   set a field ({})", fields.join(", "));
    println!("  submit            validate and send");
    println!("  show              redraw the form");
    println!("  wait [ms]         pause, by default until the confirmation clears");
    println!("  quit              leave");
    if F::KIND == FormKind::Booking {
        println!("  serviceType options:");
        for line in tier_lines() {
            println!("    {}", line);
        }
        println!("  earliest date: {}", min_selectable_date(controller.clock()));
    }
}

/// One line per bookable tier: identifier, picker label and pricing
fn tier_lines() -> Vec<String> {
    SERVICE_TIERS
        .iter()
        .map(|t| format!("{:<10} {:<24} {}", t.id, t.label, t.price_descriptor()))
        .collect()
}
