//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use taxi_forms::{Draft, FieldName, FormSpec, FormState, FormView};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
        }
    }

    pub fn print_rows<R: Tabled + Serialize>(&self, rows: &[R]) {
        match self {
            OutputFormat::Table => println!("{}", Table::new(rows)),
            _ => self.print(&rows),
        }
    }

    /// Print a form the way a page would show it
    pub fn print_form<F: FormSpec>(&self, view: &FormView<F>) {
        match self {
            OutputFormat::Table => println!("{}", render_form(view)),
            _ => self.print(view),
        }
    }
}

fn render_form<F: FormSpec>(view: &FormView<F>) -> String {
    let mut out = String::new();
    if let Some(lines) = view.confirmation {
        for line in lines {
            out.push_str(&format!("{}\n", line.green().bold()));
        }
        return out;
    }

    for field in F::Field::ALL {
        let value = view.draft.get(*field);
        let label = format!("{:<16}", field.as_str());
        match view.errors.get(*field) {
            Some(message) => {
                out.push_str(&format!("{} {}\n", label.red(), value));
                out.push_str(&format!("{:<16} {}\n", "", format!("✗ {}", message).red()));
            }
            None => out.push_str(&format!("{} {}\n", label, value)),
        }
    }
    if view.state == FormState::Error {
        out.push_str(&format!("{}\n", "Please fix the fields marked above.".yellow()));
    }
    out
}
