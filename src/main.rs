//! fieldline - Main Entry Point
//!
//! Runs a form on the terminal and prints the collected values. The form
//! comes from `--form <file>` (a JSON array of field descriptors) or is a
//! built-in message header form.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use clap::{CommandFactory, FromArgMatches, Parser};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use fieldline::cli::{CrosstermTerminal, EditorConfig, FieldDescriptor, Form};
use fieldline::logging;
use fieldline::EditError;

const LOG_FILE_ENV: &str = "FIELDLINE_LOG_FILE";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "fieldline", version, about = "Fill in a form on the terminal")]
struct Args {
    /// Editor configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Form to edit: a JSON array of field descriptors
    #[arg(short, long)]
    form: Option<PathBuf>,
}

fn themes_help() -> String {
    let mut help = String::from("Themes (set \"theme_name\" in the config file):");
    for theme in EditorConfig::get_available_themes() {
        help.push_str("\n  ");
        help.push_str(&theme);
    }
    help
}

fn parse_args() -> Args {
    let matches = Args::command().after_help(themes_help()).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn default_form() -> Form {
    let today = Local::now().format("%m/%d/%Y").to_string();
    Form::new(vec![
        FieldDescriptor::new("Date").with_width(10).with_hint("MM/DD/YYYY"),
        FieldDescriptor::new("To").with_width(20).with_hint("call sign or position"),
        FieldDescriptor::new("Handling")
            .with_width(10)
            .with_choices(["IMMEDIATE", "PRIORITY", "ROUTINE"]),
        FieldDescriptor::new("Subject").with_id("XND-101P"),
        FieldDescriptor::new("Message").with_multiline(true),
    ])
    .with_value(0, today)
}

fn load_form(path: &Path) -> Result<Form, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("read {}: {}", path.display(), e))?;
    let fields: Vec<FieldDescriptor> =
        serde_json::from_str(&content).map_err(|e| format!("parse {}: {}", path.display(), e))?;
    Ok(Form::new(fields))
}

/// Run the form and return its summary, formatted for the terminal's
/// output mode
fn run_form(form: &mut Form, config: EditorConfig) -> Result<Vec<(String, String)>, EditError> {
    enable_raw_mode()?;
    let result = CrosstermTerminal::new(config)
        .map_err(EditError::from)
        .and_then(|mut term| {
            form.run(&mut term)?;
            Ok(form.summary(&term))
        });
    // Always disable raw mode on exit
    let _ = disable_raw_mode();
    result
}

fn main() {
    let args = parse_args();

    let config = match &args.config {
        Some(path) => match EditorConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => EditorConfig::default(),
    };

    let log_file = env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| config.log_file.clone());
    if let Some(path) = log_file {
        if let Err(e) = logging::init_tracing(&path) {
            eprintln!("WARNING: logging to {} disabled: {}", path.display(), e);
        }
    }

    let form = match &args.form {
        Some(path) => match load_form(path) {
            Ok(form) => form,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        },
        None => default_form(),
    };
    let mut form = form.with_label_margin(config.label_margin);

    match run_form(&mut form, config) {
        Ok(summary) => {
            let mut out = io::stdout();
            for (label, value) in summary {
                let _ = writeln!(out, "{}: {}", label, value.replace('\n', "\n    "));
            }
        }
        Err(EditError::Interrupted) => {
            eprintln!("Interrupted.");
            process::exit(130);
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
