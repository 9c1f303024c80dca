//! # Highcard CLI Library
//!
//! Command-line interface for the high-card wagering engine. It is the
//! dispatch-and-presentation collaborator: the engine returns structured
//! values and this crate turns them into terminal output.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["highcard", "rules"];
//! let code = highcard_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run an interactive table session
//! - `rules`: Print the game rules and suit legend

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HighcardCli};
use commands::{handle_play_command, handle_rules_command};
pub use error::CliError;
use formatters::supports_unicode;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "rules"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HighcardCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: highcard <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: highcard --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => {
            let cfg = match config::load() {
                Ok(cfg) => cfg,
                Err(e) => {
                    // A broken config file should not block the table.
                    if ui::display_warning(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    config::Config::default()
                }
            };
            match cli.cmd {
                Commands::Play { session, ascii } => {
                    let session = session.unwrap_or_else(|| cfg.session.clone());
                    let unicode = !ascii && !cfg.ascii && supports_unicode();
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    match handle_play_command(&session, unicode, out, err, &mut stdin_lock) {
                        Ok(()) => 0,
                        Err(e) => {
                            if writeln!(err, "Error: {}", e).is_err() {
                                return 2;
                            }
                            2
                        }
                    }
                }
                Commands::Rules => {
                    let unicode = !cfg.ascii && supports_unicode();
                    match handle_rules_command(unicode, out) {
                        Ok(()) => 0,
                        Err(e) => {
                            if writeln!(err, "Error: {}", e).is_err() {
                                return 2;
                            }
                            2
                        }
                    }
                }
            }
        }
    }
}
