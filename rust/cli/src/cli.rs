//! Command-line argument definitions for the `highcard` binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "highcard",
    version,
    about = "High-card table tracker: depleting-deck odds and round scoring"
)]
pub struct HighcardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive table session
    Play {
        /// Session name; each name gets its own isolated deck and ledger
        /// (defaults to the configured session, then "table")
        #[arg(long)]
        session: Option<String>,
        /// Force ASCII suit letters instead of Unicode symbols
        #[arg(long)]
        ascii: bool,
    },
    /// Print the game rules and suit legend
    Rules,
}
