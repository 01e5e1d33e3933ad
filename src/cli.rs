//! Command-line interface for tictactoe_responder.

use clap::{Parser, Subcommand};

/// Tic-tac-toe responder - replay GUI events against the pattern-matching responder
#[derive(Parser, Debug)]
#[command(name = "tictactoe_responder")]
#[command(about = "Headless tic-tac-toe against a symmetry-matching responder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a script of events and print the resulting board
    Play {
        /// Events: cell numbers 1-9 or labels, w, l, d, esc, switch, reset
        events: Vec<String>,

        /// Seed for the responder (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Start on the defender side (overrides the config file)
        #[arg(long)]
        defender: bool,

        /// Start in debug form (overrides the config file)
        #[arg(long)]
        debug_form: bool,

        /// Print the replay as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every template in the pattern catalog
    Catalog {
        /// Also print every orbit member
        #[arg(short, long)]
        verbose: bool,
    },
}
