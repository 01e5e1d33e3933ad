//! Tic-tac-toe responder - command-line driver
//!
//! Replays scripts of GUI events against the responder and inspects the
//! pattern catalog.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_core::{Catalog, Pattern};
use tictactoe_responder::{Replay, ResponderConfig, parse_events};
use tracing::{Subscriber, info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used until a config file supplies its own.
const DEFAULT_FILTER: &str = "warn";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            events,
            seed,
            config,
            defender,
            debug_form,
            json,
        } => run_play(events, seed, config, defender, debug_form, json),
        Command::Catalog { verbose } => {
            init_tracing(DEFAULT_FILTER);
            run_catalog(verbose)
        }
    }
}

/// Stderr subscriber; `RUST_LOG` wins over `fallback`.
fn stderr_subscriber(fallback: &str) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .finish()
}

/// Installs the global stderr subscriber.
fn init_tracing(fallback: &str) {
    stderr_subscriber(fallback).init();
}

/// Runs `f` under a scoped subscriber with the default filter.
///
/// The global subscriber waits for the config's `log_filter`, so config
/// loading is logged through this one.
fn with_default_tracing<T>(f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(stderr_subscriber(DEFAULT_FILTER), f)
}

/// Replay a script and print the result
fn run_play(
    events: Vec<String>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    defender: bool,
    debug_form: bool,
    json: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => with_default_tracing(|| ResponderConfig::from_file(path))?,
        None => ResponderConfig::default(),
    };
    init_tracing(config.log_filter());

    if seed.is_some() {
        config = config.with_seed(seed);
    }
    if defender {
        config = config.with_defender(true);
    }
    if debug_form {
        config = config.with_debug_form(true);
    }
    info!(?config, "Starting replay");

    let events = parse_events(&events)?;
    let mut controller = config.build_controller();
    let replay = Replay::run(&mut controller, &events)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&replay)?);
    } else {
        println!("{replay}");
    }
    Ok(())
}

/// Print every catalog template, optionally with its orbit
#[instrument]
fn run_catalog(verbose: bool) -> Result<()> {
    let catalog = Catalog::standard();

    let sections = [
        ("Zero survive", catalog.zero_survive()),
        ("Single survive", catalog.single_survive()),
        ("Double survive", catalog.double_survive()),
    ];
    for (name, tuples) in sections {
        println!("{name}");
        for tuple in tuples {
            println!("  {tuple}");
            if verbose {
                print_orbit(tuple.won());
                print_orbit(tuple.lost());
            }
        }
    }

    println!("Openings");
    for pattern in catalog.openings() {
        println!("  {pattern}");
        if verbose {
            print_orbit(pattern);
        }
    }

    println!("{} template variants", catalog.variant_count());
    Ok(())
}

fn print_orbit(pattern: &Pattern) {
    for member in pattern.orbit() {
        println!("    {member}");
    }
}
