//! Tic-tac-toe responder - headless driver for the pattern-matching responder
//!
//! Wraps [`tictactoe_core`] with what a command-line front end needs.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for seed, starting side, debug form and log filter
//! - **Script**: GUI events written as tokens, replayed against a controller
//!
//! # Example
//!
//! ```
//! use tictactoe_responder::{Replay, ResponderConfig, parse_events};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ResponderConfig::default().with_seed(Some(3));
//! let mut controller = config.build_controller();
//! let events = parse_events(&["5", "w", "esc"])?;
//! let replay = Replay::run(&mut controller, &events)?;
//! println!("{replay}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod script;

// Crate-level exports - Configuration
pub use config::{ConfigError, ResponderConfig};

// Crate-level exports - Event scripts
pub use script::{Event, EventParseError, Replay, Step, parse_events};

// Crate-level exports - Core game logic
pub use tictactoe_core;
