//! Tic-tac-toe core - bit-packed board and a symmetry-matching responder
//!
//! The whole game state fits in one `u32`. The responder picks its moves by
//! matching the live board against a small catalog of authored templates, each
//! expanded once into every rotation and reflection it allows.
//!
//! # Architecture
//!
//! - **Board**: packed cells plus mode, turn, outcome, round and symmetry state
//! - **Symmetry**: ring rotations, axis reflections and template orbits
//! - **Catalog**: authored templates and their cached orbits
//! - **Rules**: outcome classification and response selection
//! - **Controller**: mode/turn/outcome transitions driven by GUI events
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Cell, Controller, Outcome, Position};
//!
//! let mut controller = Controller::seeded(7);
//! controller.start();
//! controller.on_cell_activated(1).unwrap();
//!
//! // The responder answers a corner with the center.
//! assert_eq!(controller.board().get(Position::Center), Cell::X);
//! assert_eq!(controller.board().outcome(), Outcome::Undecided);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod catalog;
mod controller;
mod invariants;
mod position;
mod rules;
mod symmetry;
mod types;
mod view;

// Crate-level exports - Board and value types
pub use board::{Board, BoardError, CASE_MASK, MAX_ROUND};
pub use position::Position;
pub use types::{Cell, Mode, ModeRequest, Outcome, Turn};

// Crate-level exports - Symmetry engine
pub use symmetry::{Orientation, Selector, Toggle};

// Crate-level exports - Pattern catalog
pub use catalog::{Catalog, Pattern, PatternTuple};

// Crate-level exports - Decision rules
pub use rules::{Response, ResponseRule, check_response, check_result, process_response, process_result};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, LiveCellsOnly, RoundBounded,
    TerminalConsistent, assert_invariants,
};

// Crate-level exports - Controller and view
pub use controller::{Controller, Key, Placement, SPIRAL};
pub use view::{BoardView, title};
