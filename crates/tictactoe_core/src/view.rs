//! Snapshot of what a front end shows after an event.

use super::board::Board;
use super::position::Position;
use super::types::{Mode, Outcome};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Display symbols, reset-button state and window title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BoardView {
    /// `""`, `"X"` or `"O"` per cell, row-major.
    symbols: [&'static str; 9],
    /// True once any cell holds a mark.
    reset_enabled: bool,
    /// Window title.
    title: String,
    /// Mode of the running game.
    mode: Mode,
    /// Outcome so far.
    outcome: Outcome,
    /// Cells filled so far.
    round: u8,
}

impl BoardView {
    /// Captures `board` as seen with an optional latched demo mode.
    #[instrument(skip(board), fields(board = %board))]
    pub fn capture(board: &Board, latched: Option<Mode>) -> Self {
        Self {
            symbols: Position::ALL.map(|position| board.get(position).symbol()),
            reset_enabled: Position::ALL.iter().any(|&position| !board.is_empty(position)),
            title: title(board, latched),
            mode: board.mode(),
            outcome: board.outcome(),
            round: board.round(),
        }
    }
}

/// Window title for `board`.
///
/// The prefix names the debug form, or the demo scene when one is latched.
pub fn title(board: &Board, latched: Option<Mode>) -> String {
    let prefix = match latched {
        Some(_) if board.on_defender_side() => "< Clumsy > ",
        Some(_) => "< Bonus > ",
        None if board.in_debug_form() => "< Debug > ",
        None => "",
    };
    let side = if board.on_defender_side() {
        " Defender"
    } else {
        " Attacker"
    };
    let result = match board.outcome() {
        Outcome::Undecided => "",
        Outcome::Won => " [ Win ]",
        Outcome::Lost => " [ Lost ]",
        Outcome::Tied => " [ Tied ]",
    };
    format!("{prefix}TicTacToe{side}{result}")
}

impl std::fmt::Display for BoardView {
    /// Title line, then the grid with empty cells shown by number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    match self.symbols[pos] {
                        "" => (pos + 1).to_string(),
                        symbol => symbol.to_string(),
                    }
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
