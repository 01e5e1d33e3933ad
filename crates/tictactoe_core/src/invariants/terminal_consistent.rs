//! Terminal consistency: a decided or full board is terminated.

use super::super::board::{Board, MAX_ROUND};
use super::super::types::Turn;
use super::Invariant;

/// Invariant: a decided outcome implies turn Terminated and round 9, and
/// round 9 implies turn Terminated.
pub struct TerminalConsistent;

impl Invariant<Board> for TerminalConsistent {
    fn holds(board: &Board) -> bool {
        let terminated = board.turn() == Turn::Terminated;
        let full = board.round() == MAX_ROUND;

        if board.outcome().is_decided() && !(terminated && full) {
            return false;
        }
        !full || terminated
    }

    fn description() -> &'static str {
        "A decided or full board is terminated at round 9"
    }
}
