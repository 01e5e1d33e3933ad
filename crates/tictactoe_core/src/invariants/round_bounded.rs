//! Round counter stays within a single game.

use super::super::board::{Board, MAX_ROUND};
use super::Invariant;

/// Invariant: the round counter never exceeds 9.
///
/// The setter rejects larger values, but a board decoded from raw bits can
/// still carry one.
pub struct RoundBounded;

impl Invariant<Board> for RoundBounded {
    fn holds(board: &Board) -> bool {
        board.round() <= MAX_ROUND
    }

    fn description() -> &'static str {
        "Round never exceeds 9"
    }
}
