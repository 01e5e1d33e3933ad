//! Live boards only hold playable marks.

use super::super::board::Board;
use super::super::types::Cell;
use super::Invariant;

/// Invariant: no cell of a live board holds [`Cell::Preferred`].
pub struct LiveCellsOnly;

impl Invariant<Board> for LiveCellsOnly {
    fn holds(board: &Board) -> bool {
        board.locate(Cell::Preferred).is_empty()
    }

    fn description() -> &'static str {
        "Live cells are empty, X or O"
    }
}
