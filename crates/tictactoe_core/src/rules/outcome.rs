//! Terminal-state classification.

use super::super::board::{Board, MAX_ROUND};
use super::super::catalog::{Catalog, Pattern};
use super::super::types::Outcome;
use tracing::{debug, instrument};

/// True when some orbit member of `template` matches `board` under the paired mask member.
///
/// Orbits are walked in lock-step and the shorter one bounds the walk.
pub fn process_result(board: &Board, template: &Pattern, mask: &Pattern) -> bool {
    let case = board.case();
    template
        .orbit()
        .iter()
        .zip(mask.orbit())
        .any(|(t, m)| case & m.case() == t.case())
}

/// Classifies a board that has not been decided yet.
///
/// A completed X line wins over a completed O line, and a full board without
/// either is a tie. Returns `None` for a running game or an already decided board.
#[instrument(skip(board, catalog), fields(board = %board))]
pub fn check_result(board: &Board, catalog: &Catalog) -> Option<Outcome> {
    if board.outcome().is_decided() {
        return None;
    }

    let lines = catalog.zero_survive();
    let outcome = if lines.iter().any(|t| process_result(board, t.lost(), t.mask())) {
        Outcome::Lost
    } else if lines.iter().any(|t| process_result(board, t.won(), t.mask())) {
        Outcome::Won
    } else if board.round() == MAX_ROUND {
        Outcome::Tied
    } else {
        return None;
    };

    debug!(%outcome, "Game decided");
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Cell, Mode};

    fn board(marks: &[(usize, Cell)], round: u8) -> Board {
        let mut board = Board::new(Mode::DebugAttacker);
        for &(number, cell) in marks {
            board.set_cell(number, cell).unwrap();
        }
        board.set_round(round).unwrap();
        board
    }

    #[test]
    fn test_running_game_is_undecided() {
        let catalog = Catalog::standard();
        assert_eq!(check_result(&Board::new(Mode::Attacker), catalog), None);
        let b = board(&[(1, Cell::O), (2, Cell::O), (5, Cell::X)], 3);
        assert_eq!(check_result(&b, catalog), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        const LINES: [[usize; 3]; 8] = [
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
            [1, 4, 7],
            [2, 5, 8],
            [3, 6, 9],
            [1, 5, 9],
            [3, 5, 7],
        ];
        let catalog = Catalog::standard();
        for line in LINES {
            let won: Vec<_> = line.iter().map(|&n| (n, Cell::O)).collect();
            let lost: Vec<_> = line.iter().map(|&n| (n, Cell::X)).collect();
            assert_eq!(check_result(&board(&won, 5), catalog), Some(Outcome::Won), "{line:?}");
            assert_eq!(check_result(&board(&lost, 5), catalog), Some(Outcome::Lost), "{line:?}");
        }
    }

    #[test]
    fn test_broken_line_does_not_count() {
        let b = board(&[(1, Cell::O), (5, Cell::X), (9, Cell::O)], 3);
        assert_eq!(check_result(&b, Catalog::standard()), None);
    }

    #[test]
    fn test_lost_takes_priority() {
        let b = board(
            &[
                (1, Cell::X),
                (2, Cell::X),
                (3, Cell::X),
                (7, Cell::O),
                (8, Cell::O),
                (9, Cell::O),
            ],
            6,
        );
        assert_eq!(check_result(&b, Catalog::standard()), Some(Outcome::Lost));
    }

    #[test]
    fn test_full_board_without_line_is_tied() {
        // O X O / O X X / X O O
        let cells = [
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
        ];
        let marks: Vec<_> = cells.iter().enumerate().map(|(i, &c)| (i + 1, c)).collect();
        let b = board(&marks, 9);
        assert_eq!(check_result(&b, Catalog::standard()), Some(Outcome::Tied));
    }

    #[test]
    fn test_decided_board_is_left_alone() {
        let mut b = board(&[(1, Cell::O), (2, Cell::O), (3, Cell::O)], 9);
        b.set_outcome(Outcome::Won);
        assert_eq!(check_result(&b, Catalog::standard()), None);
    }

    #[test]
    fn test_process_result_ignores_unmasked_cells() {
        let catalog = Catalog::standard();
        let mut b = board(&[(2, Cell::O), (5, Cell::O), (8, Cell::O)], 5);
        b.set(Position::TopLeft, Cell::X);
        b.set(Position::BottomRight, Cell::X);
        let center_line = &catalog.zero_survive()[0];
        assert!(process_result(&b, center_line.won(), center_line.mask()));
        assert!(!process_result(&b, center_line.lost(), center_line.mask()));
    }
}
