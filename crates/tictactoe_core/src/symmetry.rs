//! Ring rotations, axis reflections and symmetry orbits of a board.
//!
//! Rotations act on the eight outer cells in steps of one eighth-turn; the
//! center never moves. The four toggles record which transform has been
//! applied, so a board's symmetry state always describes how its cells were
//! obtained from the canonical form: rotate by [`Board::moves`] after
//! mirroring across the horizontal axis when [`Board::is_mirrored`].

use super::board::Board;
use serde::{Deserialize, Serialize};

/// Middle row of a case value.
const MIDDLE_ROW: u32 = 0x00FF00;
/// One row of a case value.
const ROW: u32 = 0xFF;

/// Reflection axis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Orientation {
    /// Swaps the top and bottom rows.
    Horizontal,
    /// Diagonal from bottom-left to top-right.
    Upward,
    /// Swaps the left and right columns.
    Vertical,
    /// Diagonal from top-left to bottom-right.
    Downward,
}

impl Orientation {
    /// Eighth-turns separating this axis from the horizontal one.
    pub const fn turns(self) -> i32 {
        self as i32
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Orientation::Horizontal,
            1 => Orientation::Upward,
            2 => Orientation::Vertical,
            _ => Orientation::Downward,
        }
    }
}

/// One of the four independent symmetry dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Toggle {
    /// Rotate by one eighth-turn.
    Turn45,
    /// Rotate by two eighth-turns.
    Turn90,
    /// Rotate by four eighth-turns.
    Turn180,
    /// Mirror across the axis matching the current rotation.
    Mirror,
}

impl Toggle {
    /// All toggles, in state-bit order.
    pub const ALL: [Toggle; 4] = [Toggle::Turn45, Toggle::Turn90, Toggle::Turn180, Toggle::Mirror];

    /// Bit of the symmetry state recording this toggle.
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    const fn turns(self) -> Option<i32> {
        match self {
            Toggle::Turn45 => Some(1),
            Toggle::Turn90 => Some(2),
            Toggle::Turn180 => Some(4),
            Toggle::Mirror => None,
        }
    }
}

/// Set of toggles left free for a template, one bit per [`Toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selector(u8);

impl Selector {
    /// Nothing free: the orbit is the board itself.
    pub const NONE: Selector = Selector(0);
    /// Every toggle free: sixteen variants.
    pub const ALL: Selector = Selector(0b1111);

    /// Keeps the low four bits.
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw selector bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when `toggle` is free.
    pub const fn contains(self, toggle: Toggle) -> bool {
        self.0 & toggle.bit() != 0
    }

    /// Free toggles in state-bit order.
    pub fn free(self) -> impl Iterator<Item = Toggle> {
        Toggle::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Number of boards in an orbit over this selector.
    pub const fn orbit_len(self) -> usize {
        1 << self.0.count_ones()
    }
}

impl Board {
    /// Rotates the outer ring by `moves` eighth-turns (any sign, taken mod 8).
    pub fn rotate(&mut self, moves: i32) {
        let shift = (moves.rem_euclid(8) * 2) as u32;
        self.set_ring(self.ring().rotate_left(shift));
    }

    /// Mirrors the cells across `axis`. The symmetry state is left alone.
    pub fn reflect(&mut self, axis: Orientation) {
        match axis {
            Orientation::Horizontal => {
                let case = self.case();
                let swapped = (case & MIDDLE_ROW) | (case >> 16) | ((case & ROW) << 16);
                self.set_case(swapped);
            }
            _ => {
                let turns = axis.turns();
                self.rotate(-turns);
                self.reflect(Orientation::Horizontal);
                self.rotate(turns);
            }
        }
    }

    /// Recorded rotation in eighth-turns (0-7).
    pub fn moves(&self) -> u8 {
        self.symmetry_state() & 0b111
    }

    /// Axis a mirror toggle would reflect across right now.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_bits(self.symmetry_state())
    }

    /// True when the recorded transform includes a mirror.
    pub fn is_mirrored(&self) -> bool {
        self.toggle(Toggle::Mirror)
    }

    /// Current value of one toggle.
    pub fn toggle(&self, toggle: Toggle) -> bool {
        self.symmetry_state() & toggle.bit() != 0
    }

    /// Sets one toggle, transforming the cells to match. No-op when unchanged.
    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        if self.toggle(toggle) == on {
            return;
        }
        match toggle.turns() {
            Some(turns) => self.rotate(if on { turns } else { -turns }),
            None => self.reflect(self.orientation()),
        }
        let state = self.symmetry_state();
        self.set_symmetry_state(if on {
            state | toggle.bit()
        } else {
            state & !toggle.bit()
        });
    }

    /// Undoes the recorded transform and zeroes the symmetry state.
    pub fn clear_symmetry(&mut self) {
        let mirrored = self.is_mirrored();
        self.rotate(-i32::from(self.moves()));
        if mirrored {
            self.reflect(Orientation::Horizontal);
        }
        self.set_symmetry_state(0);
    }

    /// Every board reachable by flipping any subset of the free toggles.
    ///
    /// Variant `i` flips the free toggles whose rank matches a set bit of `i`,
    /// so each combination appears exactly once and the order is fixed.
    pub fn orbit(&self, selector: Selector) -> Vec<Board> {
        let free: Vec<Toggle> = selector.free().collect();
        (0..selector.orbit_len())
            .map(|subset| {
                let mut variant = *self;
                for (rank, toggle) in free.iter().enumerate() {
                    if (subset >> rank) & 1 == 1 {
                        variant.set_toggle(*toggle, !self.toggle(*toggle));
                    }
                }
                variant
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn marked(position: Position) -> Board {
        let mut board = Board::default();
        board.set(position, Cell::X);
        board
    }

    fn where_is_x(board: &Board) -> Vec<Position> {
        board.locate(Cell::X)
    }

    #[test]
    fn test_rotate_steps_along_ring() {
        let mut board = marked(Position::TopLeft);
        board.rotate(1);
        assert_eq!(where_is_x(&board), vec![Position::MiddleLeft]);
        board.rotate(1);
        assert_eq!(where_is_x(&board), vec![Position::BottomLeft]);
        board.rotate(-10);
        assert_eq!(where_is_x(&board), vec![Position::TopLeft]);
    }

    #[test]
    fn test_rotate_keeps_center_and_state() {
        let mut board = marked(Position::Center);
        board.set_symmetry_state(0b0101);
        board.rotate(3);
        assert_eq!(where_is_x(&board), vec![Position::Center]);
        assert_eq!(board.symmetry_state(), 0b0101);
    }

    #[test]
    fn test_reflect_axes() {
        let cases = [
            (Orientation::Horizontal, Position::BottomLeft),
            (Orientation::Upward, Position::BottomRight),
            (Orientation::Vertical, Position::TopRight),
            (Orientation::Downward, Position::TopLeft),
        ];
        for (axis, expected) in cases {
            let mut board = marked(Position::TopLeft);
            board.reflect(axis);
            assert_eq!(where_is_x(&board), vec![expected], "axis {axis}");
        }
    }

    #[test]
    fn test_horizontal_keeps_middle_row() {
        let mut board = marked(Position::MiddleRight);
        board.reflect(Orientation::Horizontal);
        assert_eq!(where_is_x(&board), vec![Position::MiddleRight]);
    }

    #[test]
    fn test_set_toggle_is_idempotent() {
        let mut board = marked(Position::TopCenter);
        board.set_toggle(Toggle::Turn90, true);
        let once = board;
        board.set_toggle(Toggle::Turn90, true);
        assert_eq!(board, once);
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn test_toggle_off_restores() {
        let mut board = marked(Position::TopCenter);
        board.set(Position::BottomRight, Cell::O);
        let original = board;
        for toggle in Toggle::iter() {
            board.set_toggle(toggle, true);
            board.set_toggle(toggle, false);
            assert_eq!(board, original, "toggle {toggle}");
        }
    }

    #[test]
    fn test_selector_orbit_len() {
        assert_eq!(Selector::NONE.orbit_len(), 1);
        assert_eq!(Selector::new(0b0110).orbit_len(), 4);
        assert_eq!(Selector::ALL.orbit_len(), 16);
        assert_eq!(Selector::new(0xF3).bits(), 0b0011);
    }

    #[test]
    fn test_orbit_states_follow_subsets() {
        let mut board = marked(Position::TopLeft);
        board.set(Position::TopCenter, Cell::O);

        let orbit = board.orbit(Selector::ALL);
        assert_eq!(orbit.len(), 16);
        for (i, variant) in orbit.iter().enumerate() {
            assert_eq!(usize::from(variant.symmetry_state()), i);
        }
        let distinct: HashSet<u32> = orbit.iter().map(Board::case).collect();
        assert_eq!(distinct.len(), 16);
    }

    #[test]
    fn test_orbit_of_partial_selector() {
        let board = marked(Position::TopCenter);
        let orbit = board.orbit(Selector::new(0b0110));
        let states: Vec<u8> = orbit.iter().map(Board::symmetry_state).collect();
        assert_eq!(states, vec![0b0000, 0b0010, 0b0100, 0b0110]);
        let spots: Vec<Position> = orbit.iter().flat_map(where_is_x).collect();
        assert_eq!(
            spots,
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomCenter,
                Position::MiddleRight,
            ]
        );
    }

    #[test]
    fn test_clear_symmetry_returns_canonical() {
        let mut board = marked(Position::TopLeft);
        board.set(Position::MiddleRight, Cell::O);
        for mut variant in board.orbit(Selector::ALL) {
            variant.clear_symmetry();
            assert_eq!(variant, board);
        }
    }
}
