//! Bit-packed board: nine cells plus the game bookkeeping in one `u32`.
//!
//! Layout, low bit first:
//!
//! | bits  | field                                                   |
//! |-------|---------------------------------------------------------|
//! | 0-15  | outer ring, cells 7, 8, 9, 6, 3, 2, 1, 4 (2 bits each)  |
//! | 16-19 | symmetry state                                          |
//! | 20-23 | round                                                   |
//! | 24-25 | center cell                                             |
//! | 26-27 | outcome                                                 |
//! | 28-29 | turn                                                    |
//! | 30-31 | mode                                                    |
//!
//! The ring order makes a rotation of the outer cells a plain circular shift.

use super::position::Position;
use super::types::{Cell, Mode, Outcome, Turn};
use serde::{Deserialize, Serialize};

/// Width mask of every two-bit field.
const FIELD: u32 = 0b11;

/// Bit offset of every cell, indexed by [`Position::index`].
const CELL_OFFSETS: [u32; 9] = [12, 10, 8, 14, 24, 6, 0, 2, 4];

/// Bit offset of every cell inside a case value, indexed by [`Position::index`].
///
/// One byte per row, top row highest; inside a row byte the left cell sits at
/// bits 4-5 and bits 6-7 stay zero.
const CASE_OFFSETS: [u32; 9] = [20, 18, 16, 12, 10, 8, 4, 2, 0];

/// The eight outer cells.
const RING_MASK: u32 = 0xFFFF;

const STATE_OFFSET: u32 = 16;
const STATE_MASK: u32 = 0xF << STATE_OFFSET;
const ROUND_OFFSET: u32 = 20;
const ROUND_MASK: u32 = 0xF << ROUND_OFFSET;
const OUTCOME_OFFSET: u32 = 26;
const TURN_OFFSET: u32 = 28;
const MODE_OFFSET: u32 = 30;

/// Cell bits of a case value; the padding pairs are excluded.
pub const CASE_MASK: u32 = 0x3F3F3F;

/// Rounds in a full game.
pub const MAX_ROUND: u8 = 9;

/// Error raised by the raw-number entry points of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Cell number outside 1-9.
    #[display("Cell number {} is outside 1-9", _0)]
    InvalidIndex(usize),

    /// Round counter beyond a full game.
    #[display("Round {} exceeds {}", _0, MAX_ROUND)]
    InvalidRound(u8),
}

impl std::error::Error for BoardError {}

/// Nine cells plus mode, turn, outcome, round and symmetry state.
///
/// A plain `Copy` value: assigning a board copies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(u32);

impl Board {
    /// Creates an empty board for a game in `mode`.
    ///
    /// The user moves first on the attacker side, the responder on the defender side.
    pub fn new(mode: Mode) -> Self {
        let mut board = Self(0);
        board.set_turn(if mode.on_defender_side() {
            Turn::Response
        } else {
            Turn::User
        });
        board.set_mode(mode);
        board
    }

    /// Creates a bare board holding the cells of `case`.
    ///
    /// Mode, turn, outcome, round and symmetry state are all zero.
    pub fn from_case(case: u32) -> Self {
        let mut board = Self(0);
        board.set_case(case);
        board
    }

    fn field(&self, offset: u32, mask: u32) -> u32 {
        (self.0 & mask) >> offset
    }

    fn put_field(&mut self, offset: u32, mask: u32, value: u32) {
        self.0 &= !mask;
        self.0 |= (value << offset) & mask;
    }

    /// Cell content at `position`.
    pub fn get(&self, position: Position) -> Cell {
        let offset = CELL_OFFSETS[position.index()];
        Cell::from_bits(self.field(offset, FIELD << offset))
    }

    /// Replaces the cell content at `position`.
    pub fn set(&mut self, position: Position, cell: Cell) {
        let offset = CELL_OFFSETS[position.index()];
        self.put_field(offset, FIELD << offset, cell.bits());
    }

    /// Replaces the cell content at a one-based cell number.
    pub fn set_cell(&mut self, number: usize, cell: Cell) -> Result<(), BoardError> {
        self.set(Position::from_number(number)?, cell);
        Ok(())
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        Mode::from_bits(self.field(MODE_OFFSET, FIELD << MODE_OFFSET))
    }

    /// Stores a mode without touching anything else.
    pub fn set_mode(&mut self, mode: Mode) {
        self.put_field(MODE_OFFSET, FIELD << MODE_OFFSET, mode.bits());
    }

    /// Mode with the side flipped.
    pub fn conjugate_side(&self) -> Mode {
        self.mode().conjugate_side()
    }

    /// Mode with the debug form flipped.
    pub fn conjugate_form(&self) -> Mode {
        self.mode().conjugate_form()
    }

    /// True when the responder opens the game.
    pub fn on_defender_side(&self) -> bool {
        self.mode().on_defender_side()
    }

    /// True when the responder is muted.
    pub fn in_debug_form(&self) -> bool {
        self.mode().in_debug_form()
    }

    /// Whose move it is.
    pub fn turn(&self) -> Turn {
        Turn::from_bits(self.field(TURN_OFFSET, FIELD << TURN_OFFSET))
    }

    /// Stores a turn without touching anything else.
    pub fn set_turn(&mut self, turn: Turn) {
        self.put_field(TURN_OFFSET, FIELD << TURN_OFFSET, turn.bits());
    }

    /// Outcome so far.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_bits(self.field(OUTCOME_OFFSET, FIELD << OUTCOME_OFFSET))
    }

    /// Stores an outcome without touching anything else.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.put_field(OUTCOME_OFFSET, FIELD << OUTCOME_OFFSET, outcome.bits());
    }

    /// Cells filled so far (0-9 on any board built through the setters).
    pub fn round(&self) -> u8 {
        self.field(ROUND_OFFSET, ROUND_MASK) as u8
    }

    /// Stores the round counter.
    pub fn set_round(&mut self, round: u8) -> Result<(), BoardError> {
        if round > MAX_ROUND {
            return Err(BoardError::InvalidRound(round));
        }
        self.put_field(ROUND_OFFSET, ROUND_MASK, u32::from(round));
        Ok(())
    }

    /// Four-bit symmetry state: rotation in eighth-turns (bits 0-2) and mirror flag (bit 3).
    pub fn symmetry_state(&self) -> u8 {
        self.field(STATE_OFFSET, STATE_MASK) as u8
    }

    pub(crate) fn set_symmetry_state(&mut self, state: u8) {
        self.put_field(STATE_OFFSET, STATE_MASK, u32::from(state));
    }

    /// The eight outer cells as a 16-bit ring.
    pub(crate) fn ring(&self) -> u16 {
        (self.0 & RING_MASK) as u16
    }

    pub(crate) fn set_ring(&mut self, ring: u16) {
        self.0 = (self.0 & !RING_MASK) | u32::from(ring);
    }

    /// Packed cell contents, one byte per row; see [`CASE_MASK`].
    pub fn case(&self) -> u32 {
        Position::ALL.iter().fold(0, |case, &position| {
            case | (self.get(position).bits() << CASE_OFFSETS[position.index()])
        })
    }

    /// Replaces all nine cells from a case value. Padding bits are ignored.
    pub fn set_case(&mut self, case: u32) {
        for position in Position::ALL {
            let cell = Cell::from_bits(case >> CASE_OFFSETS[position.index()]);
            self.set(position, cell);
        }
    }

    /// Copy with every [`Cell::Preferred`] rewritten to [`Cell::Empty`].
    pub fn sanitized(&self) -> Self {
        let mut board = *self;
        for position in self.locate(Cell::Preferred) {
            board.set(position, Cell::Empty);
        }
        board
    }

    /// Positions holding `cell`, in ascending order.
    pub fn locate(&self, cell: Cell) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&position| self.get(position) == cell)
            .collect()
    }

    /// Cells laid out row by row with `_ X O +`.
    pub fn glyphs(&self) -> String {
        let mut rows = String::with_capacity(13);
        for (i, position) in Position::ALL.iter().enumerate() {
            if i == 3 || i == 6 {
                rows.push_str(", ");
            }
            rows.push(self.get(*position).glyph());
        }
        rows
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board < {}, {}, {} > {{ 0x{:X} }} [ {} ] ( 0b{:04b}, {}{}°, {} )",
            self.mode(),
            self.turn(),
            self.outcome(),
            self.round(),
            self.glyphs(),
            self.symmetry_state(),
            if self.is_mirrored() { '↓' } else { '↑' },
            u32::from(self.moves()) * 45,
            self.orientation(),
        )
    }
}
