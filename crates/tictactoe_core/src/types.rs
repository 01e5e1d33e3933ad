//! Core value types packed into a board.

use serde::{Deserialize, Serialize};

/// Side bit of a mode: set on the defender side.
const SIDE: u32 = 0b01;
/// Form bit of a mode: set in debug form.
const FORM: u32 = 0b10;

/// Content of a single cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Empty,
    /// Mark placed by the responder.
    X,
    /// Mark placed by the user.
    O,
    /// Template-only marker: the responder should play here on a match.
    Preferred,
}

impl Cell {
    /// Two-bit code stored in a board.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes the low two bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Cell::Empty,
            1 => Cell::X,
            2 => Cell::O,
            _ => Cell::Preferred,
        }
    }

    /// Symbol shown to the user. Preferred never reaches a live board and renders blank.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::X => "X",
            Cell::O => "O",
            Cell::Empty | Cell::Preferred => "",
        }
    }

    /// One-character glyph used by the debug renderings.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Preferred => '+',
        }
    }
}

/// Resting game mode: the side the user plays and whether the responder is muted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Mode {
    /// User moves first and the responder answers.
    #[default]
    Attacker,
    /// Responder moves first.
    Defender,
    /// Attacker side with the responder muted; both marks are placed by hand.
    DebugAttacker,
    /// Defender side with the responder muted.
    DebugDefender,
}

impl Mode {
    /// Two-bit code stored in a board.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes the low two bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Mode::Attacker,
            1 => Mode::Defender,
            2 => Mode::DebugAttacker,
            _ => Mode::DebugDefender,
        }
    }

    /// True when the responder opens the game.
    pub const fn on_defender_side(self) -> bool {
        self.bits() & SIDE == SIDE
    }

    /// True when the responder does not answer on its own.
    pub const fn in_debug_form(self) -> bool {
        self.bits() & FORM == FORM
    }

    /// Same form, opposite side.
    pub const fn conjugate_side(self) -> Self {
        let bits = self.bits();
        Self::from_bits((bits & FORM) | (!bits & SIDE))
    }

    /// Same side, opposite form.
    pub const fn conjugate_form(self) -> Self {
        let bits = self.bits();
        Self::from_bits((bits & SIDE) | (!bits & FORM))
    }
}

/// Request passed to a new game: either a resting mode or a one-shot control code.
///
/// Control codes are consumed by the controller and never stored in a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeRequest {
    /// Restart in the current mode.
    Startup,
    /// Flip between attacker and defender.
    SwitchSide,
    /// Flip debug form on or off.
    SwitchForm,
    /// Enter the auto-played scene the user wins.
    BonusScene,
    /// Enter the auto-played scene the user loses.
    ClumsyScene,
    /// Switch to (or restart in) a concrete mode.
    Resting(Mode),
}

impl From<Mode> for ModeRequest {
    fn from(mode: Mode) -> Self {
        ModeRequest::Resting(mode)
    }
}

/// Whose move it is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Turn {
    /// Board not attached to a game yet.
    #[default]
    Unspecified,
    /// The user places an O next.
    User,
    /// The responder places an X next.
    Response,
    /// No further moves.
    Terminated,
}

impl Turn {
    /// Two-bit code stored in a board.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes the low two bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Turn::Unspecified,
            1 => Turn::User,
            2 => Turn::Response,
            _ => Turn::Terminated,
        }
    }
}

/// Result of a game, seen from the user's side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Outcome {
    /// Game still running.
    #[default]
    Undecided,
    /// The user completed a line of O.
    Won,
    /// The responder completed a line of X.
    Lost,
    /// Board filled without a line.
    Tied,
}

impl Outcome {
    /// Two-bit code stored in a board.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decodes the low two bits of `bits`.
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Outcome::Undecided,
            1 => Outcome::Won,
            2 => Outcome::Lost,
            _ => Outcome::Tied,
        }
    }

    /// True once the game has ended.
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_bits(cell.bits()), cell);
        }
        for mode in Mode::iter() {
            assert_eq!(Mode::from_bits(mode.bits()), mode);
        }
        for turn in Turn::iter() {
            assert_eq!(Turn::from_bits(turn.bits()), turn);
        }
        for outcome in Outcome::iter() {
            assert_eq!(Outcome::from_bits(outcome.bits()), outcome);
        }
    }

    #[test]
    fn test_conjugate_side_keeps_form() {
        assert_eq!(Mode::Attacker.conjugate_side(), Mode::Defender);
        assert_eq!(Mode::Defender.conjugate_side(), Mode::Attacker);
        assert_eq!(Mode::DebugAttacker.conjugate_side(), Mode::DebugDefender);
        assert_eq!(Mode::DebugDefender.conjugate_side(), Mode::DebugAttacker);
    }

    #[test]
    fn test_conjugate_form_keeps_side() {
        assert_eq!(Mode::Attacker.conjugate_form(), Mode::DebugAttacker);
        assert_eq!(Mode::DebugAttacker.conjugate_form(), Mode::Attacker);
        assert_eq!(Mode::Defender.conjugate_form(), Mode::DebugDefender);
        assert_eq!(Mode::DebugDefender.conjugate_form(), Mode::Defender);
    }

    #[test]
    fn test_side_and_form_flags() {
        assert!(!Mode::Attacker.on_defender_side());
        assert!(Mode::DebugDefender.on_defender_side());
        assert!(Mode::DebugAttacker.in_debug_form());
        assert!(!Mode::Defender.in_debug_form());
    }
}
