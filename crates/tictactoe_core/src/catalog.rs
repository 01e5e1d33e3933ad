//! Pattern catalog: authored templates expanded over their symmetry orbits.
//!
//! Every template is written once in canonical form as a `u32` literal:
//! bits 0-23 are a case (see [`Board::case`]) and bits 24-27 select the
//! toggles that stay free. Orbits are built when the catalog is constructed
//! and never touched again.

use super::board::{Board, CASE_MASK};
use super::symmetry::Selector;
use super::types::Cell;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Bits of an authored literal that carry meaning.
const SIGNIFICANT: u32 = 0x0F3F3F3F;
/// Selector nibble of an authored literal.
const SELECTOR_MASK: u32 = 0x0F000000;
const SELECTOR_OFFSET: u32 = 24;
/// Two-bit boxes covering the three rows and the two padding pairs between them.
const BOXES: u32 = 11;
/// Mask value for a cell that must match exactly.
const CARE: u32 = 0b11;
/// Mask value for a cell that is ignored.
const IGNORE: u32 = 0b00;

/// Lines of three, complete.
const ZERO_SURVIVE: [u32; 2] = [
    0b0011_00011001_00011001_00011001,
    0b0110_00100101_00100101_00100101,
];

/// Lines of three with one preferred gap.
const SINGLE_SURVIVE: [u32; 4] = [
    0b0011_00011001_00011101_00011001,
    0b0111_00011001_00011001_00011101,
    0b0110_00100101_00110101_00100101,
    0b1110_00100101_00100101_00110101,
];

/// Shapes one move away from two open lines at once.
const DOUBLE_SURVIVE: [u32; 8] = [
    0b1110_00010111_00011010_00000100,
    0b1110_00010111_00011000_00000110,
    0b1110_00010111_00010010_00100100,
    0b1110_00010111_00010000_00100110,
    0b0110_00001011_00010110_00010100,
    0b0110_00100011_00010110_00010100,
    0b0110_00001011_00010100_00010110,
    0b0110_00100011_00010100_00010110,
];

/// Fixed replies to the first user moves.
const OPENINGS: [u32; 3] = [
    0b0000_00110011_00001100_00110011,
    0b0000_00110011_00001000_00110011,
    0b0111_00001000_00001100_00000000,
];

/// Every cell must match.
const FULL_MASK: u32 = 0b1111_00111111_00111111_00111111;

static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// A canonical board together with its cached symmetry orbit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: u32,
    canonical: Board,
    selector: Selector,
    orbit: Vec<Board>,
}

impl Pattern {
    /// Builds a pattern from an authored literal; bits outside `0x0F3F3F3F` are dropped.
    pub fn new(literal: u32) -> Self {
        let source = literal & SIGNIFICANT;
        let canonical = Board::from_case(source & CASE_MASK);
        let selector = Selector::new((source >> SELECTOR_OFFSET) as u8);
        let orbit = canonical.orbit(selector);
        Self {
            source,
            canonical,
            selector,
            orbit,
        }
    }

    /// The authored literal, restricted to its significant bits.
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Untransformed board.
    pub fn canonical(&self) -> &Board {
        &self.canonical
    }

    /// Free toggles.
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Every symmetry variant, canonical first.
    pub fn orbit(&self) -> &[Board] {
        &self.orbit
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pack [ {} ] ( 0b{:04b} )",
            self.canonical.glyphs(),
            self.selector.bits()
        )
    }
}

/// Per-box marker of a tuple literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// `00`: the cell must be empty.
    Vacant,
    /// `01`: the cell is not compared.
    Ignored,
    /// `10`: the cell holds the mark of the side being matched.
    Mark,
    /// `11`: the cell must be empty and is where the responder plays.
    Preferred,
}

impl Marker {
    const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Marker::Vacant,
            0b01 => Marker::Ignored,
            0b10 => Marker::Mark,
            _ => Marker::Preferred,
        }
    }

    fn glyph(self) -> char {
        match self {
            Marker::Vacant => '_',
            Marker::Ignored => '~',
            Marker::Mark => '$',
            Marker::Preferred => '+',
        }
    }
}

/// One authored shape expanded for both sides: O lines (`won`), X lines (`lost`)
/// and the mask telling which cells take part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTuple {
    source: u32,
    won: Pattern,
    lost: Pattern,
    mask: Pattern,
}

impl PatternTuple {
    /// Decodes a tuple literal into its three patterns.
    pub fn new(literal: u32) -> Self {
        let mut won = 0;
        let mut lost = 0;
        let mut mask = 0;
        for slot in 0..BOXES {
            let shift = slot * 2;
            let (w, l, m) = match Marker::from_bits(literal >> shift) {
                Marker::Vacant => (Cell::Empty, Cell::Empty, CARE),
                Marker::Ignored => (Cell::Empty, Cell::Empty, IGNORE),
                Marker::Mark => (Cell::O, Cell::X, CARE),
                Marker::Preferred => (Cell::Preferred, Cell::Preferred, CARE),
            };
            won |= w.bits() << shift;
            lost |= l.bits() << shift;
            mask |= m << shift;
        }
        let selector = literal & SELECTOR_MASK;
        Self {
            source: literal & SIGNIFICANT,
            won: Pattern::new((won & CASE_MASK) | selector),
            lost: Pattern::new((lost & CASE_MASK) | selector),
            mask: Pattern::new((mask & CASE_MASK) | selector),
        }
    }

    /// The authored literal, restricted to its significant bits.
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Shape filled with O.
    pub fn won(&self) -> &Pattern {
        &self.won
    }

    /// Shape filled with X.
    pub fn lost(&self) -> &Pattern {
        &self.lost
    }

    /// Cells that take part in the comparison.
    pub fn mask(&self) -> &Pattern {
        &self.mask
    }
}

impl std::fmt::Display for PatternTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows = String::with_capacity(13);
        for slot in (0..BOXES).rev() {
            match slot {
                3 | 7 => rows.push_str(", "),
                _ => rows.push(Marker::from_bits(self.source >> (slot * 2)).glyph()),
            }
        }
        write!(
            f,
            "Tuple [ {} ] ( 0b{:04b} )",
            rows,
            self.source >> SELECTOR_OFFSET
        )
    }
}

/// Every template the decision engine consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    zero_survive: Vec<PatternTuple>,
    single_survive: Vec<PatternTuple>,
    double_survive: Vec<PatternTuple>,
    openings: Vec<Pattern>,
    full_mask: Pattern,
}

impl Catalog {
    /// Builds the catalog and all orbits.
    #[instrument]
    pub fn new() -> Self {
        let catalog = Self {
            zero_survive: ZERO_SURVIVE.into_iter().map(PatternTuple::new).collect(),
            single_survive: SINGLE_SURVIVE.into_iter().map(PatternTuple::new).collect(),
            double_survive: DOUBLE_SURVIVE.into_iter().map(PatternTuple::new).collect(),
            openings: OPENINGS.into_iter().map(Pattern::new).collect(),
            full_mask: Pattern::new(FULL_MASK),
        };
        debug!(
            variants = catalog.variant_count(),
            "Pattern catalog expanded"
        );
        catalog
    }

    /// Shared read-only catalog, built on first use.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Complete lines; classify a finished game.
    pub fn zero_survive(&self) -> &[PatternTuple] {
        &self.zero_survive
    }

    /// Two in a line with the third open.
    pub fn single_survive(&self) -> &[PatternTuple] {
        &self.single_survive
    }

    /// Fork-building shapes.
    pub fn double_survive(&self) -> &[PatternTuple] {
        &self.double_survive
    }

    /// Fixed opening replies, compared with [`Catalog::full_mask`].
    pub fn openings(&self) -> &[Pattern] {
        &self.openings
    }

    /// Mask requiring every cell to match.
    pub fn full_mask(&self) -> &Pattern {
        &self.full_mask
    }

    /// Number of template boards across all orbits, masks excluded.
    pub fn variant_count(&self) -> usize {
        let tuples = self
            .zero_survive
            .iter()
            .chain(&self.single_survive)
            .chain(&self.double_survive)
            .map(|t| t.won.orbit.len() + t.lost.orbit.len())
            .sum::<usize>();
        tuples + self.openings.iter().map(|p| p.orbit.len()).sum::<usize>()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
