//! Responder move selection.

use super::super::board::Board;
use super::super::catalog::{Catalog, Pattern};
use super::super::position::Position;
use super::super::types::Cell;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Rule tier that produced a response, in priority order.
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
pub enum ResponseRule {
    /// Fixed reply to the first user moves.
    Opening,
    /// Completes an X line.
    SingleSurviveLost,
    /// Blocks an O line.
    SingleSurviveWon,
    /// Builds an X fork.
    DoubleSurviveLost,
    /// Breaks an O fork.
    DoubleSurviveWon,
    /// Uniformly random empty cell.
    Fallback,
}

/// Cell chosen by the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Response {
    /// Where the X goes.
    pub position: Position,
    /// Tier that matched.
    pub rule: ResponseRule,
}

/// Preferred cells of the first orbit member of `template` that matches `board`.
///
/// The template is sanitized before the comparison, so its preferred cells must
/// be empty on the board. Returns `None` when no member matches.
pub fn process_response(board: &Board, template: &Pattern, mask: &Pattern) -> Option<Vec<Position>> {
    let case = board.case();
    template
        .orbit()
        .iter()
        .zip(mask.orbit())
        .find(|(t, m)| case & m.case() == t.sanitized().case())
        .map(|(t, _)| t.locate(Cell::Preferred))
}

/// First non-empty candidate list among `pairs`.
fn candidates<'a>(
    board: &Board,
    pairs: impl Iterator<Item = (&'a Pattern, &'a Pattern)>,
) -> Vec<Position> {
    pairs
        .filter_map(|(template, mask)| process_response(board, template, mask))
        .find(|found| !found.is_empty())
        .unwrap_or_default()
}

/// Picks the responder's next cell.
///
/// Tiers are tried in [`ResponseRule`] order; the first tier with candidates
/// wins and one of them is drawn uniformly from `rng`. Returns `None` only when
/// the board has no empty cell left.
#[instrument(skip(board, catalog, rng), fields(board = %board))]
pub fn check_response<R: Rng + ?Sized>(
    board: &Board,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<Response> {
    for rule in ResponseRule::iter() {
        let found = match rule {
            ResponseRule::Opening => candidates(
                board,
                catalog.openings().iter().map(|p| (p, catalog.full_mask())),
            ),
            ResponseRule::SingleSurviveLost => candidates(
                board,
                catalog.single_survive().iter().map(|t| (t.lost(), t.mask())),
            ),
            ResponseRule::SingleSurviveWon => candidates(
                board,
                catalog.single_survive().iter().map(|t| (t.won(), t.mask())),
            ),
            ResponseRule::DoubleSurviveLost => candidates(
                board,
                catalog.double_survive().iter().map(|t| (t.lost(), t.mask())),
            ),
            ResponseRule::DoubleSurviveWon => candidates(
                board,
                catalog.double_survive().iter().map(|t| (t.won(), t.mask())),
            ),
            ResponseRule::Fallback => board.locate(Cell::Empty),
        };

        if let Some(&position) = found.choose(rng) {
            debug!(%rule, %position, options = found.len(), "Response chosen");
            return Some(Response::new(position, rule));
        }
    }
    None
}
