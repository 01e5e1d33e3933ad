//! Game controller: mode, turn and outcome transitions driven by GUI events.
//!
//! The controller owns the live board. Front ends feed it cell activations,
//! key presses and button clicks, then read back a [`BoardView`] and drain the
//! placements made since the last call.

use super::board::{Board, BoardError, MAX_ROUND};
use super::catalog::Catalog;
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Cell, Mode, ModeRequest, Outcome, Turn};
use super::view::BoardView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Order in which demo scenes fill the board: clockwise from the top-left, center last.
pub const SPIRAL: [Position; 9] = [
    Position::TopLeft,
    Position::TopCenter,
    Position::TopRight,
    Position::MiddleRight,
    Position::BottomRight,
    Position::BottomCenter,
    Position::BottomLeft,
    Position::MiddleLeft,
    Position::Center,
];

/// Keys the controller reacts to.
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
pub enum Key {
    /// Enter the bonus scene.
    W,
    /// Enter the clumsy scene.
    L,
    /// Toggle into debug form.
    D,
    /// Leave a demo scene or the debug form.
    Escape,
}

/// A mark placed on the board, for the front end to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Cell that changed.
    pub position: Position,
    /// Mark written there.
    pub cell: Cell,
}

/// Drives one game at a time against the pattern responder.
#[derive(Debug)]
pub struct Controller<R = StdRng> {
    board: Board,
    latched: Option<Mode>,
    catalog: &'static Catalog,
    rng: R,
    placements: Vec<Placement>,
}

impl Controller<StdRng> {
    /// Controller with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Controller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Controller<R> {
    /// Controller drawing responses from `rng`. Call [`Controller::start`] before playing.
    pub fn new(rng: R) -> Self {
        Self::with_board(Board::default(), rng)
    }

    /// Controller resuming from an existing board.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            latched: None,
            catalog: Catalog::standard(),
            rng,
            placements: Vec::new(),
        }
    }

    /// Live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mode of the running game.
    pub fn mode(&self) -> Mode {
        self.board.mode()
    }

    /// Mode to restore when the running demo scene ends.
    pub fn latched(&self) -> Option<Mode> {
        self.latched
    }

    /// What a front end should show right now.
    pub fn view(&self) -> BoardView {
        BoardView::capture(&self.board, self.latched)
    }

    /// Placements made since the last call, oldest first.
    pub fn take_placements(&mut self) -> Vec<Placement> {
        std::mem::take(&mut self.placements)
    }

    /// Starts the first game in the current mode.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.new_game(ModeRequest::Startup);
        assert_invariants(&self.board);
    }

    /// Starts a new game, switching mode or entering a demo scene as requested.
    #[instrument(skip(self), fields(mode = %self.board.mode()))]
    pub fn new_game(&mut self, request: ModeRequest) {
        let current = self.board.mode();
        match request {
            ModeRequest::Startup => self.advance_turn(Turn::Unspecified),
            ModeRequest::Resting(mode) if mode == current => self.advance_turn(Turn::Unspecified),
            ModeRequest::Resting(mode) => self.switch_mode(mode),
            ModeRequest::SwitchSide => self.switch_mode(self.board.conjugate_side()),
            ModeRequest::SwitchForm => self.switch_mode(self.board.conjugate_form()),
            ModeRequest::BonusScene => self.enter_scene(Mode::DebugAttacker),
            ModeRequest::ClumsyScene => self.enter_scene(Mode::DebugDefender),
        }

        self.placements.clear();
        if self.latched.is_some() {
            debug!("Auto-playing demo scene");
            for position in SPIRAL {
                self.put_chess(position);
            }
        } else if self.board.on_defender_side() && !self.board.in_debug_form() {
            self.respond();
        }
    }

    /// Places the mark of whoever's turn it is.
    ///
    /// Ignored on an occupied cell or a decided game. Outside debug form a user
    /// move is answered by the responder at once.
    #[instrument(skip(self), fields(turn = %self.board.turn()))]
    pub fn put_chess(&mut self, position: Position) {
        if !self.board.is_empty(position) || self.board.outcome().is_decided() {
            debug!("Placement ignored");
            return;
        }

        match self.board.turn() {
            Turn::User => {
                self.place(position, Cell::O);
                self.advance_turn(Turn::Response);
                self.check_result();
                if !self.board.in_debug_form() && !self.board.outcome().is_decided() {
                    self.respond();
                }
            }
            Turn::Response => {
                self.place(position, Cell::X);
                self.advance_turn(Turn::User);
                self.check_result();
            }
            Turn::Unspecified | Turn::Terminated => debug!("No game in progress"),
        }
    }

    /// Handles a click on cell `number` (1-9).
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, number: usize) -> Result<(), BoardError> {
        let position = Position::from_number(number)?;
        self.put_chess(position);
        assert_invariants(&self.board);
        Ok(())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::W => self.new_game(ModeRequest::BonusScene),
            Key::L => self.new_game(ModeRequest::ClumsyScene),
            Key::D if !self.board.in_debug_form() => self.new_game(ModeRequest::SwitchForm),
            Key::D => debug!("Already in debug form"),
            Key::Escape => match self.latched.take() {
                Some(mode) => self.new_game(mode.into()),
                None if self.board.in_debug_form() => self.new_game(ModeRequest::SwitchForm),
                None => debug!("Nothing to escape from"),
            },
        }
        assert_invariants(&self.board);
    }

    /// Handles the switch button: flips sides, or swaps demo scenes while one runs.
    #[instrument(skip(self))]
    pub fn on_switch_requested(&mut self) {
        let request = match self.latched {
            Some(_) if self.board.on_defender_side() => ModeRequest::BonusScene,
            Some(_) => ModeRequest::ClumsyScene,
            None => ModeRequest::SwitchSide,
        };
        self.new_game(request);
        assert_invariants(&self.board);
    }

    /// Handles the reset button: restarts, or leaves a running demo scene.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&mut self) {
        let request = match self.latched.take() {
            Some(mode) => ModeRequest::Resting(mode),
            None => ModeRequest::Startup,
        };
        self.new_game(request);
        assert_invariants(&self.board);
    }

    /// Latches the current mode unless a scene already did, then (re)starts `scene`.
    fn enter_scene(&mut self, scene: Mode) {
        if self.latched.is_none() {
            self.latched = Some(self.board.mode());
        }
        if self.board.mode() == scene {
            self.advance_turn(Turn::Unspecified);
        } else {
            self.switch_mode(scene);
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        if self.board.mode() == mode {
            return;
        }
        info!(from = %self.board.mode(), to = %mode, "Mode switched");
        self.board = Board::new(mode);
    }

    fn advance_turn(&mut self, turn: Turn) {
        let current = self.board.turn();
        if turn == Turn::Unspecified {
            self.board = Board::new(self.board.mode());
        } else if turn == Turn::Terminated || current == Turn::Terminated {
            self.board.set_turn(Turn::Terminated);
            self.store_round(MAX_ROUND);
        } else if current != turn && self.board.round() < MAX_ROUND {
            self.board.set_turn(turn);
            self.store_round(self.board.round() + 1);
        }
    }

    fn settle(&mut self, outcome: Outcome) {
        if self.board.outcome() == outcome {
            return;
        }
        if outcome == Outcome::Undecided {
            self.board = Board::new(self.board.mode());
            return;
        }
        self.advance_turn(Turn::Terminated);
        self.board.set_outcome(outcome);
        info!(%outcome, board = %self.board, "Game over");
    }

    fn store_round(&mut self, round: u8) {
        if let Err(error) = self.board.set_round(round) {
            warn!(%error, "Round counter left unchanged");
        }
    }

    fn place(&mut self, position: Position, cell: Cell) {
        self.board.set(position, cell);
        self.placements.push(Placement::new(position, cell));
    }

    fn check_result(&mut self) {
        if let Some(outcome) = rules::check_result(&self.board, self.catalog) {
            self.settle(outcome);
        }
    }

    fn respond(&mut self) {
        match rules::check_response(&self.board, self.catalog, &mut self.rng) {
            Some(response) => self.put_chess(response.position),
            None => debug!("No empty cell to respond on"),
        }
    }
}
