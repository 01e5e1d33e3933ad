//! Event scripts: GUI events written as command-line tokens.
//!
//! A script is a list of tokens such as `1 5 w esc switch`. Each token maps to
//! one controller event; replaying a script records the placements each event
//! produced.

use serde::Serialize;
use std::str::FromStr;
use tictactoe_core::{BoardError, BoardView, Controller, Key, Placement, Position};
use tracing::{debug, instrument};

/// One GUI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    /// Click on a cell.
    Cell(Position),
    /// Key press.
    Key(Key),
    /// Switch button.
    Switch,
    /// Reset button.
    Reset,
}

impl Event {
    /// Feeds this event to `controller`.
    #[instrument(skip(controller))]
    pub fn apply(self, controller: &mut Controller) -> Result<(), BoardError> {
        match self {
            Event::Cell(position) => controller.on_cell_activated(position.number())?,
            Event::Key(key) => controller.on_key(key),
            Event::Switch => controller.on_switch_requested(),
            Event::Reset => controller.on_reset_requested(),
        }
        Ok(())
    }
}

impl FromStr for Event {
    type Err = EventParseError;

    /// Accepts a cell number or label, `w`, `l`, `d`, `esc`, `switch` or `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(number) = token.parse::<usize>() {
            return Ok(Event::Cell(Position::from_number(number)?));
        }
        match token.to_lowercase().as_str() {
            "w" => Ok(Event::Key(Key::W)),
            "l" => Ok(Event::Key(Key::L)),
            "d" => Ok(Event::Key(Key::D)),
            "esc" | "escape" => Ok(Event::Key(Key::Escape)),
            "switch" => Ok(Event::Switch),
            "reset" => Ok(Event::Reset),
            _ => Position::parse(token)
                .map(Event::Cell)
                .ok_or_else(|| EventParseError::UnknownToken(token.to_string())),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Cell(position) => write!(f, "{}", position.number()),
            Event::Key(Key::Escape) => write!(f, "esc"),
            Event::Key(key) => write!(f, "{}", key.to_string().to_lowercase()),
            Event::Switch => write!(f, "switch"),
            Event::Reset => write!(f, "reset"),
        }
    }
}

/// Error parsing a script token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EventParseError {
    /// Token is neither a cell nor a known key or button.
    #[display("Unknown event '{}'", _0)]
    UnknownToken(String),

    /// Numeric token outside 1-9.
    #[display("Invalid cell: {}", _0)]
    InvalidCell(BoardError),
}

impl std::error::Error for EventParseError {}

impl From<BoardError> for EventParseError {
    fn from(error: BoardError) -> Self {
        EventParseError::InvalidCell(error)
    }
}

/// Parses every token, stopping at the first bad one.
pub fn parse_events<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Event>, EventParseError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// One replayed event and the marks it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Event as written in the script.
    pub event: String,
    /// Marks placed while handling it.
    pub placements: Vec<Placement>,
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    /// Placements made while the first game started.
    pub opening: Vec<Placement>,
    /// One entry per event.
    pub steps: Vec<Step>,
    /// Final view.
    pub view: BoardView,
}

impl Replay {
    /// Replays `events` against `controller`.
    #[instrument(skip(controller, events), fields(events = events.len()))]
    pub fn run(controller: &mut Controller, events: &[Event]) -> Result<Self, BoardError> {
        let opening = controller.take_placements();
        let mut steps = Vec::with_capacity(events.len());
        for &event in events {
            event.apply(controller)?;
            let placements = controller.take_placements();
            debug!(%event, placed = placements.len(), "Event replayed");
            steps.push(Step {
                event: event.to_string(),
                placements,
            });
        }
        Ok(Self {
            opening,
            steps,
            view: controller.view(),
        })
    }
}

impl std::fmt::Display for Replay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.opening.is_empty() {
            writeln!(f, "start: {}", describe(&self.opening))?;
        }
        for step in &self.steps {
            writeln!(f, "{}: {}", step.event, describe(&step.placements))?;
        }
        write!(f, "\n{}", self.view)
    }
}

fn describe(placements: &[Placement]) -> String {
    if placements.is_empty() {
        return "-".to_string();
    }
    placements
        .iter()
        .map(|p| format!("{} at {}", p.cell.symbol(), p.position))
        .collect::<Vec<_>>()
        .join(", ")
}
