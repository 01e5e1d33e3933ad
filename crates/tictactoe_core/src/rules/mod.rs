//! Decision rules for the responder.
//!
//! Rules are pure functions over a board and the pattern catalog. They never
//! mutate the board; the controller applies whatever they decide.

mod outcome;
mod response;

pub use outcome::{check_result, process_result};
pub use response::{Response, ResponseRule, check_response, process_response};
