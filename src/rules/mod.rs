//! Game rules: terminal detection, legal actions, and board history.
//!
//! Search agents and the match driver call into `RulesEngine` and never
//! re-implement the win conditions themselves.

pub mod engine;
pub mod history;

pub use engine::{Outcome, PushRules, RulesEngine};
pub use history::History;
