//! Position evaluation.
//!
//! Terminal detection via poison connectivity, and the territorial
//! heuristic used at search leaves.

pub mod heuristic;
pub mod terminal;

pub use heuristic::{evaluate, evaluate_outcome, score, WIN_SCORE};
pub use terminal::{outcome, Outcome};
