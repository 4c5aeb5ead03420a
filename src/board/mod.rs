//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, players, the grid itself,
//! rectangle claims, and pending selections.

pub mod cell;
pub mod claim;
pub mod grid;
pub mod selection;

pub use cell::{Cell, Player, Roles};
pub use claim::Claim;
pub use grid::Board;
pub use selection::Selection;
