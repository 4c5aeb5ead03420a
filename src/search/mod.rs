//! Adversarial tree search.
//!
//! Two interchangeable strategies over the same tree: plain minimax and
//! alpha-beta pruning. Pruning never changes the chosen move or score,
//! only the number of nodes visited. Search is synchronous and
//! single-threaded; every child expansion works on its own board clone,
//! so sibling branches never alias.

pub mod alphabeta;
pub mod minimax;

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::board::{Board, Claim, Player, Roles};

/// Default search depth.
pub const DEFAULT_DEPTH: u32 = 5;

/// Default half-width of the alpha-beta window. Wide enough to contain
/// every terminal score, which the minimax-equivalence contract requires.
pub const DEFAULT_WINDOW: i32 = 500;

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
        }
    }

    /// Parses a strategy from its protocol name.
    pub fn from_name(s: &str) -> Option<Strategy> {
        match s {
            "minimax" => Some(Strategy::Minimax),
            "alphabeta" => Some(Strategy::AlphaBeta),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one search: the chosen claim, the score backed up to the
/// root, how many nodes were visited, and how long the decision took.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub claim: Claim,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Runs the configured search from this position for the player to move.
///
/// Returns `None` when the mover has no legal claim (or the position is
/// already terminal); the caller decides what a pass means.
pub fn decide(
    board: &Board,
    to_move: Player,
    roles: Roles,
    depth: u32,
    strategy: Strategy,
    window: i32,
) -> Option<Decision> {
    let start = Instant::now();
    let mut nodes = 0u64;
    let (score, claim) = match strategy {
        Strategy::Minimax => minimax::best_claim(board, to_move, roles, depth, &mut nodes),
        Strategy::AlphaBeta => {
            alphabeta::best_claim(board, to_move, roles, depth, -window, window, &mut nodes)
        }
    };
    claim.map(|claim| Decision {
        claim,
        score,
        nodes,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn strategy_name_roundtrip() {
        for s in [Strategy::Minimax, Strategy::AlphaBeta] {
            assert_eq!(Strategy::from_name(s.name()), Some(s));
        }
        assert_eq!(Strategy::from_name("negamax"), None);
    }

    #[test]
    fn decide_returns_a_legal_claim() {
        let mut board = Board::new(3, 4);
        board.set_cell(5, Cell::Poisoned);
        let roles = Roles::new(Player::Second);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let decision =
                decide(&board, Player::First, roles, 2, strategy, DEFAULT_WINDOW).unwrap();
            assert!(crate::movegen::verify(&board, Player::First, &decision.claim).is_ok());
            assert!(decision.nodes > 0);
        }
    }

    #[test]
    fn decide_none_when_no_moves() {
        // One empty cell enclosed by opponent territory: First cannot move.
        let mut board = Board::new(3, 3);
        for index in 0..9 {
            board.set_cell(index, Cell::Owned(Player::Second));
        }
        board.set_cell(4, Cell::Empty);
        let roles = Roles::new(Player::Second);
        let decision = decide(
            &board,
            Player::First,
            roles,
            3,
            Strategy::AlphaBeta,
            DEFAULT_WINDOW,
        );
        assert!(decision.is_none());
    }

    #[test]
    fn strategies_agree_on_score() {
        let mut board = Board::new(3, 4);
        board.set_cell(5, Cell::Poisoned);
        board.set_cell(6, Cell::Poisoned);
        let roles = Roles::new(Player::Second);
        for depth in 1..=3 {
            let mm = decide(
                &board,
                Player::First,
                roles,
                depth,
                Strategy::Minimax,
                DEFAULT_WINDOW,
            )
            .unwrap();
            let ab = decide(
                &board,
                Player::First,
                roles,
                depth,
                Strategy::AlphaBeta,
                DEFAULT_WINDOW,
            )
            .unwrap();
            assert_eq!(mm.score, ab.score, "depth {}", depth);
            assert_eq!(mm.claim, ab.claim, "depth {}", depth);
            assert!(ab.nodes <= mm.nodes, "depth {}", depth);
        }
    }
}
