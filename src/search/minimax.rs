//! Plain minimax.

use crate::board::{Board, Claim, Player, Roles};
use crate::eval::{evaluate_outcome, outcome, Outcome};
use crate::movegen::{apply_claim, legal_claims};

/// Full-width minimax from this position.
///
/// Returns the backed-up score and the claim that produced it, or `None`
/// for the claim at leaves (depth exhausted, terminal position, or no
/// legal move). Ties go to the first-enumerated claim, so results are
/// deterministic for a fixed move order.
pub fn best_claim(
    board: &Board,
    to_move: Player,
    roles: Roles,
    depth: u32,
    nodes: &mut u64,
) -> (i32, Option<Claim>) {
    *nodes += 1;

    let result = outcome(board, to_move);
    if depth == 0 || result != Outcome::Ongoing {
        return (evaluate_outcome(board, result, roles, depth), None);
    }

    let claims = legal_claims(board, to_move);
    if claims.is_empty() {
        return (evaluate_outcome(board, result, roles, depth), None);
    }

    let maximizing = to_move == roles.maximizer;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = None;

    for claim in claims {
        let child = apply_claim(board, to_move, &claim);
        let (score, _) = best_claim(&child, to_move.other(), roles, depth - 1, nodes);
        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best = Some(claim);
        }
    }

    (best_score, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::eval::WIN_SCORE;

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let board = Board::new(3, 3);
        let roles = Roles::new(Player::Second);
        let mut nodes = 0;
        let (score, claim) = best_claim(&board, Player::First, roles, 0, &mut nodes);
        assert_eq!(score, 0);
        assert!(claim.is_none());
        assert_eq!(nodes, 1);
    }

    #[test]
    fn finds_the_winning_separation() {
        // |*|.|*|
        // |.|.|.|
        // Claiming the middle column separates the poison; after that it is
        // the opponent's turn, and the winner-attribution rule gives the win
        // to the opponent. The maximizer must see that claiming the column
        // LOSES, and the score reflects a forced result either way.
        let mut board = Board::new(2, 3);
        board.set_cell(0, Cell::Poisoned);
        board.set_cell(2, Cell::Poisoned);
        let roles = Roles::new(Player::First);
        let mut nodes = 0;
        let (score, claim) = best_claim(&board, Player::First, roles, 3, &mut nodes);
        assert!(claim.is_some());
        // Every continuation fills toward a forced result; the score must
        // be a forced-win or forced-loss magnitude, not a heuristic one.
        assert!(score.abs() > WIN_SCORE - 10, "score {}", score);
    }

    #[test]
    fn node_count_grows_with_depth() {
        let mut board = Board::new(3, 3);
        board.set_cell(4, Cell::Poisoned);
        let roles = Roles::new(Player::Second);
        let mut shallow = 0;
        best_claim(&board, Player::First, roles, 1, &mut shallow);
        let mut deep = 0;
        best_claim(&board, Player::First, roles, 3, &mut deep);
        assert!(deep > shallow);
    }

    #[test]
    fn minimizer_picks_the_smallest_child() {
        // With Second maximizing, First's move is chosen by minimum score.
        let mut board = Board::new(2, 3);
        board.set_cell(4, Cell::Poisoned);
        let roles = Roles::new(Player::Second);
        let mut nodes = 0;
        let (score, claim) = best_claim(&board, Player::First, roles, 2, &mut nodes);
        let claim = claim.unwrap();

        // Recompute by hand over the children.
        let mut expected = i32::MAX;
        for candidate in legal_claims(&board, Player::First) {
            let child = apply_claim(&board, Player::First, &candidate);
            let mut n = 0;
            let (s, _) = best_claim(&child, Player::Second, roles, 1, &mut n);
            expected = expected.min(s);
        }
        assert_eq!(score, expected);
        assert!(legal_claims(&board, Player::First).contains(&claim));
    }
}
