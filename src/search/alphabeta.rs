//! Alpha-beta pruning.

use crate::board::{Board, Claim, Player, Roles};
use crate::eval::{evaluate_outcome, outcome, Outcome};
use crate::movegen::{apply_claim, legal_claims};

/// Minimax with an `[alpha, beta]` pruning window.
///
/// The maximizing ply raises `alpha` to the best value found and stops
/// expanding siblings once `alpha >= beta`; the minimizing ply lowers
/// `beta` symmetrically. For any window containing the true value the
/// returned score and claim equal plain minimax on the same tree -- only
/// the node count shrinks.
pub fn best_claim(
    board: &Board,
    to_move: Player,
    roles: Roles,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
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

    let mut best = None;

    if to_move == roles.maximizer {
        let mut value = i32::MIN;
        for claim in claims {
            let child = apply_claim(board, to_move, &claim);
            let (score, _) =
                best_claim(&child, to_move.other(), roles, depth - 1, alpha, beta, nodes);
            if score > value {
                value = score;
                best = Some(claim);
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }
        (value, best)
    } else {
        let mut value = i32::MAX;
        for claim in claims {
            let child = apply_claim(board, to_move, &claim);
            let (score, _) =
                best_claim(&child, to_move.other(), roles, depth - 1, alpha, beta, nodes);
            if score < value {
                value = score;
                best = Some(claim);
            }
            if value < beta {
                beta = value;
            }
            if alpha >= beta {
                break;
            }
        }
        (value, best)
    }
}
