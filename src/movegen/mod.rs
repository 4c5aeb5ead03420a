//! Legal move generation.
//!
//! Enumerates the claims available to a player on the current board. Only
//! maximal rectangles are generated: a legal rectangle that can grow by one
//! all-empty row or column strip is subsumed by the grown rectangle, so it
//! is skipped. This keeps the branching factor at the number of maximal
//! empty rectangles rather than every sub-rectangle of the board.

pub mod legality;

use rand::Rng;

use crate::board::{Board, Claim, Player};

pub use legality::{apply_claim, commit_selection, mark, try_claim, verify, MoveError};

/// Enumerates every maximal legal claim for `player`, row-major by top-left
/// then bottom-right corner. The order is deterministic; search tie-breaks
/// rely on it.
pub fn legal_claims(board: &Board, player: Player) -> Vec<Claim> {
    let mut claims = Vec::new();
    for top in 0..board.rows() {
        for left in 0..board.cols() {
            if !board.cell(board.index_of(top, left)).is_empty() {
                continue;
            }
            for bottom in top..board.rows() {
                for right in left..board.cols() {
                    let claim = Claim {
                        top,
                        left,
                        bottom,
                        right,
                    };
                    if verify(board, player, &claim).is_err() {
                        continue;
                    }
                    if is_maximal(board, &claim) {
                        claims.push(claim);
                    }
                }
            }
        }
    }
    claims
}

/// A legal claim grown by an all-empty strip is still legal (growth only
/// adds border contact and neighbours), so maximality reduces to every
/// in-bounds neighbouring strip containing a non-empty cell.
fn is_maximal(board: &Board, claim: &Claim) -> bool {
    if claim.top > 0 && row_strip_empty(board, claim.top - 1, claim.left, claim.right) {
        return false;
    }
    if claim.bottom + 1 < board.rows()
        && row_strip_empty(board, claim.bottom + 1, claim.left, claim.right)
    {
        return false;
    }
    if claim.left > 0 && col_strip_empty(board, claim.left - 1, claim.top, claim.bottom) {
        return false;
    }
    if claim.right + 1 < board.cols()
        && col_strip_empty(board, claim.right + 1, claim.top, claim.bottom)
    {
        return false;
    }
    true
}

fn row_strip_empty(board: &Board, row: usize, left: usize, right: usize) -> bool {
    (left..=right).all(|c| board.cell(board.index_of(row, c)).is_empty())
}

fn col_strip_empty(board: &Board, col: usize, top: usize, bottom: usize) -> bool {
    (top..=bottom).all(|r| board.cell(board.index_of(r, col)).is_empty())
}

/// Picks a uniformly random legal claim, or `None` if the player has none.
pub fn random_claim(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Claim> {
    let claims = legal_claims(board, player);
    if claims.is_empty() {
        return None;
    }
    Some(claims[rng.gen_range(0..claims.len())])
}
