//! Claim legality and commits.
//!
//! A rectangle is claimable iff every covered cell is empty and the
//! rectangle is anchored: it touches the grid border, or some covered cell
//! has a 4-neighbour already owned by the claiming player. Territory
//! therefore always starts at the edge or grows contiguously from existing
//! territory.

use thiserror::Error;

use crate::board::{Board, Cell, Claim, Player, Selection};

/// Recoverable move rejections. Out-of-range indices are a caller contract
/// violation and panic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is poisoned")]
    Poisoned(usize),

    #[error("cell {0} is already claimed")]
    Occupied(usize),

    #[error("claim touches neither the border nor your territory")]
    NotReachable,
}

/// Toggles `index` in the selection: unmarks it if marked, otherwise marks
/// it after checking the cell is claimable at all.
pub fn mark(board: &Board, selection: &mut Selection, index: usize) -> Result<(), MoveError> {
    if selection.unmark(index) {
        return Ok(());
    }
    match board.cell(index) {
        Cell::Poisoned => Err(MoveError::Poisoned(index)),
        Cell::Owned(_) => Err(MoveError::Occupied(index)),
        Cell::Empty => {
            selection.push(index);
            Ok(())
        }
    }
}

/// Checks the legality rule for `claim`.
pub fn verify(board: &Board, player: Player, claim: &Claim) -> Result<(), MoveError> {
    let mut anchored = false;
    for r in claim.top..=claim.bottom {
        if r == 0 || r == board.rows() - 1 {
            anchored = true;
        }
        for c in claim.left..=claim.right {
            if c == 0 || c == board.cols() - 1 {
                anchored = true;
            }
            let index = board.index_of(r, c);
            match board.cell(index) {
                Cell::Poisoned => return Err(MoveError::Poisoned(index)),
                Cell::Owned(_) => return Err(MoveError::Occupied(index)),
                Cell::Empty => {}
            }
            if !anchored {
                anchored = board
                    .neighbours(index)
                    .into_iter()
                    .any(|n| board.cell(n).owner() == Some(player));
            }
        }
    }
    if anchored {
        Ok(())
    } else {
        Err(MoveError::NotReachable)
    }
}

/// Writes `claim` onto a copy of the board as `player` territory.
///
/// The copy is what keeps sibling search branches isolated; callers that
/// want in-place mutation go through `commit_selection`.
pub fn apply_claim(board: &Board, player: Player, claim: &Claim) -> Board {
    let mut next = board.clone();
    for index in board.claim_cells(claim) {
        next.set_cell(index, Cell::Owned(player));
    }
    next
}

/// Validates the rectangle spanned by two corner indices and commits it,
/// returning the new board.
pub fn try_claim(board: &Board, player: Player, a: usize, b: usize) -> Result<Board, MoveError> {
    let claim = Claim::from_corners(a, b, board.cols());
    verify(board, player, &claim)?;
    Ok(apply_claim(board, player, &claim))
}

/// Commits every marked cell as `player` territory and clears the selection.
/// This and `apply_claim` are the only operations that write ownership.
pub fn commit_selection(board: &mut Board, player: Player, selection: &mut Selection) {
    for &index in selection.indices() {
        board.set_cell(index, Cell::Owned(player));
    }
    selection.clear();
}
