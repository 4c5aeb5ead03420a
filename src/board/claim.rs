//! Rectangle claims.
//!
//! A claim is the move unit of the game: an axis-aligned rectangle of cells,
//! normalized so `top <= bottom` and `left <= right`.

use serde::Serialize;

/// An axis-aligned rectangle of cells to claim in one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Claim {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Claim {
    /// Builds the rectangle spanned by two corner cell indices, in either
    /// order, on a grid with `cols` columns.
    pub fn from_corners(a: usize, b: usize, cols: usize) -> Claim {
        let (ra, ca) = (a / cols, a % cols);
        let (rb, cb) = (b / cols, b % cols);
        Claim {
            top: ra.min(rb),
            left: ca.min(cb),
            bottom: ra.max(rb),
            right: ca.max(cb),
        }
    }

    /// The top-left and bottom-right corner cell indices.
    pub fn corners(&self, cols: usize) -> (usize, usize) {
        (
            self.top * cols + self.left,
            self.bottom * cols + self.right,
        )
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        (self.bottom - self.top + 1) * (self.right - self.left + 1)
    }
}
