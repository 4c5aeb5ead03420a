//! Territorial scoring heuristic.
//!
//! A player's strength is the number of empty cells left on the top and
//! bottom border rows plus the number of distinct maximal-run endpoints of
//! their territory. The first term rewards unclaimed border potential, the
//! second rewards contiguous reach in all four axis directions.

use crate::board::{Board, Player, Roles};
use crate::eval::terminal::{outcome, Outcome};

/// Dominates any reachable heuristic spread, so forced wins and losses
/// always outrank positional scores. Must stay inside the alpha-beta
/// window for the equivalence contract to hold.
pub const WIN_SCORE: i32 = 250;

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Left,
    Direction::Right,
];

/// Walks from `index` along `direction` while the next cell is owned by
/// `player`, returning the last cell of the run (possibly `index` itself).
fn run_end(board: &Board, player: Player, index: usize, direction: Direction) -> usize {
    let (mut r, mut c) = board.coords(index);
    loop {
        let next = match direction {
            Direction::Down if r + 1 < board.rows() => Some((r + 1, c)),
            Direction::Up if r >= 1 => Some((r - 1, c)),
            Direction::Left if c >= 1 => Some((r, c - 1)),
            Direction::Right if c + 1 < board.cols() => Some((r, c + 1)),
            _ => None,
        };
        match next {
            Some((nr, nc)) if board.cell(board.index_of(nr, nc)).owner() == Some(player) => {
                r = nr;
                c = nc;
            }
            _ => return board.index_of(r, c),
        }
    }
}

/// Territorial strength of `player` on this board.
pub fn score(board: &Board, player: Player) -> i32 {
    let mut border_empty = 0i32;
    let last_row = board.rows() - 1;
    let border_rows = [0, last_row];
    let border_rows = if last_row == 0 {
        &border_rows[..1]
    } else {
        &border_rows[..]
    };
    for &row in border_rows {
        for col in 0..board.cols() {
            if board.cell(board.index_of(row, col)).is_empty() {
                border_empty += 1;
            }
        }
    }

    // Each maximal run is counted once per direction, deduplicated by its
    // endpoint cell.
    let mut endpoints: Vec<usize> = Vec::new();
    for index in 0..board.cell_count() {
        if board.cell(index).owner() != Some(player) || endpoints.contains(&index) {
            continue;
        }
        for direction in DIRECTIONS {
            let end = run_end(board, player, index, direction);
            if !endpoints.contains(&end) {
                endpoints.push(end);
            }
        }
    }

    border_empty + endpoints.len() as i32
}

/// Leaf evaluation: forced results dominate, faster wins score higher, and
/// ongoing positions fall back to the territorial difference between the
/// maximizing and minimizing sides.
pub fn evaluate(board: &Board, to_move: Player, roles: Roles, depth_remaining: u32) -> i32 {
    evaluate_outcome(board, outcome(board, to_move), roles, depth_remaining)
}

/// Same as [`evaluate`], for callers that already ran the terminal test.
pub fn evaluate_outcome(
    board: &Board,
    outcome: Outcome,
    roles: Roles,
    depth_remaining: u32,
) -> i32 {
    match outcome.winner() {
        Some(winner) if winner == roles.maximizer => WIN_SCORE + depth_remaining as i32,
        Some(_) => -WIN_SCORE - depth_remaining as i32,
        None => {
            let diff = score(board, roles.maximizer) - score(board, roles.minimizer());
            debug_assert!(diff.abs() < WIN_SCORE, "heuristic spread exceeds WIN_SCORE");
            diff
        }
    }
}
