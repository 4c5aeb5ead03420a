//! Poison connectivity.
//!
//! Breadth-first shortest paths over the non-owned cells, and the
//! minimum-length route visiting every poisoned cell. The route search
//! tries each poison cell as the root and every ordering of the rest,
//! which is O(K! * BFS) for K poison cells -- acceptable only because the
//! poison count is intentionally small (2-4).

use std::collections::VecDeque;

use crate::board::Board;

/// Shortest path from `start` to `goal` over cells that are neither owned
/// nor listed in `forbidden`, as the sequence of cells stepped onto
/// (excluding `start`). Returns `None` when the goal is unreachable.
///
/// Edges are unweighted, so the returned length is the BFS distance.
pub fn shortest_path(
    board: &Board,
    start: usize,
    goal: usize,
    forbidden: &[usize],
) -> Option<Vec<usize>> {
    if start == goal {
        return Some(Vec::new());
    }

    const UNSEEN: usize = usize::MAX;
    let mut prev = vec![UNSEEN; board.cell_count()];
    let mut queue = VecDeque::new();
    prev[start] = start;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for next in board.neighbours(node) {
            if prev[next] != UNSEEN {
                continue;
            }
            if board.cell(next).is_owned() || forbidden.contains(&next) {
                continue;
            }
            prev[next] = node;
            if next == goal {
                let mut path = Vec::new();
                let mut cur = goal;
                while cur != start {
                    path.push(cur);
                    cur = prev[cur];
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(next);
        }
    }
    None
}

/// Minimum-length path visiting every index in `poison`, or `None` when no
/// such path exists -- the game-over signal consumed by the evaluator.
///
/// A lone poison cell is trivially connected unless every neighbour is
/// owned (full enclosure). For two or more cells, each leg forbids the
/// poison cells already visited earlier in the ordering.
pub fn connecting_path(board: &Board, poison: &[usize]) -> Option<Vec<usize>> {
    match poison {
        [] => Some(Vec::new()),
        [lone] => {
            let enclosed = board
                .neighbours(*lone)
                .into_iter()
                .all(|n| board.cell(n).is_owned());
            if enclosed {
                None
            } else {
                Some(Vec::new())
            }
        }
        _ => {
            let mut best: Option<Vec<usize>> = None;
            for (i, &root) in poison.iter().enumerate() {
                let mut rest: Vec<usize> = poison.to_vec();
                rest.remove(i);
                let mut visited = Vec::with_capacity(poison.len());
                let mut path = Vec::new();
                extend_ordering(board, root, &rest, &mut visited, &mut path, &mut best);
            }
            best
        }
    }
}

/// Depth-first walk over orderings of the remaining poison cells,
/// accumulating BFS legs and keeping the shortest completed route.
fn extend_ordering(
    board: &Board,
    start: usize,
    rest: &[usize],
    visited: &mut Vec<usize>,
    path: &mut Vec<usize>,
    best: &mut Option<Vec<usize>>,
) {
    if rest.is_empty() {
        if best.as_ref().map_or(true, |b| path.len() < b.len()) {
            *best = Some(path.clone());
        }
        return;
    }

    for (i, &next) in rest.iter().enumerate() {
        let Some(leg) = shortest_path(board, start, next, visited) else {
            // A previously visited poison cell blocks the only corridor;
            // this ordering cannot be completed.
            continue;
        };
        let checkpoint = path.len();
        path.extend(leg);
        visited.push(start);

        let mut remaining = rest.to_vec();
        remaining.remove(i);
        extend_ordering(board, next, &remaining, visited, path, best);

        visited.pop();
        path.truncate(checkpoint);
    }
}
