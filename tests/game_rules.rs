//! Rule scenario tests against the library API.
//!
//! Walks concrete positions through legality, connectivity, terminal
//! detection, and search, and checks the strategies against each other on
//! randomized boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hap::board::{Board, Cell, Claim, Player, Roles};
use hap::connectivity::{connecting_path, shortest_path};
use hap::eval::{outcome, Outcome};
use hap::movegen::{apply_claim, legal_claims, verify, MoveError};
use hap::search::{alphabeta, minimax, Strategy, DEFAULT_WINDOW};

/// The reference position: 4x5 board, poison at 6 and 13.
fn reference_board() -> Board {
    let mut board = Board::new(4, 5);
    board.set_cell(6, Cell::Poisoned);
    board.set_cell(13, Cell::Poisoned);
    board
}

#[test]
fn fresh_reference_position_is_ongoing() {
    let board = reference_board();
    assert_eq!(outcome(&board, Player::First), Outcome::Ongoing);
}

#[test]
fn top_border_row_is_claimable_and_harmless() {
    let board = reference_board();
    let top_row = Claim::from_corners(0, 4, 5);
    assert!(verify(&board, Player::First, &top_row).is_ok());

    let board = apply_claim(&board, Player::First, &top_row);
    // The poison cells stay mutually reachable through the lower rows.
    assert_eq!(outcome(&board, Player::Second), Outcome::Ongoing);
}

#[test]
fn separating_the_poison_ends_the_game() {
    let mut board = reference_board();
    for index in [2, 7, 12, 17] {
        board.set_cell(index, Cell::Owned(Player::Second));
    }
    assert_eq!(connecting_path(&board, &[6, 13]), None);
    // The win goes to the player about to move.
    assert_eq!(outcome(&board, Player::First), Outcome::Won(Player::First));
}

#[test]
fn filled_board_wins_for_the_player_who_did_not_fill_it() {
    let mut board = Board::new(2, 3);
    board.set_cell(0, Cell::Poisoned);
    board.set_cell(1, Cell::Poisoned);
    for index in 2..6 {
        board.set_cell(index, Cell::Owned(Player::Second));
    }
    assert_eq!(board.empty_count(), 0);
    // The poison is still connected; Second just filled the last cell, so
    // with First to move the win goes to Second.
    assert!(connecting_path(&board, &[0, 1]).is_some());
    assert_eq!(outcome(&board, Player::First), Outcome::Won(Player::Second));
}

#[test]
fn rectangles_with_poison_or_territory_are_rejected_everywhere() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let board = random_board(&mut rng, 4, 4, 2, 3);
        for a in 0..board.cell_count() {
            for b in 0..board.cell_count() {
                let claim = Claim::from_corners(a, b, board.cols());
                let covers_bad = board
                    .claim_cells(&claim)
                    .any(|i| !board.cell(i).is_empty());
                if covers_bad {
                    let result = verify(&board, Player::First, &claim);
                    assert!(matches!(
                        result,
                        Err(MoveError::Poisoned(_)) | Err(MoveError::Occupied(_))
                    ));
                }
            }
        }
    }
}

#[test]
fn bfs_distance_matches_manual_walks() {
    let board = Board::new(1, 9);
    for start in 0..9 {
        for goal in 0..9 {
            let path = shortest_path(&board, start, goal, &[]).unwrap();
            assert_eq!(
                path.len(),
                (start as i64 - goal as i64).unsigned_abs() as usize
            );
        }
    }
}

#[test]
fn strategies_are_value_equivalent_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(2024);
    let roles = Roles::new(Player::Second);

    for trial in 0..30 {
        let board = random_board(&mut rng, 3, 4, 2, 4);
        let to_move = if rng.gen() { Player::First } else { Player::Second };
        let depth = rng.gen_range(1..=3);

        let mut mm_nodes = 0;
        let (mm_score, mm_claim) =
            minimax::best_claim(&board, to_move, roles, depth, &mut mm_nodes);
        let mut ab_nodes = 0;
        let (ab_score, ab_claim) = alphabeta::best_claim(
            &board,
            to_move,
            roles,
            depth,
            -DEFAULT_WINDOW,
            DEFAULT_WINDOW,
            &mut ab_nodes,
        );

        assert_eq!(mm_score, ab_score, "trial {} depth {}", trial, depth);
        assert_eq!(mm_claim, ab_claim, "trial {} depth {}", trial, depth);
        assert!(
            ab_nodes <= mm_nodes,
            "trial {}: alpha-beta visited {} > minimax {}",
            trial,
            ab_nodes,
            mm_nodes
        );
    }
}

#[test]
fn search_decisions_are_always_legal() {
    let mut rng = StdRng::seed_from_u64(99);
    let roles = Roles::new(Player::Second);
    for _ in 0..10 {
        let board = random_board(&mut rng, 3, 4, 1, 2);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            if let Some(decision) =
                hap::search::decide(&board, Player::First, roles, 2, strategy, DEFAULT_WINDOW)
            {
                assert!(verify(&board, Player::First, &decision.claim).is_ok());
            }
        }
    }
}

/// Builds a board with random poison and a few random legal claims applied
/// by alternating players.
fn random_board(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    poison: usize,
    max_claims: usize,
) -> Board {
    let mut board = Board::with_poison(rows, cols, poison, rng.gen());
    let mut player = Player::First;
    for _ in 0..rng.gen_range(0..=max_claims) {
        let claims = legal_claims(&board, player);
        if claims.is_empty() {
            break;
        }
        let claim = claims[rng.gen_range(0..claims.len())];
        board = apply_claim(&board, player, &claim);
        player = player.other();
    }
    board
}
