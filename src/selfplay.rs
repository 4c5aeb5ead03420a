//! Self-play game generation.
//!
//! Plays full games with both sides driven by the search, recording every
//! ply (claim, score, nodes, thinking time) for offline analysis. Games
//! run sequentially or concurrently on a rayon pool; records are emitted
//! as one JSON object per game.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Claim, Player};
use crate::engine::{GameConfig, GameState};
use crate::eval::Outcome;
use crate::movegen::random_claim;
use crate::search::{decide, Strategy, DEFAULT_DEPTH, DEFAULT_WINDOW};

/// Configuration for self-play generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Poisoned cell count.
    pub poison: usize,
    /// Search depth for both sides.
    pub depth: u32,
    /// Search strategy for both sides.
    pub strategy: Strategy,
    /// Alpha-beta window half-width.
    pub window: i32,
    /// Play the first ply of each game uniformly at random for variety.
    pub random_opening: bool,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            rows: 4,
            cols: 5,
            poison: 2,
            depth: DEFAULT_DEPTH,
            strategy: Strategy::AlphaBeta,
            window: DEFAULT_WINDOW,
            random_opening: false,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

impl SelfPlayConfig {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.rows, self.cols, self.poison)
    }
}

/// One recorded ply.
#[derive(Debug, Clone, Serialize)]
pub struct PlyRecord {
    pub player: Player,
    pub claim: Claim,
    pub score: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Seed used for poison placement.
    pub board_seed: u64,
    /// All plies in order.
    pub plies: Vec<PlyRecord>,
    /// The winner, or `None` for a double-pass draw.
    pub winner: Option<Player>,
    /// Total nodes searched over the whole game.
    pub total_nodes: u64,
}

/// Plays a single game and returns its record.
///
/// A side with no legal claim passes; two consecutive passes end the game
/// as a draw. A ply cap of twice the cell count guards the loop.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let board_seed = rng.gen();
    let mut state = GameState::new(&config.game_config(), board_seed);
    let mut plies: Vec<PlyRecord> = Vec::new();
    let mut winner = None;
    let mut consecutive_passes = 0u32;
    let ply_cap = 2 * state.board.cell_count();

    while plies.len() < ply_cap {
        if let Outcome::Won(w) = state.outcome() {
            winner = Some(w);
            break;
        }

        let chosen = if config.random_opening && plies.is_empty() {
            random_claim(&state.board, state.to_move, rng).map(|claim| (claim, 0, 0, 0))
        } else {
            decide(
                &state.board,
                state.to_move,
                state.roles,
                config.depth,
                config.strategy,
                config.window,
            )
            .map(|d| (d.claim, d.score, d.nodes, d.elapsed.as_millis() as u64))
        };

        match chosen {
            Some((claim, score, nodes, elapsed_ms)) => {
                consecutive_passes = 0;
                plies.push(PlyRecord {
                    player: state.to_move,
                    claim,
                    score,
                    nodes,
                    elapsed_ms,
                });
                state.apply_claim(&claim);
            }
            None => {
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    break;
                }
                state.pass();
            }
        }
    }

    let total_nodes = plies.iter().map(|p| p.nodes).sum();
    GameRecord {
        game_id,
        board_seed,
        plies,
        winner,
        total_nodes,
    }
}

/// Runs self-play generation and returns all game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon;
/// each game derives its RNG from the base seed and its game ID, so runs
/// are reproducible regardless of thread interleaving.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    if config.threads > 1 {
        run_self_play_parallel(config)
    } else {
        run_self_play_sequential(config)
    }
}

fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn run_self_play_sequential(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    for game_id in 0..config.num_games {
        let start = Instant::now();
        let game = play_game(config, game_id, &mut game_rng(config, game_id));
        if !config.quiet {
            report_game(&game, config.num_games, start.elapsed().as_secs_f64());
        }
        games.push(game);
    }
    games
}

fn run_self_play_parallel(config: &SelfPlayConfig) -> Vec<GameRecord> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|game_id| {
                let start = Instant::now();
                let game = play_game(config, game_id, &mut game_rng(config, game_id));
                if !config.quiet {
                    report_game(&game, config.num_games, start.elapsed().as_secs_f64());
                }
                game
            })
            .collect()
    })
}

fn report_game(game: &GameRecord, num_games: usize, elapsed_secs: f64) {
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} in {} plies, {} nodes ({:.1}s)",
        game.game_id + 1,
        num_games,
        outcome,
        game.plies.len(),
        game.total_nodes,
        elapsed_secs,
    );
}

/// Writes one JSON object per game, newline-delimited.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints per-player win counts and search totals to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let first_wins = games
        .iter()
        .filter(|g| g.winner == Some(Player::First))
        .count();
    let second_wins = games
        .iter()
        .filter(|g| g.winner == Some(Player::Second))
        .count();
    let draws = games.len() - first_wins - second_wins;
    let total_nodes: u64 = games.iter().map(|g| g.total_nodes).sum();
    let total_plies: usize = games.iter().map(|g| g.plies.len()).sum();

    eprintln!(
        "Summary: {} games, first {} / second {} / draws {}",
        games.len(),
        first_wins,
        second_wins,
        draws
    );
    eprintln!(
        "Search: {} nodes over {} plies ({:.0} nodes/ply)",
        total_nodes,
        total_plies,
        if total_plies > 0 {
            total_nodes as f64 / total_plies as f64
        } else {
            0.0
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> SelfPlayConfig {
        SelfPlayConfig {
            num_games: 2,
            rows: 2,
            cols: 3,
            poison: 1,
            depth: 2,
            threads: 1,
            seed: 11,
            quiet: true,
            ..SelfPlayConfig::default()
        }
    }

    #[test]
    fn games_finish_with_a_result() {
        let games = run_self_play(&tiny_config());
        assert_eq!(games.len(), 2);
        for game in &games {
            assert!(!game.plies.is_empty());
            // A 2x3 board with one poison cell always ends decisively.
            assert!(game.winner.is_some());
            assert!(game.plies.len() <= 12);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = run_self_play(&tiny_config());
        let b = run_self_play(&tiny_config());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.board_seed, y.board_seed);
            assert_eq!(x.winner, y.winner);
            assert_eq!(x.plies.len(), y.plies.len());
        }
    }

    #[test]
    fn parallel_matches_sequential_for_same_seed() {
        let mut parallel = tiny_config();
        parallel.threads = 2;
        let a = run_self_play(&tiny_config());
        let mut b = run_self_play(&parallel);
        b.sort_by_key(|g| g.game_id);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.board_seed, y.board_seed);
            assert_eq!(x.winner, y.winner);
        }
    }

    #[test]
    fn plies_alternate_strictly_on_all_border_boards() {
        // Every cell of a 2x3 board touches the border, so nobody can ever
        // be stuck without a claim and no pass can interrupt alternation.
        let games = run_self_play(&tiny_config());
        for game in &games {
            assert_eq!(game.plies[0].player, Player::First);
            for pair in game.plies.windows(2) {
                assert_ne!(pair[0].player, pair[1].player);
            }
        }
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = run_self_play(&tiny_config());
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("game_id").is_some());
            assert!(value.get("plies").unwrap().as_array().is_some());
            assert!(value.get("winner").is_some());
        }
    }

    #[test]
    fn random_opening_stays_legal() {
        let mut config = tiny_config();
        config.random_opening = true;
        let games = run_self_play(&config);
        for game in &games {
            assert!(game.winner.is_some());
            // The opening ply records no search statistics.
            assert_eq!(game.plies[0].nodes, 0);
        }
    }
}
