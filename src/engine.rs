//! Engine state management.
//!
//! Holds the current game between commands and answers the line protocol:
//! starting games, marking cells, committing claims, listing legal moves,
//! and running the configured search for the side to move.

use std::io::Write;

use crate::board::{Board, Claim, Player, Roles, Selection};
use crate::eval::{outcome, Outcome};
use crate::movegen::{self, MoveError};
use crate::search::{decide, Strategy, DEFAULT_DEPTH, DEFAULT_WINDOW};

/// Immutable per-game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub poison: usize,
}

impl GameConfig {
    /// Validates the configuration. Non-positive dimensions or a poison
    /// count exceeding the cell count are caller contract violations and
    /// panic.
    pub fn new(rows: usize, cols: usize, poison: usize) -> GameConfig {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        assert!(poison <= rows * cols, "poison count exceeds cell count");
        GameConfig { rows, cols, poison }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Mutable state of one game in progress.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub to_move: Player,
    pub selection: Selection,
    pub roles: Roles,
}

impl GameState {
    /// Starts a game: seeded poison placement, first player to move, the
    /// machine side maximizing by default.
    pub fn new(config: &GameConfig, seed: u64) -> GameState {
        GameState {
            board: Board::with_poison(config.rows, config.cols, config.poison, seed),
            to_move: Player::First,
            selection: Selection::new(),
            roles: Roles::new(Player::Second),
        }
    }

    /// Fixes which player the search maximizes for. In human-vs-computer
    /// play the machine side is the maximizer.
    pub fn set_maximizer(&mut self, player: Player) {
        self.roles = Roles::new(player);
    }

    /// Toggles a mark on the current selection.
    pub fn mark(&mut self, index: usize) -> Result<(), MoveError> {
        movegen::mark(&self.board, &mut self.selection, index)
    }

    /// Validates and commits the rectangle spanned by two corner indices
    /// for the side to move, then passes the turn.
    pub fn try_claim(&mut self, a: usize, b: usize) -> Result<(), MoveError> {
        self.board = movegen::try_claim(&self.board, self.to_move, a, b)?;
        self.selection.clear();
        self.to_move = self.to_move.other();
        Ok(())
    }

    /// Commits an already-validated claim (a search decision) and passes
    /// the turn.
    pub fn apply_claim(&mut self, claim: &Claim) {
        self.board = movegen::apply_claim(&self.board, self.to_move, claim);
        self.selection.clear();
        self.to_move = self.to_move.other();
    }

    /// Commits the marked cells as territory of the side to move and
    /// passes the turn. Marks are validated individually at marking time.
    pub fn commit_selection(&mut self) {
        movegen::commit_selection(&mut self.board, self.to_move, &mut self.selection);
        self.to_move = self.to_move.other();
    }

    /// Passes the turn without moving. Used when the side to move has no
    /// legal claim.
    pub fn pass(&mut self) {
        self.selection.clear();
        self.to_move = self.to_move.other();
    }

    /// Terminal query for the current position.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board, self.to_move)
    }
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Option<GameState>,
    pub strategy: Strategy,
    pub depth: u32,
    pub window: i32,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with no game and default search settings.
    pub fn new() -> Engine {
        Engine {
            game: None,
            strategy: Strategy::AlphaBeta,
            depth: DEFAULT_DEPTH,
            window: DEFAULT_WINDOW,
        }
    }

    /// Starts a new game, discarding any previous one.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) {
        self.game = Some(GameState::new(&config, seed));
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Handles `mark I`: toggles a selection mark for the side to move.
    pub fn handle_mark<W: Write>(&mut self, index: usize, out: &mut W) {
        let Some(game) = &mut self.game else {
            eprintln!("mark: no game started");
            return;
        };
        if index >= game.board.cell_count() {
            writeln!(out, "error index {} out of range", index).unwrap();
            out.flush().unwrap();
            return;
        }
        match game.mark(index) {
            Ok(()) => writeln!(out, "ok").unwrap(),
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `claim A B`: commits the rectangle spanned by two corners
    /// for the side to move.
    pub fn handle_claim<W: Write>(&mut self, a: usize, b: usize, out: &mut W) {
        let Some(game) = &mut self.game else {
            eprintln!("claim: no game started");
            return;
        };
        let cells = game.board.cell_count();
        if a >= cells || b >= cells {
            writeln!(out, "error index out of range").unwrap();
            out.flush().unwrap();
            return;
        }
        match game.try_claim(a, b) {
            Ok(()) => {
                writeln!(out, "ok").unwrap();
                self.report_outcome(out);
            }
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `go`: runs the configured search for the side to move,
    /// applies the chosen claim, and reports score, nodes, and time.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        let Some(game) = &mut self.game else {
            eprintln!("go: no game started");
            return;
        };
        if game.outcome() != Outcome::Ongoing {
            self.report_outcome(out);
            out.flush().unwrap();
            return;
        }
        let decision = decide(
            &game.board,
            game.to_move,
            game.roles,
            self.depth,
            self.strategy,
            self.window,
        );
        match decision {
            Some(decision) => {
                writeln!(
                    out,
                    "info strategy {} depth {} score {} nodes {} time {}ms",
                    self.strategy,
                    self.depth,
                    decision.score,
                    decision.nodes,
                    decision.elapsed.as_millis()
                )
                .unwrap();
                let (a, b) = decision.claim.corners(game.board.cols());
                writeln!(out, "bestclaim {} {}", a, b).unwrap();
                game.apply_claim(&decision.claim);
                self.report_outcome(out);
            }
            None => {
                writeln!(out, "pass").unwrap();
                game.pass();
            }
        }
        out.flush().unwrap();
    }

    /// Handles `moves`: lists every legal claim for the side to move.
    pub fn handle_moves<W: Write>(&self, out: &mut W) {
        let Some(game) = &self.game else {
            eprintln!("moves: no game started");
            return;
        };
        let claims = movegen::legal_claims(&game.board, game.to_move);
        for claim in &claims {
            let (a, b) = claim.corners(game.board.cols());
            writeln!(out, "claim {} {}", a, b).unwrap();
        }
        writeln!(out, "total {}", claims.len()).unwrap();
        out.flush().unwrap();
    }

    /// Handles `show`: renders the board and whose turn it is.
    pub fn handle_show<W: Write>(&self, out: &mut W) {
        let Some(game) = &self.game else {
            eprintln!("show: no game started");
            return;
        };
        write!(out, "{}", game.board).unwrap();
        match game.outcome() {
            Outcome::Ongoing => writeln!(out, "turn {}", game.to_move).unwrap(),
            Outcome::Won(winner) => writeln!(out, "gameover winner={}", winner).unwrap(),
        }
        out.flush().unwrap();
    }

    fn report_outcome<W: Write>(&self, out: &mut W) {
        if let Some(game) = &self.game {
            if let Outcome::Won(winner) = game.outcome() {
                writeln!(out, "gameover winner={}", winner).unwrap();
            }
        }
    }
}
