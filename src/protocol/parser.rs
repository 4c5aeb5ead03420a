//! Command parser.

use crate::board::Player;
use crate::search::Strategy;

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game: `newgame <rows> <cols> <poison> [seed]`.
    NewGame {
        rows: usize,
        cols: usize,
        poison: usize,
        seed: u64,
    },

    /// Toggle a selection mark: `mark <index>`.
    Mark { index: usize },

    /// Commit the rectangle spanned by two corners: `claim <a> <b>`.
    Claim { a: usize, b: usize },

    /// Run the configured search for the side to move.
    Go,

    /// List every legal claim for the side to move.
    Moves,

    /// Render the board and whose turn it is.
    Show,

    /// Select the search algorithm: `strategy minimax|alphabeta`.
    SetStrategy { strategy: Strategy },

    /// Fix which player the search maximizes for: `maximizer first|second`.
    SetMaximizer { player: Player },

    /// Set the search depth: `depth <n>`.
    SetDepth { depth: u32 },

    /// Terminate the driver.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "go" => Some(Command::Go),
        "moves" => Some(Command::Moves),
        "show" => Some(Command::Show),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(&tokens),
        "mark" => parse_mark(&tokens),
        "claim" => parse_claim(&tokens),
        "strategy" => parse_strategy(&tokens),
        "maximizer" => parse_maximizer(&tokens),
        "depth" => parse_depth(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newgame <rows> <cols> <poison> [seed]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 && tokens.len() != 5 {
        eprintln!("malformed newgame: expected 'newgame <rows> <cols> <poison> [seed]'");
        return None;
    }
    let rows = parse_number(tokens[1], "rows")?;
    let cols = parse_number(tokens[2], "cols")?;
    let poison = parse_number(tokens[3], "poison")?;
    let seed = match tokens.get(4) {
        Some(t) => parse_number(t, "seed")? as u64,
        None => 0,
    };
    if rows == 0 || cols == 0 {
        eprintln!("malformed newgame: dimensions must be positive");
        return None;
    }
    if poison > rows * cols {
        eprintln!("malformed newgame: poison count exceeds cell count");
        return None;
    }
    Some(Command::NewGame {
        rows,
        cols,
        poison,
        seed,
    })
}

/// Parses `mark <index>`.
fn parse_mark(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed mark: expected 'mark <index>'");
        return None;
    }
    let index = parse_number(tokens[1], "index")?;
    Some(Command::Mark { index })
}

/// Parses `claim <a> <b>`.
fn parse_claim(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed claim: expected 'claim <a> <b>'");
        return None;
    }
    let a = parse_number(tokens[1], "corner")?;
    let b = parse_number(tokens[2], "corner")?;
    Some(Command::Claim { a, b })
}

/// Parses `strategy minimax|alphabeta`.
fn parse_strategy(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed strategy: expected 'strategy minimax|alphabeta'");
        return None;
    }
    match Strategy::from_name(tokens[1]) {
        Some(strategy) => Some(Command::SetStrategy { strategy }),
        None => {
            eprintln!("unknown strategy: {}", tokens[1]);
            None
        }
    }
}

/// Parses `maximizer first|second`.
fn parse_maximizer(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed maximizer: expected 'maximizer first|second'");
        return None;
    }
    match Player::from_name(tokens[1]) {
        Some(player) => Some(Command::SetMaximizer { player }),
        None => {
            eprintln!("unknown player: {}", tokens[1]);
            None
        }
    }
}

/// Parses `depth <n>`.
fn parse_depth(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed depth: expected 'depth <n>'");
        return None;
    }
    match tokens[1].parse::<u32>() {
        Ok(depth) if depth > 0 => Some(Command::SetDepth { depth }),
        _ => {
            eprintln!("invalid depth: {}", tokens[1]);
            None
        }
    }
}

fn parse_number(token: &str, what: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("invalid {}: {}", what, token);
            None
        }
    }
}
