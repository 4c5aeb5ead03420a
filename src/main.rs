//! Hap -- a territorial claiming game engine driven by line commands.
//!
//! This binary reads commands from stdin and writes responses to stdout:
//! `newgame <rows> <cols> <poison> [seed]`, `mark <i>`, `claim <a> <b>`,
//! `moves`, `go`, `show`, `strategy <name>`, `maximizer <player>`,
//! `depth <n>`, `quit`.

use std::io::{self, BufRead};

use hap::engine::{Engine, GameConfig};
use hap::protocol::parser::{parse_command, Command};

/// Runs the main command loop, reading from stdin and writing to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame {
                rows,
                cols,
                poison,
                seed,
            } => {
                // The parser already rejected malformed configurations.
                engine.new_game(GameConfig::new(rows, cols, poison), seed);
            }
            Command::Mark { index } => {
                engine.handle_mark(index, &mut out);
            }
            Command::Claim { a, b } => {
                engine.handle_claim(a, b, &mut out);
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Moves => {
                engine.handle_moves(&mut out);
            }
            Command::Show => {
                engine.handle_show(&mut out);
            }
            Command::SetStrategy { strategy } => {
                engine.set_strategy(strategy);
            }
            Command::SetMaximizer { player } => {
                if let Some(game) = engine.game.as_mut() {
                    game.set_maximizer(player);
                } else {
                    eprintln!("maximizer: no game started");
                }
            }
            Command::SetDepth { depth } => {
                engine.set_depth(depth);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
