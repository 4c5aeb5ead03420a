//! Players and cell contents.

use serde::Serialize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Returns the opponent.
    pub const fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the lowercase name used in the line protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Player::First => "first",
            Player::Second => "second",
        }
    }

    /// Parses a player from its protocol name.
    pub fn from_name(s: &str) -> Option<Player> {
        match s {
            "first" => Some(Player::First),
            "second" => Some(Player::Second),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed per-game mapping of players onto the search roles.
///
/// The maximizing side is the one the search plays for; the other side is
/// minimized. The mapping never changes during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub maximizer: Player,
}

impl Roles {
    pub const fn new(maximizer: Player) -> Roles {
        Roles { maximizer }
    }

    pub const fn minimizer(self) -> Player {
        self.maximizer.other()
    }
}

/// Contents of a single grid cell.
///
/// Poisoned cells are placed at board construction and never change state;
/// ownership is only ever written onto empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Poisoned,
    Owned(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn is_poisoned(self) -> bool {
        matches!(self, Cell::Poisoned)
    }

    pub const fn is_owned(self) -> bool {
        matches!(self, Cell::Owned(_))
    }

    /// Returns the owning player, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Owned(p) => Some(p),
            _ => None,
        }
    }

    /// Single-character board rendering: `.` empty, `*` poisoned, `1`/`2` owned.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Poisoned => '*',
            Cell::Owned(Player::First) => '1',
            Cell::Owned(Player::Second) => '2',
        }
    }
}
