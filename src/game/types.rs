//! Arena update document and the values the heuristic works with.
//!
//! Every struct rejects unknown fields: a document that does not match the
//! expected shape never reaches the decision logic.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Player ids are the players' public URLs.
pub type PlayerId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

/// The single action sent back each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Throw / stay put. Also the answer when nothing better was found.
    Fire,
    Left,
    Right,
    Forward,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Fire => "T",
            Command::Left => "L",
            Command::Right => "R",
            Command::Forward => "F",
        }
    }

    /// Turn command for a signed turn cost, `None` when already facing.
    pub fn turn_towards(turn_cost: i32) -> Option<Command> {
        match turn_cost {
            c if c < 0 => Some(Command::Left),
            c if c > 0 => Some(Command::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PlayerState {
    pub x: i64,
    pub y: i64,
    pub direction: Heading,
    pub was_hit: bool,
    pub score: i64,
}

impl PlayerState {
    pub fn new(x: i64, y: i64, direction: Heading) -> Self {
        Self {
            x,
            y,
            direction,
            was_hit: false,
            score: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelfLink {
    pub href: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: SelfLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arena {
    /// `[width, height]`
    pub dims: [i64; 2],
    /// Ordered by id, which fixes the enumeration order used for tie-breaks.
    pub state: BTreeMap<PlayerId, PlayerState>,
}

/// One turn's view of the arena, as posted by the game server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaSnapshot {
    #[serde(rename = "_links")]
    pub links: Links,
    pub arena: Arena,
}

impl ArenaSnapshot {
    pub fn self_id(&self) -> &str {
        &self.links.self_link.href
    }

    pub fn own_state(&self) -> Option<&PlayerState> {
        self.arena.state.get(self.self_id())
    }

    pub fn width(&self) -> i64 {
        self.arena.dims[0]
    }

    pub fn height(&self) -> i64 {
        self.arena.dims[1]
    }
}

/// Estimated turns to reach a firing position on one opponent, and the first
/// command of that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostOption {
    pub cost: i64,
    pub next_move: Command,
}
