//! Player commands and the structured outcomes a turn produces.
//!
//! Outcomes carry data, never prose. The presentation layer maps each
//! variant to a message; the engine stays free of text rendering.

use crate::hunter::DigOutcome;
use crate::items::Item;
use crate::shop::ShopOutcome;
use crate::terrain::Terrain;
use crate::town::{SearchOutcome, TroubleOutcome};
use crate::treasure::Treasure;

/// One turn's worth of player intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy(Item),
    Sell(Item),
    Explore,
    Move,
    Trouble,
    Dig,
    Hunt,
    Quit,
}

impl Command {
    /// Parses a menu code: a single letter or full word, with buy and
    /// sell taking the item name as a second token ("b water").
    /// Returns `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Command> {
        let mut tokens = input.split_whitespace();
        let code = tokens.next()?;
        let command = match code {
            "b" | "buy" => Command::Buy(Item::parse(tokens.next()?)?),
            "s" | "sell" => Command::Sell(Item::parse(tokens.next()?)?),
            "e" | "explore" => Command::Explore,
            "m" | "move" => Command::Move,
            "l" | "trouble" => Command::Trouble,
            "d" | "dig" => Command::Dig,
            "h" | "hunt" => Command::Hunt,
            "x" | "exit" | "quit" => Command::Quit,
            _ => return None,
        };
        if tokens.next().is_some() {
            return None;
        }
        Some(command)
    }
}

/// What a processed command did. Every variant is a normal, recoverable
/// result; the engine has no fatal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Unrecognized input; nothing changed.
    Invalid,
    /// The session already ended; the command was ignored.
    SessionOver,
    /// Start-of-turn check found the gold gone.
    GoldGone,
    /// First arrival in a town (session start).
    Arrived { tough: bool },
    Shop(ShopOutcome),
    Explored { terrain: Terrain },
    /// Crossed into a fresh town; `tough` describes the new town.
    Moved {
        crossed: Terrain,
        used: Item,
        broke: bool,
        tough: bool,
    },
    Blocked { missing: Item },
    Trouble(TroubleOutcome),
    Dug(DigOutcome),
    Hunted(SearchOutcome),
    Farewell,
}

/// A display-ready view of the session, consumed by the UI each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub hunter_name: String,
    pub gold: u32,
    pub kit: Vec<Item>,
    pub terrain: Terrain,
    pub tough_town: bool,
    pub treasures: Vec<Treasure>,
    pub latest: Outcome,
    pub is_win: bool,
    pub is_lose: bool,
}
