//! Session orchestration: difficulty modes, turn dispatch, and the
//! win/loss bookkeeping that ends the hunt.

use crate::constants::{KIT_CAPACITY, SAMURAI_KIT_CAPACITY};
use crate::hunter::Hunter;
use crate::kit::Kit;
use crate::outcome::{Command, Outcome, Snapshot};
use crate::shop::{Shop, ShopAction};
use crate::town::{LeaveOutcome, Town};
use crate::treasure::TreasureCollection;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Easy,
    Normal,
    Hard,
    /// Developer mode: normal rates, a fat purse, and a pre-stocked kit.
    Test,
    /// Samurai mode: one extra kit slot.
    Samurai,
}

impl GameMode {
    pub fn all() -> [GameMode; 5] {
        [
            GameMode::Easy,
            GameMode::Normal,
            GameMode::Hard,
            GameMode::Test,
            GameMode::Samurai,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Easy => "easy",
            GameMode::Normal => "normal",
            GameMode::Hard => "hard",
            GameMode::Test => "test",
            GameMode::Samurai => "samurai",
        }
    }

    pub fn parse(name: &str) -> Option<GameMode> {
        GameMode::all().into_iter().find(|mode| mode.name() == name)
    }

    /// The difficulty parameters this mode feeds into every new town
    /// and shop. Easy refunds sales in full and pads the purse; hard
    /// marks sales down hard and toughens the towns.
    pub fn config(&self) -> ModeConfig {
        match self {
            GameMode::Easy => ModeConfig {
                gold_bonus: 20,
                kit_capacity: KIT_CAPACITY,
                markdown: 1.0,
                toughness: 0.2,
                stocked_kit: false,
            },
            GameMode::Normal => ModeConfig::default(),
            GameMode::Hard => ModeConfig {
                markdown: 0.25,
                toughness: 0.75,
                ..ModeConfig::default()
            },
            GameMode::Test => ModeConfig {
                gold_bonus: 80,
                stocked_kit: true,
                ..ModeConfig::default()
            },
            GameMode::Samurai => ModeConfig {
                kit_capacity: SAMURAI_KIT_CAPACITY,
                ..ModeConfig::default()
            },
        }
    }
}

/// Mode-derived parameters, captured once at session creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeConfig {
    pub gold_bonus: u32,
    pub kit_capacity: usize,
    pub markdown: f64,
    pub toughness: f64,
    pub stocked_kit: bool,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            gold_bonus: 0,
            kit_capacity: KIT_CAPACITY,
            markdown: 0.5,
            toughness: 0.4,
            stocked_kit: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Won,
    Lost,
    Quit,
}

/// One full game: the hunter, the active town, and everything the modes
/// decided. Owns all state; there are no globals.
#[derive(Debug)]
pub struct Session {
    config: ModeConfig,
    hunter: Hunter,
    town: Town,
    shop: Shop,
    collection: TreasureCollection,
    free_gold: bool,
    phase: SessionPhase,
    latest: Outcome,
}

impl Session {
    pub fn new(name: String, starting_gold: u32, mode: GameMode, rng: &mut impl Rng) -> Self {
        let config = mode.config();
        let kit = if config.stocked_kit {
            Kit::stocked(config.kit_capacity)
        } else {
            Kit::new(config.kit_capacity)
        };
        let hunter = Hunter::new(name, starting_gold + config.gold_bonus, kit);
        let town = Town::generate(config.toughness, rng);
        let latest = Outcome::Arrived { tough: town.tough };
        Self {
            config,
            hunter,
            town,
            shop: Shop::new(config.markdown),
            collection: TreasureCollection::new(),
            free_gold: false,
            phase: SessionPhase::Playing,
            latest,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn hunter_mut(&mut self) -> &mut Hunter {
        &mut self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn town_mut(&mut self) -> &mut Town {
        &mut self.town
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn collection(&self) -> &TreasureCollection {
        &self.collection
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Once any treasure has been found, purchases cost nothing and
    /// brawlers hand over their gold unfought, for the rest of the
    /// session.
    pub fn free_gold(&self) -> bool {
        self.free_gold
    }

    /// Parses and runs a raw menu code. Unrecognized input is a normal
    /// outcome, not an error.
    pub fn process_code(&mut self, input: &str, rng: &mut impl Rng) -> Outcome {
        if self.phase != SessionPhase::Playing {
            return Outcome::SessionOver;
        }
        match Command::parse(input) {
            Some(command) => self.process_command(command, rng),
            None => self.record(Outcome::Invalid),
        }
    }

    /// Runs one turn. A terminal session ignores everything; otherwise
    /// the turn starts with the loss check, then the command routes to
    /// the hunter, the town, or the treasure bookkeeping.
    pub fn process_command(&mut self, command: Command, rng: &mut impl Rng) -> Outcome {
        if self.phase != SessionPhase::Playing {
            return Outcome::SessionOver;
        }
        if self.hunter.gold() == 0 {
            self.phase = SessionPhase::Lost;
            return self.record(Outcome::GoldGone);
        }

        let outcome = match command {
            Command::Buy(item) => Outcome::Shop(self.shop.transact(
                &mut self.hunter,
                ShopAction::Buy,
                item,
                self.free_gold,
            )),
            Command::Sell(item) => Outcome::Shop(self.shop.transact(
                &mut self.hunter,
                ShopAction::Sell,
                item,
                self.free_gold,
            )),
            Command::Explore => Outcome::Explored {
                terrain: self.town.terrain,
            },
            Command::Move => match self.town.attempt_leave(&mut self.hunter, rng) {
                LeaveOutcome::Crossed { used, broke } => {
                    let crossed = self.town.terrain;
                    self.town = Town::generate(self.config.toughness, rng);
                    Outcome::Moved {
                        crossed,
                        used,
                        broke,
                        tough: self.town.tough,
                    }
                }
                LeaveOutcome::Blocked { missing } => Outcome::Blocked { missing },
            },
            Command::Trouble => Outcome::Trouble(self.town.look_for_trouble(
                &mut self.hunter,
                self.free_gold,
                rng,
            )),
            Command::Dig => Outcome::Dug(self.hunter.dig_for_gold(rng)),
            Command::Hunt => {
                let result = self.town.search_for_treasure(&mut self.collection);
                if !self.collection.is_empty() {
                    self.free_gold = true;
                }
                if self.collection.is_full() {
                    self.phase = SessionPhase::Won;
                }
                Outcome::Hunted(result)
            }
            Command::Quit => {
                self.phase = SessionPhase::Quit;
                Outcome::Farewell
            }
        };
        self.record(outcome)
    }

    /// A display-ready view of the whole session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hunter_name: self.hunter.name().to_string(),
            gold: self.hunter.gold(),
            kit: self.hunter.kit.items(),
            terrain: self.town.terrain,
            tough_town: self.town.tough,
            treasures: self.collection.treasures(),
            latest: self.latest,
            is_win: self.phase == SessionPhase::Won,
            is_lose: self.phase == SessionPhase::Lost,
        }
    }

    fn record(&mut self, outcome: Outcome) -> Outcome {
        self.latest = outcome;
        outcome
    }
}
