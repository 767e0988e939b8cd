//! Per-visit town state and the events that resolve inside it.

use crate::constants::{
    BRAWL_GOLD_MAX, BRAWL_GOLD_MIN, ITEM_BREAK_CHANCE, NO_TROUBLE_CALM, NO_TROUBLE_TOUGH,
};
use crate::hunter::Hunter;
use crate::items::Item;
use crate::terrain::Terrain;
use crate::treasure::{Treasure, TreasureCollection};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of trying to leave town across the surrounding terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The hunter crossed, and the crossing item broke with 50% odds.
    Crossed { used: Item, broke: bool },
    Blocked { missing: Item },
}

/// Result of looking for trouble in the streets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TroubleOutcome {
    /// Free-gold rule: the brawler hands over his gold without a fight.
    Intimidated { winnings: u32 },
    NoTrouble,
    BrawlWon { winnings: u32 },
    BrawlLost { losses: u32 },
}

/// Result of hunting for the town's treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    AlreadySearched,
    Found(Treasure),
    AlreadyCollected(Treasure),
    FoundNothing,
}

/// A town lasts exactly one visit; moving on replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    pub terrain: Terrain,
    pub tough: bool,
    pub treasure: Treasure,
    pub searched: bool,
}

impl Town {
    /// Rolls up a fresh town: terrain and treasure drawn uniformly,
    /// toughness a Bernoulli trial at the session's rate.
    pub fn generate(toughness: f64, rng: &mut impl Rng) -> Self {
        Self {
            terrain: Terrain::random(rng),
            tough: rng.gen::<f64>() < toughness,
            treasure: Treasure::random(rng),
            searched: false,
        }
    }

    /// Tries to cross the surrounding terrain. Success needs the
    /// terrain's required item; the item then breaks half the time, and
    /// the hunter's dig attempt resets for the next town. Failure
    /// changes nothing.
    pub fn attempt_leave(&self, hunter: &mut Hunter, rng: &mut impl Rng) -> LeaveOutcome {
        let required = self.terrain.required_item();
        if !hunter.kit.has(required) {
            return LeaveOutcome::Blocked { missing: required };
        }
        let broke = rng.gen::<f64>() < ITEM_BREAK_CHANCE;
        if broke {
            hunter.kit.remove(required);
        }
        hunter.reset_dug_flag();
        LeaveOutcome::Crossed {
            used: required,
            broke,
        }
    }

    /// Picks a fight for gold. Tough towns are quieter to the stranger
    /// and harder to beat: both the find and the win are independent
    /// trials against the same no-trouble chance, and the stake is
    /// rolled only after the outcome is decided.
    ///
    /// Under the free-gold rule the fight never happens; the gold is
    /// simply handed over.
    pub fn look_for_trouble(
        &self,
        hunter: &mut Hunter,
        free_gold: bool,
        rng: &mut impl Rng,
    ) -> TroubleOutcome {
        if free_gold {
            let winnings = rng.gen_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
            hunter.change_gold(winnings as i64);
            return TroubleOutcome::Intimidated { winnings };
        }

        let no_trouble = if self.tough {
            NO_TROUBLE_TOUGH
        } else {
            NO_TROUBLE_CALM
        };
        if rng.gen::<f64>() <= no_trouble {
            return TroubleOutcome::NoTrouble;
        }
        if rng.gen::<f64>() > no_trouble {
            let winnings = rng.gen_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
            hunter.change_gold(winnings as i64);
            TroubleOutcome::BrawlWon { winnings }
        } else {
            let losses = rng.gen_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
            hunter.change_gold(-(losses as i64));
            TroubleOutcome::BrawlLost { losses }
        }
    }

    /// Hunts for the town's treasure. The first attempt marks the town
    /// searched whatever it turns up; every later attempt is a pure
    /// no-op. Dust never enters the collection.
    pub fn search_for_treasure(&mut self, collection: &mut TreasureCollection) -> SearchOutcome {
        if self.searched {
            return SearchOutcome::AlreadySearched;
        }
        self.searched = true;
        if self.treasure.is_dust() {
            SearchOutcome::FoundNothing
        } else if collection.has(self.treasure) {
            SearchOutcome::AlreadyCollected(self.treasure)
        } else {
            collection.add(self.treasure);
            SearchOutcome::Found(self.treasure)
        }
    }
}
