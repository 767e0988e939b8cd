//! The player character: gold, kit, and the per-town dig state.

use crate::constants::{DIG_GOLD_MAX, DIG_GOLD_MIN, DIG_SUCCESS_CHANCE};
use crate::items::Item;
use crate::kit::{AddOutcome, Kit};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What came of swinging the shovel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    NoShovel,
    AlreadyDug,
    Nugget(u32),
    Dirt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: u32,
    pub kit: Kit,
    dug_this_town: bool,
}

impl Hunter {
    pub fn new(name: String, starting_gold: u32, kit: Kit) -> Self {
        Self {
            name,
            gold: starting_gold,
            kit,
            dug_this_town: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn has_dug_this_town(&self) -> bool {
        self.dug_this_town
    }

    /// Adds `delta` to the gold balance, clamping at zero. An excess
    /// negative delta is absorbed, never rejected.
    pub fn change_gold(&mut self, delta: i64) {
        self.gold = (self.gold as i64 + delta).max(0) as u32;
    }

    /// Buys an item at the given cost.
    ///
    /// With `free_gold` active every purchase succeeds and costs nothing;
    /// the item is added only if it is not already held. Otherwise the
    /// purchase fails on an unaffordable cost, an item already held, or a
    /// kit with no free slot.
    pub fn buy(&mut self, item: Item, cost: u32, free_gold: bool) -> bool {
        if free_gold {
            self.kit.add(item);
            return true;
        }
        if self.gold < cost || self.kit.has(item) {
            return false;
        }
        match self.kit.add(item) {
            AddOutcome::Added => {
                self.gold -= cost;
                true
            }
            AddOutcome::AlreadyHeld | AddOutcome::Full => false,
        }
    }

    /// Sells an item back for the given price. Fails if the price is
    /// zero or the item is not in the kit.
    pub fn sell(&mut self, item: Item, price: u32) -> bool {
        if price == 0 || !self.kit.has(item) {
            return false;
        }
        self.change_gold(price as i64);
        self.kit.remove(item);
        true
    }

    /// Digs for gold. Needs a shovel, and pays out at most once per town;
    /// a dirt dig does not consume the attempt, so the hunter may keep
    /// trying until a nugget turns up or the town is left behind.
    pub fn dig_for_gold(&mut self, rng: &mut impl Rng) -> DigOutcome {
        if !self.kit.has(Item::Shovel) {
            return DigOutcome::NoShovel;
        }
        if self.dug_this_town {
            return DigOutcome::AlreadyDug;
        }
        if rng.gen::<f64>() < DIG_SUCCESS_CHANCE {
            let amount = rng.gen_range(DIG_GOLD_MIN..=DIG_GOLD_MAX);
            self.change_gold(amount as i64);
            self.dug_this_town = true;
            DigOutcome::Nugget(amount)
        } else {
            DigOutcome::Dirt
        }
    }

    /// Clears the dig flag when the hunter moves on to a new town.
    pub fn reset_dug_flag(&mut self) {
        self.dug_this_town = false;
    }
}
