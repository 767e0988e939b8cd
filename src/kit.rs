//! The hunter's kit: a fixed number of slots, at most one of each item.

use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Result of trying to place an item in the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyHeld,
    /// Every slot is occupied. The catalog is smaller than the kit, so
    /// normal play never hits this, but the outcome is still defined.
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kit {
    slots: Vec<Option<Item>>,
}

impl Kit {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// A kit pre-loaded with every crossing item, used by test mode.
    pub fn stocked(capacity: usize) -> Self {
        let mut kit = Kit::new(capacity);
        for item in [
            Item::Water,
            Item::Rope,
            Item::Machete,
            Item::Horse,
            Item::Boat,
            Item::Boot,
        ] {
            kit.add(item);
        }
        kit
    }

    /// Places the item in the first empty slot. No mutation on failure.
    pub fn add(&mut self, item: Item) -> AddOutcome {
        if self.has(item) {
            return AddOutcome::AlreadyHeld;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(item);
                AddOutcome::Added
            }
            None => AddOutcome::Full,
        }
    }

    /// Clears the item's slot. No-op if the item is not held.
    pub fn remove(&mut self, item: Item) {
        for slot in &mut self.slots {
            if *slot == Some(item) {
                *slot = None;
                return;
            }
        }
    }

    pub fn has(&self, item: Item) -> bool {
        self.slots.contains(&Some(item))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Held items in slot order, for display.
    pub fn items(&self) -> Vec<Item> {
        self.slots.iter().filter_map(|slot| *slot).collect()
    }
}
