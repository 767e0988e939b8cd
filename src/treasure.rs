//! Treasure values and the session-wide collection that decides the win.

use crate::constants::COLLECTION_SLOTS;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a town's treasure hunt can turn up. Dust is the consolation
/// prize; it can never enter the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Treasure {
    Crown,
    Gem,
    Trophy,
    Dust,
}

impl Treasure {
    pub fn all() -> [Treasure; 4] {
        [Treasure::Crown, Treasure::Gem, Treasure::Trophy, Treasure::Dust]
    }

    /// Returns the display name for this treasure.
    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Gem => "gem",
            Treasure::Trophy => "trophy",
            Treasure::Dust => "dust",
        }
    }

    pub fn is_dust(&self) -> bool {
        matches!(self, Treasure::Dust)
    }

    /// Draws a town's treasure, each value an equal quarter.
    pub fn random(rng: &mut impl Rng) -> Treasure {
        Treasure::all()[rng.gen_range(0..4)]
    }
}

/// The three-slot treasure collection. Filling every slot wins the game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreasureCollection {
    slots: [Option<Treasure>; COLLECTION_SLOTS],
}

impl TreasureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, treasure: Treasure) -> bool {
        self.slots.contains(&Some(treasure))
    }

    /// Places a treasure in the first empty slot. Rejects duplicates and
    /// dust, and rejects everything once the collection is full.
    pub fn add(&mut self, treasure: Treasure) -> bool {
        if treasure.is_dust() || self.has(treasure) {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(treasure);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Collected treasures in slot order, for display.
    pub fn treasures(&self) -> Vec<Treasure> {
        self.slots.iter().filter_map(|slot| *slot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_starts_empty() {
        let collection = TreasureCollection::new();
        assert!(collection.is_empty());
        assert!(!collection.is_full());
        assert!(collection.treasures().is_empty());
    }

    #[test]
    fn test_add_rejects_dust() {
        let mut collection = TreasureCollection::new();
        assert!(!collection.add(Treasure::Dust));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut collection = TreasureCollection::new();
        assert!(collection.add(Treasure::Gem));
        assert!(!collection.add(Treasure::Gem));
        assert_eq!(collection.treasures(), vec![Treasure::Gem]);
    }

    #[test]
    fn test_three_distinct_treasures_fill_the_collection() {
        let mut collection = TreasureCollection::new();
        assert!(collection.add(Treasure::Crown));
        assert!(collection.add(Treasure::Gem));
        assert!(!collection.is_full());
        assert!(collection.add(Treasure::Trophy));
        assert!(collection.is_full());
    }
}
