//! The fixed item catalog: everything a hunter can carry in the kit.

use serde::{Deserialize, Serialize};

/// A purchasable piece of gear. The catalog is closed; every item has a
/// fixed base cost, and each terrain names one of these as its crossing
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Shovel,
    Boot,
    Horse,
    Boat,
}

impl Item {
    pub fn all() -> [Item; 7] {
        [
            Item::Water,
            Item::Rope,
            Item::Machete,
            Item::Shovel,
            Item::Boot,
            Item::Horse,
            Item::Boat,
        ]
    }

    /// Returns the display name for this item.
    pub fn name(&self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Shovel => "shovel",
            Item::Boot => "boot",
            Item::Horse => "horse",
            Item::Boat => "boat",
        }
    }

    /// Base shop cost before any markdown is applied.
    pub fn base_cost(&self) -> u32 {
        match self {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Shovel => 8,
            Item::Boot => 10,
            Item::Horse => 12,
            Item::Boat => 20,
        }
    }

    /// Parses an item from its lowercase display name.
    pub fn parse(name: &str) -> Option<Item> {
        Item::all().into_iter().find(|item| item.name() == name)
    }
}
