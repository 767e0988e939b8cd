//! The terrain surrounding a town and the gear needed to cross it.

use crate::items::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    pub fn all() -> [Terrain; 6] {
        [
            Terrain::Mountains,
            Terrain::Ocean,
            Terrain::Plains,
            Terrain::Desert,
            Terrain::Jungle,
            Terrain::Marsh,
        ]
    }

    /// Returns the display name for this terrain.
    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Mountains => "Mountains",
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Jungle => "Jungle",
            Terrain::Marsh => "Marsh",
        }
    }

    /// The kit item a hunter must carry to cross this terrain.
    pub fn required_item(&self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boot,
        }
    }

    /// Draws a town's surrounding terrain, each variant an equal sixth.
    pub fn random(rng: &mut impl Rng) -> Terrain {
        Terrain::all()[rng.gen_range(0..6)]
    }
}
