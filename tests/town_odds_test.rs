//! Distribution checks for the randomized draws: terrain and treasure
//! generation, toughness rates, dig payouts, item breakage, and brawl
//! odds. All trials run on seeded ChaCha streams so the expected counts
//! are stable.

use prospector::hunter::{DigOutcome, Hunter};
use prospector::items::Item;
use prospector::kit::Kit;
use prospector::terrain::Terrain;
use prospector::town::{LeaveOutcome, Town, TroubleOutcome};
use prospector::treasure::Treasure;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn hunter_with_items(gold: u32, items: &[Item]) -> Hunter {
    let mut kit = Kit::new(7);
    for &item in items {
        kit.add(item);
    }
    Hunter::new("odds".to_string(), gold, kit)
}

// =============================================================================
// Town generation
// =============================================================================

#[test]
fn test_terrain_draw_is_roughly_uniform() {
    let mut rng = seeded_rng(21);
    let trials = 6_000;
    let mut counts = [0u32; 6];
    for _ in 0..trials {
        let town = Town::generate(0.4, &mut rng);
        let idx = Terrain::all()
            .iter()
            .position(|&t| t == town.terrain)
            .unwrap();
        counts[idx] += 1;
    }
    // Equal sixths: expect ~1000 each, allow generous variance.
    for count in counts {
        assert!((800..=1200).contains(&count), "skewed terrain draw: {:?}", counts);
    }
}

#[test]
fn test_treasure_draw_is_roughly_uniform() {
    let mut rng = seeded_rng(22);
    let trials = 4_000;
    let mut counts = [0u32; 4];
    for _ in 0..trials {
        let town = Town::generate(0.4, &mut rng);
        let idx = Treasure::all()
            .iter()
            .position(|&t| t == town.treasure)
            .unwrap();
        counts[idx] += 1;
    }
    for count in counts {
        assert!((800..=1200).contains(&count), "skewed treasure draw: {:?}", counts);
    }
}

#[test]
fn test_toughness_rate_tracks_the_mode() {
    let mut rng = seeded_rng(23);
    let trials = 4_000;

    let tough_at = |rate: f64, rng: &mut ChaCha8Rng| -> u32 {
        (0..trials)
            .filter(|_| Town::generate(rate, rng).tough)
            .count() as u32
    };

    // Hard mode: 75% tough. Easy mode: 20% tough.
    let hard = tough_at(0.75, &mut rng);
    let easy = tough_at(0.2, &mut rng);
    assert!((2700..=3300).contains(&hard), "hard toughness off: {}", hard);
    assert!((600..=1000).contains(&easy), "easy toughness off: {}", easy);
}

// =============================================================================
// Digging
// =============================================================================

#[test]
fn test_dig_succeeds_about_half_the_time() {
    let mut rng = seeded_rng(24);
    let trials = 2_000;
    let mut nuggets = 0;
    for _ in 0..trials {
        let mut hunter = hunter_with_items(0, &[Item::Shovel]);
        match hunter.dig_for_gold(&mut rng) {
            DigOutcome::Nugget(amount) => {
                assert!((1..=20).contains(&amount));
                nuggets += 1;
            }
            DigOutcome::Dirt => {}
            other => panic!("fresh hunter with shovel, got {:?}", other),
        }
    }
    assert!((850..=1150).contains(&nuggets), "dig rate off: {}", nuggets);
}

// =============================================================================
// Terrain crossing
// =============================================================================

#[test]
fn test_crossing_breaks_the_item_about_half_the_time() {
    let mut rng = seeded_rng(25);
    let trials = 2_000;
    let mut breaks = 0;
    for _ in 0..trials {
        let town = Town {
            terrain: Terrain::Mountains,
            tough: false,
            treasure: Treasure::Dust,
            searched: false,
        };
        let mut hunter = hunter_with_items(0, &[Item::Rope]);
        match town.attempt_leave(&mut hunter, &mut rng) {
            LeaveOutcome::Crossed { broke, .. } => {
                if broke {
                    breaks += 1;
                    assert!(!hunter.kit.has(Item::Rope));
                } else {
                    assert!(hunter.kit.has(Item::Rope));
                }
            }
            LeaveOutcome::Blocked { .. } => panic!("rope in kit, must cross"),
        }
    }
    assert!((850..=1150).contains(&breaks), "break rate off: {}", breaks);
}

// =============================================================================
// Brawling
// =============================================================================

#[test]
fn test_trouble_is_scarcer_and_meaner_in_tough_towns() {
    let mut rng = seeded_rng(26);
    let trials = 6_000;

    let mut fights = [0u32; 2]; // calm, tough
    let mut wins = [0u32; 2];
    for _ in 0..trials {
        for (idx, tough) in [false, true].into_iter().enumerate() {
            let town = Town {
                terrain: Terrain::Plains,
                tough,
                treasure: Treasure::Dust,
                searched: false,
            };
            let mut hunter = hunter_with_items(100, &[]);
            match town.look_for_trouble(&mut hunter, false, &mut rng) {
                TroubleOutcome::NoTrouble => {}
                TroubleOutcome::BrawlWon { .. } => {
                    fights[idx] += 1;
                    wins[idx] += 1;
                }
                TroubleOutcome::BrawlLost { .. } => fights[idx] += 1,
                TroubleOutcome::Intimidated { .. } => panic!("free gold is off"),
            }
        }
    }

    // Calm towns: fights ~67% of visits, won ~67% of the time.
    // Tough towns: fights ~34% of visits, won ~34% of the time.
    assert!(fights[0] > fights[1]);
    assert!((3600..=4400).contains(&fights[0]), "calm fights: {}", fights[0]);
    assert!((1700..=2400).contains(&fights[1]), "tough fights: {}", fights[1]);

    let calm_win_rate = wins[0] as f64 / fights[0] as f64;
    let tough_win_rate = wins[1] as f64 / fights[1] as f64;
    assert!(calm_win_rate > tough_win_rate);
    assert!((0.60..=0.74).contains(&calm_win_rate));
    assert!((0.27..=0.41).contains(&tough_win_rate));
}

#[test]
fn test_brawl_losses_never_drive_gold_negative() {
    let mut rng = seeded_rng(27);
    for _ in 0..2_000 {
        let town = Town {
            terrain: Terrain::Plains,
            tough: true,
            treasure: Treasure::Dust,
            searched: false,
        };
        let mut hunter = hunter_with_items(2, &[]);
        town.look_for_trouble(&mut hunter, false, &mut rng);
        assert!(hunter.gold() <= 12); // 2 + at most 10 winnings
    }
}
