//! Renders structured engine outcomes into player-facing prose. All of
//! the game's flavor text lives here, none of it in the library.

use prospector::hunter::DigOutcome;
use prospector::outcome::Outcome;
use prospector::shop::ShopOutcome;
use prospector::town::{SearchOutcome, TroubleOutcome};

/// The message a just-processed outcome should print.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Invalid => "Yikes! That's an invalid option! Try again.".to_string(),
        Outcome::SessionOver => "The hunt is already over.".to_string(),
        Outcome::GoldGone => "Your gold is gone. Game over!".to_string(),
        Outcome::Arrived { tough } => arrival(*tough),
        Outcome::Shop(shop) => describe_shop(shop),
        Outcome::Explored { terrain } => format!(
            "This nice little town is surrounded by {}. You'll need a {} to cross it.",
            terrain.name(),
            terrain.required_item().name()
        ),
        Outcome::Moved {
            crossed,
            used,
            broke,
            tough,
        } => {
            let mut message = format!(
                "You used your {} to cross the {}.",
                used.name(),
                crossed.name()
            );
            if *broke {
                message.push_str(&format!(" Unfortunately, you lost your {}.", used.name()));
            }
            message.push(' ');
            message.push_str(&arrival(*tough));
            message
        }
        Outcome::Blocked { missing } => format!(
            "You can't leave town. You don't have a {}.",
            missing.name()
        ),
        Outcome::Trouble(trouble) => describe_trouble(trouble),
        Outcome::Dug(dig) => describe_dig(dig),
        Outcome::Hunted(search) => describe_search(search),
        Outcome::Farewell => "Fare thee well!".to_string(),
    }
}

fn arrival(tough: bool) -> String {
    if tough {
        "Welcome to town! It's pretty rough around here, so watch yourself.".to_string()
    } else {
        "Welcome to town! We're just a sleepy little town with mild mannered folk.".to_string()
    }
}

fn describe_shop(outcome: &ShopOutcome) -> String {
    match outcome {
        ShopOutcome::Bought { item, cost: 0 } => format!(
            "The shopkeeper eyes your treasure and hands over the {} for nothing.",
            item.name()
        ),
        ShopOutcome::Bought { item, cost } => {
            format!("You bought a {} for {} gold.", item.name(), cost)
        }
        ShopOutcome::NotStocked { item } => {
            format!("The shop doesn't carry a {}.", item.name())
        }
        ShopOutcome::CannotAfford { item, cost } => format!(
            "You can't afford the {}. It costs {} gold.",
            item.name(),
            cost
        ),
        ShopOutcome::AlreadyOwned { item } => format!("You already have a {}.", item.name()),
        ShopOutcome::Sold { item, price } => {
            format!("You sold your {} for {} gold.", item.name(), price)
        }
        ShopOutcome::NotCarried { item } => {
            format!("You don't have a {} to sell.", item.name())
        }
        ShopOutcome::WorthNothing { item } => format!(
            "The shopkeeper won't pay anything for a {}.",
            item.name()
        ),
    }
}

fn describe_trouble(outcome: &TroubleOutcome) -> String {
    match outcome {
        TroubleOutcome::Intimidated { winnings } => format!(
            "Word of your treasure precedes you. The brawler backs down and hands over {} gold.",
            winnings
        ),
        TroubleOutcome::NoTrouble => "You couldn't find any trouble.".to_string(),
        TroubleOutcome::BrawlWon { winnings } => format!(
            "You want trouble, stranger? You got it! Oof! Umph! Ow! \
             You won the brawl and receive {} gold.",
            winnings
        ),
        TroubleOutcome::BrawlLost { losses } => format!(
            "You want trouble, stranger? You got it! Oof! Umph! Ow! \
             You lost the brawl and pay {} gold.",
            losses
        ),
    }
}

fn describe_dig(outcome: &DigOutcome) -> String {
    match outcome {
        DigOutcome::NoShovel => "You can't dig for gold without a shovel.".to_string(),
        DigOutcome::AlreadyDug => "You already dug for gold in this town.".to_string(),
        DigOutcome::Nugget(amount) => format!("You dug up {} gold!", amount),
        DigOutcome::Dirt => "You dug but only found dirt.".to_string(),
    }
}

fn describe_search(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::AlreadySearched => "This town has already been searched.".to_string(),
        SearchOutcome::Found(treasure) => format!("You found a {}!", treasure.name()),
        SearchOutcome::AlreadyCollected(treasure) => {
            format!("You already have a {}!", treasure.name())
        }
        SearchOutcome::FoundNothing => "You found dust. Worthless.".to_string(),
    }
}
