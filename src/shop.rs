//! Shop pricing policy. The shop owns no inventory of its own; it trades
//! against the hunter's kit and gold.

use crate::hunter::Hunter;
use crate::items::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    Buy,
    Sell,
}

/// Structured result of a shop visit. The UI renders the prose; the core
/// only reports what happened and for how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOutcome {
    Bought { item: Item, cost: u32 },
    NotStocked { item: Item },
    CannotAfford { item: Item, cost: u32 },
    AlreadyOwned { item: Item },
    Sold { item: Item, price: u32 },
    NotCarried { item: Item },
    WorthNothing { item: Item },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
}

impl Shop {
    pub fn new(markdown: f64) -> Self {
        Self { markdown }
    }

    /// Catalog base cost, or `None` for an item the shop does not stock.
    pub fn buy_price(&self, item: Item) -> Option<u32> {
        Some(item.base_cost())
    }

    /// Buyback price: the base cost scaled by the mode's markdown,
    /// rounded down. A harsh markdown can price small items at zero,
    /// which makes them unsellable.
    pub fn sell_price(&self, item: Item) -> u32 {
        (item.base_cost() as f64 * self.markdown) as u32
    }

    /// Everything on the shelf with its asking price, for display.
    pub fn stock(&self) -> Vec<(Item, u32)> {
        Item::all()
            .into_iter()
            .filter_map(|item| self.buy_price(item).map(|cost| (item, cost)))
            .collect()
    }

    /// Runs one purchase or sale against the hunter.
    pub fn transact(
        &self,
        hunter: &mut Hunter,
        action: ShopAction,
        item: Item,
        free_gold: bool,
    ) -> ShopOutcome {
        match action {
            ShopAction::Buy => {
                let Some(cost) = self.buy_price(item) else {
                    return ShopOutcome::NotStocked { item };
                };
                let paid = if free_gold { 0 } else { cost };
                if hunter.buy(item, cost, free_gold) {
                    ShopOutcome::Bought { item, cost: paid }
                } else if hunter.kit.has(item) {
                    ShopOutcome::AlreadyOwned { item }
                } else {
                    ShopOutcome::CannotAfford { item, cost }
                }
            }
            ShopAction::Sell => {
                if !hunter.kit.has(item) {
                    return ShopOutcome::NotCarried { item };
                }
                let price = self.sell_price(item);
                if hunter.sell(item, price) {
                    ShopOutcome::Sold { item, price }
                } else {
                    ShopOutcome::WorthNothing { item }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::Kit;

    fn hunter_with_gold(gold: u32) -> Hunter {
        Hunter::new("tester".to_string(), gold, Kit::new(7))
    }

    #[test]
    fn test_sell_price_floors() {
        let shop = Shop::new(0.5);
        assert_eq!(shop.sell_price(Item::Water), 1); // 2 * 0.5
        assert_eq!(shop.sell_price(Item::Boot), 5); // 10 * 0.5

        let hard = Shop::new(0.25);
        assert_eq!(hard.sell_price(Item::Water), 0); // floor(0.5)
        assert_eq!(hard.sell_price(Item::Boat), 5); // 20 * 0.25
    }

    #[test]
    fn test_full_refund_markdown() {
        let shop = Shop::new(1.0);
        for item in Item::all() {
            assert_eq!(shop.sell_price(item), item.base_cost());
        }
    }

    #[test]
    fn test_buy_transaction() {
        let shop = Shop::new(0.5);
        let mut hunter = hunter_with_gold(10);
        let outcome = shop.transact(&mut hunter, ShopAction::Buy, Item::Shovel, false);
        assert_eq!(
            outcome,
            ShopOutcome::Bought {
                item: Item::Shovel,
                cost: 8
            }
        );
        assert_eq!(hunter.gold(), 2);
    }

    #[test]
    fn test_buy_reports_unaffordable_and_duplicate() {
        let shop = Shop::new(0.5);
        let mut hunter = hunter_with_gold(10);
        assert_eq!(
            shop.transact(&mut hunter, ShopAction::Buy, Item::Boat, false),
            ShopOutcome::CannotAfford {
                item: Item::Boat,
                cost: 20
            }
        );

        hunter.kit.add(Item::Rope);
        assert_eq!(
            shop.transact(&mut hunter, ShopAction::Buy, Item::Rope, false),
            ShopOutcome::AlreadyOwned { item: Item::Rope }
        );
        assert_eq!(hunter.gold(), 10);
    }

    #[test]
    fn test_free_gold_buy_is_free() {
        let shop = Shop::new(0.25);
        let mut hunter = hunter_with_gold(0);
        let outcome = shop.transact(&mut hunter, ShopAction::Buy, Item::Boat, true);
        assert_eq!(
            outcome,
            ShopOutcome::Bought {
                item: Item::Boat,
                cost: 0
            }
        );
        assert!(hunter.kit.has(Item::Boat));
        assert_eq!(hunter.gold(), 0);
    }

    #[test]
    fn test_sell_transaction() {
        let shop = Shop::new(0.5);
        let mut hunter = hunter_with_gold(0);
        hunter.kit.add(Item::Horse);
        assert_eq!(
            shop.transact(&mut hunter, ShopAction::Sell, Item::Horse, false),
            ShopOutcome::Sold {
                item: Item::Horse,
                price: 6
            }
        );
        assert_eq!(hunter.gold(), 6);
    }

    #[test]
    fn test_sell_missing_and_worthless_items() {
        let shop = Shop::new(0.25);
        let mut hunter = hunter_with_gold(0);
        assert_eq!(
            shop.transact(&mut hunter, ShopAction::Sell, Item::Water, false),
            ShopOutcome::NotCarried { item: Item::Water }
        );

        hunter.kit.add(Item::Water);
        assert_eq!(
            shop.transact(&mut hunter, ShopAction::Sell, Item::Water, false),
            ShopOutcome::WorthNothing { item: Item::Water }
        );
        assert!(hunter.kit.has(Item::Water));
    }

    #[test]
    fn test_stock_lists_whole_catalog() {
        let shop = Shop::new(0.5);
        let stock = shop.stock();
        assert_eq!(stock.len(), Item::all().len());
        assert!(stock.contains(&(Item::Boat, 20)));
    }
}
