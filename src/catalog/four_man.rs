//! Hand-authored splits for 4-player runs
//!
//! A single party, so buyer labels carry no party number.

use rustc_hash::FxHashMap;

use super::{Recipe, RecipeKey};
use crate::{
    gold::{Gold, equal_share},
    payments::PaymentRecord,
    roster::BuyerLabel,
    run::RunSize,
};

pub(super) fn register(recipes: &mut FxHashMap<RecipeKey, Recipe>) {
    recipes.insert((RunSize::Four, 1, 3), recipe_1c3);
    recipes.insert((RunSize::Four, 2, 2), recipe_2c2);
    recipes.insert((RunSize::Four, 3, 1), recipe_3c1);
}

/// 1 driver, 3 buyers: the driver collects the full price from each buyer.
fn recipe_1c3(price: Gold) -> Vec<PaymentRecord> {
    (2..=4)
        .map(|position| PaymentRecord::single(1, BuyerLabel::solo(position), price))
        .collect()
}

/// 2 drivers, 2 buyers: one buyer each.
fn recipe_2c2(price: Gold) -> Vec<PaymentRecord> {
    vec![
        PaymentRecord::single(1, BuyerLabel::solo(3), price),
        PaymentRecord::single(2, BuyerLabel::solo(4), price),
    ]
}

/// 3 drivers, 1 buyer: equal thirds, remainder to the last driver.
fn recipe_3c1(price: Gold) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, 3);

    (1..=3)
        .map(|driver| {
            let gold = if driver == 3 { share + remainder } else { share };
            PaymentRecord::single(driver, BuyerLabel::solo(4), gold)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::Payer;

    #[test]
    fn solo_driver_collects_full_price_per_buyer() {
        let records = recipe_1c3(5000);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.driver == 1 && r.gold == 5000));

        let labels: Vec<String> = records.iter().map(|r| r.payer.to_string()).collect();
        assert_eq!(labels, vec!["n2", "n3", "n4"]);
    }

    #[test]
    fn pair_of_drivers_take_one_buyer_each() {
        let records = recipe_2c2(4000);

        assert_eq!(
            records,
            vec![
                PaymentRecord::new(1, Payer::Buyer(BuyerLabel::solo(3)), 4000),
                PaymentRecord::new(2, Payer::Buyer(BuyerLabel::solo(4)), 4000),
            ]
        );
    }

    #[test]
    fn three_way_split_assigns_remainder_to_last_driver() {
        let records = recipe_3c1(1000);

        let golds: Vec<Gold> = records.iter().map(|r| r.gold).collect();
        assert_eq!(golds, vec![333, 333, 334]);
        assert_eq!(golds.iter().sum::<Gold>(), 1000);
    }
}
