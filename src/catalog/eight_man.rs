//! Hand-authored splits for 8-player runs
//!
//! Two parties. Drivers fill party 1 first, so party 2 is where most buyers
//! sit; the recipes prefer same-party payments and compress identical
//! payments into grouped records where the convention does.

use decimal_percentage::Percentage;
use rustc_hash::FxHashMap;

use super::{Recipe, RecipeKey};
use crate::{
    gold::{Gold, equal_share, percent_share},
    payments::{PaymentRecord, Payer},
    roster::BuyerLabel,
    run::RunSize,
};

pub(super) fn register(recipes: &mut FxHashMap<RecipeKey, Recipe>) {
    recipes.insert((RunSize::Eight, 1, 7), recipe_1c7);
    recipes.insert((RunSize::Eight, 2, 6), recipe_2c6);
    recipes.insert((RunSize::Eight, 3, 5), recipe_3c5);
    recipes.insert((RunSize::Eight, 4, 4), recipe_4c4);
    recipes.insert((RunSize::Eight, 5, 3), recipe_5c3);
    recipes.insert((RunSize::Eight, 6, 2), recipe_6c2);
    recipes.insert((RunSize::Eight, 7, 1), recipe_7c1);
}

fn buyer(driver: usize, position: usize, party: usize, gold: Gold) -> PaymentRecord {
    PaymentRecord::single(driver, BuyerLabel::in_party(position, party), gold)
}

/// 1 driver, 7 buyers: the driver collects the full price from everyone, but
/// the plan is compressed into one grouped record per party (3 buyers of the
/// partially-filled first party, all 4 of the second).
fn recipe_1c7(price: Gold) -> Vec<PaymentRecord> {
    vec![
        PaymentRecord::new(
            1,
            Payer::Span {
                party: 1,
                first: 2,
                last: 4,
            },
            price,
        ),
        PaymentRecord::new(
            1,
            Payer::Span {
                party: 2,
                first: 1,
                last: 4,
            },
            price,
        ),
    ]
}

/// 2 drivers, 6 buyers: three full-price buyers each, split so driver 1 keeps
/// its own party's buyers plus the first buyer of party 2.
fn recipe_2c6(price: Gold) -> Vec<PaymentRecord> {
    vec![
        buyer(1, 3, 1, price),
        buyer(1, 4, 1, price),
        buyer(1, 1, 2, price),
        buyer(2, 2, 2, price),
        buyer(2, 3, 2, price),
        buyer(2, 4, 2, price),
    ]
}

/// 3 drivers, 5 buyers: one full-price party-2 buyer each, then the two n4
/// buyers top the drivers up to the equal share, with driver 3 absorbing the
/// leftovers of both.
fn recipe_3c5(price: Gold) -> Vec<PaymentRecord> {
    let goal = price.saturating_mul(5) / 3;
    let top_up = goal - price;

    vec![
        buyer(1, 1, 2, price),
        buyer(2, 2, 2, price),
        buyer(3, 3, 2, price),
        buyer(1, 4, 1, top_up),
        buyer(2, 4, 2, top_up),
        buyer(3, 4, 1, price - top_up),
        buyer(3, 4, 2, price - top_up),
    ]
}

/// 4 drivers, 4 buyers: each driver takes the party-2 buyer in its own
/// position.
fn recipe_4c4(price: Gold) -> Vec<PaymentRecord> {
    (1..=4).map(|n| buyer(n, n, 2, price)).collect()
}

/// 5 drivers, 3 buyers: the prescribed 40%/20% pairing table. Every driver
/// ends with 60% of the price from exactly two buyers. The two floors are
/// taken independently, and the table charges n3 80% and n4 120% of the
/// price; both quirks are part of the convention and are reproduced as-is.
fn recipe_5c3(price: Gold) -> Vec<PaymentRecord> {
    let full = percent_share(Percentage::from(0.4), price);
    let half = percent_share(Percentage::from(0.2), price);

    vec![
        buyer(1, 2, 2, full),
        buyer(1, 3, 2, half),
        buyer(2, 2, 2, full),
        buyer(2, 4, 2, half),
        buyer(3, 3, 2, full),
        buyer(3, 4, 2, half),
        buyer(4, 2, 2, half),
        buyer(4, 4, 2, full),
        buyer(5, 3, 2, half),
        buyer(5, 4, 2, full),
    ]
}

/// 6 drivers, 2 buyers: drivers 1-3 split n3's price in thirds, drivers 4-6
/// split n4's; the third driver of each trio takes the remainder.
fn recipe_6c2(price: Gold) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, 3);

    vec![
        buyer(1, 3, 2, share),
        buyer(2, 3, 2, share),
        buyer(3, 3, 2, share + remainder),
        buyer(4, 4, 2, share),
        buyer(5, 4, 2, share),
        buyer(6, 4, 2, share + remainder),
    ]
}

/// 7 drivers, 1 buyer: sevenths of the single price, remainder to the last
/// driver.
fn recipe_7c1(price: Gold) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, 7);

    (1..=7)
        .map(|driver| {
            let gold = if driver == 7 { share + remainder } else { share };
            buyer(driver, 4, 2, gold)
        })
        .collect()
}
