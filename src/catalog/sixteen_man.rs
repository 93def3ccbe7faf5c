//! Hand-authored splits for 16-player runs
//!
//! Four parties. The low driver counts each have a bespoke plan built around
//! whole-party grouping; driver counts 9 through 15 share an equal-share
//! pattern over an explicit buyer list, grouping party 4 only while party 3
//! still holds buyers.

use decimal_percentage::Percentage;
use rustc_hash::FxHashMap;

use super::{Recipe, RecipeKey};
use crate::{
    gold::{Gold, equal_share, percent_share},
    payments::{PaymentRecord, Payer},
    roster::{BuyerLabel, PARTY_SIZE},
    run::RunSize,
};

pub(super) fn register(recipes: &mut FxHashMap<RecipeKey, Recipe>) {
    recipes.insert((RunSize::Sixteen, 1, 15), recipe_1c15);
    recipes.insert((RunSize::Sixteen, 2, 14), recipe_2c14);
    recipes.insert((RunSize::Sixteen, 3, 13), recipe_3c13);
    recipes.insert((RunSize::Sixteen, 4, 12), recipe_4c12);
    recipes.insert((RunSize::Sixteen, 5, 11), recipe_5c11);
    recipes.insert((RunSize::Sixteen, 6, 10), recipe_6c10);
    recipes.insert((RunSize::Sixteen, 7, 9), recipe_7c9);
    recipes.insert((RunSize::Sixteen, 8, 8), recipe_8c8);
    recipes.insert((RunSize::Sixteen, 9, 7), recipe_9c7);
    recipes.insert((RunSize::Sixteen, 10, 6), recipe_10c6);
    recipes.insert((RunSize::Sixteen, 11, 5), recipe_11c5);
    recipes.insert((RunSize::Sixteen, 12, 4), recipe_12c4);
    recipes.insert((RunSize::Sixteen, 13, 3), recipe_13c3);
    recipes.insert((RunSize::Sixteen, 14, 2), recipe_14c2);
    recipes.insert((RunSize::Sixteen, 15, 1), recipe_15c1);
}

fn buyer(driver: usize, position: usize, party: usize, gold: Gold) -> PaymentRecord {
    PaymentRecord::single(driver, BuyerLabel::in_party(position, party), gold)
}

fn whole_party(driver: usize, party: usize, gold: Gold) -> PaymentRecord {
    PaymentRecord::new(driver, Payer::Party { party }, gold)
}

/// 1 driver, 15 buyers: the three buyers sharing the driver's party pay
/// individually; parties 2-4 each collapse into one grouped record.
fn recipe_1c15(price: Gold) -> Vec<PaymentRecord> {
    let mut records: Vec<PaymentRecord> =
        (2..=4).map(|position| buyer(1, position, 1, price)).collect();

    records.extend((2..=4).map(|party| whole_party(1, party, price)));

    records
}

/// 2 drivers, 14 buyers: each driver takes one whole party plus a fixed set
/// of individual buyers from parties 1 and 4.
fn recipe_2c14(price: Gold) -> Vec<PaymentRecord> {
    vec![
        whole_party(1, 2, price),
        buyer(1, 3, 1, price),
        buyer(1, 1, 4, price),
        buyer(1, 2, 4, price),
        buyer(2, 4, 1, price),
        whole_party(2, 3, price),
        buyer(2, 3, 4, price),
        buyer(2, 4, 4, price),
    ]
}

/// 3 drivers, 13 buyers: one whole party each, then the leftover party-1
/// buyer is split in thirds with the remainder on driver 3.
fn recipe_3c13(price: Gold) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, 3);

    let mut records = vec![
        whole_party(1, 2, price),
        whole_party(2, 3, price),
        whole_party(3, 4, price),
    ];

    records.extend((1..=3).map(|driver| {
        let gold = if driver == 3 { share + remainder } else { share };
        buyer(driver, 4, 1, gold)
    }));

    records
}

/// 4 drivers, 12 buyers: each driver collects its own position across
/// parties 2-4.
fn recipe_4c12(price: Gold) -> Vec<PaymentRecord> {
    let mut records = Vec::with_capacity(12);

    for driver in 1..=4 {
        for party in 2..=4 {
            records.push(buyer(driver, driver, party, price));
        }
    }

    records
}

/// 5 drivers, 11 buyers: two full-price buyers each plus a fifth of n3
/// (party 3), taken as 20% floors.
fn recipe_5c11(price: Gold) -> Vec<PaymentRecord> {
    let partial = percent_share(Percentage::from(0.2), price);

    // (full, full) pairings per driver; every driver also collects the shared
    // 20% slice of n3 (party 3).
    let pairings: [[(usize, usize); 2]; 5] = [
        [(1, 3), (2, 2)],
        [(3, 2), (4, 3)],
        [(2, 3), (4, 2)],
        [(1, 4), (2, 4)],
        [(3, 4), (4, 4)],
    ];

    let mut records = Vec::with_capacity(15);
    for (idx, pair) in pairings.iter().enumerate() {
        let driver = idx + 1;
        for (position, party) in pair {
            records.push(buyer(driver, *position, *party, price));
        }
        records.push(buyer(driver, 3, 3, partial));
    }

    records
}

/// 6 drivers, 10 buyers: party-3 buyers pay drivers 1-4 in full, party-4
/// buyers are split two-thirds/one-third between a party-1 driver and a
/// party-2 driver.
fn recipe_6c10(price: Gold) -> Vec<PaymentRecord> {
    let two_thirds = price.saturating_mul(2) / 3;
    let one_third = price - two_thirds;

    let mut records = Vec::with_capacity(14);

    for position in 1..=4 {
        records.push(buyer(position, position, 3, price));
        records.push(buyer(position, position, 4, two_thirds));
    }

    records.push(buyer(5, 3, 2, price));
    records.push(buyer(5, 1, 4, one_third));
    records.push(buyer(5, 2, 4, one_third));

    records.push(buyer(6, 4, 2, price));
    records.push(buyer(6, 3, 4, one_third));
    records.push(buyer(6, 4, 4, one_third));

    records
}

/// 7 drivers, 9 buyers: one full-price buyer each, plus sevenths of the two
/// leftover n4 buyers; n4 (party 2) carries the remainder on driver 7, n4
/// (party 4) truncates on every driver.
fn recipe_7c9(price: Gold) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, 7);

    let fulls: [(usize, usize); 7] =
        [(1, 3), (2, 3), (3, 3), (4, 3), (1, 4), (2, 4), (3, 4)];

    let mut records = Vec::with_capacity(21);
    for (idx, (position, party)) in fulls.iter().enumerate() {
        let driver = idx + 1;
        let from_party_two = if driver == 7 { share + remainder } else { share };

        records.push(buyer(driver, *position, *party, price));
        records.push(buyer(driver, 4, 2, from_party_two));
        records.push(buyer(driver, 4, 4, share));
    }

    records
}

/// 8 drivers, 8 buyers: party-1 drivers take their position in party 3,
/// party-2 drivers take theirs in party 4.
fn recipe_8c8(price: Gold) -> Vec<PaymentRecord> {
    let mut records = Vec::with_capacity(8);

    for driver in 1..=4 {
        records.push(buyer(driver, driver, 3, price));
    }
    for driver in 5..=8 {
        records.push(buyer(driver, driver - 4, 4, price));
    }

    records
}

const BUYERS_9C7: [(usize, usize); 7] =
    [(3, 2), (3, 3), (3, 4), (4, 1), (4, 2), (4, 3), (4, 4)];

const BUYERS_10C6: [(usize, usize); 6] = [(3, 3), (3, 4), (4, 1), (4, 2), (4, 3), (4, 4)];

const BUYERS_11C5: [(usize, usize); 5] = [(3, 4), (4, 1), (4, 2), (4, 3), (4, 4)];

const BUYERS_12C4: [(usize, usize); 4] = [(4, 1), (4, 2), (4, 3), (4, 4)];

const BUYERS_13C3: [(usize, usize); 3] = [(4, 2), (4, 3), (4, 4)];

const BUYERS_14C2: [(usize, usize); 2] = [(4, 3), (4, 4)];

const BUYERS_15C1: [(usize, usize); 1] = [(4, 4)];

fn recipe_9c7(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 9, &BUYERS_9C7)
}

fn recipe_10c6(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 10, &BUYERS_10C6)
}

fn recipe_11c5(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 11, &BUYERS_11C5)
}

fn recipe_12c4(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 12, &BUYERS_12C4)
}

fn recipe_13c3(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 13, &BUYERS_13C3)
}

fn recipe_14c2(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 14, &BUYERS_14C2)
}

fn recipe_15c1(price: Gold) -> Vec<PaymentRecord> {
    equal_split(price, 15, &BUYERS_15C1)
}

/// Shared pattern for 9-15 drivers: every buyer pays each driver an equal
/// floor share.
///
/// While party 3 still holds buyers and party 4 is all buyers, party 4
/// collapses into one grouped record per driver and the floor share is taken
/// as-is. Once the buyer list is individual records only, the truncation
/// remainder rides on the last driver's last buyer.
fn equal_split(
    price: Gold,
    driver_count: usize,
    buyers: &[(usize, usize)],
) -> Vec<PaymentRecord> {
    let (share, remainder) = equal_share(price, driver_count as Gold);

    let party_four_complete =
        buyers.iter().filter(|(party, _)| *party == 4).count() == PARTY_SIZE;
    let party_three: Vec<(usize, usize)> = buyers
        .iter()
        .copied()
        .filter(|(party, _)| *party == 3)
        .collect();

    let mut records = Vec::new();
    for driver in 1..=driver_count {
        if party_four_complete && !party_three.is_empty() {
            for (party, position) in &party_three {
                records.push(buyer(driver, *position, *party, share));
            }
            records.push(whole_party(driver, 4, share));
        } else {
            for (idx, (party, position)) in buyers.iter().enumerate() {
                let last = driver == driver_count && idx == buyers.len() - 1;
                let gold = if last { share + remainder } else { share };
                records.push(buyer(driver, *position, *party, gold));
            }
        }
    }

    records
}
