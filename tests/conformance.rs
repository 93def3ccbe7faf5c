//! Community-convention conformance tests
//!
//! The split for every standard ratio follows an established convention; a
//! handful of them are load-bearing enough to pin down record by record.

use farebox::{
    engine::compute_distribution,
    gold::Gold,
    payments::{Distribution, PaymentRecord, Payer},
    roster::BuyerLabel,
    run::RunSize,
};

fn totals(distribution: &Distribution, driver_count: usize) -> Vec<Gold> {
    distribution.driver_totals(driver_count)
}

#[test]
fn four_man_solo_driver_collects_everything() {
    let distribution = compute_distribution(RunSize::Four, 1, 3, 5000);

    assert_eq!(
        distribution.records(),
        &[
            PaymentRecord::new(1, Payer::Buyer(BuyerLabel::solo(2)), 5000),
            PaymentRecord::new(1, Payer::Buyer(BuyerLabel::solo(3)), 5000),
            PaymentRecord::new(1, Payer::Buyer(BuyerLabel::solo(4)), 5000),
        ]
    );
    assert_eq!(distribution.driver_total(1), 15_000);
}

#[test]
fn eight_man_two_drivers_split_exactly_evenly() {
    let distribution = compute_distribution(RunSize::Eight, 2, 6, 6000);

    assert_eq!(distribution.len(), 6);
    assert_eq!(totals(&distribution, 2), vec![18_000, 18_000]);
}

#[test]
fn eight_man_seven_way_split_without_remainder() {
    let distribution = compute_distribution(RunSize::Eight, 7, 1, 7000);

    assert_eq!(distribution.len(), 7);
    assert!(distribution.iter().all(|record| record.gold == 1000));
}

#[test]
fn eight_man_seven_way_split_with_remainder() {
    let distribution = compute_distribution(RunSize::Eight, 7, 1, 10_000);

    let golds: Vec<Gold> = distribution.iter().map(|record| record.gold).collect();
    assert_eq!(golds, vec![1428, 1428, 1428, 1428, 1428, 1428, 1432]);
    assert_eq!(distribution.total_collected(), 10_000);
}

#[test]
fn sixteen_man_even_ratio_pairs_drivers_with_buyers() {
    let distribution = compute_distribution(RunSize::Sixteen, 8, 8, 5000);

    assert_eq!(distribution.len(), 8);
    assert!(distribution.iter().all(|record| record.gold == 5000));
    assert!(distribution.iter().all(|record| !record.payer.is_grouped()));
    assert_eq!(totals(&distribution, 8), vec![5000; 8]);
}

#[test]
fn zero_counts_return_an_empty_plan() {
    assert!(compute_distribution(RunSize::Four, 0, 4, 5000).is_empty());
    assert!(compute_distribution(RunSize::Four, 4, 0, 5000).is_empty());
}

#[test]
fn eight_man_solo_driver_compresses_to_two_grouped_records() {
    let distribution = compute_distribution(RunSize::Eight, 1, 7, 10_000);

    assert_eq!(
        distribution.records(),
        &[
            PaymentRecord::new(
                1,
                Payer::Span {
                    party: 1,
                    first: 2,
                    last: 4,
                },
                10_000,
            ),
            PaymentRecord::new(
                1,
                Payer::Span {
                    party: 2,
                    first: 1,
                    last: 4,
                },
                10_000,
            ),
        ]
    );

    // Two records, but the driver still collects from all seven buyers.
    assert_eq!(distribution.driver_total(1), 70_000);
}

#[test]
fn eight_man_percent_table_keeps_the_prescribed_shape() {
    // Each buyer's price splits 40%/20% across exactly two drivers, and every
    // driver ends with 60% of the price.
    let distribution = compute_distribution(RunSize::Eight, 5, 3, 10_000);

    assert_eq!(distribution.len(), 10);
    assert_eq!(totals(&distribution, 5), vec![6000; 5]);

    let n2_total: Gold = distribution
        .iter()
        .filter(|record| record.payer.to_string() == "n2 (party 2)")
        .map(|record| record.gold)
        .sum();
    assert_eq!(n2_total, 10_000);
}

#[test]
fn sixteen_man_three_drivers_take_a_party_each() {
    let distribution = compute_distribution(RunSize::Sixteen, 3, 13, 9000);

    let grouped: Vec<(usize, String)> = distribution
        .iter()
        .filter(|record| record.payer.is_grouped())
        .map(|record| (record.driver, record.payer.to_string()))
        .collect();
    assert_eq!(
        grouped,
        vec![
            (1, "all buyers (party 2)".to_owned()),
            (2, "all buyers (party 3)".to_owned()),
            (3, "all buyers (party 4)".to_owned()),
        ]
    );

    assert_eq!(totals(&distribution, 3), vec![39_000, 39_000, 39_000]);
    assert_eq!(distribution.total_collected(), 9000 * 13);
}

#[test]
fn sixteen_man_fourteen_drivers_put_the_remainder_on_the_tail() {
    let distribution = compute_distribution(RunSize::Sixteen, 14, 2, 10_000);

    // floor(10000 / 14) = 714 per driver per buyer; the last driver's last
    // buyer carries the remainder.
    let last = distribution.records().last();
    assert_eq!(last.map(|record| record.driver), Some(14));
    assert_eq!(last.map(|record| record.gold), Some(714 + (10_000 - 714 * 14)));

    let n4_total: Gold = distribution
        .iter()
        .filter(|record| record.payer.to_string() == "n4 (party 4)")
        .map(|record| record.gold)
        .sum();
    assert_eq!(n4_total, 10_000);
}
