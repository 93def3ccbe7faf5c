//! Payment records
//!
//! The engine's output: an ordered list of discrete payments, each from one
//! buyer (or a group of buyers paying identically) to one driver. Grouping is
//! a communication convention, not a different payment type — a grouped
//! record's gold is the amount paid by *each* buyer it stands for.

use std::fmt;

use serde::Serialize;

use crate::{gold::Gold, roster::{BuyerLabel, PARTY_SIZE}};

/// The paying side of a payment record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Payer {
    /// A single buyer.
    Buyer(BuyerLabel),

    /// Every buyer in a span of consecutive party positions, paying the
    /// record's gold amount each.
    Span {
        /// Party number.
        party: usize,
        /// First buyer position in the span, inclusive.
        first: usize,
        /// Last buyer position in the span, inclusive.
        last: usize,
    },

    /// Every buyer of a whole party, paying the record's gold amount each.
    Party {
        /// Party number.
        party: usize,
    },
}

impl Payer {
    /// Number of buyers this payer stands for.
    pub fn buyer_count(&self) -> usize {
        match self {
            Payer::Buyer(_) => 1,
            Payer::Span { first, last, .. } => last.saturating_sub(*first) + 1,
            Payer::Party { .. } => PARTY_SIZE,
        }
    }

    /// Whether this payer represents more than one buyer.
    pub fn is_grouped(&self) -> bool {
        !matches!(self, Payer::Buyer(_))
    }

    /// Coordinates of the individual buyers behind this payer, as
    /// `(party, position)` pairs. Single-party labels report party 1.
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        match self {
            Payer::Buyer(label) => vec![(label.party().unwrap_or(1), label.position())],
            Payer::Span { party, first, last } => {
                (*first..=*last).map(|pos| (*party, pos)).collect()
            }
            Payer::Party { party } => (1..=PARTY_SIZE).map(|pos| (*party, pos)).collect(),
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payer::Buyer(label) => label.fmt(f),
            Payer::Span { party, first, last } => {
                write!(f, "all buyers n{first}-n{last} (party {party})")
            }
            Payer::Party { party } => write!(f, "all buyers (party {party})"),
        }
    }
}

/// A single payment from a payer to a driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentRecord {
    /// Receiving driver, 1..=driver count.
    pub driver: usize,

    /// Paying buyer or buyer group.
    pub payer: Payer,

    /// Gold paid by each buyer behind the payer.
    pub gold: Gold,
}

impl PaymentRecord {
    /// Create a payment record.
    pub fn new(driver: usize, payer: Payer, gold: Gold) -> Self {
        Self {
            driver,
            payer,
            gold,
        }
    }

    /// Create a record for a single labelled buyer.
    pub fn single(driver: usize, label: BuyerLabel, gold: Gold) -> Self {
        Self::new(driver, Payer::Buyer(label), gold)
    }

    /// Aggregate gold this record delivers: the per-buyer amount times the
    /// number of buyers the payer stands for.
    pub fn total_gold(&self) -> Gold {
        self.gold.saturating_mul(self.payer.buyer_count() as Gold)
    }
}

/// Ordered list of payments produced by one engine invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    records: Vec<PaymentRecord>,
}

impl Distribution {
    /// Wrap an ordered list of payment records.
    pub fn new(records: Vec<PaymentRecord>) -> Self {
        Self { records }
    }

    /// Payment records in output order.
    pub fn records(&self) -> &[PaymentRecord] {
        &self.records
    }

    /// Number of payment records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the distribution holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate gold collected across all records, expanding grouped
    /// records by their buyer counts.
    pub fn total_collected(&self) -> Gold {
        self.records
            .iter()
            .fold(0, |acc: Gold, record| acc.saturating_add(record.total_gold()))
    }

    /// Aggregate gold received by one driver.
    pub fn driver_total(&self, driver: usize) -> Gold {
        self.records
            .iter()
            .filter(|record| record.driver == driver)
            .fold(0, |acc: Gold, record| acc.saturating_add(record.total_gold()))
    }

    /// Aggregate gold per driver, indexed by driver id starting at 1.
    pub fn driver_totals(&self, driver_count: usize) -> Vec<Gold> {
        (1..=driver_count)
            .map(|driver| self.driver_total(driver))
            .collect()
    }

    /// Iterate over payment records in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a PaymentRecord;
    type IntoIter = std::slice::Iter<'a, PaymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payer_display_matches_convention() {
        assert_eq!(Payer::Buyer(BuyerLabel::solo(3)).to_string(), "n3");
        assert_eq!(
            Payer::Buyer(BuyerLabel::in_party(3, 2)).to_string(),
            "n3 (party 2)"
        );
        assert_eq!(
            Payer::Span {
                party: 1,
                first: 2,
                last: 4,
            }
            .to_string(),
            "all buyers n2-n4 (party 1)"
        );
        assert_eq!(
            Payer::Party { party: 2 }.to_string(),
            "all buyers (party 2)"
        );
    }

    #[test]
    fn buyer_counts_expand_groups() {
        assert_eq!(Payer::Buyer(BuyerLabel::solo(1)).buyer_count(), 1);
        assert_eq!(
            Payer::Span {
                party: 1,
                first: 2,
                last: 4,
            }
            .buyer_count(),
            3
        );
        assert_eq!(Payer::Party { party: 3 }.buyer_count(), 4);
    }

    #[test]
    fn total_gold_multiplies_grouped_records() {
        let record = PaymentRecord::new(1, Payer::Party { party: 2 }, 5000);

        assert_eq!(record.gold, 5000);
        assert_eq!(record.total_gold(), 20_000);
    }

    #[test]
    fn coordinates_expand_to_individual_buyers() {
        let span = Payer::Span {
            party: 2,
            first: 1,
            last: 4,
        };

        assert_eq!(span.coordinates(), vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
        assert_eq!(
            Payer::Buyer(BuyerLabel::solo(4)).coordinates(),
            vec![(1, 4)]
        );
    }

    #[test]
    fn driver_totals_sum_per_driver() {
        let distribution = Distribution::new(vec![
            PaymentRecord::single(1, BuyerLabel::in_party(3, 1), 1000),
            PaymentRecord::single(2, BuyerLabel::in_party(4, 1), 1000),
            PaymentRecord::new(1, Payer::Party { party: 2 }, 250),
        ]);

        assert_eq!(distribution.driver_totals(2), vec![2000, 1000]);
        assert_eq!(distribution.total_collected(), 3000);
    }

    #[test]
    fn empty_distribution_reports_empty() {
        let distribution = Distribution::default();

        assert!(distribution.is_empty());
        assert_eq!(distribution.len(), 0);
        assert_eq!(distribution.total_collected(), 0);
    }
}
