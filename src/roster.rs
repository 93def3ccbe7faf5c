//! Party roster
//!
//! Maps the abstract roster of drivers and buyers onto fixed groups of four
//! slots ("parties"). The layout is derived, never stored: slots fill
//! driver-first, party by party, position by position, so a consistent
//! configuration always reaches a total assignment.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::run::RunSize;

/// Number of roster slots in one party.
pub const PARTY_SIZE: usize = 4;

/// A single roster slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A driver, numbered 1..=driver count.
    Driver(usize),
    /// A buyer, numbered 1..=buyer count.
    Buyer(usize),
}

/// Human-meaningful coordinate of a buyer: its in-party position, plus the
/// party number for runs with more than one party.
///
/// Labels are re-derived on every computation; they are not persisted
/// identities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerLabel {
    position: usize,
    party: Option<usize>,
}

impl BuyerLabel {
    /// Label for a buyer in a single-party run, where the party number is
    /// omitted.
    pub fn solo(position: usize) -> Self {
        Self {
            position,
            party: None,
        }
    }

    /// Label for a buyer at `position` of `party`.
    pub fn in_party(position: usize, party: usize) -> Self {
        Self {
            position,
            party: Some(party),
        }
    }

    /// In-party position, 1..=4.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Party number, if the run has more than one party.
    pub fn party(&self) -> Option<usize> {
        self.party
    }
}

impl fmt::Display for BuyerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.party {
            Some(party) => write!(f, "n{} (party {party})", self.position),
            None => write!(f, "n{}", self.position),
        }
    }
}

/// One party of up to four assigned slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    number: usize,
    slots: SmallVec<[Slot; PARTY_SIZE]>,
}

impl Party {
    /// Party number, 1-based.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Assigned slots in position order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Driver numbers in this party, in position order.
    pub fn drivers(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Driver(number) => Some(*number),
            Slot::Buyer(_) => None,
        })
    }

    /// In-party positions (1..=4) held by buyers, in order.
    pub fn buyer_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Buyer(_) => Some(idx + 1),
                Slot::Driver(_) => None,
            })
    }

    /// Whether this party holds at least one driver.
    pub fn has_drivers(&self) -> bool {
        self.drivers().next().is_some()
    }
}

/// The full party layout of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyLayout {
    parties: SmallVec<[Party; 4]>,
}

impl PartyLayout {
    /// Assign drivers and buyers to party slots.
    ///
    /// Parties fill in order, positions 1..=4 within each party: the next
    /// unused driver while drivers remain, then the next unused buyer. The
    /// assignment is deterministic and total for any counts that fit the
    /// roster.
    pub fn assign(run_size: RunSize, driver_count: usize, buyer_count: usize) -> Self {
        let mut next_driver = 1;
        let mut next_buyer = 1;

        let mut parties = SmallVec::new();
        for number in 1..=run_size.party_count() {
            let mut slots = SmallVec::new();
            for _ in 0..PARTY_SIZE {
                if next_driver <= driver_count {
                    slots.push(Slot::Driver(next_driver));
                    next_driver += 1;
                } else if next_buyer <= buyer_count {
                    slots.push(Slot::Buyer(next_buyer));
                    next_buyer += 1;
                }
            }
            parties.push(Party { number, slots });
        }

        Self { parties }
    }

    /// Parties in roster order.
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    /// Whether the run consists of a single party.
    pub fn is_single_party(&self) -> bool {
        self.parties.len() == 1
    }

    /// Label for the buyer at `position` of `party`, omitting the party
    /// number in single-party runs.
    pub fn buyer_label(&self, party: usize, position: usize) -> BuyerLabel {
        if self.is_single_party() {
            BuyerLabel::solo(position)
        } else {
            BuyerLabel::in_party(position, party)
        }
    }

    /// Coordinates of every buyer slot, in roster order, as
    /// `(party, position)` pairs.
    pub fn buyer_coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parties
            .iter()
            .flat_map(|party| party.buyer_positions().map(|pos| (party.number(), pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_fills_drivers_first() {
        let layout = PartyLayout::assign(RunSize::Eight, 2, 6);

        let parties = layout.parties();
        assert_eq!(parties.len(), 2);
        assert_eq!(
            parties.first().map(Party::slots),
            Some(
                &[
                    Slot::Driver(1),
                    Slot::Driver(2),
                    Slot::Buyer(1),
                    Slot::Buyer(2),
                ][..]
            )
        );
        assert_eq!(
            parties.last().map(Party::slots),
            Some(
                &[
                    Slot::Buyer(3),
                    Slot::Buyer(4),
                    Slot::Buyer(5),
                    Slot::Buyer(6),
                ][..]
            )
        );
    }

    #[test]
    fn assign_spills_drivers_across_parties() {
        let layout = PartyLayout::assign(RunSize::Sixteen, 9, 7);

        let numbers: Vec<usize> = layout.parties().iter().map(Party::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        let third = layout.parties().get(2);
        assert_eq!(
            third.map(Party::slots),
            Some(
                &[
                    Slot::Driver(9),
                    Slot::Buyer(1),
                    Slot::Buyer(2),
                    Slot::Buyer(3),
                ][..]
            )
        );
    }

    #[test]
    fn buyer_positions_are_in_party_coordinates() {
        let layout = PartyLayout::assign(RunSize::Eight, 2, 6);

        let first = layout.parties().first();
        let positions: Vec<usize> = first.map(|p| p.buyer_positions().collect()).unwrap_or_default();

        // Drivers hold positions 1 and 2, so the first party's buyers sit at
        // positions 3 and 4.
        assert_eq!(positions, vec![3, 4]);
    }

    #[test]
    fn buyer_coordinates_cover_all_buyers() {
        let layout = PartyLayout::assign(RunSize::Sixteen, 13, 3);

        let coords: Vec<(usize, usize)> = layout.buyer_coordinates().collect();
        assert_eq!(coords, vec![(4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn labels_omit_party_for_single_party_runs() {
        let four = PartyLayout::assign(RunSize::Four, 1, 3);
        let eight = PartyLayout::assign(RunSize::Eight, 1, 7);

        assert_eq!(four.buyer_label(1, 2).to_string(), "n2");
        assert_eq!(eight.buyer_label(2, 1).to_string(), "n1 (party 2)");
    }

    #[test]
    fn has_drivers_detects_driverless_parties() {
        let layout = PartyLayout::assign(RunSize::Eight, 3, 5);

        assert_eq!(
            layout.parties().iter().map(Party::has_drivers).collect::<Vec<_>>(),
            vec![true, false]
        );
    }
}
