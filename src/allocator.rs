//! Generic balancing allocator
//!
//! Fallback for ratios with no catalog entry. Buyers outside the first party
//! seed drivers with full-price payments, preferring a same-party driver;
//! buyers sharing the first party with drivers then top up whoever holds the
//! least gold, splitting a single buyer's price across drivers when needed.

use crate::{
    gold::Gold,
    ledger::DriverLedger,
    payments::{Distribution, PaymentRecord},
    roster::PartyLayout,
};

/// Allocate buyer payments across drivers for a ratio with no catalog entry.
///
/// The result conserves every buyer's price, but a driver may end below the
/// equal share when buyer supply runs out first; that is accepted output, not
/// an error.
pub fn allocate(
    price: Gold,
    driver_count: usize,
    buyer_count: usize,
    layout: &PartyLayout,
) -> Distribution {
    if driver_count == 0 || buyer_count == 0 {
        return Distribution::default();
    }

    let mut ledger = DriverLedger::new(driver_count);
    let mut records = Vec::new();

    // First-party buyers are held back for the balancing pass.
    let mut balancing_pool: Vec<(usize, usize)> = Vec::new();

    for party in layout.parties() {
        if party.number() == 1 {
            balancing_pool.extend(party.buyer_positions().map(|pos| (party.number(), pos)));
            continue;
        }

        // Seed this party's buyers one-to-one onto its own drivers, in slot
        // order; leftovers go to whichever driver holds the least gold.
        let mut party_drivers = party.drivers();
        for position in party.buyer_positions() {
            let driver = match party_drivers.next() {
                Some(driver) => driver,
                None => ledger.poorest(),
            };

            records.push(PaymentRecord::single(
                driver,
                layout.buyer_label(party.number(), position),
                price,
            ));
            ledger.credit(driver, price);
        }
    }

    // Balancing pass: top up the poorest driver from the next unpaid buyer
    // until every driver reaches the equal share or the buyers run dry.
    let goal = price.saturating_mul(buyer_count as Gold) / driver_count as Gold;

    let mut paid: Vec<Gold> = vec![0; balancing_pool.len()];
    let mut current = 0;
    while current < balancing_pool.len() {
        let Some(&(party, position)) = balancing_pool.get(current) else {
            break;
        };
        let already_paid = paid.get(current).copied().unwrap_or(price);
        let remaining = price.saturating_sub(already_paid);

        if remaining == 0 {
            current += 1;
            continue;
        }

        let driver = ledger.poorest();
        let needed = goal.saturating_sub(ledger.total(driver));
        if needed == 0 {
            break;
        }

        let amount = needed.min(remaining);
        records.push(PaymentRecord::single(
            driver,
            layout.buyer_label(party, position),
            amount,
        ));
        ledger.credit(driver, amount);

        if let Some(entry) = paid.get_mut(current) {
            *entry += amount;
            if *entry >= price {
                current += 1;
            }
        }
    }

    Distribution::new(records)
}
