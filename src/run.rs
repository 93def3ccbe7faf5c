//! Run configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{engine, gold::Gold, payments::Distribution, roster::PARTY_SIZE};

/// Errors related to run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunConfigError {
    /// The roster size is not one of the supported run sizes.
    #[error("unsupported run size {0}; expected 4, 8 or 16")]
    UnsupportedRunSize(usize),

    /// Driver and buyer counts do not fill the roster exactly.
    #[error("{drivers} drivers and {buyers} buyers do not fill a {expected}-player run")]
    RosterMismatch {
        /// Expected total participant count for the run size.
        expected: usize,
        /// Requested driver count.
        drivers: usize,
        /// Requested buyer count.
        buyers: usize,
    },

    /// A run needs at least one driver.
    #[error("a run needs at least one driver")]
    NoDrivers,

    /// A run needs at least one buyer.
    #[error("a run needs at least one buyer")]
    NoBuyers,

    /// The per-buyer price must be positive.
    #[error("the per-buyer price must be positive")]
    ZeroPrice,
}

/// Supported roster sizes for a carry run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum RunSize {
    /// A 4-player run (one party).
    Four,
    /// An 8-player run (two parties).
    Eight,
    /// A 16-player run (four parties).
    Sixteen,
}

impl RunSize {
    /// Total number of roster slots in a run of this size.
    pub fn player_count(self) -> usize {
        match self {
            RunSize::Four => 4,
            RunSize::Eight => 8,
            RunSize::Sixteen => 16,
        }
    }

    /// Number of 4-slot parties in a run of this size.
    pub fn party_count(self) -> usize {
        self.player_count() / PARTY_SIZE
    }
}

impl TryFrom<usize> for RunSize {
    type Error = RunConfigError;

    fn try_from(players: usize) -> Result<Self, Self::Error> {
        match players {
            4 => Ok(RunSize::Four),
            8 => Ok(RunSize::Eight),
            16 => Ok(RunSize::Sixteen),
            other => Err(RunConfigError::UnsupportedRunSize(other)),
        }
    }
}

impl From<RunSize> for usize {
    fn from(run_size: RunSize) -> Self {
        run_size.player_count()
    }
}

/// A validated carry-run configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    run_size: RunSize,
    driver_count: usize,
    buyer_count: usize,
    price_per_buyer: Gold,
}

impl RunConfig {
    /// Create a new run configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RunConfigError`] if either count is zero, the counts do not
    /// fill the roster exactly, or the price is zero.
    pub fn new(
        run_size: RunSize,
        driver_count: usize,
        buyer_count: usize,
        price_per_buyer: Gold,
    ) -> Result<Self, RunConfigError> {
        if driver_count == 0 {
            return Err(RunConfigError::NoDrivers);
        }

        if buyer_count == 0 {
            return Err(RunConfigError::NoBuyers);
        }

        if driver_count + buyer_count != run_size.player_count() {
            return Err(RunConfigError::RosterMismatch {
                expected: run_size.player_count(),
                drivers: driver_count,
                buyers: buyer_count,
            });
        }

        if price_per_buyer == 0 {
            return Err(RunConfigError::ZeroPrice);
        }

        Ok(Self {
            run_size,
            driver_count,
            buyer_count,
            price_per_buyer,
        })
    }

    /// Create a configuration from a driver count, deriving the buyer count
    /// from the remaining roster slots.
    ///
    /// # Errors
    ///
    /// Returns a [`RunConfigError`] if the driver count does not leave room
    /// for at least one buyer, or the price is zero.
    pub fn with_driver_count(
        run_size: RunSize,
        driver_count: usize,
        price_per_buyer: Gold,
    ) -> Result<Self, RunConfigError> {
        let buyer_count = run_size.player_count().saturating_sub(driver_count);

        Self::new(run_size, driver_count, buyer_count, price_per_buyer)
    }

    /// Run size of this configuration.
    pub fn run_size(&self) -> RunSize {
        self.run_size
    }

    /// Number of drivers.
    pub fn driver_count(&self) -> usize {
        self.driver_count
    }

    /// Number of buyers.
    pub fn buyer_count(&self) -> usize {
        self.buyer_count
    }

    /// Price each buyer pays once, in gold.
    pub fn price_per_buyer(&self) -> Gold {
        self.price_per_buyer
    }

    /// Total income across all buyers.
    pub fn total_income(&self) -> Gold {
        self.price_per_buyer
            .saturating_mul(self.buyer_count as Gold)
    }

    /// Compute the payment plan for this configuration.
    pub fn distribution(&self) -> Distribution {
        engine::compute_distribution(
            self.run_size,
            self.driver_count,
            self.buyer_count,
            self.price_per_buyer,
        )
    }
}
