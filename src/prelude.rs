//! Farebox prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    engine::compute_distribution,
    gold::{Gold, format_gold},
    instructions::{MailInstruction, mail_instructions},
    payments::{Distribution, Payer, PaymentRecord},
    presets::{Preset, PresetStore, PresetStoreError},
    raids::{Difficulty, Raid},
    roster::{BuyerLabel, Party, PartyLayout, Slot},
    run::{RunConfig, RunConfigError, RunSize},
};
