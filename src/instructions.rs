//! Mail instructions
//!
//! Turns a distribution into one copyable line per payment, in the phrasing
//! buyers paste into the in-game mail: `"<buyer> send <gold> to <driver>"`,
//! with an `x<n>` multiplier when one line stands for several identical
//! buyers. In-game mail titles cap at 50 characters, so overlong lines fall
//! back to shortened names.

use crate::{
    gold::{Gold, format_gold},
    payments::{Distribution, PaymentRecord, Payer},
};

/// Maximum length of an in-game mail title.
pub const MAIL_TITLE_LIMIT: usize = 50;

/// Name length used when a line has to be shortened to fit the title limit.
const SHORT_NAME_LEN: usize = 8;

/// One copyable payment line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailInstruction {
    buyer: String,
    driver: String,
    gold: Gold,
    text: String,
}

impl MailInstruction {
    /// Display name of the paying buyer or buyer group.
    pub fn buyer(&self) -> &str {
        &self.buyer
    }

    /// Display name of the receiving driver.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Gold amount per buyer on this line.
    pub fn gold(&self) -> Gold {
        self.gold
    }

    /// The copyable line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Generate one mail line per payment record.
///
/// `driver_names` supplies display names by driver id; missing or empty
/// entries fall back to `Driver<n>`.
pub fn mail_instructions(
    distribution: &Distribution,
    driver_names: &[String],
) -> Vec<MailInstruction> {
    distribution
        .iter()
        .map(|record| instruction_for(record, driver_names))
        .collect()
}

fn instruction_for(record: &PaymentRecord, driver_names: &[String]) -> MailInstruction {
    let driver = driver_name(record.driver, driver_names);
    let buyer = buyer_name(&record.payer);
    let gold_text = format_gold(record.gold);

    let multiplier = match record.payer.buyer_count() {
        0 | 1 => None,
        count => Some(format!(" x{count}")),
    };

    let mut text = format!("{buyer} send {gold_text} to {driver}");
    if let Some(suffix) = &multiplier {
        text.push_str(suffix);
    }

    if text.len() > MAIL_TITLE_LIMIT {
        // Shorten both names; re-add the multiplier only if it still fits.
        let short_buyer = shorten(&buyer);
        let short_driver = shorten(&driver);
        text = format!("{short_buyer} send {gold_text} to {short_driver}");

        if let Some(suffix) = &multiplier {
            if text.len() + suffix.len() <= MAIL_TITLE_LIMIT {
                text.push_str(suffix);
            }
        }
    }

    MailInstruction {
        buyer,
        driver,
        gold: record.gold,
        text,
    }
}

fn driver_name(driver: usize, driver_names: &[String]) -> String {
    driver_names
        .get(driver.wrapping_sub(1))
        .filter(|name| !name.trim().is_empty())
        .map_or_else(|| format!("Driver{driver}"), |name| name.trim().to_owned())
}

fn buyer_name(payer: &Payer) -> String {
    match payer {
        Payer::Buyer(label) => label.to_string(),
        Payer::Span { party, .. } | Payer::Party { party } => format!("Party{party}"),
    }
}

fn shorten(name: &str) -> String {
    name.chars().take(SHORT_NAME_LEN).collect()
}
