//! Farebox CLI
//!
//! Thin consumer of the distribution engine: pick a raid (or a raw roster
//! size), a driver count and a per-buyer price, and get the payment table
//! plus optional copyable mail lines.
//!
//! Use `-l` to list known raids
//! Use `-r`/`-s` to pick a raid or a raw roster size
//! Use `-d` and `-p` for the driver count and per-buyer price
//! Use `-i` to print mail instructions after the table

use anyhow::{Context, Result, bail};
use clap::Parser;
use tabled::{Table, Tabled};

use farebox::{
    gold::{Gold, format_gold},
    instructions::mail_instructions,
    raids,
    run::{RunConfig, RunSize},
};

/// Arguments for the farebox CLI
#[derive(Debug, Parser)]
#[clap(name = "farebox", about = "Split carry-run gold across drivers")]
struct Args {
    /// Raid id to price; see --list for known ids
    #[clap(short, long)]
    raid: Option<String>,

    /// Roster size when no raid is given (4, 8 or 16)
    #[clap(short, long)]
    size: Option<usize>,

    /// Number of drivers
    #[clap(short, long, default_value_t = 1)]
    drivers: usize,

    /// Price each buyer pays, in gold
    #[clap(short, long)]
    price: Option<Gold>,

    /// Comma-separated driver names for the mail lines
    #[clap(short = 'n', long)]
    names: Option<String>,

    /// Print copyable mail instructions after the table
    #[clap(short, long)]
    instructions: bool,

    /// List known raids and exit
    #[clap(short, long)]
    list: bool,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "driver")]
    driver: String,

    #[tabled(rename = "buyer")]
    buyer: String,

    #[tabled(rename = "gold each")]
    gold: String,
}

#[derive(Tabled)]
struct RaidRow {
    #[tabled(rename = "id")]
    id: String,

    #[tabled(rename = "name")]
    name: String,

    #[tabled(rename = "players")]
    players: usize,

    #[tabled(rename = "rewards")]
    rewards: String,
}

#[expect(clippy::print_stdout, reason = "CLI output")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        let rows: Vec<RaidRow> = raids::all()
            .iter()
            .map(|raid| RaidRow {
                id: raid.id().to_owned(),
                name: raid.name().to_owned(),
                players: raid.run_size().player_count(),
                rewards: raid
                    .difficulties()
                    .filter_map(|difficulty| {
                        raid.reward(difficulty)
                            .map(|gold| format!("{difficulty:?} {}", format_gold(gold)))
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();

        println!("{}", Table::new(rows));
        return Ok(());
    }

    let price = args
        .price
        .context("--price is required unless --list is given")?;

    let run_size = match (&args.raid, args.size) {
        (Some(id), _) => raids::find(id)
            .with_context(|| format!("unknown raid {id:?}; try --list"))?
            .run_size(),
        (None, Some(players)) => RunSize::try_from(players)?,
        (None, None) => bail!("pass --raid or --size"),
    };

    let config = RunConfig::with_driver_count(run_size, args.drivers, price)?;
    let distribution = config.distribution();

    let driver_names: Vec<String> = args
        .names
        .as_deref()
        .map(|names| names.split(',').map(|name| name.trim().to_owned()).collect())
        .unwrap_or_default();

    let lines = mail_instructions(&distribution, &driver_names);

    let rows: Vec<PaymentRow> = distribution
        .iter()
        .zip(&lines)
        .map(|(record, line)| PaymentRow {
            driver: line.driver().to_owned(),
            buyer: record.payer.to_string(),
            gold: format_gold(record.gold),
        })
        .collect();

    println!("{}", Table::new(rows));

    println!();
    for (idx, total) in distribution
        .driver_totals(config.driver_count())
        .iter()
        .enumerate()
    {
        let driver = idx + 1;
        let name = driver_names
            .get(idx)
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("Driver{driver}"), Clone::clone);
        println!("{name}: {}", format_gold(*total));
    }

    if args.instructions {
        println!();
        for line in &lines {
            println!("{}", line.text());
        }
    }

    Ok(())
}
