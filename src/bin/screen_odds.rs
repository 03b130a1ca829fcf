//! Quick pre-match screen from a raw odds quote.
//!
//! Usage: screen_odds <home> <draw> <away> [league_id]
//!
//! Prints the de-margined probabilities, the pick with its confidence grade,
//! and any catalogue edge the quote lands in. No snapshot data required.

use anyhow::{bail, Context, Result};

use winsight::analysis::market_analysis;
use winsight::league::League;
use winsight::state::OddsTriple;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: screen_odds <home> <draw> <away> [league_id]");
    }

    let parse = |raw: &str, label: &str| -> Result<f64> {
        raw.parse::<f64>()
            .with_context(|| format!("{label} odds '{raw}' is not a number"))
    };
    let odds = OddsTriple::new(
        parse(&args[0], "home")?,
        parse(&args[1], "draw")?,
        parse(&args[2], "away")?,
    );
    let league = args
        .get(3)
        .map(|raw| raw.parse::<u32>().context("league_id must be an integer"))
        .transpose()?
        .and_then(League::from_api_id);

    let out = market_analysis(&odds, league)?;

    println!(
        "implied   H {:.1}%  D {:.1}%  A {:.1}%   (overround {:.3})",
        out.implied.home, out.implied.draw, out.implied.away, out.overround
    );
    println!(
        "pick      {} at {:.1}%  [{} {}  hist. accuracy {}]",
        out.pick.outcome.label(),
        out.pick.probability,
        out.confidence.level,
        "*".repeat(out.confidence.stars as usize),
        out.confidence.accuracy
    );
    match out.value_bet {
        Some(edge) => println!(
            "edge      {} (+{:.1}% ROI over {} matches)",
            edge.name, edge.verified_roi, edge.sample_size
        ),
        None => println!("edge      none"),
    }

    Ok(())
}
