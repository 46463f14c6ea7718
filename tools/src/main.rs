//! sim-runner: headless playthrough runner for CleanStart.
//!
//! Usage:
//!   sim-runner --seed 12345 --track solar --quarters 12
//!   sim-runner --seed 12345 --json
//!
//! Plays the default decision set every quarter and prints a per-quarter
//! line plus an end-of-run summary. With --json, dumps the final state
//! snapshot instead — the same structure a UI would consume.

use anyhow::{bail, Result};
use cleanstart_core::{Company, QuarterDecisions, TechnologyTrack};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let quarters = parse_arg(&args, "--quarters", 12u32);
    let json = args.iter().any(|a| a == "--json");
    let track = match args
        .windows(2)
        .find(|w| w[0] == "--track")
        .map(|w| w[1].as_str())
        .unwrap_or("solar")
    {
        "battery" => TechnologyTrack::Battery,
        "solar" => TechnologyTrack::Solar,
        "hydrogen" => TechnologyTrack::Hydrogen,
        "carbon_capture" => TechnologyTrack::CarbonCapture,
        other => bail!("unknown track '{other}' (battery|solar|hydrogen|carbon_capture)"),
    };

    if !json {
        println!("CleanStart — sim-runner");
        println!("  track:    {}", track.label());
        println!("  seed:     {seed}");
        println!("  quarters: {quarters}");
        println!();
    }

    let mut company = Company::new(track, seed);
    for _ in 0..quarters {
        if company.game_over {
            break;
        }
        let report = company.advance_quarter(QuarterDecisions::default())?;
        if !json {
            let event = report
                .event
                .as_ref()
                .map(|e| format!("  [{}]", e.title))
                .unwrap_or_default();
            println!(
                "Q{:<2} sold {:>5} | revenue ${:>9.0} | net ${:>9.0} | cash ${:>10.0} | share {:>5.1}%{event}",
                report.quarter,
                report.units_sold,
                report.revenue,
                report.net_income,
                report.cash,
                report.market_share * 100.0,
            );
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&company.get_current_state())?
        );
        return Ok(());
    }

    let m = &company.metrics;
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  final quarter:  {}", m.quarter);
    println!("  cash:           ${:.0}", m.cash);
    println!("  valuation:      ${:.0}", m.valuation);
    println!("  tech level:     {:.3}", m.tech_level);
    println!("  unit cost:      ${:.2}", m.unit_cost);
    println!("  market share:   {:.1}%", m.market_share * 100.0);
    println!("  units built:    {}", m.cumulative_production);
    println!("  funding raised: ${:.0}", m.total_funding_raised);
    println!("  events fired:   {}", company.event_log.len());
    if company.game_over {
        println!("  outcome:        {}", company.game_over_reason);
    } else {
        println!("  outcome:        (still running)");
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
