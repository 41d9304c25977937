use dotenv::dotenv;
use hedge_lab::bankroll::simulate;
use hedge_lab::payout_evaluator::{evaluate, expected_value, implied_probability, overround};
use hedge_lab::probability::Distribution;
use hedge_lab::scenario::load_scenario;
use hedge_lab::shared_types::Status;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let path = env::args()
        .nth(1)
        .filter(|a| a != "--json")
        .or_else(|| env::var("HEDGE_LAB_SCENARIO").ok())
        .ok_or("usage: hedge_lab <scenario.json> [--json] (or set HEDGE_LAB_SCENARIO)")?;
    let as_json = env::args().any(|a| a == "--json");

    println!("Loading scenario from {}...", path);
    let scenario = load_scenario(&path)?;
    println!(
        "Loaded '{}': {} bets over {} outcomes.",
        scenario.fixture,
        scenario.position.bets.len(),
        scenario.position.outcomes.len()
    );

    let table = evaluate(&scenario.position)?;
    let dist = Distribution::single_primary(
        &scenario.position.outcomes,
        &scenario.primary_outcome,
        scenario.primary_probability,
    )?;
    let ev = expected_value(&table, &dist)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("HEDGE ANALYSIS: {}", scenario.fixture);
    if let Some(kickoff) = scenario.kickoff {
        println!("Kickoff: {}", kickoff);
    }
    println!("{}", "=".repeat(60));
    for row in &table.rows {
        let tag = match row.status {
            Status::Profit => "profit",
            Status::Breakeven => "breakeven",
            Status::Loss => "loss",
        };
        println!(
            "{:<12} income {:>10}  net {:>10}  [{}]",
            row.outcome,
            row.income.round_dp(2),
            row.net_profit.round_dp(2),
            tag
        );
    }
    println!("{}", "-".repeat(60));
    println!("Total stake:        {}", table.total_stake.round_dp(2));
    println!("Strategy EV:        {}", ev.round_dp(2));

    // Anchor standing alone, under the same outcome probabilities.
    let anchor_only = hedge_lab::shared_types::Position::new(
        vec![scenario.anchor.clone()],
        scenario.position.outcomes.clone(),
    );
    let anchor_ev = expected_value(&evaluate(&anchor_only)?, &dist)?;
    println!("Anchor-only EV:     {}", anchor_ev.round_dp(2));

    let implied = implied_probability(scenario.anchor.odds);
    println!("{}", "-".repeat(60));
    println!(
        "Anchor odds {} imply {}%; your estimate {}% (edge {}%)",
        scenario.anchor.odds,
        (implied * dec!(100)).round_dp(1),
        (scenario.primary_probability * dec!(100)).round_dp(1),
        ((scenario.primary_probability - implied) * dec!(100)).round_dp(1)
    );

    if !scenario.market_board.is_empty() {
        println!("{}", "-".repeat(60));
        println!("MARKET BOARD");
        for (label, odds) in &scenario.market_board {
            println!(
                "{:<12} odds {:>7}  implied {:>6}%",
                label,
                odds,
                (implied_probability(*odds) * dec!(100)).round_dp(1)
            );
        }
        let board: Vec<Decimal> = scenario.market_board.iter().map(|(_, o)| *o).collect();
        println!(
            "Overround: {}%",
            (overround(&board) * dec!(100)).round_dp(2)
        );
    }

    if let Some(config) = &scenario.simulation {
        println!("{}", "-".repeat(60));
        println!(
            "BANKROLL SIMULATION ({} paths x {} bets, start {})",
            config.paths, config.bets_per_path, config.initial_bankroll
        );
        let report = simulate(config, ev);
        println!("Mean final balance: {:.0}", report.mean_final_balance);
        println!("Ruin rate:          {:.1}%", report.ruin_rate * 100.0);
        println!(
            "Profitable paths:   {:.1}%",
            report.profitable_rate * 100.0
        );
    }

    println!("{}", "=".repeat(60));
    Ok(())
}
