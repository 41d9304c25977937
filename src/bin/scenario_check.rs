use dotenv::dotenv;
use hedge_lab::payout_evaluator::{evaluate, expected_value};
use hedge_lab::probability::Distribution;
use hedge_lab::scenario::load_scenario;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("HEDGE_LAB_SCENARIO").ok())
        .ok_or("usage: scenario_check <scenario.json> (or set HEDGE_LAB_SCENARIO)")?;

    println!("Checking scenario {}...", path);

    let scenario = load_scenario(&path)?;
    println!(
        "✅ Parsed '{}': {} bets, {} outcomes.",
        scenario.fixture,
        scenario.position.bets.len(),
        scenario.position.outcomes.len()
    );

    let table = evaluate(&scenario.position)?;
    println!("✅ Settles. Total stake: {}", table.total_stake.round_dp(2));

    let dist = Distribution::single_primary(
        &scenario.position.outcomes,
        &scenario.primary_outcome,
        scenario.primary_probability,
    )?;
    dist.validate(&scenario.position.outcomes)?;
    let ev = expected_value(&table, &dist)?;
    println!("✅ Distribution valid. Strategy EV: {}", ev.round_dp(2));

    Ok(())
}
