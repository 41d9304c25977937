use hedge_lab::payout_evaluator::{evaluate, expected_value};
use hedge_lab::probability::Distribution;
use hedge_lab::shared_types::{Bet, Position};
use rust_decimal_macros::dec;
use std::time::Instant;

fn create_position(hedges: usize) -> Position {
    let mut bets: Vec<Bet> = (0..hedges)
        .map(|i| Bet::new(&format!("{}-0", i), dec!(8.5), dec!(15)))
        .collect();
    bets.push(Bet::new("3+ goals", dec!(2.30), dec!(100)));

    let mut outcomes: Vec<String> = (0..hedges).map(|i| format!("{}-0", i)).collect();
    outcomes.push("3+ goals".to_string());

    Position::new(bets, outcomes)
}

fn main() {
    let position = create_position(6);
    let dist = Distribution::single_primary(&position.outcomes, "3+ goals", dec!(0.45)).unwrap();

    let start = Instant::now();
    for _ in 0..10000 {
        let table = evaluate(&position).unwrap();
        expected_value(&table, &dist).unwrap();
    }
    let duration = start.elapsed();
    println!("Time taken: {:?}", duration);
}
