use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Long-run bankroll walk settings. Seedable so reports reproduce.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub paths: usize,
    pub bets_per_path: usize,
    pub initial_bankroll: f64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paths: 50,
            bets_per_path: 1000,
            initial_bankroll: 1000.0,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub final_balances: Vec<f64>,
    /// Bankroll averaged across paths after each bet (index 0 is the start).
    pub mean_path: Vec<f64>,
    pub mean_final_balance: f64,
    /// Share of paths that ended at zero.
    pub ruin_rate: f64,
    /// Share of paths that ended above the starting bankroll.
    pub profitable_rate: f64,
}

/// Walk `paths` bankroll trajectories, each accumulating the strategy's EV
/// with a uniform jitter per bet. Positive-EV strategies jitter in
/// [0.5, 1.5], the rest in [0.8, 1.2]; a bankroll that reaches zero is
/// ruined and stays there.
pub fn simulate(config: &SimulationConfig, ev: Decimal) -> SimulationReport {
    let ev = ev.to_f64().unwrap_or(0.0);
    let (jitter_lo, jitter_hi) = if ev > 0.0 { (0.5, 1.5) } else { (0.8, 1.2) };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut final_balances = Vec::with_capacity(config.paths);
    let mut path_sums = vec![0.0; config.bets_per_path + 1];

    for _ in 0..config.paths {
        let mut bankroll = config.initial_bankroll;
        path_sums[0] += bankroll;

        for step in 1..=config.bets_per_path {
            if bankroll > 0.0 {
                bankroll += ev * rng.gen_range(jitter_lo..jitter_hi);
                if bankroll <= 0.0 {
                    bankroll = 0.0;
                }
            }
            path_sums[step] += bankroll;
        }

        final_balances.push(bankroll);
    }

    let paths = config.paths.max(1) as f64;
    let mean_path: Vec<f64> = path_sums.iter().map(|s| s / paths).collect();
    let mean_final_balance = final_balances.iter().sum::<f64>() / paths;
    let ruin_rate = final_balances.iter().filter(|&&b| b <= 0.0).count() as f64 / paths;
    let profitable_rate = final_balances
        .iter()
        .filter(|&&b| b > config.initial_bankroll)
        .count() as f64
        / paths;

    SimulationReport {
        final_balances,
        mean_path,
        mean_final_balance,
        ruin_rate,
        profitable_rate,
    }
}
