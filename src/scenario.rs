use crate::bankroll::SimulationConfig;
use crate::hedging::{build_score_hedge, build_totals_hedge};
use crate::normalization::{apply_label_map, identity, sanitize_label, score_to_goal_bucket};
use crate::shared_types::{Bet, EvalError, Position};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct ScenarioFile {
    fixture: String,
    kickoff: Option<String>,
    strategy: StrategyKind,
    #[serde(default)]
    label_map: LabelMapKind,
    anchor: BetEntry,
    #[serde(default)]
    hedges: Vec<BetEntry>,
    banker_odds: Option<Decimal>,
    #[serde(default)]
    cover: Vec<OddsEntry>,
    cover_stake: Option<Decimal>,
    outcomes: Vec<String>,
    primary_probability: Decimal,
    #[serde(default)]
    market_board: Vec<OddsEntry>,
    simulation: Option<SimulationEntry>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum StrategyKind {
    ScoreHedge,
    TotalsHedge,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
enum LabelMapKind {
    #[default]
    Identity,
    ScoreToGoalBucket,
}

#[derive(Deserialize, Debug)]
struct BetEntry {
    label: String,
    odds: Decimal,
    stake: Decimal,
}

#[derive(Deserialize, Debug)]
struct OddsEntry {
    label: String,
    odds: Decimal,
}

#[derive(Deserialize, Debug)]
struct SimulationEntry {
    paths: Option<usize>,
    bets_per_path: Option<usize>,
    initial_bankroll: Option<f64>,
    seed: Option<u64>,
}

/// A validated scenario: the built position plus everything the report
/// binary needs around it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub fixture: String,
    pub kickoff: Option<NaiveDate>,
    pub position: Position,
    /// The anchor leg as staked, kept alongside the built position for
    /// anchor-only comparison reporting.
    pub anchor: Bet,
    pub primary_outcome: String,
    pub primary_probability: Decimal,
    /// The bookmaker's full board for the market, when supplied; used for
    /// implied-probability and overround reporting only.
    pub market_board: Vec<(String, Decimal)>,
    pub simulation: Option<SimulationConfig>,
}

const MIN_ODDS: Decimal = dec!(1.01);

pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_scenario(&raw)?)
}

pub fn parse_scenario(raw: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    let file: ScenarioFile = serde_json::from_str(raw)?;
    Ok(build(file)?)
}

fn build(file: ScenarioFile) -> Result<Scenario, EvalError> {
    if file.outcomes.is_empty() {
        return Err(EvalError::EmptyOutcomeSet);
    }

    let outcomes: Vec<String> = file.outcomes.iter().map(|o| sanitize_label(o)).collect();

    let kickoff = match file.kickoff {
        // Accept a bare date or a full timestamp, date part only.
        Some(raw) => match raw.split('T').next().unwrap_or("").parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(_) => {
                return Err(EvalError::InvalidScenario(format!(
                    "unparseable kickoff date '{}'",
                    raw
                )))
            }
        },
        None => None,
    };

    let anchor = validated_bet(&file.anchor)?;
    let primary_outcome = anchor.label.clone();
    let anchor_copy = anchor.clone();

    let position = match file.strategy {
        StrategyKind::ScoreHedge => {
            let mut hedges = Vec::with_capacity(file.hedges.len());
            for entry in &file.hedges {
                hedges.push(validated_bet(entry)?);
            }
            let hedges = match file.label_map {
                LabelMapKind::Identity => apply_label_map(hedges, identity),
                LabelMapKind::ScoreToGoalBucket => apply_label_map(hedges, score_to_goal_bucket),
            };
            build_score_hedge(anchor, hedges, outcomes)
        }
        StrategyKind::TotalsHedge => {
            let banker_odds = file.banker_odds.ok_or_else(|| {
                EvalError::InvalidScenario("totals_hedge requires banker_odds".to_string())
            })?;
            if banker_odds < MIN_ODDS {
                return Err(EvalError::InvalidScenario(format!(
                    "banker odds {} below minimum {}",
                    banker_odds, MIN_ODDS
                )));
            }
            let cover_stake = file.cover_stake.unwrap_or(Decimal::ZERO);
            if cover_stake < Decimal::ZERO {
                return Err(EvalError::InvalidScenario(
                    "cover stake must be non-negative".to_string(),
                ));
            }
            let mut cover = Vec::with_capacity(file.cover.len());
            for entry in &file.cover {
                cover.push((sanitize_label(&entry.label), validated_odds(entry.odds)?));
            }
            build_totals_hedge(anchor, banker_odds, &cover, cover_stake, outcomes)
        }
    };

    let mut market_board = Vec::with_capacity(file.market_board.len());
    for entry in &file.market_board {
        market_board.push((sanitize_label(&entry.label), validated_odds(entry.odds)?));
    }

    let simulation = file.simulation.map(|s| {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            paths: s.paths.unwrap_or(defaults.paths),
            bets_per_path: s.bets_per_path.unwrap_or(defaults.bets_per_path),
            initial_bankroll: s.initial_bankroll.unwrap_or(defaults.initial_bankroll),
            seed: s.seed.unwrap_or(defaults.seed),
        }
    });

    Ok(Scenario {
        fixture: file.fixture,
        kickoff,
        position,
        anchor: anchor_copy,
        primary_outcome,
        primary_probability: file.primary_probability,
        market_board,
        simulation,
    })
}

fn validated_bet(entry: &BetEntry) -> Result<Bet, EvalError> {
    if entry.stake < Decimal::ZERO {
        return Err(EvalError::InvalidScenario(format!(
            "negative stake {} on '{}'",
            entry.stake, entry.label
        )));
    }
    Ok(Bet {
        label: sanitize_label(&entry.label),
        odds: validated_odds(entry.odds)?,
        stake: entry.stake,
    })
}

fn validated_odds(odds: Decimal) -> Result<Decimal, EvalError> {
    if odds < MIN_ODDS {
        return Err(EvalError::InvalidScenario(format!(
            "odds {} below minimum {}",
            odds, MIN_ODDS
        )));
    }
    Ok(odds)
}
