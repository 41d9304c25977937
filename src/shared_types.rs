use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A single wagered position: pays `stake * odds` only when the realized
/// outcome equals `label` exactly.
#[derive(Debug, Clone)]
pub struct Bet {
    pub label: String,
    pub odds: Decimal,
    pub stake: Decimal,
}

impl Bet {
    pub fn new(label: &str, odds: Decimal, stake: Decimal) -> Self {
        Self {
            label: label.to_string(),
            odds,
            stake,
        }
    }
}

/// An ordered collection of bets plus the enumeration of mutually exclusive
/// outcomes they are settled against. Built fresh per evaluation, never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Position {
    pub bets: Vec<Bet>,
    pub outcomes: Vec<String>,
}

impl Position {
    pub fn new(bets: Vec<Bet>, outcomes: Vec<String>) -> Self {
        Self { bets, outcomes }
    }

    pub fn total_stake(&self) -> Decimal {
        self.bets.iter().map(|b| b.stake).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Profit,
    Breakeven,
    Loss,
}

/// Settlement of one outcome: gross income, net against the full stake, and
/// the sign bucket used for display.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeRow {
    pub outcome: String,
    pub income: Decimal,
    pub net_profit: Decimal,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeTable {
    pub rows: Vec<OutcomeRow>,
    pub total_stake: Decimal,
}

impl OutcomeTable {
    pub fn row(&self, outcome: &str) -> Option<&OutcomeRow> {
        self.rows.iter().find(|r| r.outcome == outcome)
    }
}

#[derive(Debug, PartialEq)]
pub enum EvalError {
    /// The outcome enumeration was empty.
    EmptyOutcomeSet,
    /// Probabilities do not sum to 1 within tolerance.
    InvalidDistribution { sum: Decimal },
    /// An outcome in the table has no probability entry.
    MissingProbability { outcome: String },
    /// Scenario input failed validation before evaluation.
    InvalidScenario(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyOutcomeSet => write!(f, "outcome enumeration is empty"),
            EvalError::InvalidDistribution { sum } => {
                write!(f, "probabilities sum to {}, expected 1", sum)
            }
            EvalError::MissingProbability { outcome } => {
                write!(f, "no probability entry for outcome '{}'", outcome)
            }
            EvalError::InvalidScenario(msg) => write!(f, "invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}
