use crate::probability::{probability_tolerance, Distribution};
use crate::shared_types::{EvalError, OutcomeRow, OutcomeTable, Position, Status};
use rust_decimal::Decimal;

/// Settle a position against every enumerated outcome.
///
/// For each outcome `o`, income is the sum of `stake * odds` over bets whose
/// label equals `o` exactly. No label normalization happens here; callers
/// that need score-to-bucket mapping apply it before building the position.
/// Pure function: no side effects, no randomness.
pub fn evaluate(position: &Position) -> Result<OutcomeTable, EvalError> {
    if position.outcomes.is_empty() {
        return Err(EvalError::EmptyOutcomeSet);
    }

    let total_stake = position.total_stake();
    let mut rows = Vec::with_capacity(position.outcomes.len());

    for outcome in &position.outcomes {
        let income: Decimal = position
            .bets
            .iter()
            .filter(|b| b.label == *outcome)
            .map(|b| b.stake * b.odds)
            .sum();
        let net_profit = income - total_stake;

        let status = if net_profit > Decimal::ZERO {
            Status::Profit
        } else if net_profit == Decimal::ZERO {
            Status::Breakeven
        } else {
            Status::Loss
        };

        rows.push(OutcomeRow {
            outcome: outcome.clone(),
            income,
            net_profit,
            status,
        });
    }

    Ok(OutcomeTable { rows, total_stake })
}

/// Probability-weighted net profit of a settled table.
///
/// Rejects distributions whose mass is off by more than the tolerance or
/// that lack an entry for any table outcome; mass is never silently
/// renormalized.
pub fn expected_value(table: &OutcomeTable, dist: &Distribution) -> Result<Decimal, EvalError> {
    let sum = dist.total();
    if (sum - Decimal::ONE).abs() > probability_tolerance() {
        return Err(EvalError::InvalidDistribution { sum });
    }

    let mut ev = Decimal::ZERO;
    for row in &table.rows {
        let p = dist
            .get(&row.outcome)
            .ok_or_else(|| EvalError::MissingProbability {
                outcome: row.outcome.clone(),
            })?;
        ev += p * row.net_profit;
    }
    Ok(ev)
}

/// `1 / odds`, or 0 for non-positive odds. The zero return mirrors how every
/// odds form in the source corpus guards the division.
pub fn implied_probability(odds: Decimal) -> Decimal {
    if odds > Decimal::ZERO {
        Decimal::ONE / odds
    } else {
        Decimal::ZERO
    }
}

/// Bookmaker margin of a full odds board: the implied probabilities of a
/// fair board sum to 1, anything above that is the overround.
pub fn overround(board: &[Decimal]) -> Decimal {
    board.iter().map(|o| implied_probability(*o)).sum::<Decimal>() - Decimal::ONE
}
