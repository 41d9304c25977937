use crate::shared_types::EvalError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Deviation from 1 tolerated when checking that a distribution's mass sums
/// to unity.
pub fn probability_tolerance() -> Decimal {
    dec!(0.000001)
}

/// A probability assignment over an enumerated outcome set. Entries keep the
/// caller's outcome order.
#[derive(Debug, Clone)]
pub struct Distribution {
    entries: Vec<(String, Decimal)>,
}

impl Distribution {
    /// Build from explicit (outcome, probability) pairs. No validation is
    /// performed here; callers that assemble mass by hand go through
    /// `validate` before use.
    pub fn from_entries(entries: Vec<(String, Decimal)>) -> Self {
        Self { entries }
    }

    /// Assign `p_primary` to the primary outcome and split the remaining
    /// mass uniformly across every other outcome. This is the one policy
    /// used for secondary outcomes; callers wanting a weighted split supply
    /// their own entries via `from_entries`.
    pub fn single_primary(
        outcomes: &[String],
        primary: &str,
        p_primary: Decimal,
    ) -> Result<Self, EvalError> {
        if outcomes.is_empty() {
            return Err(EvalError::EmptyOutcomeSet);
        }
        if p_primary < Decimal::ZERO || p_primary > Decimal::ONE {
            return Err(EvalError::InvalidDistribution { sum: p_primary });
        }
        if !outcomes.iter().any(|o| o == primary) {
            return Err(EvalError::InvalidScenario(format!(
                "primary outcome '{}' is not in the outcome list",
                primary
            )));
        }

        let others = outcomes.len() - 1;
        if others == 0 {
            if p_primary != Decimal::ONE {
                return Err(EvalError::InvalidDistribution { sum: p_primary });
            }
            return Ok(Self {
                entries: vec![(primary.to_string(), Decimal::ONE)],
            });
        }

        let remainder = Decimal::ONE - p_primary;
        let share = remainder / Decimal::from(others);

        // The final secondary outcome absorbs division dust so the total
        // mass is exactly 1.
        let mut assigned = Decimal::ZERO;
        let mut seen_secondary = 0;
        let mut entries = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if outcome == primary {
                entries.push((outcome.clone(), p_primary));
            } else {
                seen_secondary += 1;
                let p = if seen_secondary == others {
                    remainder - assigned
                } else {
                    assigned += share;
                    share
                };
                entries.push((outcome.clone(), p));
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, outcome: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(o, _)| o == outcome)
            .map(|(_, p)| *p)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, p)| *p).sum()
    }

    pub fn entries(&self) -> &[(String, Decimal)] {
        &self.entries
    }

    /// Check that the mass sums to 1 within tolerance and that every listed
    /// outcome has an entry.
    pub fn validate(&self, outcomes: &[String]) -> Result<(), EvalError> {
        let sum = self.total();
        if (sum - Decimal::ONE).abs() > probability_tolerance() {
            return Err(EvalError::InvalidDistribution { sum });
        }
        for outcome in outcomes {
            if self.get(outcome).is_none() {
                return Err(EvalError::MissingProbability {
                    outcome: outcome.clone(),
                });
            }
        }
        Ok(())
    }
}
