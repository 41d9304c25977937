use crate::shared_types::{Bet, Position};
use rust_decimal::Decimal;

/// Anchor bet plus per-scoreline hedge legs. Each hedge leg carries its own
/// odds and stake; an empty hedge list is a plain anchor-only position.
pub fn build_score_hedge(anchor: Bet, hedges: Vec<Bet>, outcomes: Vec<String>) -> Position {
    let mut bets = hedges;
    bets.push(anchor);
    Position::new(bets, outcomes)
}

/// Anchor bet plus a goal-total cover spread through a short-priced banker
/// leg: the cover stake splits evenly across the selected buckets and each
/// bucket's effective odds are `bucket_odds * banker_odds`.
pub fn build_totals_hedge(
    anchor: Bet,
    banker_odds: Decimal,
    cover: &[(String, Decimal)],
    cover_stake_total: Decimal,
    outcomes: Vec<String>,
) -> Position {
    let mut bets = Vec::with_capacity(cover.len() + 1);

    if !cover.is_empty() {
        let share = cover_stake_total / Decimal::from(cover.len() as u64);
        for (label, odds) in cover {
            bets.push(Bet {
                label: label.clone(),
                odds: *odds * banker_odds,
                stake: share,
            });
        }
    }

    bets.push(anchor);
    Position::new(bets, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payout_evaluator::evaluate;
    use rust_decimal_macros::dec;

    fn outcomes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_hedge_keeps_leg_order() {
        let position = build_score_hedge(
            Bet::new("3+ goals", dec!(2.30), dec!(100)),
            vec![
                Bet::new("1-0", dec!(8.5), dec!(15)),
                Bet::new("1-1", dec!(7.0), dec!(15)),
            ],
            outcomes(&["1-0", "1-1", "3+ goals"]),
        );

        assert_eq!(position.bets.len(), 3);
        assert_eq!(position.bets[2].label, "3+ goals");
        assert_eq!(position.total_stake(), dec!(130));
    }

    #[test]
    fn test_score_hedge_without_legs() {
        let position = build_score_hedge(
            Bet::new("3+ goals", dec!(2.30), dec!(100)),
            vec![],
            outcomes(&["0-0", "3+ goals"]),
        );
        assert_eq!(position.bets.len(), 1);
        assert_eq!(position.total_stake(), dec!(100));
    }

    #[test]
    fn test_totals_hedge_splits_cover_evenly() {
        let position = build_totals_hedge(
            Bet::new("3+ goals", dec!(2.30), dec!(100)),
            dec!(1.35),
            &[
                ("1 goal".to_string(), dec!(3.55)),
                ("2 goals".to_string(), dec!(3.00)),
            ],
            dec!(100),
            outcomes(&["0 goals", "1 goal", "2 goals", "3+ goals"]),
        );

        assert_eq!(position.total_stake(), dec!(200));
        assert_eq!(position.bets[0].stake, dec!(50));
        // Effective odds carry the banker leg.
        assert_eq!(position.bets[0].odds, dec!(4.7925));
        assert_eq!(position.bets[1].odds, dec!(4.05));

        let table = evaluate(&position).unwrap();
        assert_eq!(table.row("1 goal").unwrap().income, dec!(239.625));
        assert_eq!(table.row("1 goal").unwrap().net_profit, dec!(39.625));
        assert_eq!(table.row("0 goals").unwrap().net_profit, dec!(-200));
        assert_eq!(table.row("3+ goals").unwrap().net_profit, dec!(30));
    }

    #[test]
    fn test_totals_hedge_with_no_cover() {
        // Unchecked buckets leave the anchor standing alone; the cover stake
        // is never committed.
        let position = build_totals_hedge(
            Bet::new("3+ goals", dec!(2.30), dec!(100)),
            dec!(1.35),
            &[],
            dec!(100),
            outcomes(&["0 goals", "3+ goals"]),
        );
        assert_eq!(position.bets.len(), 1);
        assert_eq!(position.total_stake(), dec!(100));
    }

    #[test]
    fn test_totals_hedge_uneven_split_settles() {
        // 100 over three buckets does not divide evenly; settlement still
        // balances against the summed total.
        let position = build_totals_hedge(
            Bet::new("3+ goals", dec!(2.30), dec!(100)),
            dec!(1.35),
            &[
                ("0 goals".to_string(), dec!(7.20)),
                ("1 goal".to_string(), dec!(3.55)),
                ("2 goals".to_string(), dec!(3.00)),
            ],
            dec!(100),
            outcomes(&["0 goals", "1 goal", "2 goals", "3+ goals"]),
        );

        let table = evaluate(&position).unwrap();
        let share = dec!(100) / dec!(3);
        assert_eq!(table.total_stake, dec!(100) + share * dec!(3));
        assert_eq!(
            table.row("2 goals").unwrap().income,
            share * (dec!(3.00) * dec!(1.35))
        );
    }
}
