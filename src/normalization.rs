use crate::shared_types::Bet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_SCORELINE: Regex = Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap();
}

/// Trim and collapse whitespace so scenario input like `" 1-0 "` and `"1-0"`
/// agree. Applied at the scenario boundary only; the evaluator itself never
/// touches labels.
pub fn sanitize_label(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Parse a `"home-away"` scoreline into its two goal counts.
pub fn parse_scoreline(label: &str) -> Option<(u32, u32)> {
    let caps = RE_SCORELINE.captures(label.trim())?;
    let home = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let away = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some((home, away))
}

/// Bucket label for a total goal count.
pub fn goal_bucket(total_goals: u32) -> &'static str {
    match total_goals {
        0 => "0 goals",
        1 => "1 goal",
        2 => "2 goals",
        _ => "3+ goals",
    }
}

/// Map a scoreline label onto its goal-total bucket; labels that are not
/// scorelines pass through unchanged. This is one ready-made mapping a
/// caller can inject before building a position.
pub fn score_to_goal_bucket(label: &str) -> String {
    match parse_scoreline(label) {
        Some((home, away)) => goal_bucket(home + away).to_string(),
        None => label.to_string(),
    }
}

/// Identity mapping: the default when bet labels already match the outcome
/// enumeration.
pub fn identity(label: &str) -> String {
    label.to_string()
}

/// Rewrite every bet label through the injected mapping. The evaluator sees
/// only the mapped labels, keeping it outcome-agnostic.
pub fn apply_label_map<F>(bets: Vec<Bet>, map: F) -> Vec<Bet>
where
    F: Fn(&str) -> String,
{
    bets.into_iter()
        .map(|b| Bet {
            label: map(&b.label),
            ..b
        })
        .collect()
}
