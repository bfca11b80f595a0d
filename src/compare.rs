//! Head-to-head comparison of exactly two drivers: per-statistic winner
//! annotations and a round-by-round point differential.

use crate::model::Driver;

/// Which direction wins for a statistic. Average position is the one
/// ranking where lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    HigherWins,
    LowerWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOutcome {
    FirstWins,
    SecondWins,
    /// Equal values highlight neither side.
    Even,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub first: f64,
    pub second: f64,
    pub outcome: StatOutcome,
}

pub fn stat_outcome(first: f64, second: f64, ranking: Ranking) -> StatOutcome {
    let first_better = match ranking {
        Ranking::HigherWins => first > second,
        Ranking::LowerWins => first < second,
    };
    let second_better = match ranking {
        Ranking::HigherWins => second > first,
        Ranking::LowerWins => second < first,
    };
    if first_better {
        StatOutcome::FirstWins
    } else if second_better {
        StatOutcome::SecondWins
    } else {
        StatOutcome::Even
    }
}

/// The five compared season statistics, in display order.
pub fn season_stats(first: &Driver, second: &Driver) -> Vec<StatLine> {
    let table: [(&'static str, f64, f64, Ranking); 5] = [
        ("points", first.points, second.points, Ranking::HigherWins),
        (
            "wins",
            first.wins as f64,
            second.wins as f64,
            Ranking::HigherWins,
        ),
        (
            "podiums",
            first.podiums as f64,
            second.podiums as f64,
            Ranking::HigherWins,
        ),
        (
            "avg position",
            first.avg_position,
            second.avg_position,
            Ranking::LowerWins,
        ),
        (
            "consistency",
            first.consistency,
            second.consistency,
            Ranking::HigherWins,
        ),
    ];
    table.into_iter()
        .map(|(label, a, b, ranking)| StatLine {
            label,
            first: a,
            second: b,
            outcome: stat_outcome(a, b, ranking),
        })
        .collect()
}

/// Outcome of a single aligned round. A round where either driver has no
/// recorded value is not compared at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// First driver leads by the contained (positive) margin.
    First(f64),
    /// Second driver leads by the contained (positive) margin.
    Second(f64),
    Tied,
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundDiff {
    pub label: String,
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub verdict: Verdict,
}

/// Aligns both drivers' raw per-race points by index, up to the longer of
/// the two series. Missing entries stay `None` — rendered as a placeholder,
/// never treated as zero.
pub fn round_by_round(first: &Driver, second: &Driver) -> Vec<RoundDiff> {
    let a = first.points_series();
    let b = second.points_series();
    let rounds = a.len().max(b.len());

    (0..rounds)
        .map(|i| {
            let va = a.get(i).copied();
            let vb = b.get(i).copied();
            let verdict = match (va, vb) {
                (Some(x), Some(y)) => {
                    let diff = x - y;
                    if diff > 0.0 {
                        Verdict::First(diff)
                    } else if diff < 0.0 {
                        Verdict::Second(-diff)
                    } else {
                        Verdict::Tied
                    }
                }
                _ => Verdict::NoData,
            };
            RoundDiff {
                label: format!("R{}", i + 1),
                first: va,
                second: vb,
                verdict,
            }
        })
        .collect()
}
