//! Driver list shaping: search, standings order, trend tallies.

use crate::model::{Driver, Trend};

/// Case-insensitive substring match on driver name or team. An empty query
/// passes everything.
pub fn search_drivers<'a>(drivers: &'a [Driver], query: &str) -> Vec<&'a Driver> {
    let needle = query.to_lowercase();
    drivers
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&needle) || d.team.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Points-descending standings; stable, so equal-points drivers keep their
/// API order.
pub fn standings(drivers: &[Driver]) -> Vec<&Driver> {
    let mut ordered: Vec<&Driver> = drivers.iter().collect();
    ordered.sort_by(|a, b| b.points.partial_cmp(&a.points).unwrap_or(std::cmp::Ordering::Equal));
    ordered
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrendCounts {
    pub up: usize,
    pub stable: usize,
    pub down: usize,
}

pub fn trend_counts(drivers: &[Driver]) -> TrendCounts {
    let mut counts = TrendCounts::default();
    for d in drivers {
        match d.trend {
            Trend::Up => counts.up += 1,
            Trend::Stable => counts.stable += 1,
            Trend::Down => counts.down += 1,
        }
    }
    counts
}
