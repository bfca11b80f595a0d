//! Series normalizer: aligns driver point histories into equal-length,
//! chart-ready cumulative rows.

use crate::model::Driver;

/// One driver's running total at a given round.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverTotal {
    pub code: String,
    pub total: f64,
}

/// One chart row: the round label plus every driver's cumulative points
/// through that round, in input driver order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTotals {
    pub label: String,
    pub totals: Vec<DriverTotal>,
}

/// 1-based round labels: "R1", "R2", ...
pub fn race_labels(len: usize) -> Vec<String> {
    (1..=len).map(|i| format!("R{}", i)).collect()
}

/// Builds the cumulative table for a set of drivers.
///
/// Output length is the longest series among the inputs; drivers whose
/// series ends early contribute 0 for the missing rounds, so every
/// per-driver column is monotonically non-decreasing. Empty input or
/// all-empty histories yield an empty table (callers render a "no data"
/// placeholder).
pub fn cumulative_table(drivers: &[Driver]) -> Vec<RoundTotals> {
    let len = drivers
        .iter()
        .map(|d| d.points_series().len())
        .max()
        .unwrap_or(0);
    if len == 0 {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(len);
    let mut running: Vec<f64> = vec![0.0; drivers.len()];

    for (i, label) in race_labels(len).into_iter().enumerate() {
        let mut totals = Vec::with_capacity(drivers.len());
        for (slot, driver) in drivers.iter().enumerate() {
            running[slot] += driver.points_series().get(i).copied().unwrap_or(0.0);
            totals.push(DriverTotal {
                code: driver.short_name.clone(),
                total: running[slot],
            });
        }
        rows.push(RoundTotals { label, totals });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trend;

    fn driver(code: &str, history: Vec<f64>) -> Driver {
        Driver {
            id: code.to_lowercase(),
            name: code.to_string(),
            short_name: code.to_string(),
            team: "T".to_string(),
            team_color: "#000000".to_string(),
            country: None,
            points: history.iter().sum(),
            wins: 0,
            podiums: 0,
            avg_position: 0.0,
            consistency: 0.0,
            trend: Trend::Stable,
            points_history: history,
            last_races: Vec::new(),
            photo: None,
        }
    }

    #[test]
    fn cumulative_matches_prefix_sums() {
        let rows = cumulative_table(&[driver("VER", vec![10.0, 0.0, 15.0])]);
        let totals: Vec<f64> = rows.iter().map(|r| r.totals[0].total).collect();
        assert_eq!(totals, vec![10.0, 10.0, 25.0]);
    }

    #[test]
    fn labels_are_one_based() {
        let rows = cumulative_table(&[driver("VER", vec![25.0, 18.0])]);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["R1", "R2"]);
    }

    #[test]
    fn series_is_non_decreasing() {
        let rows = cumulative_table(&[
            driver("VER", vec![25.0, 0.0, 18.0, 0.0, 12.0]),
            driver("NOR", vec![18.0, 25.0]),
        ]);
        for col in 0..2 {
            let mut prev = 0.0;
            for row in &rows {
                assert!(row.totals[col].total >= prev);
                prev = row.totals[col].total;
            }
        }
    }

    #[test]
    fn shorter_series_pads_with_zero_contribution() {
        let rows = cumulative_table(&[
            driver("VER", vec![25.0, 18.0, 25.0]),
            driver("NOR", vec![18.0]),
        ]);
        assert_eq!(rows.len(), 3);
        // NOR's total freezes after its last recorded race.
        assert_eq!(rows[0].totals[1].total, 18.0);
        assert_eq!(rows[1].totals[1].total, 18.0);
        assert_eq!(rows[2].totals[1].total, 18.0);
    }

    #[test]
    fn empty_inputs_yield_empty_table() {
        assert!(cumulative_table(&[]).is_empty());
        assert!(cumulative_table(&[driver("VER", vec![]), driver("NOR", vec![])]).is_empty());
    }

    #[test]
    fn legacy_fallback_feeds_the_table() {
        let mut d = driver("PER", vec![]);
        d.last_races = vec![6.0, 8.0];
        let rows = cumulative_table(&[d]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].totals[0].total, 14.0);
    }
}
