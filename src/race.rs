//! Summary facts derived from a race's result list. Everything here
//! degrades to `None` on missing data; callers render placeholders.

use crate::model::{Race, RaceResult};

/// The position-1 entry, falling back to the first listed result when the
/// payload lacks one. `None` only for an empty result list.
pub fn winner(race: &Race) -> Option<&RaceResult> {
    race.results
        .iter()
        .find(|r| r.position == 1)
        .or_else(|| race.results.first())
}

/// The result with the largest position gain. Ties keep the first-listed
/// entry, i.e. the better finisher.
pub fn biggest_gainer(race: &Race) -> Option<&RaceResult> {
    race.results.iter().reduce(|best, r| {
        if r.position_change > best.position_change {
            r
        } else {
            best
        }
    })
}

/// Splits the `"<driver> - <lap time>"` summary on the literal `" - "`.
pub fn fastest_lap(race: &Race) -> (Option<&str>, Option<&str>) {
    match race.fastest_lap.as_deref() {
        Some(raw) => match raw.split_once(" - ") {
            Some((driver, time)) => (Some(driver), Some(time)),
            None => (Some(raw), None),
        },
        None => (None, None),
    }
}

/// Top-three finishers in position order.
pub fn podium(race: &Race) -> Vec<&RaceResult> {
    let mut top: Vec<&RaceResult> = race.results.iter().filter(|r| r.position <= 3).collect();
    top.sort_by_key(|r| r.position);
    top
}

/// Most recent race of the season, by round number.
pub fn latest_race(races: &[Race]) -> Option<&Race> {
    races.iter().max_by_key(|r| r.round)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(position: u32, driver: &str, change: i32) -> RaceResult {
        RaceResult {
            position,
            driver_id: driver.to_lowercase(),
            driver: driver.to_string(),
            team: "T".to_string(),
            grid_position: None,
            position_change: change,
            points: 0.0,
            avg_lap_time: None,
        }
    }

    fn race(results: Vec<RaceResult>, fastest_lap: Option<&str>) -> Race {
        Race {
            id: "monaco-2025".to_string(),
            name: "Monaco Grand Prix".to_string(),
            circuit: "Monte Carlo".to_string(),
            country: None,
            date: "2025-05-25".to_string(),
            round: 8,
            results,
            highlights: Vec::new(),
            fastest_lap: fastest_lap.map(str::to_string),
        }
    }

    #[test]
    fn winner_prefers_position_one() {
        let r = race(vec![result(2, "NOR", 0), result(1, "VER", 1)], None);
        assert_eq!(winner(&r).unwrap().driver, "VER");
    }

    #[test]
    fn winner_falls_back_to_first_listed() {
        let r = race(vec![result(3, "PIA", 0), result(2, "NOR", 0)], None);
        assert_eq!(winner(&r).unwrap().driver, "PIA");
    }

    #[test]
    fn empty_results_give_no_winner_or_gainer() {
        let r = race(vec![], None);
        assert!(winner(&r).is_none());
        assert!(biggest_gainer(&r).is_none());
    }

    #[test]
    fn biggest_gainer_takes_max_change() {
        let r = race(
            vec![result(1, "VER", -1), result(5, "HAM", 7), result(9, "ALO", 3)],
            None,
        );
        assert_eq!(biggest_gainer(&r).unwrap().driver, "HAM");
    }

    #[test]
    fn tied_gainers_keep_the_better_finisher() {
        let r = race(
            vec![result(2, "NOR", 5), result(6, "ALO", 5), result(9, "STR", 2)],
            None,
        );
        assert_eq!(biggest_gainer(&r).unwrap().driver, "NOR");
    }

    #[test]
    fn fastest_lap_splits_on_delimiter() {
        let r = race(vec![], Some("Max Verstappen - 1:24.319"));
        assert_eq!(
            fastest_lap(&r),
            (Some("Max Verstappen"), Some("1:24.319"))
        );
    }

    #[test]
    fn fastest_lap_absent_gives_placeholders() {
        let r = race(vec![], None);
        assert_eq!(fastest_lap(&r), (None, None));
    }

    #[test]
    fn fastest_lap_without_delimiter_keeps_driver_half() {
        let r = race(vec![], Some("Max Verstappen"));
        assert_eq!(fastest_lap(&r), (Some("Max Verstappen"), None));
    }

    #[test]
    fn podium_is_sorted_top_three() {
        let r = race(
            vec![result(3, "PIA", 0), result(1, "VER", 0), result(4, "HAM", 0), result(2, "NOR", 0)],
            None,
        );
        let names: Vec<&str> = podium(&r).iter().map(|p| p.driver.as_str()).collect();
        assert_eq!(names, vec!["VER", "NOR", "PIA"]);
    }

    #[test]
    fn latest_race_is_highest_round() {
        let mut early = race(vec![], None);
        early.round = 3;
        early.id = "bahrain-2025".to_string();
        let late = race(vec![], None);
        let races = vec![early, late];
        assert_eq!(latest_race(&races).unwrap().id, "monaco-2025");
    }
}
