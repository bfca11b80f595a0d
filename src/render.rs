//! Terminal presentation of normalized data. Pure string builders, no
//! business logic: missing data renders as a placeholder, never an error.

use crate::compare::{round_by_round, season_stats, StatOutcome, Verdict};
use crate::filter::{standings, trend_counts};
use crate::model::{Driver, Race, SeasonOverview, Trend};
use crate::race::{biggest_gainer, fastest_lap, winner};
use crate::series::cumulative_table;

pub const PLACEHOLDER: &str = "—";

/// Fractional values print with one decimal, integral values without.
pub fn fmt_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

pub fn overview_card(overview: &SeasonOverview, season: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("Season {} overview\n", season));
    out.push_str(&format!(
        "  leader         {} ({}, {} pts)\n",
        overview.leader.name,
        overview.leader.team,
        fmt_points(overview.leader.points)
    ));
    out.push_str(&format!("  on the rise    {}\n", overview.top_momentum.name));
    out.push_str(&format!("  falling        {}\n", overview.falling_driver.name));
    out.push_str(&format!("  dominant team  {}\n", overview.dominant_team));
    out.push_str(&format!(
        "  last race      {} (round {})\n",
        overview.last_race.name, overview.last_race.round
    ));
    if overview.highlights.is_empty() {
        out.push_str(&format!("  highlights     {}\n", PLACEHOLDER));
    } else {
        for h in &overview.highlights {
            out.push_str(&format!("  - {}\n", h));
        }
    }
    out
}

pub fn standings_table(drivers: &[Driver]) -> String {
    if drivers.is_empty() {
        return "no data\n".to_string();
    }
    let counts = trend_counts(drivers);
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<24} {:<16} {:>7} {:>5} {:>7}  {}\n",
        "#", "driver", "team", "points", "wins", "podiums", "trend"
    ));
    for (i, d) in standings(drivers).iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<24} {:<16} {:>7} {:>5} {:>7}  {}\n",
            i + 1,
            d.name,
            d.team,
            fmt_points(d.points),
            d.wins,
            d.podiums,
            d.trend.as_str()
        ));
    }
    out.push_str(&format!(
        "trends: {} up / {} stable / {} down\n",
        counts.up, counts.stable, counts.down
    ));
    out
}

pub fn races_table(races: &[Race]) -> String {
    if races.is_empty() {
        return "no data\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<28} {:<20} {:<12} {}\n",
        "round", "race", "circuit", "date", "winner"
    ));
    for race in races {
        let won_by = winner(race)
            .map(|r| r.driver.as_str())
            .unwrap_or(PLACEHOLDER);
        out.push_str(&format!(
            "{:>5}  {:<28} {:<20} {:<12} {}\n",
            race.round, race.name, race.circuit, race.date, won_by
        ));
    }
    out
}

pub fn race_detail(race: &Race) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} — {} (round {}, {})\n\n",
        race.name, race.circuit, race.round, race.date
    ));

    match winner(race) {
        Some(w) => out.push_str(&format!("  winner        {} ({})\n", w.driver, w.team)),
        None => out.push_str(&format!("  winner        {}\n", PLACEHOLDER)),
    }
    match biggest_gainer(race) {
        Some(g) => out.push_str(&format!(
            "  most gained   {} ({:+} positions)\n",
            g.driver, g.position_change
        )),
        None => out.push_str(&format!("  most gained   {}\n", PLACEHOLDER)),
    }
    let (fl_driver, fl_time) = fastest_lap(race);
    out.push_str(&format!(
        "  fastest lap   {} ({})\n",
        fl_time.unwrap_or(PLACEHOLDER),
        fl_driver.unwrap_or(PLACEHOLDER)
    ));

    out.push('\n');
    if race.results.is_empty() {
        out.push_str("no data\n");
    } else {
        out.push_str(&format!(
            "{:>3}  {:<24} {:<16} {:>5} {:>7} {:>7}\n",
            "pos", "driver", "team", "grid", "change", "points"
        ));
        for r in &race.results {
            let grid = r
                .grid_position
                .map(|g| g.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            out.push_str(&format!(
                "{:>3}  {:<24} {:<16} {:>5} {:>+7} {:>7}\n",
                r.position,
                r.driver,
                r.team,
                grid,
                r.position_change,
                fmt_points(r.points)
            ));
        }
    }

    if !race.highlights.is_empty() {
        out.push('\n');
        for h in &race.highlights {
            out.push_str(&format!("  - {}\n", h));
        }
    }
    out
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "on the rise",
        Trend::Down => "falling off",
        Trend::Stable => "steady",
    }
}

fn trend_note(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "results above average in recent races",
        Trend::Down => "rough patch, needs to recover pace",
        Trend::Stable => "consistent performance across the season",
    }
}

/// Single-driver view: season stat cards, the trend read, and the
/// cumulative chart against the teammate when one exists.
pub fn driver_detail(driver: &Driver, teammate: Option<&Driver>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} — {} ({} pts)\n",
        driver.name,
        driver.team,
        fmt_points(driver.points)
    ));
    out.push_str(&format!(
        "  trend         {} ({})\n\n",
        trend_label(driver.trend),
        trend_note(driver.trend)
    ));

    out.push_str(&format!("  wins          {}\n", driver.wins));
    out.push_str(&format!("  podiums       {}\n", driver.podiums));
    out.push_str(&format!("  avg position  {:.1}\n", driver.avg_position));
    out.push_str(&format!(
        "  consistency   {}%\n",
        fmt_points(driver.consistency)
    ));

    let mut field = vec![driver.clone()];
    if let Some(t) = teammate {
        field.push(t.clone());
    }
    let chart = cumulative_table(&field);

    out.push('\n');
    if chart.is_empty() {
        out.push_str("no data\n");
        return out;
    }
    let header: Vec<String> = field
        .iter()
        .map(|d| format!("{:>8}", d.short_name))
        .collect();
    out.push_str(&format!("{:>5} {}   cumulative\n", "", header.join(" ")));
    for row in &chart {
        let cells: Vec<String> = row
            .totals
            .iter()
            .map(|t| format!("{:>8}", fmt_points(t.total)))
            .collect();
        out.push_str(&format!("{:>5} {}\n", row.label, cells.join(" ")));
    }
    if let Some(t) = teammate {
        out.push_str(&format!("compared with teammate: {}\n", t.name));
    }
    out
}

pub fn comparison(first: &Driver, second: &Driver) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}) vs {} ({})\n\n",
        first.name, first.team, second.name, second.team
    ));

    for line in season_stats(first, second) {
        let (left_mark, right_mark) = match line.outcome {
            StatOutcome::FirstWins => ("*", " "),
            StatOutcome::SecondWins => (" ", "*"),
            StatOutcome::Even => (" ", " "),
        };
        out.push_str(&format!(
            "{:>10}{}  {:<14}  {}{}\n",
            fmt_points(line.first),
            left_mark,
            line.label,
            right_mark,
            fmt_points(line.second)
        ));
    }

    let chart = cumulative_table(&[first.clone(), second.clone()]);
    out.push('\n');
    if chart.is_empty() {
        out.push_str("no data\n");
        return out;
    }
    out.push_str(&format!(
        "{:>5} {:>8} {:>8}   cumulative\n",
        "", first.short_name, second.short_name
    ));
    for row in &chart {
        out.push_str(&format!(
            "{:>5} {:>8} {:>8}\n",
            row.label,
            fmt_points(row.totals[0].total),
            fmt_points(row.totals[1].total)
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{:>5} {:>8} {:>8}   round by round\n",
        "", first.short_name, second.short_name
    ));
    for round in round_by_round(first, second) {
        let fmt_cell = |v: Option<f64>| {
            v.map(fmt_points).unwrap_or_else(|| PLACEHOLDER.to_string())
        };
        let verdict = match round.verdict {
            Verdict::First(margin) => format!("+{} {}", fmt_points(margin), first.short_name),
            Verdict::Second(margin) => format!("+{} {}", fmt_points(margin), second.short_name),
            Verdict::Tied => "tied".to_string(),
            Verdict::NoData => PLACEHOLDER.to_string(),
        };
        out.push_str(&format!(
            "{:>5} {:>8} {:>8}   {}\n",
            round.label,
            fmt_cell(round.first),
            fmt_cell(round.second),
            verdict
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(code: &str, points: f64, history: Vec<f64>) -> Driver {
        Driver {
            id: code.to_lowercase(),
            name: code.to_string(),
            short_name: code.to_string(),
            team: "T".to_string(),
            team_color: "#000000".to_string(),
            country: None,
            points,
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
    fn fmt_points_trims_integral_values() {
        assert_eq!(fmt_points(244.0), "244");
        assert_eq!(fmt_points(190.5), "190.5");
        assert_eq!(fmt_points(0.0), "0");
    }

    #[test]
    fn empty_standings_render_no_data() {
        assert_eq!(standings_table(&[]), "no data\n");
    }

    #[test]
    fn driver_detail_shows_stats_and_teammate_chart() {
        let mut a = driver("VER", 250.0, vec![25.0, 18.0]);
        a.avg_position = 1.8;
        a.consistency = 92.0;
        a.trend = Trend::Up;
        let b = driver("TSU", 40.0, vec![8.0, 6.0]);
        let text = driver_detail(&a, Some(&b));
        assert!(text.contains("avg position  1.8"));
        assert!(text.contains("consistency   92%"));
        assert!(text.contains("on the rise"));
        assert!(text.contains("compared with teammate: TSU"));
        assert!(text.contains("R2"));
    }

    #[test]
    fn driver_detail_without_history_renders_no_data() {
        let a = driver("VER", 0.0, vec![]);
        let text = driver_detail(&a, None);
        assert!(text.contains("no data"));
        assert!(!text.contains("teammate"));
    }

    #[test]
    fn comparison_with_no_histories_renders_placeholder_chart() {
        let a = driver("VER", 10.0, vec![]);
        let b = driver("NOR", 10.0, vec![]);
        let text = comparison(&a, &b);
        assert!(text.contains("no data"));
    }

    #[test]
    fn comparison_marks_unrecorded_rounds_with_placeholder() {
        let a = driver("VER", 43.0, vec![25.0, 18.0]);
        let b = driver("NOR", 18.0, vec![18.0]);
        let text = comparison(&a, &b);
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("+7 VER"));
    }
}
