//! Per-speed summary of an income series

use serde::{Deserialize, Serialize};

use super::income_calculator::{time_bonus, INGAME_DAY_SCALE, MIN_TIME_BONUS};
use crate::model::{CargoKind, IncomeSample};

/// Summary of one speed group of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedSummary {
    pub speed: f64,
    pub samples: usize,
    /// Distance with the highest income (first one on ties)
    pub best_distance: f64,
    pub best_income: f64,
    /// Transit time at the best distance (ingame days)
    pub best_time: f64,
    /// First distance at which the time bonus fell to the floor
    pub floor_distance: Option<f64>,
}

/// Summarize a series group by group.
///
/// A new group starts whenever the speed changes or the distance stops
/// increasing, which matches the layout produced by `generate_series`.
pub fn summarize_series(cargo: &CargoKind, samples: &[IncomeSample]) -> Vec<SpeedSummary> {
    let mut summaries: Vec<SpeedSummary> = Vec::new();
    let mut previous: Option<&IncomeSample> = None;

    for sample in samples {
        let starts_group = match previous {
            Some(p) => p.speed != sample.speed || sample.distance <= p.distance,
            None => true,
        };
        let floored = time_bonus(cargo, sample.time * INGAME_DAY_SCALE) < MIN_TIME_BONUS;

        if starts_group {
            summaries.push(SpeedSummary {
                speed: sample.speed,
                samples: 1,
                best_distance: sample.distance,
                best_income: sample.income,
                best_time: sample.time,
                floor_distance: floored.then_some(sample.distance),
            });
        } else if let Some(summary) = summaries.last_mut() {
            summary.samples += 1;
            if sample.income > summary.best_income {
                summary.best_distance = sample.distance;
                summary.best_income = sample.income;
                summary.best_time = sample.time;
            }
            if floored && summary.floor_distance.is_none() {
                summary.floor_distance = Some(sample.distance);
            }
        }
        previous = Some(sample);
    }

    summaries
}

pub fn render_series_report(cargo: &CargoKind, summaries: &[SpeedSummary]) -> String {
    let mut report = String::new();
    report.push_str("==================================================================\n");
    report.push_str("                       Cargo Income Report                        \n");
    report.push_str("==================================================================\n\n");
    report.push_str(&format!("  Cargo:      {}\n", cargo.name));
    report.push_str(&format!("  Base pay:   {}\n", cargo.base_pay));
    report.push_str(&format!("  Days1/2:    {} / {}\n", cargo.days1, cargo.days2));
    report.push_str(&format!("  Series:     {}\n\n", summaries.len()));

    if summaries.is_empty() {
        report.push_str("  No samples.\n\n");
    } else {
        report.push_str(&format!(
            "{:>10} {:>8} {:>12} {:>12} {:>12} {:>12}\n",
            "Speed", "Samples", "Best dist", "Days", "Income", "Floor at"
        ));
        report.push_str("-".repeat(71).as_str());
        report.push('\n');
        for summary in summaries {
            let floor = summary
                .floor_distance
                .map(|d| format!("{:.0}", d))
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "{:>6.0}km/h {:>8} {:>12.0} {:>12.2} {:>12.4} {:>12}\n",
                summary.speed,
                summary.samples,
                summary.best_distance,
                summary.best_time,
                summary.best_income,
                floor
            ));
        }
        report.push('\n');
    }

    report.push_str("  Income is per cargo unit.\n");
    report.push_str("==================================================================\n");
    report
}
