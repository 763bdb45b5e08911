//! Weekly activity summaries.
//!
//! The weekly sequence holds one completion percentage per day, Monday
//! first.

use chrono::Weekday;
use serde::Serialize;

use crate::learning::WEEK_DAYS;
use crate::types::Percent;

/// Default daily target used to flag a day as met.
pub const DEFAULT_WEEKLY_TARGET: Percent = 70;

/// One day of the weekly breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayProgress {
    pub day: Weekday,
    pub label: &'static str,
    pub progress: Percent,
    pub target_met: bool,
}

/// Weekly average plus the per-day breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub average: Percent,
    pub target: Percent,
    pub days_meeting_target: usize,
    pub days: Vec<DayProgress>,
}

fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// `round(sum / 7)`, clamped to 100. Days missing from a short sequence
/// count as zero.
pub fn average_weekly_progress(values: &[Percent]) -> Percent {
    let sum: u32 = values.iter().take(WEEK_DAYS).map(|&v| v as u32).sum();
    let avg = (sum as f64 / WEEK_DAYS as f64).round() as u32;
    avg.min(100) as Percent
}

/// Per-day values paired with their weekday, Monday first.
pub fn weekly_breakdown(values: &[Percent], target: Percent) -> Vec<DayProgress> {
    let mut day = Weekday::Mon;
    values
        .iter()
        .take(WEEK_DAYS)
        .map(|&progress| {
            let entry = DayProgress {
                day,
                label: day_label(day),
                progress,
                target_met: progress >= target,
            };
            day = day.succ();
            entry
        })
        .collect()
}

pub fn days_meeting_target(values: &[Percent], target: Percent) -> usize {
    values
        .iter()
        .take(WEEK_DAYS)
        .filter(|&&v| v >= target)
        .count()
}

pub fn summarize_week(values: &[Percent], target: Percent) -> WeeklySummary {
    WeeklySummary {
        average: average_weekly_progress(values),
        target,
        days_meeting_target: days_meeting_target(values, target),
        days: weekly_breakdown(values, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: [Percent; 7] = [65, 70, 75, 80, 60, 0, 0];

    #[test]
    fn average_divides_by_seven() {
        // 350 / 7 = 50
        assert_eq!(average_weekly_progress(&WEEK), 50);
    }

    #[test]
    fn average_of_empty_week_is_zero() {
        assert_eq!(average_weekly_progress(&[]), 0);
    }

    #[test]
    fn average_rounds() {
        // 10 / 7 = 1.43
        assert_eq!(average_weekly_progress(&[10, 0, 0, 0, 0, 0, 0]), 1);
        // 25 / 7 = 3.57
        assert_eq!(average_weekly_progress(&[25, 0, 0, 0, 0, 0, 0]), 4);
    }

    #[test]
    fn breakdown_starts_on_monday() {
        let days = weekly_breakdown(&WEEK, 70);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].day, Weekday::Mon);
        assert_eq!(days[6].day, Weekday::Sun);
        assert_eq!(days[3].label, "Thu");
    }

    #[test]
    fn target_met_is_inclusive() {
        let days = weekly_breakdown(&WEEK, 70);
        let met: Vec<bool> = days.iter().map(|d| d.target_met).collect();
        assert_eq!(met, vec![false, true, true, true, false, false, false]);
        assert_eq!(days_meeting_target(&WEEK, 70), 3);
    }

    #[test]
    fn summary_combines_parts() {
        let summary = summarize_week(&WEEK, 75);
        assert_eq!(summary.average, 50);
        assert_eq!(summary.days_meeting_target, 2);
        assert_eq!(summary.days.len(), 7);
    }
}
