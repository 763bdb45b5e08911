//! Five-step points ladder shown on the dashboard.
//!
//! The maximum attainable points are split into five equal levels. Level
//! widths are fractional when the maximum is not a multiple of five; each
//! boundary is rounded to the nearest whole point. The current step follows
//! the overall progress percentage; the point ranges and the distance to the
//! next level follow the points themselves.

use serde::Serialize;

use crate::types::Percent;

/// Number of rungs on the ladder.
pub const LADDER_STEPS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderStep {
    /// 1-based level number for display.
    pub level: u32,
    pub min_points: u32,
    pub max_points: u32,
    pub completed: bool,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderPosition {
    pub total_points: u32,
    pub max_points: u32,
    /// Unrounded width of one level.
    pub points_per_level: f64,
    /// 0-based index of the current rung.
    pub current_step: u32,
    pub points_to_next_level: u32,
    pub max_level_reached: bool,
    pub steps: Vec<LadderStep>,
}

/// Points at the start of level `index`, i.e. `index * max_points / 5`
/// rounded to the nearest point. Never exceeds `max_points`.
fn level_boundary(index: u32, max_points: u32) -> u32 {
    let scaled = u64::from(index.min(LADDER_STEPS)) * u64::from(max_points);
    let steps = u64::from(LADDER_STEPS);
    ((scaled + steps / 2) / steps) as u32
}

/// Place `total_points` on the ladder.
///
/// `current_step = floor(progress / 100 * 5)`, clamped to the top rung.
/// At 100% every rung is completed and none is marked current.
pub fn ladder_position(total_points: u32, max_points: u32, progress: Percent) -> LadderPosition {
    let progress = progress.min(100) as u32;
    let raw_step = progress * LADDER_STEPS / 100;
    let max_level_reached = progress >= 100;
    let current_step = raw_step.min(LADDER_STEPS - 1);
    let points_per_level = f64::from(max_points) / f64::from(LADDER_STEPS);

    let next_level_points = level_boundary(current_step + 1, max_points);
    let points_to_next_level = next_level_points.saturating_sub(total_points);

    let steps = (0..LADDER_STEPS)
        .map(|index| LadderStep {
            level: index + 1,
            min_points: level_boundary(index, max_points),
            max_points: level_boundary(index + 1, max_points),
            completed: index <= raw_step,
            current: !max_level_reached && index == current_step,
        })
        .collect();

    LadderPosition {
        total_points,
        max_points,
        points_per_level,
        current_step,
        points_to_next_level,
        max_level_reached,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_progress() {
        assert_eq!(ladder_position(0, 500, 0).current_step, 0);
        assert_eq!(ladder_position(0, 500, 19).current_step, 0);
        assert_eq!(ladder_position(0, 500, 20).current_step, 1);
        assert_eq!(ladder_position(0, 500, 99).current_step, 4);
    }

    #[test]
    fn full_progress_completes_every_step() {
        let ladder = ladder_position(500, 500, 100);
        assert!(ladder.max_level_reached);
        assert_eq!(ladder.current_step, 4);
        assert!(ladder.steps.iter().all(|s| s.completed));
        assert!(ladder.steps.iter().all(|s| !s.current));
    }

    #[test]
    fn step_ranges_split_max_points() {
        let ladder = ladder_position(0, 1000, 0);
        assert_eq!(ladder.points_per_level, 200.0);
        let ranges: Vec<(u32, u32)> = ladder.steps.iter().map(|s| (s.min_points, s.max_points)).collect();
        assert_eq!(
            ranges,
            vec![(0, 200), (200, 400), (400, 600), (600, 800), (800, 1000)]
        );
    }

    #[test]
    fn points_to_next_level() {
        // 45% -> step 2, next level at 3 * 200 = 600.
        let ladder = ladder_position(450, 1000, 45);
        assert_eq!(ladder.current_step, 2);
        assert_eq!(ladder.points_to_next_level, 150);
        assert!(ladder.steps[2].current);
        assert!(ladder.steps[2].completed);
        assert!(!ladder.steps[3].completed);
    }

    #[test]
    fn points_beyond_next_level_floor_at_zero() {
        let ladder = ladder_position(900, 1000, 10);
        assert_eq!(ladder.points_to_next_level, 0);
    }

    #[test]
    fn zero_max_points_is_safe() {
        let ladder = ladder_position(0, 0, 0);
        assert_eq!(ladder.points_per_level, 0.0);
        assert_eq!(ladder.points_to_next_level, 0);
        assert_eq!(ladder.steps.len(), 5);
    }

    #[test]
    fn uneven_maximum_rounds_each_boundary() {
        // 503 / 5 = 100.6 points per level.
        let ladder = ladder_position(150, 503, 29);
        assert_eq!(ladder.points_per_level, 100.6);
        let ranges: Vec<(u32, u32)> = ladder.steps.iter().map(|s| (s.min_points, s.max_points)).collect();
        assert_eq!(
            ranges,
            vec![(0, 101), (101, 201), (201, 302), (302, 402), (402, 503)]
        );
        // Step 1, next level at 2 * 100.6 = 201.2.
        assert_eq!(ladder.current_step, 1);
        assert_eq!(ladder.points_to_next_level, 51);
    }

    #[test]
    fn top_level_ends_at_maximum() {
        let ladder = ladder_position(500, 503, 99);
        assert_eq!(ladder.steps[4].max_points, 503);
        assert_eq!(ladder.points_to_next_level, 3);
    }
}
