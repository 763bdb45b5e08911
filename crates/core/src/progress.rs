//! Skill progress estimation.
//!
//! Converts a current/target [`SkillLevel`] pair, optionally with points
//! earned toward the skill, into a whole percentage in `0..=100`. Two
//! strategies are supported and selected through [`ProgressConfig`]:
//!
//! - **Level ratio**: position of the current level relative to the target.
//! - **Points based**: earned points scaled to a percentage, capped below
//!   100 until the level-up itself is recorded.
//!
//! Both are monotone in earned points and in the current level.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::learning::{Skill, SkillLevel};
use crate::types::Percent;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Points that make up one scaling step in the points-based strategy.
pub const DEFAULT_POINTS_PER_STEP: u32 = 100;
/// Percentage awarded per scaling step.
pub const DEFAULT_PERCENT_PER_STEP: u32 = 50;
/// Highest percentage reachable through points alone.
pub const DEFAULT_POINTS_CAP: Percent = 99;

const COMPLETE: Percent = 100;

// ---------------------------------------------------------------------------
// Strategy & configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStrategy {
    #[default]
    LevelRatio,
    PointsBased,
}

impl ProgressStrategy {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "level_ratio" => Ok(Self::LevelRatio),
            "points_based" => Ok(Self::PointsBased),
            _ => Err(format!(
                "Invalid progress strategy '{s}'. Must be one of: level_ratio, points_based"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LevelRatio => "level_ratio",
            Self::PointsBased => "points_based",
        }
    }
}

/// Strategy selection plus the tuning constants of the points-based
/// strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    pub strategy: ProgressStrategy,
    pub points_per_step: u32,
    pub percent_per_step: u32,
    pub points_cap: Percent,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            strategy: ProgressStrategy::LevelRatio,
            points_per_step: DEFAULT_POINTS_PER_STEP,
            percent_per_step: DEFAULT_PERCENT_PER_STEP,
            points_cap: DEFAULT_POINTS_CAP,
        }
    }
}

impl ProgressConfig {
    /// Default tuning with the points-based strategy selected.
    pub fn points_based() -> Self {
        Self {
            strategy: ProgressStrategy::PointsBased,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.points_per_step == 0 {
            return Err(CoreError::Validation(
                "points_per_step must be greater than 0".to_string(),
            ));
        }
        if self.points_cap > COMPLETE {
            return Err(CoreError::Validation(format!(
                "points_cap must be at most 100, got {}",
                self.points_cap
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Level-ratio progress: `round(current / target * 100)`.
///
/// Returns 100 when the target is the lowest level or has already been
/// reached.
pub fn level_ratio_progress(current: SkillLevel, target: SkillLevel) -> Percent {
    let (current, target) = (current.index(), target.index());
    if target == 0 || current >= target {
        return COMPLETE;
    }
    (current as f64 / target as f64 * 100.0).round() as Percent
}

/// Points-based progress: earned points scaled by the configured step,
/// capped at `points_cap` while the target level has not been reached.
pub fn points_based_progress(
    current: SkillLevel,
    target: SkillLevel,
    earned_points: u32,
    config: &ProgressConfig,
) -> Percent {
    if current >= target {
        return COMPLETE;
    }
    if earned_points == 0 {
        return 0;
    }
    let per_step = config.points_per_step.max(1) as f64;
    let pct = (earned_points as f64 / per_step * config.percent_per_step as f64).round();
    let cap = config.points_cap.min(COMPLETE);
    pct.min(cap as f64) as Percent
}

/// Progress toward `target` under the configured strategy.
///
/// `earned_points` is ignored by the level-ratio strategy and treated as
/// zero by the points-based strategy when absent.
pub fn skill_progress_percentage(
    current: SkillLevel,
    target: SkillLevel,
    earned_points: Option<u32>,
    config: &ProgressConfig,
) -> Percent {
    match config.strategy {
        ProgressStrategy::LevelRatio => level_ratio_progress(current, target),
        ProgressStrategy::PointsBased => {
            points_based_progress(current, target, earned_points.unwrap_or(0), config)
        }
    }
}

/// Progress for raw level tags.
///
/// An unrecognised target yields 100 since there is nothing to reach; an
/// unrecognised current level with a known target yields 0.
pub fn progress_for_tags(
    current: &str,
    target: &str,
    earned_points: Option<u32>,
    config: &ProgressConfig,
) -> Percent {
    let Ok(target) = SkillLevel::from_str_value(target) else {
        return COMPLETE;
    };
    let Ok(current) = SkillLevel::from_str_value(current) else {
        return 0;
    };
    skill_progress_percentage(current, target, earned_points, config)
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// A validated [`ProgressConfig`] ready to score skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressEstimator {
    config: ProgressConfig,
}

impl ProgressEstimator {
    pub fn new(config: ProgressConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    pub fn estimate(
        &self,
        current: SkillLevel,
        target: SkillLevel,
        earned_points: Option<u32>,
    ) -> Percent {
        skill_progress_percentage(current, target, earned_points, &self.config)
    }

    pub fn estimate_skill(&self, skill: &Skill, earned_points: Option<u32>) -> Percent {
        self.estimate(skill.current_level, skill.target_level, earned_points)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::SkillLevel::*;
    use assert_matches::assert_matches;

    fn points() -> ProgressConfig {
        ProgressConfig::points_based()
    }

    // -- level ratio -------------------------------------------------------

    #[test]
    fn level_ratio_reached_or_exceeded_is_complete() {
        for current in SkillLevel::ALL {
            for target in SkillLevel::ALL {
                if current >= target {
                    assert_eq!(level_ratio_progress(current, target), 100);
                }
            }
        }
    }

    #[test]
    fn level_ratio_beginner_target_is_complete() {
        assert_eq!(level_ratio_progress(Beginner, Beginner), 100);
    }

    #[test]
    fn level_ratio_values() {
        assert_eq!(level_ratio_progress(Beginner, Expert), 0);
        assert_eq!(level_ratio_progress(Intermediate, Advanced), 50);
        assert_eq!(level_ratio_progress(Intermediate, Expert), 33);
        assert_eq!(level_ratio_progress(Advanced, Expert), 67);
    }

    #[test]
    fn level_ratio_is_monotone_in_current_level() {
        let mut last = 0;
        for current in SkillLevel::ALL {
            let pct = level_ratio_progress(current, Expert);
            assert!(pct >= last);
            last = pct;
        }
    }

    // -- points based ------------------------------------------------------

    #[test]
    fn points_based_zero_points_is_zero() {
        assert_eq!(skill_progress_percentage(Beginner, Expert, Some(0), &points()), 0);
        assert_eq!(skill_progress_percentage(Beginner, Expert, None, &points()), 0);
    }

    #[test]
    fn points_based_scales_and_caps_below_complete() {
        let at_100 = skill_progress_percentage(Beginner, Expert, Some(100), &points());
        let at_300 = skill_progress_percentage(Beginner, Expert, Some(300), &points());
        assert_eq!(at_100, 50);
        assert!(at_300 > at_100);
        assert!(at_300 <= 99);
    }

    #[test]
    fn points_based_reached_target_is_complete() {
        assert_eq!(skill_progress_percentage(Expert, Advanced, Some(0), &points()), 100);
        assert_eq!(skill_progress_percentage(Advanced, Advanced, None, &points()), 100);
    }

    #[test]
    fn points_based_is_monotone_in_points() {
        let mut last = 0;
        for earned in (0..=1_000).step_by(7) {
            let pct = skill_progress_percentage(Intermediate, Expert, Some(earned), &points());
            assert!(pct >= last, "{earned} points regressed to {pct}");
            assert!(pct <= 100);
            last = pct;
        }
    }

    #[test]
    fn points_based_uses_configured_constants() {
        let config = ProgressConfig {
            points_per_step: 40,
            percent_per_step: 10,
            points_cap: 90,
            ..points()
        };
        assert_eq!(points_based_progress(Beginner, Advanced, 120, &config), 30);
        assert_eq!(points_based_progress(Beginner, Advanced, 10_000, &config), 90);
    }

    #[test]
    fn points_based_survives_unvalidated_zero_divisor() {
        let config = ProgressConfig {
            points_per_step: 0,
            ..points()
        };
        assert_eq!(points_based_progress(Beginner, Advanced, 10, &config), 99);
    }

    // -- tags --------------------------------------------------------------

    #[test]
    fn tags_unknown_target_is_complete() {
        let config = ProgressConfig::default();
        assert_eq!(progress_for_tags("beginner", "wizard", None, &config), 100);
    }

    #[test]
    fn tags_unknown_current_is_zero() {
        let config = ProgressConfig::default();
        assert_eq!(progress_for_tags("novice", "advanced", None, &config), 0);
    }

    #[test]
    fn tags_known_levels_match_typed_levels() {
        assert_eq!(
            progress_for_tags("beginner", "expert", Some(300), &points()),
            skill_progress_percentage(Beginner, Expert, Some(300), &points())
        );
    }

    // -- config / estimator ------------------------------------------------

    #[test]
    fn config_rejects_zero_points_per_step() {
        let config = ProgressConfig {
            points_per_step: 0,
            ..ProgressConfig::default()
        };
        assert_matches!(ProgressEstimator::new(config), Err(CoreError::Validation(_)));
    }

    #[test]
    fn config_rejects_cap_above_100() {
        let config = ProgressConfig {
            points_cap: 101,
            ..ProgressConfig::default()
        };
        assert_matches!(config.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn estimator_scores_skill() {
        let estimator = ProgressEstimator::new(ProgressConfig::default()).unwrap();
        let skill = Skill::new("s1", "Rust", Intermediate, Advanced, 90);
        assert_eq!(estimator.estimate_skill(&skill, None), 50);
        assert_eq!(
            estimator.estimate_skill(&skill, None),
            estimator.estimate_skill(&skill, None)
        );
    }

    #[test]
    fn strategy_parses_tags() {
        assert_eq!(
            ProgressStrategy::from_str_value("points_based"),
            Ok(ProgressStrategy::PointsBased)
        );
        assert!(ProgressStrategy::from_str_value("random").is_err());
        assert_eq!(ProgressStrategy::LevelRatio.as_str(), "level_ratio");
    }
}
