//! Chart-ready rankings of skills by progress.
//!
//! Rows are sorted by progress (highest first, stable), truncated to the
//! configured limit and tagged with a [`ColorTier`]. A skill only reaches
//! the `full` tier when it is at 100% *and* has enough associated items,
//! so a single trivial item cannot make a skill look mastered.

use serde::{Deserialize, Serialize};

use crate::completion::ratio_percentage;
use crate::error::CoreError;
use crate::grouping::{associated_item_count, items_for_skill};
use crate::learning::{LearningItem, MicroLesson, ResourceType, Skill};
use crate::points::earned_points_for_skill;
use crate::progress::ProgressEstimator;
use crate::types::{EntityId, Percent};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Number of rows in a progress chart.
pub const DEFAULT_CHART_LIMIT: usize = 5;

/// Minimum associated items for the `full` tier.
pub const DEFAULT_FULL_MIN_ITEMS: usize = 3;

/// Progress strictly above this is `good`.
pub const GOOD_TIER_THRESHOLD: Percent = 50;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    Full,
    Good,
    Limited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub limit: usize,
    pub full_min_items: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CHART_LIMIT,
            full_min_items: DEFAULT_FULL_MIN_ITEMS,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.limit == 0 {
            return Err(CoreError::Validation(
                "chart limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// One bar of a progress chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub skill_id: EntityId,
    pub name: String,
    pub progress: Percent,
    pub total_items: usize,
    pub tier: ColorTier,
}

/// Course completion for one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCourseProgress {
    pub skill_id: EntityId,
    pub name: String,
    pub total_courses: usize,
    pub completed_courses: usize,
    pub percentage: Percent,
}

/// Course completion across every skill that has courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub total_courses: usize,
    pub completed_courses: usize,
    pub percentage: Percent,
}

// ---------------------------------------------------------------------------
// Tiering & ranking
// ---------------------------------------------------------------------------

pub fn classify_tier(progress: Percent, total_items: usize, full_min_items: usize) -> ColorTier {
    if progress == 100 && total_items >= full_min_items {
        ColorTier::Full
    } else if progress > GOOD_TIER_THRESHOLD {
        ColorTier::Good
    } else {
        ColorTier::Limited
    }
}

/// Rank `(skill, progress, total_items)` rows for display.
pub fn rank_for_chart<'a, I>(rows: I, config: &ChartConfig) -> Vec<ChartEntry>
where
    I: IntoIterator<Item = (&'a Skill, Percent, usize)>,
{
    let mut rows: Vec<(&Skill, Percent, usize)> = rows.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .take(config.limit)
        .map(|(skill, progress, total_items)| ChartEntry {
            skill_id: skill.id.clone(),
            name: skill.name.clone(),
            progress,
            total_items,
            tier: classify_tier(progress, total_items, config.full_min_items),
        })
        .collect()
}

/// Top skills by estimated progress. Earned points per skill are derived
/// from completed resources and lessons so the points-based strategy has
/// something to work with.
pub fn skill_progress_chart(
    skills: &[Skill],
    items: &[LearningItem],
    lessons: &[MicroLesson],
    estimator: &ProgressEstimator,
    config: &ChartConfig,
) -> Vec<ChartEntry> {
    let rows = skills.iter().map(|skill| {
        let earned = earned_points_for_skill(&skill.id, items, lessons);
        let progress = estimator.estimate_skill(skill, Some(earned));
        let total = associated_item_count(&skill.id, items, lessons);
        (skill, progress, total)
    });
    rank_for_chart(rows, config)
}

// ---------------------------------------------------------------------------
// Course progress
// ---------------------------------------------------------------------------

/// Course completion per skill. Skills with no courses are omitted.
pub fn course_progress_by_skill(skills: &[Skill], items: &[LearningItem]) -> Vec<SkillCourseProgress> {
    skills
        .iter()
        .filter_map(|skill| {
            let courses: Vec<&LearningItem> = items_for_skill(items, &skill.id)
                .into_iter()
                .filter(|i| i.resource_type == ResourceType::Course)
                .collect();
            if courses.is_empty() {
                return None;
            }
            let completed = courses.iter().filter(|c| c.completed).count();
            Some(SkillCourseProgress {
                skill_id: skill.id.clone(),
                name: skill.name.clone(),
                total_courses: courses.len(),
                completed_courses: completed,
                percentage: ratio_percentage(completed, courses.len()),
            })
        })
        .collect()
}

pub fn course_summary(progress: &[SkillCourseProgress]) -> CourseSummary {
    let total_courses = progress.iter().map(|p| p.total_courses).sum();
    let completed_courses = progress.iter().map(|p| p.completed_courses).sum();
    CourseSummary {
        total_courses,
        completed_courses,
        percentage: ratio_percentage(completed_courses, total_courses),
    }
}

/// Top skills by course completion, tiered by course count.
pub fn course_progress_chart(
    skills: &[Skill],
    progress: &[SkillCourseProgress],
    config: &ChartConfig,
) -> Vec<ChartEntry> {
    let rows = progress.iter().filter_map(|p| {
        skills
            .iter()
            .find(|s| s.id == p.skill_id)
            .map(|skill| (skill, p.percentage, p.total_courses))
    });
    rank_for_chart(rows, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::Difficulty;
    use crate::learning::SkillLevel::{Advanced, Beginner, Expert, Intermediate};
    use crate::progress::ProgressConfig;

    fn course(id: &str, skills: &[&str], completed: bool) -> LearningItem {
        LearningItem::new(id, id, ResourceType::Course, Difficulty::Advanced, skills)
            .with_completed(completed)
    }

    // -- classify_tier -----------------------------------------------------

    #[test]
    fn full_requires_enough_items() {
        assert_eq!(classify_tier(100, 3, 3), ColorTier::Full);
        assert_eq!(classify_tier(100, 1, 3), ColorTier::Good);
    }

    #[test]
    fn good_is_strictly_above_fifty() {
        assert_eq!(classify_tier(51, 10, 3), ColorTier::Good);
        assert_eq!(classify_tier(50, 10, 3), ColorTier::Limited);
        assert_eq!(classify_tier(0, 0, 3), ColorTier::Limited);
    }

    #[test]
    fn tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ColorTier::Limited).unwrap(), "\"limited\"");
    }

    // -- rank_for_chart ----------------------------------------------------

    #[test]
    fn ranks_descending_and_truncates() {
        let skills: Vec<Skill> = (0..7)
            .map(|i| Skill::new(format!("s{i}"), format!("S{i}"), Beginner, Expert, 90))
            .collect();
        let rows = skills.iter().enumerate().map(|(i, s)| (s, (i * 10) as Percent, 3));
        let chart = rank_for_chart(rows, &ChartConfig::default());
        let ids: Vec<&str> = chart.iter().map(|e| e.skill_id.as_str()).collect();
        assert_eq!(ids, vec!["s6", "s5", "s4", "s3", "s2"]);
    }

    #[test]
    fn equal_progress_keeps_input_order() {
        let a = Skill::new("a", "A", Beginner, Expert, 90);
        let b = Skill::new("b", "B", Beginner, Expert, 90);
        let chart = rank_for_chart(vec![(&a, 40, 1), (&b, 40, 1)], &ChartConfig::default());
        assert_eq!(chart[0].skill_id, "a");
        assert_eq!(chart[1].skill_id, "b");
    }

    #[test]
    fn full_min_items_is_configurable() {
        let a = Skill::new("a", "A", Advanced, Advanced, 90);
        let config = ChartConfig {
            full_min_items: 1,
            ..ChartConfig::default()
        };
        let chart = rank_for_chart(vec![(&a, 100, 1)], &config);
        assert_eq!(chart[0].tier, ColorTier::Full);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = ChartConfig {
            limit: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // -- skill_progress_chart ----------------------------------------------

    #[test]
    fn single_item_mastered_skill_is_not_full() {
        let skills = vec![
            Skill::new("done", "Done", Advanced, Advanced, 90),
            Skill::new("busy", "Busy", Intermediate, Advanced, 90),
        ];
        let items = vec![course("r1", &["done"], true)];
        let estimator = ProgressEstimator::default();
        let chart = skill_progress_chart(&skills, &items, &[], &estimator, &ChartConfig::default());
        assert_eq!(chart[0].skill_id, "done");
        assert_eq!(chart[0].progress, 100);
        assert_eq!(chart[0].tier, ColorTier::Good);
        assert_eq!(chart[1].progress, 50);
        assert_eq!(chart[1].tier, ColorTier::Limited);
    }

    #[test]
    fn points_strategy_uses_earned_points_per_skill() {
        let skills = vec![Skill::new("s1", "A", Beginner, Expert, 90)];
        let items = vec![course("r1", &["s1"], true), course("r2", &["s1"], true)];
        let estimator = ProgressEstimator::new(ProgressConfig::points_based()).unwrap();
        let chart = skill_progress_chart(&skills, &items, &[], &estimator, &ChartConfig::default());
        // 100 earned points at 50% per 100 points.
        assert_eq!(chart[0].progress, 50);
        assert_eq!(chart[0].total_items, 2);
    }

    // -- course progress ---------------------------------------------------

    #[test]
    fn course_progress_skips_skills_without_courses() {
        let skills = vec![
            Skill::new("s1", "A", Beginner, Expert, 90),
            Skill::new("s2", "B", Beginner, Expert, 90),
        ];
        let items = vec![
            course("c1", &["s1"], true),
            course("c2", &["s1"], false),
            LearningItem::new("v1", "V", ResourceType::Video, Difficulty::Beginner, &["s2"]),
        ];
        let progress = course_progress_by_skill(&skills, &items);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].total_courses, 2);
        assert_eq!(progress[0].completed_courses, 1);
        assert_eq!(progress[0].percentage, 50);
    }

    #[test]
    fn course_summary_totals() {
        let skills = vec![
            Skill::new("s1", "A", Beginner, Expert, 90),
            Skill::new("s2", "B", Beginner, Expert, 90),
        ];
        let items = vec![
            course("c1", &["s1"], true),
            course("c2", &["s2"], true),
            course("c3", &["s2"], false),
        ];
        let summary = course_summary(&course_progress_by_skill(&skills, &items));
        assert_eq!(summary.total_courses, 3);
        assert_eq!(summary.completed_courses, 2);
        assert_eq!(summary.percentage, 67);
    }

    #[test]
    fn course_summary_of_nothing_is_zero() {
        assert_eq!(course_summary(&[]).percentage, 0);
    }

    #[test]
    fn course_chart_tiers_by_course_count() {
        let skills = vec![Skill::new("s1", "A", Beginner, Expert, 90)];
        let items = vec![
            course("c1", &["s1"], true),
            course("c2", &["s1"], true),
            course("c3", &["s1"], true),
        ];
        let progress = course_progress_by_skill(&skills, &items);
        let chart = course_progress_chart(&skills, &progress, &ChartConfig::default());
        assert_eq!(chart[0].progress, 100);
        assert_eq!(chart[0].tier, ColorTier::Full);
    }
}
