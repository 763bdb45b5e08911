//! View-ready snapshots assembled from a loaded catalog.
//!
//! [`build_dashboard`] and [`skills_analysis`] combine the per-concern
//! functions of this crate into the structures the dashboard renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::{skill_progress_chart, ChartConfig, ChartEntry};
use crate::completion::ratio_percentage;
use crate::error::CoreError;
use crate::grouping::{skills_by_term, DEFAULT_PLAN_SKILLS};
use crate::ladder::{ladder_position, LadderPosition};
use crate::learning::{LearningItem, MicroLesson, ProgressData, Skill, SkillLevel, Term};
use crate::points::{earned_points_for_skill, max_attainable_points, total_completed_points};
use crate::priority::{select_priority_skills, DEFAULT_PRIORITY_LIMIT};
use crate::progress::{level_ratio_progress, ProgressConfig, ProgressEstimator};
use crate::recommendation::{recommend_resources, todays_lesson, DEFAULT_RECOMMENDATION_LIMIT};
use crate::types::{EntityId, Percent};
use crate::weekly::{summarize_week, WeeklySummary, DEFAULT_WEEKLY_TARGET};

/// Seed used when none is configured.
pub const DEFAULT_RECOMMENDATION_SEED: u64 = 42;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for every derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub progress: ProgressConfig,
    pub chart: ChartConfig,
    pub priority_limit: usize,
    pub recommendation_limit: usize,
    pub recommendation_seed: u64,
    pub weekly_target: Percent,
    pub plan_skills: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            progress: ProgressConfig::default(),
            chart: ChartConfig::default(),
            priority_limit: DEFAULT_PRIORITY_LIMIT,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            recommendation_seed: DEFAULT_RECOMMENDATION_SEED,
            weekly_target: DEFAULT_WEEKLY_TARGET,
            plan_skills: DEFAULT_PLAN_SKILLS,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.progress.validate()?;
        self.chart.validate()?;
        if self.weekly_target > 100 {
            return Err(CoreError::Validation(format!(
                "weekly target must be at most 100, got {}",
                self.weekly_target
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dashboard snapshot
// ---------------------------------------------------------------------------

/// The four headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricCards {
    pub skills_in_progress: usize,
    pub lessons_completed: u32,
    pub streak_days: u32,
    pub resources_viewed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritySkillView {
    pub skill_id: EntityId,
    pub name: String,
    pub category: String,
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
    pub progress: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub metrics: MetricCards,
    pub priority_skills: Vec<PrioritySkillView>,
    pub todays_lesson: Option<MicroLesson>,
    pub recommended_resources: Vec<LearningItem>,
    pub weekly: WeeklySummary,
    /// Points computed from the catalog's completed lessons and resources.
    pub total_points: u32,
    /// Total reported by the progress record.
    pub reported_points: u32,
    pub ladder: LadderPosition,
    pub skill_chart: Vec<ChartEntry>,
}

pub fn build_dashboard(
    skills: &[Skill],
    items: &[LearningItem],
    lessons: &[MicroLesson],
    progress: &ProgressData,
    config: &DashboardConfig,
) -> Result<DashboardSnapshot, CoreError> {
    let estimator = ProgressEstimator::new(config.progress)?;
    config.chart.validate()?;

    let priority_skills = select_priority_skills(skills, config.priority_limit)
        .into_iter()
        .map(|skill| {
            let earned = earned_points_for_skill(&skill.id, items, lessons);
            PrioritySkillView {
                skill_id: skill.id.clone(),
                name: skill.name.clone(),
                category: skill.category.clone(),
                current_level: skill.current_level,
                target_level: skill.target_level,
                progress: estimator.estimate_skill(skill, Some(earned)),
            }
        })
        .collect();

    let total_points = total_completed_points(lessons, items);
    let max_points = max_attainable_points(lessons, items);
    let overall = ratio_percentage(total_points as usize, max_points as usize);

    Ok(DashboardSnapshot {
        metrics: MetricCards {
            skills_in_progress: skills.len(),
            lessons_completed: progress.lessons_completed,
            streak_days: progress.streak_days,
            resources_viewed: progress.resources_viewed,
        },
        priority_skills,
        todays_lesson: todays_lesson(lessons).cloned(),
        recommended_resources: recommend_resources(
            items,
            config.recommendation_limit,
            config.recommendation_seed,
        )
        .into_iter()
        .cloned()
        .collect(),
        weekly: summarize_week(&progress.weekly_progress, config.weekly_target),
        total_points,
        reported_points: progress.total_points,
        ladder: ladder_position(total_points, max_points, overall),
        skill_chart: skill_progress_chart(skills, items, lessons, &estimator, &config.chart),
    })
}

// ---------------------------------------------------------------------------
// Skills analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAnalysis {
    pub skill_id: EntityId,
    pub name: String,
    pub category: String,
    pub current_level: SkillLevel,
    pub current_label: &'static str,
    pub target_level: SkillLevel,
    pub target_label: &'static str,
    pub level_gap: i32,
    pub relevance: u8,
    pub term: Term,
    pub progress: Percent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsOverview {
    pub skills: Vec<SkillAnalysis>,
    /// Skill ids per planning term; every term is present.
    pub by_term: BTreeMap<Term, Vec<EntityId>>,
}

/// Every skill with its level-ratio progress, plus the term grouping.
pub fn skills_analysis(skills: &[Skill]) -> SkillsOverview {
    let analysis = skills
        .iter()
        .map(|skill| SkillAnalysis {
            skill_id: skill.id.clone(),
            name: skill.name.clone(),
            category: skill.category.clone(),
            current_level: skill.current_level,
            current_label: skill.current_level.label(),
            target_level: skill.target_level,
            target_label: skill.target_level.label(),
            level_gap: skill.level_gap(),
            relevance: skill.relevance,
            term: skill.term,
            progress: level_ratio_progress(skill.current_level, skill.target_level),
        })
        .collect();

    let by_term = skills_by_term(skills)
        .into_iter()
        .map(|(term, group)| (term, group.into_iter().map(|s| s.id.clone()).collect()))
        .collect();

    SkillsOverview {
        skills: analysis,
        by_term,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
