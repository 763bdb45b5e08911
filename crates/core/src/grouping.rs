//! Per-skill grouping of resources and lessons.
//!
//! Resources relate to skills many-to-many through `skill_ids`; lessons
//! belong to exactly one skill. A reference to an unknown skill simply
//! produces an empty group.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::completion::{completion_stats, CompletionStats};
use crate::learning::{LearningItem, MicroLesson, Skill, SkillLevel, Term};
use crate::types::EntityId;

/// Number of skills shown in the learning plan.
pub const DEFAULT_PLAN_SKILLS: usize = 3;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Resources linked to `skill_id`, in input order.
pub fn items_for_skill<'a>(items: &'a [LearningItem], skill_id: &str) -> Vec<&'a LearningItem> {
    items.iter().filter(|item| item.belongs_to(skill_id)).collect()
}

/// Lessons attached to `skill_id`, in input order.
pub fn lessons_for_skill<'a>(lessons: &'a [MicroLesson], skill_id: &str) -> Vec<&'a MicroLesson> {
    lessons
        .iter()
        .filter(|lesson| lesson.skill_id == skill_id)
        .collect()
}

/// Number of resources and lessons associated with a skill.
pub fn associated_item_count(skill_id: &str, items: &[LearningItem], lessons: &[MicroLesson]) -> usize {
    items.iter().filter(|i| i.belongs_to(skill_id)).count()
        + lessons.iter().filter(|l| l.skill_id == skill_id).count()
}

/// Names of the skills a resource is linked to. Unknown ids are skipped.
pub fn skill_names_for_item<'a>(item: &LearningItem, skills: &'a [Skill]) -> Vec<&'a str> {
    item.skill_ids
        .iter()
        .filter_map(|id| skills.iter().find(|s| &s.id == id))
        .map(|s| s.name.as_str())
        .collect()
}

/// Skills bucketed by planning horizon. Every term is present, possibly
/// with an empty list.
pub fn skills_by_term(skills: &[Skill]) -> BTreeMap<Term, Vec<&Skill>> {
    let mut grouped: BTreeMap<Term, Vec<&Skill>> =
        Term::ALL.iter().map(|&t| (t, Vec::new())).collect();
    for skill in skills {
        grouped.entry(skill.term).or_default().push(skill);
    }
    grouped
}

// ---------------------------------------------------------------------------
// Learning plan
// ---------------------------------------------------------------------------

/// One skill's slice of the learning plan.
#[derive(Debug, Clone, Serialize)]
pub struct SkillPlan {
    pub skill_id: EntityId,
    pub skill_name: String,
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
    pub lessons: Vec<MicroLesson>,
    pub resources: Vec<LearningItem>,
    pub lesson_completion: CompletionStats,
}

/// Plan for the first `limit` skills in catalog order.
pub fn build_learning_plan(
    skills: &[Skill],
    items: &[LearningItem],
    lessons: &[MicroLesson],
    limit: usize,
) -> Vec<SkillPlan> {
    skills
        .iter()
        .take(limit)
        .map(|skill| {
            let skill_lessons = lessons_for_skill(lessons, &skill.id);
            SkillPlan {
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                current_level: skill.current_level,
                target_level: skill.target_level,
                lesson_completion: completion_stats(&skill_lessons),
                lessons: skill_lessons.into_iter().cloned().collect(),
                resources: items_for_skill(items, &skill.id).into_iter().cloned().collect(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
