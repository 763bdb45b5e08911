//! Priority skill selection.
//!
//! A priority skill has a positive level gap and a relevance above
//! [`PRIORITY_RELEVANCE_THRESHOLD`]. Results are ordered by relevance,
//! highest first, with ties kept in input order.

use std::cmp::Reverse;

use crate::learning::Skill;

/// Relevance a skill must exceed to be a priority.
pub const PRIORITY_RELEVANCE_THRESHOLD: u8 = 80;

/// Number of priority skills shown on the dashboard.
pub const DEFAULT_PRIORITY_LIMIT: usize = 3;

/// Whether a skill still needs work and matters enough to surface.
pub fn is_priority(skill: &Skill) -> bool {
    skill.level_gap() > 0 && skill.relevance > PRIORITY_RELEVANCE_THRESHOLD
}

/// Up to `limit` priority skills, most relevant first.
pub fn select_priority_skills(skills: &[Skill], limit: usize) -> Vec<&Skill> {
    let mut selected: Vec<&Skill> = skills.iter().filter(|s| is_priority(s)).collect();
    // `sort_by_key` is stable, so equal relevance keeps input order.
    selected.sort_by_key(|s| Reverse(s.relevance));
    selected.truncate(limit);
    selected
}
