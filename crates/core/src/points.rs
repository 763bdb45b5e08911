//! Difficulty-based point scoring.
//!
//! Completed lessons and resources earn points according to their
//! difficulty. The aggregate functions are pure and order-independent.

use crate::learning::{Difficulty, LearningItem, MicroLesson};

// ---------------------------------------------------------------------------
// Point values
// ---------------------------------------------------------------------------

pub const BEGINNER_POINTS: u32 = 10;
pub const INTERMEDIATE_POINTS: u32 = 25;
pub const ADVANCED_POINTS: u32 = 50;

/// Awarded for a difficulty tag that is not recognised.
pub const UNRECOGNIZED_DIFFICULTY_POINTS: u32 = 5;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Anything that carries a difficulty and can therefore be scored.
pub trait Scored {
    fn difficulty(&self) -> Difficulty;
}

impl Scored for MicroLesson {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Scored for LearningItem {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Fixed point value for a difficulty.
pub fn points_for_difficulty(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Beginner => BEGINNER_POINTS,
        Difficulty::Intermediate => INTERMEDIATE_POINTS,
        Difficulty::Advanced => ADVANCED_POINTS,
    }
}

/// Point value for a raw difficulty tag. Unknown tags fall back to
/// [`UNRECOGNIZED_DIFFICULTY_POINTS`].
pub fn points_for_tag(tag: &str) -> u32 {
    Difficulty::from_str_value(tag)
        .map(points_for_difficulty)
        .unwrap_or(UNRECOGNIZED_DIFFICULTY_POINTS)
}

fn sum_points<T: Scored>(items: &[T]) -> u32 {
    items
        .iter()
        .map(|item| points_for_difficulty(item.difficulty()))
        .sum()
}

/// Sum of point values across completed lessons and completed resources.
///
/// Callers must pass only completed entries; completion is not checked
/// here. Use [`total_completed_points`] for unfiltered collections.
pub fn total_points(completed_lessons: &[MicroLesson], completed_resources: &[LearningItem]) -> u32 {
    sum_points(completed_lessons) + sum_points(completed_resources)
}

/// Like [`total_points`], but filters both collections to `completed`
/// entries first.
pub fn total_completed_points(lessons: &[MicroLesson], resources: &[LearningItem]) -> u32 {
    let lesson_points: u32 = lessons
        .iter()
        .filter(|l| l.completed)
        .map(|l| points_for_difficulty(l.difficulty))
        .sum();
    let resource_points: u32 = resources
        .iter()
        .filter(|r| r.completed)
        .map(|r| points_for_difficulty(r.difficulty))
        .sum();
    lesson_points + resource_points
}

/// Points earned toward one skill: completed resources linked to it plus
/// completed lessons attached to it.
pub fn earned_points_for_skill(
    skill_id: &str,
    resources: &[LearningItem],
    lessons: &[MicroLesson],
) -> u32 {
    let resource_points: u32 = resources
        .iter()
        .filter(|r| r.completed && r.belongs_to(skill_id))
        .map(|r| points_for_difficulty(r.difficulty))
        .sum();
    let lesson_points: u32 = lessons
        .iter()
        .filter(|l| l.completed && l.skill_id == skill_id)
        .map(|l| points_for_difficulty(l.difficulty))
        .sum();
    resource_points + lesson_points
}

/// Points available if every lesson and resource were completed.
pub fn max_attainable_points(lessons: &[MicroLesson], resources: &[LearningItem]) -> u32 {
    total_points(lessons, resources)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
