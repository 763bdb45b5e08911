//! Resource recommendations and the lesson of the day.
//!
//! Recommendations are a seeded shuffle of incomplete resources so the
//! same seed always yields the same picks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::learning::{LearningItem, MicroLesson};

/// Number of recommended resources on the dashboard.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Up to `limit` incomplete resources, shuffled with `seed`.
pub fn recommend_resources(items: &[LearningItem], limit: usize, seed: u64) -> Vec<&LearningItem> {
    let mut pending: Vec<&LearningItem> = items.iter().filter(|i| !i.completed).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    pending.shuffle(&mut rng);
    pending.truncate(limit);
    pending
}

/// The first lesson not yet completed, in catalog order.
pub fn todays_lesson(lessons: &[MicroLesson]) -> Option<&MicroLesson> {
    lessons.iter().find(|l| !l.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::{Difficulty, ResourceType};

    fn items() -> Vec<LearningItem> {
        (1..=8)
            .map(|i| {
                LearningItem::new(
                    format!("r{i}"),
                    format!("R{i}"),
                    ResourceType::Article,
                    Difficulty::Beginner,
                    &["s1"],
                )
                .with_completed(i % 4 == 0)
            })
            .collect()
    }

    #[test]
    fn only_incomplete_resources_are_recommended() {
        let items = items();
        let picks = recommend_resources(&items, 10, 7);
        assert_eq!(picks.len(), 6);
        assert!(picks.iter().all(|i| !i.completed));
    }

    #[test]
    fn same_seed_same_picks() {
        let items = items();
        let a: Vec<&str> = recommend_resources(&items, 3, 42).iter().map(|i| i.id.as_str()).collect();
        let b: Vec<&str> = recommend_resources(&items, 3, 42).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn picks_are_distinct() {
        let items = items();
        let mut ids: Vec<&str> = recommend_resources(&items, 6, 1).iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn all_completed_yields_nothing() {
        let items: Vec<LearningItem> = items().into_iter().map(|i| i.with_completed(true)).collect();
        assert!(recommend_resources(&items, 3, 42).is_empty());
    }

    #[test]
    fn todays_lesson_is_first_incomplete() {
        let lessons = vec![
            MicroLesson::new("l1", "A", "s1", Difficulty::Beginner).with_completed(true),
            MicroLesson::new("l2", "B", "s1", Difficulty::Beginner),
            MicroLesson::new("l3", "C", "s1", Difficulty::Beginner),
        ];
        assert_eq!(todays_lesson(&lessons).map(|l| l.id.as_str()), Some("l2"));
    }

    #[test]
    fn todays_lesson_none_when_all_done() {
        let lessons = vec![MicroLesson::new("l1", "A", "s1", Difficulty::Beginner).with_completed(true)];
        assert!(todays_lesson(&lessons).is_none());
    }
}
