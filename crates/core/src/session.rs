//! Completions recorded during a single viewing session.
//!
//! The catalog loaded from the repository is never mutated. A
//! [`CompletionSession`] overlays the ids the user finished locally and
//! reports effective completion and the points those completions earned.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::learning::{LearningItem, MicroLesson};
use crate::points::total_points;
use crate::quiz::QuizSession;
use crate::types::EntityId;

#[derive(Debug, Clone, Default)]
pub struct CompletionSession {
    lessons: BTreeSet<EntityId>,
    resources: BTreeSet<EntityId>,
}

impl CompletionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a lesson complete. A lesson with a quiz needs that quiz
    /// finished first. Returns `false` if the lesson was already complete.
    pub fn complete_lesson(
        &mut self,
        lesson: &MicroLesson,
        quiz: Option<&QuizSession>,
    ) -> Result<bool, CoreError> {
        if lesson.has_quiz && !quiz.is_some_and(QuizSession::is_finished) {
            return Err(CoreError::Validation(format!(
                "Quiz for lesson {} must be finished first",
                lesson.id
            )));
        }
        if self.is_lesson_completed(lesson) {
            return Ok(false);
        }
        Ok(self.lessons.insert(lesson.id.clone()))
    }

    /// Mark a resource complete. Returns `false` if it already was.
    pub fn complete_resource(&mut self, item: &LearningItem) -> bool {
        if self.is_resource_completed(item) {
            return false;
        }
        self.resources.insert(item.id.clone())
    }

    pub fn is_lesson_completed(&self, lesson: &MicroLesson) -> bool {
        lesson.completed || self.lessons.contains(&lesson.id)
    }

    pub fn is_resource_completed(&self, item: &LearningItem) -> bool {
        item.completed || self.resources.contains(&item.id)
    }

    /// Points earned by this session's completions alone.
    pub fn newly_earned_points(&self, lessons: &[MicroLesson], items: &[LearningItem]) -> u32 {
        let new_lessons: Vec<MicroLesson> = lessons
            .iter()
            .filter(|l| !l.completed && self.lessons.contains(&l.id))
            .cloned()
            .collect();
        let new_items: Vec<LearningItem> = items
            .iter()
            .filter(|i| !i.completed && self.resources.contains(&i.id))
            .cloned()
            .collect();
        total_points(&new_lessons, &new_items)
    }

    /// Catalog copies with session completions applied.
    pub fn apply(&self, lessons: &[MicroLesson], items: &[LearningItem]) -> (Vec<MicroLesson>, Vec<LearningItem>) {
        let lessons = lessons
            .iter()
            .map(|l| l.clone().with_completed(self.is_lesson_completed(l)))
            .collect();
        let items = items
            .iter()
            .map(|i| i.clone().with_completed(self.is_resource_completed(i)))
            .collect();
        (lessons, items)
    }
}
