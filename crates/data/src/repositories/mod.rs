//! Repository layer.
//!
//! [`LearningRepository`] is the async port the service layer depends on.
//! Implementations hand out owned copies; callers never mutate stored data.

mod in_memory;

use async_trait::async_trait;
use skillpath_core::learning::{LearningItem, MicroLesson, ProgressData, Skill};
use skillpath_core::quiz::QuizQuestion;

use crate::error::RepositoryError;

pub use in_memory::{InMemoryRepository, LatencyProfile};

/// Read access to the learner's skills, resources, lessons and progress.
#[async_trait]
pub trait LearningRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, RepositoryError>;

    async fn list_learning_items(&self) -> Result<Vec<LearningItem>, RepositoryError>;

    async fn list_micro_lessons(&self) -> Result<Vec<MicroLesson>, RepositoryError>;

    async fn progress_data(&self) -> Result<ProgressData, RepositoryError>;

    /// Look up one lesson. Unknown ids are `Ok(None)`.
    async fn find_micro_lesson(&self, id: &str) -> Result<Option<MicroLesson>, RepositoryError>;

    /// Quiz questions for a lesson. `Ok(None)` when the lesson has no quiz.
    async fn quiz_for_lesson(
        &self,
        lesson_id: &str,
    ) -> Result<Option<Vec<QuizQuestion>>, RepositoryError>;
}
