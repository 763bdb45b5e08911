use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use skillpath_core::learning::{LearningItem, MicroLesson, ProgressData, Skill};
use skillpath_core::quiz::QuizQuestion;

use super::LearningRepository;
use crate::error::RepositoryError;
use crate::seed::{self, SeedData};

// ---------------------------------------------------------------------------
// Latency
// ---------------------------------------------------------------------------

/// Artificial delay applied before each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub skills: Duration,
    pub learning_items: Duration,
    pub micro_lessons: Duration,
    pub progress: Duration,
    pub single_lesson: Duration,
}

impl LatencyProfile {
    pub const fn none() -> Self {
        Self {
            skills: Duration::ZERO,
            learning_items: Duration::ZERO,
            micro_lessons: Duration::ZERO,
            progress: Duration::ZERO,
            single_lesson: Duration::ZERO,
        }
    }

    /// Delays of a slow remote backend.
    pub const fn simulated() -> Self {
        Self {
            skills: Duration::from_millis(500),
            learning_items: Duration::from_millis(600),
            micro_lessons: Duration::from_millis(300),
            progress: Duration::from_millis(400),
            single_lesson: Duration::from_millis(200),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::none()
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Learning data held in process memory.
#[derive(Debug)]
pub struct InMemoryRepository {
    data: SeedData,
    latency: LatencyProfile,
    available: AtomicBool,
}

fn ensure_unique<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), RepositoryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::InvalidRecord(format!(
                "duplicate {collection} id '{id}'"
            )));
        }
    }
    Ok(())
}

/// Every quiz lesson has questions, and every quiz belongs to a quiz lesson.
fn ensure_quizzes_match(data: &SeedData) -> Result<(), RepositoryError> {
    for lesson in data.micro_lessons.iter().filter(|l| l.has_quiz) {
        match data.quizzes.get(&lesson.id) {
            Some(questions) if !questions.is_empty() => {}
            _ => {
                return Err(RepositoryError::InvalidRecord(format!(
                    "micro lesson '{}' has a quiz but no questions",
                    lesson.id
                )))
            }
        }
    }
    for lesson_id in data.quizzes.keys() {
        let owner = data.micro_lessons.iter().find(|l| &l.id == lesson_id);
        if !owner.is_some_and(|l| l.has_quiz) {
            return Err(RepositoryError::InvalidRecord(format!(
                "quiz for '{lesson_id}' has no matching quiz lesson"
            )));
        }
    }
    Ok(())
}

impl InMemoryRepository {
    /// Wrap a catalog. Ids must be unique within each collection and
    /// quizzes must line up with the lessons flagged as having one.
    pub fn new(data: SeedData) -> Result<Self, RepositoryError> {
        ensure_unique("skill", data.skills.iter().map(|s| s.id.as_str()))?;
        ensure_unique("learning item", data.learning_items.iter().map(|i| i.id.as_str()))?;
        ensure_unique("micro lesson", data.micro_lessons.iter().map(|l| l.id.as_str()))?;
        ensure_quizzes_match(&data)?;
        Ok(Self {
            data,
            latency: LatencyProfile::none(),
            available: AtomicBool::new(true),
        })
    }

    /// The built-in sample catalog.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Self::new(seed::seed_data())
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Toggle availability; reads fail with `Unavailable` while offline.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Unavailable(
                "in-memory repository is offline".to_string(),
            ))
        }
    }
}

#[async_trait]
impl LearningRepository for InMemoryRepository {
    async fn list_skills(&self) -> Result<Vec<Skill>, RepositoryError> {
        pause(self.latency.skills).await;
        self.check_available()?;
        tracing::debug!(count = self.data.skills.len(), "Listed skills");
        Ok(self.data.skills.clone())
    }

    async fn list_learning_items(&self) -> Result<Vec<LearningItem>, RepositoryError> {
        pause(self.latency.learning_items).await;
        self.check_available()?;
        tracing::debug!(count = self.data.learning_items.len(), "Listed learning items");
        Ok(self.data.learning_items.clone())
    }

    async fn list_micro_lessons(&self) -> Result<Vec<MicroLesson>, RepositoryError> {
        pause(self.latency.micro_lessons).await;
        self.check_available()?;
        tracing::debug!(count = self.data.micro_lessons.len(), "Listed micro lessons");
        Ok(self.data.micro_lessons.clone())
    }

    async fn progress_data(&self) -> Result<ProgressData, RepositoryError> {
        pause(self.latency.progress).await;
        self.check_available()?;
        tracing::debug!("Loaded progress data");
        Ok(self.data.progress.clone())
    }

    async fn find_micro_lesson(&self, id: &str) -> Result<Option<MicroLesson>, RepositoryError> {
        pause(self.latency.single_lesson).await;
        self.check_available()?;
        let lesson = self.data.micro_lessons.iter().find(|l| l.id == id).cloned();
        tracing::debug!(lesson_id = %id, found = lesson.is_some(), "Looked up micro lesson");
        Ok(lesson)
    }

    async fn quiz_for_lesson(
        &self,
        lesson_id: &str,
    ) -> Result<Option<Vec<QuizQuestion>>, RepositoryError> {
        pause(self.latency.single_lesson).await;
        self.check_available()?;
        let quiz = self.data.quizzes.get(lesson_id).cloned();
        tracing::debug!(
            lesson_id = %lesson_id,
            questions = quiz.as_ref().map_or(0, Vec::len),
            "Loaded lesson quiz"
        );
        Ok(quiz)
    }
}
