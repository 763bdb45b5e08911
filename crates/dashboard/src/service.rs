//! Dashboard service: loads learning data through a repository and builds
//! each view with the pure functions from `skillpath-core`.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use skillpath_core::chart::{
    course_progress_by_skill, course_progress_chart, course_summary, ChartEntry, CourseSummary,
    SkillCourseProgress,
};
use skillpath_core::dashboard::{
    build_dashboard, skills_analysis, DashboardConfig, DashboardSnapshot, SkillsOverview,
};
use skillpath_core::error::CoreError;
use skillpath_core::grouping::{build_learning_plan, skill_names_for_item, SkillPlan};
use skillpath_core::learning::{
    validate_progress_data, validate_skill, LearningItem, MicroLesson, ProgressData, Skill,
};
use skillpath_core::lesson_content::{segment_content, ContentSegment};
use skillpath_core::quiz::{QuizQuestion, QuizSession};
use skillpath_core::resource_filter::{partition_by_completion, ResourceFilter};
use skillpath_core::session::CompletionSession;
use skillpath_data::LearningRepository;

use crate::error::{ServiceError, ServiceResult};

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Everything loaded from the repository for one render.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub skills: Vec<Skill>,
    pub learning_items: Vec<LearningItem>,
    pub micro_lessons: Vec<MicroLesson>,
    pub progress: ProgressData,
}

/// A resource with the names of the skills it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceEntry {
    #[serde(flatten)]
    pub item: LearningItem,
    pub skill_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcesView {
    pub filter: ResourceFilter,
    pub completed: Vec<ResourceEntry>,
    pub pending: Vec<ResourceEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseProgressView {
    pub by_skill: Vec<SkillCourseProgress>,
    pub summary: CourseSummary,
    pub chart: Vec<ChartEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonView {
    pub lesson: MicroLesson,
    /// `None` when the lesson's skill is not in the catalog.
    pub skill_name: Option<String>,
    pub segments: Vec<ContentSegment>,
    /// Present when the lesson carries a quiz.
    pub quiz: Option<Vec<QuizQuestion>>,
}

/// Result of answering a lesson's quiz and marking the lesson complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonAttempt {
    pub lesson_id: String,
    /// Correct answers, when the lesson has a quiz.
    pub quiz_score: Option<usize>,
    pub quiz_questions: usize,
    /// `false` when the catalog already had the lesson completed.
    pub newly_completed: bool,
    pub points_earned: u32,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

fn validate_skills(skills: &[Skill]) -> ServiceResult<()> {
    for skill in skills {
        validate_skill(skill)?;
    }
    Ok(())
}

pub struct DashboardService {
    repo: Arc<dyn LearningRepository>,
    config: DashboardConfig,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a service. Fails if `config` does not validate.
    pub fn new(repo: Arc<dyn LearningRepository>, config: DashboardConfig) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self { repo, config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetch all four collections concurrently and validate them.
    pub async fn load_catalog(&self) -> ServiceResult<Catalog> {
        let started = Instant::now();
        let (skills, learning_items, micro_lessons, progress) = tokio::try_join!(
            self.repo.list_skills(),
            self.repo.list_learning_items(),
            self.repo.list_micro_lessons(),
            self.repo.progress_data(),
        )?;

        validate_skills(&skills)?;
        validate_progress_data(&progress)?;

        tracing::debug!(
            skills = skills.len(),
            learning_items = learning_items.len(),
            micro_lessons = micro_lessons.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded catalog"
        );

        Ok(Catalog {
            skills,
            learning_items,
            micro_lessons,
            progress,
        })
    }

    pub async fn dashboard(&self) -> ServiceResult<DashboardSnapshot> {
        let catalog = self.load_catalog().await?;
        let snapshot = build_dashboard(
            &catalog.skills,
            &catalog.learning_items,
            &catalog.micro_lessons,
            &catalog.progress,
            &self.config,
        )?;
        tracing::info!(
            view = "dashboard",
            priority_skills = snapshot.priority_skills.len(),
            total_points = snapshot.total_points,
            "Built view"
        );
        Ok(snapshot)
    }

    pub async fn skills_analysis(&self) -> ServiceResult<SkillsOverview> {
        let skills = self.repo.list_skills().await?;
        validate_skills(&skills)?;
        let overview = skills_analysis(&skills);
        tracing::info!(view = "skills", skills = overview.skills.len(), "Built view");
        Ok(overview)
    }

    pub async fn learning_plan(&self) -> ServiceResult<Vec<SkillPlan>> {
        let catalog = self.load_catalog().await?;
        let plan = build_learning_plan(
            &catalog.skills,
            &catalog.learning_items,
            &catalog.micro_lessons,
            self.config.plan_skills,
        );
        tracing::info!(view = "plan", skills = plan.len(), "Built view");
        Ok(plan)
    }

    /// Filtered resources split into completed and pending.
    pub async fn resources(&self, filter: &ResourceFilter) -> ServiceResult<ResourcesView> {
        let catalog = self.load_catalog().await?;
        let entry = |item: &LearningItem| ResourceEntry {
            item: item.clone(),
            skill_names: skill_names_for_item(item, &catalog.skills)
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let (completed, pending) = partition_by_completion(filter.apply(&catalog.learning_items));
        let view = ResourcesView {
            filter: filter.clone(),
            completed: completed.into_iter().map(entry).collect(),
            pending: pending.into_iter().map(entry).collect(),
        };
        tracing::info!(
            view = "resources",
            completed = view.completed.len(),
            pending = view.pending.len(),
            "Built view"
        );
        Ok(view)
    }

    pub async fn course_progress(&self) -> ServiceResult<CourseProgressView> {
        let catalog = self.load_catalog().await?;
        let by_skill = course_progress_by_skill(&catalog.skills, &catalog.learning_items);
        let view = CourseProgressView {
            summary: course_summary(&by_skill),
            chart: course_progress_chart(&catalog.skills, &by_skill, &self.config.chart),
            by_skill,
        };
        tracing::info!(
            view = "courses",
            total_courses = view.summary.total_courses,
            "Built view"
        );
        Ok(view)
    }

    /// A single lesson with its content split for rendering.
    pub async fn lesson(&self, id: &str) -> ServiceResult<LessonView> {
        let (lesson, skills, quiz) = tokio::try_join!(
            self.repo.find_micro_lesson(id),
            self.repo.list_skills(),
            self.repo.quiz_for_lesson(id),
        )?;
        let lesson = lesson.ok_or_else(|| ServiceError::LessonNotFound(id.to_string()))?;

        let skill_name = skills
            .iter()
            .find(|s| s.id == lesson.skill_id)
            .map(|s| s.name.clone());
        let segments = segment_content(&lesson.content);
        tracing::info!(lesson_id = %id, segments = segments.len(), "Built lesson view");

        Ok(LessonView {
            lesson,
            skill_name,
            segments,
            quiz,
        })
    }

    /// Answer the lesson's quiz in order with `answers` (option ids), then
    /// mark the lesson complete in a fresh session.
    ///
    /// A quiz lesson only completes once every question is answered; fewer
    /// answers fail with `CoreError::Validation`, as do answers for a lesson
    /// without a quiz or more answers than questions.
    pub async fn attempt_lesson(&self, id: &str, answers: &[String]) -> ServiceResult<LessonAttempt> {
        let (view, catalog) = tokio::try_join!(self.lesson(id), self.load_catalog())?;

        let quiz = match view.quiz {
            Some(questions) => {
                let mut quiz = QuizSession::new(questions);
                for answer in answers {
                    quiz.select(answer)?;
                    quiz.submit()?;
                    quiz.advance()?;
                }
                Some(quiz)
            }
            None if answers.is_empty() => None,
            None => {
                return Err(CoreError::Validation(format!("Lesson {id} has no quiz")).into());
            }
        };

        let mut session = CompletionSession::new();
        let newly_completed = session.complete_lesson(&view.lesson, quiz.as_ref())?;
        let points_earned =
            session.newly_earned_points(&catalog.micro_lessons, &catalog.learning_items);

        let attempt = LessonAttempt {
            lesson_id: view.lesson.id,
            quiz_score: quiz.as_ref().map(QuizSession::score),
            quiz_questions: quiz.as_ref().map_or(0, QuizSession::question_count),
            newly_completed,
            points_earned,
        };
        tracing::info!(
            lesson_id = %attempt.lesson_id,
            quiz_score = ?attempt.quiz_score,
            points_earned = attempt.points_earned,
            "Attempted lesson"
        );
        Ok(attempt)
    }
}
