//! Catalog entities: skills, learning resources, micro-lessons and the
//! aggregate progress snapshot.
//!
//! All enums are closed and matched exhaustively. Raw string tags coming
//! from outside the type system go through the `from_str_value` helpers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Percent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of days in the weekly progress sequence (Monday first).
pub const WEEK_DAYS: usize = 7;

// ---------------------------------------------------------------------------
// Skill level
// ---------------------------------------------------------------------------

/// Proficiency on a skill. Declaration order is proficiency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Every level, lowest first.
    pub const ALL: [SkillLevel; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// 0-based position in the ordered enumeration.
    pub fn index(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Expert => 3,
        }
    }

    /// Parse a lowercase tag such as `"advanced"`.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(format!(
                "Invalid skill level '{s}'. Must be one of: beginner, intermediate, advanced, expert"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty of a resource or lesson. Only used for point scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a lowercase tag. Returns `None` for anything unrecognised so
    /// callers can apply their own fallback.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// Planning horizon of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Short,
    Mid,
    Long,
}

impl Term {
    pub const ALL: [Term; 3] = [Self::Short, Self::Mid, Self::Long];

    /// Length of the horizon in months.
    pub fn horizon_months(self) -> u32 {
        match self {
            Self::Short => 1,
            Self::Mid => 3,
            Self::Long => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short-term",
            Self::Mid => "Mid-term",
            Self::Long => "Long-term",
        }
    }
}

// ---------------------------------------------------------------------------
// Resource type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Video,
    Article,
    Course,
    Documentation,
}

impl ResourceType {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "video" => Ok(Self::Video),
            "article" => Ok(Self::Article),
            "course" => Ok(Self::Course),
            "documentation" => Ok(Self::Documentation),
            _ => Err(format!(
                "Invalid resource type '{s}'. Must be one of: video, article, course, documentation"
            )),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Article => "Article",
            Self::Course => "Course",
            Self::Documentation => "Documentation",
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A skill the learner is developing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Skill {
    pub id: EntityId,
    #[validate(length(min = 1))]
    pub name: String,
    pub category: String,
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
    /// Relevance to the learner's role, 0-100.
    #[validate(range(max = 100))]
    pub relevance: u8,
    pub term: Term,
}

impl Skill {
    /// Build a skill with an empty category and a mid-term horizon.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        current_level: SkillLevel,
        target_level: SkillLevel,
        relevance: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            current_level,
            target_level,
            relevance,
            term: Term::Mid,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.term = term;
        self
    }

    /// Signed distance from the current level to the target level.
    pub fn level_gap(&self) -> i32 {
        self.target_level.index() as i32 - self.current_level.index() as i32
    }
}

/// A learning resource (video, article, course or documentation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Duration in minutes.
    pub duration: u32,
    /// Skills this resource contributes to. Many-to-many.
    pub skill_ids: Vec<EntityId>,
    pub completed: bool,
    pub url: String,
    pub difficulty: Difficulty,
}

impl LearningItem {
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        resource_type: ResourceType,
        difficulty: Difficulty,
        skill_ids: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            resource_type,
            duration: 0,
            skill_ids: skill_ids.iter().map(|s| s.to_string()).collect(),
            completed: false,
            url: "#".to_string(),
            difficulty,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether this resource is linked to the given skill.
    pub fn belongs_to(&self, skill_id: &str) -> bool {
        self.skill_ids.iter().any(|id| id == skill_id)
    }
}

/// A five-minute lesson attached to exactly one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroLesson {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub skill_id: EntityId,
    /// Duration in minutes.
    pub duration: u32,
    pub completed: bool,
    pub has_quiz: bool,
    pub difficulty: Difficulty,
}

impl MicroLesson {
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        skill_id: impl Into<EntityId>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            skill_id: skill_id.into(),
            duration: 5,
            completed: false,
            has_quiz: false,
            difficulty,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_quiz(mut self, has_quiz: bool) -> Self {
        self.has_quiz = has_quiz;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Aggregate progress snapshot for the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProgressData {
    pub skills_completed: u32,
    pub lessons_completed: u32,
    pub resources_viewed: u32,
    pub streak_days: u32,
    /// Daily completion percentages, Monday first.
    #[validate(length(equal = 7))]
    pub weekly_progress: Vec<Percent>,
    pub total_points: u32,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a skill's name and relevance range.
pub fn validate_skill(skill: &Skill) -> Result<(), CoreError> {
    skill
        .validate()
        .map_err(|e| CoreError::Validation(format!("skill '{}': {e}", skill.id)))
}

/// Validate the weekly sequence length and that every day is a percentage.
pub fn validate_progress_data(data: &ProgressData) -> Result<(), CoreError> {
    data.validate()
        .map_err(|e| CoreError::Validation(format!("progress data: {e}")))?;
    if let Some(bad) = data.weekly_progress.iter().find(|&&v| v > 100) {
        return Err(CoreError::Validation(format!(
            "progress data: weekly value {bad} exceeds 100"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
