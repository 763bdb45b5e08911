//! Sample catalog served by [`crate::InMemoryRepository::seeded`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skillpath_core::learning::{
    Difficulty, LearningItem, MicroLesson, ProgressData, ResourceType, Skill, SkillLevel, Term,
};
use skillpath_core::quiz::{QuizOption, QuizQuestion};
use skillpath_core::types::EntityId;

/// Everything a repository serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub skills: Vec<Skill>,
    pub learning_items: Vec<LearningItem>,
    pub micro_lessons: Vec<MicroLesson>,
    pub progress: ProgressData,
    /// Quiz questions keyed by the id of the lesson that carries them.
    #[serde(default)]
    pub quizzes: BTreeMap<EntityId, Vec<QuizQuestion>>,
}

pub fn seed_data() -> SeedData {
    SeedData {
        skills: skills(),
        learning_items: learning_items(),
        micro_lessons: micro_lessons(),
        progress: progress(),
        quizzes: BTreeMap::from([("lesson-2".to_string(), sample_quiz())]),
    }
}

fn skills() -> Vec<Skill> {
    use SkillLevel::{Advanced, Beginner, Intermediate};

    vec![
        Skill::new("skill-1", "JavaScript", Intermediate, Advanced, 95)
            .with_category("Programming")
            .with_term(Term::Short),
        Skill::new("skill-2", "Python", Intermediate, Advanced, 100)
            .with_category("Programming")
            .with_term(Term::Mid),
        Skill::new("skill-3", "Cloud Architecture", Beginner, Intermediate, 85)
            .with_category("Infrastructure")
            .with_term(Term::Mid),
        Skill::new("skill-4", "React", Intermediate, Advanced, 92)
            .with_category("Frontend")
            .with_term(Term::Short),
        Skill::new("skill-5", "Data Structures", Intermediate, Advanced, 88)
            .with_category("Computer Science")
            .with_term(Term::Long),
        Skill::new("skill-6", "System Design", Beginner, Intermediate, 80)
            .with_category("Architecture")
            .with_term(Term::Long),
    ]
}

fn resource(
    id: &str,
    title: &str,
    description: &str,
    resource_type: ResourceType,
    duration: u32,
    skill_id: &str,
    difficulty: Difficulty,
) -> LearningItem {
    LearningItem {
        duration,
        ..LearningItem::new(id, title, resource_type, difficulty, &[skill_id])
            .with_description(description)
    }
}

fn learning_items() -> Vec<LearningItem> {
    vec![
        resource(
            "resource-1",
            "Advanced JavaScript Concepts",
            "Deep dive into JavaScript closures, prototypes, and async patterns",
            ResourceType::Course,
            120,
            "skill-1",
            Difficulty::Advanced,
        ),
        resource(
            "resource-2",
            "Python for Data Science",
            "Learn how to use Python for data analysis and visualization",
            ResourceType::Course,
            180,
            "skill-2",
            Difficulty::Advanced,
        ),
        resource(
            "resource-3",
            "AWS Cloud Architecture Fundamentals",
            "Introduction to designing scalable systems on AWS",
            ResourceType::Documentation,
            60,
            "skill-3",
            Difficulty::Intermediate,
        ),
        resource(
            "resource-4",
            "React Performance Optimization",
            "Techniques to improve React application performance",
            ResourceType::Article,
            20,
            "skill-4",
            Difficulty::Advanced,
        )
        .with_completed(true),
        resource(
            "resource-5",
            "Common Data Structure Operations",
            "Understanding time and space complexity of data structures",
            ResourceType::Video,
            45,
            "skill-5",
            Difficulty::Advanced,
        ),
        resource(
            "resource-6",
            "Microservices Architecture Patterns",
            "Design patterns for building robust microservices",
            ResourceType::Article,
            25,
            "skill-6",
            Difficulty::Advanced,
        ),
    ]
}

const CLOSURES_CONTENT: &str = "Closures are functions that have access to variables from an outer \
function scope, even after the outer function has returned. They enable data encapsulation and \
private variables.\n\nExample:\n```javascript\nfunction createCounter() {\n  let count = 0;\n  \
return function() {\n    return ++count;\n  };\n}\n\nconst counter = createCounter();\n\
console.log(counter()); // 1\nconsole.log(counter()); // 2\n```\n\nThis pattern is common in \
modern JavaScript frameworks and libraries.";

const COMPREHENSIONS_CONTENT: &str = "List comprehensions build lists from existing iterables in \
a single expression. They follow the pattern:\n\n```python\n[expression for item in iterable if \
condition]\n```\n\nFor example:\n```python\n# Squares of the even numbers below 10\nsquares = \
[x**2 for x in range(10) if x % 2 == 0]\nprint(squares)  # [0, 4, 16, 36, 64]\n```\n\nThey are \
usually more readable than the equivalent for loop.";

const STATELESS_CONTENT: &str = "Stateless services keep no client data between requests. Each \
request carries everything needed to process it, so services scale horizontally and fail over \
cleanly.\n\nKey benefits of stateless services:\n- Easier scaling (just add more instances)\n- \
Better fault tolerance (any instance can handle any request)\n- Simpler deployment and \
updates\n\nStart with a stateless design and isolate any stateful components.";

fn micro_lessons() -> Vec<MicroLesson> {
    vec![
        MicroLesson::new("lesson-1", "JavaScript Closures Explained", "skill-1", Difficulty::Advanced)
            .with_content(CLOSURES_CONTENT),
        MicroLesson::new("lesson-2", "Python List Comprehensions", "skill-2", Difficulty::Advanced)
            .with_content(COMPREHENSIONS_CONTENT)
            .with_completed(true)
            .with_quiz(true),
        MicroLesson::new(
            "lesson-3",
            "Cloud Architecture: Stateless Services",
            "skill-3",
            Difficulty::Intermediate,
        )
        .with_content(STATELESS_CONTENT),
    ]
}

fn progress() -> ProgressData {
    ProgressData {
        skills_completed: 2,
        lessons_completed: 1,
        resources_viewed: 8,
        streak_days: 5,
        weekly_progress: vec![65, 70, 75, 80, 60, 0, 0],
        total_points: 750,
    }
}

fn question(text: &str, options: [&str; 4], correct_answer: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: ["a", "b", "c", "d"]
            .into_iter()
            .zip(options)
            .map(|(id, text)| QuizOption {
                id: id.to_string(),
                text: text.to_string(),
            })
            .collect(),
        correct_answer: correct_answer.to_string(),
    }
}

/// Two-question quiz attached to the seeded quiz lesson.
pub fn sample_quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            "What is the main advantage of using React hooks?",
            [
                "They make code more complex",
                "They allow using state in functional components",
                "They always improve performance",
                "They replace the need for components",
            ],
            "b",
        ),
        question(
            "When should you use the useEffect hook?",
            [
                "Only for API calls",
                "Never in functional components",
                "For side effects in your component",
                "Only once per application",
            ],
            "c",
        ),
    ]
}
