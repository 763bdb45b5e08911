//! Lesson quiz sessions.
//!
//! A quiz walks through its questions in order: pick an option, submit it,
//! then advance. The session tracks the score and whether it has finished.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
    /// Id of the correct option.
    pub correct_answer: String,
}

/// Outcome of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    NextQuestion,
    Finished,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<String>,
    submitted: bool,
    correct_count: usize,
    finished: bool,
}

impl QuizSession {
    /// Start a quiz. A quiz without questions is finished immediately.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            current: 0,
            selected: None,
            submitted: false,
            correct_count: 0,
            finished,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// 1-based number of the question on screen. Stays on the last
    /// question once the quiz is finished; 0 for an empty quiz.
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn score(&self) -> usize {
        self.correct_count
    }

    /// Choose an option for the current question. Changing the choice is
    /// allowed until it is submitted.
    pub fn select(&mut self, option_id: &str) -> Result<(), CoreError> {
        let question = self
            .current_question()
            .ok_or_else(|| CoreError::Validation("Quiz is already finished".to_string()))?;
        if self.submitted {
            return Err(CoreError::Validation(
                "Answer already submitted for this question".to_string(),
            ));
        }
        if !question.options.iter().any(|o| o.id == option_id) {
            return Err(CoreError::NotFound {
                entity: "quiz_option",
                id: option_id.to_string(),
            });
        }
        self.selected = Some(option_id.to_string());
        Ok(())
    }

    /// Submit the selected option. Returns whether it was correct.
    pub fn submit(&mut self) -> Result<bool, CoreError> {
        let question = self
            .current_question()
            .ok_or_else(|| CoreError::Validation("Quiz is already finished".to_string()))?;
        if self.submitted {
            return Err(CoreError::Validation(
                "Answer already submitted for this question".to_string(),
            ));
        }
        let selected = self
            .selected
            .as_deref()
            .ok_or_else(|| CoreError::Validation("No answer selected".to_string()))?;
        let correct = selected == question.correct_answer;
        if correct {
            self.correct_count += 1;
        }
        self.submitted = true;
        Ok(correct)
    }

    /// Move past a submitted question.
    pub fn advance(&mut self) -> Result<QuizStep, CoreError> {
        if self.finished {
            return Ok(QuizStep::Finished);
        }
        if !self.submitted {
            return Err(CoreError::Validation(
                "Submit an answer before moving on".to_string(),
            ));
        }
        self.selected = None;
        self.submitted = false;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(QuizStep::NextQuestion)
        } else {
            self.finished = true;
            Ok(QuizStep::Finished)
        }
    }
}
