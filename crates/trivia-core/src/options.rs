//! Start-screen game options.
//!
//! These are what the player picks before a game: question count, category,
//! difficulty and question type. They are stored and shown, but a game is
//! always played against [`QuestionBank::builtin`](crate::QuestionBank::builtin);
//! nothing here narrows or regenerates the question set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    GeneralKnowledge,
    Science,
    History,
    Geography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::GeneralKnowledge,
        Category::Science,
        Category::History,
        Category::Geography,
    ];
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::MultipleChoice, QuestionType::TrueFalse];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::GeneralKnowledge => "General Knowledge",
            Category::Science => "Science",
            Category::History => "History",
            Category::Geography => "Geography",
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True False",
        })
    }
}

/// Selections made on the options screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    #[serde(default = "default_number_of_questions")]
    pub number_of_questions: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub question_type: QuestionType,
}

fn default_number_of_questions() -> u32 {
    5
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            number_of_questions: default_number_of_questions(),
            category: Category::default(),
            difficulty: Difficulty::default(),
            question_type: QuestionType::default(),
        }
    }
}

impl GameOptions {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] if the question count is
    /// outside `1..=20`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.number_of_questions) {
            return Err(ValidationError::InvalidValue {
                field: "number_of_questions".into(),
                message: format!(
                    "must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}, got {}",
                    self.number_of_questions
                ),
            });
        }
        Ok(())
    }
}
