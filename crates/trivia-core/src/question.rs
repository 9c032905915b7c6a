use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single multiple-choice question.
///
/// `correct_answer` is expected to appear in `options`. This is not enforced:
/// a question whose answer is missing from its options simply can never be
/// answered correctly. See [`QuestionBank::authoring_issues`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new<T, O, A>(text: T, options: O, correct_answer: A) -> Self
    where
        T: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        A: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Whether `correct_answer` is one of `options`.
    pub fn is_answerable(&self) -> bool {
        self.options.iter().any(|o| *o == self.correct_answer)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

/// Ordered, immutable set of questions a session is played against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from an ordered list. An empty list is valid.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The fixed general-knowledge set every game is played with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Question::new(
                "What is the capital of France?",
                ["Paris", "Berlin", "London", "Madrid"],
                "Paris",
            ),
            Question::new(
                "Which planet is known as the Red Planet?",
                ["Mars", "Venus", "Jupiter", "Saturn"],
                "Mars",
            ),
            Question::new(
                "Who painted the Mona Lisa?",
                [
                    "Leonardo da Vinci",
                    "Pablo Picasso",
                    "Vincent van Gogh",
                    "Michelangelo",
                ],
                "Leonardo da Vinci",
            ),
            Question::new(
                "What is the largest mammal?",
                ["Elephant", "Blue Whale", "Giraffe", "Hippopotamus"],
                "Blue Whale",
            ),
            Question::new(
                "What is the chemical symbol for water?",
                ["H2O", "CO2", "NaCl", "O2"],
                "H2O",
            ),
            Question::new(
                "Who wrote 'Romeo and Juliet'?",
                [
                    "William Shakespeare",
                    "Charles Dickens",
                    "Jane Austen",
                    "Mark Twain",
                ],
                "William Shakespeare",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index >= len()`.
    pub fn question_at(&self, index: usize) -> Result<&Question, ValidationError> {
        self.questions
            .get(index)
            .ok_or_else(|| ValidationError::out_of_bounds("questions", index, self.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Indices of questions whose correct answer is not among their options.
    pub fn authoring_issues(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_answerable())
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_6_questions() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 6);
        assert!(bank.authoring_issues().is_empty());
    }

    #[test]
    fn question_at_out_of_range() {
        let bank = QuestionBank::builtin();
        assert_eq!(
            bank.question_at(6),
            Err(ValidationError::OutOfBounds {
                collection: "questions".into(),
                index: 6,
                len: 6,
            })
        );
        assert_eq!(bank.question_at(0).unwrap().correct_answer, "Paris");
    }

    #[test]
    fn empty_bank_is_valid() {
        let bank = QuestionBank::new(Vec::new());
        assert!(bank.is_empty());
        assert!(bank.question_at(0).is_err());
    }

    #[test]
    fn authoring_issues_flags_missing_answer() {
        let bank = QuestionBank::new(vec![
            Question::new("2+2?", ["3", "4"], "4"),
            Question::new("Capital of Peru?", ["Quito", "Bogota"], "Lima"),
        ]);
        assert_eq!(bank.authoring_issues(), vec![1]);
    }
}
