use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The user's chosen option per question index.
///
/// Sized once from the bank length. Entries are set or overwritten, never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStore {
    answers: Vec<Option<String>>,
}

impl SelectionStore {
    pub fn new(len: usize) -> Self {
        Self {
            answers: vec![None; len],
        }
    }

    /// Record `option` for `index`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index` is outside the bank.
    pub fn select(&mut self, index: usize, option: impl Into<String>) -> Result<(), ValidationError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or_else(|| ValidationError::out_of_bounds("selections", index, len))?;
        *slot = Some(option.into());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index` is outside the bank.
    pub fn answer_at(&self, index: usize) -> Result<Option<&str>, ValidationError> {
        self.answers
            .get(index)
            .map(Option::as_deref)
            .ok_or_else(|| ValidationError::out_of_bounds("selections", index, self.answers.len()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Answers in question order, `None` where nothing was chosen.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.answers.iter().map(Option::as_deref)
    }
}
