use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Question, QuestionId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSheetError {
    #[error("question {0} is not part of the active quiz")]
    UnknownQuestion(QuestionId),
}

/// Free-text answers for the active question set.
///
/// Invariant: the key set always equals the ids of the questions the sheet
/// was built for, each starting as an empty string. Replacing the question
/// set replaces the sheet; `set_answer` is the only mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    order: Vec<QuestionId>,
    entries: HashMap<QuestionId, String>,
}

impl AnswerSheet {
    /// Build a fresh sheet with an empty answer per question, in question order.
    #[must_use]
    pub fn for_questions(questions: &[Question]) -> Self {
        let order: Vec<QuestionId> = questions.iter().map(|question| question.id).collect();
        let entries = order.iter().map(|id| (*id, String::new())).collect();
        Self { order, entries }
    }

    /// Record the user's answer for one question.
    ///
    /// # Errors
    ///
    /// Returns `AnswerSheetError::UnknownQuestion` for an id outside the
    /// active question set.
    pub fn set_answer(
        &mut self,
        id: QuestionId,
        text: impl Into<String>,
    ) -> Result<(), AnswerSheetError> {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                *entry = text.into();
                Ok(())
            }
            None => Err(AnswerSheetError::UnknownQuestion(id)),
        }
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True once every answer is non-empty; submission is gated on this.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Number of answers still left empty.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.order
            .iter()
            .filter(|id| self.entries.get(*id).is_none_or(String::is_empty))
            .count()
    }

    /// Iterate `(id, answer)` pairs in question order, for request assembly.
    pub fn entries(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.order.iter().map(|id| {
            let text = self.entries.get(id).map_or("", String::as_str);
            (*id, text)
        })
    }

    /// The active question ids, in question order.
    #[must_use]
    pub fn ids(&self) -> &[QuestionId] {
        &self.order
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
