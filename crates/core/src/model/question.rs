use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// One quiz question as returned by the generation service.
///
/// Immutable once received. A regenerated quiz replaces the whole question
/// set; questions are never merged across generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: String,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            category: category.into(),
        }
    }
}

/// How many questions to request from the generation service.
///
/// The backend accepts 1 to 20 questions per quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Validate a requested question count.
    ///
    /// # Errors
    ///
    /// Returns `QuestionCountError::OutOfRange` outside `1..=20`.
    pub fn new(count: u8) -> Result<Self, QuestionCountError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(QuestionCountError::OutOfRange { got: count })
        }
    }

    /// Returns the underlying count
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for QuestionCount {
    /// The slider default in the generation panel.
    fn default() -> Self {
        Self(5)
    }
}

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCountError {
    #[error("question count must be between 1 and 20, got {got}")]
    OutOfRange { got: u8 },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
