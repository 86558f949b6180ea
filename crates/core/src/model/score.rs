use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Per-question grade from the grading service, in `[0, 5]`.
///
/// Scores are never computed locally; a question the service left ungraded
/// simply has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: QuestionId,
    pub score: f64,
}

impl Score {
    #[must_use]
    pub fn new(id: QuestionId, score: f64) -> Self {
        Self { id, score }
    }
}

/// Grading outcome for one submitted quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub scores: Vec<Score>,
}
