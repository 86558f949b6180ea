use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::{AnswerSheet, AnswerSheetError, Evaluation, Question, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a document must be uploaded before generating questions")]
    UploadRequired,

    #[error("a session is already underway; start over first")]
    AlreadyStarted,

    #[error("the generated quiz contained no questions")]
    EmptyQuiz,

    #[error("no quiz is accepting answers right now")]
    NoActiveQuiz,

    #[error("{missing} answer(s) are still empty")]
    IncompleteAnswers { missing: usize },

    #[error("no submission is in flight")]
    NotSubmitting,

    #[error("no results are available yet")]
    NoResults,

    #[error(transparent)]
    Answer(#[from] AnswerSheetError),
}

/// Where a session currently sits in the upload → results flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Uploaded,
    QuestionsReady,
    Submitting,
    ResultsReady,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The whole client-side quiz workflow as one value.
///
/// Holds exactly one active question set, one answer sheet, and (once
/// graded) one evaluation. Every transition is guarded by the current
/// phase; a refused transition leaves the session untouched. Failures
/// return the session to its most recent stable phase with answers intact,
/// and `reset` replaces the original app's reload-the-page escape hatch.
///
/// `started_at` should come from the services layer clock to keep time
/// deterministic.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    phase: SessionPhase,
    file_name: Option<String>,
    questions: Vec<Question>,
    answers: AnswerSheet,
    evaluation: Option<Evaluation>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Create an idle session with nothing uploaded yet.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            phase: SessionPhase::Idle,
            file_name: None,
            questions: Vec::new(),
            answers: AnswerSheet::default(),
            evaluation: None,
            started_at,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// The grading outcome, present only in `ResultsReady`.
    #[must_use]
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Record that the document upload finished, unlocking generation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` outside `Idle`.
    pub fn upload_complete(&mut self, file_name: impl Into<String>) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::AlreadyStarted);
        }
        self.file_name = Some(file_name.into());
        self.phase = SessionPhase::Uploaded;
        Ok(())
    }

    /// Install a freshly generated (or regenerated) question set.
    ///
    /// The question list is replaced wholesale, the answer sheet is rebuilt
    /// with empty strings for exactly the new ids, and any prior evaluation
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuiz` for an empty list (session
    /// unchanged) and `SessionError::UploadRequired` when called before an
    /// upload or mid-submission.
    pub fn install_questions(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Uploaded | SessionPhase::ResultsReady => {}
            _ => return Err(SessionError::UploadRequired),
        }
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        self.answers = AnswerSheet::for_questions(&questions);
        self.questions = questions;
        self.evaluation = None;
        self.phase = SessionPhase::QuestionsReady;
        Ok(())
    }

    /// Record the user's answer to one active question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuiz` outside `QuestionsReady` and
    /// propagates unknown-id errors from the sheet.
    pub fn set_answer(
        &mut self,
        id: QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.phase != SessionPhase::QuestionsReady {
            return Err(SessionError::NoActiveQuiz);
        }
        self.answers.set_answer(id, text)?;
        Ok(())
    }

    /// Move into `Submitting`, gated on every answer being non-empty.
    ///
    /// The completeness check is client-side only and may be stricter or
    /// looser than whatever the grading service enforces.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IncompleteAnswers` (state unchanged) while any
    /// answer is empty, or `SessionError::NoActiveQuiz` outside
    /// `QuestionsReady`.
    pub fn begin_submit(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::QuestionsReady {
            return Err(SessionError::NoActiveQuiz);
        }
        let missing = self.answers.missing_count();
        if missing > 0 {
            return Err(SessionError::IncompleteAnswers { missing });
        }
        self.phase = SessionPhase::Submitting;
        Ok(())
    }

    /// Accept the grading outcome and move to `ResultsReady`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitting` outside `Submitting`.
    pub fn complete_submit(&mut self, evaluation: Evaluation) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Submitting {
            return Err(SessionError::NotSubmitting);
        }
        self.evaluation = Some(evaluation);
        self.phase = SessionPhase::ResultsReady;
        Ok(())
    }

    /// Return to `QuestionsReady` after a failed submission.
    ///
    /// Answers already entered are preserved for a retry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitting` outside `Submitting`.
    pub fn fail_submit(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Submitting {
            return Err(SessionError::NotSubmitting);
        }
        self.phase = SessionPhase::QuestionsReady;
        Ok(())
    }

    /// Discard everything and return to `Idle`.
    ///
    /// This is the explicit start-over action standing in for the original
    /// client's full page reload.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("file_name", &self.file_name)
            .field("questions_len", &self.questions.len())
            .field("answered", &(self.answers.len() - self.answers.missing_count()))
            .field("has_evaluation", &self.evaluation.is_some())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
