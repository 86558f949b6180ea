use std::sync::Arc;

use log::warn;

use quiz_core::Clock;
use quiz_core::model::{QuestionCount, QuizSession, SessionError, SessionPhase};

use crate::api::{AnswerEntry, QuizApi};
use crate::error::QuizFlowError;

/// Drives the quiz session state machine from API call outcomes.
///
/// One request is outstanding per stage, and every failure returns the
/// session to its most recent stable phase with all other data intact, so a
/// retry is always just the same action again.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    api: Arc<dyn QuizApi>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn QuizApi>) -> Self {
        Self { clock, api }
    }

    /// Create a fresh idle session stamped by the service clock.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.clock.now())
    }

    /// Discard all session data and return to `Idle`.
    pub fn start_over(&self, session: &mut QuizSession) {
        session.reset(self.clock.now());
    }

    /// Generate a question set for the uploaded document and install it.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` before any network call when no
    /// upload has completed, and `QuizFlowError::Api` when the request
    /// fails; the session is untouched in both cases.
    pub async fn generate(
        &self,
        session: &mut QuizSession,
        count: QuestionCount,
    ) -> Result<(), QuizFlowError> {
        if session.phase() != SessionPhase::Uploaded {
            return Err(SessionError::UploadRequired.into());
        }

        let questions = self.api.generate_questions(count).await.map_err(|err| {
            warn!("question generation failed: {err}");
            err
        })?;
        session.install_questions(questions)?;
        Ok(())
    }

    /// Submit the answers for grading, moving through `Submitting`.
    ///
    /// The completeness gate runs before any network call; a transport or
    /// status failure puts the session back in `QuestionsReady` with the
    /// answers preserved.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` when the gate refuses (incomplete
    /// answers, wrong phase) and `QuizFlowError::Api` when the request
    /// fails.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<(), QuizFlowError> {
        session.begin_submit()?;

        let answers: Vec<AnswerEntry> = session
            .answers()
            .entries()
            .map(|(id, text)| AnswerEntry {
                id,
                text: text.to_string(),
            })
            .collect();

        match self.api.submit_answers(&answers).await {
            Ok(evaluation) => {
                session.complete_submit(evaluation)?;
                Ok(())
            }
            Err(err) => {
                warn!("answer submission failed: {err}");
                session.fail_submit()?;
                Err(err.into())
            }
        }
    }

    /// Request a quiz tailored to the graded weaknesses and install it.
    ///
    /// Replaces the question set wholesale and discards the prior results;
    /// on failure the results stay visible.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` before any network call when no
    /// results are available, and `QuizFlowError::Api` when the request
    /// fails.
    pub async fn regenerate(
        &self,
        session: &mut QuizSession,
        count: QuestionCount,
    ) -> Result<(), QuizFlowError> {
        let weaknesses = session
            .evaluation()
            .ok_or(SessionError::NoResults)?
            .weaknesses
            .clone();

        let questions = self
            .api
            .regenerate_questions(count, &weaknesses)
            .await
            .map_err(|err| {
                warn!("quiz regeneration failed: {err}");
                err
            })?;
        session.install_questions(questions)?;
        Ok(())
    }
}
