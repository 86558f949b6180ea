mod http;

pub use http::{HttpQuizApi, QuizApiConfig};

use async_trait::async_trait;
use serde::Serialize;

use quiz_core::model::{Evaluation, Question, QuestionCount, QuestionId};

use crate::error::ApiError;

/// One submitted answer, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerEntry {
    pub id: QuestionId,
    pub text: String,
}

/// Contract for the four backend operations the client consumes.
///
/// Each operation is a single request with no caching, retry, or backoff;
/// callers see success-with-payload or an opaque failure, nothing in
/// between. Implemented over HTTP in production and by in-memory fakes in
/// tests.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Upload a study document as a multipart request.
    ///
    /// The response body is empty; the status code is the signal.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ApiError>;

    /// Generate a fresh question set from the uploaded document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn generate_questions(&self, count: QuestionCount) -> Result<Vec<Question>, ApiError>;

    /// Submit the user's answers for grading.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn submit_answers(&self, answers: &[AnswerEntry]) -> Result<Evaluation, ApiError>;

    /// Generate a new question set tailored to the listed weaknesses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn regenerate_questions(
        &self,
        count: QuestionCount,
        weaknesses: &[String],
    ) -> Result<Vec<Question>, ApiError>;
}
