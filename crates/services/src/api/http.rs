use std::env;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use quiz_core::model::{Evaluation, Question, QuestionCount};

use crate::api::{AnswerEntry, QuizApi};
use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct QuizApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl QuizApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Question generation can take a while; the original client waited
    /// indefinitely, which we cap instead.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("QUIZ_API_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.into());
        let timeout = env::var("QUIZ_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(Self::DEFAULT_TIMEOUT, Duration::from_secs);
        Self { base_url, timeout }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of `QuizApi` over one shared `reqwest` client.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    base_url: String,
}

impl HttpQuizApi {
    /// Build the client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying client cannot be built.
    pub fn new(config: QuizApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ApiError> {
        debug!("uploading {file_name} ({} bytes)", bytes.len());
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("uploadFile"))
            .multipart(form)
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    async fn generate_questions(&self, count: QuestionCount) -> Result<Vec<Question>, ApiError> {
        debug!("generating {} questions", count.value());
        let payload = GenerateQuestionsRequest {
            question_count: count.value(),
        };

        let response = self
            .client
            .post(self.endpoint("generateQuestions"))
            .json(&payload)
            .send()
            .await?;
        let body: QuestionsResponse = Self::check(response)?.json().await?;
        Ok(body.questions)
    }

    async fn submit_answers(&self, answers: &[AnswerEntry]) -> Result<Evaluation, ApiError> {
        debug!("submitting {} answers", answers.len());
        let payload = SubmitAnswersRequest { answers };

        let response = self
            .client
            .post(self.endpoint("submitAnswers"))
            .json(&payload)
            .send()
            .await?;
        let evaluation: Evaluation = Self::check(response)?.json().await?;
        Ok(evaluation)
    }

    async fn regenerate_questions(
        &self,
        count: QuestionCount,
        weaknesses: &[String],
    ) -> Result<Vec<Question>, ApiError> {
        debug!(
            "regenerating {} questions for {} weakness(es)",
            count.value(),
            weaknesses.len()
        );
        let payload = RegenerateQuestionsRequest {
            question_count: count.value(),
            weaknesses,
        };

        let response = self
            .client
            .post(self.endpoint("regenerateTailoredQuestions"))
            .json(&payload)
            .send()
            .await?;
        let body: QuestionsResponse = Self::check(response)?.json().await?;
        Ok(body.questions)
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateQuestionsRequest {
    question_count: u8,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
struct SubmitAnswersRequest<'a> {
    answers: &'a [AnswerEntry],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegenerateQuestionsRequest<'a> {
    question_count: u8,
    weaknesses: &'a [String],
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
