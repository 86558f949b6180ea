use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;

use quiz_core::model::{Evaluation, Question, QuestionCount, QuestionId, Score};
use quiz_core::time::fixed_clock;
use services::{AnswerEntry, ApiError, QuizApi, QuizFlowService, UploadService};

use crate::context::{UiApp, build_app_context};
use crate::controller::QuizController;

/// Scripted backend for render tests: every call succeeds with fixed data.
pub struct FakeQuizApi;

#[async_trait]
impl QuizApi for FakeQuizApi {
    async fn upload_file(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<(), ApiError> {
        Ok(())
    }

    async fn generate_questions(&self, count: QuestionCount) -> Result<Vec<Question>, ApiError> {
        Ok((1..=u64::from(count.value()))
            .map(|id| Question::new(QuestionId::new(id), format!("Question {id}?"), "General"))
            .collect())
    }

    async fn submit_answers(&self, answers: &[AnswerEntry]) -> Result<Evaluation, ApiError> {
        Ok(Evaluation {
            strengths: vec!["recall".into()],
            weaknesses: vec!["dates".into()],
            scores: answers
                .iter()
                .map(|entry| Score::new(entry.id, 4.0))
                .collect(),
        })
    }

    async fn regenerate_questions(
        &self,
        count: QuestionCount,
        _weaknesses: &[String],
    ) -> Result<Vec<Question>, ApiError> {
        self.generate_questions(count).await
    }
}

struct TestApp {
    quiz_flow: Arc<QuizFlowService>,
    uploads: Arc<UploadService>,
}

impl TestApp {
    fn new() -> Self {
        let api: Arc<dyn QuizApi> = Arc::new(FakeQuizApi);
        Self {
            quiz_flow: Arc::new(QuizFlowService::new(fixed_clock(), Arc::clone(&api))),
            uploads: Arc::new(UploadService::new(api)),
        }
    }
}

impl UiApp for TestApp {
    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    fn uploads(&self) -> Arc<UploadService> {
        Arc::clone(&self.uploads)
    }
}

#[component]
fn ControllerHarness() -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp::new());
    use_context_provider(|| build_app_context(&app));
    rsx! {
        QuizController {}
    }
}

/// Render the controller tree to a string for content assertions.
pub fn render_controller() -> String {
    let mut dom = VirtualDom::new(ControllerHarness);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render any harness component to a string.
pub fn render_component(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
