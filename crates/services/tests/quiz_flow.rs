use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use quiz_core::aggregate::overall_percentage;
use quiz_core::model::{
    Evaluation, Question, QuestionCount, QuestionId, Score, SessionError, SessionPhase,
};
use quiz_core::time::fixed_clock;
use services::{
    AnswerEntry, ApiError, MAX_PDF_BYTES, PdfSelection, QuizApi, QuizFlowError, QuizFlowService,
    UploadService, progress_channel,
};

/// Scripted backend double: serves a fixed question set and grades every
/// answer per the configured scores, while counting calls.
struct FakeQuizApi {
    questions: Vec<Question>,
    tailored: Vec<Question>,
    scores: Vec<Score>,
    fail_submit: bool,
    upload_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    regenerate_calls: AtomicUsize,
}

impl FakeQuizApi {
    fn new(questions: Vec<Question>, scores: Vec<Score>) -> Self {
        Self {
            questions,
            tailored: Vec::new(),
            scores,
            fail_submit: false,
            upload_calls: AtomicUsize::new(0),
            submit_calls: AtomicUsize::new(0),
            regenerate_calls: AtomicUsize::new(0),
        }
    }

    fn with_tailored(mut self, tailored: Vec<Question>) -> Self {
        self.tailored = tailored;
        self
    }

    fn failing_submit(mut self) -> Self {
        self.fail_submit = true;
        self
    }
}

#[async_trait]
impl QuizApi for FakeQuizApi {
    async fn upload_file(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<(), ApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn generate_questions(&self, count: QuestionCount) -> Result<Vec<Question>, ApiError> {
        Ok(self
            .questions
            .iter()
            .take(count.value() as usize)
            .cloned()
            .collect())
    }

    async fn submit_answers(&self, answers: &[AnswerEntry]) -> Result<Evaluation, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_submit {
            return Err(ApiError::Status(reqwest::StatusCode::BAD_GATEWAY));
        }
        assert!(
            answers.iter().all(|entry| !entry.text.is_empty()),
            "client must not submit empty answers"
        );
        Ok(Evaluation {
            strengths: vec!["clear definitions".into()],
            weaknesses: vec!["dates".into()],
            scores: self.scores.clone(),
        })
    }

    async fn regenerate_questions(
        &self,
        count: QuestionCount,
        weaknesses: &[String],
    ) -> Result<Vec<Question>, ApiError> {
        self.regenerate_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(weaknesses, ["dates"], "tailored request carries weaknesses");
        Ok(self
            .tailored
            .iter()
            .take(count.value() as usize)
            .cloned()
            .collect())
    }
}

fn question(id: u64, category: &str) -> Question {
    Question::new(QuestionId::new(id), format!("Q{id}"), category)
}

fn five_questions() -> Vec<Question> {
    vec![
        question(1, "Math"),
        question(2, "Math"),
        question(3, "History"),
        question(4, "History"),
        question(5, "Geography"),
    ]
}

/// Scores summing to 18 of 25, so the overall grade lands on 72%.
fn scores_18_of_25() -> Vec<Score> {
    vec![
        Score::new(QuestionId::new(1), 5.0),
        Score::new(QuestionId::new(2), 4.0),
        Score::new(QuestionId::new(3), 3.0),
        Score::new(QuestionId::new(4), 2.0),
        Score::new(QuestionId::new(5), 4.0),
    ]
}

#[tokio::test]
async fn full_flow_from_upload_to_results() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()));
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);
    let uploads = UploadService::new(Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();

    // upload a 3 MB PDF
    let selection =
        PdfSelection::new("notes.pdf", "application/pdf", vec![0; 3 * 1024 * 1024]).unwrap();
    let (tx, rx) = progress_channel();
    let file_name = uploads.upload(selection, tx).await.unwrap();
    assert_eq!(*rx.borrow(), 100);
    session.upload_complete(file_name).unwrap();

    // generate five questions
    flow.generate(&mut session, QuestionCount::new(5).unwrap())
        .await
        .unwrap();
    assert_eq!(session.phase(), SessionPhase::QuestionsReady);
    assert_eq!(session.questions().len(), 5);
    assert_eq!(session.answers().len(), 5);

    // answer all five and submit
    for id in 1..=5 {
        session
            .set_answer(QuestionId::new(id), format!("answer {id}"))
            .unwrap();
    }
    flow.submit(&mut session).await.unwrap();
    assert_eq!(session.phase(), SessionPhase::ResultsReady);

    let evaluation = session.evaluation().unwrap();
    let overall = overall_percentage(session.questions(), &evaluation.scores);
    assert!((overall - 72.0).abs() < 1e-9);
}

#[tokio::test]
async fn incomplete_answers_never_reach_the_network() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()));
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    session.upload_complete("notes.pdf").unwrap();
    flow.generate(&mut session, QuestionCount::new(3).unwrap())
        .await
        .unwrap();
    session.set_answer(QuestionId::new(1), "only one").unwrap();

    let err = flow.submit(&mut session).await.unwrap_err();
    assert!(matches!(
        err,
        QuizFlowError::Session(SessionError::IncompleteAnswers { missing: 2 })
    ));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
    assert_eq!(session.phase(), SessionPhase::QuestionsReady);
}

#[tokio::test]
async fn failed_submission_preserves_answers_for_retry() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()).failing_submit());
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    session.upload_complete("notes.pdf").unwrap();
    flow.generate(&mut session, QuestionCount::new(2).unwrap())
        .await
        .unwrap();
    session.set_answer(QuestionId::new(1), "kept").unwrap();
    session.set_answer(QuestionId::new(2), "also kept").unwrap();

    let err = flow.submit(&mut session).await.unwrap_err();
    assert!(matches!(err, QuizFlowError::Api(ApiError::Status(_))));
    assert_eq!(session.phase(), SessionPhase::QuestionsReady);
    assert_eq!(session.answers().answer(QuestionId::new(1)), Some("kept"));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn regeneration_installs_a_tailored_quiz_and_drops_old_results() {
    let tailored = vec![question(10, "History"), question(11, "History")];
    let api = Arc::new(
        FakeQuizApi::new(five_questions(), scores_18_of_25()).with_tailored(tailored),
    );
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    session.upload_complete("notes.pdf").unwrap();
    flow.generate(&mut session, QuestionCount::new(5).unwrap())
        .await
        .unwrap();
    for id in 1..=5 {
        session.set_answer(QuestionId::new(id), "done").unwrap();
    }
    flow.submit(&mut session).await.unwrap();

    flow.regenerate(&mut session, QuestionCount::new(2).unwrap())
        .await
        .unwrap();

    assert_eq!(session.phase(), SessionPhase::QuestionsReady);
    let ids: Vec<u64> = session
        .answers()
        .ids()
        .iter()
        .map(QuestionId::value)
        .collect();
    assert_eq!(ids, vec![10, 11]);
    assert!(session.evaluation().is_none());
    assert_eq!(api.regenerate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn regeneration_requires_results() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()));
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    let err = flow
        .regenerate(&mut session, QuestionCount::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        QuizFlowError::Session(SessionError::NoResults)
    ));
    assert_eq!(api.regenerate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn generation_requires_an_upload_first() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()));
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    let err = flow
        .generate(&mut session, QuestionCount::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        QuizFlowError::Session(SessionError::UploadRequired)
    ));
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn oversized_selection_is_rejected_before_any_upload() {
    let err =
        PdfSelection::new("huge.pdf", "application/pdf", vec![0; MAX_PDF_BYTES + 1]).unwrap_err();
    assert!(matches!(err, services::UploadError::TooLarge { .. }));
}

#[tokio::test]
async fn start_over_returns_to_idle() {
    let api = Arc::new(FakeQuizApi::new(five_questions(), scores_18_of_25()));
    let flow = QuizFlowService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn QuizApi>);

    let mut session = flow.new_session();
    session.upload_complete("notes.pdf").unwrap();
    flow.generate(&mut session, QuestionCount::new(2).unwrap())
        .await
        .unwrap();

    flow.start_over(&mut session);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.questions().is_empty());
}
