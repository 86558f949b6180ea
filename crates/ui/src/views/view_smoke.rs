use dioxus::prelude::*;

use quiz_core::model::{AnswerSheet, Evaluation, Question, QuestionId, Score};

use super::test_harness::{render_component, render_controller};
use crate::views::{QuestionsPage, ResultsPage};
use crate::vm::{map_question_rows, map_results};

#[test]
fn idle_controller_renders_the_upload_prompt() {
    let html = render_controller();
    assert!(html.contains("Self-Study Quiz Maker"), "missing hero in {html}");
    assert!(
        html.contains("Supports PDF files up to 10MB"),
        "missing upload hint in {html}"
    );
    // generation is locked until an upload completes
    assert!(!html.contains("Generate Quiz Questions"), "generator leaked into {html}");
}

fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(QuestionId::new(1), "What is a borrow?", "Memory"),
        Question::new(QuestionId::new(2), "What is a move?", "Memory"),
        Question::new(QuestionId::new(3), "When was 1.0 released?", "History"),
    ]
}

#[component]
fn QuestionsHarness() -> Element {
    let questions = sample_questions();
    let mut answers = AnswerSheet::for_questions(&questions);
    answers.set_answer(QuestionId::new(1), "a reference").unwrap();
    let rows = map_question_rows(&questions, &answers);
    rsx! {
        QuestionsPage {
            rows,
            file_name: Some("notes.pdf".to_string()),
            busy: false,
            error: None,
            on_answer: move |_| {},
            on_submit: move |_| {},
            on_start_over: move |_| {},
        }
    }
}

#[test]
fn questions_page_renders_rows_and_answers() {
    let html = render_component(QuestionsHarness);
    assert!(html.contains("Your Study Questions"), "missing title in {html}");
    assert!(html.contains("What is a borrow?"), "missing question in {html}");
    assert!(html.contains("a reference"), "missing typed answer in {html}");
    assert!(html.contains("notes.pdf"), "missing file name in {html}");
    assert!(html.contains("Submit Answers"), "missing submit in {html}");
}

#[component]
fn ResultsHarness() -> Element {
    let questions = sample_questions();
    let mut answers = AnswerSheet::for_questions(&questions);
    answers.set_answer(QuestionId::new(1), "a reference").unwrap();
    answers.set_answer(QuestionId::new(2), "a transfer").unwrap();
    answers.set_answer(QuestionId::new(3), "2015").unwrap();
    let evaluation = Evaluation {
        strengths: vec!["ownership rules".into()],
        weaknesses: vec!["release history".into()],
        scores: vec![
            Score::new(QuestionId::new(1), 5.0),
            Score::new(QuestionId::new(2), 3.0),
        ],
    };
    let vm = map_results(&questions, &answers, &evaluation);
    rsx! {
        ResultsPage {
            vm,
            regen_count: 5,
            busy: false,
            error: None,
            on_regen_count: move |_| {},
            on_regenerate: move |_| {},
            on_start_over: move |_| {},
        }
    }
}

#[test]
fn results_page_renders_aggregates_and_feedback() {
    let html = render_component(ResultsHarness);
    assert!(html.contains("Your Quiz Results"), "missing title in {html}");
    // 8 of 15 points
    assert!(html.contains("53%"), "missing overall percent in {html}");
    assert!(html.contains("ownership rules"), "missing strength in {html}");
    assert!(html.contains("release history"), "missing weakness in {html}");
    assert!(html.contains("Memory"), "missing category in {html}");
    assert!(html.contains("width: 80%"), "missing category bar width in {html}");
    // the ungraded question still shows up, scored zero
    assert!(html.contains("0/5"), "missing ungraded row in {html}");
    assert!(
        html.contains("Regenerate New Quiz") || html.contains("weaknesses"),
        "missing remake panel in {html}"
    );
}
