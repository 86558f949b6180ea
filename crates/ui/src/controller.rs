use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use quiz_core::model::{QuestionCount, QuestionId, QuizSession, SessionError, SessionPhase};
use services::{PdfSelection, QuizFlowError, UploadError, progress_channel};

use crate::context::AppContext;
use crate::views::{GeneratorPanel, QuestionsPage, ResultsPage, UploadPanel};
use crate::vm::{map_question_rows, map_results};

fn mime_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    }
}

fn upload_error_message(err: &UploadError) -> String {
    match err {
        UploadError::NotPdf => "Please upload a PDF file".to_string(),
        UploadError::TooLarge { .. } => "File exceeds the 10MB limit".to_string(),
        _ => "Failed to upload file. Please try again or check server connection.".to_string(),
    }
}

fn submit_error_message(err: &QuizFlowError) -> String {
    match err {
        QuizFlowError::Session(SessionError::IncompleteAnswers { missing }) => {
            format!("Please answer every question before submitting ({missing} left).")
        }
        _ => "Failed to submit answers. Please try again.".to_string(),
    }
}

/// Owns the one `QuizSession` value and every request in flight.
///
/// Views below this component are pure renderers: they receive precomputed
/// rows, raise events, and the controller applies each event to the session
/// before handing the next snapshot back down. Async actions work on a clone
/// of the session and write the outcome back, so the rendered state only
/// changes at action boundaries and a second request can never start while
/// one is outstanding.
#[component]
pub fn QuizController() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.quiz_flow();
    let uploads = ctx.uploads();

    let mut session = use_signal({
        let flow = flow.clone();
        move || flow.new_session()
    });
    let mut selection = use_signal(|| None::<PdfSelection>);
    let mut uploading = use_signal(|| false);
    let mut upload_progress = use_signal(|| 0u8);
    let mut upload_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut flow_error = use_signal(|| None::<String>);
    let mut count = use_signal(|| QuestionCount::default().value());

    let on_pick = move |()| {
        if uploading() {
            return;
        }
        spawn(async move {
            let Some(handle) = AsyncFileDialog::new()
                .set_title("Choose a PDF to study")
                .add_filter("PDF documents", &["pdf"])
                .pick_file()
                .await
            else {
                return;
            };
            let file_name = handle.file_name();
            let bytes = handle.read().await;
            match PdfSelection::new(&file_name, mime_for(&file_name), bytes) {
                Ok(picked) => {
                    upload_error.set(None);
                    selection.set(Some(picked));
                }
                Err(err) => {
                    selection.set(None);
                    upload_error.set(Some(upload_error_message(&err)));
                }
            }
        });
    };

    let on_upload = {
        let uploads = uploads.clone();
        move |()| {
            let Some(picked) = selection.peek().clone() else {
                return;
            };
            if uploading() {
                return;
            }
            let uploads = uploads.clone();
            uploading.set(true);
            upload_error.set(None);
            upload_progress.set(0);

            let (tx, mut rx) = progress_channel();
            // mirror the watch channel into the progress signal; ends when
            // the upload drops its sender
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let percent = *rx.borrow_and_update();
                    upload_progress.set(percent);
                }
            });
            spawn(async move {
                match uploads.upload(picked, tx).await {
                    Ok(file_name) => {
                        let mut current = session.peek().clone();
                        if current.upload_complete(file_name).is_ok() {
                            session.set(current);
                        }
                        selection.set(None);
                    }
                    Err(err) => {
                        upload_error.set(Some(upload_error_message(&err)));
                    }
                }
                uploading.set(false);
            });
        }
    };

    let on_generate = {
        let flow = flow.clone();
        move |()| {
            if busy() {
                return;
            }
            let requested = match QuestionCount::new(count()) {
                Ok(requested) => requested,
                Err(err) => {
                    flow_error.set(Some(err.to_string()));
                    return;
                }
            };
            let flow = flow.clone();
            busy.set(true);
            flow_error.set(None);
            spawn(async move {
                let mut current = session.peek().clone();
                match flow.generate(&mut current, requested).await {
                    Ok(()) => session.set(current),
                    Err(_) => {
                        flow_error
                            .set(Some("Failed to generate questions. Please try again.".into()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_answer = move |(id, text): (QuestionId, String)| {
        let mut current = session.peek().clone();
        if current.set_answer(id, text).is_ok() {
            session.set(current);
        }
    };

    let on_submit = {
        let flow = flow.clone();
        move |()| {
            if busy() {
                return;
            }
            let flow = flow.clone();
            busy.set(true);
            flow_error.set(None);
            spawn(async move {
                let mut current = session.peek().clone();
                let result = flow.submit(&mut current).await;
                session.set(current);
                if let Err(err) = result {
                    flow_error.set(Some(submit_error_message(&err)));
                }
                busy.set(false);
            });
        }
    };

    let on_regenerate = {
        let flow = flow.clone();
        move |()| {
            if busy() {
                return;
            }
            let requested = match QuestionCount::new(count()) {
                Ok(requested) => requested,
                Err(err) => {
                    flow_error.set(Some(err.to_string()));
                    return;
                }
            };
            let flow = flow.clone();
            busy.set(true);
            flow_error.set(None);
            spawn(async move {
                let mut current = session.peek().clone();
                match flow.regenerate(&mut current, requested).await {
                    Ok(()) => session.set(current),
                    Err(_) => {
                        flow_error
                            .set(Some("Failed to generate questions. Please try again.".into()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_start_over = {
        let flow = flow.clone();
        move |()| {
            let mut current = session.peek().clone();
            flow.start_over(&mut current);
            session.set(current);
            selection.set(None);
            uploading.set(false);
            upload_progress.set(0);
            upload_error.set(None);
            busy.set(false);
            flow_error.set(None);
            count.set(QuestionCount::default().value());
        }
    };

    let on_count = move |value: u8| count.set(value);

    let snapshot: QuizSession = session();
    let phase = snapshot.phase();
    let selection_name = selection
        .read()
        .as_ref()
        .map(|picked| picked.file_name().to_string());

    rsx! {
        match phase {
            SessionPhase::Idle | SessionPhase::Uploaded => rsx! {
                div { class: "page home-page",
                    header { class: "page-header",
                        span { class: "brand", "QuizMaker" }
                    }
                    h1 { class: "hero-title", "Self-Study Quiz Maker" }
                    p { class: "hero-subtitle", "To begin, upload the PDF file you want to study over" }

                    UploadPanel {
                        selection_name: selection_name,
                        uploading: uploading(),
                        progress: upload_progress(),
                        uploaded_file: snapshot.file_name().map(str::to_string),
                        error: upload_error(),
                        on_pick: on_pick,
                        on_upload: on_upload,
                    }

                    if phase == SessionPhase::Uploaded {
                        GeneratorPanel {
                            count: count(),
                            busy: busy(),
                            error: flow_error(),
                            on_count: on_count,
                            on_generate: on_generate,
                        }
                    }

                    div { class: "feature-grid",
                        div { class: "feature-card",
                            h3 { "Generate Questions" }
                            p { "Relevant study questions are created from your PDF" }
                        }
                        div { class: "feature-card",
                            h3 { "Test Your Knowledge" }
                            p { "Take quizzes to reinforce your understanding of the material" }
                        }
                        div { class: "feature-card",
                            h3 { "Track Progress" }
                            p { "See your score by topic and focus on challenging areas" }
                        }
                    }
                }
            },
            SessionPhase::QuestionsReady | SessionPhase::Submitting => rsx! {
                QuestionsPage {
                    rows: map_question_rows(snapshot.questions(), snapshot.answers()),
                    file_name: snapshot.file_name().map(str::to_string),
                    busy: busy() || phase == SessionPhase::Submitting,
                    error: flow_error(),
                    on_answer: on_answer,
                    on_submit: on_submit,
                    on_start_over: on_start_over,
                }
            },
            SessionPhase::ResultsReady => {
                let evaluation = snapshot.evaluation().cloned().unwrap_or_default();
                rsx! {
                    ResultsPage {
                        vm: map_results(snapshot.questions(), snapshot.answers(), &evaluation),
                        regen_count: count(),
                        busy: busy(),
                        error: flow_error(),
                        on_regen_count: on_count,
                        on_regenerate: on_regenerate,
                        on_start_over: on_start_over,
                    }
                }
            }
        }
    }
}
