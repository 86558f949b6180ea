use dioxus::prelude::*;

use quiz_core::model::QuestionId;

use crate::vm::QuestionRowVm;

/// The answerable question list with the completeness-gated submit action.
///
/// Inputs are frozen while a submission is in flight so the outstanding
/// request always reflects what the user saw when they pressed submit.
#[component]
pub fn QuestionsPage(
    rows: Vec<QuestionRowVm>,
    file_name: Option<String>,
    busy: bool,
    error: Option<String>,
    on_answer: EventHandler<(QuestionId, String)>,
    on_submit: EventHandler<()>,
    on_start_over: EventHandler<()>,
) -> Element {
    let question_cards = rows.iter().map(|row| {
        let id = row.id;
        rsx! {
            div { key: "{row.id}", class: "card question-card",
                div { class: "question-heading",
                    span { class: "question-number", "{row.number}" }
                    h3 { class: "question-text", "{row.text}" }
                }
                input {
                    class: "question-answer",
                    r#type: "text",
                    placeholder: "Type your answer here...",
                    value: "{row.answer}",
                    disabled: busy,
                    oninput: move |evt| on_answer.call((id, evt.value())),
                }
            }
        }
    });

    rsx! {
        div { class: "page questions-page",
            header { class: "page-header",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_start_over.call(()),
                    "← Start over"
                }
                if let Some(name) = file_name.as_ref() {
                    span { class: "page-header-file",
                        span { class: "page-header-file-label", "File: " }
                        span { class: "page-header-file-name", "{name}" }
                    }
                }
            }

            h1 { class: "page-title", "Your Study Questions" }

            div { class: "question-list",
                {question_cards}
            }

            if let Some(message) = error.as_ref() {
                div { class: "banner banner-error", "{message}" }
            }

            div { class: "submit-row",
                button {
                    class: "btn btn-primary btn-large",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_submit.call(()),
                    if busy { "Submitting..." } else { "Submit Answers" }
                }
            }
        }
    }
}
