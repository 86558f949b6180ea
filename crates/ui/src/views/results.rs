use dioxus::prelude::*;

use crate::vm::ResultsVm;

/// Circular score gauge; the geometry is derived from the percentage alone.
#[component]
fn ScoreRing(percentage: f64, radius: f64, stroke: f64, label: String, sublabel: String) -> Element {
    let center = radius + stroke + 4.0;
    let size = center * 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let offset = circumference * (1.0 - percentage.clamp(0.0, 100.0) / 100.0);

    rsx! {
        div { class: "score-ring",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "transparent",
                    class: "score-ring-track",
                    stroke_width: "{stroke}",
                }
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    fill: "transparent",
                    class: "score-ring-value",
                    stroke_width: "{stroke}",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    stroke_linecap: "round",
                    transform: "rotate(-90 {center} {center})",
                }
            }
            div { class: "score-ring-overlay",
                span { class: "score-ring-label", "{label}" }
                span { class: "score-ring-sublabel", "{sublabel}" }
            }
        }
    }
}

/// Graded results: overall gauge, strengths and weaknesses, the per-category
/// chart, a per-question review, and the tailored-regeneration panel.
///
/// Everything shown here is precomputed in `ResultsVm`; the markup only
/// sizes bars and rings from the numbers it is given.
#[component]
pub fn ResultsPage(
    vm: ResultsVm,
    regen_count: u8,
    busy: bool,
    error: Option<String>,
    on_regen_count: EventHandler<u8>,
    on_regenerate: EventHandler<()>,
    on_start_over: EventHandler<()>,
) -> Element {
    let mut remake_quiz = use_signal(|| None::<bool>);

    rsx! {
        div { class: "page results-page",
            header { class: "page-header",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_start_over.call(()),
                    "← Start over"
                }
            }

            h1 { class: "page-title", "Your Quiz Results" }

            div { class: "overall-score",
                h2 { class: "section-title", "Your Full Score" }
                ScoreRing {
                    percentage: vm.overall_percentage,
                    radius: 70.0,
                    stroke: 12.0,
                    label: vm.total_label.clone(),
                    sublabel: vm.max_label.clone(),
                }
                p { class: "overall-percent", "{vm.overall_label}" }
            }

            div { class: "feedback-grid",
                section { class: "card feedback-card",
                    h3 { class: "feedback-title feedback-title--strengths", "Strengths" }
                    ul {
                        for (index, strength) in vm.strengths.iter().enumerate() {
                            li { key: "{index}", "{strength}" }
                        }
                    }
                }
                section { class: "card feedback-card",
                    h3 { class: "feedback-title feedback-title--weaknesses", "Areas to Improve" }
                    ul {
                        for (index, weakness) in vm.weaknesses.iter().enumerate() {
                            li { key: "{index}", "{weakness}" }
                        }
                    }
                }
            }

            section { class: "card category-chart",
                h3 { class: "section-title", "Performance by Category" }
                div { class: "category-bars",
                    for bar in vm.categories.iter() {
                        div { key: "{bar.name}", class: "category-bar-row",
                            span { class: "category-bar-name", "{bar.name}" }
                            div { class: "category-bar-track",
                                div {
                                    class: "category-bar-fill",
                                    style: "width: {bar.percentage}%",
                                }
                            }
                            span { class: "category-bar-value", "{bar.percent_label}" }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Question Review" }
            div { class: "review-list",
                for review in vm.reviews.iter() {
                    div { key: "{review.number}", class: "card review-card",
                        div { class: "review-main",
                            h3 { class: "review-question", "{review.text}" }
                            span { class: "review-category", "{review.category}" }
                            div { class: "review-answer",
                                div { class: "review-answer-label", "Your Answer:" }
                                div { class: "review-answer-text", "{review.answer}" }
                            }
                        }
                        div { class: "review-score",
                            ScoreRing {
                                percentage: review.percentage,
                                radius: 25.0,
                                stroke: 6.0,
                                label: review.score_label.clone(),
                                sublabel: String::new(),
                            }
                        }
                    }
                }
            }

            section { class: "card remake-panel",
                h3 { class: "section-title",
                    "Want to remake a quiz that focuses on your weaknesses?"
                }
                div { class: "remake-choice",
                    button {
                        class: if remake_quiz() == Some(true) { "btn btn-primary" } else { "btn btn-outline" },
                        r#type: "button",
                        onclick: move |_| remake_quiz.set(Some(true)),
                        "Yes"
                    }
                    button {
                        class: if remake_quiz() == Some(false) { "btn btn-primary" } else { "btn btn-outline" },
                        r#type: "button",
                        onclick: move |_| remake_quiz.set(Some(false)),
                        "No"
                    }
                }

                if remake_quiz() == Some(true) {
                    div { class: "generator-slider",
                        div { class: "generator-slider-labels",
                            span { "Number of questions to generate:" }
                            span { class: "generator-count", "{regen_count}" }
                        }
                        input {
                            r#type: "range",
                            min: "1",
                            max: "20",
                            step: "1",
                            value: "{regen_count}",
                            disabled: busy,
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<u8>() {
                                    on_regen_count.call(value);
                                }
                            },
                        }
                    }
                    button {
                        class: "btn btn-primary btn-wide",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_regenerate.call(()),
                        if busy { "Building your new quiz..." } else { "Regenerate New Quiz" }
                    }
                }

                if remake_quiz() == Some(false) {
                    div { class: "remake-decline",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_start_over.call(()),
                            "Go Back to Home"
                        }
                    }
                }

                if let Some(message) = error.as_ref() {
                    div { class: "banner banner-error", "{message}" }
                }
            }
        }
    }
}
