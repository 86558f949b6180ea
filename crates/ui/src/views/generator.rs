use dioxus::prelude::*;

/// Question-count slider and the generate action for the uploaded document.
#[component]
pub fn GeneratorPanel(
    count: u8,
    busy: bool,
    error: Option<String>,
    on_count: EventHandler<u8>,
    on_generate: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "card generator-panel",
            h2 { class: "panel-title", "Generate Quiz Questions" }

            div { class: "generator-slider",
                div { class: "generator-slider-labels",
                    span { "Number of questions to generate:" }
                    span { class: "generator-count", "{count}" }
                }
                input {
                    r#type: "range",
                    min: "1",
                    max: "20",
                    step: "1",
                    value: "{count}",
                    disabled: busy,
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u8>() {
                            on_count.call(value);
                        }
                    },
                }
            }

            button {
                class: "btn btn-primary btn-wide",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_generate.call(()),
                "Generate Questions"
            }

            if busy {
                p { class: "generator-wait", "Generating your questions... Please wait." }
            }

            if let Some(message) = error.as_ref() {
                div { class: "banner banner-error", "{message}" }
            }
        }
    }
}
