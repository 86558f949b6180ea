use dioxus::prelude::*;

/// Upload panel: file picking, local validation feedback, the cosmetic
/// progress bar, and the completion banner. Pure renderer; the controller
/// owns the selection and drives the upload.
#[component]
pub fn UploadPanel(
    selection_name: Option<String>,
    uploading: bool,
    progress: u8,
    uploaded_file: Option<String>,
    error: Option<String>,
    on_pick: EventHandler<()>,
    on_upload: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "card upload-panel",
            button {
                class: "upload-dropzone",
                r#type: "button",
                disabled: uploading,
                onclick: move |_| on_pick.call(()),
                p { class: "upload-dropzone-title",
                    if let Some(name) = selection_name.as_ref() {
                        "{name}"
                    } else {
                        "Click to browse for the PDF you want to study over"
                    }
                }
                p { class: "upload-dropzone-hint", "Supports PDF files up to 10MB" }
            }

            if let Some(message) = error.as_ref() {
                div { class: "banner banner-error", "{message}" }
            }

            if selection_name.is_some() && uploaded_file.is_none() && !uploading {
                div { class: "upload-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_upload.call(()),
                        "Upload PDF"
                    }
                }
            }

            if uploading {
                div { class: "upload-progress",
                    div { class: "upload-progress-labels",
                        span { "Uploading to server..." }
                        span { "{progress}%" }
                    }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {progress}%",
                        }
                    }
                }
            }

            if let Some(name) = uploaded_file.as_ref() {
                div { class: "banner banner-success",
                    "Upload complete! {name} was sent to the server."
                }
            }
        }
    }
}
