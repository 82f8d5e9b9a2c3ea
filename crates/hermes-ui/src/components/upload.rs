//! Upload card: drag-and-drop / browse file picker plus URL ingestion.
//!
//! Files are validated at intake time and accumulate in a pending set until
//! the user submits; a single pending file goes to the single-file endpoint,
//! two or more go to the batch endpoint, and URL submission is an
//! independent path. The progress bar is simulated (see
//! [`hermes_core::progress`]) and must never be read as transfer progress.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::dioxus_core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use hermes_core::progress::{advance, COMPLETE, RESET_HOLD_MILLIS, TICK_MILLIS};
use hermes_core::validate::{
    format_file_size, is_valid_url, rejection_summary, validate_file, RejectReason,
};
use hermes_core::{FilePayload, UploadOutcome};

use super::use_ingest_client;

const FILE_INPUT_ID: &str = "hm-file-input";

/// Upload card with a drop zone, browse fallback, pending file list, and a
/// URL field. Every submission reports its outcome through
/// `on_upload_complete`, success or failure.
#[component]
pub fn UploadCard(on_upload_complete: EventHandler<UploadOutcome>) -> Element {
    let client = use_ingest_client();

    let mut pending = use_signal(Vec::<FilePayload>::new);
    let mut drag_active = use_signal(|| false);
    let mut uploading = use_signal(|| false);
    let progress_value = use_signal(|| 0.0f64);
    let progress_ticker = use_signal(|| None::<Task>);
    let mut url_text = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);

    // Shared intake path for dropped and browsed files. New files merge into
    // the existing pending set (no dedup); rejects never enter it, and one
    // aggregate message names all of them.
    let intake = move |files: Vec<FileData>| {
        if files.is_empty() {
            return;
        }
        spawn(async move {
            error_message.set(None);
            let mut accepted = Vec::new();
            let mut rejected: Vec<(String, RejectReason)> = Vec::new();

            for file in files {
                let name = file.name();
                let content_type = file.content_type().unwrap_or_default();
                if let Err(reason) = validate_file(&name, file.size(), &content_type) {
                    warn!("Rejected {name}: {reason}");
                    rejected.push((name, reason));
                    continue;
                }
                match file.read_bytes().await {
                    Ok(bytes) => {
                        accepted.push(FilePayload::new(name, content_type, bytes.to_vec()));
                    }
                    Err(e) => {
                        error!("Failed to read {name}: {e}");
                    }
                }
            }

            if !rejected.is_empty() {
                error_message.set(Some(rejection_summary(&rejected)));
            }
            // Partial acceptance: valid files join the pending set even when
            // siblings in the same batch were rejected.
            pending.write().extend(accepted);
        });
    };

    // Click the hidden file input (browse fallback for the drop zone).
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                        el.click();
                    }
                }
            }
        }
    };

    let upload_client = client.clone();
    let handle_upload = move |_| {
        let files: Vec<FilePayload> = pending.read().clone();
        if files.is_empty() {
            return;
        }
        let client = upload_client.clone();
        uploading.set(true);
        error_message.set(None);
        start_progress(progress_value, progress_ticker);

        spawn(async move {
            // Count decides the endpoint: one file uses the single-file
            // route, two or more use the batch route.
            let outcome = if files.len() == 1 {
                client.ingest_file(&files[0], None).await
            } else {
                client.ingest_files(&files, None).await
            };

            finish_progress(progress_value, progress_ticker);
            on_upload_complete.call(outcome.clone());

            if outcome.success {
                pending.write().clear();
            } else {
                error_message.set(outcome.error.clone());
            }
            uploading.set(false);
            schedule_progress_reset(progress_value);
        });
    };

    let url_client = client.clone();
    let handle_url_submit = move |_| {
        let target = url_text();
        if target.is_empty() {
            return;
        }
        if !is_valid_url(&target) {
            error_message.set(Some("Please enter a valid URL".to_string()));
            return;
        }
        let client = url_client.clone();
        uploading.set(true);
        error_message.set(None);
        start_progress(progress_value, progress_ticker);

        spawn(async move {
            let outcome = client.ingest_url(&target, None).await;

            finish_progress(progress_value, progress_ticker);
            on_upload_complete.call(outcome.clone());

            if outcome.success {
                url_text.set(String::new());
            } else {
                error_message.set(outcome.error.clone());
            }
            uploading.set(false);
            schedule_progress_reset(progress_value);
        });
    };

    let file_count = pending.read().len();
    let upload_label = if uploading() {
        "Uploading...".to_string()
    } else if file_count == 1 {
        "Upload 1 File".to_string()
    } else {
        format!("Upload {file_count} Files")
    };
    let percent = progress_value();

    rsx! {
        div { class: "hm-upload-container",
            if let Some(message) = error_message() {
                div { class: "hm-error-message", "{message}" }
            }

            // Hidden input backing the browse fallback
            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                class: "hm-hidden-input",
                multiple: true,
                accept: ".pdf,.txt,.docx,.doc,.md",
                onchange: move |evt| intake(evt.files()),
            }

            div {
                class: if drag_active() { "hm-dropzone hm-dropzone--active" } else { "hm-dropzone" },
                onclick: trigger_file_input,
                ondragenter: move |evt| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragover: move |evt| {
                    evt.prevent_default();
                    if !drag_active() {
                        drag_active.set(true);
                    }
                },
                ondragleave: move |evt| {
                    evt.prevent_default();
                    drag_active.set(false);
                },
                ondrop: move |evt| {
                    evt.prevent_default();
                    drag_active.set(false);
                    intake(evt.files());
                },

                div { class: "hm-dropzone-icon", "📄" }
                p { class: "hm-dropzone-text", "Drag and drop your files here" }
                p { class: "hm-dropzone-subtext", "or click to browse files" }
                p { class: "hm-dropzone-formats", "Supported formats: PDF, TXT, DOCX, MD" }
            }

            div { class: "hm-url-row",
                input {
                    r#type: "text",
                    class: "hm-url-input",
                    placeholder: "Enter a URL to ingest...",
                    value: "{url_text}",
                    oninput: move |evt| url_text.set(evt.value()),
                }
                button {
                    class: "hm-button",
                    disabled: uploading() || url_text.read().is_empty(),
                    onclick: handle_url_submit,
                    if uploading() { "Fetching..." } else { "Fetch URL" }
                }
            }

            if percent > 0.0 {
                div { class: "hm-progress-container",
                    div { class: "hm-progress-bar",
                        div {
                            class: "hm-progress-fill",
                            style: "width: {percent}%",
                        }
                    }
                    div { class: "hm-progress-text", "{percent:.0}%" }
                }
            }

            if file_count > 0 {
                div { class: "hm-file-list",
                    div { class: "hm-file-list-header",
                        span { "Selected Files ({file_count})" }
                        button {
                            class: "hm-clear-all-button",
                            disabled: uploading(),
                            onclick: move |_| pending.write().clear(),
                            "Clear All"
                        }
                    }

                    for (index, file) in pending.read().iter().enumerate() {
                        div { class: "hm-file-item", key: "{file.name}-{index}",
                            div { class: "hm-file-icon", {file_icon(&file.content_type)} }
                            div { class: "hm-file-details",
                                div { class: "hm-file-name", "{file.name}" }
                                div { class: "hm-file-size", {format_file_size(file.size())} }
                            }
                            button {
                                class: "hm-remove-button",
                                disabled: uploading(),
                                onclick: move |_| {
                                    pending.write().remove(index);
                                },
                                "Remove"
                            }
                        }
                    }
                }

                button {
                    class: "hm-button hm-upload-files-button",
                    disabled: uploading(),
                    onclick: handle_upload,
                    "{upload_label}"
                }
            }
        }
    }
}

/// File-type icon for the pending list.
fn file_icon(content_type: &str) -> &'static str {
    if content_type == "application/pdf" {
        "📑"
    } else if content_type == "text/plain" {
        "📝"
    } else if content_type.contains("word") {
        "📄"
    } else {
        "📁"
    }
}

/// Resets the bar and starts the 500 ms simulation ticker. The returned
/// task handle is kept so completion can cancel it; it eases toward 90 and
/// never reaches it while the request is in flight.
fn start_progress(mut progress: Signal<f64>, mut ticker: Signal<Option<Task>>) {
    if let Some(task) = ticker.take() {
        task.cancel();
    }
    progress.set(0.0);
    let task = spawn(async move {
        loop {
            TimeoutFuture::new(TICK_MILLIS).await;
            progress.set(advance(progress()));
        }
    });
    ticker.set(Some(task));
}

/// Cancels the ticker and forces the bar to 100, success or failure.
fn finish_progress(mut progress: Signal<f64>, mut ticker: Signal<Option<Task>>) {
    if let Some(task) = ticker.take() {
        task.cancel();
    }
    progress.set(COMPLETE);
}

/// Clears the completed bar after the one second display hold.
fn schedule_progress_reset(mut progress: Signal<f64>) {
    spawn(async move {
        TimeoutFuture::new(RESET_HOLD_MILLIS).await;
        progress.set(0.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_follow_the_reported_type() {
        assert_eq!(file_icon("application/pdf"), "📑");
        assert_eq!(file_icon("text/plain"), "📝");
        assert_eq!(file_icon("application/msword"), "📄");
        assert_eq!(
            file_icon("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            "📄"
        );
        assert_eq!(file_icon("application/zip"), "📁");
        assert_eq!(file_icon(""), "📁");
    }
}
