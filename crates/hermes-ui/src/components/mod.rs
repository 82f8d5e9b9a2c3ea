//! UI components for the Hermes dashboard.
//!
//! - [`App`]: root view composing the status panel and upload card, and
//!   owner of the transient upload banner
//! - `dashboard`: self-polling service status panel
//! - `upload`: drag-and-drop / URL upload card
//!
//! # Context Providers
//!
//! The ingestion client is built once at the root and shared through Dioxus
//! context:
//!
//! ```ignore
//! let client = use_ingest_client();
//! let status = client.status().await;
//! ```

mod dashboard;
mod upload;

pub use dashboard::StatusPanel;
pub use upload::UploadCard;

use std::sync::Arc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use hermes_core::{IngestClient, IngestorConfig, UploadOutcome};

/// How long the transient upload banner stays visible.
const BANNER_MILLIS: u32 = 5_000;

/// Shared ingestion client from context.
pub fn use_ingest_client() -> Arc<IngestClient> {
    use_context::<Arc<IngestClient>>()
}

/// Resolves the client configuration once at startup.
///
/// The default base path is relative (`/api`), which reqwest cannot request
/// directly, so on the web it is anchored to the page origin here.
fn resolve_config() -> IngestorConfig {
    let config = IngestorConfig::default();
    #[cfg(target_arch = "wasm32")]
    if config.base_url.starts_with('/') {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return IngestorConfig {
                    base_url: format!("{origin}{}", config.base_url),
                    ..config
                };
            }
        }
    }
    config
}

/// Root view: page chrome, status panel, upload card, and the transient
/// banner reporting the most recent upload outcome.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Arc::new(IngestClient::new(resolve_config())));

    let mut banner = use_signal(|| None::<UploadOutcome>);
    // Generation counter so a stale auto-clear never erases a newer banner.
    let mut banner_epoch = use_signal(|| 0usize);

    let on_upload_complete = move |outcome: UploadOutcome| {
        let epoch = banner_epoch() + 1;
        banner_epoch.set(epoch);
        banner.set(Some(outcome));
        spawn(async move {
            TimeoutFuture::new(BANNER_MILLIS).await;
            if banner_epoch() == epoch {
                banner.set(None);
            }
        });
    };

    rsx! {
        div { class: "hm-app",
            header { class: "hm-header",
                h1 { class: "hm-title", "Hermes" }
                p { class: "hm-tagline", "Document ingestion for knowledge bases" }
            }

            if let Some(outcome) = banner() {
                UploadBanner { outcome }
            }

            section { class: "hm-section",
                h2 { class: "hm-section-title", "Service Status" }
                StatusPanel {}
            }

            section { class: "hm-section",
                h2 { class: "hm-section-title", "Upload Documents" }
                UploadCard { on_upload_complete }
            }

            footer { class: "hm-footer",
                span { class: "hm-footer-text",
                    "Hermes Ingestor dashboard • documents are processed by the ingestion service"
                }
            }
        }
    }
}

/// Transient banner for the most recent upload outcome.
#[component]
fn UploadBanner(outcome: UploadOutcome) -> Element {
    if outcome.success {
        let message = outcome
            .message
            .clone()
            .unwrap_or_else(|| "Upload complete".to_string());
        let chunks = outcome.chunks_created.unwrap_or(0);
        rsx! {
            div { class: "hm-banner hm-banner--success",
                "{message} ({chunks} chunks created)"
            }
        }
    } else {
        let error = outcome
            .error
            .clone()
            .unwrap_or_else(|| "Upload failed".to_string());
        rsx! {
            div { class: "hm-banner hm-banner--error", "{error}" }
        }
    }
}
