//! Service status panel: health line, counters, and a poll loop.
//!
//! The panel fetches health then status on mount and repeats the pair every
//! 20 seconds. The poll loop lives in a `use_future`, so dropping the
//! component cancels it and nothing fetches after unmount. A failed poll
//! keeps the previously displayed snapshots on screen (stale but visible),
//! shows the error notice, and leaves the loop running.

use std::sync::Arc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use hermes_core::formatting::{classify_last_updated, unix_now, LastUpdated};
use hermes_core::{HealthReport, IngestClient, ServiceStatus};

use super::use_ingest_client;

/// Poll period for the health/status pair.
const POLL_INTERVAL_MILLIS: u32 = 20_000;

const POLL_FAILURE_NOTICE: &str =
    "Failed to fetch service status. Please make sure the Hermes Ingestor service is running.";
const REFRESH_FAILURE_NOTICE: &str = "Failed to refresh data. Please try again.";

/// Fetches health then status (sequential) and applies the retention
/// policy: a snapshot is replaced only when its fetch succeeded, and the
/// "last updated" stamp advances only when both did.
async fn refresh_snapshots(
    client: Arc<IngestClient>,
    mut status: Signal<ServiceStatus>,
    mut health: Signal<HealthReport>,
    mut notice: Signal<Option<String>>,
    mut loading: Signal<bool>,
    mut last_updated: Signal<Option<u64>>,
    failure_notice: &'static str,
) {
    loading.set(true);

    let health_report = client.health().await;
    let service_status = client.status().await;

    let mut failure = None;
    if let Some(reason) = &health_report.error {
        failure = Some(reason.clone());
    } else {
        health.set(health_report);
    }
    if let Some(reason) = &service_status.error {
        failure = Some(reason.clone());
    } else {
        status.set(service_status);
    }

    match failure {
        Some(reason) => {
            error!("Service poll failed: {reason}");
            notice.set(Some(failure_notice.to_string()));
        }
        None => {
            notice.set(None);
            last_updated.set(Some(unix_now()));
        }
    }
    loading.set(false);
}

/// Self-polling panel over the ingestion service's health and counters.
#[component]
pub fn StatusPanel() -> Element {
    let client = use_ingest_client();

    let status = use_signal(ServiceStatus::unknown);
    let health = use_signal(HealthReport::unknown);
    let notice = use_signal(|| None::<String>);
    let loading = use_signal(|| true);
    let last_updated = use_signal(|| None::<u64>);

    // Poll loop: immediate fetch on mount, then every 20 seconds. Dropped
    // (and therefore stopped) with the component.
    let poll_client = client.clone();
    use_future(move || {
        let client = poll_client.clone();
        async move {
            loop {
                refresh_snapshots(
                    client.clone(),
                    status,
                    health,
                    notice,
                    loading,
                    last_updated,
                    POLL_FAILURE_NOTICE,
                )
                .await;
                TimeoutFuture::new(POLL_INTERVAL_MILLIS).await;
            }
        }
    });

    // Manual refresh shares the same loading/error state as the poll loop.
    let refresh_client = client.clone();
    let on_refresh = move |_| {
        let client = refresh_client.clone();
        spawn(async move {
            refresh_snapshots(
                client,
                status,
                health,
                notice,
                loading,
                last_updated,
                REFRESH_FAILURE_NOTICE,
            )
            .await;
        });
    };

    let status_view = status.read();
    let health_view = health.read();

    let health_class = if health_view.is_healthy() {
        "healthy"
    } else {
        "unhealthy"
    };
    let qdrant_note = if health_view.qdrant_status != "healthy" {
        format!(" (Qdrant: {})", health_view.qdrant_status)
    } else {
        String::new()
    };
    let last_updated_text = match classify_last_updated(last_updated(), unix_now()) {
        LastUpdated::Never => "Never".to_string(),
        LastUpdated::JustNow => "Just now".to_string(),
        LastUpdated::MinutesAgo(minutes) => format!("{minutes} minutes ago"),
        LastUpdated::ClockTime => clock_label(),
    };
    let document_count = status_view.document_count_label();
    let chunk_count = status_view.chunk_count_label();
    let memory_usage = status_view.memory_usage_label();

    rsx! {
        div { class: "hm-dashboard",
            if loading() {
                div { class: "hm-dashboard-loading", "Loading service status..." }
            }

            if let Some(text) = notice() {
                div { class: "hm-dashboard-error", "{text}" }
            }

            div { class: "hm-dashboard-header",
                div { class: "hm-health-indicator",
                    span { class: "hm-health-dot hm-health-dot--{health_class}" }
                    span { class: "hm-health-text hm-health-text--{health_class}",
                        "Hermes Ingestor Service: {health_view.status}{qdrant_note}"
                    }
                }

                div { class: "hm-dashboard-actions",
                    span { class: "hm-last-updated", "Last updated: {last_updated_text}" }
                    button {
                        class: "hm-refresh-button",
                        disabled: loading(),
                        onclick: on_refresh,
                        if loading() { "Refreshing..." } else { "Refresh" }
                    }
                }
            }

            div { class: "hm-status-grid",
                div { class: "hm-status-card",
                    h3 { class: "hm-card-title", "Documents" }
                    div { class: "hm-card-value", "{document_count}" }
                }
                div { class: "hm-status-card",
                    h3 { class: "hm-card-title", "Chunks" }
                    div { class: "hm-card-value", "{chunk_count}" }
                }
                div { class: "hm-status-card",
                    h3 { class: "hm-card-title", "Service Status" }
                    div { class: "hm-card-value", "{status_view.status}" }
                }
                if let Some(memory) = memory_usage {
                    div { class: "hm-status-card",
                        h3 { class: "hm-card-title", "Memory Usage" }
                        div { class: "hm-card-value", "{memory}" }
                    }
                }
            }

            if let Some(version) = health_view.version.as_ref() {
                div { class: "hm-version-info", "Hermes Ingestor version: {version}" }
            }
        }
    }
}

/// Localized clock time for "last updated" stamps older than an hour.
fn clock_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().to_locale_time_string("en-US").into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = unix_now();
        format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
    }
}
