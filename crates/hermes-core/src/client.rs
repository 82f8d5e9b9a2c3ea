//! HTTP client for the Hermes Ingestor service.
//!
//! Wraps the six ingestion operations behind normalized outcome shapes.
//! reqwest serves both targets here: hyper on native, the browser `fetch()`
//! API on WASM. One pooled client is built at startup and injected wherever
//! a widget needs it; the 30 second budget is applied to every request.
//!
//! Failure policy: the mutating calls ([`IngestClient::ingest_file`],
//! [`IngestClient::ingest_files`], [`IngestClient::ingest_url`],
//! [`IngestClient::delete_document`]) fold errors into `success: false`
//! outcomes, and the read-only calls ([`IngestClient::status`],
//! [`IngestClient::health`]) fall back to sentinel snapshots, so no call
//! ever surfaces a raw transport error to its caller.

use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::config::IngestorConfig;
use crate::error::{ApiError, ErrorBody};
use crate::types::{DeleteOutcome, HealthReport, IngestResponse, ServiceStatus, UploadOutcome};

/// A file chosen in the browser, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_or_default(&self) -> &str {
        if self.content_type.is_empty() {
            "application/octet-stream"
        } else {
            &self.content_type
        }
    }

    fn to_part(&self) -> Part {
        let part = Part::bytes(self.bytes.clone()).file_name(self.name.clone());
        // An unparseable browser-reported type falls back to a bare part.
        match part.mime_str(self.mime_or_default()) {
            Ok(typed) => typed,
            Err(_) => Part::bytes(self.bytes.clone()).file_name(self.name.clone()),
        }
    }
}

/// Client for the ingestion service HTTP boundary.
#[derive(Debug, Clone)]
pub struct IngestClient {
    http: reqwest::Client,
    config: IngestorConfig,
}

impl IngestClient {
    /// Builds the pooled HTTP client. Call this once at startup and share
    /// the instance; reqwest reuses connections internally.
    pub fn new(config: IngestorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &IngestorConfig {
        &self.config
    }

    /// Uploads a single file as multipart form data.
    pub async fn ingest_file(&self, file: &FilePayload, metadata: Option<&Value>) -> UploadOutcome {
        info!(
            "Uploading {} ({} bytes) to /ingest/file",
            file.name,
            file.size()
        );
        let form = attach_metadata(Form::new().part("file", file.to_part()), metadata);
        let request = self.post(self.config.endpoint("/ingest/file")).multipart(form);

        match self.send_for_ingest(request).await {
            Ok(body) => UploadOutcome {
                file_name: Some(file.name.clone()),
                chunks_created: Some(body.chunks_created.unwrap_or(0)),
                message: Some(
                    body.message
                        .unwrap_or_else(|| "File uploaded successfully".to_string()),
                ),
                ..UploadOutcome::succeeded()
            },
            Err(err) => {
                error!("Single-file ingest of {} failed: {err}", file.name);
                UploadOutcome {
                    file_name: Some(file.name.clone()),
                    ..UploadOutcome::failed(err.to_string())
                }
            }
        }
    }

    /// Uploads several files in one multipart request to the batch endpoint.
    pub async fn ingest_files(
        &self,
        files: &[FilePayload],
        metadata: Option<&Value>,
    ) -> UploadOutcome {
        info!("Uploading {} files to /ingest/files", files.len());
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file.to_part());
        }
        let form = attach_metadata(form, metadata);
        let request = self
            .post(self.config.endpoint("/ingest/files"))
            .multipart(form);

        match self.send_for_ingest(request).await {
            Ok(body) => UploadOutcome {
                file_count: Some(files.len()),
                files_processed: Some(body.files_processed.unwrap_or(0)),
                chunks_created: Some(body.chunks_created.unwrap_or(0)),
                message: Some(
                    body.message
                        .unwrap_or_else(|| "Files uploaded successfully".to_string()),
                ),
                ..UploadOutcome::succeeded()
            },
            Err(err) => {
                error!("Batch ingest of {} files failed: {err}", files.len());
                UploadOutcome::failed(err.to_string())
            }
        }
    }

    /// Asks the service to fetch and ingest a document by URL.
    pub async fn ingest_url(&self, url: &str, metadata: Option<Value>) -> UploadOutcome {
        info!("Requesting URL ingest for {url}");
        let payload = json!({
            "url": url,
            "metadata": metadata.unwrap_or_else(|| json!({})),
        });
        let request = self
            .post(self.config.endpoint("/ingest/url"))
            .json(&payload);

        match self.send_for_ingest(request).await {
            Ok(body) => UploadOutcome {
                url: Some(url.to_string()),
                file_name: Some(
                    body.file_name
                        .unwrap_or_else(|| trailing_segment(url).to_string()),
                ),
                chunks_created: Some(body.chunks_created.unwrap_or(0)),
                message: Some(
                    body.message
                        .unwrap_or_else(|| "URL ingested successfully".to_string()),
                ),
                ..UploadOutcome::succeeded()
            },
            Err(err) => {
                error!("URL ingest of {url} failed: {err}");
                UploadOutcome {
                    url: Some(url.to_string()),
                    ..UploadOutcome::failed(err.to_string())
                }
            }
        }
    }

    /// Fetches the service status snapshot. Never fails: an unreachable
    /// service yields the `status: "Error"` sentinel instead.
    pub async fn status(&self) -> ServiceStatus {
        match self.get_json::<ServiceStatus>("/status").await {
            Ok(status) => status,
            Err(err) => {
                error!("Status fetch failed: {err}");
                ServiceStatus::unavailable(err.to_string())
            }
        }
    }

    /// Fetches the health report. Never fails: an unreachable service yields
    /// the `unhealthy`/`unknown` sentinel instead.
    pub async fn health(&self) -> HealthReport {
        match self.get_json::<HealthReport>("/health").await {
            Ok(health) => health,
            Err(err) => {
                error!("Health check failed: {err}");
                HealthReport::unreachable(err.to_string())
            }
        }
    }

    /// Deletes a previously ingested document by filename, passing the
    /// server's body through.
    pub async fn delete_document(&self, filename: &str) -> DeleteOutcome {
        info!("Deleting document {filename}");
        let request = self
            .http
            .delete(self.config.endpoint(&format!("/document/{filename}")))
            .timeout(self.config.timeout);

        match self.send_checked(request).await {
            Ok(response) => {
                let body = response.json::<Value>().await.unwrap_or(Value::Null);
                DeleteOutcome {
                    success: true,
                    error: None,
                    body,
                }
            }
            Err(err) => {
                error!("Delete of {filename} failed: {err}");
                DeleteOutcome {
                    success: false,
                    error: Some(err.to_string()),
                    body: Value::Null,
                }
            }
        }
    }

    fn post(&self, url: String) -> RequestBuilder {
        self.http.post(url).timeout(self.config.timeout)
    }

    /// Sends a request, normalizing both transport failures and non-2xx
    /// responses into [`ApiError`].
    async fn send_checked(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    async fn send_for_ingest(&self, request: RequestBuilder) -> Result<IngestResponse, ApiError> {
        let response = self.send_checked(request).await?;
        // Missing fields get the documented defaults, so an empty or
        // non-JSON success body degrades to zero chunks, not an error.
        Ok(response.json::<IngestResponse>().await.unwrap_or_else(|e| {
            debug!("Ingest response body was not JSON: {e}");
            IngestResponse::default()
        }))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .http
            .get(self.config.endpoint(path))
            .timeout(self.config.timeout);
        let response = self.send_checked(request).await?;
        response.json::<T>().await.map_err(|e| {
            debug!("Response body for {path} was not valid JSON: {e}");
            ApiError::Unknown
        })
    }
}

/// Appends the optional metadata JSON part, skipping empty objects the same
/// way the widgets do.
fn attach_metadata(form: Form, metadata: Option<&Value>) -> Form {
    match metadata {
        Some(value) if value.as_object().map_or(true, |map| !map.is_empty()) => {
            form.text("metadata", value.to_string())
        }
        _ => form,
    }
}

/// Last path segment of a URL, used as the fallback display name for URL
/// ingests.
fn trailing_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_segment_takes_last_path_component() {
        assert_eq!(
            trailing_segment("https://example.com/docs/guide.pdf"),
            "guide.pdf"
        );
        assert_eq!(trailing_segment("https://example.com"), "example.com");
    }

    #[test]
    fn empty_content_type_falls_back_to_octet_stream() {
        let file = FilePayload::new("notes.txt", "", vec![1, 2, 3]);
        assert_eq!(file.mime_or_default(), "application/octet-stream");
        assert_eq!(file.size(), 3);
    }
}
