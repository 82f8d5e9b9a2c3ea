//! Hermes dashboard core - client-side logic for the Hermes Ingestor service.
//!
//! This crate holds everything the browser UI needs that does not depend on
//! the rendering framework: the HTTP client for the ingestion service, the
//! normalized outcome and snapshot types it returns, client-side file and URL
//! validation, the cosmetic upload-progress rule, and relative-time
//! formatting for the status panel.
//!
//! The ingestion service itself (chunking, storage, health computation) is an
//! external collaborator; this crate only calls it.
//!
//! # Examples
//!
//! ```ignore
//! use hermes_core::{IngestClient, IngestorConfig};
//!
//! let client = IngestClient::new(IngestorConfig::default());
//! let outcome = client.ingest_url("https://example.com/doc.pdf", None).await;
//! assert!(outcome.success);
//! ```

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod formatting;
pub mod progress;
pub mod types;
pub mod validate;

pub use client::{FilePayload, IngestClient};
pub use config::IngestorConfig;
pub use error::ApiError;
pub use types::{DeleteOutcome, HealthReport, ServiceStatus, UploadOutcome};
