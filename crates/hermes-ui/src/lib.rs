//! Hermes UI - browser dashboard for the Hermes Ingestor service.
//!
//! A small Dioxus web application for feeding documents into a remote
//! ingestion service: an upload card (drag-and-drop, browse, or URL) and a
//! self-polling status panel over the service's health and document/chunk
//! counters. All of the actual ingestion work (chunking, embedding, storage)
//! happens in the external service; this crate is pure UI plumbing on top of
//! [`hermes_core`].

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
