//! String API Module
//!
//! Exposes the analyzer, the record store and the query engine over HTTP.
//!
//! ## Overview
//! `StringService` implements the four core operations (analyze-and-store, fetch,
//! delete, query) over an injected `RecordStore`. The handlers translate between
//! axum extractors and the service, mapping each `AnalyzerError` to an HTTP status.
//!
//! ## Submodules
//! - **`service`**: Core operations over an injected store.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Endpoint paths and request/response DTOs.
//! - **`router`**: Route table wiring handlers to paths.

pub mod handlers;
pub mod protocol;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;
