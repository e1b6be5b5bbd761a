//! String Analyzer Library
//!
//! This library crate defines the core modules of the string analysis service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`analysis`**: Pure property computation for a string (length, palindrome flag,
//!   unique characters, word count, frequency map) and its SHA-256 content identity.
//! - **`storage`**: The in-memory `RecordStore`, one record per distinct value, keyed by
//!   content hash.
//! - **`query`**: The filter engine (conjunction of property predicates) and the
//!   phrase-based natural-language interpreter that feeds it.
//! - **`api`**: The core operations (`StringService`) and their HTTP handlers.
//! - **`config`**: Listen address and log level resolution.
//! - **`error`**: The error taxonomy shared by every module.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod storage;
