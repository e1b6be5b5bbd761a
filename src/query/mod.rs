//! Query Module
//!
//! Selects stored records through a conjunction of property predicates.
//!
//! ## Overview
//! Two entry points produce the same `PredicateSet`: structured filter parameters
//! supplied directly by the caller, and free-text queries translated by a small
//! heuristic interpreter. Either way, the filter engine narrows a snapshot of the
//! store one predicate at a time.
//!
//! ## Submodules
//! - **`filter`**: Predicate evaluation over a record snapshot.
//! - **`interpreter`**: Phrase-based translation of free text into predicates.
//! - **`types`**: Predicate set and query outcome DTOs.

pub mod filter;
pub mod interpreter;
pub mod types;
