//! Record Storage Module
//!
//! Implements the process-lifetime store of analyzed strings.
//!
//! ## Core Concepts
//! - **Identity**: Records are keyed by the SHA-256 content hash of their value.
//! - **Uniqueness**: Inserting an already-present hash is rejected with a conflict.
//! - **Snapshots**: Listing returns owned copies, unaffected by later mutations.
//! - **Sharing**: `RecordStore` is injected behind an `Arc`; there is no global instance.

pub mod memory;
