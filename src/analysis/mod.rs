//! String Analysis Module
//!
//! Computes the derived properties of a string and gives it a canonical identity.
//!
//! ## Overview
//! Analysis is a pure, total function: any string (empty, whitespace-only or arbitrary
//! Unicode) maps to exactly one property set. The SHA-256 digest of the value's UTF-8
//! bytes doubles as the record identity, so a value can always be located again by
//! re-hashing it.
//!
//! ## Submodules
//! - **`analyzer`**: Property computation (hash, length, palindrome test, counts).
//! - **`types`**: The property set and the stored record shape.

pub mod analyzer;
pub mod types;
