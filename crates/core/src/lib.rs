//! Shared domain types and policy for the folio backend.
//!
//! This crate is dependency-light on purpose: it holds the ID/timestamp
//! aliases used across the workspace, the domain error enum, and the
//! per-project image quota policy. Everything HTTP- or storage-specific
//! lives in the other crates.

pub mod error;
pub mod quota;
pub mod types;
