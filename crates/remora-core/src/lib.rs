#![forbid(unsafe_code)]

//! Causal log entry model (headless).
//!
//! Design goals:
//! - an ordered, identity-deduplicated view over entries produced by an
//!   external causal-tracking subsystem
//! - cheap identity lookups (`rank_of`) instead of retained link structures,
//!   so the model never couples to the producer's lifetimes
//! - deterministic, serde-friendly value types

pub mod model;

pub use model::{Cause, EntryId, LogEntry, LogKind, LogSequence};
