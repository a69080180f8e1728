//! Core domain models and logic for censor
//!
//! This crate contains:
//! - Domain models (Span, EntityKind, LedgerEntry, RedactionResult)
//! - Span reconciliation (overlap resolution across detectors)
//! - Redaction application (single-pass masking + audit ledger)
//! - Ledger statistics

pub mod apply;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod span;
pub mod stats;

pub use apply::apply;
pub use config::{Granularity, RedactionConfig};
pub use error::{Error, Result};
pub use reconcile::{ReconciledSpanSet, reconcile};
pub use span::{AddressKind, AddressRole, EntityKind, LedgerEntry, RedactionResult, Span};
pub use stats::{FileReport, summarize};
