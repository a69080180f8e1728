//! Detectors and pipeline for censor
//!
//! Each detector independently scans the same pristine document and
//! yields candidate spans; the pipeline joins their output, reconciles
//! overlaps and applies the redaction in one pass.
//!
//! This crate contains:
//! - Segmentation (lines, sentences, word tokens)
//! - ConceptDetector (expanded-stem matching over whole units)
//! - EntityDetector (filters externally supplied NER annotations)
//! - PatternDetector (regex scans for dates, phones, zips, PO boxes,
//!   street addresses)
//! - AddressDetector (grammar-tagger roles with rolling offset binding)
//! - Pipeline (detectors -> reconciler -> applier)

pub mod address;
pub mod concept;
pub mod entity;
pub mod pattern;
pub mod pipeline;
pub mod segment;
pub mod tagger;

pub use address::{AddressDetector, AddressTagger, AddressToken};
pub use concept::ConceptDetector;
pub use entity::{EntityDetector, NerAnnotation};
pub use pattern::{PatternDetector, PatternKind};
pub use pipeline::Pipeline;
pub use segment::{Unit, lines, sentences, tokens};
pub use tagger::UsAddressTagger;
