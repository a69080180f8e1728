//! Entity detector.
//!
//! Consumes spans already computed by an external named-entity
//! recognizer and filters/relabels them into this system's entity
//! vocabulary. The recognizer's offsets are trusted as ground truth and
//! never recomputed; annotations the document cannot contain are dropped
//! with a diagnostic, never surfaced as errors.

use serde::Deserialize;
use tracing::{debug, warn};

use censor_core::{AddressKind, AddressRole, EntityKind, RedactionConfig, Span};

/// One annotation from the external recognizer: a byte range and a label
/// from its vocabulary (`PERSON`, `DATE`, `TIME`, `LOCATION`, `GPE`,
/// `LOC`, `FAC`, ...). Unknown labels are carried through and ignored by
/// the filter.
#[derive(Debug, Clone, Deserialize)]
pub struct NerAnnotation {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

pub struct EntityDetector;

impl EntityDetector {
    /// Filter annotations into spans for the categories the run enabled.
    /// Location-like labels fold into address components.
    pub fn detect(
        &self,
        doc: &str,
        annotations: &[NerAnnotation],
        config: &RedactionConfig,
    ) -> Vec<Span> {
        let mut spans = Vec::new();
        for ann in annotations {
            let kind = match ann.label.to_uppercase().as_str() {
                "PERSON" if config.names => EntityKind::Person,
                "DATE" | "TIME" | "DATE_TIME" if config.dates => EntityKind::DateTime,
                "LOCATION" | "GPE" | "LOC" | "FAC" if config.addresses => {
                    EntityKind::Address(AddressKind::Component(AddressRole::PlaceName))
                }
                _ => continue,
            };
            match Span::from_range(doc, ann.start, ann.end, kind) {
                Some(span) => spans.push(span),
                None => warn!(
                    start = ann.start,
                    end = ann.end,
                    label = %ann.label,
                    "dropping annotation outside document bounds"
                ),
            }
        }
        debug!(spans = spans.len(), "entity detector finished");
        spans
    }
}
