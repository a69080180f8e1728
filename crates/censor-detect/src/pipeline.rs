//! Redaction pipeline.
//!
//! One pipeline is built per run: the concept set is expanded once, the
//! tagger and stemmer are created once, and every document then flows
//! through the same immutable detectors. Detectors all scan the pristine
//! document text; their candidate spans are reconciled and applied in a
//! single pass.

use tracing::debug;

use censor_core::{RedactionConfig, RedactionResult, Span, apply, reconcile};
use censor_lex::{ConceptExpander, ExpandedConceptSet, Lexicon, Stemmer};

use crate::address::{AddressDetector, AddressTagger};
use crate::concept::ConceptDetector;
use crate::entity::{EntityDetector, NerAnnotation};
use crate::pattern::{PatternDetector, PatternKind};
use crate::tagger::UsAddressTagger;

pub struct Pipeline {
    config: RedactionConfig,
    stemmer: Stemmer,
    concepts: ExpandedConceptSet,
    tagger: Box<dyn AddressTagger>,
}

impl Pipeline {
    pub fn new(config: RedactionConfig, lexicon: &dyn Lexicon) -> Self {
        let stemmer = Stemmer::new();
        let concepts = ConceptExpander::new(&stemmer, lexicon)
            .expand(&config.concepts, config.similarity_threshold);
        Self {
            config,
            stemmer,
            concepts,
            tagger: Box::new(UsAddressTagger),
        }
    }

    /// Substitute the address grammar collaborator.
    pub fn with_tagger(mut self, tagger: Box<dyn AddressTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Process one document: run every active detector against the
    /// original text, reconcile, redact.
    pub fn redact(&self, doc: &str, annotations: &[NerAnnotation]) -> RedactionResult {
        let mut candidates: Vec<Span> = Vec::new();

        if !self.concepts.is_empty() {
            candidates.extend(
                ConceptDetector::new(&self.stemmer, &self.concepts)
                    .detect(doc, self.config.granularity),
            );
        }

        if self.config.names || self.config.dates || self.config.addresses {
            candidates.extend(EntityDetector.detect(doc, annotations, &self.config));
        }

        let mut kinds = Vec::new();
        if self.config.dates {
            kinds.push(PatternKind::Date);
        }
        if self.config.phones {
            kinds.push(PatternKind::Phone);
        }
        if self.config.addresses {
            kinds.extend([
                PatternKind::ZipCode,
                PatternKind::PoBox,
                PatternKind::StreetAddress,
            ]);
        }
        if !kinds.is_empty() {
            candidates.extend(PatternDetector::new(kinds).detect(doc));
        }

        if self.config.addresses {
            candidates.extend(AddressDetector::new(self.tagger.as_ref()).detect(doc));
        }

        debug!(candidates = candidates.len(), "detectors finished");
        let reconciled = reconcile(doc, candidates);
        apply(doc, &reconciled, self.config.mask_char)
    }
}
