//! Concept expansion.
//!
//! Expands a small set of seed words into the full set of stems the
//! concept detector matches against: the seeds themselves, their
//! synonyms, close specializations (hyponyms within a similarity
//! threshold) and a naive plural/singular toggle. Expansion never fails:
//! a word the lexicon does not know still contributes its own stem.

use std::collections::HashSet;

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::stem::Stemmer;

/// Hyponyms are only pulled in when this close to their parent sense,
/// which bounds over-generalization to narrowly-related specializations.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.938;

/// Flat set of normalized stems derived from one expansion. Immutable
/// once built; no provenance is tracked.
#[derive(Debug, Clone, Default)]
pub struct ExpandedConceptSet {
    stems: HashSet<String>,
}

impl ExpandedConceptSet {
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

pub struct ConceptExpander<'a> {
    stemmer: &'a Stemmer,
    lexicon: &'a dyn Lexicon,
}

impl<'a> ConceptExpander<'a> {
    pub fn new(stemmer: &'a Stemmer, lexicon: &'a dyn Lexicon) -> Self {
        Self { stemmer, lexicon }
    }

    pub fn expand(&self, seeds: &[String], threshold: f64) -> ExpandedConceptSet {
        let mut stems = HashSet::new();

        for word in seeds {
            stems.insert(self.stemmer.stem(word));

            for sense in self.lexicon.senses(word) {
                for lemma in self.lexicon.lemmas(&sense) {
                    stems.insert(self.stem_lemma(&lemma));
                }
                for hyponym in self.lexicon.hyponyms(&sense) {
                    if self.lexicon.similarity(&sense, &hyponym) >= threshold {
                        for lemma in self.lexicon.lemmas(&hyponym) {
                            stems.insert(self.stem_lemma(&lemma));
                        }
                    }
                }
            }

            // naive plural/singular toggle of the seed itself
            let toggled = match word.strip_suffix('s') {
                Some(singular) => singular.to_string(),
                None => format!("{word}s"),
            };
            stems.insert(self.stemmer.stem(&toggled));
        }

        debug!(seeds = seeds.len(), stems = stems.len(), "expanded concepts");
        ExpandedConceptSet { stems }
    }

    /// Multi-word lemmas use underscores in the database; match them the
    /// way they appear in running text.
    fn stem_lemma(&self, lemma: &str) -> String {
        self.stemmer.stem(&lemma.replace('_', " "))
    }
}
