//! Concept detector.
//!
//! Matches expanded concept stems against word tokens and marks the
//! entire containing unit (line or sentence) as one span. Redacting the
//! whole unit protects against inference from surrounding context, not
//! just the literal keyword.

use tracing::debug;

use censor_core::{EntityKind, Granularity, Span};
use censor_lex::{ExpandedConceptSet, Stemmer};

use crate::segment::{self, tokens};

pub struct ConceptDetector<'a> {
    stemmer: &'a Stemmer,
    concepts: &'a ExpandedConceptSet,
}

impl<'a> ConceptDetector<'a> {
    pub fn new(stemmer: &'a Stemmer, concepts: &'a ExpandedConceptSet) -> Self {
        Self { stemmer, concepts }
    }

    /// Scan the pristine document at the chosen granularity. Offsets are
    /// computed against the original text, never against a buffer other
    /// detectors have already touched.
    pub fn detect(&self, doc: &str, granularity: Granularity) -> Vec<Span> {
        if self.concepts.is_empty() {
            return Vec::new();
        }
        let units = match granularity {
            Granularity::Line => segment::lines(doc),
            Granularity::Sentence => segment::sentences(doc),
        };

        let mut spans = Vec::new();
        for unit in units {
            let matched = tokens(unit.text(doc))
                .iter()
                .any(|token| self.concepts.contains(&self.stemmer.stem(token)));
            if matched {
                if let Some(span) =
                    Span::from_range(doc, unit.start, unit.end, EntityKind::Concept)
                {
                    spans.push(span);
                }
            }
        }
        debug!(spans = spans.len(), "concept detector finished");
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use censor_lex::{ConceptExpander, MemoryLexicon, DEFAULT_SIMILARITY_THRESHOLD};

    fn detect(doc: &str, seeds: &[&str], granularity: Granularity) -> Vec<Span> {
        let stemmer = Stemmer::new();
        let lexicon = MemoryLexicon::new();
        let seeds: Vec<String> = seeds.iter().map(|s| s.to_string()).collect();
        let concepts =
            ConceptExpander::new(&stemmer, &lexicon).expand(&seeds, DEFAULT_SIMILARITY_THRESHOLD);
        ConceptDetector::new(&stemmer, &concepts).detect(doc, granularity)
    }

    #[test]
    fn test_whole_sentence_marked() {
        let doc = "This is a test. This is another line.";
        let spans = detect(doc, &["test"], Granularity::Sentence);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "This is a test.");
        assert_eq!((spans[0].start, spans[0].end), (0, 15));
    }

    #[test]
    fn test_whole_line_marked() {
        let doc = "secret plans here\nharmless line\n";
        let spans = detect(doc, &["secret"], Granularity::Line);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "secret plans here");
    }

    #[test]
    fn test_inflected_forms_match() {
        let doc = "They were testing all night.";
        let spans = detect(doc, &["test"], Granularity::Sentence);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_case_folded_match() {
        let doc = "TESTS everywhere.";
        let spans = detect(doc, &["test"], Granularity::Sentence);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_repeated_unit_offsets_stay_distinct() {
        // same sentence text twice; offsets must not collapse onto the
        // first occurrence
        let doc = "the plan is off. the plan is off.";
        let spans = detect(doc, &["plan"], Granularity::Sentence);
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (0, 16));
        assert_eq!((spans[1].start, spans[1].end), (17, 33));
    }

    #[test]
    fn test_no_seeds_no_spans() {
        let doc = "anything at all";
        assert!(detect(doc, &[], Granularity::Sentence).is_empty());
    }

    #[test]
    fn test_whitespace_unit_never_matches() {
        let doc = "   \nsecret\n";
        let spans = detect(doc, &["secret"], Granularity::Line);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 4);
    }
}
