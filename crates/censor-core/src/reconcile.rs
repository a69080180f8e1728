//! Span reconciliation.
//!
//! Merges candidate spans from all active detectors into one
//! non-overlapping, offset-sorted set. This runs after every detector has
//! scanned the same pristine document, so offsets from different detectors
//! are directly comparable.

use crate::span::Span;

/// Non-overlapping spans sorted ascending by start. Built once per
/// document and consumed once by the redaction applier.
#[derive(Debug, Clone, Default)]
pub struct ReconciledSpanSet {
    spans: Vec<Span>,
}

impl ReconciledSpanSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn into_vec(self) -> Vec<Span> {
        self.spans
    }
}

/// Merge candidate spans into a reconciled set.
///
/// Candidates are sorted by start, longer span first on ties, then by
/// detector priority (`Concept > Person > DateTime > Address > Phone`).
/// A left-to-right sweep folds any span overlapping the accumulated
/// region into it, keeping the label of the first contributor. Merged
/// terms are recomputed from the document, since a merged region may be
/// larger than any single detector's match.
pub fn reconcile(doc: &str, mut candidates: Vec<Span>) -> ReconciledSpanSet {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.kind.priority().cmp(&b.kind.priority()))
    });

    let mut merged: Vec<Span> = Vec::with_capacity(candidates.len());
    for span in candidates {
        if span.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if span.start < last.end => {
                if span.end > last.end {
                    last.end = span.end;
                }
            }
            _ => merged.push(span),
        }
    }

    for span in &mut merged {
        span.term = doc[span.start..span.end].to_string();
    }

    ReconciledSpanSet { spans: merged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{EntityKind, Span};

    fn span(doc: &str, start: usize, end: usize, kind: EntityKind) -> Span {
        Span::from_range(doc, start, end, kind).unwrap()
    }

    #[test]
    fn test_disjoint_spans_pass_through_sorted() {
        let doc = "aaaa bbbb cccc";
        let set = reconcile(
            doc,
            vec![
                span(doc, 10, 14, EntityKind::Phone),
                span(doc, 0, 4, EntityKind::Person),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].start, 10);
    }

    #[test]
    fn test_overlapping_spans_merge_to_union() {
        let doc = "January 5th, 2020 was the day";
        // regex date match and a wider NER date entity over the same region
        let set = reconcile(
            doc,
            vec![
                span(doc, 0, 11, EntityKind::DateTime),
                span(doc, 0, 17, EntityKind::DateTime),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, 17);
        assert_eq!(spans[0].term, "January 5th, 2020");
    }

    #[test]
    fn test_merged_term_recomputed_from_document() {
        let doc = "abcdefghij";
        let set = reconcile(
            doc,
            vec![
                span(doc, 0, 4, EntityKind::Person),
                span(doc, 2, 8, EntityKind::Phone),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "abcdefgh");
    }

    #[test]
    fn test_first_contributor_label_wins() {
        let doc = "abcdefghij";
        let set = reconcile(
            doc,
            vec![
                span(doc, 0, 4, EntityKind::Phone),
                span(doc, 0, 4, EntityKind::Concept),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans[0].kind, EntityKind::Concept);
    }

    #[test]
    fn test_longer_span_wins_start_tie() {
        let doc = "abcdefghij";
        let set = reconcile(
            doc,
            vec![
                span(doc, 0, 3, EntityKind::Concept),
                span(doc, 0, 7, EntityKind::Phone),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, EntityKind::Phone);
        assert_eq!(spans[0].end, 7);
    }

    #[test]
    fn test_chained_overlaps_collapse_into_one() {
        let doc = "0123456789abcdef";
        let set = reconcile(
            doc,
            vec![
                span(doc, 0, 5, EntityKind::Person),
                span(doc, 4, 9, EntityKind::Phone),
                span(doc, 8, 12, EntityKind::DateTime),
            ],
        );
        let spans = set.into_vec();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (0, 12));
    }

    #[test]
    fn test_output_never_overlaps() {
        let doc = "the quick brown fox jumps over the lazy dog";
        let mut candidates = Vec::new();
        for start in [0usize, 4, 8, 10, 16, 20, 26] {
            candidates.push(span(doc, start, (start + 7).min(doc.len()), EntityKind::Concept));
        }
        let spans = reconcile(doc, candidates).into_vec();
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_empty_spans_dropped() {
        let doc = "abc";
        let set = reconcile(doc, vec![span(doc, 1, 1, EntityKind::Person)]);
        assert!(set.is_empty());
    }
}
