//! Redaction application.
//!
//! One deterministic left-to-right pass over the pristine document:
//! un-redacted text is copied verbatim, each reconciled span is replaced
//! by mask characters, and one ledger entry is appended per span. Spans
//! are addressed by offset range only, never by string replacement, so a
//! term occurring elsewhere in the document is left alone.

use crate::reconcile::ReconciledSpanSet;
use crate::span::{LedgerEntry, RedactionResult};

/// Structural whitespace is preserved unmasked so the line/column shape
/// of the document survives redaction.
fn is_structural(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\t')
}

pub fn apply(doc: &str, spans: &ReconciledSpanSet, mask_char: char) -> RedactionResult {
    let mut redacted = String::with_capacity(doc.len());
    let mut ledger = Vec::with_capacity(spans.len());
    let mut cursor = 0usize;

    for span in spans.iter() {
        redacted.push_str(&doc[cursor..span.start]);
        for ch in doc[span.start..span.end].chars() {
            redacted.push(if is_structural(ch) { ch } else { mask_char });
        }
        ledger.push(LedgerEntry {
            term: span.term.clone(),
            start: span.start,
            end: span.end,
            kind: span.kind,
        });
        cursor = span.end;
    }
    redacted.push_str(&doc[cursor..]);

    RedactionResult { redacted, ledger }
}
