//! Pattern detector.
//!
//! Independent regex scans over the original text, one per pattern kind,
//! yielding all non-overlapping matches with leftmost-first semantics.
//! Offsets come straight from the regex engine; the scanned buffer is
//! never a partially redacted copy.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use censor_core::{AddressKind, EntityKind, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Date,
    Phone,
    ZipCode,
    PoBox,
    StreetAddress,
}

impl PatternKind {
    pub fn entity_kind(self) -> EntityKind {
        match self {
            PatternKind::Date => EntityKind::DateTime,
            PatternKind::Phone => EntityKind::Phone,
            PatternKind::ZipCode => EntityKind::Address(AddressKind::ZipCode),
            PatternKind::PoBox => EntityKind::Address(AddressKind::PoBox),
            PatternKind::StreetAddress => EntityKind::Address(AddressKind::StreetAddress),
        }
    }
}

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|\
                      jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|\
                      nov(?:ember)?|dec(?:ember)?";

lazy_static! {
    // "15 March 2020", "March 5th, 2020", "March 5 2020"
    static ref DATE_WRITTEN: Regex = Regex::new(&format!(
        r"(?i)\b(?:\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{m})(?:\s+\d{{4}})?|(?:{m})\s+\d{{1,2}}(?:st|nd|rd|th)?(?:(?:,\s*|\s+)\d{{4}})?)\b",
        m = MONTHS
    ))
    .unwrap();
    // 3/14/2021, 14-03-2021
    static ref DATE_NUMERIC: Regex = Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap();
    static ref PHONE: Regex =
        Regex::new(r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}").unwrap();
    static ref ZIP: Regex = Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap();
    static ref PO_BOX: Regex = Regex::new(r"(?i)\bp\.?\s*o\.?\s*box\s+\d+\b").unwrap();
    static ref STREET: Regex = Regex::new(
        r"(?i)\b\d{1,6}\s+(?:[0-9a-z'.-]+\s+){0,4}(?:street|st|avenue|ave|boulevard|blvd|road|rd|lane|ln|drive|dr|court|ct|place|pl|terrace|ter|way|circle|cir|parkway|pkwy)\b"
    )
    .unwrap();
}

pub struct PatternDetector {
    kinds: Vec<PatternKind>,
}

impl PatternDetector {
    pub fn new(kinds: impl IntoIterator<Item = PatternKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn detect(&self, doc: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for &kind in &self.kinds {
            match kind {
                PatternKind::Date => {
                    scan(doc, &DATE_WRITTEN, kind, &mut spans);
                    scan(doc, &DATE_NUMERIC, kind, &mut spans);
                }
                PatternKind::Phone => scan_phones(doc, &mut spans),
                PatternKind::ZipCode => scan(doc, &ZIP, kind, &mut spans),
                PatternKind::PoBox => scan(doc, &PO_BOX, kind, &mut spans),
                PatternKind::StreetAddress => scan(doc, &STREET, kind, &mut spans),
            }
        }
        debug!(spans = spans.len(), "pattern detector finished");
        spans
    }
}

fn scan(doc: &str, re: &Regex, kind: PatternKind, out: &mut Vec<Span>) {
    for m in re.find_iter(doc) {
        if let Some(span) = Span::from_range(doc, m.start(), m.end(), kind.entity_kind()) {
            out.push(span);
        }
    }
}

/// Phone matches inside longer digit runs (card numbers, ids) must be
/// rejected. The regex engine has no lookaround, so adjacency to a digit
/// or hyphen is checked manually on both sides of each match.
fn scan_phones(doc: &str, out: &mut Vec<Span>) {
    for m in PHONE.find_iter(doc) {
        if digit_adjacent(doc, m.start(), m.end()) {
            continue;
        }
        if let Some(span) =
            Span::from_range(doc, m.start(), m.end(), PatternKind::Phone.entity_kind())
        {
            out.push(span);
        }
    }
}

fn digit_adjacent(doc: &str, start: usize, end: usize) -> bool {
    let before = doc[..start].chars().next_back();
    let after = doc[end..].chars().next();
    let is_run_char = |c: char| c.is_ascii_digit() || c == '-';
    before.is_some_and(is_run_char) || after.is_some_and(is_run_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(doc: &str, kind: PatternKind) -> Vec<Span> {
        PatternDetector::new([kind]).detect(doc)
    }

    #[test]
    fn test_international_phone() {
        let doc = "My phone number is +1 (555) 123-4567.";
        let spans = detect(doc, PatternKind::Phone);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "+1 (555) 123-4567");
    }

    #[test]
    fn test_bare_ten_digit_phone() {
        let doc = "call 5551234567 today";
        let spans = detect(doc, PatternKind::Phone);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "5551234567");
    }

    #[test]
    fn test_phone_not_matched_inside_longer_digit_run() {
        let doc = "card 4111111111111111 on file";
        let spans = detect(doc, PatternKind::Phone);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_phone_not_matched_after_hyphenated_digits() {
        let doc = "serial 99-5551234567";
        let spans = detect(doc, PatternKind::Phone);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_written_dates_both_orders() {
        let doc = "Born 14 March 1991, retired March 14, 2051.";
        let spans = detect(doc, PatternKind::Date);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].term, "14 March 1991");
        assert_eq!(spans[1].term, "March 14, 2051");
    }

    #[test]
    fn test_written_date_without_year() {
        let doc = "see you on June 3rd";
        let spans = detect(doc, PatternKind::Date);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "June 3rd");
    }

    #[test]
    fn test_numeric_date() {
        let doc = "due 3/14/2021 at noon";
        let spans = detect(doc, PatternKind::Date);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "3/14/2021");
    }

    #[test]
    fn test_month_word_prefix_not_matched() {
        let doc = "they were marching forward";
        assert!(detect(doc, PatternKind::Date).is_empty());
    }

    #[test]
    fn test_zip_codes() {
        let doc = "Gainesville FL 32601 and 20500-0003";
        let spans = detect(doc, PatternKind::ZipCode);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].term, "32601");
        assert_eq!(spans[1].term, "20500-0003");
    }

    #[test]
    fn test_zip_not_matched_inside_longer_number() {
        let doc = "id 1234567";
        assert!(detect(doc, PatternKind::ZipCode).is_empty());
    }

    #[test]
    fn test_po_box_forms() {
        for doc in ["PO Box 187", "P.O. Box 42", "p.o. box 9"] {
            let spans = detect(doc, PatternKind::PoBox);
            assert_eq!(spans.len(), 1, "failed on {doc}");
            assert_eq!(spans[0].term, doc);
        }
    }

    #[test]
    fn test_street_address() {
        let doc = "Visit me at 3800 Southwest 34TH ST Gainesville";
        let spans = detect(doc, PatternKind::StreetAddress);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].term, "3800 Southwest 34TH ST");
    }

    #[test]
    fn test_offsets_match_original_text() {
        let doc = "a\nb 5551234567 c";
        let spans = detect(doc, PatternKind::Phone);
        assert_eq!(&doc[spans[0].start..spans[0].end], spans[0].term);
    }

    #[test]
    fn test_multiple_kinds_combined() {
        let doc = "PO Box 12, zip 32601, call 5551234567";
        let spans = PatternDetector::new([
            PatternKind::PoBox,
            PatternKind::ZipCode,
            PatternKind::Phone,
        ])
        .detect(doc);
        assert_eq!(spans.len(), 3);
    }
}
