//! Address detector.
//!
//! Runs a grammar-based address tagger over the text and binds its
//! role-labelled tokens back to document offsets. Only an allow-list of
//! structural roles is redaction-worthy; tokens the tagger saw but that
//! are not address material still advance the scan cursor so that later
//! tokens bind to the correct occurrence.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use censor_core::{AddressKind, AddressRole, EntityKind, Span};

/// One tagger output token: its text and the structural role the
/// grammar assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressToken {
    pub text: String,
    pub role: AddressRole,
}

impl AddressToken {
    pub fn new(text: impl Into<String>, role: AddressRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// External grammar-based address parser. Implementations label every
/// token of the text, in document order, with a structural role.
pub trait AddressTagger {
    fn tag(&self, text: &str) -> Vec<AddressToken>;
}

lazy_static! {
    // grammar taggers are known to misread clock times as house numbers
    static ref CLOCK_TIME: Regex = Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?$").unwrap();
}

pub struct AddressDetector<'a> {
    tagger: &'a dyn AddressTagger,
}

impl<'a> AddressDetector<'a> {
    pub fn new(tagger: &'a dyn AddressTagger) -> Self {
        Self { tagger }
    }

    /// Bind tagger tokens to offsets with a rolling scan position: each
    /// token is located at its first occurrence at or after the cursor,
    /// and the cursor advances past it. A repeated token text therefore
    /// binds to the correct instance, not always the first one in the
    /// document.
    pub fn detect(&self, doc: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut cursor = 0usize;

        for token in self.tagger.tag(doc) {
            let Some(found) = doc[cursor..].find(&token.text) else {
                warn!(token = %token.text, "tagger token not found at or after cursor");
                continue;
            };
            let start = cursor + found;
            let end = start + token.text.len();
            cursor = end;

            if !token.role.is_redactable() {
                continue;
            }
            if CLOCK_TIME.is_match(&token.text) {
                debug!(token = %token.text, "skipping clock time mislabelled as address");
                continue;
            }

            let kind = match token.role {
                AddressRole::ZipCode => EntityKind::Address(AddressKind::ZipCode),
                AddressRole::PoBoxType | AddressRole::PoBoxId => {
                    EntityKind::Address(AddressKind::PoBox)
                }
                role => EntityKind::Address(AddressKind::Component(role)),
            };
            if let Some(span) = Span::from_range(doc, start, end, kind) {
                spans.push(span);
            }
        }
        debug!(spans = spans.len(), "address detector finished");
        spans
    }
}
