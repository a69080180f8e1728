//! Span, entity kind and ledger types.
//!
//! All offsets are byte offsets into the original, immutable document text.
//! Detectors never search a mutated buffer; every span satisfies
//! `doc[span.start..span.end] == span.term`.

use std::fmt;

use serde::Serialize;

/// Structural role assigned to a token by an address grammar tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressRole {
    StreetNumber,
    PreDirectional,
    StreetName,
    StreetSuffix,
    PlaceName,
    StateName,
    ZipCode,
    OccupancyType,
    OccupancyId,
    PoBoxType,
    PoBoxId,
    /// Recipient names and other administrative labels. Never redacted
    /// by the address detector (the entity detector owns person names).
    Recipient,
    /// Tokens outside any recognized address context.
    Unknown,
}

impl AddressRole {
    /// Roles retained by the address detector's allow-list.
    pub fn is_redactable(self) -> bool {
        !matches!(self, AddressRole::Recipient | AddressRole::Unknown)
    }
}

/// Address subkind, kept for audit granularity. All subkinds redact
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressKind {
    StreetAddress,
    PoBox,
    ZipCode,
    Component(AddressRole),
}

/// Sensitivity category of a detected span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Person,
    DateTime,
    Phone,
    Address(AddressKind),
    Concept,
}

impl EntityKind {
    /// Reconciliation tie-break order. Lower wins when two spans start at
    /// the same offset with the same length.
    pub fn priority(self) -> u8 {
        match self {
            EntityKind::Concept => 0,
            EntityKind::Person => 1,
            EntityKind::DateTime => 2,
            EntityKind::Address(_) => 3,
            EntityKind::Phone => 4,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Person => "PERSON",
            EntityKind::DateTime => "DATE",
            EntityKind::Phone => "PHONE",
            EntityKind::Concept => "CONCEPT",
            EntityKind::Address(AddressKind::StreetAddress) => "STREET_ADDRESS",
            EntityKind::Address(AddressKind::PoBox) => "PO_BOX",
            EntityKind::Address(AddressKind::ZipCode) => "ZIP_CODE",
            EntityKind::Address(AddressKind::Component(_)) => "ADDRESS_COMPONENT",
        };
        f.write_str(name)
    }
}

/// A contiguous character range in a document tagged with a sensitivity
/// category. Invariant: `0 <= start <= end <= doc.len()` and
/// `term == doc[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
    pub term: String,
}

impl Span {
    /// Build a span over `doc[start..end]`, validating bounds and char
    /// boundaries. Returns `None` for ranges the document cannot contain;
    /// callers drop those with a diagnostic rather than failing.
    pub fn from_range(doc: &str, start: usize, end: usize, kind: EntityKind) -> Option<Self> {
        if start > end || end > doc.len() {
            return None;
        }
        if !doc.is_char_boundary(start) || !doc.is_char_boundary(end) {
            return None;
        }
        Some(Span {
            start,
            end,
            kind,
            term: doc[start..end].to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One audit record per reconciled span, in application order.
/// `end` is exclusive: `doc[start..end] == term` against the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub term: String,
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
}

/// Externally visible output of one document's processing.
#[derive(Debug, Clone, Serialize)]
pub struct RedactionResult {
    pub redacted: String,
    pub ledger: Vec<LedgerEntry>,
}
