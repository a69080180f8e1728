//! Ledger statistics.
//!
//! Pure functions of the ledger: grouping by case-folded term with
//! per-occurrence offsets and types. Writing the report to a file or
//! stream is the caller's concern.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::span::{EntityKind, LedgerEntry};

#[derive(Debug, Clone, Serialize)]
pub struct Occurrence {
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermCount {
    /// Case-folded term text.
    pub term: String,
    pub count: usize,
    pub occurrences: Vec<Occurrence>,
}

/// Per-file redaction summary, one per processed document.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub total: usize,
    pub terms: Vec<TermCount>,
}

/// Group ledger entries by case-folded term, preserving first-occurrence
/// order of each distinct term.
pub fn summarize(path: &str, ledger: &[LedgerEntry]) -> FileReport {
    let mut terms: Vec<TermCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in ledger {
        let folded = entry.term.to_lowercase();
        let occurrence = Occurrence {
            start: entry.start,
            end: entry.end,
            kind: entry.kind,
        };
        match index.get(&folded) {
            Some(&i) => {
                terms[i].count += 1;
                terms[i].occurrences.push(occurrence);
            }
            None => {
                index.insert(folded.clone(), terms.len());
                terms.push(TermCount {
                    term: folded,
                    count: 1,
                    occurrences: vec![occurrence],
                });
            }
        }
    }

    FileReport {
        path: path.to_string(),
        total: ledger.len(),
        terms,
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed file: {}", self.path)?;
        writeln!(f, "Censored Terms Count: {}", self.total)?;
        for term in &self.terms {
            writeln!(f, "Term: {}, Count: {}", term.term, term.count)?;
            for occ in &term.occurrences {
                writeln!(
                    f,
                    "  - Start Index: {}, End Index: {}, Type: {}",
                    occ.start, occ.end, occ.kind
                )?;
            }
        }
        Ok(())
    }
}
