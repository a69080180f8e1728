//! Morphological stemmer.

use rust_stemmers::{Algorithm, Stemmer as Snowball};

/// Deterministic, case-insensitive English stemmer. Built once per run
/// and shared by the concept expander and the concept detector so both
/// sides normalize words identically.
pub struct Stemmer {
    inner: Snowball,
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            inner: Snowball::create(Algorithm::English),
        }
    }

    /// Case-fold, then reduce to the morphological root.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}
