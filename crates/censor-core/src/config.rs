//! Per-run redaction configuration.

use serde::{Deserialize, Serialize};

/// Segmentation unit for concept redaction. A matching unit is redacted
/// in full, not just the matching token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Granularity {
    Line,
    #[default]
    Sentence,
}

/// Immutable configuration for one redaction run: which detector
/// categories are active, the concept seed list and the knobs shared by
/// every document in the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    pub names: bool,
    pub dates: bool,
    pub phones: bool,
    pub addresses: bool,
    pub concepts: Vec<String>,
    pub granularity: Granularity,
    pub similarity_threshold: f64,
    pub mask_char: char,
}

impl RedactionConfig {
    pub const DEFAULT_MASK_CHAR: char = '█';
    pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.938;

    /// No categories selected and no concepts supplied: a valid run that
    /// copies text through unredacted.
    pub fn is_noop(&self) -> bool {
        !self.names && !self.dates && !self.phones && !self.addresses && self.concepts.is_empty()
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            names: false,
            dates: false,
            phones: false,
            addresses: false,
            concepts: Vec::new(),
            granularity: Granularity::default(),
            similarity_threshold: Self::DEFAULT_SIMILARITY_THRESHOLD,
            mask_char: Self::DEFAULT_MASK_CHAR,
        }
    }
}
