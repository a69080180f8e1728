//! Lexical semantics for censor
//!
//! This crate contains:
//! - A morphological stemmer (Porter-family English, via rust-stemmers)
//! - The lexical semantic database interface and an in-memory
//!   implementation with Wu-Palmer sense similarity
//! - Concept expansion (seed words -> related word stems)

pub mod expand;
pub mod lexicon;
pub mod stem;

pub use expand::{ConceptExpander, DEFAULT_SIMILARITY_THRESHOLD, ExpandedConceptSet};
pub use lexicon::{Lexicon, MemoryLexicon, Sense};
pub use stem::Stemmer;
