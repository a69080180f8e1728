use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A detector back-end (lexicon, tagger) failed to initialize.
    /// Fatal for the whole run: no meaningful redaction can proceed.
    #[error("Detector unavailable: {0}")]
    DetectorUnavailable(String),

    /// Input file is not valid UTF-8 text. The document is skipped;
    /// the rest of the batch continues.
    #[error("Malformed document (not valid UTF-8): {0}")]
    MalformedDocument(PathBuf),

    /// A NER annotation sidecar exists but cannot be parsed.
    #[error("Invalid annotation sidecar {path}: {source}")]
    Annotations {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
