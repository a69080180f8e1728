use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use censor_core::{Granularity, RedactionConfig};

#[derive(Parser)]
#[command(name = "censor")]
#[command(about = "Redact sensitive spans from plain-text documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input files pattern (glob)
    #[arg(long)]
    pub input: String,

    /// Output directory (created if missing)
    #[arg(long)]
    pub output: PathBuf,

    /// Redact person names (requires NER annotation sidecars)
    #[arg(long)]
    pub names: bool,

    /// Redact dates
    #[arg(long)]
    pub dates: bool,

    /// Redact phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Redact postal addresses
    #[arg(long)]
    pub address: bool,

    /// Redact a concept; repeatable
    #[arg(long = "concept")]
    pub concepts: Vec<String>,

    /// Unit redacted when a concept matches
    #[arg(long, value_enum, default_value_t = GranularityArg::Sentence)]
    pub granularity: GranularityArg,

    /// Wu-Palmer similarity threshold for concept hyponym expansion
    #[arg(long, default_value_t = censor_lex::DEFAULT_SIMILARITY_THRESHOLD)]
    pub similarity_threshold: f64,

    /// Lexical semantic database (JSON sense table)
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Masking character
    #[arg(long, default_value_t = RedactionConfig::DEFAULT_MASK_CHAR)]
    pub mask_char: char,

    /// Redaction stats destination: a file path, `-` for stdout, or
    /// `stderr`
    #[arg(long)]
    pub stats: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Line,
    Sentence,
}

impl From<GranularityArg> for Granularity {
    fn from(value: GranularityArg) -> Self {
        match value {
            GranularityArg::Line => Granularity::Line,
            GranularityArg::Sentence => Granularity::Sentence,
        }
    }
}

impl Cli {
    pub fn redaction_config(&self) -> RedactionConfig {
        RedactionConfig {
            names: self.names,
            dates: self.dates,
            phones: self.phones,
            addresses: self.address,
            concepts: self.concepts.clone(),
            granularity: self.granularity.into(),
            similarity_threshold: self.similarity_threshold,
            mask_char: self.mask_char,
        }
    }
}
