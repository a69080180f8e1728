//! Batch runner: enumerate inputs, process each document through the
//! pipeline, write redacted copies and the accumulated stats report.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use censor_core::{Error, FileReport, summarize};
use censor_detect::{NerAnnotation, Pipeline};
use censor_lex::MemoryLexicon;

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.redaction_config();
    if config.is_noop() {
        info!("no detector categories or concepts selected; copying text unredacted");
    }

    // shared back-ends are built once, before any document is processed;
    // a failure here aborts the whole run
    let lexicon = match &cli.lexicon {
        Some(path) => MemoryLexicon::load(path)?,
        None => MemoryLexicon::new(),
    };
    let pipeline = Pipeline::new(config, &lexicon);

    let files = input_files(&cli.input)?;
    if files.is_empty() {
        warn!(pattern = %cli.input, "no input files matched");
    }
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("cannot create output directory {}", cli.output.display()))?;

    let mut reports: Vec<FileReport> = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        match process_file(&pipeline, file, &cli.output) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping document");
                failed += 1;
            }
        }
    }
    info!(
        processed = reports.len(),
        skipped = failed,
        "batch finished"
    );

    if let Some(dest) = &cli.stats {
        write_stats(dest, &reports)?;
    }
    Ok(())
}

/// Enumerate the input glob, files only, sorted for determinism.
fn input_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern).context("invalid input pattern")? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Process one document. Failures here are isolated to the document.
fn process_file(pipeline: &Pipeline, input: &Path, output_dir: &Path) -> censor_core::Result<FileReport> {
    let bytes = fs::read(input)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::MalformedDocument(input.to_path_buf()))?;
    let annotations = load_annotations(pipeline, input)?;

    let result = pipeline.redact(&text, &annotations);
    debug!(
        file = %input.display(),
        spans = result.ledger.len(),
        "document redacted"
    );

    let output = output_file(input, output_dir);
    fs::write(&output, &result.redacted)?;

    Ok(summarize(&input.display().to_string(), &result.ledger))
}

/// NER annotations arrive as an external sidecar `<input>.ner.json`.
/// A missing sidecar means no annotations; an unparseable one fails the
/// document.
fn load_annotations(pipeline: &Pipeline, input: &Path) -> censor_core::Result<Vec<NerAnnotation>> {
    let sidecar = PathBuf::from(format!("{}.ner.json", input.display()));
    if !sidecar.exists() {
        if pipeline.config().names {
            warn!(
                file = %input.display(),
                "no NER sidecar found; person names will not be redacted"
            );
        }
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&sidecar)?;
    serde_json::from_str(&content).map_err(|source| Error::Annotations {
        path: sidecar,
        source,
    })
}

fn output_file(input: &Path, output_dir: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{name}.censored"))
}

fn write_stats(dest: &str, reports: &[FileReport]) -> Result<()> {
    let mut text = String::new();
    for report in reports {
        text.push_str(&report.to_string());
    }
    match dest {
        "-" => print!("{text}"),
        "stderr" => eprint!("{text}"),
        path => {
            fs::write(path, &text).with_context(|| format!("cannot write stats to {path}"))?;
        }
    }
    std::io::stdout().flush().ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_naming() {
        let out = output_file(Path::new("docs/letter.txt"), Path::new("redacted"));
        assert_eq!(out, PathBuf::from("redacted/letter.txt.censored"));
    }
}
