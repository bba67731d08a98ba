use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    // --- I/O ---
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // --- Markup ---
    #[error("Malformed corpus at line {line}, column {column} (byte {offset}): {reason}")]
    Parse {
        line: usize,
        column: usize,
        offset: usize,
        reason: String,
    },

    // --- Alignments ---
    #[error("Bad alignment token `{token}` in sentence {sentence}: {reason}")]
    Format {
        sentence: usize,
        token: String,
        reason: String,
    },

    // --- Evaluation ---
    #[error("Reference has {reference} sentences but {predicted} predictions were given")]
    LengthMismatch { reference: usize, predicted: usize },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
