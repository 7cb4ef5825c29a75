// ============================================================
// Layer 3 — Dataset Errors
// ============================================================
// Every way building or reading the dataset can fail.
// The application layer wraps these in anyhow with extra
// context; the data layer returns them directly so callers
// can match on the variant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("path to fasta file must exist: '{0}'")]
    MissingBasePath(PathBuf),

    #[error("no .fasta file for split '{split}' in '{dir}'")]
    NoSplitFile { split: String, dir: PathBuf },

    #[error("cannot scan dataset directory '{dir}': {source}")]
    ScanDir {
        dir:    PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown split '{0}' (expected train, test or val)")]
    UnknownSplit(String),

    #[error("cannot read fasta '{path}': {source}")]
    Fasta {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate record name '{0}'")]
    DuplicateName(String),

    #[error("record name '{0}' does not end in a digit label")]
    InvalidLabel(String),

    #[error("label {label} of '{name}' is out of range for {d_output} classes")]
    LabelOutOfRange {
        name:     String,
        label:    usize,
        d_output: usize,
    },

    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}
