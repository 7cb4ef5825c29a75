// ============================================================
// Layer 4 — Dataset Split
// ============================================================
// Each dataset directory holds one .fasta file per split,
// e.g. "train.fasta" and "test.fasta". There is no separate
// validation file, so a validation request reads the test set.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// The substring that identifies this split's file name
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test  => "test",
        }
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            // No validation file ships with these datasets
            "test" | "val" | "valid" | "validation" => Ok(Split::Test),
            other => Err(DatasetError::UnknownSplit(other.to_string())),
        }
    }
}

// Config files may say "val"; serde goes through the same parser
impl TryFrom<String> for Split {
    type Error = DatasetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Split> for String {
    fn from(split: Split) -> Self {
        split.as_str().to_string()
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
