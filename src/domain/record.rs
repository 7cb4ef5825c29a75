// ============================================================
// Layer 3 — SequenceRecord Domain Type
// ============================================================
// One record read from a FASTA file.
//
// The class label is encoded in the record name itself:
// the last non-whitespace character of the header is the
// label digit.
//
// Example:
//   >chr1:1000-1200 enhancer 1
//   ACGTTGCA...
//
//   name  = "chr1:1000-1200 enhancer 1"
//   label = 1

use crate::domain::error::DatasetError;

/// A single named DNA sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// The full header line without the leading '>', whitespace
    /// kept as written
    pub name: String,

    /// Raw sequence bytes, case preserved
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name:     name.into(),
            sequence: sequence.into(),
        }
    }

    /// Label encoded in this record's name
    pub fn label(&self) -> Result<usize, DatasetError> {
        label_from_name(&self.name)
    }
}

/// Read the class label from the last non-whitespace character
/// of a record name.
pub fn label_from_name(name: &str) -> Result<usize, DatasetError> {
    name.trim_end()
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as usize)
        .ok_or_else(|| DatasetError::InvalidLabel(name.to_string()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_last_digit() {
        assert_eq!(label_from_name("seq_17 class 1").unwrap(), 1);
        assert_eq!(label_from_name("neg_0").unwrap(), 0);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        assert_eq!(label_from_name("region 1   \t").unwrap(), 1);
    }

    #[test]
    fn test_multi_digit_suffix_uses_last_digit() {
        // Only the final character counts, as in "...12" → 2
        assert_eq!(label_from_name("sample12").unwrap(), 2);
    }

    #[test]
    fn test_non_digit_is_rejected() {
        assert!(matches!(
            label_from_name("unlabelled"),
            Err(DatasetError::InvalidLabel(_))
        ));
        assert!(label_from_name("").is_err());
    }

    #[test]
    fn test_record_label() {
        let r = SequenceRecord::new("x 1", b"ACGTn".to_vec());
        assert_eq!(r.label().unwrap(), 1);
    }
}
