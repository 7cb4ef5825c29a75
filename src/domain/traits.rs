// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The dataset only talks to its collaborators through these
// traits:
//   - FastaSource implements RecordSource
//   - CharTokenizer and HfSequenceTokenizer implement
//     SequenceTokenizer
//
// Swapping the tokenizer (character-level vs. a trained
// HuggingFace vocabulary) needs no change in the dataset.

use anyhow::Result;

use crate::domain::error::DatasetError;
use crate::domain::record::SequenceRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the records of one dataset split.
pub trait RecordSource {
    /// Load every record, in file order.
    fn load_records(&self) -> Result<Vec<SequenceRecord>>;
}

// ─── PaddingSide ──────────────────────────────────────────────────────────────
/// Which end of a sequence receives padding tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingSide {
    Left,
    #[default]
    Right,
}

// ─── SequenceTokenizer ────────────────────────────────────────────────────────
/// Converts sequence text into token ids.
///
/// Must be Send + Sync because Burn's DataLoader shares the
/// dataset across worker threads.
pub trait SequenceTokenizer: Send + Sync {
    /// Encode text without adding any special tokens.
    fn encode(&self, text: &str) -> Result<Vec<u32>, DatasetError>;

    /// Id used to fill sequences up to a fixed length
    fn pad_token_id(&self) -> u32;

    /// Id appended as the end-of-sequence marker, if the
    /// vocabulary has one
    fn sep_token_id(&self) -> Option<u32>;

    /// Side on which padding is inserted
    fn padding_side(&self) -> PaddingSide;

    /// Number of distinct ids, special tokens included
    fn vocab_size(&self) -> usize;
}
