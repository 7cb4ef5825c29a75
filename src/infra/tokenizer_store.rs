// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Resolves the tokenizer named in the dataset config.
//
//   "char"              → built-in CharTokenizer (A C G T N)
//   path/tokenizer.json → HuggingFace tokenizer loaded from disk
//
// A HuggingFace tokenizer file may carry its own padding and
// truncation settings. The dataset applies max_length itself,
// so both are switched off after loading; only the pad id and
// padding direction are kept.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokenizers::{PaddingDirection, Tokenizer};

use crate::data::char_tokenizer::CharTokenizer;
use crate::domain::error::DatasetError;
use crate::domain::traits::{PaddingSide, SequenceTokenizer};

/// Name that selects the built-in character tokenizer
pub const CHAR_TOKENIZER: &str = "char";

pub struct TokenizerStore {
    name: String,
}

impl TokenizerStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the tokenizer this store points at
    pub fn load(&self) -> Result<Box<dyn SequenceTokenizer>> {
        if self.name.eq_ignore_ascii_case(CHAR_TOKENIZER) {
            tracing::info!("Using character-level tokenizer");
            return Ok(Box::new(CharTokenizer::default()));
        }

        let path = PathBuf::from(&self.name);
        tracing::info!("Loading tokenizer from '{}'", path.display());
        let tokenizer = HfSequenceTokenizer::from_file(&path)
            .with_context(|| format!("Cannot load tokenizer '{}'", path.display()))?;
        Ok(Box::new(tokenizer))
    }
}

// ─── HfSequenceTokenizer ──────────────────────────────────────────────────────
/// Adapter from a HuggingFace `tokenizers::Tokenizer` to the
/// dataset's SequenceTokenizer trait.
pub struct HfSequenceTokenizer {
    inner:        Tokenizer,
    pad_id:       u32,
    sep_id:       Option<u32>,
    padding_side: PaddingSide,
}

impl HfSequenceTokenizer {
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let inner = Tokenizer::from_file(path)
            .map_err(|e| DatasetError::Tokenizer(format!("'{}': {e}", path.display())))?;
        Self::from_tokenizer(inner)
    }

    pub fn from_tokenizer(mut inner: Tokenizer) -> Result<Self, DatasetError> {
        let padding = inner.get_padding().cloned();

        let pad_id = inner
            .token_to_id("[PAD]")
            .or_else(|| padding.as_ref().map(|p| p.pad_id))
            .unwrap_or(0);

        // Only needed when add_eos is set; checked at encode time
        let sep_id = inner
            .token_to_id("[SEP]")
            .or_else(|| inner.token_to_id("</s>"));

        let padding_side = match padding.as_ref().map(|p| &p.direction) {
            Some(PaddingDirection::Left) => PaddingSide::Left,
            _                            => PaddingSide::Right,
        };

        // max_length handling belongs to the dataset
        inner.with_padding(None);
        inner
            .with_truncation(None)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;

        Ok(Self { inner, pad_id, sep_id, padding_side })
    }
}

impl SequenceTokenizer for HfSequenceTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, DatasetError> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn pad_token_id(&self) -> u32 {
        self.pad_id
    }

    fn sep_token_id(&self) -> Option<u32> {
        self.sep_id
    }

    fn padding_side(&self) -> PaddingSide {
        self.padding_side
    }

    fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}
