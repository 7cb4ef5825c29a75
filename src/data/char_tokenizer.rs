// ============================================================
// Layer 4 — Character Tokenizer
// ============================================================
// One token per nucleotide. No vocabulary training needed.
//
// Vocabulary layout (ids are fixed):
//
//   0 [CLS]   1 [SEP]   2 [BOS]   3 [MASK]
//   4 [PAD]   5 [RESERVED]        6 [UNK]
//   7 A       8 C       9 G       10 T      11 N
//
// Only [PAD], [SEP] and [UNK] are emitted by this crate; the
// other specials keep their ids for compatibility with
// vocabularies built the same way.
//
// Characters outside the alphabet map to [UNK]. Lookup is
// ASCII case-insensitive so soft-masked (lowercase) bases
// get the same id as their uppercase form.
//
// Padding goes on the left by default: the last position of
// every sequence then holds a real base, which suits causal
// models that read the final hidden state.

use std::collections::HashMap;

use crate::domain::error::DatasetError;
use crate::domain::traits::{PaddingSide, SequenceTokenizer};

pub const SEP_ID: u32 = 1;
pub const PAD_ID: u32 = 4;
pub const UNK_ID: u32 = 6;

const SPECIAL_TOKENS: [&str; 7] = [
    "[CLS]", "[SEP]", "[BOS]", "[MASK]", "[PAD]", "[RESERVED]", "[UNK]",
];

/// Character-level tokenizer over a small DNA alphabet.
#[derive(Debug, Clone)]
pub struct CharTokenizer {
    characters:   Vec<char>,
    char_to_id:   HashMap<char, u32>,
    padding_side: PaddingSide,
}

impl CharTokenizer {
    /// Build a tokenizer for the given alphabet.
    /// Characters are upper-cased; duplicates keep their first id.
    pub fn new(characters: &[char], padding_side: PaddingSide) -> Self {
        let mut ordered    = Vec::with_capacity(characters.len());
        let mut char_to_id = HashMap::new();

        for c in characters.iter().map(|c| c.to_ascii_uppercase()) {
            if char_to_id.contains_key(&c) {
                continue;
            }
            let id = (SPECIAL_TOKENS.len() + ordered.len()) as u32;
            char_to_id.insert(c, id);
            ordered.push(c);
        }

        Self {
            characters: ordered,
            char_to_id,
            padding_side,
        }
    }

    pub fn with_padding_side(mut self, side: PaddingSide) -> Self {
        self.padding_side = side;
        self
    }

    pub fn token_to_id(&self, c: char) -> u32 {
        self.char_to_id
            .get(&c.to_ascii_uppercase())
            .copied()
            .unwrap_or(UNK_ID)
    }
}

impl Default for CharTokenizer {
    fn default() -> Self {
        Self::new(&['A', 'C', 'G', 'T', 'N'], PaddingSide::Left)
    }
}

impl SequenceTokenizer for CharTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, DatasetError> {
        Ok(text.chars().map(|c| self.token_to_id(c)).collect())
    }

    fn pad_token_id(&self) -> u32 {
        PAD_ID
    }

    fn sep_token_id(&self) -> Option<u32> {
        Some(SEP_ID)
    }

    fn padding_side(&self) -> PaddingSide {
        self.padding_side
    }

    fn vocab_size(&self) -> usize {
        SPECIAL_TOKENS.len() + self.characters.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab_ids() {
        let t = CharTokenizer::default();
        assert_eq!(t.vocab_size(), 12);
        assert_eq!(t.encode("ACGTN").unwrap(), vec![7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_lowercase_and_unknown() {
        let t = CharTokenizer::default();
        assert_eq!(t.encode("acX").unwrap(), vec![7, 8, UNK_ID]);
    }

    #[test]
    fn test_duplicate_characters_collapse() {
        let t = CharTokenizer::new(&['a', 'A', 'c'], PaddingSide::Right);
        assert_eq!(t.vocab_size(), 9);
        assert_eq!(t.encode("C").unwrap(), vec![8]);
        assert_eq!(t.padding_side(), PaddingSide::Right);
    }

    #[test]
    fn test_special_ids() {
        let t = CharTokenizer::default();
        assert_eq!(t.pad_token_id(), 4);
        assert_eq!(t.sep_token_id(), Some(1));
        assert_eq!(t.padding_side(), PaddingSide::Left);
        assert_eq!(SPECIAL_TOKENS[PAD_ID as usize], "[PAD]");
        assert_eq!(SPECIAL_TOKENS[UNK_ID as usize], "[UNK]");
    }
}
