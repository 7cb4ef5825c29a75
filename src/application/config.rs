// ============================================================
// Layer 2 — Dataset Configuration
// ============================================================
// Every knob of the dataset in one serialisable struct.
// Built from CLI flags, or read from a JSON file, and saved
// next to exported data so a run can be reproduced.
//
// #[serde(default)] lets a config file name only the fields
// it wants to change; the rest come from Default.

use serde::{Deserialize, Serialize};

use crate::data::split::Split;
use crate::infra::tokenizer_store::CHAR_TOKENIZER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Root directory holding one sub-directory per dataset
    pub dest_path:    String,
    /// Sub-directory of dest_path with the split .fasta files
    pub dataset_name: String,
    pub split:        Split,
    /// Token budget per sample, before the optional EOS token
    pub max_length:   usize,
    /// Number of classes; record labels must be below this
    pub d_output:     usize,
    /// "char" or a path to a HuggingFace tokenizer.json
    pub tokenizer:    String,
    /// Pad every sample to exactly max_length
    pub use_padding:  bool,
    /// Append the tokenizer's [SEP] id to every sample
    pub add_eos:      bool,
    /// Reverse-complement each sample with probability one half
    pub rc_aug:       bool,
    /// Seed for the augmentation RNG; None draws from entropy
    pub seed:         Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dest_path:    "data".to_string(),
            dataset_name: "dna_segments".to_string(),
            split:        Split::Train,
            max_length:   1024,
            d_output:     2,
            tokenizer:    CHAR_TOKENIZER.to_string(),
            use_padding:  false,
            add_eos:      false,
            rc_aug:       false,
            seed:         None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: DatasetConfig =
            serde_json::from_str(r#"{ "dataset_name": "enhancers", "split": "val" }"#).unwrap();
        assert_eq!(cfg.dataset_name, "enhancers");
        assert_eq!(cfg.split, Split::Test);
        assert_eq!(cfg.d_output, 2);
        assert_eq!(cfg.tokenizer, "char");
        assert!(!cfg.use_padding);
        assert!(!cfg.add_eos);
        assert!(!cfg.rc_aug);
    }
}
