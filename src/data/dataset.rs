// ============================================================
// Layer 4 — DNA Segment Dataset
// ============================================================
// Implements Burn's Dataset trait over the records of one
// FASTA split.
//
// Built once, in file order, for every record:
//   1. label   ← digit at the end of the record name
//   2. tokenize (no special tokens)
//   3. truncate to max_length, pad if use_padding
//   4. append [SEP] if add_eos
//   5. with rc_aug, the same for the reverse complement
//
// Any tokenizer failure fails construction, so get(i) never
// fails for i < len(). Burn's DataLoader stops at the first
// None, which would otherwise end an epoch early.
//
// On every get(i) with rc_aug, a coin picks the strand, so
// the same index can come back on either strand across epochs.

use anyhow::{Context, Result};
use burn::data::dataset::Dataset;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::application::config::DatasetConfig;
use crate::data::augment::{coin_flip, reverse_complement};
use crate::data::fasta_source::FastaSource;
use crate::domain::error::DatasetError;
use crate::domain::traits::{PaddingSide, RecordSource, SequenceTokenizer};
use crate::infra::tokenizer_store::TokenizerStore;

/// One tokenised training sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaSample {
    pub input_ids: Vec<u32>,
    /// Class index, always below the dataset's d_output
    pub label:     usize,
}

/// Tokenize `text` and shape it to the configured length.
///
/// With `use_padding` the result has exactly `max_length` ids,
/// otherwise at most `max_length`. `add_eos` adds one more.
pub fn encode_sequence(
    tokenizer:   &dyn SequenceTokenizer,
    text:        &str,
    max_length:  usize,
    use_padding: bool,
    add_eos:     bool,
) -> Result<Vec<u32>, DatasetError> {
    let mut ids = tokenizer.encode(text)?;
    ids.truncate(max_length);

    if use_padding && ids.len() < max_length {
        let pad = tokenizer.pad_token_id();
        match tokenizer.padding_side() {
            PaddingSide::Right => ids.resize(max_length, pad),
            PaddingSide::Left  => {
                let mut padded = vec![pad; max_length - ids.len()];
                padded.extend_from_slice(&ids);
                ids = padded;
            }
        }
    }

    if add_eos {
        let sep = tokenizer.sep_token_id().ok_or_else(|| {
            DatasetError::Tokenizer("add_eos needs a [SEP] or </s> token".to_string())
        })?;
        ids.push(sep);
    }

    Ok(ids)
}

/// One record, already encoded on the strands it can be served on.
struct Entry {
    name:    String,
    label:   usize,
    forward: Vec<u32>,
    /// Present only with rc_aug
    reverse: Option<Vec<u32>>,
}

pub struct DnaSegmentDataset {
    entries:   Vec<Entry>,
    tokenizer: Box<dyn SequenceTokenizer>,
    d_output:  usize,
    rng:       Mutex<StdRng>,
}

impl DnaSegmentDataset {
    /// Locate the split's FASTA file and tokenizer from config
    /// and build the dataset.
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        let source = FastaSource::locate(&config.dest_path, &config.dataset_name, config.split)?;
        let tokenizer = TokenizerStore::new(&config.tokenizer).load()?;
        Self::new(config, &source, tokenizer)
            .with_context(|| format!("Cannot build dataset from '{}'", source.path().display()))
    }

    pub fn new(
        config:    &DatasetConfig,
        source:    &dyn RecordSource,
        tokenizer: Box<dyn SequenceTokenizer>,
    ) -> Result<Self> {
        let records = source.load_records()?;

        let encode = |seq: &[u8]| {
            encode_sequence(
                tokenizer.as_ref(),
                &String::from_utf8_lossy(seq),
                config.max_length,
                config.use_padding,
                config.add_eos,
            )
        };

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let label = record.label()?;
            if label >= config.d_output {
                return Err(DatasetError::LabelOutOfRange {
                    name:     record.name,
                    label,
                    d_output: config.d_output,
                }
                .into());
            }

            let forward = encode(&record.sequence)
                .with_context(|| format!("Cannot tokenize '{}'", record.name))?;
            let reverse = if config.rc_aug {
                let ids = encode(&reverse_complement(&record.sequence))
                    .with_context(|| format!("Cannot tokenize '{}'", record.name))?;
                Some(ids)
            } else {
                None
            };

            entries.push(Entry {
                name: record.name,
                label,
                forward,
                reverse,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        tracing::debug!(
            "Dataset ready: {} records, max_length={}, padding={}, eos={}, rc_aug={}",
            entries.len(),
            config.max_length,
            config.use_padding,
            config.add_eos,
            config.rc_aug,
        );

        Ok(Self {
            entries,
            tokenizer,
            d_output: config.d_output,
            rng:      Mutex::new(rng),
        })
    }

    fn flip(&self) -> bool {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        coin_flip(&mut *rng)
    }

    /// Record name at `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.name.as_str())
    }

    /// Number of records per class, indexed by label
    pub fn label_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.d_output];
        for entry in &self.entries {
            counts[entry.label] += 1;
        }
        counts
    }

    /// Number of output classes, for sizing a decoder head
    pub fn d_output(&self) -> usize {
        self.d_output
    }

    pub fn tokenizer(&self) -> &dyn SequenceTokenizer {
        self.tokenizer.as_ref()
    }
}

impl Dataset<DnaSample> for DnaSegmentDataset {
    fn get(&self, index: usize) -> Option<DnaSample> {
        let entry = self.entries.get(index)?;

        let input_ids = match &entry.reverse {
            Some(reverse) if self.flip() => reverse.clone(),
            _                            => entry.forward.clone(),
        };

        Some(DnaSample {
            input_ids,
            label: entry.label,
        })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
