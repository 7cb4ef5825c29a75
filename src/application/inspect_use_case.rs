// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Sanity check for a dataset before training on it:
//
//   Step 1: Build the dataset from config   (Layer 4 - data)
//   Step 2: Count records per label
//   Step 3: Tokenise the first few samples
//   Step 4: Pull one batch through Burn's DataLoader on the
//           NdArray backend and record the tensor shapes

use anyhow::Result;
use burn::{
    backend::NdArray,
    data::{dataloader::DataLoaderBuilder, dataset::Dataset},
};
use std::fmt;

use crate::application::config::DatasetConfig;
use crate::data::{batcher::DnaBatcher, dataset::DnaSegmentDataset};

/// Ids shown per sample in the report
const PREVIEW_TOKENS: usize = 16;

#[derive(Debug, Clone)]
pub struct SamplePreview {
    pub name:  String,
    pub label: usize,
    pub len:   usize,
    pub head:  Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub num_records:  usize,
    pub label_counts: Vec<usize>,
    pub samples:      Vec<SamplePreview>,
    /// ([batch, seq_len], [batch, 1]) of the first batch, if any
    pub batch_dims:   Option<([usize; 2], [usize; 2])>,
}

pub struct InspectUseCase {
    config:      DatasetConfig,
    num_samples: usize,
    batch_size:  usize,
}

impl InspectUseCase {
    pub fn new(config: DatasetConfig, num_samples: usize, batch_size: usize) -> Self {
        Self { config, num_samples, batch_size }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let cfg = &self.config;

        // ── Step 1: Build dataset ─────────────────────────────────────────────
        tracing::info!(
            "Inspecting '{}' split '{}'",
            cfg.dataset_name,
            cfg.split
        );
        let dataset = DnaSegmentDataset::from_config(cfg)?;
        tracing::info!(
            "{} records, {} classes, vocab size {}",
            dataset.len(),
            dataset.d_output(),
            dataset.tokenizer().vocab_size()
        );

        // ── Step 2: Label distribution ────────────────────────────────────────
        let label_counts = dataset.label_counts();
        for (label, count) in label_counts.iter().enumerate() {
            tracing::info!("label {}: {} records", label, count);
        }

        // ── Step 3: Preview samples ───────────────────────────────────────────
        let mut samples = Vec::new();
        for index in 0..self.num_samples.min(dataset.len()) {
            let Some(sample) = dataset.get(index) else { break };
            samples.push(SamplePreview {
                name:  dataset.name(index).unwrap_or_default().to_string(),
                label: sample.label,
                len:   sample.input_ids.len(),
                head:  sample.input_ids.iter().take(PREVIEW_TOKENS).copied().collect(),
            });
        }

        let num_records = dataset.len();

        // ── Step 4: One batch through the DataLoader ──────────────────────────
        let batch_dims = if num_records == 0 || self.batch_size == 0 {
            None
        } else {
            let tokenizer = dataset.tokenizer();
            let batcher   = DnaBatcher::<NdArray>::new(
                Default::default(),
                tokenizer.pad_token_id(),
                tokenizer.padding_side(),
            );
            let loader = DataLoaderBuilder::new(batcher)
                .batch_size(self.batch_size)
                .build(dataset);

            let first = loader.iter().next().map(|batch| {
                let dims = (batch.inputs.dims(), batch.targets.dims());
                tracing::debug!("First batch: inputs {:?}, targets {:?}", dims.0, dims.1);
                dims
            });
            first
        };

        Ok(InspectReport {
            num_records,
            label_counts,
            samples,
            batch_dims,
        })
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {}", self.num_records)?;
        for (label, count) in self.label_counts.iter().enumerate() {
            writeln!(f, "  label {label}: {count}")?;
        }

        for s in &self.samples {
            let more = if s.len > s.head.len() { " ..." } else { "" };
            writeln!(
                f,
                "[{}] label={} len={} ids={:?}{}",
                s.name, s.label, s.len, s.head, more
            )?;
        }

        if let Some((inputs, targets)) = self.batch_dims {
            writeln!(f, "first batch: inputs {inputs:?}, targets {targets:?}")?;
        }
        Ok(())
    }
}
