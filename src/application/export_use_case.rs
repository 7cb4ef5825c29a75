// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Materialises one split as JSON lines so the tokenised data
// can be consumed outside Rust or diffed between runs.
//
// Output (one object per record, file order):
//   {"name":"chr1:100-300 1","label":1,"input_ids":[4,4,7,...]}
//
// The effective config is written beside the output file as
// dataset_config.json.
//
// With rc_aug on, each export is one random draw of strands;
// set a seed to make it reproducible.

use anyhow::{Context, Result};
use burn::data::dataset::Dataset;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::application::config::DatasetConfig;
use crate::data::dataset::DnaSegmentDataset;
use crate::infra::config_store::ConfigStore;

#[derive(Serialize)]
struct ExportRow<'a> {
    name:      &'a str,
    label:     usize,
    input_ids: &'a [u32],
}

pub struct ExportUseCase {
    config: DatasetConfig,
    output: PathBuf,
}

impl ExportUseCase {
    pub fn new(config: DatasetConfig, output: impl Into<PathBuf>) -> Self {
        Self { config, output: output.into() }
    }

    /// Write all samples; returns how many were written.
    pub fn execute(&self) -> Result<usize> {
        let dataset = DnaSegmentDataset::from_config(&self.config)?;

        let out_dir = self
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Cannot create '{}'", out_dir.display()))?;

        let file = File::create(&self.output)
            .with_context(|| format!("Cannot create '{}'", self.output.display()))?;
        let mut writer = BufWriter::new(file);

        let mut written = 0usize;
        for index in 0..dataset.len() {
            let Some(sample) = dataset.get(index) else { break };
            let row = ExportRow {
                name:      dataset.name(index).unwrap_or_default(),
                label:     sample.label,
                input_ids: &sample.input_ids,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            written += 1;
        }
        writer.flush()?;

        ConfigStore::new(&out_dir).save(&self.config)?;

        tracing::info!(
            "Exported {} samples to '{}'",
            written,
            self.output.display()
        );
        Ok(written)
    }
}
