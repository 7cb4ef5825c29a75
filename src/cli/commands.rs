// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `inspect` and `export`, and
// the dataset flags they share.
//
// Dataset flags are layered:
//   1. DatasetConfig::default()
//   2. the JSON file given by --config, if any
//   3. any flag given explicitly on the command line
//
// Switches take an optional value so they can turn a setting
// off as well as on: `--rc-aug` and `--rc-aug true` enable it,
// `--rc-aug false` disables it even if the config file set it.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::config::DatasetConfig;
use crate::data::split::Split;
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise a split and preview tokenised samples
    Inspect(InspectArgs),

    /// Write every tokenised sample of a split as JSON lines
    Export(ExportArgs),
}

/// Flags describing which dataset to read and how to encode it
#[derive(Args, Debug, Default)]
pub struct DatasetArgs {
    /// JSON file with a saved DatasetConfig
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root directory containing dataset sub-directories
    #[arg(long)]
    pub dest_path: Option<String>,

    /// Dataset sub-directory holding <split>.fasta files
    #[arg(long)]
    pub dataset_name: Option<String>,

    /// train, test or val (val reads the test file)
    #[arg(long)]
    pub split: Option<Split>,

    /// Maximum tokens per sample, not counting the EOS token
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Number of classes
    #[arg(long)]
    pub d_output: Option<usize>,

    /// "char" or a path to a HuggingFace tokenizer.json
    #[arg(long)]
    pub tokenizer: Option<String>,

    /// Pad every sample to exactly max_length
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub use_padding: Option<bool>,

    /// Append the [SEP] token to every sample
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub add_eos: Option<bool>,

    /// Randomly reverse-complement samples
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub rc_aug: Option<bool>,

    /// Seed for the augmentation RNG
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DatasetArgs {
    /// Merge defaults, the optional config file, and explicit flags
    pub fn resolve(self) -> Result<DatasetConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::load(path)?,
            None       => DatasetConfig::default(),
        };

        if let Some(v) = self.dest_path    { cfg.dest_path    = v; }
        if let Some(v) = self.dataset_name { cfg.dataset_name = v; }
        if let Some(v) = self.split        { cfg.split        = v; }
        if let Some(v) = self.max_length   { cfg.max_length   = v; }
        if let Some(v) = self.d_output     { cfg.d_output     = v; }
        if let Some(v) = self.tokenizer    { cfg.tokenizer    = v; }
        if let Some(v) = self.use_padding  { cfg.use_padding  = v; }
        if let Some(v) = self.add_eos      { cfg.add_eos      = v; }
        if let Some(v) = self.rc_aug       { cfg.rc_aug       = v; }
        if let Some(v) = self.seed         { cfg.seed         = Some(v); }

        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// How many samples to print
    #[arg(long, default_value_t = 5)]
    pub num_samples: usize,

    /// Size of the test batch pulled through the DataLoader
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Destination .jsonl file
    #[arg(long)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        dataset: DatasetArgs,
    }

    fn parse(argv: &[&str]) -> DatasetArgs {
        let argv = std::iter::once("dna-segment").chain(argv.iter().copied());
        TestCli::try_parse_from(argv).unwrap().dataset
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = DatasetArgs {
            dataset_name: Some("enhancers".to_string()),
            split:        Some(Split::Test),
            use_padding:  Some(false),
            rc_aug:       Some(true),
            ..DatasetArgs::default()
        };
        let cfg = args.resolve().unwrap();

        assert_eq!(cfg.dataset_name, "enhancers");
        assert_eq!(cfg.split, Split::Test);
        assert!(!cfg.use_padding);
        assert!(cfg.rc_aug);
        assert!(!cfg.add_eos);
        assert_eq!(cfg.max_length, DatasetConfig::default().max_length);
    }

    #[test]
    fn test_flags_override_config_file() {
        let tmp  = tempfile::tempdir().unwrap();
        let file = ConfigStore::new(tmp.path())
            .save(&DatasetConfig {
                max_length: 200,
                d_output:   3,
                ..DatasetConfig::default()
            })
            .unwrap();

        let args = DatasetArgs {
            config:     Some(file),
            max_length: Some(64),
            ..DatasetArgs::default()
        };
        let cfg = args.resolve().unwrap();

        assert_eq!(cfg.max_length, 64);
        assert_eq!(cfg.d_output, 3);
    }

    #[test]
    fn test_switch_value_forms() {
        let args = parse(&["--rc-aug", "--add-eos", "false", "--use-padding=true"]);
        assert_eq!(args.rc_aug, Some(true));
        assert_eq!(args.add_eos, Some(false));
        assert_eq!(args.use_padding, Some(true));

        let args = parse(&[]);
        assert_eq!(args.rc_aug, None);
        assert_eq!(args.add_eos, None);
        assert_eq!(args.use_padding, None);
    }

    #[test]
    fn test_flags_switch_off_config_file_settings() {
        let tmp  = tempfile::tempdir().unwrap();
        let file = ConfigStore::new(tmp.path())
            .save(&DatasetConfig {
                use_padding: true,
                add_eos:     true,
                rc_aug:      true,
                ..DatasetConfig::default()
            })
            .unwrap();

        let mut args = parse(&["--add-eos", "false", "--rc-aug=false"]);
        args.config  = Some(file);
        let cfg = args.resolve().unwrap();

        assert!(!cfg.add_eos);
        assert!(!cfg.rc_aug);
        assert!(cfg.use_padding);
    }
}
