//! Labelled, tokenised DNA segments from FASTA files, served
//! through Burn's `Dataset` and `Batcher` traits.
//!
//! A training loop only needs [`data::dataset::DnaSegmentDataset`]
//! and [`data::batcher::DnaBatcher`]; the CLI in `main.rs` is a
//! thin front end for inspecting and exporting a split.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
