// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a FASTA file on disk to tensor batches.
//
//   <dest_path>/<dataset_name>/*<split>*.fasta
//       │
//       ▼
//   FastaSource        → finds the split file, reads records
//       │
//       ▼
//   DnaSegmentDataset  → index ↦ (record, label)
//       │                 optional reverse complement
//       │                 tokenize, truncate, pad, EOS
//       ▼
//   DnaBatcher         → stacks samples into Int tensors
//       │
//       ▼
//   DataLoader         → feeds batches to the training loop

/// Train / test split names
pub mod split;

/// Locates and reads the FASTA file for a split
pub mod fasta_source;

/// Reverse-complement augmentation
pub mod augment;

/// Built-in character-level DNA tokenizer
pub mod char_tokenizer;

/// Implements Burn's Dataset trait for labelled DNA segments
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
