// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data pipeline for a specific goal.
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No FASTA parsing or tensor code (Layers 4 and 6)
//   - Only workflow coordination

/// Serialisable dataset settings shared by every use case
pub mod config;

/// Summarise a split and run one batch through the batcher
pub mod inspect_use_case;

/// Write every tokenised sample of a split to JSON lines
pub mod export_use_case;
