// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// dataset is made of, independent of how files are read or
// how tensors are built.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Keeping this layer pure means the label rules and the
// tokenizer contract can be unit tested without touching
// the filesystem or a tensor backend.

/// A FASTA record and the label rule applied to its name
pub mod record;

/// Error type shared by the data pipeline
pub mod error;

/// Core abstractions (traits) that other layers implement
pub mod traits;
