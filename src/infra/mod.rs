// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by more than one layer:
//
//   tokenizer_store.rs — Resolves the configured tokenizer:
//                        the built-in character tokenizer or
//                        a HuggingFace tokenizer.json on disk.
//
//   config_store.rs    — Saves and loads DatasetConfig as
//                        JSON so runs can be reproduced.

/// Tokenizer selection and the HuggingFace adapter
pub mod tokenizer_store;

/// DatasetConfig persistence
pub mod config_store;
