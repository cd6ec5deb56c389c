//! src/effect.rs
//!
//! Top-level `effect` module: parameter records, CSS generation, history.

pub mod codegen;
pub mod config;
pub mod history;

/// Re-exports
pub use config::{Controls, EffectConfig, EffectKind, SavedSettings};
pub use history::HistoryEntry;
