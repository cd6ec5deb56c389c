//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod code;
pub mod controls;
pub mod footer;
pub mod history;
pub mod preview;
pub mod selector;
pub mod title;

pub use code::CodePanel;
pub use controls::{ControlField, ControlsPanel};
pub use footer::FooterPanel;
pub use history::HistoryPanel;
pub use preview::PreviewPanel;
pub use selector::SelectorPanel;
pub use title::TitlePanel;
