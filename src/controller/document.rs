//! src/controller/document.rs
//!
//! The applied document style: CSS custom properties plus the binary
//! highlight state of the effect-selector items. An explicit surface
//! owned by the controller and read by the preview panels.

use std::collections::BTreeMap;

/// Opacity applied to the selected effect-selector item.
pub const HIGHLIGHT_FULL: &str = "1";

/// Opacity applied to every non-selected effect-selector item.
pub const HIGHLIGHT_DIMMED: &str = "0.6";

/// Custom properties and selector highlight opacities, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    properties: BTreeMap<String, String>,
    highlight: BTreeMap<String, String>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property (e.g. `--effect-speed` to `0.3s`).
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    /// Current value of a custom property, if set.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Set the highlight state for an effect-selector item. Binary:
    /// selected items get full opacity, everything else is dimmed.
    pub fn set_highlight(&mut self, kind: &str, selected: bool) {
        let opacity = if selected {
            HIGHLIGHT_FULL
        } else {
            HIGHLIGHT_DIMMED
        };
        self.highlight.insert(kind.to_string(), opacity.to_string());
    }

    /// Opacity for a selector item; items never synced read as dimmed.
    pub fn highlight_opacity(&self, kind: &str) -> &str {
        self.highlight
            .get(kind)
            .map(String::as_str)
            .unwrap_or(HIGHLIGHT_DIMMED)
    }

    /// Whether a selector item is the highlighted one.
    pub fn is_selected(&self, kind: &str) -> bool {
        self.highlight_opacity(kind) == HIGHLIGHT_FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_overwrite() {
        let mut doc = DocumentStyle::new();
        doc.set_property("--effect-speed", "0.3s");
        doc.set_property("--effect-speed", "0.5s");
        assert_eq!(doc.property("--effect-speed"), Some("0.5s"));
        assert_eq!(doc.property("--effect-scale"), None);
    }

    #[test]
    fn highlight_is_binary() {
        let mut doc = DocumentStyle::new();
        doc.set_highlight("glow", true);
        doc.set_highlight("blur", false);
        assert_eq!(doc.highlight_opacity("glow"), HIGHLIGHT_FULL);
        assert_eq!(doc.highlight_opacity("blur"), HIGHLIGHT_DIMMED);
        assert_eq!(doc.highlight_opacity("never-set"), HIGHLIGHT_DIMMED);
        assert!(doc.is_selected("glow"));
        assert!(!doc.is_selected("blur"));
    }
}
