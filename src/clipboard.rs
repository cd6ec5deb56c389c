//! src/clipboard.rs
//!
//! Clipboard-write capability behind a trait, backed by `arboard`.

#[derive(Debug, thiserror::Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(pub String);

/// Asynchronous-in-spirit clipboard sink; writes may be rejected by the
/// host (no clipboard in the session, denied access, ...).
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. Construction is lazy: the `arboard` handle is opened
/// on the first write so a missing clipboard only fails the copy action,
/// never app startup.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner =
                Some(arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError(e.to_string())),
            None => Err(ClipboardError("clipboard unavailable".into())),
        }
    }
}
