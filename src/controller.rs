//! src/controller.rs
//!
//! The effect controller: owns the configuration state and keeps the
//! five surfaces consistent: controls, document style, share link,
//! persisted storage, and the generated CSS text.

pub mod document;

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tracing::{error, warn};

use crate::clipboard::ClipboardSink;
use crate::effect::{
    Controls, EffectConfig, EffectKind, HistoryEntry, SavedSettings, codegen, history,
};
use crate::share;
use crate::store::KvStore;
use document::DocumentStyle;

/// Storage key for the current-settings record.
pub const SETTINGS_KEY: &str = "hovercraft-settings";

/// Custom property names applied to the document style.
pub const PROP_SPEED: &str = "--effect-speed";
pub const PROP_TIMING: &str = "--effect-timing";
pub const PROP_SCALE: &str = "--effect-scale";

/// Copy-button labels.
pub const COPY_IDLE_LABEL: &str = "Copy CSS";
pub const COPY_DONE_LABEL: &str = "Copied!";
pub const COPY_FAILED_LABEL: &str = "Copy failed";

/// How long the confirmation label stays up before reverting.
pub const COPY_REVERT_DELAY: Duration = Duration::from_secs(2);

/// Transient copy-button state. A successful copy schedules a revert
/// deadline; a later copy simply overwrites it (no cancellation), and a
/// failed copy sticks until the next attempt.
#[derive(Clone, Copy, Debug)]
pub struct CopyState {
    pub label: &'static str,
    revert_at: Option<Instant>,
}

impl CopyState {
    pub fn new() -> Self {
        Self {
            label: COPY_IDLE_LABEL,
            revert_at: None,
        }
    }

    fn confirm(&mut self, now: Instant) {
        self.label = COPY_DONE_LABEL;
        self.revert_at = Some(now + COPY_REVERT_DELAY);
    }

    fn fail(&mut self) {
        self.label = COPY_FAILED_LABEL;
        self.revert_at = None;
    }

    /// Revert the confirmation label once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.revert_at {
            if now >= deadline {
                self.label = COPY_IDLE_LABEL;
                self.revert_at = None;
            }
        }
    }
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new()
    }
}

/// The stateful configurator object.
pub struct EffectController {
    /// The four input controls (the "form").
    pub controls: Controls,
    /// Last synchronized snapshot of the controls.
    pub state: EffectConfig,
    /// Applied custom properties + selector highlight states.
    pub document: DocumentStyle,
    /// Query-string share link, rewritten on every sync.
    pub share_link: String,
    /// Generated CSS snippet.
    pub code: String,
    /// Copy-button state.
    pub copy: CopyState,
    /// Cached history, newest first; refreshed on record, not on restore.
    pub history: Vec<HistoryEntry>,
    store: Box<dyn KvStore>,
}

impl EffectController {
    /// Build a controller and run the first synchronization pass.
    ///
    /// Override precedence: control defaults, then stored settings
    /// (speed/scale/type), then the share link (type/speed/scale), so an
    /// explicitly passed link wins over whatever was persisted.
    pub fn new(store: Box<dyn KvStore>, share_link: Option<&str>) -> Self {
        let mut controls = Controls::default();
        if let Some(saved) = load_settings(&*store) {
            controls.speed = saved.speed;
            controls.scale = saved.scale;
            controls.kind = saved.kind;
        }
        if let Some(link) = share_link {
            share::apply(link, &mut controls);
        }

        let history = history::load(&*store);
        let mut controller = Self {
            state: controls.snapshot(),
            controls,
            document: DocumentStyle::new(),
            share_link: String::new(),
            code: String::new(),
            copy: CopyState::new(),
            history,
            store,
        };
        controller.sync();
        controller
    }

    /// The synchronization routine: snapshot the controls, then
    /// propagate in order to the document style, the selector highlight
    /// states, persisted settings, the share link, and the generated
    /// CSS. Idempotent; runs synchronously on every input event.
    pub fn sync(&mut self) {
        self.state = self.controls.snapshot();

        self.document
            .set_property(PROP_SPEED, &format!("{}s", self.state.speed));
        self.document.set_property(PROP_TIMING, &self.state.timing);
        self.document.set_property(PROP_SCALE, &self.state.scale);

        for kind in EffectKind::ALL {
            self.document
                .set_highlight(kind.as_str(), kind.as_str() == self.state.kind);
        }

        save_settings(&mut *self.store, &self.state);
        self.share_link = share::build(&self.state);
        self.code = codegen::generate(&self.state);
    }

    /// Copy the generated CSS to the clipboard. Success records the
    /// current configuration into history and schedules the label
    /// revert; failure is logged and shown, never propagated.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) {
        match clipboard.write_text(&self.code) {
            Ok(()) => {
                self.copy.confirm(now);
                let timestamp = chrono::Utc::now().to_rfc3339();
                self.history = history::record(&mut *self.store, &self.state, timestamp);
            }
            Err(e) => {
                error!("copy failed: {e}");
                self.copy.fail();
            }
        }
    }

    /// Restore a history entry: copy all four fields back into the
    /// controls and re-run the synchronization routine. The history
    /// cache is deliberately left untouched.
    pub fn restore(&mut self, index: usize) {
        let Some(entry) = self.history.get(index).cloned() else {
            return;
        };
        self.controls.speed = entry.config.speed;
        self.controls.scale = entry.config.scale;
        self.controls.kind = entry.config.kind;
        self.controls.timing = entry.config.timing;
        self.sync();
    }

    /// Per-frame upkeep (copy-label revert).
    pub fn tick(&mut self, now: Instant) {
        self.copy.tick(now);
    }
}

/// Alias: the controller shared between the frame loop and the panels.
pub type SharedController = Arc<RwLock<EffectController>>;

/// Read the persisted settings record; absence or parse failure reads
/// as "no data".
fn load_settings(store: &dyn KvStore) -> Option<SavedSettings> {
    let raw = store.get(SETTINGS_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(saved) => Some(saved),
        Err(e) => {
            warn!("discarding unparsable settings: {e}");
            None
        }
    }
}

/// Persist the current-settings record (speed/scale/type only).
fn save_settings(store: &mut dyn KvStore, state: &EffectConfig) {
    let saved = SavedSettings {
        speed: state.speed.clone(),
        scale: state.scale.clone(),
        kind: state.kind.clone(),
    };
    match serde_json::to_string(&saved) {
        Ok(json) => {
            if let Err(e) = store.set(SETTINGS_KEY, &json) {
                warn!("failed to persist settings: {e}");
            }
        }
        Err(e) => warn!("failed to serialize settings: {e}"),
    }
}
