//! src/effect/config.rs
//!
//! Effect parameter records, the six effect kinds, and the mutable
//! control surface the UI edits.

use serde::{Deserialize, Serialize};

/// Inclusive range for the speed and scale sliders.
pub const SLIDER_RANGE: (f64, f64) = (0.1, 3.0);

/// Increment applied per keypress on the speed/scale sliders.
pub const SLIDER_STEP: f64 = 0.1;

/// Timing-function keywords offered by the timing select, in cycle order.
pub const TIMING_OPTIONS: [&str; 5] = ["linear", "ease", "ease-in", "ease-out", "ease-in-out"];

/// One of the six supported visual transform categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Scale,
    Rotate,
    Glow,
    Blur,
    Skew,
    Border,
}

impl EffectKind {
    /// All kinds, in selector display order.
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Scale,
        EffectKind::Rotate,
        EffectKind::Glow,
        EffectKind::Blur,
        EffectKind::Skew,
        EffectKind::Border,
    ];

    /// Parse the wire/storage token. Unrecognized tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "scale" => Some(EffectKind::Scale),
            "rotate" => Some(EffectKind::Rotate),
            "glow" => Some(EffectKind::Glow),
            "blur" => Some(EffectKind::Blur),
            "skew" => Some(EffectKind::Skew),
            "border" => Some(EffectKind::Border),
            _ => None,
        }
    }

    /// The token stored in configs, the share link, and history entries.
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Scale => "scale",
            EffectKind::Rotate => "rotate",
            EffectKind::Glow => "glow",
            EffectKind::Blur => "blur",
            EffectKind::Skew => "skew",
            EffectKind::Border => "border",
        }
    }

    /// Human-readable label shown in the selector and history panels.
    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Scale => "Scale",
            EffectKind::Rotate => "Rotate",
            EffectKind::Glow => "Glow",
            EffectKind::Blur => "Blur",
            EffectKind::Skew => "Skew",
            EffectKind::Border => "Border",
        }
    }
}

/// Label lookup for a raw type token; unrecognized tokens display as-is.
pub fn kind_label(token: &str) -> &str {
    match EffectKind::parse(token) {
        Some(kind) => kind.label(),
        None => token,
    }
}

/// The four-field effect-parameter record.
///
/// All fields are strings; numeric interpretation happens only at
/// CSS-generation time (see `codegen`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectConfig {
    pub speed: String,
    pub scale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timing: String,
}

/// The settings record persisted under `hovercraft-settings`.
///
/// Timing is deliberately absent: it is never persisted to settings,
/// even though history entries do capture it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSettings {
    pub speed: String,
    pub scale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The four input controls, mutated by keyboard input.
///
/// The controller reads a snapshot from here on every synchronization
/// pass; nothing else mutates configuration state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub speed: String,
    pub scale: String,
    pub kind: String,
    pub timing: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            speed: "0.3".to_string(),
            scale: "1.2".to_string(),
            kind: "scale".to_string(),
            timing: "ease-in-out".to_string(),
        }
    }
}

impl Controls {
    /// Snapshot the current control values into a config record.
    pub fn snapshot(&self) -> EffectConfig {
        EffectConfig {
            speed: self.speed.clone(),
            scale: self.scale.clone(),
            kind: self.kind.clone(),
            timing: self.timing.clone(),
        }
    }

    /// Step the speed slider by `steps` increments, clamped to the slider range.
    pub fn step_speed(&mut self, steps: i32) {
        self.speed = step_value(&self.speed, steps);
    }

    /// Step the scale slider by `steps` increments, clamped to the slider range.
    pub fn step_scale(&mut self, steps: i32) {
        self.scale = step_value(&self.scale, steps);
    }

    /// Cycle the effect-type select forward or backward.
    pub fn cycle_kind(&mut self, forward: bool) {
        let idx = EffectKind::ALL
            .iter()
            .position(|k| k.as_str() == self.kind)
            .unwrap_or(0);
        let len = EffectKind::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.kind = EffectKind::ALL[next].as_str().to_string();
    }

    /// Cycle the timing-function select forward or backward.
    pub fn cycle_timing(&mut self, forward: bool) {
        let idx = TIMING_OPTIONS
            .iter()
            .position(|t| *t == self.timing)
            .unwrap_or(0);
        let len = TIMING_OPTIONS.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.timing = TIMING_OPTIONS[next].to_string();
    }
}

/// Parse, step, clamp, and re-format a slider value.
///
/// Unparsable values restart from the low end of the range before the
/// step applies, so garbage plus one step lands one increment above it.
fn step_value(current: &str, steps: i32) -> String {
    let (lo, hi) = SLIDER_RANGE;
    let base = current.parse::<f64>().unwrap_or(lo);
    let stepped = (base + SLIDER_STEP * steps as f64).clamp(lo, hi);
    format!("{stepped:.1}")
}
