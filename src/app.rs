//! src/app.rs
//!
//! Top-level application: builds the controller and its storage/clipboard
//! capabilities, then runs the terminal UI main loop.
//!
//! ## Overview
//! The application:
//! - Edits four effect parameters (speed, scale, type, timing) and keeps
//!   the preview, the share link, persisted settings, and the generated
//!   CSS in sync on every keypress.
//! - Copies the generated CSS to the system clipboard and records each
//!   copied configuration into a bounded history.
//! - Accepts a share link on the command line to restore a configuration.
//!
//! # Keyboard Controls
//!
//! - **Tab** — cycle focus: Speed, Scale, Type, Timing, History.
//! - **Left/Right** — adjust the focused control (slider step or cycle).
//! - **1-6** — select an effect type directly.
//! - **c** — copy the generated CSS; on success the configuration is
//!   recorded into history and the label reverts after two seconds.
//! - **Up/Down** — move the history cursor (when History is focused).
//! - **Enter** — restore the selected history entry.
//! - **q** — quit and restore the terminal.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Constraint;

use crate::clipboard::SystemClipboard;
use crate::controller::{EffectController, SharedController};
use crate::panels::{
    CodePanel, ControlField, ControlsPanel, FooterPanel, HistoryPanel, PreviewPanel,
    SelectorPanel, TitlePanel,
};
use crate::store::{FileStore, KvStore, MemStore};
use crate::ui::Node;

const HELP: &str =
    "Tab focus | Left/Right adjust | 1-6 effect | c copy | Up/Down + Enter history | q quit";

/// Hovercraft: tune a CSS hover transition, preview it, copy the CSS.
#[derive(Debug, Parser)]
#[command(name = "hovercraft", version)]
struct Cli {
    /// Share link to restore (e.g. "?type=glow&speed=0.5&scale=1.2").
    share_link: Option<String>,

    /// Store settings/history under this directory instead of the
    /// platform config directory.
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Keep settings and history in memory only.
    #[arg(long)]
    ephemeral: bool,
}

/// Focus ring for keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Speed,
    Scale,
    Kind,
    Timing,
    History,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Speed => Focus::Scale,
            Focus::Scale => Focus::Kind,
            Focus::Kind => Focus::Timing,
            Focus::Timing => Focus::History,
            Focus::History => Focus::Speed,
        }
    }

    fn control_field(self) -> Option<ControlField> {
        match self {
            Focus::Speed => Some(ControlField::Speed),
            Focus::Scale => Some(ControlField::Scale),
            Focus::Kind => Some(ControlField::Kind),
            Focus::Timing => Some(ControlField::Timing),
            Focus::History => None,
        }
    }
}

fn open_store(cli: &Cli) -> Result<Box<dyn KvStore>> {
    if cli.ephemeral {
        return Ok(Box::new(MemStore::new()));
    }
    if let Some(dir) = &cli.store_dir {
        return Ok(Box::new(FileStore::open(dir.clone())));
    }
    Ok(Box::new(FileStore::open_default()?))
}

/// Build the frame's layout tree from the current state.
fn build_layout(controller: &SharedController, focus: Focus, cursor: usize) -> Node {
    Node::column(
        vec![
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
        ],
        vec![
            Node::panel(TitlePanel::new("Hovercraft: CSS hover effect configurator")),
            Node::row(
                vec![
                    Constraint::Percentage(28),
                    Constraint::Percentage(40),
                    Constraint::Percentage(32),
                ],
                vec![
                    Node::column(
                        vec![Constraint::Length(6), Constraint::Min(8)],
                        vec![
                            Node::panel(ControlsPanel::new(
                                controller.clone(),
                                focus.control_field(),
                            )),
                            Node::panel(SelectorPanel::new(controller.clone())),
                        ],
                    ),
                    Node::column(
                        vec![Constraint::Percentage(45), Constraint::Percentage(55)],
                        vec![
                            Node::panel(PreviewPanel::new(controller.clone())),
                            Node::panel(CodePanel::new(controller.clone())),
                        ],
                    ),
                    Node::panel(HistoryPanel::new(
                        controller.clone(),
                        cursor,
                        focus == Focus::History,
                    )),
                ],
            ),
            Node::panel(FooterPanel::new(controller.clone(), HELP)),
        ],
    )
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(&cli)?;

    let controller: SharedController = Arc::new(RwLock::new(EffectController::new(
        store,
        cli.share_link.as_deref(),
    )));
    let mut clipboard = SystemClipboard::new();

    let mut terminal = ratatui::init();
    let mut focus = Focus::Speed;
    let mut cursor = 0usize;
    let frame_time = Duration::from_millis(50);
    let mut running = true;

    while running {
        let frame_start = Instant::now();
        controller.write().unwrap().tick(frame_start);

        // keep the cursor inside the (possibly shrunk) history
        let history_len = controller.read().unwrap().history.len();
        cursor = cursor.min(history_len.saturating_sub(1));

        let root = build_layout(&controller, focus, cursor);
        terminal.draw(|f| root.draw(f, f.area()))?;

        while crossterm::event::poll(Duration::from_millis(0))? {
            let Event::Key(key) = crossterm::event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => running = false,
                KeyCode::Tab => focus = focus.next(),
                KeyCode::Char('c') => {
                    controller
                        .write()
                        .unwrap()
                        .copy(&mut clipboard, Instant::now());
                }
                KeyCode::Char(d @ '1'..='6') => {
                    let idx = d as usize - '1' as usize;
                    let mut c = controller.write().unwrap();
                    c.controls.kind =
                        crate::effect::EffectKind::ALL[idx].as_str().to_string();
                    c.sync();
                }
                KeyCode::Left | KeyCode::Right => {
                    let forward = key.code == KeyCode::Right;
                    let steps: i32 = if forward { 1 } else { -1 };
                    let mut c = controller.write().unwrap();
                    match focus {
                        Focus::Speed => c.controls.step_speed(steps),
                        Focus::Scale => c.controls.step_scale(steps),
                        Focus::Kind => c.controls.cycle_kind(forward),
                        Focus::Timing => c.controls.cycle_timing(forward),
                        Focus::History => continue,
                    }
                    c.sync();
                }
                KeyCode::Up if focus == Focus::History => {
                    cursor = cursor.saturating_sub(1);
                }
                KeyCode::Down if focus == Focus::History => {
                    let len = controller.read().unwrap().history.len();
                    if cursor + 1 < len {
                        cursor += 1;
                    }
                }
                KeyCode::Enter if focus == Focus::History => {
                    controller.write().unwrap().restore(cursor);
                }
                _ => {}
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    ratatui::restore();
    Ok(())
}
