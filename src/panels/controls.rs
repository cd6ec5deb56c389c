//! src/panels/controls.rs
//!
//! Control panel: the four effect parameters, with the focused field
//! highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::SharedController;

/// Which of the four input controls has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlField {
    Speed,
    Scale,
    Kind,
    Timing,
}

pub struct ControlsPanel {
    pub shared: SharedController,
    pub focused: Option<ControlField>,
}

impl ControlsPanel {
    pub fn new(shared: SharedController, focused: Option<ControlField>) -> Self {
        Self { shared, focused }
    }

    fn row(&self, field: ControlField, name: &str, value: String) -> Line<'static> {
        let focused = self.focused == Some(field);
        let marker = if focused { "> " } else { "  " };
        let name_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(marker.to_string(), name_style),
            Span::styled(format!("{name:<8}"), name_style),
            Span::styled(value, Style::default().fg(Color::Cyan)),
        ])
    }
}

impl crate::ui::Panel for ControlsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.shared.read().unwrap();
        let lines = vec![
            self.row(ControlField::Speed, "Speed", format!("{}s", c.controls.speed)),
            self.row(ControlField::Scale, "Scale", c.controls.scale.clone()),
            self.row(
                ControlField::Kind,
                "Type",
                crate::effect::config::kind_label(&c.controls.kind).to_string(),
            ),
            self.row(ControlField::Timing, "Timing", c.controls.timing.clone()),
        ];
        let block = Block::default().title("Controls").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
