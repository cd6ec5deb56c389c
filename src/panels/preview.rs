//! src/panels/preview.rs
//!
//! Preview panel: renders the applied document style, i.e. the three
//! custom properties and the declarations the element gains on hover.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::{PROP_SCALE, PROP_SPEED, PROP_TIMING, SharedController};
use crate::effect::codegen;

pub struct PreviewPanel {
    pub shared: SharedController,
}

impl PreviewPanel {
    pub fn new(shared: SharedController) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for PreviewPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.shared.read().unwrap();

        let mut lines = vec![Line::from(Span::styled(
            ":root".to_string(),
            Style::default().fg(Color::Magenta),
        ))];
        for prop in [PROP_SPEED, PROP_TIMING, PROP_SCALE] {
            let value = c.document.property(prop).unwrap_or("-");
            lines.push(Line::from(vec![
                Span::styled(format!("  {prop}: "), Style::default().fg(Color::Yellow)),
                Span::styled(value.to_string(), Style::default().fg(Color::Cyan)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "on hover".to_string(),
            Style::default().fg(Color::Magenta),
        )));
        let body = codegen::hover_declarations(&c.state.kind, &c.state.scale);
        if body.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (no effect)".to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for declaration in body.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", declaration.trim()),
                    Style::default().fg(Color::Green),
                )));
            }
        }

        let block = Block::default().title("Preview").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
