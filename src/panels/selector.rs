//! src/panels/selector.rs
//!
//! Effect selector: the six effect types, rendered from the document's
//! highlight states. The selected item is full-strength, the rest dimmed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::SharedController;
use crate::effect::EffectKind;

pub struct SelectorPanel {
    pub shared: SharedController,
}

impl SelectorPanel {
    pub fn new(shared: SharedController) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for SelectorPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.shared.read().unwrap();
        let lines: Vec<Line> = EffectKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let selected = c.document.is_selected(kind.as_str());
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), style),
                    Span::styled(kind.label().to_string(), style),
                ])
            })
            .collect();
        let block = Block::default().title("Effects").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
