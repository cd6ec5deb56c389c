//! src/panels/footer.rs
//!
//! Footer: the current share link plus key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::controller::SharedController;

pub struct FooterPanel {
    pub shared: SharedController,
    pub help: String,
}

impl FooterPanel {
    pub fn new(shared: SharedController, help: &str) -> Self {
        Self {
            shared,
            help: help.to_string(),
        }
    }
}

impl crate::ui::Panel for FooterPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.shared.read().unwrap();
        let lines = vec![
            Line::from(vec![
                Span::styled("Share: ".to_string(), Style::default().fg(Color::Yellow)),
                Span::styled(c.share_link.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(self.help.clone()),
        ];
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
