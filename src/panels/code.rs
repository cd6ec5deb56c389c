//! src/panels/code.rs
//!
//! Generated-CSS panel. The block title doubles as the copy button
//! label, so copy feedback shows up right where the action lives.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::SharedController;

pub struct CodePanel {
    pub shared: SharedController,
}

impl CodePanel {
    pub fn new(shared: SharedController) -> Self {
        Self { shared }
    }
}

impl crate::ui::Panel for CodePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let c = self.shared.read().unwrap();
        let title = format!("CSS [c: {}]", c.copy.label);
        let block = Block::default().title(title).borders(Borders::ALL);
        f.render_widget(Paragraph::new(c.code.clone()).block(block), area);
    }
}
