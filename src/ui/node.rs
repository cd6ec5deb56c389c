//! src/ui/node.rs
//!
//! Recursive layout tree + the Panel trait every drawable surface
//! implements. The tree is rebuilt each frame from the current state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Layout node: either a split into children or a single panel.
pub enum Node {
    Split {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Panel(Box<dyn Panel>),
}

impl Node {
    /// Children side by side.
    pub fn row(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
        Node::Split {
            direction: Direction::Horizontal,
            constraints,
            children,
        }
    }

    /// Children stacked top to bottom.
    pub fn column(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
        Node::Split {
            direction: Direction::Vertical,
            constraints,
            children,
        }
    }

    /// Wrap a panel as a leaf.
    pub fn panel(panel: impl Panel + 'static) -> Node {
        Node::Panel(Box::new(panel))
    }

    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Panel(panel) => panel.draw(f, area),
        }
    }
}
