//! SupplyView: formats the queue, the reserve, and the menu for the terminal.
//!
//! Pieces are colored per kind when stdout is a terminal; the plain mode
//! produces bare text for pipes and tests.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize};

use crate::core::{PieceQueue, Reserve};
use crate::types::{Piece, PieceKind};

/// Per-kind foreground color (same palette as standard piece rendering)
fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        }, // Orange
    }
}

pub struct SupplyView {
    colored: bool,
}

impl SupplyView {
    /// Create a view, colored when stdout is a terminal
    pub fn new() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
        }
    }

    /// Create an uncolored view (pipes, tests)
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Render one `[kind id]` cell
    pub fn cell(&self, piece: &Piece) -> String {
        let text = piece.to_string();
        if self.colored {
            text.with(piece_color(piece.kind)).to_string()
        } else {
            text
        }
    }

    fn cells<'a>(&self, pieces: impl Iterator<Item = &'a Piece>) -> String {
        let rendered: Vec<String> = pieces.map(|p| self.cell(p)).collect();
        if rendered.is_empty() {
            "(empty)".to_string()
        } else {
            rendered.join(" ")
        }
    }

    /// Queue state line, head to tail
    pub fn queue_line(&self, queue: &PieceQueue) -> String {
        format!("queue   (head -> tail): {}", self.cells(queue.iter()))
    }

    /// Reserve state line, top to base
    pub fn reserve_line(&self, reserve: &Reserve) -> String {
        format!("reserve (top -> base): {}", self.cells(reserve.iter_top_down()))
    }

    /// The command menu, ending with the prompt (no trailing newline)
    pub fn menu(&self) -> &'static str {
        concat!(
            "options:\n",
            "  1 - play the next piece\n",
            "  2 - reserve the next piece\n",
            "  3 - use a reserved piece\n",
            "  4 - swap queue head with reserve top\n",
            "  5 - swap the first three pieces\n",
            "  0 - exit\n",
            "choose an option: ",
        )
    }
}

impl Default for SupplyView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn test_plain_cell() {
        let view = SupplyView::plain();
        let piece = Piece::new(PieceKind::O, 12);
        assert_eq!(view.cell(&piece), "[O 12]");
    }

    #[test]
    fn test_empty_containers_render_placeholder() {
        let view = SupplyView::plain();
        let queue = PieceQueue::new();
        let reserve = Reserve::new();
        assert_eq!(view.queue_line(&queue), "queue   (head -> tail): (empty)");
        assert_eq!(view.reserve_line(&reserve), "reserve (top -> base): (empty)");
    }

    #[test]
    fn test_queue_line_orders_head_to_tail() {
        let view = SupplyView::plain();
        let mut queue = PieceQueue::new();
        queue.enqueue(Piece::new(PieceKind::I, 0)).unwrap();
        queue.enqueue(Piece::new(PieceKind::T, 1)).unwrap();
        assert_eq!(view.queue_line(&queue), "queue   (head -> tail): [I 0] [T 1]");
    }

    #[test]
    fn test_reserve_line_orders_top_to_base() {
        let view = SupplyView::plain();
        let mut reserve = Reserve::new();
        reserve.push(Piece::new(PieceKind::I, 0)).unwrap();
        reserve.push(Piece::new(PieceKind::L, 1)).unwrap();
        // Last push is the top, listed first
        assert_eq!(view.reserve_line(&reserve), "reserve (top -> base): [L 1] [I 0]");
    }
}
