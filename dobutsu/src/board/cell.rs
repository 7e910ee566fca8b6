use serde::{Deserialize, Serialize};

use crate::Piece;

/// A single square of the board.
///
/// The highlight flag only exists for drawing the candidate targets of the
/// current selection. The rules never look at it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub piece: Option<Piece>,
    #[serde(default)]
    highlighted: bool,
}

impl Cell {
    pub fn new(piece: Option<Piece>) -> Self {
        Self {
            piece,
            highlighted: false,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn contains_piece(&self) -> bool {
        self.piece.is_some()
    }

    /// Empties the cell, returning whatever stood there.
    pub fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub fn highlight(&mut self) {
        self.highlighted = true;
    }

    pub fn unhighlight(&mut self) {
        self.highlighted = false;
    }
}
