use serde::{Deserialize, Serialize};

use crate::{Game, Orientation, Piece, PieceKind, Point};

/// An input, as delivered by whatever maps clicks or keys to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    /// A board cell was picked. The coordinates may be off the board.
    Cell { x: i32, y: i32 },
    /// The `slot`-th entry of `owner`'s reserve was picked.
    ///
    /// Slots are numbered in the order of [`GameView::reserves`].
    Reserve { owner: Orientation, slot: usize },
}

/// A single field on the board, including coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub piece: Option<Piece>,
    pub highlighted: bool,
}

/// One entry of a player's reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSlot {
    pub kind: PieceKind,
    pub count: u32,
}

/// Both reserves, in slot order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservesView {
    pub forward: Vec<ReserveSlot>,
    pub backward: Vec<ReserveSlot>,
}

impl ReservesView {
    pub fn of(&self, owner: Orientation) -> &[ReserveSlot] {
        match owner {
            Orientation::Forward => &self.forward,
            Orientation::Backward => &self.backward,
        }
    }
}

/// Everything needed to draw one frame of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub cols: usize,
    pub rows: usize,
    /// Row by row, starting at `y = 0`.
    pub cells: Vec<CellView>,
    pub turn: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub selected_square: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub pending_reserve: Option<PieceKind>,
    pub reserves: ReservesView,
}

impl GameView {
    pub fn cell(&self, p: Point) -> Option<&CellView> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.cols || p.y as usize >= self.rows {
            return None;
        }
        self.cells.get(p.y as usize * self.cols + p.x as usize)
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let board = game.board();
        let slots = |owner: Orientation| -> Vec<ReserveSlot> {
            game.player(owner)
                .reserve()
                .iter()
                .map(|(kind, count)| ReserveSlot { kind, count })
                .collect()
        };
        GameView {
            cols: board.cols(),
            rows: board.rows(),
            cells: board
                .cells()
                .map(|(p, cell)| CellView {
                    x: p.x,
                    y: p.y,
                    piece: cell.piece,
                    highlighted: cell.is_highlighted(),
                })
                .collect(),
            turn: game.turn(),
            selected_square: game.selected_square(),
            pending_reserve: game.pending_reserve(),
            reserves: ReservesView {
                forward: slots(Orientation::Forward),
                backward: slots(Orientation::Backward),
            },
        }
    }
}

impl Game {
    /// A snapshot of the current state for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}
