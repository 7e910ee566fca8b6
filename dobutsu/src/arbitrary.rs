use quickcheck::{Arbitrary, Gen};

use crate::{Board, Game, InputEvent, Orientation, Piece, PieceKind, Point, Reserve};

/// A small board with pieces of both sides scattered over it.
#[derive(Clone, Debug)]
pub struct ArbitraryBoard(pub Board);

/// A game in some random position, with random reserves and side to move.
#[derive(Clone, Debug)]
pub struct ArbitraryGame(pub Game);

/// A sequence of inputs, mostly aimed at the board and its immediate surroundings.
#[derive(Clone, Debug)]
pub struct Inputs(pub Vec<InputEvent>);

impl Arbitrary for Point {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small enough that adding and subtracting never overflows
        Point::new(i16::arbitrary(g) as i32, i16::arbitrary(g) as i32)
    }
}

impl Arbitrary for PieceKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&PieceKind::ALL).unwrap()
    }
}

impl Arbitrary for Orientation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Orientation::Forward, Orientation::Backward])
            .unwrap()
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        Piece::new(Orientation::arbitrary(g), PieceKind::arbitrary(g))
    }
}

impl Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let cols = (u8::arbitrary(g) % 4) as usize + 1;
        let rows = (u8::arbitrary(g) % 5) as usize + 1;
        let mut board = Board::empty(cols, rows);
        for p in board.bounds().points() {
            if bool::arbitrary(g) {
                board[p].piece = Some(Piece::arbitrary(g));
            }
        }
        ArbitraryBoard(board)
    }
}

impl Arbitrary for ArbitraryGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let ArbitraryBoard(board) = ArbitraryBoard::arbitrary(g);
        let mut reserve = || {
            let len = u8::arbitrary(g) % 4;
            Reserve::from_iter((0..len).map(|_| PieceKind::arbitrary(g)))
        };
        let forward = reserve();
        let backward = reserve();
        let first_to_move = Orientation::arbitrary(g);
        ArbitraryGame(Game::with_reserves(board, forward, backward, first_to_move))
    }
}

impl Arbitrary for Inputs {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        let events = (0..len)
            .map(|_| {
                if u8::arbitrary(g) % 5 == 0 {
                    InputEvent::Reserve {
                        owner: Orientation::arbitrary(g),
                        slot: (u8::arbitrary(g) % 4) as usize,
                    }
                } else {
                    InputEvent::Cell {
                        x: (u8::arbitrary(g) % 6) as i32 - 1,
                        y: (u8::arbitrary(g) % 7) as i32 - 1,
                    }
                }
            })
            .collect();
        Inputs(events)
    }
}
