use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Point;

/// The identifier of a piece type.
///
/// The declaration order is the catalog order, which is also the order in
/// which a [`Reserve`](crate::Reserve) lists its contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Chicken,
    Giraffe,
    Elephant,
    Lion,
}

/// The shared, immutable description of one kind of piece.
#[derive(Debug, PartialEq, Eq)]
pub struct PieceType {
    pub kind: PieceKind,
    /// Name used in configuration files and for looking up assets.
    pub id: &'static str,
    /// Single-letter symbol used by the text layout format.
    pub symbol: char,
    /// Relative moves, authored for a [`Orientation::Forward`] piece.
    pub moves: &'static [Point],
}

/// Every piece type in the game, indexed by `PieceKind as usize`.
pub static CATALOG: [PieceType; 4] = [
    PieceType {
        kind: PieceKind::Chicken,
        id: "chicken",
        symbol: 'C',
        moves: &[Point::new(0, 1)],
    },
    PieceType {
        kind: PieceKind::Giraffe,
        id: "giraffe",
        symbol: 'G',
        moves: &[
            Point::new(0, 1),
            Point::new(1, 0),
            Point::new(0, -1),
            Point::new(-1, 0),
        ],
    },
    PieceType {
        kind: PieceKind::Elephant,
        id: "elephant",
        symbol: 'E',
        moves: &[
            Point::new(1, 1),
            Point::new(1, -1),
            Point::new(-1, -1),
            Point::new(-1, 1),
        ],
    },
    PieceType {
        kind: PieceKind::Lion,
        id: "lion",
        symbol: 'L',
        // Everything except straight backwards
        moves: &[
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
            Point::new(1, -1),
            Point::new(-1, -1),
            Point::new(-1, 0),
            Point::new(-1, 1),
        ],
    },
];

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Chicken,
        PieceKind::Giraffe,
        PieceKind::Elephant,
        PieceKind::Lion,
    ];

    /// Looks up the catalog entry for this kind.
    pub fn piece_type(self) -> &'static PieceType {
        &CATALOG[self as usize]
    }

    pub fn moves(self) -> &'static [Point] {
        self.piece_type().moves
    }

    pub fn id(self) -> &'static str {
        self.piece_type().id
    }

    pub fn symbol(self) -> char {
        self.piece_type().symbol
    }

    /// Inverse of [`Self::symbol()`], ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        CATALOG.iter().find(|t| t.symbol == upper).map(|t| t.kind)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}

/// The error type for the [`FromStr`] instance of [`PieceKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceKindFromStrErr {
    pub input: String,
}

impl std::error::Error for PieceKindFromStrErr {}

impl std::fmt::Display for PieceKindFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not the name of a piece", self.input)
    }
}

impl FromStr for PieceKind {
    type Err = PieceKindFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(s))
            .map(|t| t.kind)
            .ok_or_else(|| PieceKindFromStrErr {
                input: String::from(s),
            })
    }
}

/// Which way is "forward" for a piece or player.
///
/// This also identifies the owner of a piece: the forward player owns
/// all forward-facing pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Moves towards increasing `y`.
    Forward,
    /// Moves towards decreasing `y`.
    Backward,
}

impl Orientation {
    pub fn opponent(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Backward,
            Orientation::Backward => Orientation::Forward,
        }
    }

    /// Turns a move offset authored for forward pieces into the target
    /// square for a piece with this orientation standing at `from`.
    pub fn apply(self, from: Point, offset: Point) -> Point {
        match self {
            Orientation::Forward => from + offset,
            Orientation::Backward => from - offset,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Forward => f.pad("forward"),
            Orientation::Backward => f.pad("backward"),
        }
    }
}

/// A piece standing on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub orientation: Orientation,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(orientation: Orientation, kind: PieceKind) -> Self {
        Self { orientation, kind }
    }

    pub fn piece_type(&self) -> &'static PieceType {
        self.kind.piece_type()
    }

    /// The symbol used by the text layout format: uppercase for
    /// forward pieces, lowercase for backward pieces.
    pub fn symbol(&self) -> char {
        match self.orientation {
            Orientation::Forward => self.kind.symbol(),
            Orientation::Backward => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Self::symbol()`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::from_symbol(symbol)?;
        let orientation = if symbol.is_ascii_uppercase() {
            Orientation::Forward
        } else {
            Orientation::Backward
        };
        Some(Self { orientation, kind })
    }
}
