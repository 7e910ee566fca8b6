/// The error type for building a [`Board`](crate::Board) from a text layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    NoRows,
    EmptyRow,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
}

impl std::error::Error for LayoutError {}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::NoRows => write!(f, "The layout does not contain any rows"),
            LayoutError::EmptyRow => write!(f, "The layout contains a row without cells"),
            LayoutError::RaggedRow { row, expected, found } => write!(
                f,
                "Line {} of the layout has {} cells, but the first line has {}",
                row + 1,
                found,
                expected
            ),
            LayoutError::UnknownSymbol { row, col, symbol } => write!(
                f,
                "Unknown piece symbol '{}' in line {}, column {} of the layout",
                symbol,
                row + 1,
                col + 1
            ),
        }
    }
}
