//! Error types for move application and board parsing.

/// A move whose player, edge, or index is outside its legal domain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    #[error("unknown player: {0:?}")]
    UnknownPlayer(char),

    #[error("unknown edge: {0:?}")]
    UnknownEdge(char),

    #[error("index {index} out of range for a {size}x{size} board")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Errors from parsing the printed board form or decoding a serialized board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("board text is empty")]
    Empty,

    #[error("row {row} has {len} cells, expected {rows} for a square board")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("unknown cell symbol: {0:?}")]
    UnknownCell(char),

    #[error("{len} cells cannot fill a {size}x{size} board")]
    CellCount { size: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMoveError::IndexOutOfRange { index: 5, size: 4 };
        assert_eq!(err.to_string(), "index 5 out of range for a 4x4 board");
        assert_eq!(
            InvalidMoveError::UnknownEdge('Q').to_string(),
            "unknown edge: 'Q'"
        );
    }

    #[test]
    fn test_parse_board_display() {
        let err = ParseBoardError::NotSquare { rows: 4, row: 2, len: 3 };
        assert_eq!(
            err.to_string(),
            "row 2 has 3 cells, expected 4 for a square board"
        );
        assert_eq!(
            ParseBoardError::CellCount { size: 3, len: 2 }.to_string(),
            "2 cells cannot fill a 3x3 board"
        );
    }
}
