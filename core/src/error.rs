use thiserror::Error;

use crate::{Coord, Coord2};

/// Why a level could not be built from a grid or parsed from text.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("The level cannot be empty")]
    Empty,
    #[error("There can only be one Santa (found none)")]
    NoSanta,
    #[error("There can only be one Santa (found {0})")]
    TooManySantas(usize),
    #[error("All rows must contain the same number of columns")]
    RaggedRows,
    #[error("There must be at least one present")]
    NoPresents,
    #[error("The level cannot be larger than 255 x 255")]
    TooLarge,
    #[error("Cannot parse symbol {0}!")]
    UnknownSymbol(char),
}

/// Why a move was rejected. The attempt is left untouched in every case.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelMoveError {
    #[error("Cannot move to cell ({row}, {column}) - it is not a valid cell")]
    InvalidCell { row: Coord, column: Coord },
    #[error("Cannot move to cell ({row}, {column}) - it is not available")]
    Unavailable { row: Coord, column: Coord },
    #[error("Cannot move - the Grinch has been uncovered!")]
    GrinchUncovered,
    #[error("Cannot move - all presents have been found!")]
    AlreadyComplete,
}

impl LevelMoveError {
    pub const fn invalid_cell((row, column): Coord2) -> Self {
        Self::InvalidCell { row, column }
    }

    pub const fn unavailable((row, column): Coord2) -> Self {
        Self::Unavailable { row, column }
    }

    /// Whether the attempt is over and no move can ever succeed again.
    pub const fn is_terminal(self) -> bool {
        use LevelMoveError::*;
        match self {
            InvalidCell { .. } => false,
            Unavailable { .. } => false,
            GrinchUncovered => true,
            AlreadyComplete => true,
        }
    }
}

pub type LevelResult<T> = core::result::Result<T, LevelError>;

pub type MoveResult<T> = core::result::Result<T, LevelMoveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn santa_count_messages_name_what_was_found() {
        assert_eq!(
            LevelError::NoSanta.to_string(),
            "There can only be one Santa (found none)"
        );
        assert_eq!(
            LevelError::TooManySantas(2).to_string(),
            "There can only be one Santa (found 2)"
        );
    }

    #[test]
    fn move_messages_include_coordinates() {
        assert_eq!(
            LevelMoveError::invalid_cell((2, 0)).to_string(),
            "Cannot move to cell (2, 0) - it is not a valid cell"
        );
        assert_eq!(
            LevelMoveError::unavailable((0, 0)).to_string(),
            "Cannot move to cell (0, 0) - it is not available"
        );
    }
}
