use serde::{Deserialize, Serialize};

use crate::{LevelError, LevelResult};

/// Terrain of a single level cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelCell {
    Empty,
    /// Where Santa starts. Exactly one per level.
    Santa,
    Present,
    Grinch,
}

impl LevelCell {
    pub const fn from_symbol(symbol: char) -> LevelResult<Self> {
        match symbol {
            '-' => Ok(Self::Empty),
            'S' => Ok(Self::Santa),
            'P' => Ok(Self::Present),
            'G' => Ok(Self::Grinch),
            other => Err(LevelError::UnknownSymbol(other)),
        }
    }

    pub const fn symbol(self) -> char {
        use LevelCell::*;
        match self {
            Empty => '-',
            Santa => 'S',
            Present => 'P',
            Grinch => 'G',
        }
    }

    /// Terrain underneath a cell once play starts. Santa marks a position, so
    /// the start cell is left as plain ground.
    pub const fn terrain(self) -> Self {
        use LevelCell::*;
        match self {
            Empty => Empty,
            Santa => Empty,
            Present => Present,
            Grinch => Grinch,
        }
    }
}

impl Default for LevelCell {
    fn default() -> Self {
        Self::Empty
    }
}

impl TryFrom<char> for LevelCell {
    type Error = LevelError;

    fn try_from(symbol: char) -> LevelResult<Self> {
        Self::from_symbol(symbol)
    }
}

/// Movement history of a cell during an attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptState {
    Untouched,
    Touched,
    /// Santa is standing here.
    Santa,
}

impl AttemptState {
    pub const fn is_touched(self) -> bool {
        matches!(self, Self::Touched | Self::Santa)
    }
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::Untouched
    }
}

/// Live state of one cell during an attempt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptCell {
    pub cell: LevelCell,
    pub state: AttemptState,
    /// Whether Santa can step here next.
    pub is_available: bool,
    /// How many times Santa has stood here, including the start.
    pub touch_count: u32,
}

impl AttemptCell {
    pub const fn new(cell: LevelCell) -> Self {
        Self {
            cell: cell.terrain(),
            state: AttemptState::Untouched,
            is_available: false,
            touch_count: 0,
        }
    }
}
