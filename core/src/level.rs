use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A validated, immutable level layout.
///
/// Serialized as its text notation, so deserializing runs the same checks as
/// [`Level::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Level {
    cells: Array2<LevelCell>,
    santa: Coord2,
    present_count: CellCount,
    grinch_count: CellCount,
}

impl Level {
    /// Builds a level from rows of cells.
    ///
    /// Checks run in a fixed order: emptiness, Santa count, row lengths,
    /// presents, then size. Only a grid with no cells at all is empty; an
    /// empty row next to non-empty ones is a row-length error.
    pub fn new(rows: Vec<Vec<LevelCell>>) -> LevelResult<Self> {
        if rows.iter().all(Vec::is_empty) {
            return Err(LevelError::Empty);
        }
        check_single_santa(rows.iter().flatten().copied())?;

        let columns = rows[0].len();
        if rows.iter().any(|row| row.len() != columns) {
            return Err(LevelError::RaggedRows);
        }

        let row_count = rows.len();
        let flat: Vec<LevelCell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((row_count, columns), flat)
            .map_err(|_| LevelError::RaggedRows)?;
        Self::from_cells(cells)
    }

    /// Builds a level from an already rectangular grid.
    pub fn from_cells(cells: Array2<LevelCell>) -> LevelResult<Self> {
        if cells.is_empty() {
            return Err(LevelError::Empty);
        }
        check_single_santa(cells.iter().copied())?;

        let mut santa = (0, 0);
        let mut present_count = 0usize;
        let mut grinch_count = 0usize;
        for (index, &cell) in cells.indexed_iter() {
            match cell {
                LevelCell::Empty => {}
                LevelCell::Santa => santa = index,
                LevelCell::Present => present_count += 1,
                LevelCell::Grinch => grinch_count += 1,
            }
        }

        if present_count == 0 {
            return Err(LevelError::NoPresents);
        }

        let (rows, columns) = cells.dim();
        if rows > usize::from(Coord::MAX) || columns > usize::from(Coord::MAX) {
            return Err(LevelError::TooLarge);
        }

        // every index and count fits once the size is bounded
        let santa = (santa.0 as Coord, santa.1 as Coord);
        let present_count = present_count as CellCount;
        let grinch_count = grinch_count as CellCount;

        Ok(Self {
            cells,
            santa,
            present_count,
            grinch_count,
        })
    }

    /// Parses the text notation: one row per line, one symbol per cell.
    ///
    /// Each line is trimmed before its symbols are read, so indentation and
    /// `\r\n` line endings are accepted.
    pub fn parse(text: &str) -> LevelResult<Self> {
        let rows = text
            .split('\n')
            .map(|row| row.trim().chars().map(LevelCell::from_symbol).collect())
            .collect::<LevelResult<Vec<Vec<_>>>>()?;
        Self::new(rows)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.columns())
    }

    pub fn cells(&self) -> &Array2<LevelCell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<LevelCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, columns) = self.size();
        coords.0 < rows && coords.1 < columns
    }

    pub fn santa_position(&self) -> Coord2 {
        self.santa
    }

    pub fn present_count(&self) -> CellCount {
        self.present_count
    }

    pub fn grinch_count(&self) -> CellCount {
        self.grinch_count
    }
}

fn check_single_santa(cells: impl Iterator<Item = LevelCell>) -> LevelResult<()> {
    match cells.filter(|&cell| cell == LevelCell::Santa).count() {
        0 => Err(LevelError::NoSanta),
        1 => Ok(()),
        found => Err(LevelError::TooManySantas(found)),
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(text: &str) -> LevelResult<Self> {
        Self::parse(text)
    }
}

impl TryFrom<String> for Level {
    type Error = LevelError;

    fn try_from(text: String) -> LevelResult<Self> {
        Self::parse(&text)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        use alloc::string::ToString;
        level.to_string()
    }
}
