use ndarray::Array2;

/// Single coordinate axis used for level rows, columns, and positions.
pub type Coord = u8;

/// Count type used for present counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// One-based position of a level in a catalog.
pub type LevelNumber = usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A single step Santa can take. There are no diagonal steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Ordered so the cells they lead to come out in reading order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Left => (0, -1),
            Right => (0, 1),
            Down => (1, 0),
        }
    }

    /// The cell one step from `from`, if it is still on a grid of `size`.
    pub fn step(self, from: Coord2, size: Coord2) -> Option<Coord2> {
        let (d_row, d_column) = self.delta();
        let row = from.0.checked_add_signed(d_row).filter(|&row| row < size.0)?;
        let column = from
            .1
            .checked_add_signed(d_column)
            .filter(|&column| column < size.1)?;
        Some((row, column))
    }

    /// The step that leads from `from` to `to`, when the two share an edge.
    pub const fn between(from: Coord2, to: Coord2) -> Option<Self> {
        let d_row = to.0 as i16 - from.0 as i16;
        let d_column = to.1 as i16 - from.1 as i16;
        match (d_row, d_column) {
            (-1, 0) => Some(Direction::Up),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Whether `a` and `b` share an edge. Diagonals and the cell itself do not count.
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    Direction::between(a, b).is_some()
}

/// The on-grid cells one step away from `center`, in reading order.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| direction.step(center, size))
}

/// Size of an `ndarray` grid in level coordinates, clamped to what a level
/// can hold.
pub trait GridSize {
    fn grid_size(&self) -> Coord2;
}

impl<T> GridSize for Array2<T> {
    fn grid_size(&self) -> Coord2 {
        let (rows, columns) = self.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbor_list(center: Coord2, size: Coord2) -> Vec<Coord2> {
        neighbors(center, size).collect()
    }

    #[test]
    fn adjacency_excludes_diagonals_and_self() {
        assert!(is_adjacent((1, 1), (0, 1)));
        assert!(is_adjacent((1, 1), (1, 2)));
        assert!(!is_adjacent((1, 1), (1, 1)));
        assert!(!is_adjacent((1, 1), (0, 0)));
        assert!(!is_adjacent((0, 0), (0, 2)));
    }

    #[test]
    fn between_names_the_step_taken() {
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Down));
        assert_eq!(Direction::between((0, 0), (0, 255)), None);
        for direction in Direction::ALL {
            let to = direction.step((1, 1), (3, 3)).unwrap();
            assert_eq!(Direction::between((1, 1), to), Some(direction));
        }
    }

    #[test]
    fn neighbors_in_the_middle_cover_all_four_sides() {
        assert_eq!(
            neighbor_list((1, 1), (3, 3)),
            [(0, 1), (1, 0), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn neighbors_are_clipped_to_the_grid() {
        assert_eq!(neighbor_list((0, 0), (2, 2)), [(0, 1), (1, 0)]);
        assert_eq!(neighbor_list((0, 2), (1, 3)), [(0, 1)]);
        assert!(neighbor_list((0, 0), (1, 1)).is_empty());
        assert_eq!(Direction::Right.step((0, 254), (1, 255)), None);
        assert_eq!(Direction::Right.step((0, 254), (1, Coord::MAX)), None);
    }

    #[test]
    fn grid_size_clamps_oversized_arrays() {
        let grid: Array2<()> = Array2::default([2, 300]);

        assert_eq!(grid.grid_size(), (2, Coord::MAX));
    }
}
