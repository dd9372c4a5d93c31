//! Rectangular grids, the most common search space in puzzle inputs.
//!
//! The grid only answers geometry questions (bounds, steps, orthogonal
//! cells). Which cells are walls and what a step costs stays in the
//! consumer's neighbor closure.
//!
//! ```rust
//! use aoc_search::{Bfs, Target};
//! use aoc_search::grid::{Grid, Pos};
//!
//! let grid = Grid::from_chars("S.#\n..#\n..E").unwrap();
//! let start = grid.find(|&c| c == 'S').unwrap();
//! let end = grid.find(|&c| c == 'E').unwrap();
//!
//! let bfs = Bfs::new(|p: &Pos| grid.orthogonal(*p).filter(|q| grid[*q] != '#').collect::<Vec<_>>());
//! assert_eq!(bfs.hops_to_reach(&start, Target(end)), Some(4));
//! ```

use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// A cell position, row-major, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Facing direction on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Row and column delta of one step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// A rectangular, row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a `width` × `height` grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Builds a grid from text, one row per line, converting each character
    /// with `cell`.
    ///
    /// Trailing newlines are ignored; `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] when there are no rows
    /// - [`GridError::Ragged`] when a row's width differs from the first row
    /// - [`GridError::InvalidCell`] when `cell` rejects a character
    pub fn parse_with(input: &str, cell: impl Fn(char) -> Option<T>) -> Result<Self, GridError> {
        let input = input.trim_end_matches(['\n', '\r']);
        if input.is_empty() {
            return Err(GridError::Empty);
        }

        let mut width = None;
        let mut cells = Vec::with_capacity(input.len());
        let mut height = 0;

        for (row, line) in input.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let before = cells.len();
            for (col, ch) in line.chars().enumerate() {
                cells.push(cell(ch).ok_or(GridError::InvalidCell { row, col, ch })?);
            }
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn offset_of(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.offset_of(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.offset_of(pos).map(|i| &mut self.cells[i])
    }

    /// The cell one step from `pos` in direction `dir`, if inside the grid.
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let next = Pos::new(
            pos.row.checked_add_signed(dr)?,
            pos.col.checked_add_signed(dc)?,
        );
        self.contains(next).then_some(next)
    }

    /// In-bounds orthogonal neighbors of `pos`, clockwise from north.
    pub fn orthogonal(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos::new(row, col)))
    }

    /// First position (row-major) whose cell satisfies `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Pos> {
        self.positions().find(|&pos| pred(&self[pos]))
    }
}

impl Grid<char> {
    /// Builds a grid of raw characters.
    pub fn from_chars(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, Some)
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Pos) -> &T {
        assert!(self.contains(pos), "position {pos:?} outside grid");
        &self.cells[pos.row * self.width + pos.col]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        assert!(self.contains(pos), "position {pos:?} outside grid");
        &mut self.cells[pos.row * self.width + pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let grid = Grid::parse_with("123\n456\n", |c| c.to_digit(10)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Pos::new(1, 2)], 6);
        assert_eq!(grid.get(Pos::new(2, 0)), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::from_chars(""), Err(GridError::Empty));
        assert_eq!(Grid::from_chars("\n\n"), Err(GridError::Empty));
        assert_eq!(
            Grid::from_chars("abc\nab"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse_with("12\n3x", |c| c.to_digit(10)),
            Err(GridError::InvalidCell {
                row: 1,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn test_crlf_input() {
        let grid = Grid::from_chars("ab\r\ncd\r\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid[Pos::new(1, 0)], 'c');
    }

    #[test]
    fn test_orthogonal_stays_in_bounds() {
        let grid = Grid::filled(3, 2, 0u8);
        let corner: Vec<_> = grid.orthogonal(Pos::new(0, 0)).collect();
        assert_eq!(corner, vec![Pos::new(0, 1), Pos::new(1, 0)]);
        let edge: Vec<_> = grid.orthogonal(Pos::new(1, 1)).collect();
        assert_eq!(edge, vec![Pos::new(0, 1), Pos::new(1, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn test_direction_turns() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.reverse().reverse(), dir);
            assert_ne!(dir.reverse(), dir);
        }
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::North.turn_left(), Direction::West);
    }

    #[test]
    fn test_find_and_mutation() {
        let mut grid = Grid::from_chars("..\n.S").unwrap();
        let start = grid.find(|&c| c == 'S').unwrap();
        assert_eq!(start, Pos::new(1, 1));
        grid[start] = '#';
        assert_eq!(grid.get(start), Some(&'#'));
        if let Some(cell) = grid.get_mut(Pos::new(0, 0)) {
            *cell = 'x';
        }
        assert_eq!(grid.find(|&c| c == 'x'), Some(Pos::new(0, 0)));
        assert_eq!(Pos::new(0, 0).manhattan(Pos::new(1, 1)), 2);
    }
}
