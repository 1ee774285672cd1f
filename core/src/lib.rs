#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use color::*;
pub use engine::*;
pub use error::*;
pub use estimator::*;
pub use generator::*;
pub use observation::*;
pub use region::*;
pub use types::*;

mod color;
mod engine;
mod error;
mod estimator;
mod generator;
mod observation;
mod region;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub colors: ColorCount,
}

impl GameConfig {
    pub const MIN_SIDE: Coord = 1;
    pub const MAX_SIDE: Coord = 20;
    pub const DEFAULT_SIDE: Coord = 10;
    pub const MIN_COLORS: ColorCount = 2;
    pub const MAX_COLORS: ColorCount = PALETTE.len() as ColorCount;
    pub const DEFAULT_COLORS: ColorCount = 5;

    pub const fn new_unchecked(size: Coord2, colors: ColorCount) -> Self {
        Self { size, colors }
    }

    /// Out-of-range sides and color counts are replaced by the defaults
    /// rather than rejected.
    pub fn new((size_x, size_y): Coord2, colors: ColorCount) -> Self {
        let size_x = Self::checked_side(size_x);
        let size_y = Self::checked_side(size_y);
        let colors = if (Self::MIN_COLORS..=Self::MAX_COLORS).contains(&colors) {
            colors
        } else {
            log::warn!(
                "Color count {} outside {}..={}, using default {}",
                colors,
                Self::MIN_COLORS,
                Self::MAX_COLORS,
                Self::DEFAULT_COLORS
            );
            Self::DEFAULT_COLORS
        };
        Self::new_unchecked((size_x, size_y), colors)
    }

    fn checked_side(side: Coord) -> Coord {
        if (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side) {
            side
        } else {
            log::warn!(
                "Board side {} outside {}..={}, using default {}",
                side,
                Self::MIN_SIDE,
                Self::MAX_SIDE,
                Self::DEFAULT_SIDE
            );
            Self::DEFAULT_SIDE
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn palette(&self) -> &'static [Color] {
        Color::palette(self.colors)
    }
}

/// Dense rectangular grid of colored cells, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorBoard {
    cells: Array2<Color>,
}

impl ColorBoard {
    pub fn from_cells(cells: Array2<Color>) -> Self {
        Self { cells }
    }

    /// Uniform board: every cell is `color`.
    pub fn filled(size: Coord2, color: Color) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), color),
        }
    }

    /// Builds a board from rows of palette characters, e.g. `["WK", "KK"]`.
    /// Rows must be non-empty and all of one length.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let size_x: Coord = rows
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        let size_y: Coord = rows
            .first()
            .map(|row| row.chars().count())
            .unwrap_or(0)
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut cells = Array2::from_elem((size_x, size_y).to_nd_index(), Color::default());
        for (x, row) in rows.iter().enumerate() {
            if row.chars().count() != usize::from(size_y) {
                return Err(GameError::InvalidBoardShape);
            }
            for (y, c) in row.chars().enumerate() {
                cells[[x, y]] = Color::from_char(c).ok_or(GameError::UnknownColor)?;
            }
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn color_at(&self, coords: Coord2) -> Color {
        self[coords]
    }

    pub fn recolor(&mut self, coords: Coord2, color: Color) {
        self[coords] = color;
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for ColorBoard {
    type Output = Color;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for ColorBoard {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for ColorBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                write!(f, "{}", self[(x, y)].to_char())?;
            }
            if x + 1 < x_end {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
