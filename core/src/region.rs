use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Connected set of cells reachable from its anchor through same-colored
/// orthogonal neighbors, together with the color it was grown under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    anchor: Coord2,
    color: Color,
    cells: BTreeSet<Coord2>,
}

impl Region {
    /// Grows the maximal set of `color` cells reachable from `anchor`,
    /// depth-first over an explicit stack.
    ///
    /// The anchor always belongs to the region, even when its own color
    /// differs from `color`; traversal then never leaves it.
    pub fn grow(board: &ColorBoard, anchor: Coord2, color: Color) -> Self {
        let mut cells = BTreeSet::from([anchor]);
        let mut pending = Vec::from([anchor]);

        while let Some(coords) = pending.pop() {
            for next in board.iter_neighbors(coords) {
                if board[next] == color && cells.insert(next) {
                    pending.push(next);
                }
            }
        }

        Self {
            anchor,
            color,
            cells,
        }
    }

    pub fn anchor(&self) -> Coord2 {
        self.anchor
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cell_count(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells.iter().copied()
    }

    /// Whether the region spans a board of `total` cells.
    pub fn covers(&self, total: CellCount) -> bool {
        self.cell_count() == total
    }
}
