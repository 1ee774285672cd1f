use ndarray::Array2;

use super::*;

/// Draws every cell uniformly from the active palette. The same seed always
/// reproduces the same board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> ColorBoard {
        use rand::prelude::*;

        let palette = config.palette();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // row-major fill, so a seed pins the exact board
        let cells = Array2::from_shape_fn(config.size.to_nd_index(), |_| {
            palette[rng.random_range(0..palette.len())]
        });
        ColorBoard::from_cells(cells)
    }
}
