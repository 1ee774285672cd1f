use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only snapshot of a game, for rendering and bookkeeping by a
/// presentation layer. Nothing here aliases the live engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub size: Coord2,
    pub colors: Array2<Color>,
    pub region: Array2<bool>,
    pub moves: MoveCount,
    pub par: MoveCount,
    pub state: GameStatus,
}

impl Observation {
    pub fn from_engine(engine: &FloodEngine) -> Self {
        let size = engine.size();
        let mut colors = Array2::from_elem(size.to_nd_index(), Color::default());
        let mut region = Array2::from_elem(size.to_nd_index(), false);

        let (x_end, y_end) = size;
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                colors[coords.to_nd_index()] = engine.board()[coords];
                region[coords.to_nd_index()] = engine.region().contains(coords);
            }
        }

        Self {
            size,
            colors,
            region,
            moves: engine.moves(),
            par: engine.par(),
            state: engine.state(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.size.0), usize::from(self.size.1));
        if self.colors.dim() != expected || self.region.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}
