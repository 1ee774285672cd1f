use serde::{Deserialize, Serialize};

use crate::*;

/// Cell every player region is anchored at.
pub const ANCHOR: Coord2 = (0, 0);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Live game state: the authoritative board, the player's anchored region,
/// and the move/par bookkeeping.
///
/// Terminal states are one-directional; once Won or Lost, every further move
/// is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodEngine {
    board: ColorBoard,
    colors: ColorCount,
    region: Region,
    moves: MoveCount,
    par: MoveCount,
    state: GameStatus,
}

impl FloodEngine {
    /// Starts a game on `board`, played with the first `colors` palette
    /// entries. Par is computed once here, on private copies of the initial
    /// state.
    pub fn new(board: ColorBoard, colors: ColorCount) -> Self {
        let region = Region::grow(&board, ANCHOR, board[ANCHOR]);
        let par = greedy_par(&board, &region, colors);
        Self {
            board,
            colors,
            region,
            moves: 0,
            par,
            state: Default::default(),
        }
    }

    /// Generates a board for `config` from `seed` and starts a game on it.
    pub fn from_config(config: GameConfig, seed: u64) -> Self {
        let board = RandomBoardGenerator::new(seed).generate(config);
        Self::new(board, config.colors)
    }

    pub fn state(&self) -> GameStatus {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn moves(&self) -> MoveCount {
        self.moves
    }

    pub fn par(&self) -> MoveCount {
        self.par
    }

    pub fn board(&self) -> &ColorBoard {
        &self.board
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn palette(&self) -> &'static [Color] {
        Color::palette(self.colors)
    }

    /// Recolors the player's region to `color`, then regrows it from the
    /// anchor, absorbing any newly adjacent cells of that color. Picking the
    /// region's own color is legal and costs a move without growing anything.
    ///
    /// Endings are evaluated in a fixed order: a full board within par wins;
    /// reaching par with an incomplete board loses; everything else stays in
    /// progress. The loss rule checks equality only, so a par of zero can
    /// never end the game.
    pub fn flood(&mut self, color: Color) -> Result<GameStatus> {
        self.check_in_progress()?;
        self.check_in_palette(color)?;

        for coords in self.region.iter() {
            self.board[coords] = color;
        }
        self.moves += 1;
        self.region = Region::grow(&self.board, ANCHOR, color);

        let full = self.region.covers(self.board.total_cells());
        if full && self.moves <= self.par {
            self.state = GameStatus::Won;
        } else if self.moves == self.par && !full {
            self.state = GameStatus::Lost;
        }
        Ok(self.state)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn check_in_palette(&self, color: Color) -> Result<()> {
        if self.palette().contains(&color) {
            Ok(())
        } else {
            Err(GameError::UnknownColor)
        }
    }
}
