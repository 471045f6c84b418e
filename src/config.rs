use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::board::{Board, BoardSize};
use crate::error::{Error, Result};

/// Settings for one game of Minesweeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinesweeperConfig {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    /// Pause between turns so a game can be watched.
    pub delay_ms: u64,
    /// Fixes both the mine layout and the AI's guesses.
    pub seed: Option<u64>,
}

impl Default for MinesweeperConfig {
    fn default() -> MinesweeperConfig {
        MinesweeperConfig{width: 8, height: 8, mines: 8, delay_ms: 0, seed: None}
    }
}

impl MinesweeperConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfiguration{
                message: format!("board must be at least 1x1, got {}x{}", self.width, self.height)
            })
        }
        let area = BoardSize::new(self.width, self.height).checked_area().ok_or_else(|| Error::InvalidConfiguration{
            message: format!("board of {}x{} is too large", self.width, self.height)
        })?;
        if self.mines >= area {
            return Err(Error::TooManyMines{mines: self.mines, area})
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        }
    }

    pub fn build_board(&self, rng: &mut StdRng) -> Result<Board> {
        self.validate()?;
        Board::random(self.width, self.height, self.mines, rng)
    }
}
