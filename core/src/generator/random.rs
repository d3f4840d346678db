use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling: draw a cell, redraw if it is
/// already mined.
#[derive(Clone, Debug)]
pub struct RandomPlacer<R> {
    rng: R,
}

impl<R: Rng> RandomPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacer<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "std")]
impl RandomPlacer<rand::rngs::ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> MinePlacer for RandomPlacer<R> {
    fn place_mines(mut self, grid: &mut Grid, config: GameConfig) -> Result<()> {
        // sampling would never finish on a full or mismatched board
        check_blank_grid(grid, config)?;

        let side = grid.side();
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < config.mine_count {
            let x = self.rng.random_range(0..side);
            let y = self.rng.random_range(0..side);
            draws += 1;
            if grid.place_mine((x, y)) {
                mines_placed += 1;
            }
        }
        log::trace!("Placed {} mines in {} draws", mines_placed, draws);

        // double check mine count
        let count = grid.mine_count();
        if count != config.mine_count {
            log::warn!(
                "Placed mine count mismatch, actual: {}, requested: {}",
                count,
                config.mine_count
            );
            return Err(GameError::MineCountMismatch {
                expected: config.mine_count,
                actual: count.into(),
            });
        }
        Ok(())
    }
}
