use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for putting mines onto a freshly created grid.
pub trait MinePlacer {
    /// Places exactly `config.mine_count` mines on `grid`, which must be blank.
    fn place_mines(self, grid: &mut Grid, config: GameConfig) -> Result<()>;
}

/// Rejects configs and grids that placement could never fill correctly.
pub(crate) fn check_blank_grid(grid: &Grid, config: GameConfig) -> Result<()> {
    config.validate()?;
    if grid.side() != config.board_size {
        return Err(GameError::GridSizeMismatch {
            expected: config.board_size,
            actual: grid.side(),
        });
    }
    if grid.mine_count() != 0 {
        return Err(GameError::GridNotBlank);
    }
    Ok(())
}
