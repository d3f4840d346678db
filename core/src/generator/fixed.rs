use super::*;

/// Places mines at caller-chosen coordinates, for known layouts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPlacer<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedPlacer<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MinePlacer for FixedPlacer<'_> {
    fn place_mines(self, grid: &mut Grid, config: GameConfig) -> Result<()> {
        check_blank_grid(grid, config)?;
        if self.mines.len() != usize::from(config.mine_count) {
            return Err(GameError::MineCountMismatch {
                expected: config.mine_count,
                actual: self.mines.len(),
            });
        }

        // validate everything first so a bad list leaves the grid untouched
        for (i, &coords) in self.mines.iter().enumerate() {
            grid.validate_coords(coords)?;
            if self.mines[..i].contains(&coords) {
                return Err(GameError::DuplicateMine(coords));
            }
        }

        for &coords in self.mines {
            grid.place_mine(coords);
        }
        Ok(())
    }
}
