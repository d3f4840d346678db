use crate::*;

/// Number of mines among the up-to-8 neighbours of `coords`.
pub fn count_adjacent_mines(grid: &Grid, coords: Coord2) -> u8 {
    let mut count = 0;
    for pos in grid.iter_neighbors(coords) {
        if grid[pos].has_mine() {
            count += 1;
        }
    }
    count
}

/// Like [`count_adjacent_mines`], but stores the result on the cell and reuses it.
pub(crate) fn cached_adjacent_mines(grid: &mut Grid, coords: Coord2) -> u8 {
    if let Some(count) = grid[coords].adjacent_mines {
        return count;
    }
    let count = count_adjacent_mines(grid, coords);
    grid[coords].adjacent_mines = Some(count);
    count
}
