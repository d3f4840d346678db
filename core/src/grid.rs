use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Square store of cells addressed by `(x, y)` or by linear position.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    side: Coord,
}

impl Grid {
    pub fn new(side: Coord) -> Self {
        Self {
            cells: Array2::default((side, side).to_nd_index()),
            side,
        }
    }

    pub fn side(&self) -> Coord {
        self.side
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.side && y < self.side
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Maps a linear position back to `(x, y)`, or `None` when outside the board.
    pub fn decode(&self, position: Position) -> Option<Coord2> {
        let position = CellCount::try_from(position).ok()?;
        if position >= self.total_cells() {
            return None;
        }
        let side = CellCount::from(self.side);
        let x = (position % side).try_into().ok()?;
        let y = (position / side).try_into().ok()?;
        Some((x, y))
    }

    pub fn encode(&self, (x, y): Coord2) -> Position {
        Position::from(y) * Position::from(self.side) + Position::from(x)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side)
    }

    /// All coordinates in linear position order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side;
        (0..side).flat_map(move |y| (0..side).map(move |x| (x, y)))
    }

    /// Sets the mine bit, returning `false` if the cell already had one.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self[coords];
        if cell.has_mine {
            false
        } else {
            cell.has_mine = true;
            true
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::has_mine)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    fn count_where(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        // at most 255 * 255 cells, always fits
        self.cells.iter().filter(|&&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
