/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Linear cell index, `y * board_size + x`.
///
/// Signed so that stray negative input is ignored like any other
/// out-of-range value instead of being unrepresentable.
pub type Position = i32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Neighbour offsets: top, bottom, then the right-hand column, then the
/// left-hand column.
static OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (1, -1),
    (1, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

/// Iterator over the in-bounds neighbours of a cell on a square board.
///
/// Both axes are bounded separately, so a cell in the last column never
/// yields cells of the next row and a cell in the first column never yields
/// cells of the previous one.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    side: Coord,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            offsets: OFFSETS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.center;
        let side = self.side;
        let step = |at: Coord, by: i8| at.checked_add_signed(by).filter(|&next| next < side);

        self.offsets
            .by_ref()
            .find_map(|&(dx, dy)| Some((step(x, dx)?, step(y, dy)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, side: Coord) -> Vec<Coord2> {
        NeighborIter::new(center, side).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let found = neighbors((2, 2), 5);

        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(2, 2)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(neighbors((0, 0), 4), [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((3, 3), 4), [(3, 2), (2, 3), (2, 2)]);
    }

    #[test]
    fn right_edge_does_not_wrap_into_next_row() {
        let found = neighbors((3, 1), 4);

        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|&(x, _)| x >= 2));
    }

    #[test]
    fn left_edge_does_not_wrap_into_previous_row() {
        let found = neighbors((0, 2), 4);

        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|&(x, _)| x <= 1));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(neighbors((0, 0), 1).is_empty());
    }
}
