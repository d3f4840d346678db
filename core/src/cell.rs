use serde::{Deserialize, Serialize};

/// Full state of one board position, including the hidden mine bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) detonated: bool,
    pub(crate) adjacent_mines: Option<u8>,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Cached count, present once the cell has been revealed.
    pub const fn adjacent_mines(self) -> Option<u8> {
        self.adjacent_mines
    }

    /// Hidden, unflagged and mine-free: the cells a cascade may open.
    pub(crate) const fn is_cascade_target(self) -> bool {
        !self.revealed && !self.flagged && !self.has_mine
    }

    pub(crate) fn view(self, disclosed: bool) -> TileView {
        use TileView::*;

        match self {
            Self {
                detonated: true, ..
            } => Detonated,
            Self {
                revealed: true,
                adjacent_mines: Some(count),
                ..
            } => Revealed(count),
            Self {
                flagged: true,
                has_mine: false,
                ..
            } if disclosed => IncorrectFlag,
            Self { flagged: true, .. } => Flagged,
            Self { has_mine: true, .. } if disclosed => Mine,
            _ => Hidden,
        }
    }
}

/// Player-visible state of a cell, as handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// The mine the player stepped on.
    Detonated,
    /// Only shown after disclosure.
    Mine,
    /// Flag on a safe cell, only shown after disclosure.
    IncorrectFlag,
}

impl TileView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::IncorrectFlag)
    }

    pub const fn adjacent_mine_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mines_stay_hidden_until_disclosed() {
        let mine = Cell {
            has_mine: true,
            ..Default::default()
        };

        assert_eq!(mine.view(false), TileView::Hidden);
        assert_eq!(mine.view(true), TileView::Mine);
    }

    #[test]
    fn flags_are_judged_only_after_disclosure() {
        let safe_flag = Cell {
            flagged: true,
            ..Default::default()
        };
        let mine_flag = Cell {
            has_mine: true,
            flagged: true,
            ..Default::default()
        };

        assert_eq!(safe_flag.view(false), TileView::Flagged);
        assert_eq!(safe_flag.view(true), TileView::IncorrectFlag);
        assert_eq!(mine_flag.view(true), TileView::Flagged);
    }

    #[test]
    fn revealed_cell_exposes_its_count() {
        let cell = Cell {
            revealed: true,
            adjacent_mines: Some(3),
            ..Default::default()
        };

        assert_eq!(cell.view(false), TileView::Revealed(3));
        assert_eq!(cell.view(false).adjacent_mine_count(), Some(3));
        assert!(!cell.is_cascade_target());
    }
}
