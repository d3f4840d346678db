#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod adjacency;
mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

/// Board side length and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: Coord,
    pub mine_count: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(board_size: Coord, mine_count: CellCount) -> Self {
        Self {
            board_size,
            mine_count,
        }
    }

    /// Validating constructor for untyped input such as CLI flags.
    pub fn new(board_size: u32, mine_count: u32) -> Result<Self> {
        if board_size == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        if mine_count == 0 {
            return Err(ConfigError::NoMines.into());
        }
        let side = Coord::try_from(board_size).map_err(|_| ConfigError::BoardTooLarge {
            requested: board_size,
        })?;
        let cells = u32::from(mult(side, side));
        let mines = CellCount::try_from(mine_count)
            .ok()
            .filter(|&mines| u32::from(mines) < cells)
            .ok_or(ConfigError::TooManyMines {
                mines: mine_count,
                cells,
            })?;

        Ok(Self::new_unchecked(side, mines))
    }

    /// Checks `0 < mine_count < board_size²`, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.board_size.into(), self.mine_count.into()).map(|_| ())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.board_size, self.board_size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(8, 4)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// Revealed cell, out-of-range position or finished game; nothing changed.
    Rejected,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::Flagged | Self::Unflagged => true,
            Self::Rejected => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell cleared, carrying its adjacent mine count.
    Safe(u8),
    Mine,
    /// Already revealed, flagged, or the game is over.
    Blocked,
    /// Position outside the board.
    Ignored,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Safe(_) => true,
            Mine => true,
            Blocked => false,
            Ignored => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_non_positive_values() {
        assert_eq!(
            GameConfig::new(0, 1),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard))
        );
        assert_eq!(
            GameConfig::new(4, 0),
            Err(GameError::InvalidConfiguration(ConfigError::NoMines))
        );
    }

    #[test]
    fn config_rejects_boards_without_a_safe_cell() {
        assert_eq!(
            GameConfig::new(4, 16),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines {
                mines: 16,
                cells: 16
            }))
        );
        assert!(GameConfig::new(1, 1).is_err());
        assert!(GameConfig::new(255, 70_000).is_err());
        assert_eq!(GameConfig::new(4, 15).unwrap().safe_cells(), 1);
    }

    #[test]
    fn config_rejects_oversized_board() {
        assert_eq!(
            GameConfig::new(256, 10),
            Err(GameError::InvalidConfiguration(ConfigError::BoardTooLarge {
                requested: 256
            }))
        );
        assert_eq!(GameConfig::new(255, 10).unwrap().total_cells(), 65025);
    }

    #[test]
    fn default_config_is_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.board_size, 8);
        assert_eq!(config.mine_count, 4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn deserialized_config_can_be_validated() {
        let config: GameConfig =
            serde_json::from_str(r#"{"board_size": 3, "mine_count": 9}"#).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(RevealOutcome::Safe(0).has_update());
        assert!(RevealOutcome::Mine.has_update());
        assert!(!RevealOutcome::Blocked.has_update());
        assert!(!RevealOutcome::Ignored.has_update());
        assert!(FlagOutcome::Flagged.has_update());
        assert!(!FlagOutcome::Rejected.has_update());
    }
}
