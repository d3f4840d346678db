use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Who asked for a reveal. Only the player can set off a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealSource {
    #[default]
    Player,
    Cascade,
}

/// One game: the board plus everything derived from moves made on it.
///
/// Starting a new game means building a new value; nothing carries over.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: EngineState,
    detonated: Option<Coord2>,
    disclosed: bool,
}

impl GameState {
    pub fn new_game(config: GameConfig, placer: impl MinePlacer) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.board_size);
        placer.place_mines(&mut grid, config)?;
        log::debug!(
            "New game: {0}x{0} board, {1} mines",
            config.board_size,
            config.mine_count
        );

        Ok(Self {
            config,
            grid,
            revealed_count: 0,
            flagged_count: 0,
            state: Default::default(),
            detonated: None,
            disclosed: false,
        })
    }

    /// New game with mines drawn from the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new_random(board_size: u32, mine_count: u32) -> Result<Self> {
        let config = GameConfig::new(board_size, mine_count)?;
        Self::new_game(config, RandomPlacer::thread_local())
    }

    /// New game with a reproducible layout.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new_game(config, RandomPlacer::from_seed(seed))
    }

    /// New game with mines at known coordinates.
    pub fn from_mines(board_size: Coord, mines: &[Coord2]) -> Result<Self> {
        let mine_count = mines.len().try_into().unwrap_or(u32::MAX);
        let config = GameConfig::new(board_size.into(), mine_count)?;
        Self::new_game(config, FixedPlacer::new(mines))
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board_size(&self) -> Coord {
        self.config.board_size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mine_count
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mine_count as isize) - (self.flagged_count as isize)
    }

    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    pub fn is_disclosed(&self) -> bool {
        self.disclosed
    }

    pub fn coords_of(&self, position: Position) -> Option<Coord2> {
        self.grid.decode(position)
    }

    pub fn position_of(&self, coords: Coord2) -> Option<Position> {
        self.grid.contains(coords).then(|| self.grid.encode(coords))
    }

    pub fn tile(&self, position: Position) -> Option<TileView> {
        self.coords_of(position).map(|coords| self.view_at(coords))
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<TileView> {
        self.grid.contains(coords).then(|| self.view_at(coords))
    }

    /// Every tile in position order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, TileView)> + '_ {
        self.grid
            .iter_coords()
            .map(move |coords| (self.grid.encode(coords), self.view_at(coords)))
    }

    /// Player move at `position`.
    pub fn reveal(&mut self, position: Position) -> RevealOutcome {
        self.reveal_from(position, RevealSource::Player)
    }

    pub fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        match self.position_of(coords) {
            Some(position) => self.reveal(position),
            None => RevealOutcome::Ignored,
        }
    }

    pub fn reveal_from(&mut self, position: Position, source: RevealSource) -> RevealOutcome {
        use RevealOutcome::*;

        let Some(coords) = self.grid.decode(position) else {
            log::trace!("Ignoring reveal at out-of-range position {}", position);
            return Ignored;
        };
        if self.state.is_finished() {
            return Blocked;
        }

        let cell = self.grid[coords];
        if cell.is_revealed() || cell.is_flagged() {
            return Blocked;
        }
        if cell.has_mine() {
            return match source {
                RevealSource::Player => {
                    self.detonate(coords);
                    Mine
                }
                RevealSource::Cascade => Blocked,
            };
        }

        let adjacent_mines = self.flood_reveal(coords);
        if self.check_for_win() {
            self.state = EngineState::Won;
            log::debug!("Game won after revealing {} cells", self.revealed_count);
        } else {
            self.mark_started();
        }
        Safe(adjacent_mines)
    }

    pub fn toggle_flag(&mut self, position: Position) -> FlagOutcome {
        use FlagOutcome::*;

        let Some(coords) = self.grid.decode(position) else {
            return Rejected;
        };
        if self.state.is_finished() {
            return Rejected;
        }

        let cell = &mut self.grid[coords];
        if cell.revealed {
            Rejected
        } else if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
            Unflagged
        } else {
            cell.flagged = true;
            self.flagged_count += 1;
            Flagged
        }
    }

    /// True once every safe cell is revealed. Flags never count.
    pub fn check_for_win(&self) -> bool {
        self.config.total_cells() - self.revealed_count == self.config.mine_count
    }

    pub fn is_won(&self) -> bool {
        self.check_for_win()
    }

    /// Ends the game and exposes every mine. An unfinished game is forfeited.
    pub fn disclose(&mut self) {
        if !self.state.is_finished() {
            log::debug!("Game forfeited by disclosure");
            self.state = EngineState::Lost;
        }
        self.disclosed = true;
    }

    /// Clears `origin` and, when it touches no mines, every cell reachable
    /// through other zero cells. Returns the count at `origin`.
    fn flood_reveal(&mut self, origin: Coord2) -> u8 {
        let origin_count = self.clear_cell(origin);
        if origin_count != 0 {
            return origin_count;
        }

        let before = self.revealed_count;
        let mut to_visit: VecDeque<_> = self.cascade_targets(origin).collect();
        while let Some(coords) = to_visit.pop_front() {
            // queued more than once through different zero cells
            if !self.grid[coords].is_cascade_target() {
                continue;
            }
            if self.clear_cell(coords) == 0 {
                to_visit.extend(self.cascade_targets(coords));
            }
        }
        log::trace!(
            "Cascade from {:?} revealed {} extra cells",
            origin,
            self.revealed_count - before
        );

        origin_count
    }

    fn clear_cell(&mut self, coords: Coord2) -> u8 {
        let count = cached_adjacent_mines(&mut self.grid, coords);
        self.grid[coords].revealed = true;
        self.revealed_count += 1;
        count
    }

    fn cascade_targets(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .iter_neighbors(coords)
            .filter(move |&pos| self.grid[pos].is_cascade_target())
    }

    fn detonate(&mut self, coords: Coord2) {
        log::debug!("Mine hit at {:?}", coords);
        self.grid[coords].detonated = true;
        self.detonated = Some(coords);
        self.state = EngineState::Lost;
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn view_at(&self, coords: Coord2) -> TileView {
        self.grid[coords].view(self.disclosed)
    }
}
