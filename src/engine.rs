//! Turn state machine tying the board components together.

use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::classify::Classifier;
use crate::common::{BoardError, TapOutcome};
use crate::config::{BoardConfig, Layout};
use crate::deadlock::board_has_move;
use crate::event::{BoardEvent, EventSink};
use crate::gravity::{random_color, GravityResolver};
use crate::grid::{Coord, Grid};
use crate::matcher::MatchFinder;
use crate::shuffle::{ReshuffleEngine, ReshuffleReport};
use crate::token::{Kind, TokenFactory};

/// Admission state. Requests are only accepted while `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Resolving,
}

/// One board session: the grid, its components and the single random source
/// every random decision is drawn from.
pub struct BoardEngine<R = SmallRng> {
    grid: Grid,
    finder: MatchFinder,
    classifier: Classifier,
    gravity: GravityResolver,
    reshuffler: ReshuffleEngine,
    factory: TokenFactory,
    color_count: u8,
    rng: R,
    phase: Phase,
    events: Vec<BoardEvent>,
    moves: u64,
}

impl BoardEngine<SmallRng> {
    /// Validate `config` and build a populated board. The generator is seeded
    /// from `config.seed`, or from the OS when no seed is given.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => unseeded_rng(),
        };
        Self::with_rng(config, rng)
    }
}

#[cfg(feature = "std")]
fn unseeded_rng() -> SmallRng {
    let mut seed_rng = rand::rng();
    SmallRng::from_rng(&mut seed_rng)
}

// No entropy source without std; unseeded boards are reproducible there.
#[cfg(not(feature = "std"))]
fn unseeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}

impl<R: Rng> BoardEngine<R> {
    /// Build a board drawing all randomness from `rng`.
    ///
    /// Cells come from `config.layout` when present, otherwise random colors.
    /// A starting board without a move gets forced matches (no shuffle), then
    /// every group is classified. Placement is reported as `TokenSpawned`
    /// events, available through [`Self::drain_events`].
    pub fn with_rng(config: BoardConfig, rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns);
        let mut engine = Self {
            finder: MatchFinder::for_grid(&grid),
            grid,
            classifier: Classifier::new(config.thresholds),
            gravity: GravityResolver::new(config.color_count),
            reshuffler: ReshuffleEngine::new(),
            factory: TokenFactory::new(),
            color_count: config.color_count,
            rng,
            phase: Phase::Idle,
            events: Vec::new(),
            moves: 0,
        };
        engine.populate(config.layout.as_ref())?;
        Ok(engine)
    }

    fn populate(&mut self, layout: Option<&Layout>) -> Result<(), BoardError> {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                let color = match layout {
                    Some(layout) => layout[row][col],
                    None => Some(random_color(&mut self.rng, self.color_count)),
                };
                if let Some(color) = color {
                    let token = self.factory.make(color);
                    self.events.emit(BoardEvent::TokenSpawned {
                        cell: Coord::new(row, col),
                        token: token.info(),
                    });
                    self.grid.set(row, col, Some(token))?;
                }
            }
        }

        if !board_has_move(&self.grid) {
            info!("initial board has no move; forcing matches");
            self.reshuffler.guarantee_move(
                &mut self.grid,
                &mut self.finder,
                &mut self.rng,
                &mut self.events,
            );
        }
        self.reclassify_board()?;
        Ok(())
    }

    /// Handle a tap on (`row`, `col`).
    ///
    /// Empty cells are ignored and single tokens produce an
    /// `InvalidMoveAttempted` event without touching the board. Otherwise the
    /// group is removed, affected columns collapse and refill, the board is
    /// relabelled and, if no move is left, reshuffled. The whole cascade runs
    /// before this returns.
    pub fn tap(&mut self, row: usize, col: usize) -> Result<TapOutcome, BoardError> {
        if self.phase != Phase::Idle {
            return Err(BoardError::Busy);
        }
        if !self.grid.is_filled(row, col)? {
            return Ok(TapOutcome::Ignored);
        }

        let group = self.finder.find_group(&self.grid, row, col)?;
        let cell = Coord::new(row, col);
        if group.len() < 2 {
            debug!("invalid move at {:?}", cell);
            self.events.emit(BoardEvent::InvalidMoveAttempted { cell });
            return Ok(TapOutcome::Invalid { cell });
        }

        self.phase = Phase::Resolving;
        let outcome = self.resolve(group);
        self.phase = Phase::Idle;
        outcome
    }

    fn resolve(&mut self, group: Vec<Coord>) -> Result<TapOutcome, BoardError> {
        let removed = group.len();
        let mut columns: Vec<usize> = group.iter().map(|c| c.col).collect();
        columns.sort_unstable();
        columns.dedup();

        for c in &group {
            self.grid.take(c.row, c.col)?;
        }
        self.events.emit(BoardEvent::TokensRemoved { cells: group });

        let mut spawned = 0;
        for &col in &columns {
            self.gravity
                .collapse_column(&mut self.grid, col, &mut self.events)?;
            spawned += self.gravity.spawn_column(
                &mut self.grid,
                col,
                &mut self.factory,
                &mut self.rng,
                &mut self.events,
            )?;
        }
        self.reclassify_board()?;

        let reshuffled = !board_has_move(&self.grid);
        if reshuffled {
            self.run_reshuffle()?;
        }

        self.moves += 1;
        debug!(
            "move {}: removed {} in columns {:?}, spawned {}",
            self.moves, removed, columns, spawned
        );
        Ok(TapOutcome::Cleared {
            removed,
            spawned,
            reshuffled,
        })
    }

    /// Shuffle on request, even when the board still has moves.
    pub fn shuffle(&mut self) -> Result<ReshuffleReport, BoardError> {
        if self.phase != Phase::Idle {
            return Err(BoardError::Busy);
        }
        self.phase = Phase::Resolving;
        let report = self.run_reshuffle();
        self.phase = Phase::Idle;
        report
    }

    fn run_reshuffle(&mut self) -> Result<ReshuffleReport, BoardError> {
        let report = self.reshuffler.reshuffle(
            &mut self.grid,
            &mut self.finder,
            &mut self.rng,
            &mut self.events,
        );
        info!(
            "board reshuffled: {} moved, {} recolored in {} pass(es)",
            report.moved, report.recolored, report.passes
        );
        self.reclassify_board()?;
        Ok(report)
    }

    /// Relabel every token with the kind of its group.
    pub fn reclassify_board(&mut self) -> Result<usize, BoardError> {
        self.classifier
            .reclassify_board(&mut self.grid, &mut self.finder, &mut self.events)
    }

    /// Same-colored group containing (`row`, `col`).
    pub fn find_group(&mut self, row: usize, col: usize) -> Result<Vec<Coord>, BoardError> {
        self.finder.find_group(&self.grid, row, col)
    }

    pub fn classify(&self, size: usize) -> Result<Kind, BoardError> {
        self.classifier.classify(size)
    }

    pub fn has_move(&self) -> bool {
        board_has_move(&self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Valid taps resolved so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Events raised since the last drain, oldest first.
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        core::mem::take(&mut self.events)
    }

    /// Current colors as a layout matrix.
    pub fn colors(&self) -> Layout {
        (0..self.grid.rows())
            .map(|r| {
                (0..self.grid.columns())
                    .map(|c| self.grid.cell_at(r, c).ok().and_then(|cell| cell.color()))
                    .collect()
            })
            .collect()
    }

    /// Current kinds, `None` for empty cells.
    pub fn kinds(&self) -> Vec<Vec<Option<Kind>>> {
        (0..self.grid.rows())
            .map(|r| {
                (0..self.grid.columns())
                    .map(|c| {
                        self.grid
                            .token_at(r, c)
                            .ok()
                            .flatten()
                            .map(|t| t.kind())
                    })
                    .collect()
            })
            .collect()
    }
}
