//! Column compaction and refill.

use rand::Rng;

use crate::common::BoardError;
use crate::event::{BoardEvent, EventSink};
use crate::grid::{Coord, Grid};
use crate::token::{Color, TokenFactory};

/// Uniformly random palette color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, color_count: u8) -> Color {
    Color::new(rng.random_range(0..color_count))
}

/// Drops tokens to the bottom of their column and spawns replacements.
#[derive(Debug, Clone, Copy)]
pub struct GravityResolver {
    color_count: u8,
}

impl GravityResolver {
    pub fn new(color_count: u8) -> Self {
        Self { color_count }
    }

    /// Compact `col` so all tokens rest on the bottom in their original order.
    ///
    /// Each empty slot, from the bottom up, pulls the nearest token above it.
    /// Returns the number of empty slots left, all contiguous at the top.
    pub fn collapse_column<S: EventSink>(
        &self,
        grid: &mut Grid,
        col: usize,
        sink: &mut S,
    ) -> Result<usize, BoardError> {
        grid.cell_at(0, col)?;
        for row in (0..grid.rows()).rev() {
            let target = grid.index_of(row, col);
            if grid.slot(target).is_some() {
                continue;
            }
            let Some(source_row) = (0..row)
                .rev()
                .find(|&r| grid.slot(grid.index_of(r, col)).is_some())
            else {
                break;
            };
            let source = grid.index_of(source_row, col);
            let token = grid.slot_mut(source).take();
            if let Some(token) = &token {
                sink.emit(BoardEvent::TokenMoved {
                    token: token.info(),
                    from: Coord::new(source_row, col),
                    to: Coord::new(row, col),
                });
            }
            *grid.slot_mut(target) = token;
        }
        grid.count_empty_in_column(col)
    }

    /// Fill every empty slot of `col` with a fresh `Normal` token of random
    /// color. The first token spawned lands in the lowest empty slot.
    pub fn spawn_column<R, S>(
        &self,
        grid: &mut Grid,
        col: usize,
        factory: &mut TokenFactory,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<usize, BoardError>
    where
        R: Rng + ?Sized,
        S: EventSink,
    {
        grid.cell_at(0, col)?;
        let mut spawned = 0;
        for row in (0..grid.rows()).rev() {
            let idx = grid.index_of(row, col);
            if grid.slot(idx).is_some() {
                continue;
            }
            let token = factory.make(random_color(rng, self.color_count));
            sink.emit(BoardEvent::TokenSpawned {
                cell: Coord::new(row, col),
                token: token.info(),
            });
            *grid.slot_mut(idx) = Some(token);
            spawned += 1;
        }
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Discard;
    use crate::token::Color;

    #[test]
    fn collapse_closes_interleaved_gaps() {
        let mut f = TokenFactory::new();
        let mut grid = Grid::new(6, 2);
        let mut ids = alloc::vec::Vec::new();
        for row in [0, 2, 3] {
            let token = f.make(Color::GREEN);
            ids.push(token.id());
            grid.set(row, 1, Some(token)).unwrap();
        }
        let empty = GravityResolver::new(3)
            .collapse_column(&mut grid, 1, &mut Discard)
            .unwrap();
        assert_eq!(empty, 3);
        let column: alloc::vec::Vec<_> = (0..6)
            .map(|r| grid.token_at(r, 1).unwrap().map(|t| t.id()))
            .collect();
        assert_eq!(
            column,
            [None, None, None, Some(ids[0]), Some(ids[1]), Some(ids[2])]
        );
    }

    #[test]
    fn collapse_rejects_missing_column() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(
            GravityResolver::new(3).collapse_column(&mut grid, 2, &mut Discard),
            Err(BoardError::OutOfRange { row: 0, col: 2 })
        );
    }
}
