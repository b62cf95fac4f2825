//! Deadlock resolution: random permutation followed by forced matches.
//!
//! A reshuffle first permutes the tokens among the filled cells with
//! Fisher-Yates, then paints a few connected regions a single color so at
//! least one group of two or more exists afterwards. The forced step always runs, even when the
//! permutation alone restored a move.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::deadlock::{board_has_move, find_pair, has_adjacent_tokens};
use crate::event::{BoardEvent, EventSink};
use crate::grid::Grid;
use crate::matcher::MatchFinder;

/// Forced-match passes tried before pairing two touching tokens directly.
/// A pass can only miss on boards with holes.
const MAX_FORCE_PASSES: usize = 4;

/// What a reshuffle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReshuffleReport {
    /// Tokens that changed cells during the permutation.
    pub moved: usize,
    /// Tokens repainted by forced matches.
    pub recolored: usize,
    /// Target sizes of the forced groups, over all passes.
    pub forced_sizes: Vec<usize>,
    /// Forced-match passes run.
    pub passes: usize,
    /// No two tokens touch, so no move can be guaranteed.
    pub degenerate: bool,
}

/// Split `total` into random addends, each at least 2.
///
/// While at least 4 remains, peel off an amount in `[2, remaining - 2]`; the
/// remainder becomes the last addend.
pub fn partition_group_sizes<R: Rng + ?Sized>(rng: &mut R, total: usize) -> Vec<usize> {
    let mut remaining = total.max(2);
    let mut parts = Vec::new();
    while remaining >= 4 {
        let part = rng.random_range(2..remaining - 1);
        parts.push(part);
        remaining -= part;
    }
    parts.push(remaining);
    parts
}

/// Total number of tokens to force into matches: `[2, max(rows, columns))`.
fn forced_total<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> usize {
    let upper = grid.rows().max(grid.columns());
    if upper > 2 {
        rng.random_range(2..upper)
    } else {
        2
    }
}

/// Permutes and repaints the board until it is playable.
#[derive(Debug, Default)]
pub struct ReshuffleEngine {
    members: Vec<usize>,
}

impl ReshuffleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full two-phase reshuffle.
    pub fn reshuffle<R, S>(
        &mut self,
        grid: &mut Grid,
        finder: &mut MatchFinder,
        rng: &mut R,
        sink: &mut S,
    ) -> ReshuffleReport
    where
        R: Rng + ?Sized,
        S: EventSink,
    {
        sink.emit(BoardEvent::BoardReshuffled);
        let moved = self.randomize(grid, rng, sink);
        let mut report = self.guarantee_move(grid, finder, rng, sink);
        report.moved = moved;
        report
    }

    /// Uniformly permute the tokens among the filled cells, writing them back
    /// in row-major order. Empty cells stay empty, so the set of touching
    /// cells is the same before and after. Returns the number of tokens that
    /// changed cells.
    pub fn randomize<R, S>(&mut self, grid: &mut Grid, rng: &mut R, sink: &mut S) -> usize
    where
        R: Rng + ?Sized,
        S: EventSink,
    {
        let filled: Vec<usize> = (0..grid.len()).filter(|&i| grid.slot(i).is_some()).collect();
        let mut tokens: Vec<_> = filled
            .iter()
            .filter_map(|&idx| grid.slot_mut(idx).take().map(|token| (idx, token)))
            .collect();

        for i in (1..tokens.len()).rev() {
            let j = rng.random_range(0..=i);
            tokens.swap(i, j);
        }

        let mut moved = 0;
        for (&idx, (origin, token)) in filled.iter().zip(tokens) {
            if origin != idx {
                moved += 1;
                sink.emit(BoardEvent::TokenMoved {
                    token: token.info(),
                    from: grid.coord_of(origin),
                    to: grid.coord_of(idx),
                });
            }
            *grid.slot_mut(idx) = Some(token);
        }
        moved
    }

    /// Paint forced matches until the board has a move.
    ///
    /// One pass always runs. On a board with holes a pass can miss (every
    /// seed isolated), so a few more are tried before pairing the first two
    /// touching tokens directly. A board where no two filled cells touch
    /// (fewer than two tokens, or tokens separated by holes) cannot hold a
    /// move and is reported as degenerate after the best-effort pass.
    pub fn guarantee_move<R, S>(
        &mut self,
        grid: &mut Grid,
        finder: &mut MatchFinder,
        rng: &mut R,
        sink: &mut S,
    ) -> ReshuffleReport
    where
        R: Rng + ?Sized,
        S: EventSink,
    {
        let mut report = ReshuffleReport::default();

        self.force_pass(grid, finder, rng, sink, &mut report);
        if !has_adjacent_tokens(grid) {
            let filled = grid.filled_count();
            warn!("degenerate board: {} tokens, none adjacent; no move possible", filled);
            sink.emit(BoardEvent::DegenerateBoard { filled });
            report.degenerate = true;
            return report;
        }

        while !board_has_move(grid) && report.passes < MAX_FORCE_PASSES {
            self.force_pass(grid, finder, rng, sink, &mut report);
        }

        if !board_has_move(grid) {
            if let Some((keep, paint)) = find_pair(grid, |_, _| true) {
                debug!("forced passes missed; pairing {:?} with {:?}", keep, paint);
                let seed = grid.index_of(keep.row, keep.col);
                let target = grid.index_of(paint.row, paint.col);
                self.repaint(grid, seed, &[target], sink, &mut report);
            }
        }
        report
    }

    fn force_pass<R, S>(
        &mut self,
        grid: &mut Grid,
        finder: &mut MatchFinder,
        rng: &mut R,
        sink: &mut S,
        report: &mut ReshuffleReport,
    ) where
        R: Rng + ?Sized,
        S: EventSink,
    {
        report.passes += 1;
        let total = forced_total(rng, grid);
        let sizes = partition_group_sizes(rng, total);

        let filled: Vec<usize> = (0..grid.len()).filter(|&i| grid.slot(i).is_some()).collect();
        let amount = sizes.len().min(filled.len());
        let seeds = rand::seq::index::sample(rng, filled.len(), amount);
        debug!("forced pass {}: group sizes {:?}", report.passes, sizes);

        for (pick, &count) in seeds.into_iter().zip(sizes.iter()) {
            let seed = filled[pick];
            self.members.clear();
            self.members
                .extend_from_slice(finder.traverse(grid, seed, count, |g, i| g.slot(i).is_some()));
            let members = core::mem::take(&mut self.members);
            self.repaint(grid, seed, &members, sink, report);
            self.members = members;
        }
        report.forced_sizes.extend_from_slice(&sizes);
    }

    /// Paint every token in `targets` with the color of the token at `seed`.
    fn repaint<S: EventSink>(
        &mut self,
        grid: &mut Grid,
        seed: usize,
        targets: &[usize],
        sink: &mut S,
        report: &mut ReshuffleReport,
    ) {
        let Some(color) = grid.color_at(seed) else {
            return;
        };
        for &idx in targets {
            let cell = grid.coord_of(idx);
            let Some(token) = grid.slot_mut(idx) else {
                continue;
            };
            if token.color() == color {
                continue;
            }
            token.repaint(color);
            report.recolored += 1;
            sink.emit(BoardEvent::TokenRecolored {
                cell,
                token: token.info(),
            });
        }
    }
}
