//! Connected-group search.
//!
//! An iterative depth-first flood fill over orthogonal neighbors. The visited
//! markers and the work stack are kept between calls and only cleared, so a
//! finder reused across moves does not allocate once it has grown to the
//! board size.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::grid::{Coord, Grid};

/// Reusable flood-fill state.
#[derive(Debug, Default)]
pub struct MatchFinder {
    visited: Vec<bool>,
    stack: Vec<usize>,
    members: Vec<usize>,
}

impl MatchFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finder with buffers pre-sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            visited: alloc::vec![false; grid.len()],
            stack: Vec::with_capacity(grid.len()),
            members: Vec::with_capacity(grid.len()),
        }
    }

    /// The same-colored group containing (`row`, `col`).
    ///
    /// Returns an empty group when the start cell is empty. Members are in
    /// visit order, starting with the tapped cell.
    pub fn find_group(
        &mut self,
        grid: &Grid,
        row: usize,
        col: usize,
    ) -> Result<Vec<Coord>, BoardError> {
        grid.cell_at(row, col)?;
        let start = grid.index_of(row, col);
        Ok(self
            .group_indices(grid, start)
            .iter()
            .map(|&idx| grid.coord_of(idx))
            .collect())
    }

    /// Size of the group containing (`row`, `col`).
    pub fn group_size(
        &mut self,
        grid: &Grid,
        row: usize,
        col: usize,
    ) -> Result<usize, BoardError> {
        grid.cell_at(row, col)?;
        let start = grid.index_of(row, col);
        Ok(self.group_indices(grid, start).len())
    }

    /// Flat indices of the group containing `start`.
    pub(crate) fn group_indices(&mut self, grid: &Grid, start: usize) -> &[usize] {
        let Some(target) = grid.color_at(start) else {
            self.members.clear();
            return &self.members;
        };
        self.traverse(grid, start, usize::MAX, |g, idx| g.color_at(idx) == Some(target))
    }

    /// Depth-first walk from `start` collecting up to `limit` cells accepted by
    /// `accept`. Rejected cells are dropped without expanding their neighbors.
    pub(crate) fn traverse<F>(
        &mut self,
        grid: &Grid,
        start: usize,
        limit: usize,
        accept: F,
    ) -> &[usize]
    where
        F: Fn(&Grid, usize) -> bool,
    {
        self.reset(grid.len());
        self.stack.push(start);

        while let Some(idx) = self.stack.pop() {
            if self.members.len() >= limit {
                break;
            }
            if self.visited[idx] || !accept(grid, idx) {
                continue;
            }
            self.visited[idx] = true;
            self.members.push(idx);

            let here = grid.coord_of(idx);
            for n in grid.neighbors(here.row, here.col) {
                self.stack.push(grid.index_of(n.row, n.col));
            }
        }
        &self.members
    }

    fn reset(&mut self, len: usize) {
        if self.visited.len() < len {
            self.visited.resize(len, false);
        }
        self.visited[..len].fill(false);
        self.stack.clear();
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Color, TokenFactory};

    fn grid_from(rows: &[&str]) -> Grid {
        let mut f = TokenFactory::new();
        let mut grid = Grid::new(rows.len(), rows[0].len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    let color = Color::new(ch as u8 - b'0');
                    grid.set(r, c, Some(f.make(color))).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn traverse_respects_limit() {
        let grid = grid_from(&["000", "000", "000"]);
        let mut finder = MatchFinder::for_grid(&grid);
        let got = finder.traverse(&grid, 4, 3, |g, i| g.slot(i).is_some()).to_vec();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], 4);
    }

    #[test]
    fn buffers_are_reused_between_calls() {
        let grid = grid_from(&["01", "10"]);
        let mut finder = MatchFinder::for_grid(&grid);
        assert_eq!(finder.group_size(&grid, 0, 0).unwrap(), 1);
        assert_eq!(finder.group_size(&grid, 0, 0).unwrap(), 1);
        assert_eq!(finder.visited.len(), 4);
    }

    #[test]
    fn empty_start_yields_empty_group() {
        let grid = grid_from(&["0.", "00"]);
        let mut finder = MatchFinder::new();
        assert!(finder.find_group(&grid, 0, 1).unwrap().is_empty());
        assert_eq!(finder.find_group(&grid, 1, 1).unwrap().len(), 3);
    }
}
