//! Playability check.

use crate::grid::{Coord, Grid};
use crate::token::Color;

/// `true` when at least one pair of orthogonally adjacent tokens shares a color.
pub fn board_has_move(grid: &Grid) -> bool {
    find_pair(grid, |a, b| a == b).is_some()
}

/// `true` when two filled cells touch, whatever their colors. Without such a
/// pair no repaint can ever produce a move.
pub fn has_adjacent_tokens(grid: &Grid) -> bool {
    find_pair(grid, |_, _| true).is_some()
}

/// First filled cell (row-major) with a filled neighbor satisfying `same`,
/// together with that neighbor.
pub(crate) fn find_pair<F>(grid: &Grid, same: F) -> Option<(Coord, Coord)>
where
    F: Fn(Color, Color) -> bool,
{
    for cell in grid.cells() {
        let Some(color) = cell.color() else {
            continue;
        };
        for n in grid.neighbors(cell.row(), cell.col()) {
            if let Some(other) = grid.color_at(grid.index_of(n.row, n.col)) {
                if same(color, other) {
                    return Some((cell.coord(), n));
                }
            }
        }
    }
    None
}
