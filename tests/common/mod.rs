#![allow(dead_code)]

use matchgrid::{Color, Grid, Layout, TokenFactory};
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const A: Option<Color> = Some(Color::RED);
pub const B: Option<Color> = Some(Color::BLUE);
pub const E: Option<Color> = None;

/// Layout from rows of characters: digits are palette indices, `.` is empty.
pub fn layout(rows: &[&str]) -> Layout {
    rows.iter()
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    '.' => None,
                    d => Some(Color::new(d as u8 - b'0')),
                })
                .collect()
        })
        .collect()
}

pub fn grid_from_layout(layout: &Layout) -> Grid {
    let mut factory = TokenFactory::new();
    let mut grid = Grid::new(layout.len(), layout[0].len());
    for (r, line) in layout.iter().enumerate() {
        for (c, cell) in line.iter().enumerate() {
            if let Some(color) = cell {
                grid.set(r, c, Some(factory.make(*color))).unwrap();
            }
        }
    }
    grid
}

/// Random grid with `holes` percent empty cells.
pub fn random_grid(seed: u64, rows: usize, cols: usize, colors: u8, holes: u32) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let layout: Layout = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_range(0..100) < holes {
                        None
                    } else {
                        Some(Color::new(rng.random_range(0..colors)))
                    }
                })
                .collect()
        })
        .collect();
    grid_from_layout(&layout)
}

pub fn checkerboard(rows: usize, cols: usize) -> Layout {
    (0..rows)
        .map(|r| (0..cols).map(|c| if (r + c) % 2 == 0 { A } else { B }).collect())
        .collect()
}
