mod common;

use common::{grid_from_layout, layout, A, B};
use matchgrid::{
    board_has_move, BoardEvent, Color, Coord, GravityResolver, Grid, MatchFinder, TokenFactory,
};
use rand::{rngs::SmallRng, SeedableRng};

fn scenario_grid() -> Grid {
    grid_from_layout(&vec![
        vec![A, A, B, B, A],
        vec![B, A, B, A, B],
        vec![A, B, A, B, A],
        vec![B, A, B, A, B],
        vec![A, B, A, B, A],
    ])
}

#[test]
fn test_group_follows_orthogonal_chain() {
    let grid = scenario_grid();
    let mut finder = MatchFinder::for_grid(&grid);
    let mut group = finder.find_group(&grid, 0, 0).unwrap();
    group.sort();
    assert_eq!(
        group,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
    );
}

#[test]
fn test_isolated_token_is_group_of_one() {
    let grid = scenario_grid();
    let mut finder = MatchFinder::for_grid(&grid);
    assert_eq!(finder.find_group(&grid, 2, 2).unwrap(), vec![Coord::new(2, 2)]);
}

#[test]
fn test_diagonals_do_not_connect() {
    let grid = grid_from_layout(&layout(&["01", "10"]));
    let mut finder = MatchFinder::new();
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(finder.group_size(&grid, r, c).unwrap(), 1);
        }
    }
    assert!(!board_has_move(&grid));
}

#[test]
fn test_holes_split_groups() {
    let grid = grid_from_layout(&layout(&["000", "0.0", "..0"]));
    let mut finder = MatchFinder::for_grid(&grid);
    assert_eq!(finder.group_size(&grid, 1, 0).unwrap(), 6);
    assert_eq!(finder.group_size(&grid, 1, 1).unwrap(), 0);
}

#[test]
fn test_column_collapse_preserves_order() {
    let mut f = TokenFactory::new();
    let mut grid = Grid::new(5, 1);
    let x = f.make(Color::GREEN);
    let y = f.make(Color::YELLOW);
    let (x_id, y_id) = (x.id(), y.id());
    grid.set(1, 0, Some(x)).unwrap();
    grid.set(3, 0, Some(y)).unwrap();

    let mut events = Vec::new();
    let empties = GravityResolver::new(6)
        .collapse_column(&mut grid, 0, &mut events)
        .unwrap();

    assert_eq!(empties, 3);
    for r in 0..3 {
        assert!(!grid.is_filled(r, 0).unwrap());
    }
    assert_eq!(grid.token_at(3, 0).unwrap().unwrap().id(), x_id);
    assert_eq!(grid.token_at(4, 0).unwrap().unwrap().id(), y_id);

    let moves: Vec<_> = events
        .iter()
        .map(|e| match e {
            BoardEvent::TokenMoved { token, from, to } => (token.id, *from, *to),
            other => panic!("unexpected event {:?}", other),
        })
        .collect();
    assert_eq!(
        moves,
        vec![
            (y_id, Coord::new(3, 0), Coord::new(4, 0)),
            (x_id, Coord::new(1, 0), Coord::new(3, 0)),
        ]
    );
}

#[test]
fn test_spawn_fills_from_lowest_slot() {
    let mut grid = grid_from_layout(&layout(&["..", ".0", "00"]));
    let mut factory = TokenFactory::new();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut events = Vec::new();
    let gravity = GravityResolver::new(3);

    let spawned = gravity
        .spawn_column(&mut grid, 0, &mut factory, &mut rng, &mut events)
        .unwrap();
    assert_eq!(spawned, 2);
    assert_eq!(grid.count_empty_in_column(0).unwrap(), 0);

    let cells: Vec<_> = events
        .iter()
        .map(|e| match e {
            BoardEvent::TokenSpawned { cell, token } => {
                assert!(token.color.index() < 3);
                *cell
            }
            other => panic!("unexpected event {:?}", other),
        })
        .collect();
    assert_eq!(cells, vec![Coord::new(1, 0), Coord::new(0, 0)]);
    assert_eq!(grid.count_empty_in_column(1).unwrap(), 1);
}
