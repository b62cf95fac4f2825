mod common;

use common::{checkerboard, random_grid};
use matchgrid::{
    board_has_move, has_adjacent_tokens, BoardConfig, BoardEngine, Discard, MatchFinder,
    ReshuffleEngine, TapOutcome,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn play(seed: u64, rows: usize, cols: usize, colors: u8, taps: usize) -> BoardEngine {
    let config = BoardConfig::new(rows, cols).with_colors(colors).with_seed(seed);
    let mut engine = BoardEngine::new(config).unwrap();
    let mut picker = SmallRng::seed_from_u64(seed ^ 0x5eed);
    for _ in 0..taps {
        let r = picker.random_range(0..rows);
        let c = picker.random_range(0..cols);
        engine.tap(r, c).unwrap();
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Identically seeded engines fed the same taps raise the same events.
    #[test]
    fn same_seed_same_events(seed in any::<u64>(), taps in 0usize..30) {
        let mut e1 = play(seed, 7, 6, 4, taps);
        let mut e2 = play(seed, 7, 6, 4, taps);
        prop_assert_eq!(e1.drain_events(), e2.drain_events());
        prop_assert_eq!(e1.colors(), e2.colors());
        prop_assert_eq!(e1.kinds(), e2.kinds());
    }

    /// After any tap the board is full, playable and correctly labelled.
    #[test]
    fn taps_keep_board_full_and_playable(
        seed in any::<u64>(),
        rows in 2usize..9,
        cols in 2usize..9,
        colors in 2u8..7,
        taps in 1usize..25,
    ) {
        let mut engine = play(seed, rows, cols, colors, 0);
        let mut picker = SmallRng::seed_from_u64(seed.wrapping_mul(31));
        for _ in 0..taps {
            let r = picker.random_range(0..rows);
            let c = picker.random_range(0..cols);
            let outcome = engine.tap(r, c).unwrap();
            if let TapOutcome::Cleared { removed, spawned, .. } = outcome {
                prop_assert!(removed >= 2);
                prop_assert_eq!(removed, spawned);
            }
            prop_assert_eq!(engine.grid().filled_count(), rows * cols);
            prop_assert!(engine.has_move());
        }

        for r in 0..rows {
            for c in 0..cols {
                let size = engine.find_group(r, c).unwrap().len();
                let kind = engine.grid().token_at(r, c).unwrap().unwrap().kind();
                prop_assert_eq!(kind, engine.classify(size).unwrap());
            }
        }
        prop_assert_eq!(engine.reclassify_board().unwrap(), 0);
    }

    /// A reshuffle keeps the holes where they are and always leaves a move
    /// when two filled cells touch.
    #[test]
    fn reshuffle_restores_a_move(
        seed in any::<u64>(),
        rows in 1usize..8,
        cols in 1usize..8,
        holes in 0u32..70,
    ) {
        let mut grid = random_grid(seed, rows, cols, 6, holes);
        let mut ids: Vec<_> = grid.cells().filter_map(|c| c.token().map(|t| t.id())).collect();
        let empty_before: Vec<_> = grid.cells().filter(|c| !c.is_filled()).map(|c| c.coord()).collect();
        let pair_possible = has_adjacent_tokens(&grid);
        let mut finder = MatchFinder::for_grid(&grid);
        let mut rng = SmallRng::seed_from_u64(seed.rotate_left(7));

        let report = ReshuffleEngine::new().reshuffle(&mut grid, &mut finder, &mut rng, &mut Discard);

        let mut after: Vec<_> = grid.cells().filter_map(|c| c.token().map(|t| t.id())).collect();
        let empty_after: Vec<_> = grid.cells().filter(|c| !c.is_filled()).map(|c| c.coord()).collect();
        ids.sort();
        after.sort();
        prop_assert_eq!(ids, after);
        prop_assert_eq!(empty_before, empty_after);
        prop_assert_eq!(report.degenerate, !pair_possible);
        if pair_possible {
            prop_assert!(board_has_move(&grid));
        }
    }

    /// Determinism through the reshuffle path: a two-color checkerboard starts
    /// deadlocked and is shuffled on request between taps.
    #[test]
    fn same_seed_same_reshuffles(seed in any::<u64>(), rounds in 1usize..6) {
        let run = || {
            let config = BoardConfig::default()
                .with_colors(2)
                .with_layout(checkerboard(6, 6))
                .with_seed(seed);
            let mut engine = BoardEngine::new(config).unwrap();
            let mut picker = SmallRng::seed_from_u64(seed ^ 0x5eed);
            let mut reports = Vec::new();
            for _ in 0..rounds {
                reports.push(engine.shuffle().unwrap());
                let r = picker.random_range(0..6);
                let c = picker.random_range(0..6);
                engine.tap(r, c).unwrap();
            }
            (engine, reports)
        };
        let (mut e1, r1) = run();
        let (mut e2, r2) = run();
        prop_assert!(r1.iter().all(|r| r.passes >= 1 && !r.degenerate));
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(e1.drain_events(), e2.drain_events());
        prop_assert_eq!(e1.colors(), e2.colors());
        prop_assert_eq!(e1.kinds(), e2.kinds());
    }
}
