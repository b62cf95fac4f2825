#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use matchgrid::{init_logging_with, level_from_env, BoardConfig, BoardEngine, BoardEvent, TapOutcome};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Seeded random-tap simulation printing a JSON summary.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging_with(level_from_env(log::LevelFilter::Warn));
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <taps>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let taps: usize = args[2].parse()?;

    let config = BoardConfig::default().with_seed(seed);
    let (rows, columns) = (config.rows, config.columns);
    let mut engine = BoardEngine::new(config).map_err(|e| anyhow::anyhow!(e))?;
    engine.drain_events();
    let mut picker = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let (mut valid, mut invalid, mut reshuffles) = (0usize, 0usize, 0usize);
    let (mut removed_total, mut recolors, mut events) = (0usize, 0usize, 0usize);
    for _ in 0..taps {
        let row = picker.random_range(0..rows);
        let col = picker.random_range(0..columns);
        match engine.tap(row, col).map_err(|e| anyhow::anyhow!(e))? {
            TapOutcome::Cleared {
                removed,
                reshuffled,
                ..
            } => {
                valid += 1;
                removed_total += removed;
                if reshuffled {
                    reshuffles += 1;
                }
            }
            TapOutcome::Invalid { .. } => invalid += 1,
            TapOutcome::Ignored => {}
        }
        let drained = engine.drain_events();
        recolors += drained
            .iter()
            .filter(|e| matches!(e, BoardEvent::TokenRecolored { .. }))
            .count();
        events += drained.len();
    }

    let result = json!({
        "seed": seed,
        "taps": taps,
        "valid": valid,
        "invalid": invalid,
        "removed": removed_total,
        "reshuffles": reshuffles,
        "recolors": recolors,
        "events": events,
        "playable": engine.has_move(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
