#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use matchgrid::{init_logging, BoardConfig, BoardEngine, TapOutcome};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = matchgrid::DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = matchgrid::DEFAULT_COLUMNS)]
    columns: usize,
    #[arg(long, default_value_t = matchgrid::DEFAULT_COLOR_COUNT)]
    colors: u8,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl BoardArgs {
    fn config(&self) -> BoardConfig {
        let config = BoardConfig::new(self.rows, self.columns).with_colors(self.colors);
        match self.seed {
            Some(s) => config.with_seed(s),
            None => config,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Print a freshly generated board.
    Show {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Tap random cells and print the board after every valid move.
    Auto {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, default_value_t = 20)]
        taps: usize,
    },
    /// Apply the given taps ("row,col") in order.
    Tap {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(required = true, value_parser = parse_coord)]
        taps: Vec<(usize, usize)>,
    },
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let (r, c) = input
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got {:?}", input))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {:?}: {}", r, e))?;
    let col = c.trim().parse().map_err(|e| format!("bad column {:?}: {}", c, e))?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn report(engine: &mut BoardEngine, (row, col): (usize, usize)) -> anyhow::Result<()> {
    let outcome = engine.tap(row, col).map_err(|e| anyhow::anyhow!(e))?;
    let events = engine.drain_events();
    match outcome {
        TapOutcome::Ignored => println!("({}, {}) is empty", row, col),
        TapOutcome::Invalid { .. } => println!("({}, {}) has no matching neighbor", row, col),
        TapOutcome::Cleared {
            removed,
            spawned,
            reshuffled,
        } => {
            println!(
                "({}, {}) cleared {} tokens, spawned {}{} [{} events]",
                row,
                col,
                removed,
                spawned,
                if reshuffled { ", board reshuffled" } else { "" },
                events.len()
            );
            println!("{}\n", engine.grid());
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { board } => {
            let engine = BoardEngine::new(board.config()).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", engine.grid());
        }
        Commands::Auto { board, taps } => {
            if let Some(s) = board.seed {
                println!("Using fixed seed: {} (run will be reproducible)", s);
            }
            let mut engine = BoardEngine::new(board.config()).map_err(|e| anyhow::anyhow!(e))?;
            engine.drain_events();
            println!("{}\n", engine.grid());

            let mut picker = match board.seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            for _ in 0..taps {
                let row = picker.random_range(0..board.rows);
                let col = picker.random_range(0..board.columns);
                report(&mut engine, (row, col))?;
            }
            println!("{} valid moves out of {} taps", engine.moves(), taps);
        }
        Commands::Tap { board, taps } => {
            let mut engine = BoardEngine::new(board.config()).map_err(|e| anyhow::anyhow!(e))?;
            engine.drain_events();
            println!("{}\n", engine.grid());
            for coord in taps {
                report(&mut engine, coord)?;
            }
        }
    }
    Ok(())
}
