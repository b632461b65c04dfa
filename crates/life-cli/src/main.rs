//! Command-line driver: reads a seed file, runs the simulation until the
//! board settles, and renders each generation to stdout.

use anyhow::{bail, Context, Result};
use life_core::{BirthRule, CellState, Seed, SimConfig};
use life_engine::{Grid, Simulation};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::info;

const USAGE: &str = "usage: life-cli [SEED_FILE] [--delay-ms N] [--max-generations N] [--legacy-birth]";

struct Args {
    seed_path: Option<PathBuf>,
    delay_ms: u64,
    max_generations: u64,
    legacy_birth: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        seed_path: None,
        delay_ms: 700,
        max_generations: 1_000,
        legacy_birth: false,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--delay-ms" => args.delay_ms = next_value(&mut argv, "--delay-ms")?,
            "--max-generations" => {
                args.max_generations = next_value(&mut argv, "--max-generations")?
            }
            "--legacy-birth" => args.legacy_birth = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => bail!("unknown flag {arg}\n{USAGE}"),
            _ if args.seed_path.is_none() => args.seed_path = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {arg}\n{USAGE}"),
        }
    }

    Ok(args)
}

fn next_value(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<u64> {
    argv.next()
        .with_context(|| format!("{flag} requires a value"))?
        .parse()
        .with_context(|| format!("{flag} expects an integer"))
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Name of seed file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no seed file given\n{USAGE}");
    }
    Ok(PathBuf::from(trimmed))
}

fn render(grid: &Grid, generation: u64) {
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));
    for (_, col, state) in grid.iter() {
        out.push(if state == CellState::Occupied { '#' } else { '.' });
        if col + 1 == cols {
            out.push('\n');
        }
    }
    println!("generation {generation}");
    print!("{out}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args(env::args().skip(1))?;
    let path = match args.seed_path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let file =
        File::open(&path).with_context(|| format!("opening seed file {}", path.display()))?;
    let seed = Seed::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    info!(
        rows = seed.board.rows,
        cols = seed.board.cols,
        cells = seed.cells.len(),
        "seed loaded"
    );

    let config = SimConfig {
        board: seed.board,
        birth_rule: if args.legacy_birth {
            BirthRule::Legacy
        } else {
            BirthRule::Canonical
        },
        max_generations: args.max_generations,
    };

    let mut sim = Simulation::new(config, &seed)?;
    render(sim.grid(), 0);

    // Pacing is purely display policy; the engine never sleeps.
    let delay = Duration::from_millis(args.delay_ms);
    let outcome = sim.run_with(|grid, generation| {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        render(grid, generation);
    })?;

    if outcome.stable {
        info!(
            generations = outcome.generations,
            population = outcome.population,
            "board reached a fixed point"
        );
    } else {
        info!(
            generations = outcome.generations,
            "generation cap reached before the board settled"
        );
    }

    Ok(())
}
