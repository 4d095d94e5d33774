use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICKS_PER_SECOND, INPUT_POLL_INTERVAL_MS, THEME_LAGOON,
};
use grid_snake::game::Universe;
use grid_snake::grid::GridError;
use grid_snake::input::{GameInput, poll_input};
use grid_snake::terminal_runtime::TerminalSession;
use log::info;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a fixed grid, played in the terminal")]
struct Cli {
    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u16,

    /// Simulation ticks per second.
    #[arg(
        long,
        default_value_t = DEFAULT_TICKS_PER_SECOND,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    fps: u32,

    /// Seed for food placement; restarts replay the same sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Run up to TICKS ticks without a terminal, printing one JSON snapshot per line.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.headless {
        Some(ticks) => run_headless(&cli, ticks),
        None => run(&cli),
    };

    if let Err(error) = result {
        eprintln!("grid-snake: {error}");
        std::process::exit(1);
    }
}

fn new_universe(cli: &Cli) -> Result<Universe, GridError> {
    match cli.seed {
        Some(seed) => Universe::new_with_seed(cli.rows, cli.cols, seed),
        None => Universe::new(cli.rows, cli.cols),
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut universe = new_universe(cli)?;
    info!("starting {}x{} game at {} ticks/s", cli.rows, cli.cols, cli.fps);

    let mut session = TerminalSession::enter()?;
    let tick_interval = Duration::from_millis(1000 / u64::from(cli.fps));
    let poll_interval = Duration::from_millis(INPUT_POLL_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        session.draw(&universe, &THEME_LAGOON)?;

        if let Some(input) = poll_input(poll_interval)? {
            match input {
                GameInput::Quit => break,
                GameInput::Restart => {
                    universe = new_universe(cli)?;
                    last_tick = Instant::now();
                }
                GameInput::Pause => universe.toggle_pause(),
                GameInput::Direction(direction) => universe.buffer_direction(direction),
            }
        }

        if universe.outcome().is_terminal() || last_tick.elapsed() < tick_interval {
            continue;
        }

        let outcome = universe.tick();
        last_tick = Instant::now();
        if outcome.is_terminal() {
            info!(
                "game ended with {outcome:?} at length {}",
                universe.snake_length()
            );
        }
    }

    Ok(())
}

fn run_headless(cli: &Cli, ticks: u64) -> Result<(), AppError> {
    let mut universe = new_universe(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_snapshot(&mut out, &universe)?;
    for _ in 0..ticks {
        let outcome = universe.tick();
        write_snapshot(&mut out, &universe)?;
        if outcome.is_terminal() {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_snapshot(out: &mut impl Write, universe: &Universe) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, &universe.snapshot())?;
    writeln!(out)?;
    Ok(())
}
