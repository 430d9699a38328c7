use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;

use maze_backtracker::config::Cli;
use maze_backtracker::{Generator, RecursiveBacktracker, StepOutcome};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.to_config()?;
    info!(
        "generating {}x{} maze with seed {}",
        config.columns, config.rows, config.seed
    );

    let mut maze_generator = RecursiveBacktracker::new(config.columns, config.rows, config.seed)?;
    let tick = Duration::from_millis(config.tick_ms);

    // one step per tick; the driver only reads state between steps
    loop {
        let outcome = maze_generator.step_generation();
        if !cli.quiet {
            if let StepOutcome::Carved { .. } = outcome {
                let current = maze_generator.current();
                println!(
                    "step {}: at ({}, {})",
                    maze_generator.steps_taken(),
                    current.i,
                    current.j
                );
            }
        }
        if maze_generator.is_done() {
            break;
        }
        if !tick.is_zero() {
            thread::sleep(tick);
        }
    }

    let grid = maze_generator.grid();
    print!("{}", grid);
    info!(
        "done after {} steps, {} passages carved",
        maze_generator.steps_taken(),
        grid.open_passages().len()
    );

    Ok(())
}
