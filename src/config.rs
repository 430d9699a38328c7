use clap::Parser;

use crate::error::MazeError;

const DEFAULT_DIMS: (usize, usize) = (12, 12);
const DEFAULT_SEED: u64 = 513;

/// Settings read once when a generator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    pub seed: u64,
    /// Pause between steps when driven from the command line.
    pub tick_ms: u64,
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(MazeError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }

        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_DIMS.0,
            rows: DEFAULT_DIMS.1,
            seed: DEFAULT_SEED,
            tick_ms: 0,
        }
    }
}

/// Step through a randomized recursive backtracker maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    pub columns: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    pub rows: usize,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds to wait between steps
    #[arg(long, value_name = "MILLIS", default_value_t = 0)]
    pub tick_ms: u64,

    /// Only print the finished maze
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<MazeConfig, MazeError> {
        let config = MazeConfig {
            columns: self.columns,
            rows: self.rows,
            seed: self.seed.unwrap_or_else(rand::random),
            tick_ms: self.tick_ms,
        };
        config.validate()?;

        Ok(config)
    }
}
