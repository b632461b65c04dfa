//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A board must have at least one row and one column.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "board dimensions must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// Which condition births a cell into an empty position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirthRule {
    /// Birth at exactly 3 live neighbors, the standard Life rule.
    #[default]
    Canonical,
    /// Birth at 3 or more live neighbors. Matches the output of older seed
    /// fixtures; only useful when reproducing their runs.
    Legacy,
}

impl BirthRule {
    /// Whether an empty cell with `live` neighbors is born under this rule.
    pub fn births(&self, live: u8) -> bool {
        match self {
            BirthRule::Canonical => live == 3,
            BirthRule::Legacy => live >= 3,
        }
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Board dimensions
    pub board: BoardConfig,
    /// Birth rule variant
    pub birth_rule: BirthRule,
    /// Upper bound on generations before the driver stops waiting for a
    /// fixed point (oscillators never settle)
    pub max_generations: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            birth_rule: BirthRule::default(),
            max_generations: 1_000,
        }
    }
}
