//! Run-until-stable simulation driver.

use crate::engine;
use crate::grid::Grid;
use life_core::{Result, Seed, SimConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Owns a grid and advances it until a fixed point or the generation cap.
///
/// The simulation never sleeps between steps; pacing for human observation
/// is the caller's policy, attached through [`Simulation::run_with`].
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    config: SimConfig,
    generation: u64,
}

/// Result from running a simulation to completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Generations advanced before the run ended
    pub generations: u64,
    /// True when the run ended at a fixed point rather than the cap
    pub stable: bool,
    /// Occupied cells at the end of the run
    pub population: usize,
}

impl Simulation {
    /// Build a simulation from a parsed seed. The seed's dimensions are
    /// authoritative and replace `config.board`.
    pub fn new(mut config: SimConfig, seed: &Seed) -> Result<Self> {
        config.board = seed.board;
        let grid = Grid::from_seed(seed)?;
        Ok(Self {
            grid,
            config,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation. Returns false at a fixed point.
    pub fn step(&mut self) -> Result<bool> {
        let changed = engine::step(&mut self.grid, self.config.birth_rule)?;
        if changed {
            self.generation += 1;
        }
        Ok(changed)
    }

    /// Step until a fixed point or the configured generation cap.
    pub fn run(&mut self) -> Result<SimulationOutcome> {
        self.run_with(|_, _| {})
    }

    /// Same as [`Simulation::run`], invoking `observer` with the settled grid
    /// after every committed generation.
    #[instrument(
        skip(self, observer),
        fields(rows = self.config.board.rows, cols = self.config.board.cols)
    )]
    pub fn run_with(
        &mut self,
        mut observer: impl FnMut(&Grid, u64),
    ) -> Result<SimulationOutcome> {
        info!(population = self.grid.population(), "starting simulation");

        let mut stable = false;
        while self.generation < self.config.max_generations {
            if !self.step()? {
                stable = true;
                break;
            }
            observer(&self.grid, self.generation);

            if self.generation % 100 == 0 {
                info!(
                    generation = self.generation,
                    population = self.grid.population(),
                    "still evolving"
                );
            }
        }

        let outcome = SimulationOutcome {
            generations: self.generation,
            stable,
            population: self.grid.population(),
        };
        info!(
            generations = outcome.generations,
            stable = outcome.stable,
            population = outcome.population,
            "simulation finished"
        );
        Ok(outcome)
    }
}
