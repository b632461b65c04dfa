//! Generation engine for Conway's Game of Life on a finite board.
//!
//! The grid holds settled cells between generations; a generation advances
//! through an explicit mark pass and commit pass so that every cell's fate
//! is decided from a consistent snapshot of the previous generation.

pub mod engine;
pub mod grid;
pub mod simulation;

pub use grid::Grid;
pub use simulation::{Simulation, SimulationOutcome};
