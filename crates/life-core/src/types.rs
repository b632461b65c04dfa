//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// State of a single cell on the board.
///
/// `BeingBorn` and `Dying` are transient markers that exist only while a
/// generation transition is being computed. At every generation boundary
/// each cell is either `Empty` or `Occupied`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    BeingBorn,
    Dying,
}

impl CellState {
    /// A settled cell carries no pending transition.
    pub fn is_settled(&self) -> bool {
        matches!(self, CellState::Empty | CellState::Occupied)
    }

    /// Whether this cell counts as a live influence on its neighbors.
    ///
    /// Dying cells still count: death takes effect only when the generation
    /// commits, so a neighbor about to die was present when the current
    /// cell's fate was decided. Cells being born never count.
    pub fn counts_as_live(&self) -> bool {
        matches!(self, CellState::Occupied | CellState::Dying)
    }
}
