//! Two-phase generation transition.
//!
//! A generation advances over a settled grid in two passes: `mark_transitions`
//! decides every cell's fate from the previous generation's state, then
//! `commit_transitions` applies the pending births and deaths at once.
//! The transient states keep the mark pass order-independent: a Dying cell
//! still counts as live and a BeingBorn cell never does, so no mark changes
//! a neighbor count read later in the same pass.

use crate::grid::Grid;
use life_core::{BirthRule, CellState, Result};
use tracing::{debug, trace};

/// Relative offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live neighbors of `(row, col)`.
///
/// Occupied and Dying cells count. Positions off the grid edge do not exist
/// and are skipped, so corner cells see at most 3 neighbors.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    // Bounds-check the center cell before looking around it.
    grid.get(row, col)?;

    let (rows, cols) = grid.dimensions();
    let mut live = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let Some(nr) = row.checked_add_signed(dr) else {
            continue;
        };
        let Some(nc) = col.checked_add_signed(dc) else {
            continue;
        };
        if nr >= rows || nc >= cols {
            continue;
        }
        if grid.get(nr, nc)?.counts_as_live() {
            live += 1;
        }
    }
    Ok(live)
}

/// First pass: mark every cell's pending transition.
///
/// Empty cells that satisfy the birth rule become BeingBorn; Occupied cells
/// with 4 or more live neighbors (overcrowded) or 1 or fewer (isolated)
/// become Dying. Returns whether any cell was marked.
pub fn mark_transitions(grid: &mut Grid, birth_rule: BirthRule) -> Result<bool> {
    let (rows, cols) = grid.dimensions();
    let mut changed = false;

    for row in 0..rows {
        for col in 0..cols {
            let live = count_live_neighbors(grid, row, col)?;
            match grid.get(row, col)? {
                CellState::Empty if birth_rule.births(live) => {
                    grid.set(row, col, CellState::BeingBorn)?;
                    trace!(row, col, live, "cell being born");
                    changed = true;
                }
                CellState::Occupied if live >= 4 || live <= 1 => {
                    grid.set(row, col, CellState::Dying)?;
                    trace!(row, col, live, "cell dying");
                    changed = true;
                }
                _ => {}
            }
        }
    }

    Ok(changed)
}

/// Second pass: apply pending transitions, restoring the settled invariant.
pub fn commit_transitions(grid: &mut Grid) -> Result<()> {
    let (rows, cols) = grid.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            match grid.get(row, col)? {
                CellState::BeingBorn => grid.set(row, col, CellState::Occupied)?,
                CellState::Dying => grid.set(row, col, CellState::Empty)?,
                _ => {}
            }
        }
    }
    Ok(())
}

/// Advance one generation. Returns false once the grid is at a fixed point.
pub fn step(grid: &mut Grid, birth_rule: BirthRule) -> Result<bool> {
    let changed = mark_transitions(grid, birth_rule)?;
    commit_transitions(grid)?;
    debug!(changed, population = grid.population(), "generation committed");
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{BoardConfig, Seed};
    use proptest::prelude::*;

    fn grid_with(rows: usize, cols: usize, cells: &[(usize, usize)]) -> Grid {
        let seed = Seed {
            board: BoardConfig::new(rows, cols),
            cells: cells.to_vec(),
        };
        Grid::from_seed(&seed).unwrap()
    }

    fn occupied(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter()
            .filter(|&(_, _, state)| state == CellState::Occupied)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_corner_counts_only_in_bounds_neighbors() {
        // Occupy everything; each count must still reflect only cells that
        // actually exist.
        let grid = grid_with(
            3,
            3,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ],
        );

        assert_eq!(count_live_neighbors(&grid, 0, 0).unwrap(), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 2).unwrap(), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 0).unwrap(), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 2).unwrap(), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 1).unwrap(), 5);
        assert_eq!(count_live_neighbors(&grid, 1, 1).unwrap(), 8);
    }

    #[test]
    fn test_count_out_of_bounds_center() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(count_live_neighbors(&grid, 3, 0).is_err());
    }

    #[test]
    fn test_dying_neighbors_still_count() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, CellState::Dying).unwrap();
        grid.set(0, 1, CellState::BeingBorn).unwrap();
        grid.set(1, 1, CellState::Occupied).unwrap();

        // Dying counts as live, BeingBorn does not.
        assert_eq!(count_live_neighbors(&grid, 1, 0).unwrap(), 2);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = grid_with(5, 5, &[(2, 2)]);

        assert!(step(&mut grid, BirthRule::Canonical).unwrap());
        assert_eq!(grid.population(), 0);
        assert!(grid.is_settled());

        // Empty board is a fixed point.
        assert!(!step(&mut grid, BirthRule::Canonical).unwrap());
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let vertical = [(1, 2), (2, 2), (3, 2)];
        let mut grid = grid_with(5, 5, &horizontal);

        assert!(step(&mut grid, BirthRule::Canonical).unwrap());
        assert_eq!(occupied(&grid), vertical.to_vec());

        assert!(step(&mut grid, BirthRule::Canonical).unwrap());
        assert_eq!(occupied(&grid), horizontal.to_vec());
    }

    #[test]
    fn test_full_block_neighbor_counts_and_fates() {
        let block: Vec<(usize, usize)> = (1..=3)
            .flat_map(|r| (1..=3).map(move |c| (r, c)))
            .collect();
        let mut grid = grid_with(5, 5, &block);

        // Center sees all 8, edge midpoints see 5, corners see 3.
        assert_eq!(count_live_neighbors(&grid, 2, 2).unwrap(), 8);
        for (r, c) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            assert_eq!(count_live_neighbors(&grid, r, c).unwrap(), 5, "at ({r}, {c})");
        }
        for (r, c) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert_eq!(count_live_neighbors(&grid, r, c).unwrap(), 3, "at ({r}, {c})");
        }

        assert!(step(&mut grid, BirthRule::Canonical).unwrap());

        // Overcrowded center and edges die; corners survive with 3.
        assert_eq!(grid.get(2, 2).unwrap(), CellState::Empty);
        for (r, c) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            assert_eq!(grid.get(r, c).unwrap(), CellState::Empty, "at ({r}, {c})");
        }
        for (r, c) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert_eq!(grid.get(r, c).unwrap(), CellState::Occupied, "at ({r}, {c})");
        }

        // Empty cells just outside each edge midpoint saw exactly 3.
        for (r, c) in [(0, 2), (2, 0), (2, 4), (4, 2)] {
            assert_eq!(grid.get(r, c).unwrap(), CellState::Occupied, "at ({r}, {c})");
        }
    }

    #[test]
    fn test_legacy_birth_rule() {
        // Four live neighbors around an empty center: canonical never
        // births it, the legacy rule does.
        let corners = [(0, 0), (0, 2), (2, 0), (2, 2)];

        let mut canonical = grid_with(3, 3, &corners);
        step(&mut canonical, BirthRule::Canonical).unwrap();
        assert_eq!(canonical.get(1, 1).unwrap(), CellState::Empty);

        let mut legacy = grid_with(3, 3, &corners);
        step(&mut legacy, BirthRule::Legacy).unwrap();
        assert_eq!(legacy.get(1, 1).unwrap(), CellState::Occupied);
    }

    #[test]
    fn test_block_is_fixed_point() {
        // A 2x2 block is a still life: every step reports no change and
        // leaves the grid untouched.
        let mut grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = grid.clone();

        assert!(!step(&mut grid, BirthRule::Canonical).unwrap());
        assert_eq!(grid, before);
        assert!(!step(&mut grid, BirthRule::Canonical).unwrap());
        assert_eq!(grid, before);
    }

    fn arbitrary_board() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec((0..rows, 0..cols), 0..32)
                .prop_map(move |cells| (rows, cols, cells))
        })
    }

    proptest! {
        #[test]
        fn prop_identical_seeds_evolve_identically(
            (rows, cols, cells) in arbitrary_board()
        ) {
            let seed = Seed {
                board: BoardConfig::new(rows, cols),
                cells,
            };
            let mut a = Grid::from_seed(&seed).unwrap();
            let mut b = Grid::from_seed(&seed).unwrap();

            for _ in 0..8 {
                let changed_a = step(&mut a, BirthRule::Canonical).unwrap();
                let changed_b = step(&mut b, BirthRule::Canonical).unwrap();
                prop_assert_eq!(changed_a, changed_b);
                prop_assert_eq!(&a, &b);
            }
        }

        #[test]
        fn prop_steps_restore_settled_invariant(
            (rows, cols, cells) in arbitrary_board()
        ) {
            let seed = Seed {
                board: BoardConfig::new(rows, cols),
                cells,
            };
            let mut grid = Grid::from_seed(&seed).unwrap();

            for _ in 0..8 {
                step(&mut grid, BirthRule::Canonical).unwrap();
                prop_assert!(grid.is_settled());
            }
        }

        #[test]
        fn prop_fixed_point_is_stable(
            (rows, cols, cells) in arbitrary_board()
        ) {
            let seed = Seed {
                board: BoardConfig::new(rows, cols),
                cells,
            };
            let mut grid = Grid::from_seed(&seed).unwrap();

            // Oscillators never settle, so bound the search.
            for _ in 0..64 {
                if !step(&mut grid, BirthRule::Canonical).unwrap() {
                    let frozen = grid.clone();
                    prop_assert!(!step(&mut grid, BirthRule::Canonical).unwrap());
                    prop_assert_eq!(&grid, &frozen);
                    break;
                }
            }
        }
    }
}
