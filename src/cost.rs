//! Default cost heuristic for bounding-box cell-set selection.
//!
//! The planner accepts any `Fn(usize, usize) -> f64` mapping a cell count and
//! a resolution to a relative query cost. The contract on substitutes is that
//! the cost is non-decreasing in the cell count at a fixed resolution; the
//! planner's early exit assumes a unimodal cost curve over the resolution
//! sweep and does not validate the contract at runtime.

use crate::cell::MAX_RESOLUTION;
use crate::planner::MAX_FEASIBLE_CELLS;

/// Relative cost charged per cell predicate added to a backend query.
const CELL_QUERY_COST: f64 = 1.0;

/// Over-fetch penalty at one resolution step below the maximum; the penalty
/// doubles for each further step of coarsening.
const OVERFETCH_PENALTY_BASE: f64 = 2.0;

/// Default query cost for searching `num_cells` cells at `resolution`.
///
/// Charges a fixed overhead per queried cell plus a penalty for the
/// extraneous entities coarser cells drag in; infeasibly large sets cost
/// infinity. Non-decreasing in `num_cells` at any fixed resolution.
pub fn default_cost(num_cells: usize, resolution: usize) -> f64 {
    if num_cells > MAX_FEASIBLE_CELLS {
        return f64::INFINITY;
    }
    let overhead = num_cells as f64 * CELL_QUERY_COST;
    let overfetch = OVERFETCH_PENALTY_BASE.powi(MAX_RESOLUTION.saturating_sub(resolution) as i32);
    overhead + overfetch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotone_in_cell_count() {
        for resolution in 1..=MAX_RESOLUTION {
            let mut prev = 0.0;
            for num_cells in 1..=MAX_FEASIBLE_CELLS {
                let cost = default_cost(num_cells, resolution);
                assert!(cost >= prev);
                prev = cost;
            }
        }
    }

    #[test]
    fn test_coarser_cells_cost_more_per_cell() {
        assert!(default_cost(4, 5) > default_cost(4, 10));
        assert!(default_cost(4, 10) > default_cost(4, MAX_RESOLUTION));
    }

    #[test]
    fn test_infeasible_count_is_infinite() {
        assert!(default_cost(MAX_FEASIBLE_CELLS + 1, 8).is_infinite());
        assert!(default_cost(MAX_FEASIBLE_CELLS, 8).is_finite());
    }
}
