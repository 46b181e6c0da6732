//! Bounding-box query planning: picking a cost-minimal, uniform-resolution
//! set of cells that covers a rectangle.

use crate::cell::{self, Geocell, MAX_RESOLUTION};
use crate::cost;
use crate::types::BoundingBox;

/// Cap on the number of cells a single resolution may contribute before it
/// is considered infeasible for a bounding-box search.
pub const MAX_FEASIBLE_CELLS: usize = 300;

/// An efficient set of cells to query for a bounding-box search, using the
/// default cost heuristic. See [`best_bbox_search_cells_with_cost`].
pub fn best_bbox_search_cells(bbox: &BoundingBox) -> Vec<Geocell> {
    best_bbox_search_cells_with_cost(bbox, cost::default_cost)
}

/// An efficient set of cells to query for a bounding-box search.
///
/// All returned cells share one resolution and their union covers `bbox`
/// (with over-coverage at the box edges). The sweep starts at the resolution
/// where the box first spans more than one cell, evaluates each finer
/// resolution's interpolated cell set against `cost_fn(num_cells,
/// resolution)`, and stops as soon as the cost stops improving (a bounded
/// greedy pass, not a global optimum). Resolutions spanning more than
/// [`MAX_FEASIBLE_CELLS`] cells are skipped; if every resolution is skipped
/// the result is empty.
///
/// The returned cells are sorted lexicographically.
///
/// # Examples
///
/// ```rust
/// use geocell::{BoundingBox, best_bbox_search_cells};
///
/// let bbox = BoundingBox::new(40.80, -73.93, 40.70, -74.02).unwrap();
/// let cells = best_bbox_search_cells(&bbox);
/// assert!(!cells.is_empty());
/// let resolution = cells[0].resolution();
/// assert!(cells.iter().all(|c| c.resolution() == resolution));
/// ```
pub fn best_bbox_search_cells_with_cost<F>(bbox: &BoundingBox, cost_fn: F) -> Vec<Geocell>
where
    F: Fn(usize, usize) -> f64,
{
    let cell_ne = cell::encode(bbox.north_east(), MAX_RESOLUTION);
    let cell_sw = cell::encode(bbox.south_west(), MAX_RESOLUTION);

    // Below the corners' common prefix the box already sits inside a single
    // ancestor cell; resolution 0 (the empty code) can never match a stored
    // cell, so the sweep floor is 1.
    let common = cell_ne
        .as_str()
        .bytes()
        .zip(cell_sw.as_str().bytes())
        .take_while(|(a, b)| a == b)
        .count();
    let min_resolution = common.max(1);

    let mut min_cost = f64::INFINITY;
    let mut best: Vec<Geocell> = Vec::new();

    for resolution in min_resolution..=MAX_RESOLUTION {
        let cur_ne = cell_ne.truncated(resolution);
        let cur_sw = cell_sw.truncated(resolution);

        let num_cells = cell::span_count(&cur_ne, &cur_sw);
        if num_cells > MAX_FEASIBLE_CELLS as u64 {
            continue;
        }

        let mut cell_set = cell::enumerate_span(&cur_ne, &cur_sw);
        cell_set.sort();

        let cost = cost_fn(cell_set.len(), resolution);
        if cost <= min_cost {
            min_cost = cost;
            best = cell_set;
        } else {
            if best.is_empty() {
                best = cell_set;
            }
            // Once the cost starts rising it will not improve again.
            break;
        }
    }

    log::debug!(
        "selected {} cells at resolution {} for box ({}, {}) ({}, {})",
        best.len(),
        best.first().map(|c| c.resolution()).unwrap_or(0),
        bbox.south(),
        bbox.west(),
        bbox.north(),
        bbox.east(),
    );
    best
}
