//! Greedy expanding-ring proximity search.
//!
//! The engine starts from the highest-resolution cell containing the query
//! center and keeps a rectangular ring of same-resolution cells around it:
//! 1 cell, then an adjacent pair, then a 2x2 block, then the deduplicated
//! parents of the block, and so on toward coarser resolutions. Each step
//! queries the backend for the ring cells not yet searched, merges the
//! candidates into a bounded ranked set, and stops once no unsearched cell
//! can possibly hold a closer result than the ones already ranked.

use geo::Point;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::cell::{self, Geocell, MAX_RESOLUTION};
use crate::error::{GeocellError, Result};
use crate::store::{CellSearcher, Locatable};
use crate::types::{Direction, validate_point};

fn default_start_resolution() -> usize {
    MAX_RESOLUTION
}

/// Parameters of a proximity fetch.
///
/// `max_distance` of 0 means unbounded. `start_resolution` defaults to
/// [`MAX_RESOLUTION`]; searches expected to roam far from the center (sparse
/// data) finish faster when started at a coarser resolution.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use geocell::ProximityQuery;
///
/// let query = ProximityQuery::new(Point::new(-74.0060, 40.7128), 10)
///     .with_max_distance(5_000.0)
///     .with_start_resolution(9);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityQuery {
    /// The point to search around.
    pub center: Point,
    /// Upper bound on the number of returned entities; must be positive.
    pub max_results: usize,
    /// Maximum distance in meters, or 0 for no distance bound.
    #[serde(default)]
    pub max_distance: f64,
    /// Resolution of the initial search ring.
    #[serde(default = "default_start_resolution")]
    pub start_resolution: usize,
}

impl ProximityQuery {
    pub fn new(center: Point, max_results: usize) -> Self {
        ProximityQuery {
            center,
            max_results,
            max_distance: 0.0,
            start_resolution: MAX_RESOLUTION,
        }
    }

    /// Bound results to strictly less than `meters` from the center.
    pub fn with_max_distance(mut self, meters: f64) -> Self {
        self.max_distance = meters;
        self
    }

    /// Start the ring at the given resolution instead of [`MAX_RESOLUTION`].
    pub fn with_start_resolution(mut self, resolution: usize) -> Self {
        self.start_resolution = resolution;
        self
    }

    /// Validate the query parameters.
    pub fn validate(&self) -> Result<()> {
        validate_point(&self.center)?;
        if self.max_results == 0 {
            return Err(GeocellError::InvalidInput(
                "max_results must be positive".into(),
            ));
        }
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(GeocellError::InvalidInput(format!(
                "max_distance must be finite and >= 0, got {}",
                self.max_distance
            )));
        }
        if self.start_resolution < 1 || self.start_resolution > MAX_RESOLUTION {
            return Err(GeocellError::InvalidInput(format!(
                "start_resolution out of range [1, {}]: {}",
                MAX_RESOLUTION, self.start_resolution
            )));
        }
        Ok(())
    }

    /// Run the search against a backend, returning at most `max_results`
    /// entities ascending by distance from the center, restricted to
    /// strictly less than `max_distance` meters when a distance bound is
    /// set.
    ///
    /// Termination is sound because the loop's lower bound, the distance
    /// from the center to the nearest edge of the searched ring rectangle,
    /// is a true lower bound on the distance to anything outside the
    /// searched region. Backend errors propagate unmodified.
    ///
    /// Searches centered near the antimeridian inherit the neighbor
    /// wraparound limitation: the ring rectangle does not model the seam,
    /// so entities on the far side of it are not guaranteed to be found.
    pub fn fetch<T, S>(&self, searcher: &mut S) -> Result<Vec<T>>
    where
        T: Locatable,
        S: CellSearcher<T>,
    {
        self.validate()?;

        let mut containing = cell::compute(self.center, self.start_resolution)?;
        let mut ring: SmallVec<[Geocell; 4]> = smallvec![containing.clone()];
        let mut searched: FxHashSet<Geocell> = FxHashSet::default();
        let mut results: RankedResults<T> = RankedResults::new(self.max_results);
        // Zero-direction seed: the first lower bound is 0.
        let mut edge_distances: Vec<(Direction, f64)> = vec![(Direction::NONE, 0.0)];

        loop {
            let lower_bound = edge_distances[0].1;
            if self.max_distance > 0.0 && lower_bound > self.max_distance {
                log::debug!(
                    "stopping: nearest unsearched cell at {:.1} m exceeds the {:.1} m bound",
                    lower_bound,
                    self.max_distance
                );
                break;
            }

            let frontier: Vec<Geocell> = ring
                .iter()
                .filter(|c| !searched.contains(*c))
                .cloned()
                .collect();
            let candidates = searcher.search(&frontier)?;
            log::debug!(
                "fetched {} candidates from {} cells at resolution {}",
                candidates.len(),
                frontier.len(),
                containing.resolution()
            );
            searched.extend(ring.iter().cloned());

            for entity in candidates {
                let distance = cell::distance(self.center, entity.location());
                results.insert(entity, distance);
            }

            edge_distances = cell::distance_sorted_edges(&ring, self.center);

            let mut grew = false;
            if !results.is_empty() && ring.len() < 4 {
                grew = if ring.len() == 1 {
                    expand_to_pair(&mut ring, &edge_distances)
                } else {
                    expand_to_block(&mut ring, &edge_distances)
                };
            }
            if !grew {
                // Empty-handed, a complete 2x2 block, or blocked by a pole:
                // ascend to the parents.
                let Some(parent) = containing.parent() else {
                    break; // the whole space has been searched
                };
                containing = parent;
                let mut parents: SmallVec<[Geocell; 4]> = SmallVec::new();
                for c in &ring {
                    if let Some(p) = c.parent() {
                        if !parents.contains(&p) {
                            parents.push(p);
                        }
                    }
                }
                ring = parents;
            }

            if results.len() < self.max_results {
                continue;
            }
            // The ranked set is full; if nothing outside the searched region
            // can beat its tail, it is final.
            let farthest = results.worst_distance();
            if lower_bound >= farthest {
                log::debug!(
                    "done: next result at least {:.1} m away, current farthest at {:.1} m",
                    lower_bound,
                    farthest
                );
                break;
            }
        }

        Ok(results.into_entities(self.max_distance))
    }
}

/// Proximity fetch starting at the maximum resolution. See
/// [`ProximityQuery::fetch`].
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use geocell::{Locatable, MemoryRepository, proximity_fetch};
///
/// #[derive(Clone)]
/// struct Stop {
///     id: u32,
///     location: Point,
/// }
///
/// impl Locatable for Stop {
///     type Key = u32;
///     fn location(&self) -> Point {
///         self.location
///     }
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
///
/// let mut repo = MemoryRepository::new();
/// repo.insert(Stop { id: 1, location: Point::new(-73.99, 40.75) }).unwrap();
/// repo.insert(Stop { id: 2, location: Point::new(-74.00, 40.71) }).unwrap();
///
/// let center = Point::new(-74.0, 40.7128);
/// let nearest = proximity_fetch(center, 1, 0.0, &mut repo).unwrap();
/// assert_eq!(nearest[0].id, 2);
/// ```
pub fn proximity_fetch<T, S>(
    center: Point,
    max_results: usize,
    max_distance: f64,
    searcher: &mut S,
) -> Result<Vec<T>>
where
    T: Locatable,
    S: CellSearcher<T>,
{
    ProximityQuery::new(center, max_results)
        .with_max_distance(max_distance)
        .fetch(searcher)
}

/// Grow a single-cell ring into an adjacent pair along the nearest cardinal
/// edge. Returns false when the move is blocked by a pole.
fn expand_to_pair(
    ring: &mut SmallVec<[Geocell; 4]>,
    edge_distances: &[(Direction, f64)],
) -> bool {
    let Some(&(direction, _)) = edge_distances.iter().find(|(d, _)| d.is_cardinal()) else {
        return false;
    };
    match cell::adjacent(&ring[0], direction) {
        Some(neighbor) => {
            ring.push(neighbor);
            true
        }
        None => false,
    }
}

/// Grow an adjacent pair into a 2x2 block along the perpendicular axis's
/// nearest direction. A pair shares a row or a column, so the two moves are
/// either both possible or both pole-blocked.
fn expand_to_block(
    ring: &mut SmallVec<[Geocell; 4]>,
    edge_distances: &[(Direction, f64)],
) -> bool {
    let expand_horizontal = !cell::same_row(&ring[0], &ring[1]);
    let Some(&(direction, _)) = edge_distances.iter().find(|(d, _)| {
        if expand_horizontal {
            d.is_horizontal()
        } else {
            d.is_vertical()
        }
    }) else {
        return false;
    };

    let additions: SmallVec<[Geocell; 2]> = ring
        .iter()
        .filter_map(|c| cell::adjacent(c, direction))
        .collect();
    if additions.is_empty() {
        return false;
    }
    ring.extend(additions);
    true
}

/// Bounded result collection: ascending by distance, deduplicated by entity
/// key, truncated to capacity.
struct RankedResults<T: Locatable> {
    capacity: usize,
    entries: Vec<(T, f64)>,
}

impl<T: Locatable> RankedResults<T> {
    fn new(capacity: usize) -> Self {
        RankedResults {
            capacity,
            entries: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entity: T, distance: f64) {
        let key = entity.key();
        if self.entries.iter().any(|(e, _)| e.key() == key) {
            return;
        }
        let at = self.entries.partition_point(|(_, d)| *d <= distance);
        if at >= self.capacity {
            return;
        }
        self.entries.insert(at, (entity, distance));
        self.entries.truncate(self.capacity);
    }

    /// Distance of the current tail entry; infinite while not full.
    fn worst_distance(&self) -> f64 {
        if self.entries.len() < self.capacity {
            return f64::INFINITY;
        }
        self.entries.last().map(|(_, d)| *d).unwrap_or(f64::INFINITY)
    }

    fn into_entities(self, max_distance: f64) -> Vec<T> {
        self.entries
            .into_iter()
            .filter(|(_, d)| max_distance <= 0.0 || *d < max_distance)
            .map(|(entity, _)| entity)
            .collect()
    }
}
