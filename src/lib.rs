//! Hierarchical geocell indexing for data stores without native spatial
//! query support.
//!
//! A geocell is a short hex string naming a rectangle of the [-90, 90] x
//! [-180, 180] latitude/longitude space. The top level splits the space into
//! a 4x4 grid:
//!
//! ```text
//!              +---+---+---+---+ (90, 180)
//!              | a | b | e | f |
//!              +---+---+---+---+
//!              | 8 | 9 | c | d |
//!              +---+---+---+---+
//!              | 2 | 3 | 6 | 7 |
//!              +---+---+---+---+
//!              | 0 | 1 | 4 | 5 |
//!   (-90,-180) +---+---+---+---+
//! ```
//!
//! Each further character subdivides the previous rectangle by the same 4x4
//! grid, so `"78a"` names a small rectangle inside `"78"`, which sits inside
//! `"7"`. A cell's prefixes are its ancestors, its length is its resolution,
//! and equal-length cells partition the globe into equal-count rectangles.
//! Because of that, spatial queries reduce to plain string-membership
//! predicates any database can execute: store [`generate_geocells`] on each
//! entity, then query with [`best_bbox_search_cells`] (rectangle search) or
//! [`ProximityQuery`] (nearest-neighbor search).
//!
//! ```rust
//! use geo::Point;
//! use geocell::{Locatable, MemoryRepository, ProximityQuery};
//!
//! #[derive(Clone)]
//! struct Cafe {
//!     id: u32,
//!     location: Point,
//! }
//!
//! impl Locatable for Cafe {
//!     type Key = u32;
//!     fn location(&self) -> Point {
//!         self.location
//!     }
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let mut repo = MemoryRepository::new();
//! repo.insert(Cafe { id: 1, location: Point::new(2.3522, 48.8566) })?;
//!
//! let nearby = ProximityQuery::new(Point::new(2.35, 48.85), 5)
//!     .with_max_distance(10_000.0)
//!     .fetch(&mut repo)?;
//! assert_eq!(nearby.len(), 1);
//! # Ok::<(), geocell::GeocellError>(())
//! ```
//!
//! All operations are pure and synchronous; the only blocking point is the
//! caller-supplied [`CellSearcher`] backend, invoked once per search ring.

pub mod cell;
pub mod cost;
pub mod error;
pub mod planner;
pub mod proximity;
pub mod store;
pub mod types;

pub use cell::{
    Geocell, MAX_RESOLUTION, adjacent, compute, distance, distance_sorted_edges,
    generate_geocells, interpolate, interpolation_count,
};
pub use cost::default_cost;
pub use error::{GeocellError, Result};
pub use planner::{MAX_FEASIBLE_CELLS, best_bbox_search_cells, best_bbox_search_cells_with_cost};
pub use proximity::{ProximityQuery, proximity_fetch};
pub use store::{CellSearcher, Locatable, MemoryRepository, SearchFn, search_fn};
pub use types::{BoundingBox, Direction, validate_point};

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeocellError, Result};

    pub use crate::{Geocell, MAX_RESOLUTION, compute, distance, generate_geocells};

    pub use crate::{BoundingBox, Direction, best_bbox_search_cells};

    pub use crate::{
        CellSearcher, Locatable, MemoryRepository, ProximityQuery, proximity_fetch, search_fn,
    };

    pub use geo::Point;
}
