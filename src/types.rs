//! Geometric value types shared across the crate.
//!
//! Points are `geo::Point` with x = longitude and y = latitude, matching the
//! rest of the `geo` ecosystem. Rectangles are [`BoundingBox`] values carrying
//! explicit compass accessors, since the cell algorithms reason in terms of
//! north/south/east/west edges rather than min/max coordinates.

use crate::error::{GeocellError, Result};
use geo::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// Validates that a point has a finite longitude in [-180, 180] and a finite
/// latitude in [-90, 90].
pub fn validate_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(GeocellError::InvalidInput(format!(
            "longitude must be finite, got: {}",
            x
        )));
    }
    if !y.is_finite() {
        return Err(GeocellError::InvalidInput(format!(
            "latitude must be finite, got: {}",
            y
        )));
    }
    if !(-180.0..=180.0).contains(&x) {
        return Err(GeocellError::InvalidInput(format!(
            "longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }
    if !(-90.0..=90.0).contains(&y) {
        return Err(GeocellError::InvalidInput(format!(
            "latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// A latitude/longitude rectangle described by its compass edges.
///
/// Invariants, enforced at construction: all edges are in coordinate range,
/// `north >= south`, and `east >= west` (antimeridian-crossing boxes are not
/// supported; callers must normalize).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

impl BoundingBox {
    /// The whole [-90, 90] x [-180, 180] latitude/longitude space.
    pub const WORLD: BoundingBox = BoundingBox {
        north: 90.0,
        east: 180.0,
        south: -90.0,
        west: -180.0,
    };

    /// Create a bounding box from its edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeocellError::InvalidInput`] if any edge is out of range,
    /// `north < south`, or `east < west`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocell::BoundingBox;
    ///
    /// // Manhattan
    /// let bbox = BoundingBox::new(40.80, -73.93, 40.70, -74.02).unwrap();
    /// assert_eq!(bbox.north(), 40.80);
    ///
    /// assert!(BoundingBox::new(40.70, -73.93, 40.80, -74.02).is_err());
    /// ```
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Result<Self> {
        validate_point(&Point::new(east, north))?;
        validate_point(&Point::new(west, south))?;
        if south > north {
            return Err(GeocellError::InvalidInput(format!(
                "south ({}) must be <= north ({})",
                south, north
            )));
        }
        if west > east {
            return Err(GeocellError::InvalidInput(format!(
                "west ({}) must be <= east ({})",
                west, east
            )));
        }
        Ok(BoundingBox {
            north,
            east,
            south,
            west,
        })
    }

    /// Create a bounding box from its north-east and south-west corners.
    pub fn from_corners(north_east: Point, south_west: Point) -> Result<Self> {
        Self::new(
            north_east.y(),
            north_east.x(),
            south_west.y(),
            south_west.x(),
        )
    }

    /// Internal constructor for values already known to satisfy the
    /// invariants (cell decoding, union boxes of decoded cells).
    pub(crate) fn from_extents(north: f64, east: f64, south: f64, west: f64) -> Self {
        debug_assert!(south <= north && west <= east);
        BoundingBox {
            north,
            east,
            south,
            west,
        }
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    /// The north-east corner.
    pub fn north_east(&self) -> Point {
        Point::new(self.east, self.north)
    }

    /// The south-west corner.
    pub fn south_west(&self) -> Point {
        Point::new(self.west, self.south)
    }

    /// Whether the point lies inside the box (edges inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        point.y() >= self.south
            && point.y() <= self.north
            && point.x() >= self.west
            && point.x() <= self.east
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        // geo::Rect normalizes min/max at construction.
        BoundingBox::from_extents(rect.max().y, rect.max().x, rect.min().y, rect.min().x)
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            coord! { x: bbox.west, y: bbox.south },
            coord! { x: bbox.east, y: bbox.north },
        )
    }
}

/// One of the 8 compass moves between same-resolution cells, as a pair of
/// longitude/latitude grid deltas in {-1, 0, 1}. [`Direction::NONE`] is the
/// "no move yet" sentinel used when a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Longitude delta: -1 west, +1 east.
    pub dx: i8,
    /// Latitude delta: -1 south, +1 north.
    pub dy: i8,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const NORTH: Direction = Direction { dx: 0, dy: 1 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: -1 };
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const NORTH_EAST: Direction = Direction { dx: 1, dy: 1 };
    pub const NORTH_WEST: Direction = Direction { dx: -1, dy: 1 };
    pub const SOUTH_EAST: Direction = Direction { dx: 1, dy: -1 };
    pub const SOUTH_WEST: Direction = Direction { dx: -1, dy: -1 };

    /// The reverse move.
    pub fn opposite(self) -> Direction {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// A pure east/west move.
    pub fn is_horizontal(self) -> bool {
        self.dx != 0 && self.dy == 0
    }

    /// A pure north/south move.
    pub fn is_vertical(self) -> bool {
        self.dx == 0 && self.dy != 0
    }

    /// One of the four edge moves (not a corner, not the sentinel).
    pub fn is_cardinal(self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }
}
