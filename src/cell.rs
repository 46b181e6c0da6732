//! Geocell codec: encoding points into hierarchical cell codes and the
//! geometric primitives built on top of them.
//!
//! A geocell is a short string over the alphabet `0123456789abcdef` naming a
//! rectangle of the lat/lon space; see the crate docs for the grid layout.
//! Each character refines the previous rectangle by one 4x4 subdivision, so a
//! cell's prefixes are its ancestors. Internally every operation works on the
//! cell's global grid coordinates at its resolution: a resolution-`r` cell is
//! the pair `(x, y)` with `0 <= x, y < 4^r`, where `x` counts longitude
//! columns from the west and `y` latitude rows from the south. The character
//! at position `i` interleaves the two 2-bit digits of `x` and `y` at depth
//! `i` (row-high, col-high, row-low, col-low).

use std::fmt;
use std::str::FromStr;

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::error::{GeocellError, Result};
use crate::types::{BoundingBox, Direction, validate_point};

/// The maximum practical cell resolution (code length).
pub const MAX_RESOLUTION: usize = 13;

/// Cells per grid axis at each subdivision step.
const GRID_SIZE: u64 = 4;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// An immutable geocell code of resolution `1..=13`.
///
/// Ordering is lexicographic on the code, hashing and equality are by code,
/// and serde treats the cell as a plain (validated) string.
///
/// # Examples
///
/// ```rust
/// use geocell::Geocell;
///
/// let cell: Geocell = "9e2f0".parse().unwrap();
/// assert_eq!(cell.resolution(), 5);
/// assert_eq!(cell.parent().unwrap().as_str(), "9e2f");
/// assert!("9e2g0".parse::<Geocell>().is_err()); // 'g' not in the alphabet
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Geocell(String);

impl Geocell {
    /// The cell code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The cell's resolution, i.e. the length of its code.
    pub fn resolution(&self) -> usize {
        self.0.len()
    }

    /// The immediate ancestor cell, or `None` for a resolution-1 cell.
    pub fn parent(&self) -> Option<Geocell> {
        if self.0.len() > 1 {
            Some(Geocell(self.0[..self.0.len() - 1].to_owned()))
        } else {
            None
        }
    }

    /// The rectangle this cell names (the decode operation).
    pub fn bounds(&self) -> BoundingBox {
        bounds_of(&self.0)
    }

    /// Ancestor at the given resolution; `self` resolution must be >= it.
    pub(crate) fn truncated(&self, resolution: usize) -> Geocell {
        debug_assert!(resolution >= 1 && resolution <= self.0.len());
        Geocell(self.0[..resolution].to_owned())
    }
}

impl fmt::Display for Geocell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Geocell {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Geocell {
    type Err = GeocellError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.len() > MAX_RESOLUTION {
            return Err(GeocellError::InvalidInput(format!(
                "cell code length must be in 1..={}, got {:?}",
                MAX_RESOLUTION, s
            )));
        }
        if let Some(bad) = s.bytes().find(|b| symbol_value(*b).is_none()) {
            return Err(GeocellError::InvalidInput(format!(
                "invalid cell symbol {:?} in {:?}",
                bad as char, s
            )));
        }
        Ok(Geocell(s.to_owned()))
    }
}

impl TryFrom<String> for Geocell {
    type Error = GeocellError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Geocell> for String {
    fn from(cell: Geocell) -> String {
        cell.0
    }
}

fn symbol_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + b - b'a'),
        _ => None,
    }
}

/// Interleave one subdivision step's column/row indices into a cell symbol.
fn subdiv_char(x: u64, y: u64) -> u8 {
    let index = (y & 2) << 2 | (x & 2) << 1 | (y & 1) << 1 | (x & 1);
    ALPHABET[index as usize]
}

/// Split a cell symbol back into its column/row indices.
fn subdiv_xy(value: u8) -> (u64, u64) {
    let v = value as u64;
    let x = (v & 4) >> 1 | (v & 1);
    let y = (v & 8) >> 2 | (v & 2) >> 1;
    (x, y)
}

/// Global grid coordinates of a (validated) code at its own resolution.
fn grid_position(code: &str) -> (u64, u64) {
    let mut x = 0u64;
    let mut y = 0u64;
    for b in code.bytes() {
        // Codes are validated at construction; a bad byte cannot reach here.
        let (cx, cy) = subdiv_xy(symbol_value(b).unwrap_or(0));
        x = (x << 2) | cx;
        y = (y << 2) | cy;
    }
    (x, y)
}

fn cell_from_position(x: u64, y: u64, resolution: usize) -> Geocell {
    let mut code = String::with_capacity(resolution);
    for level in (0..resolution).rev() {
        let cx = (x >> (2 * level)) & 3;
        let cy = (y >> (2 * level)) & 3;
        code.push(subdiv_char(cx, cy) as char);
    }
    Geocell(code)
}

fn side_len(resolution: usize) -> u64 {
    GRID_SIZE.pow(resolution as u32)
}

fn bounds_of(code: &str) -> BoundingBox {
    let (x, y) = grid_position(code);
    let side = side_len(code.len()) as f64;
    BoundingBox::from_extents(
        -90.0 + 180.0 * ((y + 1) as f64 / side),
        -180.0 + 360.0 * ((x + 1) as f64 / side),
        -90.0 + 180.0 * (y as f64 / side),
        -180.0 + 360.0 * (x as f64 / side),
    )
}

/// Encode a pre-validated point. The band index clamp keeps the north/east
/// boundary coordinates (lat 90, lon 180) inside the last band.
pub(crate) fn encode(point: Point, resolution: usize) -> Geocell {
    let side = side_len(resolution);
    let tx = (point.x() + 180.0) / 360.0;
    let ty = (point.y() + 90.0) / 180.0;
    let x = ((tx * side as f64) as u64).min(side - 1);
    let y = ((ty * side as f64) as u64).min(side - 1);
    cell_from_position(x, y, resolution)
}

/// Compute the geocell containing `point` at the given resolution.
///
/// # Errors
///
/// Returns [`GeocellError::InvalidInput`] if the resolution is outside
/// `1..=13` or the point has out-of-range coordinates.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
///
/// // Just north-east of the origin: the 'c' top-level cell.
/// let cell = geocell::compute(Point::new(0.01, 0.01), 1).unwrap();
/// assert_eq!(cell.as_str(), "c");
///
/// assert!(geocell::compute(Point::new(0.0, 0.0), 14).is_err());
/// ```
pub fn compute(point: Point, resolution: usize) -> Result<Geocell> {
    if resolution < 1 || resolution > MAX_RESOLUTION {
        return Err(GeocellError::InvalidInput(format!(
            "resolution out of range [1, {}]: {}",
            MAX_RESOLUTION, resolution
        )));
    }
    validate_point(&point)?;
    Ok(encode(point, resolution))
}

/// The complete ancestor chain of cells containing `point`, one per
/// resolution from 1 to [`MAX_RESOLUTION`] in ascending order.
///
/// This is the value to store on an entity's indexed cell-membership
/// attribute before handing it to a backend; coarse queries then match the
/// short prefixes and fine queries the long ones.
pub fn generate_geocells(point: Point) -> Result<Vec<Geocell>> {
    let deepest = compute(point, MAX_RESOLUTION)?;
    Ok((1..=MAX_RESOLUTION)
        .map(|resolution| deepest.truncated(resolution))
        .collect())
}

fn require_equal_resolution(a: &Geocell, b: &Geocell) -> Result<()> {
    if a.resolution() != b.resolution() {
        return Err(GeocellError::InvalidInput(format!(
            "cell resolutions differ: {:?} vs {:?}",
            a.as_str(),
            b.as_str()
        )));
    }
    Ok(())
}

/// Whether two same-resolution cells lie in the same latitude row.
pub(crate) fn same_row(a: &Geocell, b: &Geocell) -> bool {
    grid_position(a.as_str()).1 == grid_position(b.as_str()).1
}

/// Grid extents (min_x, max_x, min_y, max_y) of the rectangle spanned by two
/// same-resolution cells.
fn span_extents(a: &Geocell, b: &Geocell) -> (u64, u64, u64, u64) {
    let (ax, ay) = grid_position(a.as_str());
    let (bx, by) = grid_position(b.as_str());
    (ax.min(bx), ax.max(bx), ay.min(by), ay.max(by))
}

pub(crate) fn span_count(a: &Geocell, b: &Geocell) -> u64 {
    let (min_x, max_x, min_y, max_y) = span_extents(a, b);
    (max_x - min_x + 1) * (max_y - min_y + 1)
}

pub(crate) fn enumerate_span(a: &Geocell, b: &Geocell) -> Vec<Geocell> {
    let (min_x, max_x, min_y, max_y) = span_extents(a, b);
    let resolution = a.resolution();
    let mut cells =
        Vec::with_capacity(((max_x - min_x + 1) * (max_y - min_y + 1)) as usize);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            cells.push(cell_from_position(x, y, resolution));
        }
    }
    cells
}

/// How many same-resolution cells tile the minimal rectangle spanned by the
/// two cells, without materializing them.
///
/// # Errors
///
/// Returns [`GeocellError::InvalidInput`] if the cells have different
/// resolutions.
pub fn interpolation_count(a: &Geocell, b: &Geocell) -> Result<u64> {
    require_equal_resolution(a, b)?;
    Ok(span_count(a, b))
}

/// Every same-resolution cell in the minimal rectangle spanned by the two
/// cells, row-major from the south-west corner.
///
/// The ordering is deterministic but not canonical; callers that need a
/// canonical order must sort the result.
///
/// # Errors
///
/// Returns [`GeocellError::InvalidInput`] if the cells have different
/// resolutions.
pub fn interpolate(a: &Geocell, b: &Geocell) -> Result<Vec<Geocell>> {
    require_equal_resolution(a, b)?;
    Ok(enumerate_span(a, b))
}

/// The same-resolution neighbor of `cell` in the given compass direction.
///
/// Boundary semantics: east/west moves wrap across the antimeridian (the
/// grid is cylindrical in longitude), while a move past the north or south
/// pole has no neighbor and returns `None`. A [`Direction::NONE`] move
/// returns the cell itself.
pub fn adjacent(cell: &Geocell, direction: Direction) -> Option<Geocell> {
    let resolution = cell.resolution();
    let side = side_len(resolution) as i64;
    let (x, y) = grid_position(cell.as_str());

    let ny = y as i64 + direction.dy as i64;
    if ny < 0 || ny >= side {
        return None;
    }
    let nx = (x as i64 + direction.dx as i64).rem_euclid(side);
    Some(cell_from_position(nx as u64, ny as u64, resolution))
}

/// Great-circle distance between two points in meters (haversine).
pub fn distance(a: Point, b: Point) -> f64 {
    Haversine.distance(a, b)
}

/// Distances from `center` to the edges and corners of the union rectangle
/// of the given same-resolution cells, one entry per compass direction,
/// ascending by distance.
///
/// `center` is assumed to lie inside the union rectangle (the proximity ring
/// always contains the cell covering its center), so the edge distances are
/// taken along the perpendicular through the center. Cardinal entries sort
/// before corner entries on exact ties.
pub fn distance_sorted_edges(cells: &[Geocell], center: Point) -> Vec<(Direction, f64)> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mut north = f64::NEG_INFINITY;
    let mut east = f64::NEG_INFINITY;
    let mut south = f64::INFINITY;
    let mut west = f64::INFINITY;
    for cell in cells {
        let bounds = cell.bounds();
        north = north.max(bounds.north());
        east = east.max(bounds.east());
        south = south.min(bounds.south());
        west = west.min(bounds.west());
    }

    let (lon, lat) = (center.x(), center.y());
    let mut edges = vec![
        (Direction::SOUTH, distance(center, Point::new(lon, south))),
        (Direction::NORTH, distance(center, Point::new(lon, north))),
        (Direction::WEST, distance(center, Point::new(west, lat))),
        (Direction::EAST, distance(center, Point::new(east, lat))),
        (
            Direction::SOUTH_WEST,
            distance(center, Point::new(west, south)),
        ),
        (
            Direction::SOUTH_EAST,
            distance(center, Point::new(east, south)),
        ),
        (
            Direction::NORTH_WEST,
            distance(center, Point::new(west, north)),
        ),
        (
            Direction::NORTH_EAST,
            distance(center, Point::new(east, north)),
        ),
    ];
    edges.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(code: &str) -> Geocell {
        code.parse().unwrap()
    }

    #[test]
    fn test_first_level_grid_layout() {
        // The canonical 4x4 diagram, south-west to north-east.
        let rows = [
            ["0", "1", "4", "5"],
            ["2", "3", "6", "7"],
            ["8", "9", "c", "d"],
            ["a", "b", "e", "f"],
        ];
        for (row, codes) in rows.iter().enumerate() {
            for (col, code) in codes.iter().enumerate() {
                let lon = -180.0 + 90.0 * col as f64 + 45.0;
                let lat = -90.0 + 45.0 * row as f64 + 22.5;
                assert_eq!(
                    compute(Point::new(lon, lat), 1).unwrap().as_str(),
                    *code,
                    "cell at row {} col {}",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_compute_around_origin() {
        // (0, 0) sits at the corner of cells 3, 6, 9 and c.
        assert_eq!(compute(Point::new(0.01, 0.01), 1).unwrap().as_str(), "c");
        assert_eq!(compute(Point::new(-0.01, 0.01), 1).unwrap().as_str(), "9");
        assert_eq!(compute(Point::new(0.01, -0.01), 1).unwrap().as_str(), "6");
        assert_eq!(compute(Point::new(-0.01, -0.01), 1).unwrap().as_str(), "3");
    }

    #[test]
    fn test_compute_extremes() {
        assert_eq!(
            compute(Point::new(-180.0, -90.0), 5).unwrap().as_str(),
            "00000"
        );
        assert_eq!(
            compute(Point::new(180.0, 90.0), 5).unwrap().as_str(),
            "fffff"
        );
    }

    #[test]
    fn test_compute_resolution_bounds() {
        let p = Point::new(-74.0060, 40.7128);
        assert!(compute(p, 0).is_err());
        assert!(compute(p, MAX_RESOLUTION + 1).is_err());
        assert!(compute(p, 1).is_ok());
        assert!(compute(p, MAX_RESOLUTION).is_ok());
    }

    #[test]
    fn test_compute_invalid_point() {
        assert!(compute(Point::new(200.0, 0.0), 5).is_err());
        assert!(compute(Point::new(0.0, -91.0), 5).is_err());
    }

    #[test]
    fn test_prefix_property() {
        let points = [
            Point::new(-74.0060, 40.7128),
            Point::new(2.3522, 48.8566),
            Point::new(151.2093, -33.8688),
            Point::new(-0.0001, 0.0001),
        ];
        for p in points {
            for r in 1..MAX_RESOLUTION {
                let coarse = compute(p, r).unwrap();
                let fine = compute(p, r + 1).unwrap();
                assert!(
                    fine.as_str().starts_with(coarse.as_str()),
                    "{} not a prefix of {}",
                    coarse,
                    fine
                );
            }
        }
    }

    #[test]
    fn test_bounds_contains_point() {
        let points = [
            Point::new(-74.0060, 40.7128),
            Point::new(139.6917, 35.6895),
            Point::new(-43.1729, -22.9068),
            Point::new(180.0, 90.0),
            Point::new(-180.0, -90.0),
        ];
        for p in points {
            for r in 1..=MAX_RESOLUTION {
                let bounds = compute(p, r).unwrap().bounds();
                assert!(bounds.contains(&p), "resolution {} box {:?} lost {:?}", r, bounds, p);
            }
        }
    }

    #[test]
    fn test_bounds_of_known_cell() {
        // '7' is the sub-rectangle from (-45, 90) to (0, 180).
        let bounds = cell("7").bounds();
        assert_eq!(bounds.south(), -45.0);
        assert_eq!(bounds.west(), 90.0);
        assert_eq!(bounds.north(), 0.0);
        assert_eq!(bounds.east(), 180.0);
    }

    #[test]
    fn test_generate_geocells_is_ascending_chain() {
        let chain = generate_geocells(Point::new(-74.0060, 40.7128)).unwrap();
        assert_eq!(chain.len(), MAX_RESOLUTION);
        for (i, c) in chain.iter().enumerate() {
            assert_eq!(c.resolution(), i + 1);
        }
        for pair in chain.windows(2) {
            assert!(pair[1].as_str().starts_with(pair[0].as_str()));
        }
        assert_eq!(
            chain.last().unwrap(),
            &compute(Point::new(-74.0060, 40.7128), MAX_RESOLUTION).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!("".parse::<Geocell>().is_err());
        assert!("g".parse::<Geocell>().is_err());
        assert!("0123456789abcd".parse::<Geocell>().is_err()); // 14 chars
        assert!("A1".parse::<Geocell>().is_err()); // uppercase not in alphabet
        assert!("9e2f0".parse::<Geocell>().is_ok());
    }

    #[test]
    fn test_adjacent_first_level() {
        assert_eq!(adjacent(&cell("3"), Direction::EAST).unwrap().as_str(), "6");
        assert_eq!(adjacent(&cell("3"), Direction::NORTH).unwrap().as_str(), "9");
        assert_eq!(adjacent(&cell("3"), Direction::WEST).unwrap().as_str(), "2");
        assert_eq!(adjacent(&cell("3"), Direction::SOUTH).unwrap().as_str(), "1");
        assert_eq!(
            adjacent(&cell("3"), Direction::NORTH_EAST).unwrap().as_str(),
            "c"
        );
    }

    #[test]
    fn test_adjacent_crosses_parent_boundary() {
        // "05" is the SE-most child of "0"; its east neighbor is the SW-most
        // child of "1".
        assert_eq!(adjacent(&cell("05"), Direction::EAST).unwrap().as_str(), "10");
    }

    #[test]
    fn test_adjacent_wraps_antimeridian() {
        // "5" hugs the east edge of the grid; moving east wraps to "0".
        assert_eq!(adjacent(&cell("5"), Direction::EAST).unwrap().as_str(), "0");
        assert_eq!(adjacent(&cell("0"), Direction::WEST).unwrap().as_str(), "5");
    }

    #[test]
    fn test_adjacent_stops_at_poles() {
        assert!(adjacent(&cell("f"), Direction::NORTH).is_none());
        assert!(adjacent(&cell("a"), Direction::NORTH).is_none());
        assert!(adjacent(&cell("0"), Direction::SOUTH).is_none());
        assert!(adjacent(&cell("5"), Direction::SOUTH_EAST).is_none());
    }

    #[test]
    fn test_adjacent_round_trip() {
        let cells = ["9e2f0", "3", "c7", "08af"];
        let directions = [
            Direction::NORTH,
            Direction::SOUTH,
            Direction::EAST,
            Direction::WEST,
            Direction::NORTH_EAST,
            Direction::SOUTH_WEST,
        ];
        for code in cells {
            let c = cell(code);
            for d in directions {
                let Some(moved) = adjacent(&c, d) else {
                    continue;
                };
                assert_eq!(
                    adjacent(&moved, d.opposite()).unwrap(),
                    c,
                    "round trip failed for {} along {:?}",
                    code,
                    d
                );
            }
        }
    }

    #[test]
    fn test_interpolate_single_cell() {
        let c = cell("3");
        assert_eq!(interpolation_count(&c, &c).unwrap(), 1);
        assert_eq!(interpolate(&c, &c).unwrap(), vec![c]);
    }

    #[test]
    fn test_interpolate_full_grid() {
        let sw = cell("0");
        let ne = cell("f");
        assert_eq!(interpolation_count(&ne, &sw).unwrap(), 16);
        let cells = interpolate(&ne, &sw).unwrap();
        let codes: Vec<&str> = cells.iter().map(|c| c.as_str()).collect();
        // Row-major from the south-west corner.
        assert_eq!(
            codes,
            vec![
                "0", "1", "4", "5", "2", "3", "6", "7", "8", "9", "c", "d", "a", "b", "e", "f"
            ]
        );
    }

    #[test]
    fn test_interpolate_count_matches_len() {
        let pairs = [("12", "47"), ("00", "ff"), ("3c", "3c"), ("9e2", "9e7")];
        for (a, b) in pairs {
            let (a, b) = (cell(a), cell(b));
            assert_eq!(
                interpolation_count(&a, &b).unwrap() as usize,
                interpolate(&a, &b).unwrap().len()
            );
        }
    }

    #[test]
    fn test_interpolate_tiles_exactly() {
        let a = cell("9e");
        let b = cell("c7");
        let cells = interpolate(&a, &b).unwrap();

        // No duplicates.
        let mut seen = std::collections::HashSet::new();
        for c in &cells {
            assert!(seen.insert(c.clone()));
        }

        // Union of the decoded cells is the minimal bounding rectangle, and
        // areas add up (equal-count partition, no overlap by construction).
        let (ab, bb) = (a.bounds(), b.bounds());
        let north = ab.north().max(bb.north());
        let south = ab.south().min(bb.south());
        let east = ab.east().max(bb.east());
        let west = ab.west().min(bb.west());

        let mut area = 0.0;
        for c in &cells {
            let cb = c.bounds();
            assert!(cb.north() <= north + 1e-9 && cb.south() >= south - 1e-9);
            assert!(cb.east() <= east + 1e-9 && cb.west() >= west - 1e-9);
            area += (cb.north() - cb.south()) * (cb.east() - cb.west());
        }
        let span_area = (north - south) * (east - west);
        assert!((area - span_area).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_rejects_mixed_resolutions() {
        assert!(interpolation_count(&cell("9"), &cell("9e")).is_err());
        assert!(interpolate(&cell("9"), &cell("9e")).is_err());
    }

    #[test]
    fn test_distance_known_pair() {
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        let d = distance(nyc, la);
        assert!(d > 3_900_000.0 && d < 4_000_000.0);
        assert_eq!(distance(nyc, nyc), 0.0);
    }

    #[test]
    fn test_distance_sorted_edges_single_cell() {
        // Center near the west edge of its cell: west must rank first and
        // the ranking must be ascending.
        let c = compute(Point::new(10.0, 10.0), 4).unwrap();
        let bounds = c.bounds();
        let center = Point::new(bounds.west() + (bounds.east() - bounds.west()) * 0.1, 10.0);
        let edges = distance_sorted_edges(std::slice::from_ref(&c), center);

        assert_eq!(edges.len(), 8);
        assert_eq!(edges[0].0, Direction::WEST);
        for pair in edges.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_distance_sorted_edges_union_rectangle() {
        // A 1x2 ring: the union box spans both cells.
        let a = cell("3");
        let b = adjacent(&a, Direction::EAST).unwrap();
        let center = Point::new(-1.0, -1.0); // inside "3", near its NE corner
        let edges = distance_sorted_edges(&[a.clone(), b], center);

        let (_, east_distance) = *edges
            .iter()
            .find(|(d, _)| *d == Direction::EAST)
            .unwrap();
        // The east edge of the union is the east edge of "6" (lon 90), far
        // away; the north edge of "3" (lat 0) is close.
        let (_, north_distance) = *edges
            .iter()
            .find(|(d, _)| *d == Direction::NORTH)
            .unwrap();
        assert!(north_distance < east_distance);
        assert_eq!(edges[0].1, north_distance);
    }

    #[test]
    fn test_serde_round_trip() {
        let c = cell("9e2f0");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"9e2f0\"");
        let back: Geocell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad: std::result::Result<Geocell, _> = serde_json::from_str("\"xyz\"");
        assert!(bad.is_err());
    }
}
