//! Collaborator traits for entities and search backends, plus an in-memory
//! reference backend.
//!
//! The search algorithms see the outside world through two capabilities: an
//! entity that can report its location and a stable identity
//! ([`Locatable`]), and a backend that can return the entities registered
//! under a set of cell codes ([`CellSearcher`]). Anything that satisfies
//! those (an ORM query, a key-value scan, a closure over a test fixture)
//! plugs in.

use std::hash::Hash;

use geo::Point;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::cell::{Geocell, generate_geocells};
use crate::error::Result;

/// An entity that has a location and a stable identity.
///
/// The identity is used to deduplicate results that surface from more than
/// one queried cell; it must be stable for the duration of a search.
pub trait Locatable {
    type Key: Eq + Hash + Clone;

    fn location(&self) -> Point;

    fn key(&self) -> Self::Key;
}

/// A search backend answering cell-membership queries.
///
/// Contract: `search` returns all and only entities whose persisted cell set
/// contains at least one of the given exact cell codes, optionally narrowed
/// by a base filter fixed for the duration of one search; it must be
/// deterministic for unchanged underlying data. Errors propagate to the
/// caller unmodified.
pub trait CellSearcher<T> {
    fn search(&mut self, cells: &[Geocell]) -> Result<Vec<T>>;
}

/// A [`CellSearcher`] backed by a closure; see [`search_fn`].
pub struct SearchFn<F>(F);

impl<T, F> CellSearcher<T> for SearchFn<F>
where
    F: FnMut(&[Geocell]) -> Result<Vec<T>>,
{
    fn search(&mut self, cells: &[Geocell]) -> Result<Vec<T>> {
        (self.0)(cells)
    }
}

/// Adapt a `FnMut(&[Geocell]) -> Result<Vec<T>>` closure into a
/// [`CellSearcher`].
///
/// ```rust
/// use geocell::{CellSearcher, Geocell, search_fn};
///
/// let mut searcher = search_fn(|cells: &[Geocell]| -> geocell::Result<Vec<u32>> {
///     Ok(if cells.iter().any(|c| c.as_str() == "9") {
///         vec![42]
///     } else {
///         vec![]
///     })
/// });
/// let hit = searcher.search(&["9".parse().unwrap()]).unwrap();
/// assert_eq!(hit, vec![42]);
/// ```
pub fn search_fn<T, F>(f: F) -> SearchFn<F>
where
    F: FnMut(&[Geocell]) -> Result<Vec<T>>,
{
    SearchFn(f)
}

/// In-memory cell-membership index over locatable entities.
///
/// Entities are registered under their full ancestor chain
/// ([`generate_geocells`]), so a query for a cell of any resolution finds
/// every entity located inside it. An optional base filter narrows every
/// search, mirroring a backend whose query carries fixed extra predicates.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use geocell::{CellSearcher, Locatable, MemoryRepository};
///
/// #[derive(Clone)]
/// struct Shop {
///     id: u32,
///     location: Point,
/// }
///
/// impl Locatable for Shop {
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
/// repo.insert(Shop { id: 1, location: Point::new(-74.0060, 40.7128) }).unwrap();
///
/// let cell = geocell::compute(Point::new(-74.0060, 40.7128), 5).unwrap();
/// let found = repo.search(&[cell]).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
pub struct MemoryRepository<T: Locatable> {
    buckets: FxHashMap<Geocell, Vec<T::Key>>,
    entities: FxHashMap<T::Key, T>,
    filter: Option<Box<dyn Fn(&T) -> bool>>,
}

impl<T: Locatable + Clone> MemoryRepository<T> {
    pub fn new() -> Self {
        MemoryRepository {
            buckets: FxHashMap::default(),
            entities: FxHashMap::default(),
            filter: None,
        }
    }

    /// A repository whose every search is narrowed by `filter`.
    pub fn with_filter(filter: impl Fn(&T) -> bool + 'static) -> Self {
        MemoryRepository {
            buckets: FxHashMap::default(),
            entities: FxHashMap::default(),
            filter: Some(Box::new(filter)),
        }
    }

    /// Register an entity under its ancestor-chain cells. Re-inserting an
    /// entity with an existing key replaces the previous registration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocellError::InvalidInput`](crate::GeocellError::InvalidInput)
    /// if the entity's location is out of coordinate range.
    pub fn insert(&mut self, entity: T) -> Result<()> {
        let cells = generate_geocells(entity.location())?;
        let key = entity.key();
        if self.entities.contains_key(&key) {
            self.remove(&key);
        }
        for cell in cells {
            self.buckets.entry(cell).or_default().push(key.clone());
        }
        self.entities.insert(key, entity);
        Ok(())
    }

    /// Remove an entity by key, returning it if it was present.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let entity = self.entities.remove(key)?;
        if let Ok(cells) = generate_geocells(entity.location()) {
            for cell in cells {
                if let Some(bucket) = self.buckets.get_mut(&cell) {
                    bucket.retain(|k| k != key);
                    if bucket.is_empty() {
                        self.buckets.remove(&cell);
                    }
                }
            }
        }
        Some(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Locatable + Clone> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Locatable + Clone> CellSearcher<T> for MemoryRepository<T> {
    fn search(&mut self, cells: &[Geocell]) -> Result<Vec<T>> {
        let mut seen: FxHashSet<T::Key> = FxHashSet::default();
        let mut found = Vec::new();
        for cell in cells {
            if let Some(bucket) = self.buckets.get(cell) {
                for key in bucket {
                    if !seen.insert(key.clone()) {
                        continue;
                    }
                    if let Some(entity) = self.entities.get(key) {
                        if self.filter.as_ref().is_none_or(|f| f(entity)) {
                            found.push(entity.clone());
                        }
                    }
                }
            }
        }
        Ok(found)
    }
}
