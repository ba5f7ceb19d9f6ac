//! Process-lifetime destination store guarded by a read-write lock.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Destination, DestinationStore, NewDestination, StoreError, catalogue};

const RESOURCE: &str = "destinations";

#[derive(Debug)]
struct Table {
    rows: BTreeMap<u64, Destination>,
    next_id: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Table {
    /// Callers must check for exhaustion first; seed lists are far shorter
    /// than the id space.
    fn insert(&mut self, draft: NewDestination) -> Destination {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        let destination = draft.into_destination(id);
        self.rows.insert(id, destination.clone());
        destination
    }

    const fn exhausted(&self) -> bool {
        self.next_id == u64::MAX
    }
}

/// In-memory [`DestinationStore`].
///
/// Rows live in an id-ordered map behind an [`RwLock`] together with the id
/// counter, so concurrent creators never observe or hand out the same id.
///
/// # Examples
/// ```
/// use trippick_core::{DestinationStore, MemoryDestinationStore};
///
/// # fn main() -> Result<(), trippick_core::StoreError> {
/// let store = MemoryDestinationStore::seeded();
/// let jeju = store.by_region("jeju")?;
/// assert_eq!(jeju.len(), 1);
/// assert_eq!(jeju[0].name, "Jeju Island");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryDestinationStore {
    table: RwLock<Table>,
}

impl MemoryDestinationStore {
    /// Create an empty store whose first id will be `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `drafts`, numbered from `1` in iteration order.
    pub fn with_destinations<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = NewDestination>,
    {
        let mut table = Table::default();
        for draft in drafts {
            table.insert(draft);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Create a store holding the built-in catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_destinations(catalogue::seed_destinations())
    }

    /// Number of stored destinations.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.rows.len())
    }

    /// Whether the store holds no destinations.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] when the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.rows.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::Poisoned { resource: RESOURCE })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::Poisoned { resource: RESOURCE })
    }

    fn select<F>(&self, predicate: F) -> Result<Vec<Destination>, StoreError>
    where
        F: Fn(&Destination) -> bool,
    {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|destination| predicate(destination))
            .cloned()
            .collect())
    }
}

impl DestinationStore for MemoryDestinationStore {
    fn all(&self) -> Result<Vec<Destination>, StoreError> {
        self.select(|_| true)
    }

    fn by_id(&self, id: u64) -> Result<Option<Destination>, StoreError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn by_region(&self, region: &str) -> Result<Vec<Destination>, StoreError> {
        self.select(|destination| destination.region == region)
    }

    fn by_category(&self, category: &str) -> Result<Vec<Destination>, StoreError> {
        self.select(|destination| destination.category == category)
    }

    fn create(&self, draft: NewDestination) -> Result<Destination, StoreError> {
        let mut table = self.write()?;
        if table.exhausted() {
            return Err(StoreError::IdsExhausted { resource: RESOURCE });
        }
        Ok(table.insert(draft))
    }
}
