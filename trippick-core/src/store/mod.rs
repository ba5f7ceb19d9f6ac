//! Data access traits for destinations.
//!
//! The [`DestinationStore`] trait exposes lookups by id, region and category
//! plus creation with sequential identifiers. [`MemoryDestinationStore`] is
//! the process-lifetime implementation used by the server.

use crate::{Destination, NewDestination, StoreError};

mod memory;

pub use memory::MemoryDestinationStore;

/// Read and append access to the destination catalogue.
///
/// Region and category lookups are exact string matches. Implementations
/// must be `Send + Sync` so handlers can share one store across threads, and
/// must assign identifiers that are unique and strictly increasing from `1`.
///
/// # Examples
///
/// ```rust
/// use trippick_core::{DestinationStore, MemoryDestinationStore, NewDestination};
///
/// # fn main() -> Result<(), trippick_core::StoreError> {
/// let store = MemoryDestinationStore::new();
/// let created = store.create(NewDestination {
///     name: "Busan Haeundae".into(),
///     name_korean: "부산 해운대".into(),
///     description: "City beach".into(),
///     region: "busan".into(),
///     category: "해변".into(),
///     image_url: "https://example.com/haeundae.jpg".into(),
///     rating: 4.6,
///     tags: vec!["해변".into(), "야경".into()],
///     latitude: Some(35.1584),
///     longitude: Some(129.1590),
/// })?;
///
/// assert_eq!(created.id, 1);
/// assert_eq!(store.by_region("busan")?, vec![created.clone()]);
/// assert_eq!(store.by_id(1)?, Some(created));
/// assert!(store.by_id(2)?.is_none());
/// # Ok(())
/// # }
/// ```
pub trait DestinationStore: Send + Sync {
    /// Return every destination in ascending id order.
    fn all(&self) -> Result<Vec<Destination>, StoreError>;

    /// Look up a destination by identifier.
    fn by_id(&self, id: u64) -> Result<Option<Destination>, StoreError>;

    /// Return destinations whose region equals `region` exactly.
    fn by_region(&self, region: &str) -> Result<Vec<Destination>, StoreError> {
        let mut destinations = self.all()?;
        destinations.retain(|destination| destination.region == region);
        Ok(destinations)
    }

    /// Return destinations whose category equals `category` exactly.
    fn by_category(&self, category: &str) -> Result<Vec<Destination>, StoreError> {
        let mut destinations = self.all()?;
        destinations.retain(|destination| destination.category == category);
        Ok(destinations)
    }

    /// Store `draft` under the next sequential identifier.
    fn create(&self, draft: NewDestination) -> Result<Destination, StoreError>;
}
