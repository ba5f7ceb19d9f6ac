//! Shared state handed to every request handler.

use std::sync::Arc;

use camino::Utf8Path;
use trippick_core::{
    DestinationStore, MemoryDestinationStore, MemorySwipeLedger, NewDestination, SwipeLedger,
    catalogue::parse_catalogue,
};

use crate::ServerError;

/// Destination store and swipe ledger shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Destination catalogue.
    pub destinations: Arc<dyn DestinationStore>,
    /// Swipe history.
    pub swipes: Arc<dyn SwipeLedger>,
}

impl AppState {
    /// State over the given store and ledger.
    #[must_use]
    pub fn new(destinations: Arc<dyn DestinationStore>, swipes: Arc<dyn SwipeLedger>) -> Self {
        Self {
            destinations,
            swipes,
        }
    }

    /// In-memory state seeded with `drafts` and an empty ledger.
    #[must_use]
    pub fn with_catalogue<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = NewDestination>,
    {
        Self::new(
            Arc::new(MemoryDestinationStore::with_destinations(drafts)),
            Arc::new(MemorySwipeLedger::new()),
        )
    }

    /// In-memory state seeded with the built-in catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(MemoryDestinationStore::seeded()),
            Arc::new(MemorySwipeLedger::new()),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Read a JSON catalogue file into destination drafts.
///
/// # Errors
/// Returns [`ServerError::ReadCatalogue`] when the file cannot be read and
/// [`ServerError::InvalidCatalogue`] when its contents are rejected.
pub fn load_catalogue(path: &Utf8Path) -> Result<Vec<NewDestination>, ServerError> {
    let json = trippick_fs::read_utf8_file(path).map_err(|source| ServerError::ReadCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalogue(&json).map_err(|source| ServerError::InvalidCatalogue {
        path: path.to_path_buf(),
        source,
    })
}
