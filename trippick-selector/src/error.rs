//! Error types raised while selecting destinations.

use thiserror::Error;
use trippick_core::StoreError;

/// Errors raised by the random pick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The candidate set was empty.
    #[error("no destinations found{}", region_suffix(.region.as_deref()))]
    NotFound {
        /// Region the caller filtered by, if any.
        region: Option<String>,
    },
    /// Reading candidates from the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn region_suffix(region: Option<&str>) -> String {
    region.map(|r| format!(" in region '{r}'")).unwrap_or_default()
}
