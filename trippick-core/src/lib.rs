//! Core domain types for the `TripPick` engine.
//!
//! The crate holds the destination catalogue and the swipe ledger: the two
//! pieces of shared state every other crate reads. Both live in memory for
//! the process lifetime and hand out sequential identifiers from `1`.
//!
//! - [`DestinationStore`] / [`MemoryDestinationStore`]: lookups by id,
//!   region and category plus creation.
//! - [`SwipeLedger`] / [`MemorySwipeLedger`]: append-only swipe history with
//!   per-session replay of liked destinations.
//! - [`catalogue`]: the built-in seed list, region codes and category
//!   filters.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
mod destination;
mod error;
mod ledger;
pub mod store;
mod swipe;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use destination::{Destination, NewDestination};
pub use error::StoreError;
pub use ledger::{MemorySwipeLedger, SwipeLedger};
pub use store::{DestinationStore, MemoryDestinationStore};
pub use swipe::{NewSwipe, ParseSwipeActionError, SwipeAction, SwipeEvent};

#[cfg(feature = "serde")]
pub use catalogue::CatalogueError;
