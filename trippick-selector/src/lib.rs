//! Destination selection for `TripPick`.
//!
//! Selection is stateless: every function reads the store or a pool handed
//! in by the caller and draws from an injected random source, so seeded
//! generators make picks reproducible in tests.
//!
//! - [`pick_random`] draws one destination, optionally within a region.
//! - [`candidate_pool`] collects the destinations of a multi-region
//!   selection for a swipe pass.
//! - [`PreferenceTokens`] accumulates liked tags and categories and refines
//!   a pool to the destinations sharing any of them.
//! - [`recommend`] draws the final suggestion from a refined pool.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod error;
mod preference;
mod random;
mod region;

pub use category::{CategoryFilter, filter_by_category};
pub use error::SelectionError;
pub use preference::PreferenceTokens;
pub use random::{pick_random, recommend};
pub use region::{RegionFilter, RegionSelection, candidate_pool};
