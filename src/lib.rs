//! Facade crate for the `TripPick` destination discovery engine.
//!
//! This crate re-exports the core domain types and exposes the selection
//! engine and swipe deck behind feature flags.

#![forbid(unsafe_code)]

pub use trippick_core::{
    Destination, DestinationStore, MemoryDestinationStore, MemorySwipeLedger, NewDestination,
    NewSwipe, StoreError, SwipeAction, SwipeEvent, SwipeLedger, catalogue,
};

#[cfg(feature = "serde")]
pub use trippick_core::CatalogueError;

#[cfg(feature = "selector")]
pub use trippick_selector::{
    CategoryFilter, PreferenceTokens, RegionFilter, RegionSelection, SelectionError,
    candidate_pool, filter_by_category, pick_random, recommend,
};

#[cfg(feature = "deck")]
pub use trippick_deck::{
    Deck, DeckError, DeckState, DragGesture, HttpSwipeSink, LedgerSink, LikedListCache, SinkError,
    SwipeDirection, SwipeOutcome, SwipeSink, kakao_story_url, share_message,
};
