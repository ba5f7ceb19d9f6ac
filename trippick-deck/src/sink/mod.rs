//! Destinations for swipe events leaving the deck.
//!
//! Submission is fire-and-forget: the deck advances whatever happens to the
//! write, and failures are logged and dropped without retry.

mod cache;
mod http;

use std::sync::Arc;

use trippick_core::{NewSwipe, SwipeLedger};

pub use cache::LikedListCache;
pub use http::HttpSwipeSink;

/// Receiver of swipe events.
pub trait SwipeSink {
    /// Hand a swipe over for recording. Must not block on the write.
    fn submit(&self, swipe: NewSwipe);
}

impl<T: SwipeSink + ?Sized> SwipeSink for &T {
    fn submit(&self, swipe: NewSwipe) {
        (**self).submit(swipe);
    }
}

impl<T: SwipeSink + ?Sized> SwipeSink for Arc<T> {
    fn submit(&self, swipe: NewSwipe) {
        (**self).submit(swipe);
    }
}

/// Sink writing straight into an in-process ledger.
#[derive(Clone)]
pub struct LedgerSink {
    ledger: Arc<dyn SwipeLedger>,
}

impl LedgerSink {
    /// Wrap a shared ledger.
    #[must_use]
    pub fn new(ledger: Arc<dyn SwipeLedger>) -> Self {
        Self { ledger }
    }
}

impl std::fmt::Debug for LedgerSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerSink").finish_non_exhaustive()
    }
}

impl SwipeSink for LedgerSink {
    fn submit(&self, swipe: NewSwipe) {
        let destination_id = swipe.destination_id;
        match self.ledger.record(swipe) {
            Ok(event) => log::debug!(
                "recorded swipe {} ({}) for destination {destination_id}",
                event.id,
                event.action
            ),
            Err(err) => log::warn!("dropping swipe for destination {destination_id}: {err}"),
        }
    }
}
