//! Append-only record of swipe events grouped by session.
//!
//! The ledger never checks that a swiped destination exists. Resolution
//! happens at read time in [`SwipeLedger::liked`], which quietly drops events
//! whose destination no longer resolves.

use std::sync::{RwLock, RwLockReadGuard};

use log::debug;

use crate::{Destination, DestinationStore, NewSwipe, StoreError, SwipeEvent};

const RESOURCE: &str = "swipe events";

/// Append-only storage for [`SwipeEvent`]s.
///
/// # Examples
/// ```
/// use trippick_core::{
///     MemoryDestinationStore, MemorySwipeLedger, NewSwipe, SwipeAction, SwipeLedger,
/// };
///
/// # fn main() -> Result<(), trippick_core::StoreError> {
/// let store = MemoryDestinationStore::seeded();
/// let ledger = MemorySwipeLedger::new();
/// ledger.record(NewSwipe::new(1, SwipeAction::Like, "s1"))?;
/// ledger.record(NewSwipe::new(2, SwipeAction::Pass, "s1"))?;
///
/// assert_eq!(ledger.by_session("s1")?.len(), 2);
/// let liked = ledger.liked("s1", &store)?;
/// assert_eq!(liked.len(), 1);
/// assert_eq!(liked[0].id, 1);
/// # Ok(())
/// # }
/// ```
pub trait SwipeLedger: Send + Sync {
    /// Append `swipe` under a fresh sequential identifier.
    fn record(&self, swipe: NewSwipe) -> Result<SwipeEvent, StoreError>;

    /// Every event recorded for `session_id`, in creation order.
    fn by_session(&self, session_id: &str) -> Result<Vec<SwipeEvent>, StoreError>;

    /// Total number of recorded events across all sessions.
    fn len(&self) -> Result<usize, StoreError>;

    /// Whether no events have been recorded.
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Destinations liked in `session_id`, in the order the likes happened.
    ///
    /// Liking the same destination twice yields it twice. Likes pointing at
    /// ids the store cannot resolve are skipped.
    fn liked(
        &self,
        session_id: &str,
        store: &dyn DestinationStore,
    ) -> Result<Vec<Destination>, StoreError> {
        let mut liked = Vec::new();
        for event in self.by_session(session_id)?.iter().filter(|e| e.is_like()) {
            match store.by_id(event.destination_id)? {
                Some(destination) => liked.push(destination),
                None => debug!(
                    "swipe {} in session {session_id} references unknown destination {}",
                    event.id, event.destination_id
                ),
            }
        }
        Ok(liked)
    }
}

#[derive(Debug)]
struct EventLog {
    events: Vec<SwipeEvent>,
    next_id: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory [`SwipeLedger`] that lives for the process lifetime.
#[derive(Debug, Default)]
pub struct MemorySwipeLedger {
    log: RwLock<EventLog>,
}

impl MemorySwipeLedger {
    /// Create an empty ledger whose first event id will be `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EventLog>, StoreError> {
        self.log
            .read()
            .map_err(|_| StoreError::Poisoned { resource: RESOURCE })
    }
}

impl SwipeLedger for MemorySwipeLedger {
    fn record(&self, swipe: NewSwipe) -> Result<SwipeEvent, StoreError> {
        let mut log = self
            .log
            .write()
            .map_err(|_| StoreError::Poisoned { resource: RESOURCE })?;
        let id = log.next_id;
        log.next_id = id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { resource: RESOURCE })?;
        let event = swipe.into_event(id);
        log.events.push(event.clone());
        Ok(event)
    }

    fn by_session(&self, session_id: &str) -> Result<Vec<SwipeEvent>, StoreError> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter(|event| event.session_id == session_id)
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.events.len())
    }
}
