//! Client-side liked-list cache shared between a sink and its readers.

use std::sync::{Arc, PoisonError, RwLock};

use trippick_core::Destination;

/// Client-side copy of one session's liked list.
///
/// Clones share the same slot. A successful swipe write invalidates it so
/// the next read refetches; nothing is ever rolled back.
///
/// Every invalidation bumps a generation counter. A reader that fetched a
/// list should publish it with [`LikedListCache::store_if`] using the
/// generation it captured before the request, so a write acknowledged
/// mid-fetch is never masked by the older list.
#[derive(Debug, Clone, Default)]
pub struct LikedListCache {
    slot: Arc<RwLock<Slot>>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    entry: Option<CachedLikes>,
}

#[derive(Debug, Clone)]
struct CachedLikes {
    session_id: String,
    destinations: Vec<Destination>,
}

impl LikedListCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list for `session_id`, if fresh.
    #[must_use]
    pub fn get(&self, session_id: &str) -> Option<Vec<Destination>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.entry
            .as_ref()
            .filter(|cached| cached.session_id == session_id)
            .map(|cached| cached.destinations.clone())
    }

    /// Current invalidation generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Replace the cached list unconditionally.
    pub fn store(&self, session_id: &str, destinations: Vec<Destination>) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.entry = Some(CachedLikes {
            session_id: session_id.to_owned(),
            destinations,
        });
    }

    /// Replace the cached list only if no invalidation happened since
    /// `generation` was read. Returns whether the list was stored.
    pub fn store_if(
        &self,
        session_id: &str,
        generation: u64,
        destinations: Vec<Destination>,
    ) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.generation != generation {
            return false;
        }
        slot.entry = Some(CachedLikes {
            session_id: session_id.to_owned(),
            destinations,
        });
        true
    }

    /// Mark the cached list stale.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.generation = slot.generation.wrapping_add(1);
        slot.entry = None;
    }

    /// Whether nothing fresh is cached.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entry
            .is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trippick_core::test_support::DestinationBuilder;

    #[rstest]
    fn cache_is_per_session_and_invalidates() {
        let cache = LikedListCache::new();
        assert!(cache.is_stale());
        cache.store("s1", vec![DestinationBuilder::new("Jeju").build(1)]);
        assert_eq!(cache.get("s1").map(|list| list.len()), Some(1));
        assert!(cache.get("s2").is_none());

        let shared = cache.clone();
        shared.invalidate();
        assert!(cache.is_stale());
        assert!(cache.get("s1").is_none());
    }

    #[rstest]
    fn store_if_skips_lists_read_before_an_invalidation() {
        let cache = LikedListCache::new();
        let before = cache.generation();
        cache.invalidate();
        assert_ne!(cache.generation(), before);

        assert!(!cache.store_if("s1", before, Vec::new()));
        assert!(cache.is_stale());

        let current = cache.generation();
        assert!(cache.store_if("s1", current, Vec::new()));
        assert_eq!(cache.get("s1"), Some(Vec::new()));
    }
}
