//! Property-based tests for the in-memory destination store.
//!
//! # Invariants tested
//!
//! - **Region subset:** `by_region(r)` equals the subset of `all()` whose
//!   region is `r`, in the same order.
//! - **Sequential ids:** `create` hands out strictly increasing ids from `1`.

#![expect(clippy::expect_used, reason = "property tests fail fast on store errors")]

use proptest::prelude::*;
use trippick_core::{DestinationStore, MemoryDestinationStore, NewDestination};

const REGIONS: [&str; 4] = ["jeju", "seoul", "busan", "gangwon"];

fn draft(index: usize, region: &str) -> NewDestination {
    NewDestination {
        name: format!("destination {index}"),
        name_korean: format!("여행지 {index}"),
        description: String::new(),
        region: region.to_owned(),
        category: "자연".to_owned(),
        image_url: String::new(),
        rating: 4.0,
        tags: Vec::new(),
        latitude: None,
        longitude: None,
    }
}

fn region_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(REGIONS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: region lookups are exactly the matching subset of `all()`.
    #[test]
    fn region_lookup_is_exact_subset(
        regions in prop::collection::vec(region_strategy(), 0..24),
        probe in region_strategy(),
    ) {
        let store = MemoryDestinationStore::with_destinations(
            regions.iter().enumerate().map(|(i, region)| draft(i, region)),
        );
        let expected: Vec<_> = store
            .all()
            .expect("all")
            .into_iter()
            .filter(|destination| destination.region == probe)
            .collect();
        prop_assert_eq!(store.by_region(probe).expect("by_region"), expected);
    }

    /// Property: created ids start at one and increase by one per create.
    #[test]
    fn create_ids_strictly_increase(regions in prop::collection::vec(region_strategy(), 1..24)) {
        let store = MemoryDestinationStore::new();
        let ids: Vec<u64> = regions
            .iter()
            .enumerate()
            .map(|(i, region)| store.create(draft(i, region)).expect("create").id)
            .collect();
        let expected: Vec<u64> = (1..=ids.len() as u64).collect();
        prop_assert_eq!(ids, expected);
    }
}
