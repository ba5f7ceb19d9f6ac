//! Uniform picks over candidate sets.

use rand::{Rng, seq::SliceRandom};
use trippick_core::{Destination, DestinationStore};

use crate::{RegionFilter, SelectionError};

/// Pick one destination uniformly from those passing `filter`.
///
/// Calls are independent; nothing is remembered between picks.
///
/// # Errors
/// Returns [`SelectionError::NotFound`] when no destination passes the
/// filter and [`SelectionError::Store`] when the store cannot be read.
///
/// # Examples
/// ```
/// use rand::thread_rng;
/// use trippick_core::MemoryDestinationStore;
/// use trippick_selector::{RegionFilter, SelectionError, pick_random};
///
/// let store = MemoryDestinationStore::seeded();
/// let busan = RegionFilter::Exact("busan".into());
/// let pick = pick_random(&store, &busan, &mut thread_rng()).expect("busan is seeded");
/// assert_eq!(pick.region, "busan");
///
/// let nowhere = RegionFilter::Exact("atlantis".into());
/// assert!(matches!(
///     pick_random(&store, &nowhere, &mut thread_rng()),
///     Err(SelectionError::NotFound { .. })
/// ));
/// ```
pub fn pick_random<S, R>(
    store: &S,
    filter: &RegionFilter,
    rng: &mut R,
) -> Result<Destination, SelectionError>
where
    S: DestinationStore + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = match filter {
        RegionFilter::Any => store.all()?,
        RegionFilter::Exact(region) => store.by_region(region)?,
    };
    let picked = candidates.choose(rng).cloned();
    log::debug!(
        "picked {:?} from {} candidates",
        picked.as_ref().map(|d| d.id),
        candidates.len()
    );
    picked.ok_or_else(|| SelectionError::NotFound {
        region: filter.region().map(str::to_owned),
    })
}

/// Final recommendation drawn uniformly from a refined pool; `None` when the
/// pool is empty.
pub fn recommend<R>(refined: &[&Destination], rng: &mut R) -> Option<Destination>
where
    R: Rng + ?Sized,
{
    refined.choose(rng).map(|destination| (*destination).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};
    use trippick_core::{MemoryDestinationStore, test_support::jeju_and_seoul};

    #[fixture]
    fn store() -> MemoryDestinationStore {
        MemoryDestinationStore::with_destinations(jeju_and_seoul())
    }

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[rstest]
    fn exact_region_is_honoured(store: MemoryDestinationStore, mut rng: ChaCha8Rng) {
        for _ in 0..16 {
            let pick = pick_random(&store, &RegionFilter::Exact("seoul".into()), &mut rng)
                .expect("seoul exists");
            assert_eq!(pick.id, 2);
        }
    }

    #[rstest]
    fn unmatched_region_reports_it(store: MemoryDestinationStore, mut rng: ChaCha8Rng) {
        let err = pick_random(&store, &RegionFilter::Exact("busan".into()), &mut rng)
            .expect_err("busan is absent");
        assert_eq!(
            err,
            SelectionError::NotFound {
                region: Some("busan".into())
            }
        );
        assert_eq!(err.to_string(), "no destinations found in region 'busan'");
    }

    #[rstest]
    fn empty_store_has_nothing_to_pick(mut rng: ChaCha8Rng) {
        let err = pick_random(&MemoryDestinationStore::new(), &RegionFilter::Any, &mut rng)
            .expect_err("empty");
        assert_eq!(err, SelectionError::NotFound { region: None });
    }

    #[rstest]
    fn any_region_eventually_reaches_every_destination(
        store: MemoryDestinationStore,
        mut rng: ChaCha8Rng,
    ) {
        let seen: BTreeSet<u64> = (0..64)
            .map(|_| {
                pick_random(&store, &RegionFilter::Any, &mut rng)
                    .expect("non-empty")
                    .id
            })
            .collect();
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn recommend_on_empty_pool_is_none(mut rng: ChaCha8Rng) {
        assert!(recommend(&[], &mut rng).is_none());
    }

    #[rstest]
    fn recommend_draws_from_the_pool(store: MemoryDestinationStore, mut rng: ChaCha8Rng) {
        let all = store.all().expect("all");
        let pool: Vec<&Destination> = all.iter().collect();
        let pick = recommend(&pool, &mut rng).expect("non-empty pool");
        assert!(all.contains(&pick));
    }
}
