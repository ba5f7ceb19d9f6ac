//! Category filter used by the popular-destinations view.

use trippick_core::{Destination, DestinationStore, StoreError, catalogue::ALL_CATEGORIES};

/// Category constraint; `전체` means every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No constraint.
    #[default]
    All,
    /// Only destinations with exactly this category.
    Exact(String),
}

impl CategoryFilter {
    /// Interpret a filter label as shown on the category chips.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(label.to_owned())
        }
    }

    /// Whether `destination` passes the filter.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        match self {
            Self::All => true,
            Self::Exact(category) => destination.category == *category,
        }
    }
}

/// Destinations passing `filter`, in store order.
///
/// # Errors
/// Propagates [`StoreError`] from the store.
pub fn filter_by_category<S>(store: &S, filter: &CategoryFilter) -> Result<Vec<Destination>, StoreError>
where
    S: DestinationStore + ?Sized,
{
    match filter {
        CategoryFilter::All => store.all(),
        CategoryFilter::Exact(category) => store.by_category(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trippick_core::MemoryDestinationStore;

    #[rstest]
    #[case("전체", 8)]
    #[case("자연", 4)]
    #[case("해변", 1)]
    #[case("도시", 1)]
    #[case("사막", 0)]
    fn filters_seeded_catalogue(#[case] label: &str, #[case] expected: usize) {
        let store = MemoryDestinationStore::seeded();
        let found = filter_by_category(&store, &CategoryFilter::from_label(label)).expect("filter");
        assert_eq!(found.len(), expected);
    }
}
