//! Region filters for the random pick and the multi-region candidate pool.

use trippick_core::{Destination, DestinationStore, StoreError, catalogue::ALL_REGIONS};

/// Region constraint applied by [`crate::pick_random`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionFilter {
    /// Every destination is a candidate.
    #[default]
    Any,
    /// Only destinations whose region equals the code.
    Exact(String),
}

impl RegionFilter {
    /// Interpret an optional query value.
    ///
    /// Absent values, the empty string and the `all` sentinel mean
    /// [`RegionFilter::Any`].
    ///
    /// # Examples
    /// ```
    /// use trippick_selector::RegionFilter;
    ///
    /// assert_eq!(RegionFilter::from_query(Some("all")), RegionFilter::Any);
    /// assert_eq!(
    ///     RegionFilter::from_query(Some("jeju")),
    ///     RegionFilter::Exact("jeju".into())
    /// );
    /// ```
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => Self::Any,
            Some(code) if code.is_empty() || code == ALL_REGIONS => Self::Any,
            Some(code) => Self::Exact(code.to_owned()),
        }
    }

    /// Region code when the filter is exact.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Exact(code) => Some(code),
        }
    }

    /// Whether `destination` passes the filter.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.region().is_none_or(|code| destination.region == code)
    }
}

/// Ordered set of regions picked on the map.
///
/// An empty selection stands for the whole country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSelection {
    codes: Vec<String>,
}

impl RegionSelection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `code` if absent, deselect it otherwise. Returns whether the
    /// region is selected afterwards.
    pub fn toggle(&mut self, code: &str) -> bool {
        if let Some(position) = self.codes.iter().position(|c| c == code) {
            self.codes.remove(position);
            false
        } else {
            self.codes.push(code.to_owned());
            true
        }
    }

    /// Whether `code` is selected.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Selected codes in the order they were picked.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Number of selected regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Deselect every region.
    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Whether `destination` lies in a selected region, or nothing is
    /// selected.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.is_empty() || self.contains(&destination.region)
    }
}

impl<S: Into<String>> FromIterator<S> for RegionSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for code in iter {
            let code = code.into();
            if !selection.contains(&code) {
                selection.codes.push(code);
            }
        }
        selection
    }
}

/// Destinations eligible for a discovery pass over `regions`, in store order.
///
/// # Errors
/// Propagates [`StoreError`] from the store.
pub fn candidate_pool<S>(store: &S, regions: &RegionSelection) -> Result<Vec<Destination>, StoreError>
where
    S: DestinationStore + ?Sized,
{
    Ok(store
        .all()?
        .into_iter()
        .filter(|destination| regions.matches(destination))
        .collect())
}
