//! Travel destinations and the drafts used to create them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A place users can be recommended.
///
/// Every field except `id` comes from the [`NewDestination`] draft it was
/// created from. Records are immutable once stored; no update operation
/// exists. Coordinates are informational and play no part in selection.
///
/// # Examples
/// ```
/// use trippick_core::{Destination, NewDestination};
///
/// let draft = NewDestination {
///     name: "Jeju Island".into(),
///     name_korean: "제주도".into(),
///     description: "Volcanic island".into(),
///     region: "jeju".into(),
///     category: "nature".into(),
///     image_url: "https://example.com/jeju.jpg".into(),
///     rating: 4.8,
///     tags: vec!["beach".into()],
///     latitude: None,
///     longitude: None,
/// };
/// let destination = draft.into_destination(1);
/// assert_eq!(destination.id, 1);
/// assert!(destination.has_tag("beach"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Destination {
    /// Sequential identifier assigned by the store.
    pub id: u64,
    /// English display name.
    pub name: String,
    /// Korean display name.
    pub name_korean: String,
    /// Free-text description shown on cards.
    pub description: String,
    /// Flat region code such as `"jeju"` or `"seoul"`.
    pub region: String,
    /// Single category such as `"자연"` (nature).
    pub category: String,
    /// Card image reference.
    pub image_url: String,
    /// Informational rating; no range is enforced.
    pub rating: f64,
    /// Ordered descriptive tags.
    pub tags: Vec<String>,
    /// Latitude in degrees, when known.
    pub latitude: Option<f64>,
    /// Longitude in degrees, when known.
    pub longitude: Option<f64>,
}

impl Destination {
    /// Whether the destination carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Tags followed by the category, in that order.
    ///
    /// These are the preference tokens a right swipe contributes.
    pub fn preference_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.category.as_str()))
    }
}

/// Fields supplied when creating a [`Destination`].
///
/// Latitude and longitude may be omitted and default to absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NewDestination {
    /// English display name.
    pub name: String,
    /// Korean display name.
    pub name_korean: String,
    /// Free-text description.
    pub description: String,
    /// Flat region code.
    pub region: String,
    /// Single category.
    pub category: String,
    /// Card image reference.
    pub image_url: String,
    /// Informational rating.
    pub rating: f64,
    /// Ordered descriptive tags.
    pub tags: Vec<String>,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl NewDestination {
    /// Attach an identifier, producing the stored record.
    #[must_use]
    pub fn into_destination(self, id: u64) -> Destination {
        let Self {
            name,
            name_korean,
            description,
            region,
            category,
            image_url,
            rating,
            tags,
            latitude,
            longitude,
        } = self;
        Destination {
            id,
            name,
            name_korean,
            description,
            region,
            category,
            image_url,
            rating,
            tags,
            latitude,
            longitude,
        }
    }
}
