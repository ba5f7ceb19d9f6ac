//! Test-only builders for destinations, used by unit and behaviour tests
//! across the workspace.

use crate::{Destination, NewDestination};

/// Fluent builder producing [`NewDestination`] drafts or stored
/// [`Destination`]s with placeholder text for fields a test does not care
/// about.
#[derive(Debug, Clone)]
pub struct DestinationBuilder {
    draft: NewDestination,
}

impl DestinationBuilder {
    /// Start a builder for a destination called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            draft: NewDestination {
                name_korean: name.clone(),
                description: format!("{name} description"),
                name,
                region: "seoul".to_owned(),
                category: "urban".to_owned(),
                image_url: "https://example.com/destination.jpg".to_owned(),
                rating: 4.5,
                tags: Vec::new(),
                latitude: None,
                longitude: None,
            },
        }
    }

    /// Set the Korean display name.
    #[must_use]
    pub fn korean(mut self, name_korean: &str) -> Self {
        name_korean.clone_into(&mut self.draft.name_korean);
        self
    }

    /// Set the region code.
    #[must_use]
    pub fn region(mut self, region: &str) -> Self {
        region.clone_into(&mut self.draft.region);
        self
    }

    /// Set the category.
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        category.clone_into(&mut self.draft.category);
        self
    }

    /// Append one tag.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.draft.tags.push(tag.to_owned());
        self
    }

    /// Append several tags in order.
    #[must_use]
    pub fn tags<'a, I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.draft.tags.extend(tags.into_iter().map(str::to_owned));
        self
    }

    /// Set both coordinates.
    #[must_use]
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.draft.latitude = Some(latitude);
        self.draft.longitude = Some(longitude);
        self
    }

    /// Finish as a draft for [`crate::DestinationStore::create`].
    #[must_use]
    pub fn draft(self) -> NewDestination {
        self.draft
    }

    /// Finish as a stored destination with the given id.
    #[must_use]
    pub fn build(self, id: u64) -> Destination {
        self.draft.into_destination(id)
    }
}

/// The two-destination catalogue used throughout the scenario tests:
/// `1` is a jeju nature beach, `2` is a seoul urban city.
#[must_use]
pub fn jeju_and_seoul() -> Vec<NewDestination> {
    vec![
        DestinationBuilder::new("Jeju")
            .region("jeju")
            .category("nature")
            .tag("beach")
            .draft(),
        DestinationBuilder::new("Seoul")
            .region("seoul")
            .category("urban")
            .tag("city")
            .draft(),
    ]
}
