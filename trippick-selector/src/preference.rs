//! Liked-token accumulation and pool refinement.

use trippick_core::Destination;

/// Deduplicated set of tags and categories taken from liked destinations,
/// kept in the order they were first liked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceTokens {
    tokens: Vec<String>,
}

impl PreferenceTokens {
    /// Empty token set.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Add one token. Returns `false` if it was already present.
    pub fn insert(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_owned());
        true
    }

    /// Merge every tag of `destination`, then its category. Returns how many
    /// tokens were new.
    pub fn absorb(&mut self, destination: &Destination) -> usize {
        destination
            .preference_tokens()
            .filter(|token| self.insert(token))
            .count()
    }

    /// Whether `token` has been liked.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Whether any tag or the category of `destination` is a liked token.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        destination.preference_tokens().any(|token| self.contains(token))
    }

    /// Destinations of `pool` that match, in pool order. An empty token set
    /// passes the whole pool.
    #[must_use]
    pub fn refine<'p>(&self, pool: &'p [Destination]) -> Vec<&'p Destination> {
        pool.iter()
            .filter(|destination| self.is_empty() || self.matches(destination))
            .collect()
    }

    /// Tokens in first-liked order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing has been liked yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Forget every token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for PreferenceTokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tokens = Self::new();
        for token in iter {
            tokens.insert(token.as_ref());
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trippick_core::test_support::DestinationBuilder;

    #[fixture]
    fn pool() -> Vec<Destination> {
        vec![
            DestinationBuilder::new("Jeju")
                .region("jeju")
                .category("nature")
                .tag("beach")
                .build(1),
            DestinationBuilder::new("Seoul")
                .region("seoul")
                .category("urban")
                .tag("city")
                .build(2),
            DestinationBuilder::new("Busan")
                .region("busan")
                .category("urban")
                .tags(["beach", "night"])
                .build(3),
        ]
    }

    fn ids(refined: &[&Destination]) -> Vec<u64> {
        refined.iter().map(|d| d.id).collect()
    }

    #[rstest]
    fn absorb_takes_tags_then_category(pool: Vec<Destination>) {
        let mut tokens = PreferenceTokens::new();
        let jeju = pool.first().expect("jeju");
        assert_eq!(tokens.absorb(jeju), 2);
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["beach", "nature"]);
        assert_eq!(tokens.absorb(jeju), 0);
    }

    #[rstest]
    fn empty_tokens_pass_everything(pool: Vec<Destination>) {
        assert_eq!(ids(&PreferenceTokens::new().refine(&pool)), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(&["beach"], &[1, 3])]
    #[case(&["urban"], &[2, 3])]
    #[case(&["nature"], &[1])]
    #[case(&["desert"], &[])]
    fn refine_keeps_pool_order(
        pool: Vec<Destination>,
        #[case] liked: &[&str],
        #[case] expected: &[u64],
    ) {
        let tokens: PreferenceTokens = liked.iter().collect();
        assert_eq!(ids(&tokens.refine(&pool)), expected);
    }

    #[rstest]
    fn clear_forgets_tokens() {
        let mut tokens: PreferenceTokens = ["beach", "city"].into_iter().collect();
        tokens.clear();
        assert!(tokens.is_empty());
    }
}
