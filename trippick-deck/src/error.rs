//! Error types for the swipe deck and its sinks.

use thiserror::Error;

/// Reasons a deck operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A swipe animation is still running; input is debounced until
    /// [`crate::Deck::settle`].
    #[error("a swipe is already in progress")]
    SwipeInProgress,
    /// No card is showing.
    #[error("no destinations left to swipe")]
    Exhausted,
}

/// Errors raised while configuring or using the HTTP sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The API base address could not be parsed.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// The API base address cannot carry path segments.
    #[error("API base URL '{url}' cannot carry a path")]
    CannotBeABase {
        /// Offending address.
        url: String,
    },
    /// The sink was created outside a Tokio runtime.
    #[error("the HTTP swipe sink needs a Tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
    /// Sending the request or decoding the response failed.
    #[error("swipe API request failed: {0}")]
    Request(#[from] reqwest::Error),
}
