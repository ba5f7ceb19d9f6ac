//! Deck states and swipe outcomes.

use trippick_core::{Destination, SwipeAction};

/// Direction a card leaves the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Pass.
    Left,
    /// Like.
    Right,
}

impl SwipeDirection {
    /// Ledger action recorded for this direction.
    #[must_use]
    pub const fn action(self) -> SwipeAction {
        match self {
            Self::Left => SwipeAction::Pass,
            Self::Right => SwipeAction::Like,
        }
    }
}

/// Where a [`crate::Deck`] is in its pass over the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// Showing the candidate at `index`, accepting input.
    Browsing {
        /// Position in the refined candidate list.
        index: usize,
    },
    /// The card at `index` is animating away; input is ignored.
    Swiping {
        /// Direction of the swipe in flight.
        direction: SwipeDirection,
        /// Position of the card being swiped.
        index: usize,
    },
    /// Every candidate has been swiped.
    Exhausted,
}

impl DeckState {
    /// Whether a swipe animation is running.
    #[must_use]
    pub const fn is_swiping(self) -> bool {
        matches!(self, Self::Swiping { .. })
    }
}

/// What a committed swipe did.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeOutcome {
    /// The card that was swiped.
    pub destination: Destination,
    /// Action submitted to the sink.
    pub action: SwipeAction,
    /// Number of liked tokens the swipe added.
    pub new_tokens: usize,
}
