//! Swipe discovery for `TripPick`.
//!
//! A [`Deck`] runs one pass over a candidate pool: it shuffles the pool,
//! shows one card at a time, records each swipe through a [`SwipeSink`]
//! without waiting for the write, and narrows the remaining cards to those
//! sharing a tag or category with something already liked.
//!
//! Cards move through [`DeckState::Browsing`], [`DeckState::Swiping`] while
//! the swipe animates, and [`DeckState::Exhausted`] once every candidate
//! has been seen. Input arriving during a swipe is refused, so a card can
//! never be recorded twice.
//!
//! Pointer input goes through [`DragGesture`]; [`share_message`] and
//! [`kakao_story_url`] format the final recommendation for sharing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod deck;
mod error;
mod gesture;
mod session;
mod share;
mod sink;
mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use deck::{DEFAULT_SWIPE_ANIMATION, Deck};
pub use error::{DeckError, SinkError};
pub use gesture::{
    CardTransform, DragGesture, FADE_DISTANCE_PX, HINT_THRESHOLD_PX, MIN_OPACITY,
    ROTATION_DEG_PER_PX, SWIPE_THRESHOLD_PX,
};
pub use session::new_session_id;
pub use share::{KAKAO_STORY_SHARE_URL, clipboard_text, kakao_story_url, share_message};
pub use sink::{HttpSwipeSink, LedgerSink, LikedListCache, SwipeSink};
pub use state::{DeckState, SwipeDirection, SwipeOutcome};
