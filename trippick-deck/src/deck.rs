//! The swipe deck: one discovery pass over a shuffled candidate pool.

use std::time::Duration;

use rand::{Rng, seq::SliceRandom};
use trippick_core::{Destination, NewSwipe};
use trippick_selector::PreferenceTokens;

use crate::{CardTransform, DeckError, DeckState, DragGesture, SwipeDirection, SwipeOutcome, SwipeSink};

/// How long a swiped card animates before the next one shows.
pub const DEFAULT_SWIPE_ANIMATION: Duration = Duration::from_millis(300);

/// Swipe session over a fixed, shuffled pool.
///
/// The shuffled order is kept for the whole pass. Likes add the card's tags
/// and category to the session's [`PreferenceTokens`], and the visible
/// candidates are the pool refined by those tokens, so the deck narrows as
/// the visitor likes things. Indices always refer to the refined list.
///
/// # Examples
/// ```
/// use rand::thread_rng;
/// use trippick_core::{MemoryDestinationStore, DestinationStore, SwipeAction};
/// use trippick_deck::{Deck, DeckState, SwipeDirection, SwipeSink};
/// use trippick_core::NewSwipe;
///
/// struct Discard;
/// impl SwipeSink for Discard {
///     fn submit(&self, _swipe: NewSwipe) {}
/// }
///
/// let pool = MemoryDestinationStore::seeded().all().expect("seeded");
/// let mut deck = Deck::begin(pool, "s1", Discard, &mut thread_rng());
/// let outcome = deck.swipe(SwipeDirection::Left).expect("first card");
/// assert_eq!(outcome.action, SwipeAction::Pass);
/// assert!(deck.state().is_swiping());
/// deck.settle();
/// assert_eq!(deck.state(), DeckState::Browsing { index: 1 });
/// ```
#[derive(Debug)]
pub struct Deck<S> {
    pool: Vec<Destination>,
    session_id: String,
    sink: S,
    tokens: PreferenceTokens,
    state: DeckState,
    gesture: DragGesture,
    animation: Duration,
}

impl<S: SwipeSink> Deck<S> {
    /// Shuffle `pool` and show its first card.
    pub fn begin<R>(
        mut pool: Vec<Destination>,
        session_id: impl Into<String>,
        sink: S,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        pool.shuffle(rng);
        let mut deck = Self {
            pool,
            session_id: session_id.into(),
            sink,
            tokens: PreferenceTokens::new(),
            state: DeckState::Exhausted,
            gesture: DragGesture::new(),
            animation: DEFAULT_SWIPE_ANIMATION,
        };
        deck.state = deck.first_state();
        deck
    }

    /// Override the swipe animation length used by
    /// [`Deck::swipe_animated`].
    #[must_use]
    pub fn with_animation(mut self, animation: Duration) -> Self {
        self.animation = animation;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DeckState {
        self.state
    }

    /// Session the deck records swipes under.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Tokens liked so far.
    #[must_use]
    pub const fn tokens(&self) -> &PreferenceTokens {
        &self.tokens
    }

    /// Sink receiving this deck's swipes.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The shuffled pool refined by the liked tokens.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Destination> {
        self.tokens.refine(&self.pool)
    }

    /// Card at the current index, if one is showing.
    #[must_use]
    pub fn current(&self) -> Option<&Destination> {
        let index = self.index()?;
        self.candidates().get(index).copied()
    }

    /// Swipe the current card.
    ///
    /// The swipe is handed to the sink without waiting, likes are folded into
    /// the tokens, and the deck enters [`DeckState::Swiping`] until
    /// [`Deck::settle`].
    ///
    /// # Errors
    /// Returns [`DeckError::SwipeInProgress`] while a previous swipe is still
    /// animating and [`DeckError::Exhausted`] when no card is showing.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, DeckError> {
        let index = match self.state {
            DeckState::Swiping { .. } => return Err(DeckError::SwipeInProgress),
            DeckState::Exhausted => return Err(DeckError::Exhausted),
            DeckState::Browsing { index } => index,
        };
        let destination = self
            .candidates()
            .get(index)
            .map(|destination| (*destination).clone())
            .ok_or(DeckError::Exhausted)?;
        let action = direction.action();
        self.sink
            .submit(NewSwipe::new(destination.id, action, self.session_id.as_str()));
        let new_tokens = match direction {
            SwipeDirection::Right => self.tokens.absorb(&destination),
            SwipeDirection::Left => 0,
        };
        self.gesture.cancel();
        self.state = DeckState::Swiping { direction, index };
        Ok(SwipeOutcome {
            destination,
            action,
            new_tokens,
        })
    }

    /// Finish the running swipe animation and show the next card.
    ///
    /// Does nothing unless a swipe is in progress. Returns the new state.
    pub fn settle(&mut self) -> DeckState {
        if let DeckState::Swiping { index, .. } = self.state {
            let next = index.saturating_add(1);
            self.state = if next < self.candidates().len() {
                DeckState::Browsing { index: next }
            } else {
                DeckState::Exhausted
            };
        }
        self.state
    }

    /// Swipe, wait out the animation, then settle.
    ///
    /// # Errors
    /// As [`Deck::swipe`].
    pub async fn swipe_animated(
        &mut self,
        direction: SwipeDirection,
    ) -> Result<SwipeOutcome, DeckError> {
        let outcome = self.swipe(direction)?;
        tokio::time::sleep(self.animation).await;
        self.settle();
        Ok(outcome)
    }

    /// Start over: forget the liked tokens, reshuffle and show the first card.
    ///
    /// # Errors
    /// Returns [`DeckError::SwipeInProgress`] while a swipe is animating.
    pub fn restart<R>(&mut self, rng: &mut R) -> Result<DeckState, DeckError>
    where
        R: Rng + ?Sized,
    {
        self.ensure_idle()?;
        self.tokens.clear();
        self.pool.shuffle(rng);
        self.state = self.first_state();
        Ok(self.state)
    }

    /// Go back to the first card of the refined list, keeping the tokens and
    /// the order.
    ///
    /// # Errors
    /// Returns [`DeckError::SwipeInProgress`] while a swipe is animating.
    pub fn review(&mut self) -> Result<DeckState, DeckError> {
        self.ensure_idle()?;
        self.state = self.first_state();
        Ok(self.state)
    }

    /// Draw a final recommendation from the refined candidates.
    pub fn recommend<R>(&self, rng: &mut R) -> Option<Destination>
    where
        R: Rng + ?Sized,
    {
        trippick_selector::recommend(&self.candidates(), rng)
    }

    /// `(position, total)` for the progress counter; position is 1-based and
    /// equals `total` once the deck is exhausted.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = self.candidates().len();
        let position = self
            .index()
            .map_or(total, |index| index.saturating_add(1).min(total));
        (position, total)
    }

    /// Pointer went down on the current card. Ignored while swiping.
    pub const fn press(&mut self, x: f64) {
        if !self.state.is_swiping() {
            self.gesture.press(x);
        }
    }

    /// Pointer moved. Ignored while swiping.
    pub const fn drag(&mut self, x: f64) {
        if !self.state.is_swiping() {
            self.gesture.drag(x);
        }
    }

    /// Pointer went up; commits a swipe when the drag went far enough.
    ///
    /// Returns `Ok(None)` when nothing was committed, including while a
    /// swipe is already animating.
    ///
    /// # Errors
    /// As [`Deck::swipe`], except that an in-progress swipe is not an error
    /// here.
    pub fn release(&mut self) -> Result<Option<SwipeOutcome>, DeckError> {
        if self.state.is_swiping() {
            return Ok(None);
        }
        match self.gesture.release() {
            Some(direction) => self.swipe(direction).map(Some),
            None => Ok(None),
        }
    }

    /// How the current card should be drawn under the active drag.
    #[must_use]
    pub fn card_transform(&self) -> CardTransform {
        self.gesture.transform()
    }

    /// LIKE or PASS hint for the active drag.
    #[must_use]
    pub fn drag_hint(&self) -> Option<SwipeDirection> {
        self.gesture.hint()
    }

    const fn index(&self) -> Option<usize> {
        match self.state {
            DeckState::Browsing { index } | DeckState::Swiping { index, .. } => Some(index),
            DeckState::Exhausted => None,
        }
    }

    const fn ensure_idle(&self) -> Result<(), DeckError> {
        if self.state.is_swiping() {
            Err(DeckError::SwipeInProgress)
        } else {
            Ok(())
        }
    }

    fn first_state(&self) -> DeckState {
        if self.candidates().is_empty() {
            DeckState::Exhausted
        } else {
            DeckState::Browsing { index: 0 }
        }
    }
}
