//! Test doubles for code driving a [`crate::Deck`].

use std::sync::{Arc, Mutex, PoisonError};

use trippick_core::NewSwipe;

use crate::SwipeSink;

/// Sink remembering every submitted swipe. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    swipes: Arc<Mutex<Vec<NewSwipe>>>,
}

impl RecordingSink {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swipes submitted so far, oldest first.
    #[must_use]
    pub fn recorded(&self) -> Vec<NewSwipe> {
        self.swipes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SwipeSink for RecordingSink {
    fn submit(&self, swipe: NewSwipe) {
        self.swipes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(swipe);
    }
}
