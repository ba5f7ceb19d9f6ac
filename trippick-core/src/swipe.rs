//! Swipe events recorded against destinations.
//!
//! A swipe is either a like or a pass. Events are append-only: once the
//! ledger assigns an id the record never changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the user did with a card.
///
/// Serialised as the literal strings `"like"` and `"pass"`; anything else is
/// rejected.
///
/// # Examples
/// ```
/// use trippick_core::SwipeAction;
///
/// assert_eq!(SwipeAction::Like.as_str(), "like");
/// assert_eq!("pass".parse::<SwipeAction>(), Ok(SwipeAction::Pass));
/// assert!("maybe".parse::<SwipeAction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SwipeAction {
    /// Swiped right.
    Like,
    /// Swiped left.
    Pass,
}

impl SwipeAction {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Pass => "pass",
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown swipe action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown swipe action '{0}'")]
pub struct ParseSwipeActionError(String);

impl std::str::FromStr for SwipeAction {
    type Err = ParseSwipeActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "pass" => Ok(Self::Pass),
            other => Err(ParseSwipeActionError(other.to_owned())),
        }
    }
}

/// A swipe as submitted by a client, before the ledger assigns an id.
///
/// `destination_id` is not checked against the store and `session_id` is an
/// opaque client-generated string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NewSwipe {
    /// Destination the card showed.
    pub destination_id: u64,
    /// Like or pass.
    pub action: SwipeAction,
    /// Client session grouping the swipes.
    pub session_id: String,
}

impl NewSwipe {
    /// Build a swipe for `destination_id` in `session_id`.
    pub fn new(destination_id: u64, action: SwipeAction, session_id: impl Into<String>) -> Self {
        Self {
            destination_id,
            action,
            session_id: session_id.into(),
        }
    }

    /// Attach an identifier, producing the recorded event.
    #[must_use]
    pub fn into_event(self, id: u64) -> SwipeEvent {
        SwipeEvent {
            id,
            destination_id: self.destination_id,
            action: self.action,
            session_id: self.session_id,
        }
    }
}

/// A recorded swipe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SwipeEvent {
    /// Sequential identifier assigned by the ledger.
    pub id: u64,
    /// Destination the card showed.
    pub destination_id: u64,
    /// Like or pass.
    pub action: SwipeAction,
    /// Client session grouping the swipes.
    pub session_id: String,
}

impl SwipeEvent {
    /// Whether this event is a like.
    #[must_use]
    pub fn is_like(&self) -> bool {
        self.action == SwipeAction::Like
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("like", SwipeAction::Like)]
    #[case("pass", SwipeAction::Pass)]
    fn parses_known_actions(#[case] raw: &str, #[case] expected: SwipeAction) {
        assert_eq!(SwipeAction::from_str(raw), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("maybe")]
    #[case("LIKE")]
    #[case("")]
    fn rejects_unknown_actions(#[case] raw: &str) {
        assert!(SwipeAction::from_str(raw).is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn payload_with_unknown_action_fails_to_deserialise() {
        let json = r#"{"destinationId":1,"action":"maybe","sessionId":"abc"}"#;
        assert!(serde_json::from_str::<NewSwipe>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[expect(clippy::expect_used, reason = "tests should fail fast on bad JSON")]
    fn payload_round_trips_wire_names() {
        let json = r#"{"destinationId":3,"action":"like","sessionId":"abc"}"#;
        let swipe: NewSwipe = serde_json::from_str(json).expect("parse swipe");
        assert_eq!(swipe, NewSwipe::new(3, SwipeAction::Like, "abc"));

        let event = swipe.into_event(7);
        let value = serde_json::to_value(&event).expect("serialise event");
        assert_eq!(value["id"], 7);
        assert_eq!(value["destinationId"], 3);
        assert_eq!(value["action"], "like");
        assert_eq!(value["sessionId"], "abc");
    }
}
