//! Horizontal drag tracking for swipe cards.
//!
//! Pointer and touch input both reduce to an x coordinate. A release more
//! than [`SWIPE_THRESHOLD_PX`] from the press point commits a swipe; shorter
//! drags snap back.

use crate::SwipeDirection;

/// Horizontal distance a drag must exceed to commit a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Horizontal distance past which the LIKE or PASS hint is shown.
pub const HINT_THRESHOLD_PX: f64 = 50.0;

/// Card rotation per pixel of drag, in degrees.
pub const ROTATION_DEG_PER_PX: f64 = 0.1;

/// Drag distance over which the card fades to [`MIN_OPACITY`].
pub const FADE_DISTANCE_PX: f64 = 300.0;

/// Opacity floor while dragging.
pub const MIN_OPACITY: f64 = 0.3;

/// Rendering parameters for a card under a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal translation in pixels.
    pub offset_px: f64,
    /// Rotation in degrees, clockwise for rightward drags.
    pub rotation_deg: f64,
    /// Card opacity in `MIN_OPACITY..=1.0`.
    pub opacity: f64,
}

impl CardTransform {
    /// Transform of a card at rest.
    pub const IDENTITY: Self = Self {
        offset_px: 0.0,
        rotation_deg: 0.0,
        opacity: 1.0,
    };
}

/// Press/drag/release tracker for one pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    start: f64,
    current: f64,
    dragging: bool,
}

impl DragGesture {
    /// Idle gesture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: 0.0,
            current: 0.0,
            dragging: false,
        }
    }

    /// Pointer went down at `x`.
    pub const fn press(&mut self, x: f64) {
        self.start = x;
        self.current = x;
        self.dragging = true;
    }

    /// Pointer moved to `x`. Ignored unless pressed.
    pub const fn drag(&mut self, x: f64) {
        if self.dragging {
            self.current = x;
        }
    }

    /// Whether the pointer is down.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Signed horizontal distance from the press point; zero when idle.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "drag distance is a pixel delta")]
    pub fn delta(&self) -> f64 {
        if self.dragging {
            self.current - self.start
        } else {
            0.0
        }
    }

    /// Direction hint to overlay on the card, once the drag passes
    /// [`HINT_THRESHOLD_PX`].
    #[must_use]
    pub fn hint(&self) -> Option<SwipeDirection> {
        direction_past(self.delta(), HINT_THRESHOLD_PX)
    }

    /// How the dragged card should be drawn.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "card transform is continuous")]
    pub fn transform(&self) -> CardTransform {
        let delta = self.delta();
        CardTransform {
            offset_px: delta,
            rotation_deg: delta * ROTATION_DEG_PER_PX,
            opacity: (1.0 - delta.abs() / FADE_DISTANCE_PX).max(MIN_OPACITY),
        }
    }

    /// Pointer went up. Returns the committed direction when the drag went
    /// past [`SWIPE_THRESHOLD_PX`]; the gesture is idle afterwards either way.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        let delta = self.delta();
        self.dragging = false;
        direction_past(delta, SWIPE_THRESHOLD_PX)
    }

    /// Drop the gesture without committing.
    pub const fn cancel(&mut self) {
        self.dragging = false;
    }
}

fn direction_past(delta: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta > threshold {
        Some(SwipeDirection::Right)
    } else if delta < -threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dragged(from: f64, to: f64) -> DragGesture {
        let mut gesture = DragGesture::new();
        gesture.press(from);
        gesture.drag(to);
        gesture
    }

    #[rstest]
    #[case(200.0, 320.0, Some(SwipeDirection::Right))]
    #[case(200.0, 60.0, Some(SwipeDirection::Left))]
    #[case(200.0, 300.0, None)]
    #[case(200.0, 100.0, None)]
    #[case(200.0, 260.0, None)]
    fn release_commits_past_threshold(
        #[case] from: f64,
        #[case] to: f64,
        #[case] expected: Option<SwipeDirection>,
    ) {
        let mut gesture = dragged(from, to);
        assert_eq!(gesture.release(), expected);
        assert!(!gesture.is_dragging());
    }

    #[rstest]
    #[case(40.0, None)]
    #[case(60.0, Some(SwipeDirection::Right))]
    #[case(-60.0, Some(SwipeDirection::Left))]
    fn hint_shows_past_half_threshold(#[case] delta: f64, #[case] expected: Option<SwipeDirection>) {
        assert_eq!(dragged(0.0, delta).hint(), expected);
    }

    #[rstest]
    fn drag_without_press_is_ignored() {
        let mut gesture = DragGesture::new();
        gesture.drag(500.0);
        assert_eq!(gesture.transform(), CardTransform::IDENTITY);
        assert_eq!(gesture.release(), None);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "offset is the exact drag delta")]
    fn transform_rotates_and_fades() {
        let transform = dragged(0.0, 150.0).transform();
        assert_eq!(transform.offset_px, 150.0);
        assert!((transform.rotation_deg - 15.0).abs() < 1e-9);
        assert!((transform.opacity - 0.5).abs() < 1e-9);
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "the floor is returned unchanged")]
    fn opacity_never_drops_below_floor() {
        let transform = dragged(0.0, -1000.0).transform();
        assert_eq!(transform.opacity, MIN_OPACITY);
    }
}
