// SPDX-License-Identifier: MPL-2.0
//! Flip transition timing and geometry.
//!
//! The transition is purely decorative: the face swap has already happened by
//! the time it starts, and nothing waits for it to finish. All time-dependent
//! queries take `now` as a parameter so tests control the clock.

use crate::ui::state::FlipDirection;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Capability to play a directional flip animation.
///
/// Implemented by renderers so the toggle logic stays independent of the
/// concrete toolkit primitive used to draw the turn.
pub trait AnimatedTransition {
    /// Starts (or restarts) the animation in the given direction.
    fn play(&mut self, direction: FlipDirection, duration: Duration);
}

/// An in-flight card flip.
///
/// Renders the card turn by collapsing the image width to zero at the halfway
/// point and re-expanding it, per [`horizontal_scale`](Self::horizontal_scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTransition {
    started_at: Instant,
    direction: FlipDirection,
    duration: Duration,
}

impl FlipTransition {
    /// Starts a flip at `now`, turning in `direction` over `duration`.
    #[must_use]
    pub fn start(direction: FlipDirection, duration: Duration, now: Instant) -> Self {
        Self {
            started_at: now,
            direction,
            duration,
        }
    }

    /// Returns the direction the card turns in.
    #[must_use]
    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    /// Returns the configured duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns animation progress in `[0.0, 1.0]` at `now`.
    ///
    /// A zero-length duration reports completion immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Returns true once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Horizontal scale factor of the card surface at `now`.
    ///
    /// Follows `|cos(π · progress)|`: 1 at rest, 0 when the card is edge-on
    /// at the midpoint, and back to 1 when the turn completes.
    #[must_use]
    pub fn horizontal_scale(&self, now: Instant) -> f32 {
        (PI * self.progress(now)).cos().abs()
    }
}

impl AnimatedTransition for FlipTransition {
    fn play(&mut self, direction: FlipDirection, duration: Duration) {
        *self = Self::start(direction, duration, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn transition(duration_ms: u64) -> (FlipTransition, Instant) {
        let now = Instant::now();
        let transition = FlipTransition::start(
            FlipDirection::FromRight,
            Duration::from_millis(duration_ms),
            now,
        );
        (transition, now)
    }

    #[test]
    fn progress_starts_at_zero() {
        let (transition, now) = transition(300);
        assert!(transition.progress(now).abs() < EPSILON);
        assert!(!transition.is_finished(now));
    }

    #[test]
    fn progress_reaches_half_at_midpoint() {
        let (transition, now) = transition(300);
        let midpoint = now + Duration::from_millis(150);
        assert!((transition.progress(midpoint) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn progress_clamps_past_the_end() {
        let (transition, now) = transition(300);
        let late = now + Duration::from_secs(5);
        assert!((transition.progress(late) - 1.0).abs() < EPSILON);
        assert!(transition.is_finished(late));
    }

    #[test]
    fn finishes_exactly_at_duration() {
        let (transition, now) = transition(300);
        let end = now + Duration::from_millis(300);
        assert!(transition.is_finished(end));
        let just_before = now + Duration::from_millis(299);
        assert!(!transition.is_finished(just_before));
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let now = Instant::now();
        let transition = FlipTransition::start(FlipDirection::FromLeft, Duration::ZERO, now);
        assert!(transition.is_finished(now));
        assert!((transition.progress(now) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn scale_is_full_at_both_endpoints() {
        let (transition, now) = transition(300);
        assert!((transition.horizontal_scale(now) - 1.0).abs() < EPSILON);
        let end = now + Duration::from_millis(300);
        assert!((transition.horizontal_scale(end) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn scale_collapses_at_the_midpoint() {
        let (transition, now) = transition(300);
        let midpoint = now + Duration::from_millis(150);
        assert!(transition.horizontal_scale(midpoint).abs() < EPSILON);
    }

    #[test]
    fn scale_is_symmetric_around_the_midpoint() {
        let (transition, now) = transition(400);
        let early = now + Duration::from_millis(100);
        let late = now + Duration::from_millis(300);
        let difference = transition.horizontal_scale(early) - transition.horizontal_scale(late);
        assert!(difference.abs() < EPSILON);
    }

    #[test]
    fn direction_and_duration_are_preserved() {
        let now = Instant::now();
        let transition =
            FlipTransition::start(FlipDirection::FromLeft, Duration::from_millis(250), now);
        assert_eq!(transition.direction(), FlipDirection::FromLeft);
        assert_eq!(transition.duration(), Duration::from_millis(250));
    }

    #[test]
    fn play_restarts_with_new_direction() {
        let (mut transition, _) = transition(300);
        transition.play(FlipDirection::FromLeft, Duration::from_millis(100));
        assert_eq!(transition.direction(), FlipDirection::FromLeft);
        assert_eq!(transition.duration(), Duration::from_millis(100));
    }
}
