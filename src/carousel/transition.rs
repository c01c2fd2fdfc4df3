// SPDX-License-Identifier: MPL-2.0
//! Time-based slide transition selected by the navigation direction.

use super::Direction;
use std::time::{Duration, Instant};

/// Slide-in animation started when the active index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    direction: Direction,
    started_at: Instant,
}

impl SlideTransition {
    /// Length of the slide-in animation.
    pub const DURATION: Duration = Duration::from_millis(450);

    #[must_use]
    pub fn start(direction: Direction, now: Instant) -> Self {
        Self {
            direction,
            started_at: now,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Eased completion in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let linear = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(linear)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= Self::DURATION
    }

    /// Horizontal displacement of the incoming slide.
    ///
    /// Positive values place it to the right (forward navigation), negative
    /// to the left. Reaches zero when the transition completes.
    #[must_use]
    pub fn offset(&self, now: Instant, distance: f32) -> f32 {
        f32::from(self.direction.signum()) * (1.0 - self.progress(now)) * distance
    }

    /// Opacity of the incoming slide.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.progress(now)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transition_enters_from_the_right() {
        let now = Instant::now();
        let transition = SlideTransition::start(Direction::Forward, now);
        assert!(transition.offset(now, 100.0) > 99.0);
    }

    #[test]
    fn backward_transition_enters_from_the_left() {
        let now = Instant::now();
        let transition = SlideTransition::start(Direction::Backward, now);
        assert!(transition.offset(now, 100.0) < -99.0);
    }

    #[test]
    fn neutral_direction_does_not_slide() {
        let now = Instant::now();
        let transition = SlideTransition::start(Direction::None, now);
        assert_eq!(transition.offset(now, 100.0), 0.0);
    }

    #[test]
    fn transition_settles_after_duration() {
        let start = Instant::now();
        let transition = SlideTransition::start(Direction::Forward, start);
        let end = start + SlideTransition::DURATION;

        assert!(transition.is_finished(end));
        assert_eq!(transition.progress(end), 1.0);
        assert_eq!(transition.offset(end, 100.0), 0.0);
        assert_eq!(transition.opacity(end), 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let start = Instant::now();
        let transition = SlideTransition::start(Direction::Forward, start);
        let mut previous = 0.0;
        for step in 0..=9 {
            let value = transition.progress(start + Duration::from_millis(step * 50));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn clock_before_start_counts_as_not_started() {
        let start = Instant::now() + Duration::from_secs(1);
        let transition = SlideTransition::start(Direction::Forward, start);
        assert_eq!(transition.progress(Instant::now()), 0.0);
    }
}
