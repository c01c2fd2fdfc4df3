// SPDX-License-Identifier: MPL-2.0
//! Carousel controller for cycling through a fixed, ordered set of slides.
//!
//! [`Carousel`] owns the active index, the direction of the last transition
//! and the autoplay timer handle. Every index change goes through
//! [`Carousel::next`], [`Carousel::previous`], [`Carousel::go_to`] or an
//! autoplay tick, all of which wrap modulo the slide count, so the active
//! index is always a valid position in the slide list.
//!
//! The controller does not own the slides themselves, only their count. The
//! screen that mounts it injects the slide data, which keeps the controller
//! usable with fixture lists in tests.
//!
//! All mutation happens on the application's update loop. The controller
//! holds no locks; confine it to a single task.

mod autoplay;
mod transition;

pub use autoplay::{AutoplayHandle, AutoplayInterval, AutoplayPolicy};
pub use transition::SlideTransition;

use crate::error::{Error, Result};
use iced::{time, Subscription};

/// Direction of the most recent navigation, used to pick transition visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Moved toward lower indices (`-1`).
    Backward,
    /// No navigation yet (`0`).
    #[default]
    None,
    /// Moved toward higher indices (`+1`).
    Forward,
}

impl Direction {
    /// Returns the signed value: `-1`, `0` or `+1`.
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }
}

/// Auto-advancing carousel state.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    direction: Direction,
    policy: AutoplayPolicy,
    autoplay: Option<AutoplayHandle>,
}

impl Carousel {
    /// Mounts a carousel over `len` slides, starting at index 0.
    ///
    /// Acquires an autoplay handle when the policy enables autoplay.
    /// Returns [`Error::EmptyCarousel`] when `len` is zero.
    pub fn new(len: usize, policy: AutoplayPolicy) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCarousel);
        }

        let autoplay = policy.enabled.then(AutoplayHandle::acquire);
        if let Some(handle) = autoplay {
            tracing::info!(
                handle = handle.id(),
                slides = len,
                interval_ms = policy.interval.value(),
                "carousel autoplay started"
            );
        }

        Ok(Self {
            len,
            active_index: 0,
            direction: Direction::None,
            policy,
            autoplay,
        })
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: an empty carousel cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Handle of the live autoplay timer, if any.
    #[must_use]
    pub fn autoplay_handle(&self) -> Option<AutoplayHandle> {
        self.autoplay
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.step_forward();
        self.after_manual_navigation();
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        self.active_index = (self.active_index + self.len - 1) % self.len;
        tracing::debug!(index = self.active_index, "carousel previous");
        self.after_manual_navigation();
    }

    /// Jumps straight to `target`.
    ///
    /// The direction is forward when `target` is past the active index and
    /// backward otherwise (including a jump to the current slide). Callers
    /// must pass an index below [`Carousel::len`]; anything else is dropped
    /// and the state is left untouched.
    pub fn go_to(&mut self, target: usize) {
        if target >= self.len {
            tracing::warn!(target, len = self.len, "carousel go_to out of range ignored");
            return;
        }

        self.direction = if target > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active_index = target;
        tracing::debug!(index = target, "carousel go_to");
        self.after_manual_navigation();
    }

    /// Applies one autoplay tick emitted by the timer identified by `handle`.
    ///
    /// Returns `true` when the tick advanced the carousel. Ticks from a timer
    /// this carousel no longer owns (after teardown or a timer restart) have
    /// no effect.
    pub fn on_autoplay_tick(&mut self, handle: AutoplayHandle) -> bool {
        if self.autoplay != Some(handle) {
            tracing::debug!(handle = handle.id(), "stale autoplay tick dropped");
            return false;
        }
        self.step_forward();
        true
    }

    /// Releases the autoplay timer.
    ///
    /// Idempotent: the handle is released exactly once, later calls do
    /// nothing.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            tracing::info!(handle = handle.id(), "carousel autoplay released");
        }
    }

    /// Whether the autoplay timer is still owned.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Recurring timer subscription for autoplay.
    ///
    /// Keyed by the live handle: once the handle is released or replaced the
    /// runtime drops the old timer.
    pub fn subscription(&self) -> Subscription<AutoplayHandle> {
        match self.autoplay {
            Some(handle) => time::every(self.policy.interval.as_duration())
                .with(handle)
                .map(|(handle, _instant)| handle),
            None => Subscription::none(),
        }
    }

    fn step_forward(&mut self) {
        self.direction = Direction::Forward;
        self.active_index = (self.active_index + 1) % self.len;
        tracing::debug!(index = self.active_index, "carousel next");
    }

    fn after_manual_navigation(&mut self) {
        if !self.policy.reset_on_manual_navigation {
            return;
        }
        if let Some(handle) = self.autoplay.as_mut() {
            *handle = AutoplayHandle::acquire();
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, AutoplayPolicy::default()).expect("non-empty carousel")
    }

    fn live_handle(carousel: &Carousel) -> AutoplayHandle {
        carousel.autoplay_handle().expect("autoplay should be live")
    }

    #[test]
    fn new_carousel_starts_at_zero_with_no_direction() {
        let c = carousel(4);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.direction(), Direction::None);
        assert_eq!(c.direction().signum(), 0);
        assert!(c.is_live());
    }

    #[test]
    fn empty_carousel_is_a_configuration_error() {
        let result = Carousel::new(0, AutoplayPolicy::default());
        assert_eq!(result.err(), Some(Error::EmptyCarousel));
    }

    #[test]
    fn next_three_times_then_wraps() {
        let mut c = carousel(4);
        let mut seen = vec![c.active_index()];
        for _ in 0..3 {
            c.next();
            seen.push(c.active_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);

        c.next();
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = carousel(4);
        c.previous();
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.direction().signum(), -1);
    }

    #[test]
    fn next_then_previous_restores_index() {
        for start in 0..5 {
            let mut c = carousel(5);
            c.go_to(start);

            c.next();
            c.previous();
            assert_eq!(c.active_index(), start);
            assert_eq!(c.direction(), Direction::Backward);

            c.previous();
            c.next();
            assert_eq!(c.active_index(), start);
            assert_eq!(c.direction(), Direction::Forward);
        }
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        for len in 1..=6 {
            let mut c = carousel(len);
            // Deterministic pseudo-random walk.
            let mut seed: u32 = 0x9E37_79B9;
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if seed & 0x100 == 0 {
                    c.next();
                } else {
                    c.previous();
                }
                assert!(c.active_index() < len);
            }
        }
    }

    #[test]
    fn single_slide_always_stays_at_zero() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.active_index(), 0);
        c.previous();
        assert_eq!(c.active_index(), 0);
        assert!(c.on_autoplay_tick(live_handle(&c)));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn go_to_sets_index_exactly() {
        let mut c = carousel(4);
        c.go_to(2);
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.direction(), Direction::Forward);

        c.go_to(1);
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_current_index_counts_as_backward() {
        let mut c = carousel(4);
        c.go_to(0);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_out_of_range_leaves_state_untouched() {
        let mut c = carousel(4);
        c.next();
        c.go_to(4);
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn autoplay_ticks_advance_in_order() {
        let mut c = carousel(4);
        let handle = live_handle(&c);
        let mut seen = vec![c.active_index()];
        for _ in 0..3 {
            assert!(c.on_autoplay_tick(handle));
            seen.push(c.active_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn manual_navigation_keeps_timer_by_default() {
        let mut c = carousel(4);
        let handle = live_handle(&c);
        c.next();
        assert_eq!(c.autoplay_handle(), Some(handle));
        // The timer may fire right after a manual step.
        assert!(c.on_autoplay_tick(handle));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn reset_policy_restarts_timer_on_manual_navigation() {
        let policy = AutoplayPolicy {
            reset_on_manual_navigation: true,
            ..AutoplayPolicy::default()
        };
        let mut c = Carousel::new(4, policy).expect("non-empty carousel");
        let old = live_handle(&c);

        c.go_to(2);
        let new = live_handle(&c);
        assert_ne!(old, new);

        assert!(!c.on_autoplay_tick(old));
        assert_eq!(c.active_index(), 2);
        assert!(c.on_autoplay_tick(new));
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn disabled_autoplay_has_no_handle() {
        let policy = AutoplayPolicy {
            enabled: false,
            ..AutoplayPolicy::default()
        };
        let c = Carousel::new(3, policy).expect("non-empty carousel");
        assert!(!c.is_live());
        assert_eq!(c.autoplay_handle(), None);
    }

    #[test]
    fn tick_after_teardown_has_no_effect() {
        let mut c = carousel(4);
        let handle = live_handle(&c);
        c.next();
        c.teardown();

        assert!(!c.is_live());
        assert!(!c.on_autoplay_tick(handle));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut c = carousel(2);
        c.teardown();
        c.teardown();
        assert_eq!(c.autoplay_handle(), None);
    }

    #[test]
    fn ticks_from_another_carousel_are_ignored() {
        let mut first = carousel(3);
        let second = carousel(3);
        assert!(!first.on_autoplay_tick(live_handle(&second)));
        assert_eq!(first.active_index(), 0);
    }
}
