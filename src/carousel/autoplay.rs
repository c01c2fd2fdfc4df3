// SPDX-License-Identifier: MPL-2.0
//! Autoplay timer ownership and interval domain types.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one live autoplay timer.
///
/// The runtime keys the recurring timer subscription on this value, and every
/// tick it emits carries it back. A carousel only honors ticks carrying the
/// handle it currently owns, so ticks from a released timer are inert.
/// Handles are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayHandle(u64);

impl AutoplayHandle {
    /// Acquires a fresh, process-unique handle.
    pub(crate) fn acquire() -> Self {
        Self(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier (used in log fields).
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Delay between two autoplay advances, in milliseconds.
///
/// Values outside the supported range are clamped.
///
/// # Example
///
/// ```
/// use meridian_showcase::carousel::AutoplayInterval;
///
/// let interval = AutoplayInterval::new(5000);
/// assert_eq!(interval.value(), 5000);
///
/// let too_fast = AutoplayInterval::new(10);
/// assert_eq!(too_fast.value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

/// How a mounted carousel drives itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayPolicy {
    /// Whether a recurring timer is started on mount.
    pub enabled: bool,
    /// Time between two automatic advances.
    pub interval: AutoplayInterval,
    /// Restart the timer whenever the visitor navigates manually.
    ///
    /// Off by default: the timer keeps its own cadence and may fire right
    /// after a manual step.
    pub reset_on_manual_navigation: bool,
}

impl Default for AutoplayPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: AutoplayInterval::default(),
            reset_on_manual_navigation: false,
        }
    }
}
