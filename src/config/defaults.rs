// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Autoplay interval bounds
//! - **Ticker**: Logo ticker scroll speed bounds

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between two autoplay advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Minimum autoplay delay (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum autoplay delay (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Ticker Defaults
// ==========================================================================

/// Default logo ticker scroll speed (pixels per second).
pub const DEFAULT_TICKER_SPEED: f32 = 40.0;

/// Minimum logo ticker scroll speed.
pub const MIN_TICKER_SPEED: f32 = 5.0;

/// Maximum logo ticker scroll speed.
pub const MAX_TICKER_SPEED: f32 = 400.0;

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS <= DEFAULT_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    assert!(MIN_TICKER_SPEED <= DEFAULT_TICKER_SPEED);
    assert!(DEFAULT_TICKER_SPEED <= MAX_TICKER_SPEED);
};
