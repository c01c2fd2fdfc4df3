// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns its `State`, `Message` and `view`, and the application forwards
//! messages to it.
//!
//! # Screens
//!
//! - [`clients`] - Client roster with the scrolling logo ticker
//! - [`approach`] - Scroll-revealed description of how an engagement runs
//! - [`success_stories`] - Auto-advancing case-study carousel
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Page tabs
//! - [`logo_ticker`] - Seamless infinite-scroll canvas
//! - [`industry`] - Per-industry card styles
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod approach;
pub mod clients;
pub mod design_tokens;
pub mod icons;
pub mod industry;
pub mod logo_ticker;
pub mod navbar;
pub mod styles;
pub mod success_stories;
pub mod theming;
