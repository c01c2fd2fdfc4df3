// SPDX-License-Identifier: MPL-2.0
//! Hand-authored, compiled-in site content.
//!
//! Everything here is immutable. Screens receive these slices by reference,
//! so tests can hand them fixture data instead.

pub mod approach;
pub mod clients;
pub mod stories;

pub use clients::{ClientLogo, CLIENTS};
pub use stories::{Industry, Metrics, Story, STORIES};
