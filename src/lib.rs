// SPDX-License-Identifier: MPL-2.0
//! `meridian_showcase` is the client showcase of an actuarial and benefits
//! consultancy, built with the Iced GUI framework.
//!
//! It shows three pages: a seamless client logo ticker, a scroll-revealed
//! description of the firm's approach, and an auto-advancing carousel of
//! success stories. The [`carousel`] module holds the carousel controller,
//! which is independent of the toolkit apart from its timer subscription.

pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod ui;
