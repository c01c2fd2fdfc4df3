// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::approach;
use crate::ui::navbar;
use crate::ui::success_stories;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navbar(navbar::Message),
    Approach(approach::Message),
    SuccessStories(success_stories::Message),
    /// Animation frame for the ticker and slide transitions.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `MERIDIAN_SHOWCASE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Screen shown on startup.
    pub screen: Option<Screen>,
    /// Theme override for this run; not written back to settings.
    pub theme: Option<ThemeMode>,
    /// Autoplay override for this run.
    pub autoplay: Option<bool>,
}
