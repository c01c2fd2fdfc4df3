// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Clients,
    Approach,
    SuccessStories,
}

impl Screen {
    /// Title shown in the window bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Clients => "Clients",
            Screen::Approach => "About - Approach",
            Screen::SuccessStories => "About - Success Stories",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the `--screen` command-line value.
impl FromStr for Screen {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "clients" => Ok(Screen::Clients),
            "approach" => Ok(Screen::Approach),
            "stories" | "success-stories" => Ok(Screen::SuccessStories),
            other => Err(Error::InvalidArgument(format!("unknown screen: {other}"))),
        }
    }
}
