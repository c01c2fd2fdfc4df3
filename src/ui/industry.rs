// SPDX-License-Identifier: MPL-2.0
//! Per-industry presentation styles for story cards.

use crate::content::Industry;
use crate::ui::icons;
use iced::widget::Svg;
use iced::Color;

/// Icon drawn in a story card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryIcon {
    Cross,
    Factory,
    Columns,
    Coins,
    Mortarboard,
    Chip,
}

impl IndustryIcon {
    #[must_use]
    pub fn svg(self) -> Svg<'static> {
        match self {
            IndustryIcon::Cross => icons::cross(),
            IndustryIcon::Factory => icons::factory(),
            IndustryIcon::Columns => icons::columns(),
            IndustryIcon::Coins => icons::coins(),
            IndustryIcon::Mortarboard => icons::mortarboard(),
            IndustryIcon::Chip => icons::chip(),
        }
    }
}

/// Colors and icon of one industry category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryStyle {
    pub background: Color,
    pub border: Color,
    pub accent: Color,
    pub icon: IndustryIcon,
}

/// Lookup from [`Industry`] to its [`IndustryStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    entries: [IndustryStyle; Industry::ALL.len()],
}

impl StyleTable {
    /// The house style.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: [
                // Healthcare
                IndustryStyle {
                    background: Color::from_rgb(0.99, 0.95, 0.95),
                    border: Color::from_rgb(0.96, 0.77, 0.77),
                    accent: Color::from_rgb(0.80, 0.20, 0.24),
                    icon: IndustryIcon::Cross,
                },
                // Manufacturing
                IndustryStyle {
                    background: Color::from_rgb(1.0, 0.97, 0.92),
                    border: Color::from_rgb(0.98, 0.84, 0.62),
                    accent: Color::from_rgb(0.80, 0.45, 0.05),
                    icon: IndustryIcon::Factory,
                },
                // Public sector
                IndustryStyle {
                    background: Color::from_rgb(0.94, 0.96, 1.0),
                    border: Color::from_rgb(0.74, 0.82, 0.97),
                    accent: Color::from_rgb(0.15, 0.35, 0.75),
                    icon: IndustryIcon::Columns,
                },
                // Financial services
                IndustryStyle {
                    background: Color::from_rgb(0.94, 0.99, 0.95),
                    border: Color::from_rgb(0.70, 0.90, 0.75),
                    accent: Color::from_rgb(0.09, 0.55, 0.28),
                    icon: IndustryIcon::Coins,
                },
                // Higher education
                IndustryStyle {
                    background: Color::from_rgb(0.97, 0.95, 1.0),
                    border: Color::from_rgb(0.84, 0.78, 0.98),
                    accent: Color::from_rgb(0.45, 0.25, 0.78),
                    icon: IndustryIcon::Mortarboard,
                },
                // Technology
                IndustryStyle {
                    background: Color::from_rgb(0.93, 0.99, 0.99),
                    border: Color::from_rgb(0.65, 0.90, 0.90),
                    accent: Color::from_rgb(0.05, 0.52, 0.52),
                    icon: IndustryIcon::Chip,
                },
            ],
        }
    }

    #[must_use]
    pub fn lookup(&self, industry: Industry) -> IndustryStyle {
        self.entries[industry.ordinal()]
    }
}
