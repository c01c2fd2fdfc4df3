// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navbar tab for the screen currently shown.
pub fn tab_selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::TEAL_400,
        _ => palette::TEAL_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar tab for the other screens.
pub fn tab(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::NAVY_500
            })),
            WHITE,
        ),
        _ => (None, palette::GRAY_300),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round previous/next arrow beside the story card.
pub fn carousel_arrow(theme: &Theme, status: button::Status) -> button::Style {
    let base = if matches!(theme, Theme::Light) {
        palette::NAVY_700
    } else {
        palette::NAVY_500
    };

    let (background, shadow) = match status {
        button::Status::Hovered => (palette::TEAL_600, shadow::LG),
        button::Status::Pressed => (palette::NAVY_900, shadow::SM),
        button::Status::Active => (base, shadow::SM),
        button::Status::Disabled => (palette::GRAY_500, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Dot in the carousel dot navigation.
pub fn carousel_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::TEAL_600,
            (false, button::Status::Hovered) => palette::TEAL_400,
            (false, _) => palette::GRAY_300,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
