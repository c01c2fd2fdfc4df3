// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::industry::IndustryStyle;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Top navigation bar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Story card tinted with the industry palette.
///
/// `opacity` fades the card in during a slide transition.
pub fn story_card(style: IndustryStyle, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..style.background
        })),
        text_color: Some(Color {
            a: opacity,
            ..palette::GRAY_900
        }),
        border: Border {
            color: Color {
                a: opacity,
                ..style.border
            },
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Accent badge holding the headline metric.
pub fn metric_badge(accent: Color, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..accent
        })),
        text_color: Some(Color {
            a: opacity,
            ..palette::WHITE
        }),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Approach section panel; derived from the theme background so it works in
/// both light and dark modes.
pub fn section(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Band behind the logo ticker.
pub fn ticker_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            color: palette::GRAY_300,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Industry;
    use crate::ui::industry::StyleTable;

    #[test]
    fn story_card_uses_industry_background() {
        let style = StyleTable::standard().lookup(Industry::Healthcare);
        let card = story_card(style, 1.0)(&Theme::Light);
        assert_eq!(card.background, Some(Background::Color(style.background)));
        assert_eq!(card.border.color, style.border);
    }

    #[test]
    fn story_card_fades_with_opacity() {
        let style = StyleTable::standard().lookup(Industry::Manufacturing);
        let card = story_card(style, 0.5)(&Theme::Light);
        match card.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.5),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
