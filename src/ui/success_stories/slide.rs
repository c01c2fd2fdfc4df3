// SPDX-License-Identifier: MPL-2.0
//! Slide renderer: maps a story and the style table to a card.
//!
//! Rendering is split in two pure steps. [`describe`] resolves everything the
//! card shows into a [`SlideDescription`]; [`view`] lays that description out
//! with the motion of the running transition applied.

use crate::content::{Metrics, Story};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::industry::{IndustryStyle, StyleTable};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Color, Element, Length, Padding,
};

/// Everything a story card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDescription {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub outcome: Option<&'static str>,
    pub industry_label: &'static str,
    pub style: IndustryStyle,
    pub metrics: Metrics,
}

/// Resolves a story against the style table.
#[must_use]
pub fn describe(story: &Story, styles: &StyleTable) -> SlideDescription {
    SlideDescription {
        title: story.title,
        description: story.description,
        details: story.details,
        outcome: story.outcome,
        industry_label: story.industry.label(),
        style: styles.lookup(story.industry),
        metrics: story.metrics,
    }
}

/// Placement of the card during a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Horizontal displacement; positive shifts right.
    pub offset: f32,
    pub opacity: f32,
}

impl Motion {
    /// Fully settled card.
    pub const AT_REST: Motion = Motion {
        offset: 0.0,
        opacity: opacity::OPAQUE,
    };
}

impl Default for Motion {
    fn default() -> Self {
        Self::AT_REST
    }
}

/// Lays out a story card.
pub fn view<'a, Message: 'a>(slide: &SlideDescription, motion: Motion) -> Element<'a, Message> {
    let alpha = motion.opacity.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    let accent = Color {
        a: alpha,
        ..slide.style.accent
    };

    let badge_icon = icons::tinted(
        icons::sized(slide.style.icon.svg(), sizing::ICON_MD),
        accent,
    );
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(badge_icon)
        .push(
            Text::new(slide.industry_label.to_uppercase())
                .size(typography::CAPTION)
                .color(accent),
        );

    let details = slide.details.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, item| column.push(Text::new(format!("✓ {item}")).size(typography::BODY)),
    );

    let mut story = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(header)
        .push(Text::new(slide.title).size(typography::TITLE_MD))
        .push(Text::new(slide.description).size(typography::BODY_LG))
        .push(details);

    if let Some(outcome) = slide.outcome {
        story = story.push(Text::new(outcome).size(typography::BODY).color(accent));
    }

    let metrics = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(slide.metrics.percentage).size(typography::DISPLAY))
            .push(Text::new(slide.metrics.label).size(typography::BODY))
            .push(
                Text::new(slide.metrics.change)
                    .size(typography::CAPTION)
                    .color(Color {
                        a: alpha,
                        ..palette::TEAL_100
                    }),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::METRICS_COLUMN))
    .align_x(Horizontal::Center)
    .style(styles::container::metric_badge(slide.style.accent, alpha));

    let body = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(story)
        .push(metrics);

    let card = Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::story_card(slide.style, alpha));

    // Shift by trading padding between the two sides so the card width
    // stays constant while it slides.
    Container::new(card)
        .width(Length::Fill)
        .padding(Padding {
            left: motion.offset.max(0.0),
            right: (-motion.offset).max(0.0),
            ..Padding::ZERO
        })
        .into()
}
