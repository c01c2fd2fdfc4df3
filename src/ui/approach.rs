// SPDX-License-Identifier: MPL-2.0
//! "About - Approach" page: a static, scroll-revealed description of how an
//! engagement runs.
//!
//! The first sections are visible on arrival. The rest fade in once they
//! are laid out inside the viewport and stay visible afterwards. Each section
//! sits in a `sensor`, so a window tall enough to show the whole page reveals
//! everything without any scrolling.

use crate::content::approach::{ApproachIcon, ApproachSection, HERO_SUMMARY, HERO_TITLE};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{rule, scrollable, sensor, Column, Container, Row, Svg, Text},
    Color, Element, Length, Theme,
};

/// Sections revealed before any scrolling.
pub const INITIALLY_REVEALED: usize = 2;

/// Messages emitted by the approach page.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The section at this index entered the viewport.
    SectionShown(usize),
}

/// Scroll-reveal progress of the page.
#[derive(Debug, Clone)]
pub struct State {
    sections: &'static [ApproachSection],
    revealed: usize,
}

impl State {
    #[must_use]
    pub fn new(sections: &'static [ApproachSection]) -> Self {
        Self {
            sections,
            revealed: INITIALLY_REVEALED.min(sections.len()),
        }
    }

    /// Number of sections currently visible.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SectionShown(index) => {
                if index >= self.sections.len() {
                    tracing::warn!(index, "ignoring unknown approach section");
                    return;
                }
                if index >= self.revealed {
                    self.revealed = index + 1;
                    tracing::debug!(revealed = self.revealed, "approach sections revealed");
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let hero = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(HERO_TITLE).size(typography::DISPLAY))
            .push(Text::new(HERO_SUMMARY).size(typography::BODY_LG));

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(hero);

        for (index, section) in self.sections.iter().enumerate() {
            let alpha = if index < self.revealed {
                opacity::OPAQUE
            } else {
                opacity::DIMMED
            };
            let tracked = sensor(build_section(index + 1, section, alpha))
                .on_show(move |_size| Message::SectionShown(index));
            content = content.push(tracked);
        }

        let centered = Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        scrollable(centered)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn icon_for(icon: ApproachIcon) -> Svg<'static> {
    match icon {
        ApproachIcon::Search => icons::magnifier(),
        ApproachIcon::Chart => icons::bar_chart(),
        ApproachIcon::Compass => icons::compass(),
        ApproachIcon::Gear => icons::gear(),
        ApproachIcon::Pulse => icons::pulse(),
    }
}

fn build_section<'a>(step: usize, section: &'a ApproachSection, alpha: f32) -> Element<'a, Message> {
    let accent = Color {
        a: alpha,
        ..palette::TEAL_600
    };

    let icon = icons::tinted(icons::sized(icon_for(section.icon), sizing::ICON_LG), accent);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon)
        .push(
            Text::new(format!("{step:02}"))
                .size(typography::CAPTION)
                .color(accent),
        )
        .push(Text::new(section.heading).size(typography::TITLE_SM));

    let points = section.points.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, point| column.push(Text::new(format!("• {point}")).size(typography::BODY)),
    );

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(Text::new(section.body).size(typography::BODY_LG))
        .push(points);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let mut style = styles::container::section(theme);
            style.text_color = Some(Color {
                a: alpha,
                ..theme.palette().text
            });
            style
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::approach::SECTIONS;

    #[test]
    fn starts_with_initial_sections() {
        let state = State::new(&SECTIONS);
        assert_eq!(state.revealed(), INITIALLY_REVEALED);
    }

    #[test]
    fn page_that_fits_reveals_every_section_without_scrolling() {
        // A tall window lays out every section inside the viewport on the
        // first frame, so each sensor reports in layout order.
        let mut state = State::new(&SECTIONS);
        for index in 0..SECTIONS.len() {
            state.update(Message::SectionShown(index));
        }
        assert_eq!(state.revealed(), SECTIONS.len());
    }

    #[test]
    fn showing_a_later_section_reveals_everything_above_it() {
        let mut state = State::new(&SECTIONS);
        state.update(Message::SectionShown(SECTIONS.len() - 1));
        assert_eq!(state.revealed(), SECTIONS.len());
    }

    #[test]
    fn scrolling_back_up_keeps_sections_revealed() {
        let mut state = State::new(&SECTIONS);
        state.update(Message::SectionShown(3));
        assert_eq!(state.revealed(), 4);

        state.update(Message::SectionShown(0));
        assert_eq!(state.revealed(), 4);
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut state = State::new(&SECTIONS);
        state.update(Message::SectionShown(SECTIONS.len()));
        assert_eq!(state.revealed(), INITIALLY_REVEALED);
    }

    #[test]
    fn short_page_starts_fully_revealed() {
        let state = State::new(&SECTIONS[..1]);
        assert_eq!(state.revealed(), 1);
    }

    #[test]
    fn approach_view_renders() {
        let state = State::new(&SECTIONS);
        let _element = state.view();
    }
}
