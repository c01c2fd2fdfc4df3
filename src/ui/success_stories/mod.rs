// SPDX-License-Identifier: MPL-2.0
//! "About - Success Stories" page: the auto-advancing case-study carousel.
//!
//! The page owns one [`Carousel`] for as long as it is mounted. Mounting
//! starts autoplay; [`State::teardown`] (or dropping the state) releases the
//! timer so no tick can reach a page that is gone.

pub mod slide;

use crate::carousel::{AutoplayHandle, AutoplayPolicy, Carousel, SlideTransition};
use crate::content::Story;
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::industry::StyleTable;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Subscription,
};
use slide::Motion;
use std::time::Instant;

const HEADING: &str = "Success Stories";
const SUBHEADING: &str = "Results our clients can take to their boards.";

/// Messages emitted by the success-stories page.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    /// Tick from the autoplay timer owning this handle.
    AutoplayTick(AutoplayHandle),
    /// Animation frame.
    Frame(Instant),
}

/// Mounted success-stories page.
#[derive(Debug)]
pub struct State {
    stories: &'static [Story],
    styles: StyleTable,
    carousel: Carousel,
    transition: Option<SlideTransition>,
    last_frame: Instant,
}

impl State {
    /// Mounts the page over `stories` and starts autoplay per `policy`.
    ///
    /// Fails with [`Error::EmptyCarousel`](crate::error::Error::EmptyCarousel)
    /// when `stories` is empty.
    pub fn new(
        stories: &'static [Story],
        policy: AutoplayPolicy,
        styles: StyleTable,
        now: Instant,
    ) -> Result<Self> {
        let carousel = Carousel::new(stories.len(), policy)?;
        Ok(Self {
            stories,
            styles,
            carousel,
            transition: None,
            last_frame: now,
        })
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Story currently shown.
    #[must_use]
    pub fn active_story(&self) -> &'static Story {
        &self.stories[self.carousel.active_index()]
    }

    /// Whether a slide transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        let before = self.carousel.active_index();

        match message {
            Message::Next => self.carousel.next(),
            Message::Previous => self.carousel.previous(),
            Message::GoTo(index) => self.carousel.go_to(index),
            Message::AutoplayTick(handle) => {
                self.carousel.on_autoplay_tick(handle);
            }
            Message::Frame(instant) => {
                self.last_frame = instant;
                if self
                    .transition
                    .is_some_and(|transition| transition.is_finished(instant))
                {
                    self.transition = None;
                }
                return;
            }
        }

        if self.carousel.active_index() != before {
            self.transition = Some(SlideTransition::start(self.carousel.direction(), now));
            self.last_frame = now;
        }
    }

    /// Releases the autoplay timer. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.carousel.teardown();
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.carousel.subscription().map(Message::AutoplayTick)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(HEADING).size(typography::TITLE_LG))
            .push(Text::new(SUBHEADING).size(typography::BODY_LG));

        let motion = self
            .transition
            .map(|transition| Motion {
                offset: transition.offset(self.last_frame, sizing::SLIDE_TRAVEL),
                opacity: transition.opacity(self.last_frame),
            })
            .unwrap_or_default();
        let description = slide::describe(self.active_story(), &self.styles);

        let stage = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(arrow_button(icons::chevron_left(), Message::Previous))
            .push(
                Container::new(slide::view(&description, motion))
                    .width(Length::Fill)
                    .clip(true),
            )
            .push(arrow_button(icons::chevron_right(), Message::Next));

        let content = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(stage)
            .push(self.dots());

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .into()
    }

    fn dots(&self) -> Element<'_, Message> {
        let active = self.carousel.active_index();
        let dots = (0..self.stories.len()).fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, index| {
                row.push(
                    button(Text::new(""))
                        .width(Length::Fixed(sizing::CAROUSEL_DOT))
                        .height(Length::Fixed(sizing::CAROUSEL_DOT))
                        .padding(0)
                        .on_press(Message::GoTo(index))
                        .style(styles::button::carousel_dot(index == active)),
                )
            },
        );

        let counter = Text::new(format!("{} / {}", active + 1, self.stories.len()))
            .size(typography::CAPTION);

        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(dots)
            .push(counter)
            .into()
    }
}

fn arrow_button<'a>(icon: iced::widget::Svg<'static>, message: Message) -> Element<'a, Message> {
    button(
        Container::new(icons::tinted(
            icons::sized(icon, sizing::ICON_MD),
            iced::Color::WHITE,
        ))
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::CAROUSEL_ARROW))
    .height(Length::Fixed(sizing::CAROUSEL_ARROW))
    .padding(0)
    .on_press(message)
    .style(styles::button::carousel_arrow)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Direction;
    use crate::content::{Industry, Metrics, STORIES};
    use crate::error::Error;
    use std::time::Duration;

    static EMPTY: [Story; 0] = [];

    static SINGLE: [Story; 1] = [Story {
        title: "Only story",
        description: "Nothing else to show.",
        details: &["single"],
        outcome: None,
        industry: Industry::FinancialServices,
        metrics: Metrics {
            percentage: "1",
            label: "story",
            change: "n/a",
        },
    }];

    fn mounted() -> State {
        State::new(
            &STORIES,
            AutoplayPolicy::default(),
            StyleTable::standard(),
            Instant::now(),
        )
        .expect("stories are not empty")
    }

    #[test]
    fn mounting_over_no_stories_fails() {
        let result = State::new(
            &EMPTY,
            AutoplayPolicy::default(),
            StyleTable::standard(),
            Instant::now(),
        );
        assert!(matches!(result, Err(Error::EmptyCarousel)));
    }

    #[test]
    fn single_story_navigation_never_animates() {
        let mut state = State::new(
            &SINGLE,
            AutoplayPolicy::default(),
            StyleTable::standard(),
            Instant::now(),
        )
        .expect("one story");
        state.update(Message::Next, Instant::now());
        assert_eq!(state.active_story().title, "Only story");
        assert!(!state.is_animating());
    }

    #[test]
    fn navigation_starts_a_directional_transition() {
        let mut state = mounted();
        let now = Instant::now();
        state.update(Message::Previous, now);

        assert_eq!(state.carousel().active_index(), STORIES.len() - 1);
        assert_eq!(state.carousel().direction(), Direction::Backward);
        assert!(state.is_animating());
    }

    #[test]
    fn frame_after_duration_ends_transition() {
        let mut state = mounted();
        let now = Instant::now();
        state.update(Message::Next, now);
        state.update(
            Message::Frame(now + SlideTransition::DURATION + Duration::from_millis(1)),
            now,
        );
        assert!(!state.is_animating());
    }

    #[test]
    fn dot_click_jumps_to_story() {
        let mut state = mounted();
        state.update(Message::GoTo(2), Instant::now());
        assert_eq!(state.active_story(), &STORIES[2]);
    }

    #[test]
    fn autoplay_ticks_advance_until_teardown() {
        let mut state = mounted();
        let handle = state
            .carousel()
            .autoplay_handle()
            .expect("autoplay enabled by default");

        state.update(Message::AutoplayTick(handle), Instant::now());
        assert_eq!(state.carousel().active_index(), 1);

        state.teardown();
        state.update(Message::AutoplayTick(handle), Instant::now());
        assert_eq!(state.carousel().active_index(), 1);
    }

    #[test]
    fn view_renders_mid_transition() {
        let mut state = mounted();
        let now = Instant::now();
        state.update(Message::Next, now);
        state.update(Message::Frame(now + Duration::from_millis(100)), now);
        let _element = state.view();
    }
}
