// SPDX-License-Identifier: MPL-2.0
//! Client logo ticker: an endless, non-interactive horizontal scroll.
//!
//! The client strip is drawn on a canvas as many times as needed to cover the
//! visible width. The scroll offset wraps modulo the strip width, so the copy
//! that slides in is pixel-identical to the one that slid out and the loop
//! has no seam.

use crate::config::{DEFAULT_TICKER_SPEED, MAX_TICKER_SPEED, MIN_TICKER_SPEED};
use crate::content::ClientLogo;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::Container;
use iced::{mouse, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

/// Longest frame gap honored in one step; bigger gaps (window hidden, app
/// suspended) are treated as this much time.
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);

/// Scroll speed in pixels per second, clamped to the supported range.
///
/// # Example
///
/// ```
/// use meridian_showcase::ui::logo_ticker::TickerSpeed;
///
/// assert_eq!(TickerSpeed::new(60.0).value(), 60.0);
/// assert_eq!(TickerSpeed::new(0.0).value(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerSpeed(f32);

impl TickerSpeed {
    #[must_use]
    pub fn new(px_per_sec: f32) -> Self {
        if px_per_sec.is_nan() {
            return Self::default();
        }
        Self(px_per_sec.clamp(MIN_TICKER_SPEED, MAX_TICKER_SPEED))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TickerSpeed {
    fn default() -> Self {
        Self(DEFAULT_TICKER_SPEED)
    }
}

/// Moves `offset` forward by `elapsed` at `speed`, wrapping into
/// `[0, strip_width)`.
#[must_use]
pub fn advance(offset: f32, elapsed: Duration, speed: TickerSpeed, strip_width: f32) -> f32 {
    if strip_width <= 0.0 {
        return 0.0;
    }
    (offset + speed.value() * elapsed.as_secs_f32()).rem_euclid(strip_width)
}

/// Width of one full copy of the client strip.
#[must_use]
pub fn strip_width(logos: &[ClientLogo]) -> f32 {
    #[allow(clippy::cast_precision_loss)] // client lists are tiny
    let count = logos.len() as f32;
    count * sizing::TICKER_SLOT
}

/// Scroll position of the ticker.
#[derive(Debug, Clone)]
pub struct State {
    logos: &'static [ClientLogo],
    offset: f32,
    speed: TickerSpeed,
    last_frame: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(logos: &'static [ClientLogo], speed: TickerSpeed) -> Self {
        Self {
            logos,
            offset: 0.0,
            speed,
            last_frame: None,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advances the scroll to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let elapsed = now.saturating_duration_since(last).min(MAX_FRAME_GAP);
            self.offset = advance(self.offset, elapsed, self.speed, strip_width(self.logos));
        }
        self.last_frame = Some(now);
    }

    /// Forgets the last frame time so a resumed ticker does not jump.
    pub fn pause(&mut self) {
        self.last_frame = None;
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let strip = Canvas::new(Strip {
            logos: self.logos,
            offset: self.offset,
        })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TICKER_HEIGHT));

        Container::new(strip)
            .width(Length::Fill)
            .style(styles::container::ticker_band)
            .into()
    }
}

/// Canvas program drawing the repeated client strip.
struct Strip {
    logos: &'static [ClientLogo],
    offset: f32,
}

impl<Message> canvas::Program<Message> for Strip {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = strip_width(self.logos);
        if width <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // One extra copy covers the gap left by the offset.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let copies = (bounds.width / width).ceil() as usize + 1;
        let name_y = bounds.height / 2.0 - typography::TITLE_SM;
        let sector_y = bounds.height / 2.0 + spacing::XXS;

        for copy in 0..copies {
            #[allow(clippy::cast_precision_loss)]
            let origin = copy as f32 * width - self.offset;
            for (index, logo) in self.logos.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let x = origin + index as f32 * sizing::TICKER_SLOT + spacing::LG;
                if x > bounds.width || x + sizing::TICKER_SLOT < 0.0 {
                    continue;
                }

                frame.fill_text(canvas::Text {
                    content: logo.name.to_string(),
                    position: Point::new(x, name_y),
                    color: palette::NAVY_700,
                    size: Pixels(typography::TITLE_SM),
                    ..canvas::Text::default()
                });
                frame.fill_text(canvas::Text {
                    content: logo.sector.to_uppercase(),
                    position: Point::new(x, sector_y),
                    color: Color {
                        a: opacity::OVERLAY_HOVER,
                        ..palette::GRAY_500
                    },
                    size: Pixels(typography::CAPTION),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CLIENTS;

    #[test]
    fn advance_moves_by_speed_times_elapsed() {
        let speed = TickerSpeed::new(40.0);
        let offset = advance(0.0, Duration::from_millis(500), speed, 1000.0);
        assert!((offset - 20.0).abs() < 1e-3);
    }

    #[test]
    fn advance_wraps_at_strip_width() {
        let speed = TickerSpeed::new(100.0);
        let offset = advance(990.0, Duration::from_millis(200), speed, 1000.0);
        assert!((offset - 10.0).abs() < 1e-3);
        assert!(offset < 1000.0);
    }

    #[test]
    fn advance_on_empty_strip_stays_at_zero() {
        assert_eq!(
            advance(12.0, Duration::from_secs(1), TickerSpeed::default(), 0.0),
            0.0
        );
    }

    #[test]
    fn speed_is_clamped_and_nan_safe() {
        assert_eq!(TickerSpeed::new(1.0e6).value(), MAX_TICKER_SPEED);
        assert_eq!(TickerSpeed::new(f32::NAN), TickerSpeed::default());
    }

    #[test]
    fn first_tick_only_records_time() {
        let mut state = State::new(&CLIENTS, TickerSpeed::default());
        state.tick(Instant::now());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn ticks_keep_offset_inside_strip() {
        let mut state = State::new(&CLIENTS, TickerSpeed::new(MAX_TICKER_SPEED));
        let start = Instant::now();
        let width = strip_width(&CLIENTS);
        for frame in 0..2_000u64 {
            state.tick(start + Duration::from_millis(frame * 16));
            assert!(state.offset() >= 0.0 && state.offset() < width);
        }
    }

    #[test]
    fn long_gaps_are_capped() {
        let mut state = State::new(&CLIENTS, TickerSpeed::new(100.0));
        let start = Instant::now();
        state.tick(start);
        state.tick(start + Duration::from_secs(30));
        assert!((state.offset() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn pause_prevents_jump_on_resume() {
        let mut state = State::new(&CLIENTS, TickerSpeed::new(100.0));
        let start = Instant::now();
        state.tick(start);
        state.pause();
        state.tick(start + Duration::from_millis(50));
        assert_eq!(state.offset(), 0.0);
    }
}
