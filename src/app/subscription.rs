// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Keyboard events are only routed while the success-stories page is shown.
//! The frame tick runs only while something on screen is animating, and the
//! autoplay timer exists only while a carousel is mounted.

use super::{Message, Screen};
use crate::ui::success_stories;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the animation frame tick (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes Left/Right arrow keys to the carousel on the stories page.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::SuccessStories => event::listen_with(|event, status, _window| {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            match event {
                event::Event::Keyboard(key_event) => key_message(&key_event),
                _ => None,
            }
        }),
        Screen::Clients | Screen::Approach => Subscription::none(),
    }
}

/// Maps an arrow key press to carousel navigation.
#[must_use]
pub fn key_message(event: &keyboard::Event) -> Option<Message> {
    let keyboard::Event::KeyPressed { key, .. } = event else {
        return None;
    };
    match key {
        Key::Named(Named::ArrowLeft) => {
            Some(Message::SuccessStories(success_stories::Message::Previous))
        }
        Key::Named(Named::ArrowRight) => {
            Some(Message::SuccessStories(success_stories::Message::Next))
        }
        _ => None,
    }
}

/// Creates the animation frame tick when `animating` is set.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the autoplay subscription of the mounted carousel, if any.
pub fn create_autoplay_subscription(
    stories: Option<&success_stories::State>,
) -> Subscription<Message> {
    stories.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::SuccessStories)
    })
}
