// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen switches are the only place a carousel is mounted or torn down.

use super::{Message, Screen};
use crate::carousel::AutoplayPolicy;
use crate::content::STORIES;
use crate::ui::approach;
use crate::ui::industry::StyleTable;
use crate::ui::logo_ticker;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::success_stories;
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub policy: AutoplayPolicy,
    pub ticker: &'a mut logo_ticker::State,
    pub approach: &'a mut approach::State,
    pub stories: &'a mut Option<success_stories::State>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    let target = match navbar::update(message) {
        NavbarEvent::OpenClients => Screen::Clients,
        NavbarEvent::OpenApproach => Screen::Approach,
        NavbarEvent::OpenSuccessStories => Screen::SuccessStories,
    };
    handle_screen_switch(ctx, target, Instant::now())
}

/// Switches to `target`, tearing down the carousel when leaving the stories
/// page and mounting a fresh one when entering it.
pub fn handle_screen_switch(
    ctx: &mut UpdateContext<'_>,
    target: Screen,
    now: Instant,
) -> Task<Message> {
    let current = *ctx.screen;
    if current == target {
        return Task::none();
    }

    if current == Screen::SuccessStories {
        unmount_stories(ctx.stories);
    }
    if current == Screen::Clients {
        ctx.ticker.pause();
    }

    if target == Screen::SuccessStories {
        match success_stories::State::new(&STORIES, ctx.policy, StyleTable::standard(), now) {
            Ok(state) => {
                tracing::info!(stories = STORIES.len(), "success stories mounted");
                *ctx.stories = Some(state);
            }
            Err(err) => {
                tracing::error!(%err, "cannot mount success stories");
            }
        }
    }

    tracing::info!(from = %current, to = %target, "screen changed");
    *ctx.screen = target;
    Task::none()
}

pub fn handle_stories_message(
    ctx: &mut UpdateContext<'_>,
    message: success_stories::Message,
    now: Instant,
) -> Task<Message> {
    match ctx.stories.as_mut() {
        Some(stories) => stories.update(message, now),
        None => tracing::debug!(?message, "stories message after unmount dropped"),
    }
    Task::none()
}

pub fn handle_approach_message(
    ctx: &mut UpdateContext<'_>,
    message: approach::Message,
) -> Task<Message> {
    ctx.approach.update(message);
    Task::none()
}

/// Advances whatever is animating on the visible screen.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    match *ctx.screen {
        Screen::Clients => ctx.ticker.tick(now),
        Screen::SuccessStories => {
            if let Some(stories) = ctx.stories.as_mut() {
                stories.update(success_stories::Message::Frame(now), now);
            }
        }
        Screen::Approach => {}
    }
    Task::none()
}

fn unmount_stories(stories: &mut Option<success_stories::State>) {
    if let Some(mut state) = stories.take() {
        state.teardown();
        tracing::info!("success stories unmounted");
    }
}
