// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase pages.
//!
//! The `App` struct owns the state of every page and routes messages to it.
//! Page lifecycle lives here too: the success-stories carousel exists only
//! while its page is shown, so leaving the page always releases the autoplay
//! timer.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::carousel::AutoplayPolicy;
use crate::config::{self, Config};
use crate::content::approach::SECTIONS;
use crate::content::CLIENTS;
use crate::ui::approach;
use crate::ui::logo_ticker;
use crate::ui::success_stories;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    /// Resolved once from `theme_mode`; `System` is not re-detected per frame.
    theme: Theme,
    /// Autoplay settings applied to every newly mounted carousel.
    policy: AutoplayPolicy,
    ticker: logo_ticker::State,
    approach: approach::State,
    /// Mounted only while the success-stories page is shown.
    stories: Option<success_stories::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("stories_mounted", &self.stories.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

const APP_TITLE: &str = "Meridian Actuarial";

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, applies CLI overrides and opens the start screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default settings");
        }

        let mut app = App::from_config(&config);
        if let Some(theme_mode) = flags.theme {
            app.set_theme_mode(theme_mode);
        }
        if let Some(enabled) = flags.autoplay {
            app.policy.enabled = enabled;
        }

        let task = match flags.screen {
            Some(screen) => app.switch_screen(screen),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the application on the clients page from resolved settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.theme(),
            policy: config.autoplay_policy(),
            ticker: logo_ticker::State::new(&CLIENTS, config.ticker_speed()),
            approach: approach::State::new(&SECTIONS),
            stories: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The mounted success-stories page, if it is shown.
    #[must_use]
    pub fn stories(&self) -> Option<&success_stories::State> {
        self.stories.as_ref()
    }

    /// Whether any visible element needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.screen {
            Screen::Clients => true,
            Screen::SuccessStories => self
                .stories
                .as_ref()
                .is_some_and(success_stories::State::is_animating),
            Screen::Approach => false,
        }
    }

    fn title(&self) -> String {
        format!("{} - {APP_TITLE}", self.screen.label())
    }

    /// Switches the theme mode and resolves the theme it stands for.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = mode.theme();
        tracing::debug!(?mode, "theme mode changed");
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(self.is_animating());
        let autoplay_sub = subscription::create_autoplay_subscription(self.stories.as_ref());

        Subscription::batch([event_sub, tick_sub, autoplay_sub])
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            policy: self.policy,
            ticker: &mut self.ticker,
            approach: &mut self.approach,
            stories: &mut self.stories,
        }
    }

    fn switch_screen(&mut self, target: Screen) -> Task<Message> {
        update::handle_screen_switch(&mut self.context(), target, Instant::now())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Approach(approach_message) => {
                update::handle_approach_message(&mut ctx, approach_message)
            }
            Message::SuccessStories(stories_message) => {
                update::handle_stories_message(&mut ctx, stories_message, Instant::now())
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            ticker: &self.ticker,
            approach: &self.approach,
            stories: self.stories.as_ref(),
        })
    }
}
