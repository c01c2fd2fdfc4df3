// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen is rendered below the navbar.

use super::{Message, Screen};
use crate::ui::approach;
use crate::ui::clients;
use crate::ui::logo_ticker;
use crate::ui::navbar::{self, Tab, ViewContext as NavbarViewContext};
use crate::ui::success_stories;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub ticker: &'a logo_ticker::State,
    pub approach: &'a approach::State,
    pub stories: Option<&'a success_stories::State>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Clients => clients::view(ctx.ticker),
        Screen::Approach => ctx.approach.view().map(Message::Approach),
        Screen::SuccessStories => view_stories(ctx.stories),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        active: tab_for(ctx.screen),
    })
    .map(Message::Navbar);

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tab_for(screen: Screen) -> Tab {
    match screen {
        Screen::Clients => Tab::Clients,
        Screen::Approach => Tab::Approach,
        Screen::SuccessStories => Tab::SuccessStories,
    }
}

fn view_stories(stories: Option<&success_stories::State>) -> Element<'_, Message> {
    if let Some(state) = stories {
        state.view().map(Message::SuccessStories)
    } else {
        // Only reachable if mounting failed.
        Container::new(Text::new("No success stories to show"))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
