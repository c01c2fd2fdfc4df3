// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for switching between the showcase pages.
//!
//! The bar shows the firm's name on the left and one tab per page. The tab
//! of the current page is highlighted and does not emit messages.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

const BRAND: &str = "Meridian Actuarial";

/// Page a tab leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Clients,
    Approach,
    SuccessStories,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Clients, Tab::Approach, Tab::SuccessStories];

    fn label(self) -> &'static str {
        match self {
            Tab::Clients => "Clients",
            Tab::Approach => "About - Approach",
            Tab::SuccessStories => "About - Success Stories",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Tab,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Open(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenClients,
    OpenApproach,
    OpenSuccessStories,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Open(Tab::Clients) => Event::OpenClients,
        Message::Open(Tab::Approach) => Event::OpenApproach,
        Message::Open(Tab::SuccessStories) => Event::OpenSuccessStories,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let tabs = Tab::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, tab| {
            let label = Text::new(tab.label()).size(typography::BODY);
            let tab_button = if tab == ctx.active {
                button(label).style(styles::button::tab_selected)
            } else {
                button(label)
                    .on_press(Message::Open(tab))
                    .style(styles::button::tab)
            };
            row.push(tab_button.padding([spacing::XS, spacing::SM]))
        },
    );

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(Text::new(BRAND).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(tabs);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}
