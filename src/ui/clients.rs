// SPDX-License-Identifier: MPL-2.0
//! "Clients" page: a short hero above the scrolling client ticker.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::logo_ticker;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};

const HEADING: &str = "Trusted by the organizations that keep their promises";
const SUMMARY: &str = "Hospital networks, manufacturers, public agencies and universities \
     rely on us to fund and run the benefit programs their people count on.";

/// Renders the page around the given ticker.
pub fn view<'a, Message: 'a>(ticker: &logo_ticker::State) -> Element<'a, Message> {
    let hero = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(HEADING).size(typography::TITLE_LG))
        .push(Text::new(SUMMARY).size(typography::BODY_LG));

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(hero)
        .push(ticker.view());

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}
