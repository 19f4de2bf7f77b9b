use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::controller::Intent;
use crate::state::view::SortOrder;
use crate::Message;

/// Search box, sort selector, reload and export controls
pub fn toolbar(query: &str, sort: SortOrder, loading: bool) -> Element<'_, Message> {
    let search = text_input("Search AI memes...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .padding(10)
        .width(Length::Fill);

    let sort_picker = pick_list(SortOrder::ALL, Some(sort), |order| {
        Message::Gallery(Intent::SortChanged(order))
    })
    .padding(10);

    row![
        text("AI Memes").size(28),
        search,
        button("Search").on_press(Message::SubmitSearch).padding(10),
        sort_picker,
        button("Reload")
            .on_press_maybe((!loading).then_some(Message::Reload))
            .padding(10),
        button("Export HTML").on_press(Message::ExportPage).padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
