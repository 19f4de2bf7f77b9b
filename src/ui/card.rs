use iced::widget::{button, column, container, image, text, tooltip};
use iced::{ContentFit, Element, Length};

use crate::media::CardImage;
use crate::state::controller::Intent;
use crate::state::data::ImageRecord;
use crate::Message;

/// Width of a card (and height of its square picture)
pub const CARD_WIDTH: f32 = 220.0;

/// A clickable card: picture, title and attribution
pub fn card<'a>(record: &ImageRecord, picture: Option<&CardImage>) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match picture {
        Some(loaded) => tooltip(
            image(loaded.thumbnail.clone())
                .width(Length::Fixed(CARD_WIDTH))
                .height(Length::Fixed(CARD_WIDTH))
                .content_fit(ContentFit::Cover),
            container(text(loaded.alt.clone()).size(12))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into(),
        None => container(text("Loading...").size(12))
            .center(Length::Fixed(CARD_WIDTH))
            .into(),
    };

    let mut info = column![
        text(record.title.clone()).size(16),
        text(format!("Source: {}", record.source)).size(13),
    ]
    .spacing(4);

    // Placeholder cards also spell out why there is no picture
    if let Some(missing) = picture.filter(|p| p.is_placeholder) {
        info = info.push(text(missing.alt.clone()).size(12).style(text::secondary));
    }

    button(column![thumbnail, info].spacing(8).width(Length::Fixed(CARD_WIDTH)))
        .on_press(Message::Gallery(Intent::OpenCard(record.id)))
        .style(button::secondary)
        .padding(8)
        .into()
}
