use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::media::CardImage;
use crate::state::controller::Intent;
use crate::state::data::ImageRecord;
use crate::Message;

/// Overlay `record` on top of `base`
///
/// With `lock_background` the overlay is opaque, so the grid behind it
/// receives no scroll or click input. Clicking the backdrop closes the modal;
/// clicks on the content itself are swallowed.
pub fn with_modal<'a>(
    base: Element<'a, Message>,
    record: &ImageRecord,
    picture: Option<&CardImage>,
    date_format: &str,
    lock_background: bool,
) -> Element<'a, Message> {
    let close = Message::Gallery(Intent::CloseModal);

    let picture: Element<'a, Message> = match picture {
        Some(loaded) => image(loaded.full.clone())
            .width(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading...").into(),
    };

    let content = container(
        column![
            row![
                horizontal_space(),
                button(text("Close").size(14))
                    .on_press(close.clone())
                    .style(button::text),
            ],
            picture,
            text(record.modal_caption(date_format)).size(14),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(16)
    .max_width(1000.0)
    .max_height(800.0)
    .style(container::rounded_box);

    let backdrop = center(opaque(content)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    let overlay: Element<'a, Message> = mouse_area(backdrop).on_press(close).into();
    let overlay = if lock_background {
        opaque(overlay)
    } else {
        overlay
    };

    stack![base, overlay].into()
}
