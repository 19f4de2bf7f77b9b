use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::controller::Intent;
use crate::state::view::DerivedView;
use crate::Message;

/// Previous / "Page X of Y" / Next
pub fn pagination_bar<'a>(view: &DerivedView) -> Element<'a, Message> {
    let previous = button("Previous")
        .on_press_maybe(view.can_go_previous().then_some(Message::Gallery(Intent::PrevPage)))
        .padding(10);
    let next = button("Next")
        .on_press_maybe(view.can_go_next().then_some(Message::Gallery(Intent::NextPage)))
        .padding(10);

    container(
        row![previous, text(view.page_info()).size(14), next]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .center_x(Length::Fill)
    .into()
}
