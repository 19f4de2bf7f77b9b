use iced::widget::{container, scrollable};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::card::card;
use crate::media::cache::ImageCache;
use crate::state::view::DerivedView;
use crate::Message;

/// Scrollable that holds the card grid; target of scroll-to-top
pub fn grid_scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery-grid")
}

/// Cards of the current page, wrapped into as many columns as fit
pub fn grid<'a>(view: &DerivedView, images: &ImageCache) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = view
        .records
        .iter()
        .map(|record| container(card(record, images.get(record.id))).padding(6).into())
        .collect();

    scrollable(container(Wrap::with_elements(cards)).width(Length::Fill))
        .id(grid_scroll_id())
        .height(Length::Fill)
        .into()
}
