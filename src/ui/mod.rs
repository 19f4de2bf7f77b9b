/// Gallery widgets
///
/// Every function here is a pure projection of controller state into iced
/// elements. Interaction is reported back as `crate::Message`.

pub mod card;
pub mod grid;
pub mod modal;
pub mod pagination;
pub mod toolbar;

use iced::widget::{container, text, Space};
use iced::{Element, Length};

use crate::Message;

/// Loading indicator, load error and export status, in that priority
pub fn status_line<'a>(
    loading: bool,
    error: Option<&'a str>,
    status: &'a str,
) -> Element<'a, Message> {
    if loading {
        text("Loading memes...").size(14).into()
    } else if let Some(error) = error {
        text(error).size(14).style(text::danger).into()
    } else if !status.is_empty() {
        text(status).size(14).into()
    } else {
        Space::with_height(Length::Fixed(14.0)).into()
    }
}

pub fn no_results<'a>() -> Element<'a, Message> {
    container(text("No memes found. Try a different search.").size(18))
        .center(Length::Fill)
        .into()
}
