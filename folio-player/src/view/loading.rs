use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::widgets;
use crate::messages::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let name = state.catalog.profile.name.as_str();

    container(
        column![
            text(name).size(32),
            widgets::muted("Loading...").size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .style(theme::Container::Loading.style())
    .into()
}
