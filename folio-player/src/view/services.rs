use folio_core::content::Service;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use super::widgets;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, FolioTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let cards = row(state.catalog.services.iter().map(|service| {
        service_card(service, state.expanded_services.contains(&service.id))
    }))
    .spacing(16);

    column![
        widgets::section_title("Services", "What I offer"),
        cards
    ]
    .spacing(32)
    .into()
}

fn service_card(service: &Service, expanded: bool) -> Element<'_, Message> {
    let toggle_label = if expanded { "Show less" } else { "View more" };

    let mut body = column![
        text(service.title.as_str()).size(20),
        widgets::muted(service.description.as_str()).size(14),
    ]
    .spacing(10);

    if expanded {
        body = body.push(
            column(service.details.iter().map(|detail| {
                row![
                    text("✓").color(FolioTheme::ACCENT),
                    widgets::muted(detail.as_str()).size(14)
                ]
                .spacing(8)
                .into()
            }))
            .spacing(6),
        );
    }

    body = body.push(
        button(text(toggle_label).size(14))
            .on_press(Message::ToggleService(service.id.clone()))
            .style(theme::Button::NavLink.style()),
    );

    container(body)
        .padding(20)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
}
