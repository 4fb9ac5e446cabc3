use folio_core::Section;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::widgets::{self, ARROW_UP};
use crate::layout::SECTION_PADDING;
use crate::messages::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let catalog = &state.catalog;

    let links = row(Section::ALL.into_iter().map(|section| {
        button(text(section.label()).size(14))
            .on_press(Message::NavigateTo(section))
            .style(theme::Button::NavLink.style())
            .into()
    }))
    .spacing(4)
    .wrap();

    let socials = row(catalog.socials.iter().map(|social| {
        widgets::secondary_link(social.title.as_str(), &social.url)
    }))
    .spacing(8);

    let height = state.page.layout.trailing();

    container(
        column![
            text(catalog.profile.name.as_str()).size(24),
            widgets::muted(catalog.profile.role.as_str()).size(14),
            links,
            socials,
            widgets::muted(catalog.profile.copyright.as_str()).size(12),
        ]
        .spacing(14)
        .align_x(Alignment::Center),
    )
    .padding(SECTION_PADDING)
    .center_x(Length::Fill)
    .height(Length::Fixed(height))
    .into()
}

/// Floating scroll-to-top button with the page progress underneath. Only
/// shown once the page has been scrolled far enough.
pub fn scroll_controls(state: &State) -> Option<Element<'_, Message>> {
    let metrics = state.page.metrics;
    if !metrics.show_scroll_to_top {
        return None;
    }

    let control = column![
        button(text(ARROW_UP).size(18))
            .on_press(Message::ScrollToTop)
            .padding([8, 14])
            .style(theme::Button::Primary.style()),
        container(widgets::bar(metrics.progress_percent / 100.0, 3.0))
            .width(Length::Fixed(44.0)),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    Some(
        container(control)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End)
            .padding(SECTION_PADDING)
            .into(),
    )
}
