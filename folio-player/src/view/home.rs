use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Length};

use super::widgets;
use crate::messages::Message;
use crate::state::State;
use crate::theme::FolioTheme;

pub fn view(state: &State) -> Element<'_, Message> {
    let profile = &state.catalog.profile;

    let typed = text(state.hero.visible())
        .size(52)
        .color(FolioTheme::ACCENT);

    let socials = row(state.catalog.socials.iter().map(|social| {
        widgets::secondary_link(social.title.as_str(), &social.url)
    }))
    .spacing(8)
    .wrap();

    column![
        Space::new().height(Length::Fixed(48.0)),
        widgets::muted("Hi, I'm").size(20),
        typed,
        text(profile.role.as_str()).size(24),
        widgets::muted(profile.introduction.as_str()).size(17),
        row![
            widgets::link_button("Say Hello", "#contact"),
            widgets::secondary_link("Scroll down", "#about"),
        ]
        .spacing(12),
        socials,
    ]
    .spacing(18)
    .max_width(720)
    .align_x(Alignment::Start)
    .into()
}
