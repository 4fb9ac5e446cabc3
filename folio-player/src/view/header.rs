use folio_core::{MoodIcon, Section};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::widgets::{CLOSE, MENU, MOON, SUN};
use crate::layout::{HEADER_HEIGHT, SECTION_PADDING};
use crate::messages::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let active = state.page.spy.active();

    let brand = button(text(state.catalog.profile.name.as_str()).size(20))
        .on_press(Message::ScrollToTop)
        .style(theme::Button::NavLink.style());

    let mood_icon = match state.mood().icon() {
        MoodIcon::Moon => MOON,
        MoodIcon::Sun => SUN,
    };
    let mood_toggle = button(text(mood_icon).size(18))
        .on_press(Message::ToggleMood)
        .padding(8)
        .style(theme::Button::Icon.style());

    let mut bar = row![brand, Space::new().width(Length::Fill)]
        .align_y(Alignment::Center)
        .spacing(8);

    if state.header.compact {
        let menu_icon = if state.header.menu_open { CLOSE } else { MENU };
        bar = bar.push(mood_toggle).push(
            button(text(menu_icon).size(18))
                .on_press(Message::ToggleMenu)
                .padding(8)
                .style(theme::Button::Icon.style()),
        );
    } else {
        bar = bar
            .push(row(nav_links(active)).spacing(4))
            .push(mood_toggle);
    }

    let style = if state.page.metrics.header_scrolled || state.header.menu_open
    {
        theme::Container::HeaderScrolled
    } else {
        theme::Container::Header
    };

    let mut header = column![
        container(bar)
            .height(Length::Fixed(HEADER_HEIGHT))
            .padding([0.0, SECTION_PADDING])
            .align_y(Alignment::Center)
    ];

    if state.header.compact && state.header.menu_open {
        header = header.push(
            container(column(nav_links(active)).spacing(4))
                .padding([8.0, SECTION_PADDING])
                .width(Length::Fill),
        );
    }

    container(header)
        .width(Length::Fill)
        .style(style.style())
        .into()
}

fn nav_links<'a>(
    active: Section,
) -> impl Iterator<Item = Element<'a, Message>> {
    Section::ALL.into_iter().map(move |section| {
        let style = if section == active {
            theme::Button::NavLinkActive
        } else {
            theme::Button::NavLink
        };
        button(text(section.label()).size(15))
            .on_press(Message::NavigateTo(section))
            .padding([6, 12])
            .style(style.style())
            .into()
    })
}
