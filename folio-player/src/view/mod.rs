//! Root view composition: loading screen, then the scrolling page over the
//! orbit backdrop with the header overlaid on top.

pub mod about;
pub mod backdrop;
pub mod contact;
pub mod footer;
pub mod header;
pub mod home;
pub mod loading;
pub mod portfolio;
pub mod services;
pub mod skills;
pub mod widgets;

use folio_core::Section;
use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Element, Length};

use crate::layout;
use crate::messages::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    if state.loading {
        return loading::view(state);
    }

    let page = Section::ALL
        .into_iter()
        .fold(column![], |page, section| {
            page.push(section_frame(state, section))
        })
        .push(footer::view(state));

    let page = scrollable(page)
        .id(layout::page_scroll_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![
        backdrop::view(state),
        container(page)
            .style(theme::Container::Page.style())
            .width(Length::Fill)
            .height(Length::Fill),
        header::view(state),
    ];

    if let Some(controls) = footer::scroll_controls(state) {
        layers = layers.push(controls);
    }

    if let Some(notice) = &state.notice {
        layers = layers.push(widgets::notice(&notice.text));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// One section at its fixed layout height. Sections that have not been
/// scrolled into view yet render as empty space of the same height.
fn section_frame(state: &State, section: Section) -> Element<'_, Message> {
    let height = state.page.layout.height(section).unwrap_or_default();

    if !state.page.reveal.is_revealed(section) {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into();
    }

    let (content, style) = match section {
        Section::Home => (home::view(state), theme::Container::Section),
        Section::About => (about::view(state), theme::Container::SectionAlt),
        Section::Skills => (skills::view(state), theme::Container::Section),
        Section::Services => {
            (services::view(state), theme::Container::SectionAlt)
        }
        Section::Portfolio => {
            (portfolio::view(state), theme::Container::Section)
        }
        Section::Contact => (contact::view(state), theme::Container::SectionAlt),
    };

    container(
        container(content)
            .max_width(layout::MAX_CONTENT_WIDTH)
            .padding([layout::HEADER_HEIGHT, layout::SECTION_PADDING]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(height))
    .clip(true)
    .style(style.style())
    .into()
}
