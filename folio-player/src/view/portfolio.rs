use folio_core::{CarouselSnapshot, Project};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::widgets::{self, CHEVRON_LEFT, CHEVRON_RIGHT};
use crate::layout::{self, CAROUSEL_ARROW_SPACE};
use crate::messages::{CarouselMessage, Message};
use crate::state::State;
use crate::theme::{self, FolioTheme};

const CARD_GUTTER: f32 = 8.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let title = widgets::section_title("Portfolio", "Most recent work");
    let projects = &state.catalog.projects;

    if projects.is_empty() {
        return column![title, widgets::muted("No projects yet.")]
            .spacing(32)
            .align_x(Alignment::Center)
            .into();
    }

    let portfolio = &state.portfolio;
    let snapshot = portfolio.controller.snapshot();
    let card_width = portfolio.card_width();

    let track = scrollable(
        row(projects
            .iter()
            .map(|project| project_card(project, card_width)))
        .height(Length::Shrink),
    )
    .id(layout::portfolio_track_id())
    .on_scroll(|viewport| {
        CarouselMessage::TrackScrolled(viewport.absolute_offset().x).into()
    })
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
    ))
    .width(Length::Fixed(portfolio.track_width));

    let carousel: Element<'_, Message> = row![
        arrow(CHEVRON_LEFT, CarouselMessage::Previous, &snapshot),
        track,
        arrow(CHEVRON_RIGHT, CarouselMessage::Next, &snapshot),
    ]
    .align_y(Alignment::Center)
    .into();

    let mut content = column![title, carousel].spacing(32);

    if snapshot.has_navigation() {
        let dots = row(snapshot
            .dots()
            .map(|dot| {
                let style = if dot.active {
                    theme::Button::DotActive
                } else {
                    theme::Button::Dot
                };
                button(Space::new())
                    .width(Length::Fixed(if dot.active { 28.0 } else { 12.0 }))
                    .height(Length::Fixed(12.0))
                    .on_press(CarouselMessage::GoTo(dot.index).into())
                    .style(style.style())
                    .into()
            })
            .collect::<Vec<_>>())
        .spacing(8);
        content = content.push(container(dots).center_x(Length::Fill));
    }

    content.into()
}

/// Arrow button; hidden when everything fits on one page and inert while a
/// transition is running.
fn arrow<'a>(
    label: &'static str,
    message: CarouselMessage,
    snapshot: &CarouselSnapshot,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = if snapshot.has_navigation() {
        button(text(label).size(28))
            .on_press_maybe(
                (!snapshot.is_transitioning).then(|| message.into()),
            )
            .padding([6, 14])
            .style(theme::Button::Secondary.style())
            .into()
    } else {
        Space::new().into()
    };

    container(content)
        .center_x(Length::Fixed(CAROUSEL_ARROW_SPACE))
        .into()
}

fn project_card(project: &Project, width: f32) -> Element<'_, Message> {
    let initials: String = project
        .title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    let cover = container(text(initials).size(40).color(FolioTheme::ACCENT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(180.0))
        .style(theme::Container::SectionAlt.style());

    let mut actions = row![widgets::link_button("Demo", &project.link)].spacing(8);
    if let Some(repository) = &project.repository {
        actions = actions.push(widgets::secondary_link("Code", repository));
    }

    let card = container(
        column![
            cover,
            text(project.title.as_str()).size(20),
            widgets::muted(project.description.as_str()).size(14),
            widgets::chips(&project.tags),
            actions,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Card.style());

    container(card)
        .padding([0.0, CARD_GUTTER])
        .width(Length::Fixed(width))
        .into()
}
