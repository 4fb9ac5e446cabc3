use folio_core::content::{QualificationTab, TimelineEntry};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::widgets;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, FolioTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let catalog = &state.catalog;
    let profile = &catalog.profile;

    let stats = row(catalog.stats.iter().map(|stat| {
        container(
            column![
                text(stat.title.as_str()).size(28).color(FolioTheme::ACCENT),
                widgets::muted(stat.subtitle.as_str()).size(14),
            ]
            .align_x(Alignment::Center)
            .spacing(4),
        )
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
    }))
    .spacing(16);

    let mut intro = column![
        widgets::muted(profile.about.as_str()).size(17),
        stats
    ]
    .spacing(24);
    if let Some(resume) = &profile.resume_link {
        intro = intro.push(widgets::link_button("Download CV", resume));
    }

    let active = state.qualification_tab;
    let tabs = row(QualificationTab::ALL.into_iter().map(|tab| {
        let style = if tab == active {
            theme::Button::TabActive
        } else {
            theme::Button::Tab
        };
        button(text(tab.label()).size(15))
            .on_press(Message::SelectQualificationTab(tab))
            .padding([8, 18])
            .style(style.style())
            .into()
    }))
    .spacing(8);

    let qualifications = column![
        container(tabs).center_x(Length::Fill),
        timeline(catalog.qualifications.entries(active)),
    ]
    .spacing(20);

    column![
        widgets::section_title("About Me", "My introduction"),
        intro,
        qualifications,
    ]
    .spacing(36)
    .into()
}

fn timeline(entries: &[TimelineEntry]) -> Element<'_, Message> {
    let items = entries.iter().map(|entry| {
        let mut header = row![text(entry.title.as_str()).size(18)]
            .spacing(8)
            .align_y(Alignment::Center);
        if entry.current {
            header = header.push(
                container(text("Current").size(11))
                    .padding([2, 8])
                    .style(theme::Container::TagChip.style()),
            );
        }

        container(
            column![
                header,
                widgets::muted(entry.subtitle.as_str()).size(14),
                text(entry.period.as_str()).size(13).color(FolioTheme::ACCENT),
                widgets::muted(entry.description.as_str()).size(14),
                widgets::chips(&entry.tags),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
    });

    column(items).spacing(12).width(Length::Fill).into()
}
