use folio_core::content::{Skill, SkillCategory};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::widgets;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, FolioTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let active = state.skills_tab;

    let tabs = row(SkillCategory::ALL.into_iter().map(|category| {
        let style = if category == active {
            theme::Button::TabActive
        } else {
            theme::Button::Tab
        };
        button(text(category.label()).size(15))
            .on_press(Message::SelectSkillTab(category))
            .padding([8, 18])
            .style(style.style())
            .into()
    }))
    .spacing(8);

    let cards = row(state
        .catalog
        .skills
        .in_category(active)
        .map(skill_card))
    .spacing(16)
    .wrap();

    column![
        widgets::section_title("Skills", "My technical level"),
        container(tabs).center_x(Length::Fill),
        cards,
    ]
    .spacing(32)
    .into()
}

fn skill_card(skill: &Skill) -> Element<'_, Message> {
    let level_color = FolioTheme::skill_color(skill.level);

    container(
        column![
            row![
                text(skill.name.as_str()).size(17).width(Length::Fill),
                text(format!("{}%", skill.percentage)).size(14),
            ]
            .align_y(Alignment::Center),
            text(skill.level.label()).size(12).color(level_color),
            widgets::bar(f32::from(skill.percentage) / 100.0, 6.0),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(260.0))
    .style(theme::Container::Card.style())
    .into()
}
