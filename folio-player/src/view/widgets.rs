//! Small building blocks shared across sections.

use folio_core::Section;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use crate::messages::Message;
use crate::theme::{self, FolioTheme};

pub const CHEVRON_LEFT: &str = "‹";
pub const CHEVRON_RIGHT: &str = "›";
pub const ARROW_UP: &str = "↑";
pub const MOON: &str = "☾";
pub const SUN: &str = "☀";
pub const MENU: &str = "☰";
pub const CLOSE: &str = "✕";

/// Message for following a link: in-page anchors scroll, anything else is
/// copied to the clipboard.
pub fn link_message(target: &str) -> Message {
    match Section::from_anchor(target) {
        Some(section) if target.starts_with('#') => Message::NavigateTo(section),
        _ => Message::CopyLink(target.to_string()),
    }
}

pub fn section_title<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(36),
        text(subtitle)
            .size(16)
            .style(|theme| text::Style {
                color: Some(FolioTheme::muted_text(theme)),
            }),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

pub fn muted<'a>(content: impl text::IntoFragment<'a>) -> text::Text<'a> {
    text(content).style(|theme| text::Style {
        color: Some(FolioTheme::muted_text(theme)),
    })
}

pub fn link_button<'a>(label: &'a str, target: &str) -> Element<'a, Message> {
    button(text(label).size(15))
        .on_press(link_message(target))
        .padding([10, 20])
        .style(theme::Button::Primary.style())
        .into()
}

pub fn secondary_link<'a>(label: &'a str, target: &str) -> Element<'a, Message> {
    button(text(label).size(15))
        .on_press(link_message(target))
        .padding([10, 20])
        .style(theme::Button::Secondary.style())
        .into()
}

pub fn chips<'a>(tags: &'a [String]) -> Element<'a, Message> {
    row(tags.iter().map(|tag| {
        container(text(tag.as_str()).size(12))
            .padding([3, 10])
            .style(theme::Container::TagChip.style())
            .into()
    }))
    .spacing(6)
    .wrap()
    .into()
}

/// Horizontal bar filled to `fraction` (0..=1).
pub fn bar<'a>(fraction: f32, height: f32) -> Element<'a, Message> {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * 1000.0).round() as u16;
    let rest = 1000 - filled;

    let mut track = row![];
    if filled > 0 {
        track = track.push(
            container(Space::new().height(Length::Fixed(height)))
                .width(Length::FillPortion(filled))
                .style(theme::Container::ProgressFill.style()),
        );
    }
    if rest > 0 {
        track = track.push(Space::new().width(Length::FillPortion(rest)));
    }

    container(track)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(theme::Container::ProgressTrack.style())
        .into()
}

pub fn notice<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        container(text(message).size(14))
            .padding([10, 16])
            .style(theme::Container::Notice.style()),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding(Padding::ZERO.bottom(32))
    .into()
}
