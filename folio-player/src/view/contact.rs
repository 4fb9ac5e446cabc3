use folio_core::{ContactField, SubmissionStatus};
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use super::widgets;
use crate::layout;
use crate::messages::{ContactMessage, Message};
use crate::state::State;
use crate::theme::{self, FolioTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let methods = column(state.catalog.contact_methods.iter().map(|method| {
        container(
            column![
                text(method.title.as_str()).size(16),
                widgets::muted(method.info.as_str()).size(14),
                button(text(method.action.as_str()).size(14))
                    .on_press(widgets::link_message(&method.link))
                    .padding(0)
                    .style(theme::Button::NavLink.style()),
            ]
            .spacing(4),
        )
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
    }))
    .spacing(12);

    column![
        widgets::section_title("Contact Me", "Get in touch"),
        row![
            column![text("Talk to me").size(20), methods]
                .spacing(16)
                .width(Length::FillPortion(2)),
            form(state),
        ]
        .spacing(32),
    ]
    .spacing(32)
    .into()
}

fn form(state: &State) -> Element<'_, Message> {
    let form = &state.contact.form;

    let fields = ContactField::ALL.into_iter().map(|field| {
        let error = form.error(field);
        let placeholder = match field {
            ContactField::Name => "Insert your name",
            ContactField::Email => "Insert your email",
            ContactField::Message => "Write your project",
        };

        let input = text_input(placeholder, form.value(field))
            .id(layout::contact_input_id(field))
            .on_input(move |value| ContactMessage::Input(field, value).into())
            .on_submit(ContactMessage::FieldSubmitted(field).into())
            .padding(14)
            .size(15)
            .style(theme::input_style(error.is_some()));

        let mut block = column![text(field.label()).size(13), input].spacing(6);
        if let Some(error) = error {
            block = block.push(text(error).size(13).color(FolioTheme::ERROR));
        }
        block.into()
    });

    let submitting = form.is_submitting();
    let submit = button(
        text(if submitting { "Sending..." } else { "Send Message" }).size(15),
    )
    .on_press_maybe((!submitting).then_some(ContactMessage::Submit.into()))
    .padding([12, 24])
    .style(theme::Button::Primary.style());

    let mut body = column(fields).spacing(16).push(submit);

    if let Some(message) = form.status().message() {
        let color = match form.status() {
            SubmissionStatus::Sent => FolioTheme::SUCCESS,
            SubmissionStatus::Failed(_) => FolioTheme::ERROR,
            SubmissionStatus::Sending | SubmissionStatus::Idle => {
                FolioTheme::ACCENT
            }
        };
        body = body.push(text(message).size(14).color(color));
    }

    container(body).width(Length::FillPortion(3)).into()
}
