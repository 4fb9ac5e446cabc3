use std::sync::Arc;

use folio_core::contact::form::SUCCESS_MESSAGE_TTL;
use folio_core::{ContactField, SubmitError};
use iced::Task;
use iced::widget::operation::focus;

use super::delay_message;
use crate::layout;
use crate::messages::{ContactMessage, Message};
use crate::state::State;

pub fn update(state: &mut State, message: ContactMessage) -> Task<Message> {
    let contact = &mut state.contact;

    match message {
        ContactMessage::Input(field, value) => {
            if let Some(previous) = contact.focused
                && previous != field
            {
                contact.form.on_blur(previous);
            }
            contact.focused = Some(field);
            contact.form.on_input(field, value);
            Task::none()
        }
        ContactMessage::FieldSubmitted(field) => {
            contact.form.on_blur(field);
            match next_field(field) {
                Some(next) => {
                    contact.focused = Some(next);
                    focus::<Message>(layout::contact_input_id(next))
                }
                None => {
                    contact.focused = None;
                    Task::done(Message::Contact(ContactMessage::Submit))
                }
            }
        }
        ContactMessage::Submit => {
            contact.focused = None;
            let Some(submission) = contact.form.begin_submit() else {
                return Task::none();
            };

            match contact.submitter.clone() {
                Some(submitter) => Task::perform(
                    async move { submitter.submit(&submission).await },
                    |result| {
                        Message::Contact(ContactMessage::Submitted(
                            result.map_err(Arc::new),
                        ))
                    },
                ),
                None => Task::done(Message::Contact(
                    ContactMessage::Submitted(Err(Arc::new(
                        SubmitError::NotConfigured,
                    ))),
                )),
            }
        }
        ContactMessage::Submitted(result) => {
            let outcome = result.as_ref().map(|_| ()).map_err(Arc::as_ref);
            let sent = contact.form.finish_submit(outcome);
            if sent {
                delay_message(
                    SUCCESS_MESSAGE_TTL,
                    Message::Contact(ContactMessage::ClearStatus),
                )
            } else {
                Task::none()
            }
        }
        ContactMessage::ClearStatus => {
            contact.form.clear_status();
            Task::none()
        }
    }
}

fn next_field(field: ContactField) -> Option<ContactField> {
    match field {
        ContactField::Name => Some(ContactField::Email),
        ContactField::Email => Some(ContactField::Message),
        ContactField::Message => None,
    }
}
