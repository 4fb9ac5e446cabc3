//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};

use crate::messages::Message;
use crate::state::State;

/// ~60 FPS for the backdrop and the portfolio track tween.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::window::events().map(|(_id, event)| match event {
            iced::window::Event::Resized(size) => Message::WindowResized(size),
            _ => Message::NoOp,
        }),
        event::listen_with(key_handler),
    ];

    if !state.loading || state.portfolio.tween.is_active() {
        subscriptions
            .push(iced::time::every(FRAME_INTERVAL).map(Message::AnimationFrame));
    }

    Subscription::batch(subscriptions)
}

fn key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::ArrowLeft),
            ..
        }) if status == EventStatus::Ignored => {
            Some(crate::messages::CarouselMessage::Previous.into())
        }
        RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::ArrowRight),
            ..
        }) if status == EventStatus::Ignored => {
            Some(crate::messages::CarouselMessage::Next.into())
        }
        _ => None,
    }
}
