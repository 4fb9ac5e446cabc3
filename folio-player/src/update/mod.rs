//! Message handling. Handlers mutate [`State`] and return follow-up tasks;
//! every timer they arm carries enough context to be ignored when stale.

pub mod carousel;
pub mod contact;
pub mod page;

use std::time::{Duration, Instant};

use iced::Task;

use crate::messages::{CarouselMessage, Message};
use crate::state::State;

/// How long the "link copied" notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    if !matches!(
        message,
        Message::AnimationFrame(_)
            | Message::PageScrolled(_)
            | Message::Carousel(CarouselMessage::TrackScrolled(_))
            | Message::NoOp
    ) {
        log::trace!("update: {}", message.name());
    }

    match message {
        Message::NoOp => Task::none(),

        Message::LoadingFinished => page::finish_loading(state),
        Message::TypewriterStep => {
            let delay = state.hero.advance();
            delay_message(delay, Message::TypewriterStep)
        }

        Message::WindowResized(size) => {
            let page_task = page::handle_resize(state, size);
            let carousel_task = carousel::handle_resize(state, size.width);
            Task::batch([page_task, carousel_task])
        }
        Message::EscapePressed => {
            if state.header.menu_open {
                state.header.menu_open = false;
            }
            Task::none()
        }
        Message::AnimationFrame(now) => {
            state.backdrop.tick(now);
            carousel::handle_frame(state, now)
        }

        Message::PageScrolled(viewport) => {
            page::handle_scrolled(state, viewport)
        }
        Message::NavigateTo(section) => page::navigate_to(state, section),
        Message::ScrollToTop => page::scroll_to_top(state),
        Message::ToggleMenu => {
            state.header.menu_open = !state.header.menu_open;
            Task::none()
        }

        Message::ToggleMood => {
            let mood = state.mood.toggle();
            log::info!("Mood switched to {}", mood);
            Task::none()
        }
        Message::SelectQualificationTab(tab) => {
            state.qualification_tab = tab;
            Task::none()
        }
        Message::SelectSkillTab(category) => {
            state.skills_tab = category;
            Task::none()
        }
        Message::ToggleService(id) => {
            if !state.expanded_services.remove(&id) {
                state.expanded_services.insert(id);
            }
            Task::none()
        }
        Message::CopyLink(url) => {
            log::debug!("Copying link {}", url);
            let id = state.show_notice(format!("Link copied: {url}"));
            Task::batch([
                iced::clipboard::write(url),
                delay_message(NOTICE_TTL, Message::DismissNotice(id)),
            ])
        }
        Message::DismissNotice(id) => {
            state.dismiss_notice(id);
            Task::none()
        }

        Message::Carousel(message) => {
            carousel::update(state, message, Instant::now())
        }
        Message::Contact(message) => contact::update(state, message),
    }
}

/// Emit `message` after `delay`.
pub(crate) fn delay_message(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |()| message)
}
