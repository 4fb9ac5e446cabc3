use folio_core::{ScrollMetrics, Section};
use iced::widget::{operation::scroll_to, scrollable};
use iced::{Size, Task};

use super::delay_message;
use crate::layout::{self, HEADER_HEIGHT};
use crate::messages::Message;
use crate::state::State;

pub fn finish_loading(state: &mut State) -> Task<Message> {
    state.loading = false;
    reveal_visible(state);
    log::debug!("Loading screen dismissed");
    delay_message(state.hero.start_delay(), Message::TypewriterStep)
}

pub fn handle_resize(state: &mut State, size: Size) -> Task<Message> {
    state.window_size = size;
    let compact = state.viewport.breakpoints().is_compact_nav(size.width);
    if !compact && state.header.menu_open {
        log::debug!("Closing mobile menu after widening to {}", size.width);
        state.header.menu_open = false;
    }
    state.header.compact = compact;
    Task::none()
}

pub fn handle_scrolled(
    state: &mut State,
    viewport: scrollable::Viewport,
) -> Task<Message> {
    let page = &mut state.page;
    page.scroll_y = viewport.absolute_offset().y;
    page.viewport_height = viewport.bounds().height;
    page.metrics = ScrollMetrics::compute(
        page.scroll_y,
        viewport.content_bounds().height,
        page.viewport_height,
    );
    page.spy.update(page.scroll_y, &page.layout);

    if !state.loading {
        reveal_visible(state);
    }
    Task::none()
}

pub fn navigate_to(state: &mut State, section: Section) -> Task<Message> {
    state.header.menu_open = false;
    state.page.spy.select(section);

    let y = state.page.layout.target_offset(section, HEADER_HEIGHT);
    log::debug!("Navigating to {:?} at y={}", section, y);
    scroll_page(y)
}

pub fn scroll_to_top(state: &mut State) -> Task<Message> {
    state.page.spy.select(Section::Home);
    scroll_page(0.0)
}

fn reveal_visible(state: &mut State) {
    let page = &mut state.page;
    let revealed =
        page.reveal
            .observe(page.scroll_y, page.viewport_height, &page.layout);
    if !revealed.is_empty() {
        log::debug!("Revealed sections: {:?}", revealed);
    }
}

fn scroll_page(y: f32) -> Task<Message> {
    scroll_to::<Message>(
        layout::page_scroll_id(),
        scrollable::AbsoluteOffset { x: 0.0, y },
    )
}
