//! Portfolio carousel: controller commands, transition timers and the pixel
//! tween that drives the horizontal track.

use std::time::Instant;

use folio_core::carousel::settle_after;
use folio_core::{Easing, ScheduledStep, TransitionMode};
use iced::Task;
use iced::widget::{operation::scroll_to, scrollable::AbsoluteOffset};

use crate::layout;
use crate::messages::{CarouselMessage, Message};
use crate::state::{PortfolioState, State};

/// Pixel drift accepted before the track is snapped back.
const SNAP_TOLERANCE: f32 = 0.5;

pub fn update(
    state: &mut State,
    message: CarouselMessage,
    now: Instant,
) -> Task<Message> {
    let portfolio = &mut state.portfolio;

    let step = match message {
        CarouselMessage::Next => portfolio.controller.next(),
        CarouselMessage::Previous => portfolio.controller.previous(),
        CarouselMessage::GoTo(index) => {
            if index > portfolio.controller.max_index() {
                log::warn!(
                    "Ignoring carousel jump to {} (max {})",
                    index,
                    portfolio.controller.max_index()
                );
                return Task::none();
            }
            portfolio.controller.go_to(index)
        }
        CarouselMessage::TimerFired(ticket) => {
            portfolio.controller.complete(ticket)
        }
        CarouselMessage::TrackScrolled(x) => {
            return snap_back(portfolio, x);
        }
    };

    Task::batch([schedule(step), sync_track(portfolio, now)])
}

/// Re-derive the track width and re-apply the controller's offset without
/// animation.
pub fn handle_resize(state: &mut State, window_width: f32) -> Task<Message> {
    let portfolio = &mut state.portfolio;
    if let Some(items_per_page) = state.viewport.observe(window_width) {
        log::debug!("Viewport now shows {} projects", items_per_page.get());
        portfolio.controller.on_viewport_change(items_per_page);
    }

    portfolio.track_width = layout::track_width(window_width);
    let x = portfolio.tween.jump_to(portfolio.target_scroll_x());
    scroll_track(x)
}

/// The track only moves under the controller. A wheel or trackpad scroll
/// while no tween is running is undone by jumping back to the current
/// offset.
pub fn snap_back(portfolio: &mut PortfolioState, x: f32) -> Task<Message> {
    match drift_correction(portfolio, x) {
        Some(target) => {
            log::trace!("Track drifted to {} while idle, snapping to {}", x, target);
            let x = portfolio.tween.jump_to(target);
            scroll_track(x)
        }
        None => Task::none(),
    }
}

/// Offset the track must return to after it reported `x`, if any.
pub fn drift_correction(portfolio: &PortfolioState, x: f32) -> Option<f32> {
    if portfolio.tween.is_active() {
        return None;
    }
    let target = portfolio.target_scroll_x();
    ((x - target).abs() > SNAP_TOLERANCE).then_some(target)
}

pub fn handle_frame(state: &mut State, now: Instant) -> Task<Message> {
    match state.portfolio.tween.tick(now) {
        Some(x) => scroll_track(x),
        None => Task::none(),
    }
}

/// Move the track toward the controller's current offset, animated or
/// instantly depending on the transition phase.
pub fn sync_track(portfolio: &mut PortfolioState, now: Instant) -> Task<Message> {
    let target = portfolio.target_scroll_x();
    match portfolio.controller.transition_mode() {
        TransitionMode::Instant => {
            let x = portfolio.tween.jump_to(target);
            scroll_track(x)
        }
        TransitionMode::Animated => {
            portfolio.tween.animate_to(
                target,
                portfolio.controller.timings().transition,
                Easing::EaseInOut,
                now,
            );
            Task::none()
        }
    }
}

fn schedule(step: Option<ScheduledStep>) -> Task<Message> {
    match step {
        Some(step) => Task::perform(settle_after(step), |ticket| {
            Message::Carousel(CarouselMessage::TimerFired(ticket))
        }),
        None => Task::none(),
    }
}

fn scroll_track(x: f32) -> Task<Message> {
    scroll_to::<Message>(layout::portfolio_track_id(), AbsoluteOffset { x, y: 0.0 })
}
