use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::state::{CarouselState, Phase};
use super::types::{
    CarouselSnapshot, CarouselTimings, ScheduledStep, TransitionMode,
    TransitionTicket, WrapDirection,
};
use crate::viewport::ItemsPerPage;

static NEXT_CAROUSEL_ID: AtomicU64 = AtomicU64::new(1);

/// Owns [`CarouselState`] and is the only thing allowed to mutate it.
#[derive(Debug)]
pub struct CarouselController {
    id: u64,
    state: CarouselState,
    timings: CarouselTimings,
    generation: u64,
    mounted: bool,
    publisher: watch::Sender<CarouselSnapshot>,
}

impl CarouselController {
    /// Mount a carousel over `item_count` items. The viewport classifier's
    /// first reading supplies the initial page size.
    pub fn new(
        item_count: usize,
        items_per_page: ItemsPerPage,
        timings: CarouselTimings,
    ) -> Self {
        let state = CarouselState::new(item_count, items_per_page);
        let (publisher, _) = watch::channel(state.snapshot());
        let id = NEXT_CAROUSEL_ID.fetch_add(1, Ordering::Relaxed);

        log::debug!(
            "Carousel {} mounted: {} items, {} per page, max_index={}",
            id,
            item_count,
            items_per_page.get(),
            state.max_index()
        );

        Self {
            id,
            state,
            timings,
            generation: 0,
            mounted: true,
            publisher,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn timings(&self) -> CarouselTimings {
        self.timings
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn max_index(&self) -> usize {
        self.state.max_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn offset_percent(&self) -> f32 {
        self.state.offset_percent()
    }

    pub fn transition_mode(&self) -> TransitionMode {
        self.state.transition_mode()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.state.snapshot()
    }

    /// Observe every state change. The receiver always holds the latest
    /// snapshot; intermediate values may be skipped by slow readers.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.publisher.subscribe()
    }

    /// Advance one item, wrapping from the last page to the first.
    /// Returns `None` when the request was dropped.
    pub fn next(&mut self) -> Option<ScheduledStep> {
        if !self.accepts_navigation("next") {
            return None;
        }

        let current = self.state.current_index;
        let (target, wrap) = if current < self.state.max_index {
            (current + 1, None)
        } else {
            (0, Some(WrapDirection::Forward))
        };

        Some(self.begin_transition(target, wrap))
    }

    /// Step back one item, wrapping from the first page to the last.
    pub fn previous(&mut self) -> Option<ScheduledStep> {
        if !self.accepts_navigation("previous") {
            return None;
        }

        let current = self.state.current_index;
        let (target, wrap) = if current > 0 {
            (current - 1, None)
        } else {
            (self.state.max_index, Some(WrapDirection::Backward))
        };

        Some(self.begin_transition(target, wrap))
    }

    /// Jump to `index`, which must be within `0..=max_index`.
    ///
    /// Out-of-range indices are a caller bug: debug builds panic, release
    /// builds clamp to `max_index`.
    pub fn go_to(&mut self, index: usize) -> Option<ScheduledStep> {
        debug_assert!(
            index <= self.state.max_index,
            "carousel index {} out of range 0..={}",
            index,
            self.state.max_index
        );
        if !self.accepts_navigation("go_to") {
            return None;
        }

        let index = index.min(self.state.max_index);
        Some(self.begin_transition(index, None))
    }

    /// Apply a new page size from the viewport classifier.
    ///
    /// Ignores the transition guard: a resize can land in the
    /// middle of a transition. The in-flight ticket stays valid and the next
    /// completion re-derives the offset from the clamped index.
    pub fn on_viewport_change(&mut self, items_per_page: ItemsPerPage) {
        if !self.mounted {
            return;
        }
        if items_per_page == self.state.items_per_page {
            return;
        }

        let before = self.state.current_index;
        self.state.set_items_per_page(items_per_page);

        log::debug!(
            "Carousel {} viewport change: {} per page, max_index={}, index {} -> {}",
            self.id,
            items_per_page.get(),
            self.state.max_index,
            before,
            self.state.current_index
        );

        self.publish();
    }

    /// Report that the timer for `ticket` fired.
    ///
    /// Completing the animated phase of a wrap moves into the settling phase
    /// and returns its timer; every other valid completion returns to idle.
    /// Stale tickets are ignored.
    pub fn complete(
        &mut self,
        ticket: TransitionTicket,
    ) -> Option<ScheduledStep> {
        if !self.mounted {
            log::debug!(
                "Carousel {} ignoring completion after unmount",
                self.id
            );
            return None;
        }

        match self.state.phase {
            Phase::Transitioning {
                ticket: in_flight,
                wrap: Some(direction),
            } if in_flight == ticket => {
                let ticket = self.issue_ticket();
                self.state.phase = Phase::Settling { ticket };
                log::debug!(
                    "Carousel {} settling after {:?} wrap at index {}",
                    self.id,
                    direction,
                    self.state.current_index
                );
                self.publish();
                Some(ScheduledStep {
                    ticket,
                    after: self.timings.settle,
                })
            }
            Phase::Transitioning {
                ticket: in_flight,
                wrap: None,
            }
            | Phase::Settling { ticket: in_flight }
                if in_flight == ticket =>
            {
                self.state.phase = Phase::Idle;
                self.publish();
                None
            }
            _ => {
                log::debug!(
                    "Carousel {} ignoring stale completion {:?}",
                    self.id,
                    ticket
                );
                None
            }
        }
    }

    /// Tear the carousel down. Pending timers become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.state.phase = Phase::Idle;
        log::debug!("Carousel {} unmounted", self.id);
    }

    fn accepts_navigation(&self, op: &str) -> bool {
        if !self.mounted {
            log::debug!("Carousel {} dropped {} after unmount", self.id, op);
            return false;
        }
        if self.state.is_transitioning() {
            log::debug!(
                "Carousel {} dropped {} while transitioning",
                self.id,
                op
            );
            return false;
        }
        true
    }

    fn begin_transition(
        &mut self,
        target: usize,
        wrap: Option<WrapDirection>,
    ) -> ScheduledStep {
        let ticket = self.issue_ticket();
        let from = self.state.current_index;
        self.state.current_index = target;
        self.state.phase = Phase::Transitioning { ticket, wrap };

        log::debug!(
            "Carousel {} transition {} -> {} (wrap={:?})",
            self.id,
            from,
            target,
            wrap
        );

        self.publish();
        ScheduledStep {
            ticket,
            after: self.timings.transition,
        }
    }

    fn issue_ticket(&mut self) -> TransitionTicket {
        self.generation += 1;
        TransitionTicket {
            carousel: self.id,
            generation: self.generation,
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.snapshot());
    }
}

/// Sleep for the step's delay and hand its ticket back, ready to be passed
/// to [`CarouselController::complete`].
pub async fn settle_after(step: ScheduledStep) -> TransitionTicket {
    tokio::time::sleep(step.after).await;
    step.ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn controller(items: usize, per_page: ItemsPerPage) -> CarouselController {
        CarouselController::new(items, per_page, CarouselTimings::default())
    }

    /// Run a step and any follow-up step to completion.
    fn settle(
        carousel: &mut CarouselController,
        step: Option<ScheduledStep>,
    ) {
        let mut pending = step;
        while let Some(step) = pending {
            pending = carousel.complete(step.ticket);
        }
    }

    #[test]
    fn next_advances_and_blocks_until_complete() {
        let mut carousel = controller(7, ItemsPerPage::Three);
        let step = carousel.next().expect("first next accepted");
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_transitioning());
        assert_eq!(step.after, Duration::from_millis(500));

        assert!(carousel.complete(step.ticket).is_none());
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn forward_wrap_passes_through_settling() {
        let mut carousel = controller(7, ItemsPerPage::Three);
        let step = carousel.go_to(4);
        settle(&mut carousel, step);

        let step = carousel.next().expect("wrap accepted");
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.transition_mode(), TransitionMode::Animated);

        let settle_step =
            carousel.complete(step.ticket).expect("settle step scheduled");
        assert_eq!(settle_step.after, Duration::from_millis(50));
        assert!(matches!(carousel.state().phase(), Phase::Settling { .. }));
        assert_eq!(carousel.transition_mode(), TransitionMode::Instant);
        assert!(carousel.next().is_none(), "settling still blocks");

        assert!(carousel.complete(settle_step.ticket).is_none());
        assert_eq!(carousel.state().phase(), Phase::Idle);
        assert_eq!(carousel.offset_percent(), 0.0);
    }

    #[test]
    fn backward_wrap_lands_on_max_index() {
        let mut carousel = controller(5, ItemsPerPage::Two);
        let step = carousel.previous();
        assert_eq!(carousel.current_index(), 3);
        let follow_up = carousel.complete(step.expect("accepted").ticket);
        assert!(follow_up.is_some(), "wrap schedules a settle phase");
        settle(&mut carousel, follow_up);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut carousel = controller(7, ItemsPerPage::One);
        let first = carousel.next().expect("accepted");
        carousel.complete(first.ticket);

        let second = carousel.next().expect("accepted");
        assert!(carousel.complete(first.ticket).is_none());
        assert!(carousel.is_transitioning(), "old ticket must not clear");
        carousel.complete(second.ticket);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn tickets_do_not_cross_carousels() {
        let mut old = controller(7, ItemsPerPage::One);
        let mut new = controller(7, ItemsPerPage::One);
        let old_step = old.next().expect("accepted");
        let _new_step = new.next().expect("accepted");

        new.complete(old_step.ticket);
        assert!(new.is_transitioning());
    }

    #[test]
    fn completion_after_unmount_is_a_no_op() {
        let mut carousel = controller(7, ItemsPerPage::One);
        let step = carousel.next().expect("accepted");
        carousel.unmount();

        assert!(carousel.complete(step.ticket).is_none());
        assert!(carousel.next().is_none());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn resize_mid_transition_clamps_and_keeps_ticket() {
        let mut carousel = controller(7, ItemsPerPage::One);
        let step = carousel.go_to(6).expect("accepted");
        carousel.on_viewport_change(ItemsPerPage::Three);
        assert_eq!(carousel.current_index(), 4);
        assert!(carousel.is_transitioning());

        carousel.complete(step.ticket);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn observers_see_each_change() {
        let mut carousel = controller(7, ItemsPerPage::Three);
        let rx = carousel.subscribe();
        let step = carousel.next().expect("accepted");
        assert_eq!(rx.borrow().current_index, 1);
        assert!(rx.borrow().is_transitioning);

        carousel.complete(step.ticket);
        assert!(!rx.borrow().is_transitioning);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_after_returns_ticket_once_elapsed() {
        let mut carousel = controller(3, ItemsPerPage::One);
        let step = carousel.next().expect("accepted");
        let ticket = settle_after(step).await;
        assert_eq!(ticket, step.ticket);
        assert!(carousel.complete(ticket).is_none());
        assert!(!carousel.is_transitioning());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn go_to_out_of_range_panics_in_debug() {
        let mut carousel = controller(7, ItemsPerPage::Three);
        let _ = carousel.go_to(5);
    }
}
