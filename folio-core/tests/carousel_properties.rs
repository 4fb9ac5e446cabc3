//! Carousel navigation behaviour
//!
//! Covers index bounds over arbitrary navigation sequences, full wrap-around
//! cycles, drop-while-transitioning, go-to offsets and viewport clamping.

use folio_core::carousel::{
    CarouselController, CarouselTimings, Phase, ScheduledStep,
};
use folio_core::viewport::ItemsPerPage;
use proptest::prelude::*;

fn carousel(items: usize, per_page: ItemsPerPage) -> CarouselController {
    CarouselController::new(items, per_page, CarouselTimings::default())
}

/// Fire every pending timer in order until the carousel is idle.
fn settle(carousel: &mut CarouselController, step: Option<ScheduledStep>) {
    let mut pending = step;
    while let Some(step) = pending {
        pending = carousel.complete(step.ticket);
    }
    assert_eq!(carousel.state().phase(), Phase::Idle);
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
    Resize(ItemsPerPage),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        4 => Just(Nav::Next),
        4 => Just(Nav::Previous),
        1 => prop_oneof![
            Just(ItemsPerPage::One),
            Just(ItemsPerPage::Two),
            Just(ItemsPerPage::Three),
        ]
        .prop_map(Nav::Resize),
    ]
}

proptest! {
    #[test]
    fn index_stays_in_bounds(
        items in 0usize..12,
        ops in prop::collection::vec(nav_strategy(), 0..64),
    ) {
        let mut c = carousel(items, ItemsPerPage::Three);
        for op in ops {
            let step = match op {
                Nav::Next => c.next(),
                Nav::Previous => c.previous(),
                Nav::Resize(ipp) => {
                    c.on_viewport_change(ipp);
                    None
                }
            };
            settle(&mut c, step);
            prop_assert!(c.current_index() <= c.max_index());
            prop_assert_eq!(
                c.max_index(),
                items.saturating_sub(c.state().items_per_page().get())
            );
        }
    }

    #[test]
    fn full_cycle_returns_to_start(items in 1usize..12, per_page in 1usize..=3) {
        let ipp = ItemsPerPage::from_count(per_page).expect("1..=3");
        let mut c = carousel(items, ipp);
        for _ in 0..=c.max_index() {
            let step = c.next();
            prop_assert!(step.is_some());
            settle(&mut c, step);
        }
        prop_assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_sets_index_and_offset(k in 0usize..=4) {
        let mut c = carousel(7, ItemsPerPage::Three);
        let step = c.go_to(k);
        settle(&mut c, step);
        prop_assert_eq!(c.current_index(), k);
        prop_assert!(approx_eq(c.offset_percent(), -(k as f32 * 100.0 / 3.0)));
    }
}

#[test]
fn double_next_within_window_advances_once() {
    let mut c = carousel(7, ItemsPerPage::Three);
    let first = c.next();
    let second = c.next();
    assert!(first.is_some());
    assert!(second.is_none());
    settle(&mut c, first);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn previous_and_go_to_are_dropped_while_transitioning() {
    let mut c = carousel(7, ItemsPerPage::One);
    let step = c.next();
    assert!(c.previous().is_none());
    assert!(c.go_to(3).is_none());
    settle(&mut c, step);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn shrinking_page_at_old_max_stays_within_new_bounds() {
    let mut c = carousel(7, ItemsPerPage::Three);
    let step = c.go_to(4);
    settle(&mut c, step);

    c.on_viewport_change(ItemsPerPage::One);
    assert_eq!(c.max_index(), 6);
    assert_eq!(c.current_index(), 4);
    assert!(c.current_index() + 1 <= 7);
}

#[test]
fn growing_page_clamps_down() {
    let mut c = carousel(7, ItemsPerPage::One);
    let step = c.go_to(6);
    settle(&mut c, step);

    c.on_viewport_change(ItemsPerPage::Three);
    assert_eq!(c.max_index(), 4);
    assert_eq!(c.current_index(), 4);
}

#[test]
fn seven_items_three_per_page_wraps_forward_to_zero() {
    let mut c = carousel(7, ItemsPerPage::Three);
    assert_eq!(c.max_index(), 4);
    let step = c.go_to(4);
    settle(&mut c, step);

    let step = c.next();
    assert_eq!(c.current_index(), 0);
    assert!(c.is_transitioning());
    settle(&mut c, step);

    assert_eq!(c.current_index(), 0);
    assert!(approx_eq(c.offset_percent(), 0.0));
    assert!(!c.is_transitioning());
}

#[test]
fn seven_items_one_per_page_previous_from_end() {
    let mut c = carousel(7, ItemsPerPage::One);
    assert_eq!(c.max_index(), 6);
    let step = c.go_to(6);
    settle(&mut c, step);

    let step = c.previous();
    settle(&mut c, step);
    assert_eq!(c.current_index(), 5);
}

#[test]
fn dots_mark_only_the_current_index() {
    let mut c = carousel(7, ItemsPerPage::Three);
    let step = c.go_to(2);
    settle(&mut c, step);

    let snapshot = c.snapshot();
    let dots: Vec<_> = snapshot.dots().collect();
    assert_eq!(dots.len(), 5);
    assert!(dots.iter().all(|d| d.active == (d.index == 2)));
    assert!(snapshot.has_navigation());

    let small = carousel(3, ItemsPerPage::Three).snapshot();
    assert!(!small.has_navigation());
}
