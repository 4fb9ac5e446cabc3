//! Update loop tests
//!
//! Drive `update::update` with the messages the views and subscriptions
//! emit and check the resulting state. Returned tasks are dropped; timers
//! they would arm are simulated by sending their messages directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_config::FolioConfig;
use folio_core::carousel::Phase;
use folio_core::content::{QualificationTab, SkillCategory};
use folio_core::{
    Catalog, ContactField, MemoryMoodStore, Mood, Section, SubmissionStatus,
    SubmitError, TransitionTicket,
};
use folio_player::app::bootstrap::{AppConfig, base_state};
use folio_player::messages::{CarouselMessage, ContactMessage, Message};
use folio_player::state::State;
use folio_player::update::carousel::drift_correction;
use folio_player::update::update;
use folio_player::view::widgets::link_message;
use iced::Size;

fn config_with_store(store: MemoryMoodStore) -> AppConfig {
    let catalog = Catalog::bundled().expect("bundled content");
    AppConfig::new(FolioConfig::default(), catalog)
        .with_mood_store(Arc::new(store))
}

fn fresh_state() -> State {
    base_state(&config_with_store(MemoryMoodStore::new()))
}

fn in_flight_ticket(state: &State) -> TransitionTicket {
    match state.portfolio.controller.state().phase() {
        Phase::Transitioning { ticket, .. } | Phase::Settling { ticket } => {
            ticket
        }
        Phase::Idle => panic!("expected a transition in flight"),
    }
}

/// Fire timers until the carousel is idle again.
fn settle_carousel(state: &mut State) {
    while state.portfolio.controller.is_transitioning() {
        let ticket = in_flight_ticket(state);
        let _ = update(
            state,
            Message::Carousel(CarouselMessage::TimerFired(ticket)),
        );
    }
}

fn type_into(state: &mut State, field: ContactField, value: &str) {
    let _ = update(
        state,
        ContactMessage::Input(field, value.to_string()).into(),
    );
}

#[tokio::test]
async fn boot_state_matches_default_window() {
    let state = fresh_state();
    assert!(state.loading);
    assert_eq!(state.mood(), Mood::Light);
    // 1280px wide default window shows three projects per page
    assert_eq!(state.portfolio.controller.state().items_per_page().get(), 3);
    assert_eq!(state.portfolio.controller.max_index(), 4);
    assert!(!state.header.compact);
}

#[tokio::test]
async fn finishing_loading_reveals_the_hero() {
    let mut state = fresh_state();
    assert!(!state.page.reveal.is_revealed(Section::Home));

    let _ = update(&mut state, Message::LoadingFinished);

    assert!(!state.loading);
    assert!(state.page.reveal.is_revealed(Section::Home));
}

#[tokio::test]
async fn next_advances_once_per_transition() {
    let mut state = fresh_state();

    let _ = update(&mut state, CarouselMessage::Next.into());
    let _ = update(&mut state, CarouselMessage::Next.into());
    assert_eq!(state.portfolio.controller.current_index(), 1);
    assert!(state.portfolio.controller.is_transitioning());

    settle_carousel(&mut state);
    assert_eq!(state.portfolio.controller.current_index(), 1);
    assert!(state.portfolio.tween.is_active());
}

#[tokio::test]
async fn wrapping_forward_snaps_the_track_back_to_start() {
    let mut state = fresh_state();
    let _ = update(&mut state, CarouselMessage::GoTo(4).into());
    settle_carousel(&mut state);

    let _ = update(&mut state, CarouselMessage::Next.into());
    assert_eq!(state.portfolio.controller.current_index(), 0);

    settle_carousel(&mut state);
    assert_eq!(state.portfolio.target_scroll_x(), 0.0);
    assert!(!state.portfolio.tween.is_active());
    assert_eq!(state.portfolio.tween.current(), 0.0);
}

#[tokio::test]
async fn stale_timer_is_ignored() {
    let mut state = fresh_state();
    let _ = update(&mut state, CarouselMessage::Next.into());
    let first = in_flight_ticket(&state);
    settle_carousel(&mut state);

    let _ = update(&mut state, CarouselMessage::Next.into());
    let _ = update(
        &mut state,
        Message::Carousel(CarouselMessage::TimerFired(first)),
    );
    assert!(state.portfolio.controller.is_transitioning());
    assert_eq!(state.portfolio.controller.current_index(), 2);
}

#[tokio::test]
async fn out_of_range_go_to_is_ignored() {
    let mut state = fresh_state();
    let _ = update(&mut state, CarouselMessage::GoTo(42).into());
    assert_eq!(state.portfolio.controller.current_index(), 0);
    assert!(!state.portfolio.controller.is_transitioning());
}

#[tokio::test]
async fn narrowing_the_window_shows_fewer_projects() {
    let mut state = fresh_state();
    let _ = update(&mut state, CarouselMessage::GoTo(4).into());
    settle_carousel(&mut state);

    let _ = update(&mut state, Message::WindowResized(Size::new(600.0, 800.0)));

    let controller = &state.portfolio.controller;
    assert_eq!(controller.state().items_per_page().get(), 1);
    assert_eq!(controller.max_index(), 6);
    assert_eq!(controller.current_index(), 4);
    assert!(state.header.compact);
}

#[tokio::test]
async fn mood_toggle_persists_to_the_store() {
    let store = MemoryMoodStore::new();
    let mut state = base_state(&config_with_store(store.clone()));

    let _ = update(&mut state, Message::ToggleMood);
    assert_eq!(state.mood(), Mood::Dark);
    assert_eq!(store.raw().as_deref(), Some("dark"));

    let restored = base_state(&config_with_store(store.clone()));
    assert_eq!(restored.mood(), Mood::Dark);
}

#[tokio::test]
async fn corrupt_stored_mood_falls_back_to_light() {
    let state = base_state(&config_with_store(MemoryMoodStore::with_raw(
        "sepia",
    )));
    assert_eq!(state.mood(), Mood::Light);
}

#[tokio::test]
async fn menu_closes_on_escape_navigation_and_widening() {
    let mut state = fresh_state();
    let _ = update(&mut state, Message::WindowResized(Size::new(700.0, 800.0)));

    let _ = update(&mut state, Message::ToggleMenu);
    assert!(state.header.menu_open);
    let _ = update(&mut state, Message::EscapePressed);
    assert!(!state.header.menu_open);

    let _ = update(&mut state, Message::ToggleMenu);
    let _ = update(&mut state, Message::NavigateTo(Section::Skills));
    assert!(!state.header.menu_open);
    assert_eq!(state.page.spy.active(), Section::Skills);

    let _ = update(&mut state, Message::ToggleMenu);
    let _ = update(&mut state, Message::WindowResized(Size::new(1300.0, 800.0)));
    assert!(!state.header.menu_open);
    assert!(!state.header.compact);
}

#[tokio::test]
async fn scroll_to_top_selects_home() {
    let mut state = fresh_state();
    let _ = update(&mut state, Message::NavigateTo(Section::Contact));
    let _ = update(&mut state, Message::ScrollToTop);
    assert_eq!(state.page.spy.active(), Section::Home);
}

#[tokio::test]
async fn skills_tab_and_service_details() {
    let mut state = fresh_state();
    let _ = update(
        &mut state,
        Message::SelectSkillTab(SkillCategory::Backend),
    );
    assert_eq!(state.skills_tab, SkillCategory::Backend);

    let id = state.catalog.services[0].id.clone();
    let _ = update(&mut state, Message::ToggleService(id.clone()));
    assert!(state.expanded_services.contains(&id));
    let _ = update(&mut state, Message::ToggleService(id.clone()));
    assert!(!state.expanded_services.contains(&id));
}

#[tokio::test]
async fn qualification_tabs_switch_the_timeline() {
    let mut state = fresh_state();
    assert_eq!(state.qualification_tab, QualificationTab::Education);

    let _ = update(
        &mut state,
        Message::SelectQualificationTab(QualificationTab::Experience),
    );
    assert_eq!(state.qualification_tab, QualificationTab::Experience);
    assert_eq!(
        state
            .catalog
            .qualifications
            .entries(state.qualification_tab)
            .len(),
        state.catalog.qualifications.experience.len()
    );

    let _ = update(
        &mut state,
        Message::SelectQualificationTab(QualificationTab::Education),
    );
    assert_eq!(state.qualification_tab, QualificationTab::Education);
}

#[tokio::test]
async fn animation_frames_turn_the_backdrop() {
    let mut state = fresh_state();
    let start = Instant::now();

    let _ = update(&mut state, Message::AnimationFrame(start));
    assert_eq!(state.backdrop.elapsed(), 0.0);

    let before: Vec<_> = state.backdrop.points().collect();
    let _ = update(
        &mut state,
        Message::AnimationFrame(start + Duration::from_millis(500)),
    );
    assert!((state.backdrop.elapsed() - 0.5).abs() < 1e-6);
    let after: Vec<_> = state.backdrop.points().collect();
    assert_ne!(before, after);
}

#[tokio::test]
async fn manual_track_scroll_snaps_back_when_idle() {
    let mut state = fresh_state();
    let _ = update(&mut state, CarouselMessage::GoTo(2).into());
    settle_carousel(&mut state);
    let target = state.portfolio.target_scroll_x();
    assert!(target > 0.0);

    // Mid-tween the track is ours to move
    assert!(state.portfolio.tween.is_active());
    assert_eq!(drift_correction(&state.portfolio, 10.0), None);

    let _ = update(
        &mut state,
        Message::AnimationFrame(Instant::now() + Duration::from_secs(2)),
    );
    assert!(!state.portfolio.tween.is_active());

    assert_eq!(drift_correction(&state.portfolio, target), None);
    assert_eq!(drift_correction(&state.portfolio, target + 40.0), Some(target));

    let _ = update(
        &mut state,
        CarouselMessage::TrackScrolled(target + 40.0).into(),
    );
    assert_eq!(state.portfolio.tween.current(), target);
    assert!(!state.portfolio.tween.is_active());
    assert_eq!(state.portfolio.controller.current_index(), 2);
}

#[tokio::test]
async fn notice_is_dismissed_only_by_its_own_timer() {
    let mut state = fresh_state();
    let _ = update(
        &mut state,
        Message::CopyLink("https://example.com/a".to_string()),
    );
    let first = state.notice.as_ref().map(|n| n.id).expect("notice shown");

    let _ = update(
        &mut state,
        Message::CopyLink("https://example.com/b".to_string()),
    );
    let _ = update(&mut state, Message::DismissNotice(first));
    assert!(state.notice.is_some());

    let second = state.notice.as_ref().map(|n| n.id).expect("notice shown");
    let _ = update(&mut state, Message::DismissNotice(second));
    assert!(state.notice.is_none());
}

#[tokio::test]
async fn leaving_a_field_validates_it() {
    let mut state = fresh_state();
    type_into(&mut state, ContactField::Name, "A");
    assert_eq!(state.contact.form.error(ContactField::Name), None);

    type_into(&mut state, ContactField::Email, "ada@");
    assert!(state.contact.form.error(ContactField::Name).is_some());

    let _ = update(
        &mut state,
        ContactMessage::FieldSubmitted(ContactField::Email).into(),
    );
    assert!(state.contact.form.error(ContactField::Email).is_some());
    assert_eq!(state.contact.focused, Some(ContactField::Message));
}

#[tokio::test]
async fn invalid_submit_marks_every_field() {
    let mut state = fresh_state();
    let _ = update(&mut state, ContactMessage::Submit.into());

    assert!(!state.contact.form.is_submitting());
    for field in ContactField::ALL {
        assert!(state.contact.form.error(field).is_some());
    }
}

#[tokio::test]
async fn successful_submission_clears_the_form() {
    let mut state = fresh_state();
    type_into(&mut state, ContactField::Name, "Ada Lovelace");
    type_into(&mut state, ContactField::Email, "ada@example.com");
    type_into(&mut state, ContactField::Message, "Hello there, nice work!");

    let _ = update(&mut state, ContactMessage::Submit.into());
    assert!(state.contact.form.is_submitting());
    assert_eq!(*state.contact.form.status(), SubmissionStatus::Sending);

    let _ = update(&mut state, ContactMessage::Submitted(Ok(())).into());
    assert!(!state.contact.form.is_submitting());
    assert_eq!(*state.contact.form.status(), SubmissionStatus::Sent);
    assert_eq!(state.contact.form.value(ContactField::Name), "");

    let _ = update(&mut state, ContactMessage::ClearStatus.into());
    assert_eq!(*state.contact.form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn failed_submission_keeps_the_input() {
    let mut state = fresh_state();
    type_into(&mut state, ContactField::Name, "Ada Lovelace");
    type_into(&mut state, ContactField::Email, "ada@example.com");
    type_into(&mut state, ContactField::Message, "Hello there, nice work!");
    let _ = update(&mut state, ContactMessage::Submit.into());

    let _ = update(
        &mut state,
        ContactMessage::Submitted(Err(Arc::new(SubmitError::NotConfigured)))
            .into(),
    );
    assert!(matches!(
        state.contact.form.status(),
        SubmissionStatus::Failed(_)
    ));
    assert_eq!(state.contact.form.value(ContactField::Name), "Ada Lovelace");

    let _ = update(&mut state, ContactMessage::ClearStatus.into());
    assert!(matches!(
        state.contact.form.status(),
        SubmissionStatus::Failed(_)
    ));
}

#[test]
fn anchor_links_navigate_and_others_copy() {
    assert!(matches!(
        link_message("#contact"),
        Message::NavigateTo(Section::Contact)
    ));
    assert!(matches!(
        link_message("https://example.com"),
        Message::CopyLink(url) if url == "https://example.com"
    ));
}
