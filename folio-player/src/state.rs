use std::collections::HashSet;
use std::sync::Arc;

use folio_core::content::{QualificationTab, SkillCategory};
use folio_core::motion::{OrbitField, Typewriter, TypewriterTimings};
use folio_core::{
    CarouselController, Catalog, ContactField, ContactForm, ContactSubmitter,
    Mood, MoodPreference, MoodStore, OffsetTween, RevealTracker,
    ScrollMetrics, ScrollSpy, SectionLayout, ViewportClassifier,
};
use iced::Size;

use crate::layout;

/// Whole-application state.
#[derive(Debug)]
pub struct State {
    pub catalog: Arc<Catalog>,
    pub loading: bool,
    pub window_size: Size,
    pub viewport: ViewportClassifier,
    pub mood: MoodPreference<Arc<dyn MoodStore>>,
    pub header: HeaderState,
    pub page: PageState,
    pub hero: Typewriter,
    /// Orbiting glyphs behind the page.
    pub backdrop: OrbitField,
    pub qualification_tab: QualificationTab,
    pub skills_tab: SkillCategory,
    pub expanded_services: HashSet<String>,
    pub portfolio: PortfolioState,
    pub contact: ContactState,
    /// Transient line shown after copying a link.
    pub notice: Option<Notice>,
    notice_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

impl State {
    pub fn new(
        catalog: Arc<Catalog>,
        mood: MoodPreference<Arc<dyn MoodStore>>,
        portfolio: PortfolioState,
        viewport: ViewportClassifier,
        submitter: Option<Arc<dyn ContactSubmitter>>,
        window_size: Size,
    ) -> Self {
        let compact = viewport.breakpoints().is_compact_nav(window_size.width);
        let hero = Typewriter::new(
            catalog.profile.name.clone(),
            TypewriterTimings::default(),
        );

        Self {
            catalog,
            loading: true,
            window_size,
            viewport,
            mood,
            header: HeaderState {
                menu_open: false,
                compact,
            },
            page: PageState::new(window_size.height),
            hero,
            backdrop: OrbitField::default(),
            qualification_tab: QualificationTab::default(),
            skills_tab: SkillCategory::default(),
            expanded_services: HashSet::new(),
            portfolio,
            contact: ContactState::new(submitter),
            notice: None,
            notice_seq: 0,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood.get()
    }

    /// Replace the notice and return its id for the dismiss timer.
    pub fn show_notice(&mut self, text: String) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            id: self.notice_seq,
            text,
        });
        self.notice_seq
    }

    /// Dismiss the notice only if it is still the one the timer was armed for.
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub menu_open: bool,
    /// Window is narrow enough for the menu button instead of inline links.
    pub compact: bool,
}

/// Vertical page scroll, scroll-spy and section reveal.
#[derive(Debug, Clone)]
pub struct PageState {
    pub layout: SectionLayout,
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub spy: ScrollSpy,
    pub metrics: ScrollMetrics,
    pub reveal: RevealTracker,
}

impl PageState {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            layout: SectionLayout::standard(),
            scroll_y: 0.0,
            viewport_height,
            spy: ScrollSpy::default(),
            metrics: ScrollMetrics::default(),
            reveal: RevealTracker::default(),
        }
    }
}

/// The project carousel and the pixel tween that renders it.
#[derive(Debug)]
pub struct PortfolioState {
    pub controller: CarouselController,
    pub tween: OffsetTween,
    pub track_width: f32,
}

impl PortfolioState {
    pub fn new(controller: CarouselController, window_width: f32) -> Self {
        Self {
            controller,
            tween: OffsetTween::new(),
            track_width: layout::track_width(window_width),
        }
    }

    pub fn card_width(&self) -> f32 {
        self.track_width / self.controller.state().items_per_page().get() as f32
    }

    /// Horizontal scroll offset in pixels for the controller's current
    /// position.
    pub fn target_scroll_x(&self) -> f32 {
        -self.controller.offset_percent() / 100.0 * self.track_width
    }
}

#[derive(Debug)]
pub struct ContactState {
    pub form: ContactForm,
    /// Field currently being edited; leaving it validates it.
    pub focused: Option<ContactField>,
    pub submitter: Option<Arc<dyn ContactSubmitter>>,
}

impl ContactState {
    pub fn new(submitter: Option<Arc<dyn ContactSubmitter>>) -> Self {
        Self {
            form: ContactForm::new(),
            focused: None,
            submitter,
        }
    }
}
