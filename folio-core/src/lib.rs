//! # Folio Core
//!
//! Domain library for the Folio single-page portfolio. Nothing in here knows
//! about a UI toolkit; the desktop front-end in `folio-player` drives these
//! types from its update loop and re-queries them from its views.
//!
//! ## Overview
//!
//! - **Carousel**: paginated project gallery with wrap-around navigation and a
//!   single in-flight transition guarded by tickets
//! - **Viewport**: width breakpoints mapped to items-per-page
//! - **Mood**: light/dark preference with an explicit persistence hook
//! - **Scroll**: scroll-spy, scroll metrics and trigger-once section reveal
//! - **Contact**: form validation and async submission to a form endpoint
//! - **Content**: the portfolio catalog (profile, skills, services, projects)
//!
//! ## Architecture
//!
//! - [`carousel`]: [`CarouselController`] and its render-side helpers
//! - [`viewport`]: [`Breakpoints`] and [`ItemsPerPage`]
//! - [`mood`]: [`Mood`], [`MoodStore`] and [`MoodPreference`]
//! - [`scroll`]: [`ScrollSpy`], [`ScrollMetrics`], [`RevealTracker`]
//! - [`contact`]: [`ContactForm`] and the [`ContactSubmitter`] port
//! - [`content`]: [`Catalog`] and the bundled default content
//! - [`motion`]: hero [`Typewriter`](motion::Typewriter), loading gate and
//!   the [`OrbitField`](motion::OrbitField) backdrop

pub mod carousel;
pub mod contact;
pub mod content;
pub mod mood;
pub mod motion;
pub mod scroll;
pub mod viewport;

pub use carousel::{
    CarouselController, CarouselSnapshot, CarouselTimings, Easing,
    OffsetTween, ScheduledStep, TransitionMode, TransitionTicket,
};
pub use contact::{
    ContactField, ContactForm, ContactSubmission, ContactSubmitter,
    SubmissionStatus, SubmitError, Web3FormsClient,
};
pub use content::{Catalog, ContentError, Project};
pub use mood::{
    MemoryMoodStore, Mood, MoodIcon, MoodPreference, MoodStore,
    PreferenceError,
};
pub use scroll::{
    RevealTracker, ScrollMetrics, ScrollSpy, Section, SectionLayout,
};
pub use viewport::{Breakpoints, ItemsPerPage, ViewportClassifier};
