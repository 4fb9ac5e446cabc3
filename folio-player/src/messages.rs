use std::sync::Arc;
use std::time::Instant;

use folio_core::content::{QualificationTab, SkillCategory};
use folio_core::{ContactField, Section, SubmitError, TransitionTicket};
use iced::Size;
use iced::widget::scrollable;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,

    // Boot
    LoadingFinished,
    TypewriterStep,

    // Window
    WindowResized(Size),
    EscapePressed,
    AnimationFrame(Instant),

    // Page navigation
    PageScrolled(scrollable::Viewport),
    NavigateTo(Section),
    ScrollToTop,
    ToggleMenu,

    ToggleMood,
    SelectQualificationTab(QualificationTab),
    SelectSkillTab(SkillCategory),
    ToggleService(String),
    CopyLink(String),
    DismissNotice(u64),

    Carousel(CarouselMessage),
    Contact(ContactMessage),
}

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Next,
    Previous,
    GoTo(usize),
    /// The track reported a new horizontal offset, ours or the user's.
    TrackScrolled(f32),
    /// A transition timer fired.
    TimerFired(TransitionTicket),
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    Input(ContactField, String),
    /// Enter pressed inside a field: validate it and move on.
    FieldSubmitted(ContactField),
    Submit,
    Submitted(Result<(), Arc<SubmitError>>),
    ClearStatus,
}

impl From<CarouselMessage> for Message {
    fn from(message: CarouselMessage) -> Self {
        Message::Carousel(message)
    }
}

impl From<ContactMessage> for Message {
    fn from(message: ContactMessage) -> Self {
        Message::Contact(message)
    }
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::NoOp => "NoOp",
            Message::LoadingFinished => "LoadingFinished",
            Message::TypewriterStep => "TypewriterStep",
            Message::WindowResized(_) => "WindowResized",
            Message::EscapePressed => "EscapePressed",
            Message::AnimationFrame(_) => "AnimationFrame",
            Message::PageScrolled(_) => "PageScrolled",
            Message::NavigateTo(_) => "NavigateTo",
            Message::ScrollToTop => "ScrollToTop",
            Message::ToggleMenu => "ToggleMenu",
            Message::ToggleMood => "ToggleMood",
            Message::SelectQualificationTab(_) => "SelectQualificationTab",
            Message::SelectSkillTab(_) => "SelectSkillTab",
            Message::ToggleService(_) => "ToggleService",
            Message::CopyLink(_) => "CopyLink",
            Message::DismissNotice(_) => "DismissNotice",
            Message::Carousel(_) => "Carousel",
            Message::Contact(_) => "Contact",
        }
    }
}
