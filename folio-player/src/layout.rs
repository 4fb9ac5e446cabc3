//! Fixed geometry shared by the views and the update handlers.

use iced::widget::Id;

/// Height of the overlaid header bar.
pub const HEADER_HEIGHT: f32 = 72.0;
pub const MAX_CONTENT_WIDTH: f32 = 1200.0;
pub const SECTION_PADDING: f32 = 24.0;
/// Width reserved on each side of the portfolio track for the arrows.
pub const CAROUSEL_ARROW_SPACE: f32 = 56.0;
pub const MIN_TRACK_WIDTH: f32 = 240.0;

pub const PAGE_SCROLL_ID: &str = "folio-page";
pub const PORTFOLIO_TRACK_ID: &str = "folio-portfolio-track";

pub fn page_scroll_id() -> Id {
    Id::new(PAGE_SCROLL_ID)
}

pub fn portfolio_track_id() -> Id {
    Id::new(PORTFOLIO_TRACK_ID)
}

pub fn contact_input_id(field: folio_core::ContactField) -> Id {
    match field {
        folio_core::ContactField::Name => Id::new("contact-name"),
        folio_core::ContactField::Email => Id::new("contact-email"),
        folio_core::ContactField::Message => Id::new("contact-message"),
    }
}

/// Visible width of the portfolio track for a window width.
pub fn track_width(window_width: f32) -> f32 {
    let content = window_width.min(MAX_CONTENT_WIDTH) - 2.0 * SECTION_PADDING;
    (content - 2.0 * CAROUSEL_ARROW_SPACE).max(MIN_TRACK_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_width_is_capped_and_floored() {
        assert_eq!(track_width(4000.0), 1200.0 - 48.0 - 112.0);
        assert_eq!(track_width(100.0), MIN_TRACK_WIDTH);
    }
}
