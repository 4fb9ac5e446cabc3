//! Viewport classification
//!
//! Maps a window width onto the number of portfolio cards shown per page and
//! decides when the header collapses into the compact (mobile) menu.

use serde::{Deserialize, Serialize};

/// Cards per carousel page. A pure function of viewport width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum ItemsPerPage {
    One,
    Two,
    #[default]
    Three,
}

impl ItemsPerPage {
    pub const fn get(self) -> usize {
        match self {
            ItemsPerPage::One => 1,
            ItemsPerPage::Two => 2,
            ItemsPerPage::Three => 3,
        }
    }

    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(ItemsPerPage::One),
            2 => Some(ItemsPerPage::Two),
            3 => Some(ItemsPerPage::Three),
            _ => None,
        }
    }
}

/// Width thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// At or above this width three cards fit.
    pub wide: f32,
    /// At or above this width two cards fit.
    pub medium: f32,
    /// At or below this width the header uses the compact menu.
    pub compact_nav: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide: 1200.0,
            medium: 768.0,
            compact_nav: 992.0,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: f32) -> ItemsPerPage {
        if width >= self.wide {
            ItemsPerPage::Three
        } else if width >= self.medium {
            ItemsPerPage::Two
        } else {
            ItemsPerPage::One
        }
    }

    pub fn is_compact_nav(&self, width: f32) -> bool {
        width <= self.compact_nav
    }
}

/// Remembers the last classification so resize storms only surface changes.
#[derive(Debug, Clone, Default)]
pub struct ViewportClassifier {
    breakpoints: Breakpoints,
    last: Option<ItemsPerPage>,
}

impl ViewportClassifier {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            last: None,
        }
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Last emitted page size, if any width has been observed.
    pub fn current(&self) -> Option<ItemsPerPage> {
        self.last
    }

    /// Classify `width`; returns the page size when it differs from the
    /// previous reading (always on the first call).
    pub fn observe(&mut self, width: f32) -> Option<ItemsPerPage> {
        let items_per_page = self.breakpoints.classify(width);
        if self.last == Some(items_per_page) {
            return None;
        }
        log::debug!(
            "Viewport width {:.0} -> {} items per page",
            width,
            items_per_page.get()
        );
        self.last = Some(items_per_page);
        Some(items_per_page)
    }
}
