//! Page scroll tracking: which section the header highlights, header and
//! scroll-to-top affordances, and trigger-once section reveal.

use std::collections::HashSet;

/// Viewport-relative line a section must straddle to become active.
pub const SPY_LINE: f32 = 100.0;
/// Scroll distance after which the header switches to its compact style.
pub const HEADER_SCROLLED_AFTER: f32 = 50.0;
/// Scroll distance after which the scroll-to-top button appears.
pub const SCROLL_TO_TOP_AFTER: f32 = 300.0;
/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Navigable page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    /// Anchor id, as used in links such as `#portfolio`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Vertical extent of one section in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Stacked section heights; tops are derived by accumulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    heights: Vec<(Section, f32)>,
    trailing: f32,
}

impl SectionLayout {
    /// `trailing` is the height of everything below the last section
    /// (the footer).
    pub fn new(heights: Vec<(Section, f32)>, trailing: f32) -> Self {
        Self { heights, trailing }
    }

    /// Default heights used by the desktop page.
    pub fn standard() -> Self {
        Self::new(
            vec![
                (Section::Home, 720.0),
                (Section::About, 1100.0),
                (Section::Skills, 760.0),
                (Section::Services, 640.0),
                (Section::Portfolio, 720.0),
                (Section::Contact, 860.0),
            ],
            260.0,
        )
    }

    pub fn height(&self, section: Section) -> Option<f32> {
        self.heights
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, h)| *h)
    }

    pub fn extent(&self, section: Section) -> Option<Extent> {
        let mut top = 0.0;
        for (s, height) in &self.heights {
            if *s == section {
                return Some(Extent {
                    top,
                    height: *height,
                });
            }
            top += height;
        }
        None
    }

    pub fn extents(&self) -> impl Iterator<Item = (Section, Extent)> + '_ {
        self.heights.iter().scan(0.0_f32, |top, (section, height)| {
            let extent = Extent {
                top: *top,
                height: *height,
            };
            *top += height;
            Some((*section, extent))
        })
    }

    /// Height below the last section.
    pub fn trailing(&self) -> f32 {
        self.trailing
    }

    pub fn content_height(&self) -> f32 {
        self.heights.iter().map(|(_, h)| h).sum::<f32>() + self.trailing
    }

    /// Scroll position that brings `section` just below a header of
    /// `header_height`.
    pub fn target_offset(&self, section: Section, header_height: f32) -> f32 {
        self.extent(section)
            .map(|e| (e.top - header_height).max(0.0))
            .unwrap_or(0.0)
    }
}

/// Tracks the section highlighted in the navigation.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: Section,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: Section::Home,
        }
    }
}

impl ScrollSpy {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Explicit selection, e.g. when a nav link is clicked.
    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    /// Re-evaluate after a scroll. The first section straddling
    /// [`SPY_LINE`] wins; if none does, the previous one stays active.
    /// Returns `true` when the active section changed.
    pub fn update(&mut self, scroll_y: f32, layout: &SectionLayout) -> bool {
        let hit = layout.extents().find(|(_, extent)| {
            let top = extent.top - scroll_y;
            let bottom = extent.bottom() - scroll_y;
            top <= SPY_LINE && bottom >= SPY_LINE
        });

        match hit {
            Some((section, _)) if section != self.active => {
                log::debug!("Scroll spy: {:?} -> {:?}", self.active, section);
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

/// Derived scroll affordances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub header_scrolled: bool,
    pub show_scroll_to_top: bool,
    /// 0..=100
    pub progress_percent: f32,
}

impl ScrollMetrics {
    pub fn compute(
        scroll_y: f32,
        content_height: f32,
        viewport_height: f32,
    ) -> Self {
        let scrollable = content_height - viewport_height;
        let progress_percent = if scrollable > 0.0 {
            (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            header_scrolled: scroll_y > HEADER_SCROLLED_AFTER,
            show_scroll_to_top: scroll_y > SCROLL_TO_TOP_AFTER,
            progress_percent,
        }
    }
}

/// Trigger-once reveal of sections as they scroll into view.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<Section>,
}

impl RevealTracker {
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Reveal every section with at least [`REVEAL_THRESHOLD`] of its height
    /// inside the viewport. Returns the sections revealed by this call.
    pub fn observe(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        layout: &SectionLayout,
    ) -> Vec<Section> {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height;
        let mut newly = Vec::new();

        for (section, extent) in layout.extents() {
            if self.revealed.contains(&section) || extent.height <= 0.0 {
                continue;
            }
            let visible = (extent.bottom().min(view_bottom)
                - extent.top.max(view_top))
            .max(0.0);
            if visible / extent.height >= REVEAL_THRESHOLD {
                self.revealed.insert(section);
                newly.push(section);
            }
        }

        newly
    }
}
