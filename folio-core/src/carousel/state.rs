use super::types::{
    CarouselSnapshot, TransitionMode, TransitionTicket, WrapDirection,
};
use crate::viewport::ItemsPerPage;

/// Transition phase of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Animated move toward `current_index`. `wrap` is set when the move
    /// crossed an end of the list and a settle phase must follow.
    Transitioning {
        ticket: TransitionTicket,
        wrap: Option<WrapDirection>,
    },
    /// Un-animated corrective jump after a wrap; still blocks navigation.
    Settling { ticket: TransitionTicket },
}

// Carousel state for managing the paginated project list
#[derive(Debug, Clone)]
pub struct CarouselState {
    pub(crate) current_index: usize,
    pub(crate) max_index: usize,
    pub(crate) items_per_page: ItemsPerPage,
    pub(crate) item_count: usize,
    pub(crate) phase: Phase,
}

impl CarouselState {
    /// Create a new carousel state at index 0.
    pub fn new(item_count: usize, items_per_page: ItemsPerPage) -> Self {
        Self {
            current_index: 0,
            max_index: max_index_for(item_count, items_per_page),
            items_per_page,
            item_count,
            phase: Phase::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Horizontal offset of the track, in percent of the viewport width.
    pub fn offset_percent(&self) -> f32 {
        -(self.current_index as f32
            * (100.0 / self.items_per_page.get() as f32))
    }

    pub fn transition_mode(&self) -> TransitionMode {
        match self.phase {
            Phase::Settling { .. } => TransitionMode::Instant,
            _ => TransitionMode::Animated,
        }
    }

    /// Recompute `max_index` for a new page size and clamp the index down.
    pub(crate) fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.items_per_page = items_per_page;
        self.max_index = max_index_for(self.item_count, items_per_page);
        if self.current_index > self.max_index {
            self.current_index = self.max_index;
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            max_index: self.max_index,
            item_count: self.item_count,
            items_per_page: self.items_per_page,
            offset_percent: self.offset_percent(),
            mode: self.transition_mode(),
            is_transitioning: self.is_transitioning(),
        }
    }
}

fn max_index_for(item_count: usize, items_per_page: ItemsPerPage) -> usize {
    item_count.saturating_sub(items_per_page.get())
}
