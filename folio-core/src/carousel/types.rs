//! Shared types for the carousel module

use std::time::Duration;

use crate::viewport::ItemsPerPage;

/// Identifies one scheduled phase of one carousel instance.
///
/// Tickets from a previous phase, or from a controller that has since been
/// unmounted or replaced, never match the in-flight phase and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    pub(crate) carousel: u64,
    pub(crate) generation: u64,
}

/// A timer the host must arm: call `complete(ticket)` once `after` elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub ticket: TransitionTicket,
    pub after: Duration,
}

/// Which end of the list a wrap-around crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapDirection {
    /// `next()` from the last page back to the first
    Forward,
    /// `previous()` from the first page to the last
    Backward,
}

/// How the render surface should move to the current offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    #[default]
    Animated,
    /// Jump without animation (corrective snap after a wrap)
    Instant,
}

/// Phase durations. Exact values are a UX choice; only the ordering
/// transition -> settle -> idle is relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub transition: Duration,
    pub settle: Duration,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(500),
            settle: Duration::from_millis(50),
        }
    }
}

/// Page indicator for one reachable start index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Read-only view of the controller published to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub max_index: usize,
    pub item_count: usize,
    pub items_per_page: ItemsPerPage,
    pub offset_percent: f32,
    pub mode: TransitionMode,
    pub is_transitioning: bool,
}

impl CarouselSnapshot {
    /// Dot indicators `0..=max_index`.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        (0..=self.max_index).map(|index| Dot {
            index,
            active: index == self.current_index,
        })
    }

    /// Navigation controls are only useful when items overflow one page.
    pub fn has_navigation(&self) -> bool {
        self.item_count > self.items_per_page.get()
    }
}
