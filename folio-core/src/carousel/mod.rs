//! Portfolio carousel
//!
//! A horizontally paginated list of projects with next/previous/go-to
//! navigation. The controller serializes navigation into one coherent index
//! sequence: at most one transition is in flight, and requests that arrive
//! while one is running are dropped rather than queued.
//!
//! Wrapping past either end is a two-phase transition. The first phase
//! animates toward the new index; once its timer fires the controller enters
//! a short settling phase in which the render surface applies the offset
//! without animation, and only then does it accept new requests.
//!
//! The controller never sleeps itself. Every operation that starts a phase
//! hands back a [`ScheduledStep`]; the host arms a timer and reports back
//! through [`CarouselController::complete`].

pub mod controller;
pub mod state;
pub mod tween;
pub mod types;

pub use controller::{CarouselController, settle_after};
pub use state::{CarouselState, Phase};
pub use tween::{Easing, OffsetTween};
pub use types::*;
