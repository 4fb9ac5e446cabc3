//! Desktop front-end for Folio.
//!
//! The iced program lives in [`app`]; [`update`] and [`view`] are plain
//! functions over [`state::State`] so they can be driven from tests without
//! opening a window.

pub mod app;
pub mod layout;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;

pub use messages::Message;
pub use state::State;
