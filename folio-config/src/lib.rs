//! Configuration and local preference storage for Folio.
//!
//! `folio-player` loads a [`FolioConfig`] once at boot through
//! [`ConfigLoader`] and persists the mood flag through [`FileMoodStore`].
//! Nothing here touches the UI toolkit.

pub mod loader;
pub mod models;
pub mod preferences;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{CarouselConfig, ContactConfig, FolioConfig, WindowConfig};
pub use preferences::FileMoodStore;
