//! Portfolio content
//!
//! Everything the page displays is data: a [`Catalog`] deserialized from
//! TOML. A default catalog is bundled with the crate and can be replaced by
//! pointing the configuration at another file.

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, ContentError};
pub use types::*;
