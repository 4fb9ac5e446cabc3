use std::path::PathBuf;
use std::time::Duration;

use folio_core::contact::DEFAULT_ENDPOINT;
use folio_core::{Breakpoints, CarouselTimings};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the desktop portfolio.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub contact: ContactConfig,
    pub carousel: CarouselConfig,
    /// Width breakpoints for items-per-page and the compact header.
    pub viewport: Breakpoints,
    /// Catalog file to render instead of the bundled content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
    pub window: WindowConfig,
}

/// Contact form delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    /// Form service access key. Submissions fail with a clear message when
    /// this is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: None,
            timeout_ms: 15_000,
        }
    }
}

impl ContactConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Access key with surrounding whitespace removed, `None` when blank.
    pub fn access_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Carousel timing. The ordering of the two phases is fixed; only their
/// lengths are tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Length of the animated slide (ms).
    pub transition_ms: u64,
    /// Pause after an instant wrap jump before animation is re-enabled (ms).
    pub settle_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let timings = CarouselTimings::default();
        Self {
            transition_ms: timings.transition.as_millis() as u64,
            settle_ms: timings.settle.as_millis() as u64,
        }
    }
}

impl CarouselConfig {
    pub fn timings(&self) -> CarouselTimings {
        CarouselTimings {
            transition: Duration::from_millis(self.transition_ms),
            settle: Duration::from_millis(self.settle_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_timings() {
        let config = FolioConfig::default();
        assert_eq!(config.carousel.timings(), CarouselTimings::default());
        assert_eq!(config.contact.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.viewport, Breakpoints::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
[carousel]
transition_ms = 300
"#,
        )
        .expect("valid toml");
        assert_eq!(config.carousel.transition_ms, 300);
        assert_eq!(
            config.carousel.settle_ms,
            CarouselConfig::default().settle_ms
        );
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn blank_access_key_is_treated_as_missing() {
        let contact = ContactConfig {
            access_key: Some("   ".into()),
            ..ContactConfig::default()
        };
        assert_eq!(contact.access_key(), None);
    }
}
