//! Layered configuration loading.
//!
//! Evaluation order:
//! 1. `.env` in the working directory (via `dotenvy`, never overrides the
//!    process environment),
//! 2. `$FOLIO_CONFIG_PATH`, or the first of `folio.toml`, `folio.json`,
//!    `config/folio.toml`, `config/folio.json` under the search root,
//! 3. built-in defaults when no file is found,
//! 4. individual `FOLIO_*` environment overrides,
//! 5. validation.

pub mod error;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use url::Url;

use crate::models::FolioConfig;
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
pub const CONTACT_ENDPOINT_VAR: &str = "FOLIO_CONTACT_ENDPOINT";
pub const CONTACT_ACCESS_KEY_VAR: &str = "FOLIO_CONTACT_ACCESS_KEY";
pub const CAROUSEL_TRANSITION_VAR: &str = "FOLIO_CAROUSEL_TRANSITION";
pub const CAROUSEL_SETTLE_VAR: &str = "FOLIO_CAROUSEL_SETTLE";
pub const CONTENT_PATH_VAR: &str = "FOLIO_CONTENT_PATH";

const CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Where the file layer of the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (from {CONFIG_PATH_VAR})", path.display())
            }
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FolioConfig,
    pub source: ConfigSource,
    /// Names of the environment variables that overrode file values.
    pub overrides: Vec<&'static str>,
}

type VarLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a [`FolioConfig`] from files and the environment.
#[derive(Clone)]
pub struct ConfigLoader {
    vars: VarLookup,
    search_root: PathBuf,
    read_dotenv: bool,
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("search_root", &self.search_root)
            .field("read_dotenv", &self.read_dotenv)
            .finish_non_exhaustive()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader over the process environment and the current directory.
    pub fn new() -> Self {
        Self {
            vars: Arc::new(|key| std::env::var(key).ok()),
            search_root: PathBuf::from("."),
            read_dotenv: true,
        }
    }

    /// Loader over an explicit variable lookup. `.env` is not read.
    pub fn with_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            vars: Arc::new(lookup),
            search_root: PathBuf::from("."),
            read_dotenv: false,
        }
    }

    /// Directory the default candidate files are resolved against.
    pub fn search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        if self.read_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => {
                    tracing::debug!("loaded environment from {}", path.display())
                }
                Err(err) if err.not_found() => {}
                Err(err) => tracing::warn!("ignoring unreadable .env: {err}"),
            }
        }

        let (mut config, source) = self.load_file_layer()?;
        let overrides = self.apply_env_overrides(&mut config)?;
        validate(&config)?;

        tracing::info!(
            source = %source,
            overrides = ?overrides,
            "folio configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            source,
            overrides,
        })
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.vars)(key).filter(|value| !value.trim().is_empty())
    }

    fn load_file_layer(
        &self,
    ) -> Result<(FolioConfig, ConfigSource), ConfigLoadError> {
        if let Some(raw) = self.var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw.trim());
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((FolioConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.is_file())
    }

    fn apply_env_overrides(
        &self,
        config: &mut FolioConfig,
    ) -> Result<Vec<&'static str>, ConfigLoadError> {
        let mut applied = Vec::new();

        if let Some(endpoint) = self.var(CONTACT_ENDPOINT_VAR) {
            config.contact.endpoint = endpoint.trim().to_string();
            applied.push(CONTACT_ENDPOINT_VAR);
        }
        if let Some(key) = self.var(CONTACT_ACCESS_KEY_VAR) {
            config.contact.access_key = Some(key.trim().to_string());
            applied.push(CONTACT_ACCESS_KEY_VAR);
        }
        if let Some(raw) = self.var(CAROUSEL_TRANSITION_VAR) {
            config.carousel.transition_ms =
                parse_millis(CAROUSEL_TRANSITION_VAR, &raw)?;
            applied.push(CAROUSEL_TRANSITION_VAR);
        }
        if let Some(raw) = self.var(CAROUSEL_SETTLE_VAR) {
            config.carousel.settle_ms = parse_millis(CAROUSEL_SETTLE_VAR, &raw)?;
            applied.push(CAROUSEL_SETTLE_VAR);
        }
        if let Some(path) = self.var(CONTENT_PATH_VAR) {
            config.content_path = Some(PathBuf::from(path.trim()));
            applied.push(CONTENT_PATH_VAR);
        }

        Ok(applied)
    }
}

/// Load with the process environment, attaching context for the caller.
pub fn load_from_env() -> anyhow::Result<ConfigLoad> {
    ConfigLoader::new()
        .load()
        .context("failed to load folio configuration")
}

pub fn load_from_file(path: &Path) -> Result<FolioConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|err| {
            ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            }
        }),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<FolioConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

/// Accepts humantime (`"350ms"`, `"1s"`) or a bare millisecond count.
fn parse_millis(key: &'static str, raw: &str) -> Result<u64, ConfigLoadError> {
    let raw = raw.trim();
    if let Ok(ms) = raw.parse::<u64>() {
        return Ok(ms);
    }
    humantime::parse_duration(raw)
        .map(|duration: Duration| duration.as_millis() as u64)
        .map_err(|err| ConfigLoadError::InvalidEnv {
            key,
            message: err.to_string(),
        })
}

pub fn validate(config: &FolioConfig) -> Result<(), ConfigLoadError> {
    if config.carousel.transition_ms == 0 {
        return Err(ConfigLoadError::Invalid(
            "carousel.transition_ms must be greater than zero".into(),
        ));
    }
    if config.carousel.settle_ms == 0 {
        return Err(ConfigLoadError::Invalid(
            "carousel.settle_ms must be greater than zero".into(),
        ));
    }
    if config.contact.timeout_ms == 0 {
        return Err(ConfigLoadError::Invalid(
            "contact.timeout_ms must be greater than zero".into(),
        ));
    }

    let viewport = &config.viewport;
    if !(viewport.medium > 0.0 && viewport.medium < viewport.wide) {
        return Err(ConfigLoadError::Invalid(format!(
            "viewport.medium ({}) must be positive and below viewport.wide ({})",
            viewport.medium, viewport.wide
        )));
    }
    if viewport.compact_nav <= 0.0 {
        return Err(ConfigLoadError::Invalid(
            "viewport.compact_nav must be positive".into(),
        ));
    }

    if !(config.window.width > 0.0 && config.window.height > 0.0) {
        return Err(ConfigLoadError::Invalid(
            "window size must be positive".into(),
        ));
    }

    let endpoint = Url::parse(&config.contact.endpoint).map_err(|err| {
        ConfigLoadError::Invalid(format!(
            "contact.endpoint {:?} is not a valid URL: {err}",
            config.contact.endpoint
        ))
    })?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(ConfigLoadError::Invalid(format!(
            "contact.endpoint must use http or https, got {}",
            endpoint.scheme()
        )));
    }

    Ok(())
}
