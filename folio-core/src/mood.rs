//! Light/dark mood preference
//!
//! The mood is one process-wide value persisted under a single key. The
//! owning [`MoodPreference`] reads it once at startup and writes it back on
//! every change through a [`MoodStore`].

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the mood is stored under.
pub const MOOD_KEY: &str = "portfolio-mood";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Light,
    Dark,
}

/// Icon shown on the toggle: it advertises the mood you would switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodIcon {
    Moon,
    Sun,
}

impl Mood {
    pub fn toggled(self) -> Self {
        match self {
            Mood::Light => Mood::Dark,
            Mood::Dark => Mood::Light,
        }
    }

    pub fn icon(self) -> MoodIcon {
        match self {
            Mood::Light => MoodIcon::Moon,
            Mood::Dark => MoodIcon::Sun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Light => "light",
            Mood::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Mood::Dark)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Mood::Light),
            "dark" => Ok(Mood::Dark),
            other => Err(PreferenceError::InvalidValue(other.to_string())),
        }
    }
}

/// Preference storage errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unrecognized mood value: {0:?}")]
    InvalidValue(String),

    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence hook for the mood flag.
pub trait MoodStore: Send + Sync + fmt::Debug {
    /// Read the stored mood; `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Mood>, PreferenceError>;

    fn save(&self, mood: Mood) -> Result<(), PreferenceError>;
}

impl<S: MoodStore + ?Sized> MoodStore for Arc<S> {
    fn load(&self) -> Result<Option<Mood>, PreferenceError> {
        (**self).load()
    }

    fn save(&self, mood: Mood) -> Result<(), PreferenceError> {
        (**self).save(mood)
    }
}

/// In-memory store, shared between clones. Used by tests and as a fallback
/// when no platform data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryMoodStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw stored string, e.g. to simulate a corrupt value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }
}

impl MoodStore for MemoryMoodStore {
    fn load(&self) -> Result<Option<Mood>, PreferenceError> {
        let guard = self.value.lock().map_err(|_| {
            PreferenceError::Unavailable("memory store poisoned".into())
        })?;
        guard.as_deref().map(str::parse).transpose()
    }

    fn save(&self, mood: Mood) -> Result<(), PreferenceError> {
        let mut guard = self.value.lock().map_err(|_| {
            PreferenceError::Unavailable("memory store poisoned".into())
        })?;
        *guard = Some(mood.as_str().to_string());
        Ok(())
    }
}

/// Owned mood value with write-through persistence.
#[derive(Debug)]
pub struct MoodPreference<S: MoodStore> {
    mood: Mood,
    store: S,
}

impl<S: MoodStore> MoodPreference<S> {
    /// Read the stored mood, falling back to [`Mood::Light`] when nothing is
    /// stored or the stored value cannot be read.
    pub fn load(store: S) -> Self {
        let mood = match store.load() {
            Ok(Some(mood)) => mood,
            Ok(None) => Mood::default(),
            Err(err) => {
                log::warn!("Failed to read mood preference: {}", err);
                Mood::default()
            }
        };
        log::debug!("Mood preference loaded: {}", mood);
        Self { mood, store }
    }

    pub fn get(&self) -> Mood {
        self.mood
    }

    /// Set and persist. A failed write is logged; the in-memory value still
    /// changes so the UI stays responsive.
    pub fn set(&mut self, mood: Mood) {
        self.mood = mood;
        if let Err(err) = self.store.save(mood) {
            log::warn!("Failed to persist mood preference {}: {}", mood, err);
        }
    }

    pub fn toggle(&mut self) -> Mood {
        let next = self.mood.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
