//! File-backed preference storage.
//!
//! Preferences live in one flat JSON object, `preferences.json`, inside the
//! platform data directory, e.g. `{"portfolio-mood": "dark"}`. Unknown keys
//! are preserved on write.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::mood::{MOOD_KEY, Mood, MoodStore, PreferenceError};

pub const PREFERENCES_FILE: &str = "preferences.json";

type PreferenceMap = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileMoodStore {
    path: PathBuf,
}

impl FileMoodStore {
    /// Store under the platform data directory for `folio-player`.
    pub fn new() -> Result<Self, PreferenceError> {
        let proj_dirs =
            ProjectDirs::from("", "folio", "folio-player").ok_or_else(|| {
                PreferenceError::Unavailable(
                    "unable to determine data directory".into(),
                )
            })?;
        Ok(Self::at(proj_dirs.data_dir().join(PREFERENCES_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<PreferenceMap>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Some(PreferenceMap::new())),
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &PreferenceMap) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl MoodStore for FileMoodStore {
    fn load(&self) -> Result<Option<Mood>, PreferenceError> {
        let Some(map) = self.read_map()? else {
            return Ok(None);
        };
        map.get(MOOD_KEY).map(|raw| raw.parse()).transpose()
    }

    fn save(&self, mood: Mood) -> Result<(), PreferenceError> {
        let mut map = match self.read_map() {
            Ok(map) => map.unwrap_or_default(),
            Err(PreferenceError::Malformed(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "replacing malformed preferences file: {err}"
                );
                PreferenceMap::new()
            }
            Err(err) => return Err(err),
        };
        map.insert(MOOD_KEY.to_string(), mood.as_str().to_string());
        self.write_map(&map)?;
        tracing::debug!(mood = %mood, "mood preference saved");
        Ok(())
    }
}
