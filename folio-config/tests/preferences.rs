use std::fs;

use folio_config::FileMoodStore;
use folio_core::mood::{Mood, MoodPreference, MoodStore, PreferenceError};

#[test]
fn missing_file_loads_as_unset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileMoodStore::at(dir.path().join("preferences.json"));
    assert!(matches!(store.load(), Ok(None)));
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/data/preferences.json");
    let store = FileMoodStore::at(&path);

    store.save(Mood::Dark).expect("save");
    assert_eq!(store.load().expect("load"), Some(Mood::Dark));

    let raw = fs::read_to_string(&path).expect("file written");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["portfolio-mood"], "dark");
}

#[test]
fn unrelated_keys_survive_a_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"window": "maximized"}"#).expect("seed");

    FileMoodStore::at(&path).save(Mood::Light).expect("save");

    let raw = fs::read_to_string(&path).expect("read");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json["window"], "maximized");
    assert_eq!(json["portfolio-mood"], "light");
}

#[test]
fn corrupt_file_falls_back_to_light_and_is_replaced_on_toggle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{not json").expect("seed");

    let store = FileMoodStore::at(&path);
    assert!(matches!(store.load(), Err(PreferenceError::Malformed(_))));

    let mut preference = MoodPreference::load(store);
    assert_eq!(preference.get(), Mood::Light);
    assert_eq!(preference.toggle(), Mood::Dark);

    let reloaded = FileMoodStore::at(&path);
    assert_eq!(reloaded.load().expect("rewritten"), Some(Mood::Dark));
}

#[test]
fn unknown_mood_value_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"portfolio-mood": "sepia"}"#).expect("seed");

    assert!(matches!(
        FileMoodStore::at(&path).load(),
        Err(PreferenceError::InvalidValue(value)) if value == "sepia"
    ));
}
