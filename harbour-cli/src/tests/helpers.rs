//! Test helpers for writing preference and location files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Input files for one `score` invocation, removed on drop.
pub(super) struct ScoreInputs {
    dir: TempDir,
    preferences: Utf8PathBuf,
    locations: Utf8PathBuf,
}

impl ScoreInputs {
    /// Three cities with only a country each, and a preference for Portugal.
    pub(super) fn new() -> Self {
        Self::with_documents(
            &json!({ "region_preferences": { "countries": ["Portugal"] } }),
            &json!([
                { "name": "Madrid", "country": "Spain" },
                { "name": "Lisbon", "country": "Portugal" },
                { "name": "Oslo", "country": "Norway" }
            ]),
        )
    }

    pub(super) fn with_documents(preferences: &Value, locations: &Value) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = utf8(dir.path());
        let preferences_path = root.join("preferences.json");
        let locations_path = root.join("locations.json");
        write_json(&preferences_path, preferences);
        write_json(&locations_path, locations);
        Self {
            dir,
            preferences: preferences_path,
            locations: locations_path,
        }
    }

    pub(super) fn preferences(&self) -> &Utf8Path {
        &self.preferences
    }

    pub(super) fn locations(&self) -> &Utf8Path {
        &self.locations
    }

    /// Path inside the temporary directory that does not exist yet.
    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        utf8(self.dir.path()).join(name)
    }
}

pub(super) fn utf8(path: &std::path::Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("utf-8 temp path")
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let contents = serde_json::to_string(value).expect("serialise fixture");
    std::fs::write(path, contents).expect("write fixture");
}
