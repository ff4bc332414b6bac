//! Hobby definitions read from a JSON file on disk.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use harbour_scorer::{HobbyDefinition, HobbyDefinitionSource, HobbySourceError};

/// Reads a JSON array of hobby definitions each time the cache refreshes.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use harbour_cli::JsonFileHobbySource;
/// use harbour_scorer::HobbyCatalogueCache;
///
/// let source = JsonFileHobbySource::new("hobbies.json");
/// let cache = HobbyCatalogueCache::new(Arc::new(source));
/// # drop(cache);
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileHobbySource {
    path: Utf8PathBuf,
    origin: String,
}

impl JsonFileHobbySource {
    /// Create a source backed by `path`.
    #[must_use]
    pub fn new(file: impl Into<Utf8PathBuf>) -> Self {
        let path = file.into();
        let origin = path.to_string();
        Self { path, origin }
    }

    /// File the definitions are read from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        self.path.as_path()
    }
}

#[async_trait]
impl HobbyDefinitionSource for JsonFileHobbySource {
    async fn fetch_definitions(&self) -> Result<Vec<HobbyDefinition>, HobbySourceError> {
        let contents =
            harbour_fs::read_utf8(&self.path).map_err(|source| HobbySourceError::Read {
                origin: self.origin.clone(),
                source,
            })?;
        let definitions: Vec<HobbyDefinition> =
            serde_json::from_str(&contents).map_err(|source| HobbySourceError::Decode {
                origin: self.origin.clone(),
                source,
            })?;
        log::debug!(
            "read {} hobby definitions from {}",
            definitions.len(),
            self.origin
        );
        Ok(definitions)
    }

    fn name(&self) -> &str {
        &self.origin
    }
}
