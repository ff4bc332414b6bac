//! Hobby definitions and their shared, refreshable cache.
//!
//! Definitions come from an injected [`HobbyDefinitionSource`]. The
//! [`HobbyCatalogueCache`] keeps an immutable snapshot behind an [`Arc`] so
//! scorers read it without locks, and refreshes it at most once per TTL.
//! Refreshes are serialised so concurrent callers never fetch twice.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use harbour_core::matcher::eq_ignore_case;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::HobbySourceError;

/// Default time a fetched catalogue stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// One hobby known to the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyDefinition {
    /// Display name, such as "Bird Watching".
    pub name: String,
    /// Grouping such as "outdoor" or "creative".
    #[serde(default)]
    pub category: Option<String>,
    /// Whether the hobby can be pursued almost anywhere.
    #[serde(default)]
    pub is_universal: bool,
    /// Other names the hobby goes by.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl HobbyDefinition {
    /// Build a definition with no category or aliases.
    pub fn new(name: impl Into<String>, is_universal: bool) -> Self {
        Self {
            name: name.into(),
            category: None,
            is_universal,
            aliases: Vec::new(),
        }
    }

    fn answers_to(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
            || self
                .aliases
                .iter()
                .any(|alias| eq_ignore_case(alias, name))
    }
}

/// An immutable set of hobby definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HobbyCatalogue {
    definitions: Vec<HobbyDefinition>,
}

impl HobbyCatalogue {
    /// Build a catalogue from definitions.
    #[must_use]
    pub const fn new(definitions: Vec<HobbyDefinition>) -> Self {
        Self { definitions }
    }

    /// Look up a hobby by name or alias, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&HobbyDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.answers_to(name))
    }

    /// Report whether the catalogue flags `name` as universal.
    #[must_use]
    pub fn is_universal(&self, name: &str) -> bool {
        self.find(name)
            .is_some_and(|definition| definition.is_universal)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Report whether the catalogue holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Supplies hobby definitions.
///
/// Implementations perform whatever I/O they need; failures are reported as
/// [`HobbySourceError`] and absorbed by the cache.
#[async_trait]
pub trait HobbyDefinitionSource: Send + Sync {
    /// Fetch every known definition.
    async fn fetch_definitions(&self) -> Result<Vec<HobbyDefinition>, HobbySourceError>;

    /// Name used in log messages.
    fn name(&self) -> &str {
        "hobby definitions"
    }
}

/// In-memory [`HobbyDefinitionSource`].
#[derive(Debug, Clone, Default)]
pub struct StaticHobbySource {
    definitions: Vec<HobbyDefinition>,
}

impl StaticHobbySource {
    /// Serve `definitions` on every fetch.
    #[must_use]
    pub const fn new(definitions: Vec<HobbyDefinition>) -> Self {
        Self { definitions }
    }
}

#[async_trait]
impl HobbyDefinitionSource for StaticHobbySource {
    async fn fetch_definitions(&self) -> Result<Vec<HobbyDefinition>, HobbySourceError> {
        Ok(self.definitions.clone())
    }

    fn name(&self) -> &str {
        "static hobby definitions"
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    catalogue: Arc<HobbyCatalogue>,
    fetched_at: Instant,
}

/// Read-mostly cache of the hobby catalogue.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use harbour_scorer::{HobbyCatalogueCache, HobbyDefinition, StaticHobbySource};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let source = StaticHobbySource::new(vec![HobbyDefinition::new("Chess", true)]);
/// let cache = HobbyCatalogueCache::new(Arc::new(source));
/// assert!(cache.is_stale().await);
/// let catalogue = cache.get().await;
/// assert!(catalogue.is_universal("chess"));
/// assert!(!cache.is_stale().await);
/// # });
/// ```
pub struct HobbyCatalogueCache {
    source: Arc<dyn HobbyDefinitionSource>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
    refresh_gate: Mutex<()>,
}

impl std::fmt::Debug for HobbyCatalogueCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HobbyCatalogueCache")
            .field("source", &self.source.name())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl HobbyCatalogueCache {
    /// Build an empty cache over `source` with the default TTL.
    #[must_use]
    pub fn new(source: Arc<dyn HobbyDefinitionSource>) -> Self {
        Self {
            source,
            ttl: DEFAULT_TTL,
            snapshot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Override how long a fetched catalogue stays fresh.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Current catalogue, refreshing first when stale.
    ///
    /// Never fails: a failed refresh keeps the previous snapshot, or yields
    /// an empty catalogue when there is none.
    pub async fn get(&self) -> Arc<HobbyCatalogue> {
        if let Some(fresh) = self.fresh().await {
            return fresh;
        }
        let _gate = self.refresh_gate.lock().await;
        // Another caller may have refreshed while this one waited.
        if let Some(fresh) = self.fresh().await {
            return fresh;
        }
        self.fetch().await
    }

    /// Fetch definitions now, regardless of freshness.
    pub async fn refresh(&self) -> Arc<HobbyCatalogue> {
        let _gate = self.refresh_gate.lock().await;
        self.fetch().await
    }

    /// Report whether the next [`get`](Self::get) will fetch.
    pub async fn is_stale(&self) -> bool {
        self.fresh().await.is_none()
    }

    async fn fresh(&self) -> Option<Arc<HobbyCatalogue>> {
        let guard = self.snapshot.read().await;
        guard
            .as_ref()
            .filter(|snapshot| snapshot.fetched_at.elapsed() < self.ttl)
            .map(|snapshot| Arc::clone(&snapshot.catalogue))
    }

    async fn fetch(&self) -> Arc<HobbyCatalogue> {
        match self.source.fetch_definitions().await {
            Ok(definitions) => {
                log::debug!(
                    "loaded {} hobby definitions from {}",
                    definitions.len(),
                    self.source.name()
                );
                let catalogue = Arc::new(HobbyCatalogue::new(definitions));
                *self.snapshot.write().await = Some(Snapshot {
                    catalogue: Arc::clone(&catalogue),
                    fetched_at: Instant::now(),
                });
                catalogue
            }
            Err(err) => {
                log::warn!(
                    "hobby definition refresh from {} failed: {err}",
                    self.source.name()
                );
                self.snapshot
                    .read()
                    .await
                    .as_ref()
                    .map_or_else(Arc::default, |snapshot| Arc::clone(&snapshot.catalogue))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "spawned tasks should surface panics")]

    use super::*;
    use rstest::{fixture, rstest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches and fails after the first `succeed` calls.
    #[derive(Debug, Default)]
    struct FlakySource {
        calls: AtomicUsize,
        succeed: usize,
    }

    #[async_trait]
    impl HobbyDefinitionSource for FlakySource {
        async fn fetch_definitions(&self) -> Result<Vec<HobbyDefinition>, HobbySourceError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.succeed {
                Ok(vec![HobbyDefinition::new(format!("Hobby {call}"), true)])
            } else {
                Err(HobbySourceError::Unavailable {
                    origin: "flaky".to_owned(),
                    reason: "offline".to_owned(),
                })
            }
        }
    }

    #[fixture]
    fn definitions() -> Vec<HobbyDefinition> {
        vec![
            HobbyDefinition {
                name: "Bird Watching".to_owned(),
                category: Some("outdoor".to_owned()),
                is_universal: true,
                aliases: vec!["Birding".to_owned()],
            },
            HobbyDefinition::new("Polo", false),
        ]
    }

    #[rstest]
    fn catalogue_matches_names_and_aliases(definitions: Vec<HobbyDefinition>) {
        let catalogue = HobbyCatalogue::new(definitions);
        assert!(catalogue.is_universal("birding"));
        assert!(catalogue.is_universal("BIRD WATCHING"));
        assert!(!catalogue.is_universal("Polo"));
        assert!(!catalogue.is_universal("Curling"));
        assert_eq!(catalogue.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn fresh_snapshots_are_reused() {
        let source = Arc::new(FlakySource {
            succeed: usize::MAX,
            ..FlakySource::default()
        });
        let cache = HobbyCatalogueCache::new(source.clone());
        let first = cache.get().await;
        let second = cache.get().await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn stale_snapshots_are_refetched() {
        let source = Arc::new(FlakySource {
            succeed: usize::MAX,
            ..FlakySource::default()
        });
        let cache = HobbyCatalogueCache::new(source.clone()).with_ttl(Duration::ZERO);
        cache.get().await;
        assert!(cache.is_stale().await);
        cache.get().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let source = Arc::new(FlakySource {
            succeed: 1,
            ..FlakySource::default()
        });
        let cache = HobbyCatalogueCache::new(source);
        let first = cache.get().await;
        let after_failure = cache.refresh().await;
        assert!(Arc::ptr_eq(&first, &after_failure));
        assert!(after_failure.is_universal("Hobby 0"));
    }

    #[rstest]
    #[tokio::test]
    async fn failure_without_snapshot_yields_empty_catalogue() {
        let cache = HobbyCatalogueCache::new(Arc::new(FlakySource::default()));
        assert!(cache.get().await.is_empty());
        assert!(cache.is_stale().await);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_fetch_once() {
        let source = Arc::new(FlakySource {
            succeed: usize::MAX,
            ..FlakySource::default()
        });
        let cache = Arc::new(HobbyCatalogueCache::new(source.clone()));
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let shared = Arc::clone(&cache);
                tokio::spawn(async move { shared.get().await })
            })
            .collect();
        for task in tasks {
            task.await.expect("task should not panic");
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
