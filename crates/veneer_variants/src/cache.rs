//! Memoized resolution

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;

use crate::error::ResolveError;
use crate::resolve::Resolver;
use crate::schema::{SchemaId, VariantSchema};
use crate::selection::{OverrideMode, Selection};
use crate::styles::ResolvedStyles;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    schema: SchemaId,
    classifier: &'static str,
    values: Vec<(String, String)>,
    overrides: Vec<String>,
    mode: OverrideMode,
    generation: u64,
}

/// Hit and miss counters of a [`CachedResolver`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// LRU cache in front of [`Resolver::resolve`]
///
/// Entries are keyed by schema identity, the classifier id, the effective
/// axis values (after defaults and responsive derivation), the overrides,
/// the override mode and the token store generation.
pub struct CachedResolver {
    entries: Mutex<LruCache<CacheKey, ResolvedStyles>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedResolver {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// A cache holding at most `capacity` results (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn resolve(
        &self,
        resolver: &Resolver<'_>,
        schema: &VariantSchema,
        selection: &Selection,
    ) -> Result<ResolvedStyles, ResolveError> {
        let effective = resolver.effective_values(schema, selection)?;
        let key = CacheKey {
            schema: schema.id(),
            classifier: resolver.classifier().id(),
            values: effective
                .iter()
                .map(|(axis, value)| (axis.clone(), value.clone()))
                .collect(),
            overrides: selection.overrides().to_vec(),
            mode: selection.override_mode(),
            generation: resolver.store().generation(),
        };

        if let Some(styles) = self.lock().get(&key).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("resolution cache hit for schema '{}'", schema.name());
            return Ok(styles);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("resolution cache miss for schema '{}'", schema.name());
        let styles = resolver.resolve_effective(
            schema,
            &effective,
            selection.overrides(),
            selection.override_mode(),
        )?;
        self.lock().put(key, styles.clone());
        Ok(styles)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.lock().len(),
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, ResolvedStyles>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CachedResolver {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for CachedResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedResolver")
            .field("stats", &self.stats())
            .finish()
    }
}
