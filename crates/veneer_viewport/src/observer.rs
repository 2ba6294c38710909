//! The viewport observer service
//!
//! A [`ViewportObserver`] holds the current [`Classification`] behind an
//! `Arc` and swaps in a new one whenever the media predicates change. Any
//! number of clones share the same state. Subscribers are called after the
//! swap, outside every internal lock, so a callback may read the observer,
//! subscribe or unsubscribe without deadlocking.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::breakpoint::{Breakpoint, ViewportThresholds};
use crate::classification::Classification;
use crate::error::ViewportError;
use crate::media::{MediaPredicates, MediaState};
use crate::responsive::Responsive;

new_key_type! {
    /// Handle of a registered change callback
    pub struct SubscriberId;
}

/// Change callback invoked with the new classification
pub type ViewportCallback = Arc<dyn Fn(&Classification) + Send + Sync>;

struct Measured {
    media: MediaState,
    predicates: MediaPredicates,
}

struct ObserverInner {
    thresholds: ViewportThresholds,
    measured: RwLock<Option<Measured>>,
    current: RwLock<Arc<Classification>>,
    subscribers: Mutex<SlotMap<SubscriberId, ViewportCallback>>,
    revision: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ObserverInner {
    fn update(&self, media: MediaState) -> bool {
        let predicates = MediaPredicates::evaluate(&media, &self.thresholds);

        let classification = {
            let mut measured = self
                .measured
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let changed = measured
                .as_ref()
                .map_or(true, |prev| prev.predicates != predicates);
            *measured = Some(Measured { media, predicates });
            if !changed {
                tracing::trace!(width = media.width, "viewport predicates unchanged");
                return false;
            }

            let next = Arc::new(Classification::from_predicates(&predicates));
            let mut current = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            tracing::debug!(
                "viewport classification - {} -> {} (width {})",
                current.breakpoint,
                next.breakpoint,
                media.width
            );
            *current = next.clone();
            next
        };

        self.revision.fetch_add(1, Ordering::SeqCst);
        self.notify(&classification);
        true
    }

    fn notify(&self, classification: &Classification) {
        let ids: Vec<SubscriberId> = lock(&self.subscribers).keys().collect();
        for id in ids {
            // A callback earlier in this pass may have removed this one
            let callback = lock(&self.subscribers).get(id).cloned();
            if let Some(callback) = callback {
                callback(classification);
            }
        }
    }
}

/// Shared viewport classification service
///
/// Cloning is cheap and every clone observes the same state.
#[derive(Clone)]
pub struct ViewportObserver {
    inner: Arc<ObserverInner>,
}

impl ViewportObserver {
    pub fn new(thresholds: ViewportThresholds) -> Self {
        if !thresholds.is_ascending() {
            tracing::warn!(?thresholds, "viewport thresholds are not ascending");
        }
        Self {
            inner: Arc::new(ObserverInner {
                thresholds,
                measured: RwLock::new(None),
                current: RwLock::new(Arc::new(Classification::default())),
                subscribers: Mutex::new(SlotMap::with_key()),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Create an observer seeded from, and kept in sync with, `source`
    pub fn with_source(thresholds: ViewportThresholds, source: &dyn MediaSource) -> Self {
        let observer = Self::new(thresholds);
        observer.connect(source);
        observer
    }

    pub fn thresholds(&self) -> ViewportThresholds {
        self.inner.thresholds
    }

    /// Current classification
    ///
    /// Before the first measurement this is [`Classification::default`].
    pub fn current(&self) -> Arc<Classification> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.current().breakpoint
    }

    /// Whether any media state has been received yet
    pub fn has_measured(&self) -> bool {
        self.media().is_some()
    }

    /// Last media state received
    pub fn media(&self) -> Option<MediaState> {
        self.inner
            .measured
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|m| m.media)
    }

    /// Number of classification changes published so far
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::SeqCst)
    }

    /// Feed a new media snapshot
    ///
    /// Returns `true` if the classification changed and subscribers were
    /// notified. Snapshots that leave every predicate as it was (a resize
    /// within the same breakpoint, say) are recorded but publish nothing.
    pub fn update(&self, media: MediaState) -> bool {
        self.inner.update(media)
    }

    /// Register a change callback
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Classification) + Send + Sync + 'static,
    {
        let id = lock(&self.inner.subscribers).insert(Arc::new(callback));
        tracing::trace!(?id, "viewport subscriber added");
        Subscription {
            id,
            observer: Arc::downgrade(&self.inner),
            active: AtomicBool::new(true),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.subscribers).len()
    }

    /// Resolve a responsive value against the current breakpoint
    pub fn derive<'a, T>(&self, values: &'a Responsive<T>) -> Result<&'a T, ViewportError> {
        values.resolve(self.breakpoint())
    }

    /// A sink that feeds this observer without keeping it alive
    pub fn sink(&self) -> MediaSink {
        MediaSink {
            observer: Arc::downgrade(&self.inner),
        }
    }

    /// Take the source's current snapshot and register for its changes
    pub fn connect(&self, source: &dyn MediaSource) {
        if let Some(media) = source.snapshot() {
            self.update(media);
        }
        source.watch(self.sink());
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(ViewportThresholds::DEFAULT)
    }
}

impl std::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("current", &self.current())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Registration returned by [`ViewportObserver::subscribe`]
///
/// Dropping a subscription leaves the callback registered.
#[must_use = "call unsubscribe() to remove the callback"]
pub struct Subscription {
    id: SubscriberId,
    observer: Weak<ObserverInner>,
    active: AtomicBool,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the callback. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(inner) = self.observer.upgrade() {
            lock(&inner.subscribers).remove(self.id);
            tracing::trace!(id = ?self.id, "viewport subscriber removed");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst) && self.observer.strong_count() > 0
    }
}

/// Host-side provider of media state
///
/// Implemented by whatever knows the real viewport (a window, a test
/// harness). The observer never polls. The source pushes changes into the
/// sink it was given.
pub trait MediaSource {
    /// Current media state, if the host has measured one
    fn snapshot(&self) -> Option<MediaState>;

    /// Keep `sink` and push every later change into it
    fn watch(&self, sink: MediaSink);
}

/// Weak handle a [`MediaSource`] pushes media state into
#[derive(Clone)]
pub struct MediaSink {
    observer: Weak<ObserverInner>,
}

impl MediaSink {
    /// Forward a snapshot. Returns `true` if the classification changed.
    pub fn push(&self, media: MediaState) -> bool {
        match self.observer.upgrade() {
            Some(inner) => inner.update(media),
            None => false,
        }
    }

    /// Whether the observer behind this sink still exists
    pub fn is_connected(&self) -> bool {
        self.observer.strong_count() > 0
    }
}

/// A [`MediaSource`] driven by hand
#[derive(Default)]
pub struct ManualMedia {
    state: Mutex<Option<MediaState>>,
    sinks: Mutex<Vec<MediaSink>>,
}

impl ManualMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(media: MediaState) -> Self {
        Self {
            state: Mutex::new(Some(media)),
            sinks: Mutex::new(Vec::new()),
        }
    }

    /// Replace the media state and push it to every connected observer
    pub fn set(&self, media: MediaState) {
        *lock(&self.state) = Some(media);

        let sinks = {
            let mut sinks = lock(&self.sinks);
            sinks.retain(MediaSink::is_connected);
            sinks.clone()
        };
        for sink in sinks {
            sink.push(media);
        }
    }

    /// Edit the current state (or the default state if none was set)
    pub fn modify(&self, f: impl FnOnce(&mut MediaState)) {
        let mut media = lock(&self.state).unwrap_or_default();
        f(&mut media);
        self.set(media);
    }

    pub fn resize(&self, width: f32) {
        self.modify(|media| media.width = width);
    }
}

impl MediaSource for ManualMedia {
    fn snapshot(&self) -> Option<MediaState> {
        *lock(&self.state)
    }

    fn watch(&self, sink: MediaSink) {
        lock(&self.sinks).push(sink);
    }
}
