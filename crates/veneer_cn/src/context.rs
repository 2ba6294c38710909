//! Resolution context shared by every component

use veneer_tokens::TokenStore;
use veneer_variants::{Classification, Resolver};
use veneer_viewport::ViewportObserver;

/// Token store and viewport classification components resolve against
///
/// `StyleContext::default()` uses the global token store and the
/// pre-measurement classification, so responsive sizes fall back to their
/// smallest breakpoint until a real classification is supplied.
#[derive(Clone, Copy, Debug)]
pub struct StyleContext<'a> {
    store: &'a TokenStore,
    classification: Classification,
}

impl<'a> StyleContext<'a> {
    pub fn new(store: &'a TokenStore) -> Self {
        Self {
            store,
            classification: Classification::default(),
        }
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Snapshot the observer's current classification
    pub fn with_observer(self, observer: &ViewportObserver) -> Self {
        self.with_classification(*observer.current())
    }

    pub fn store(&self) -> &'a TokenStore {
        self.store
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.store).with_classification(self.classification)
    }
}

impl Default for StyleContext<'static> {
    fn default() -> Self {
        StyleContext::new(TokenStore::global())
    }
}
