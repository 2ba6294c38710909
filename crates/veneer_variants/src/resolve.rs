//! Variant resolution
//!
//! Resolution runs in a fixed order: base directives, then each axis's
//! directives in declared axis order, then matching compound rules in
//! declared order, then caller overrides, then removal of exact duplicates
//! (first occurrence wins).

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use veneer_tokens::TokenStore;
use veneer_viewport::Classification;

use crate::directive::Directive;
use crate::error::ResolveError;
use crate::property::{PropertyClassifier, TailwindClassifier};
use crate::schema::{ConflictPolicy, VariantSchema};
use crate::selection::{OverrideMode, Selection};
use crate::styles::{supersede, ResolvedStyles};

static TAILWIND: TailwindClassifier = TailwindClassifier;

/// Effective axis values (axis -> value) in schema axis order
pub type EffectiveValues = IndexMap<String, String>;

/// Resolve against the global token store and the pre-measurement
/// classification
pub fn resolve(schema: &VariantSchema, selection: &Selection) -> Result<ResolvedStyles, ResolveError> {
    Resolver::default().resolve(schema, selection)
}

/// Resolution context: token store, viewport classification and property
/// classifier
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a TokenStore,
    classification: Classification,
    classifier: &'a dyn PropertyClassifier,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a TokenStore) -> Self {
        Self {
            store,
            classification: Classification::default(),
            classifier: &TAILWIND,
        }
    }

    /// Classification responsive selections are derived against
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    pub fn with_classifier(mut self, classifier: &'a dyn PropertyClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn store(&self) -> &'a TokenStore {
        self.store
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn classifier(&self) -> &'a dyn PropertyClassifier {
        self.classifier
    }

    pub fn resolve(
        &self,
        schema: &VariantSchema,
        selection: &Selection,
    ) -> Result<ResolvedStyles, ResolveError> {
        let effective = self.effective_values(schema, selection)?;
        self.resolve_effective(
            schema,
            &effective,
            selection.overrides(),
            selection.override_mode(),
        )
    }

    /// The value each axis resolves to: the selection's value (derived for
    /// the current breakpoint), else the schema default. Axes with neither
    /// are absent.
    pub fn effective_values(
        &self,
        schema: &VariantSchema,
        selection: &Selection,
    ) -> Result<EffectiveValues, ResolveError> {
        for (axis, _) in selection.axes() {
            if !schema.has_axis(axis) {
                tracing::debug!(
                    "schema '{}': ignoring selection for undeclared axis '{}'",
                    schema.name(),
                    axis
                );
            }
        }

        let breakpoint = self.classification.breakpoint;
        let mut effective = EffectiveValues::new();
        for axis in schema.axes() {
            let value = match selection.get(axis) {
                Some(chosen) => Some(chosen.derive(breakpoint).ok_or_else(|| {
                    ResolveError::NoApplicableValue {
                        axis: axis.to_string(),
                    }
                })?),
                None => schema.default_value(axis),
            };
            let Some(value) = value else {
                continue;
            };
            if !schema.has_value(axis, value) {
                return Err(ResolveError::InvalidVariantValue {
                    axis: axis.to_string(),
                    value: value.to_string(),
                });
            }
            effective.insert(axis.to_string(), value.to_string());
        }
        Ok(effective)
    }

    pub(crate) fn resolve_effective(
        &self,
        schema: &VariantSchema,
        effective: &EffectiveValues,
        overrides: &[String],
        mode: OverrideMode,
    ) -> Result<ResolvedStyles, ResolveError> {
        let mut derived = Vec::new();
        self.render_into(schema.base(), &mut derived)?;
        for (axis, value) in effective {
            if let Some(directives) = schema.directives(axis, value) {
                self.render_into(directives, &mut derived)?;
            }
        }
        for rule in schema.compounds() {
            if rule.matches(effective) {
                self.render_into(rule.directives(), &mut derived)?;
            }
        }

        let mut directives = match (schema.policy(), mode) {
            (ConflictPolicy::Keep, OverrideMode::Merge) => {
                derived.extend(overrides.iter().cloned());
                derived
            }
            (policy, mode) => {
                let mut entries = Vec::with_capacity(derived.len() + overrides.len());
                for directive in derived {
                    if policy == ConflictPolicy::Collapse {
                        supersede(&mut entries, directive, self.classifier);
                    } else {
                        let id = self.classifier.classify(&directive);
                        entries.push((directive, id));
                    }
                }
                for directive in overrides {
                    if mode == OverrideMode::Supersede {
                        supersede(&mut entries, directive.clone(), self.classifier);
                    } else {
                        let id = self.classifier.classify(directive);
                        entries.push((directive.clone(), id));
                    }
                }
                entries.into_iter().map(|(directive, _)| directive).collect()
            }
        };

        let mut seen = FxHashSet::default();
        directives.retain(|directive| seen.insert(directive.clone()));

        tracing::trace!(
            "schema '{}': resolved {} directives",
            schema.name(),
            directives.len()
        );
        Ok(ResolvedStyles::new(directives))
    }

    fn render_into(&self, directives: &[Directive], out: &mut Vec<String>) -> Result<(), ResolveError> {
        for directive in directives {
            out.push(directive.render(self.store)?.into_owned());
        }
        Ok(())
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Resolver::new(TokenStore::global())
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("store_generation", &self.store.generation())
            .field("classification", &self.classification)
            .finish_non_exhaustive()
    }
}
