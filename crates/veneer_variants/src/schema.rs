//! Variant schemas
//!
//! A schema is declared once per component: base directives, an ordered set
//! of axes each mapping values to directives, compound rules over several
//! axes, and per-axis defaults. Everything is validated when the schema is
//! built, so resolution only has to check the caller's selection.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use veneer_tokens::{TokenError, TokenStore};

use crate::directive::Directive;
use crate::error::SchemaError;

static NEXT_SCHEMA_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique schema identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(u64);

impl SchemaId {
    fn next() -> Self {
        SchemaId(NEXT_SCHEMA_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// How conflicting schema-derived directives are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Keep every schema-derived directive; only overrides supersede
    #[default]
    Keep,
    /// Later schema-derived directives also supersede earlier ones on the
    /// same property
    Collapse,
}

/// Directives applied when every named axis has the named value
#[derive(Clone, Debug)]
pub struct CompoundRule {
    conditions: IndexMap<String, String>,
    directives: Vec<Directive>,
}

impl CompoundRule {
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.conditions
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Whether every condition holds in `effective` (axis -> value)
    pub fn matches(&self, effective: &IndexMap<String, String>) -> bool {
        self.conditions
            .iter()
            .all(|(axis, value)| effective.get(axis) == Some(value))
    }
}

/// A validated variant schema
#[derive(Clone, Debug)]
pub struct VariantSchema {
    id: SchemaId,
    name: String,
    base: Vec<Directive>,
    axes: IndexMap<String, IndexMap<String, Vec<Directive>>>,
    flags: FxHashSet<String>,
    compounds: Vec<CompoundRule>,
    defaults: IndexMap<String, String>,
    policy: ConflictPolicy,
}

impl VariantSchema {
    pub fn builder(name: impl Into<String>) -> VariantSchemaBuilder {
        VariantSchemaBuilder::new(name)
    }

    pub fn id(&self) -> SchemaId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &[Directive] {
        &self.base
    }

    /// Axis names in declaration order
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    pub fn has_axis(&self, axis: &str) -> bool {
        self.axes.contains_key(axis)
    }

    /// Declared values of an axis, in declaration order
    pub fn values(&self, axis: &str) -> impl Iterator<Item = &str> {
        self.axes
            .get(axis)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }

    pub fn has_value(&self, axis: &str, value: &str) -> bool {
        self.axes
            .get(axis)
            .is_some_and(|values| values.contains_key(value))
    }

    /// Directives for one axis value
    pub fn directives(&self, axis: &str, value: &str) -> Option<&[Directive]> {
        self.axes
            .get(axis)
            .and_then(|values| values.get(value))
            .map(Vec::as_slice)
    }

    /// Whether the axis was declared with [`VariantSchemaBuilder::flag`]
    pub fn is_flag(&self, axis: &str) -> bool {
        self.flags.contains(axis)
    }

    pub fn compounds(&self) -> &[CompoundRule] {
        &self.compounds
    }

    pub fn default_value(&self, axis: &str) -> Option<&str> {
        self.defaults.get(axis).map(String::as_str)
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Every directive template in the schema
    pub fn all_directives(&self) -> impl Iterator<Item = &Directive> {
        self.base
            .iter()
            .chain(self.axes.values().flat_map(|values| values.values().flatten()))
            .chain(self.compounds.iter().flat_map(|rule| rule.directives.iter()))
    }

    /// Check every token reference against a store up front
    ///
    /// Resolution reports missing tokens anyway; this finds them without
    /// having to hit every axis value.
    pub fn check_tokens(&self, store: &TokenStore) -> Result<(), TokenError> {
        for directive in self.all_directives() {
            for (group, name) in directive.references() {
                store.get(group, name)?;
            }
        }
        Ok(())
    }

    /// Build a schema from a TOML document
    ///
    /// ```toml
    /// name = "badge"
    /// base = "inline-flex items-center"
    /// policy = "keep"
    ///
    /// [variants.tone]
    /// neutral = "bg-neutral-800 text-neutral-100"
    /// accent = ["bg-[{colors.figma.accent.primary}]", "text-neutral-900"]
    ///
    /// [flags]
    /// pill = "rounded-full"
    ///
    /// [[compound]]
    /// when = { tone = "accent", pill = true }
    /// class = "shadow-md"
    ///
    /// [defaults]
    /// tone = "neutral"
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = toml::from_str(src)?;
        file.into_builder().build()
    }
}

/// Builder for [`VariantSchema`]
///
/// Declaration order of axes, values and compound rules is preserved and
/// determines output order.
#[derive(Debug, Clone)]
pub struct VariantSchemaBuilder {
    name: String,
    base: Vec<String>,
    axes: IndexMap<String, Vec<(String, String)>>,
    flags: Vec<String>,
    compounds: Vec<(Vec<(String, String)>, String)>,
    defaults: Vec<(String, String)>,
    policy: ConflictPolicy,
}

impl VariantSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: Vec::new(),
            axes: IndexMap::new(),
            flags: Vec::new(),
            compounds: Vec::new(),
            defaults: Vec::new(),
            policy: ConflictPolicy::default(),
        }
    }

    /// Append base directives (whitespace separated)
    pub fn base(mut self, directives: &str) -> Self {
        self.base.push(directives.to_string());
        self
    }

    /// Declare one value of an axis
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        directives: &str,
    ) -> Self {
        self.axes
            .entry(axis.into())
            .or_default()
            .push((value.into(), directives.to_string()));
        self
    }

    /// Declare a boolean axis: `"true"` applies `directives`, `"false"`
    /// applies nothing
    pub fn flag(self, axis: impl Into<String>, directives: &str) -> Self {
        let axis = axis.into();
        let mut builder = self
            .variant(axis.clone(), "true", directives)
            .variant(axis.clone(), "false", "");
        builder.flags.push(axis);
        builder
    }

    /// Declare a compound rule
    pub fn compound<I, K, V>(mut self, conditions: I, directives: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let conditions = conditions
            .into_iter()
            .map(|(axis, value)| (axis.into(), value.into()))
            .collect();
        self.compounds.push((conditions, directives.to_string()));
        self
    }

    /// Value used for `axis` when the selection omits it
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((axis.into(), value.into()));
        self
    }

    pub fn policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<VariantSchema, SchemaError> {
        let name = self.name;

        let mut base = Vec::new();
        for directives in &self.base {
            base.extend(Directive::parse_list(directives)?);
        }

        let mut axes: IndexMap<String, IndexMap<String, Vec<Directive>>> = IndexMap::new();
        for (axis, values) in self.axes {
            let mut parsed = IndexMap::new();
            for (value, directives) in values {
                if parsed.contains_key(&value) {
                    return Err(SchemaError::DuplicateVariantValue {
                        schema: name,
                        axis,
                        value,
                    });
                }
                parsed.insert(value, Directive::parse_list(&directives)?);
            }
            axes.insert(axis, parsed);
        }

        let mut compounds = Vec::with_capacity(self.compounds.len());
        for (index, (conditions, directives)) in self.compounds.into_iter().enumerate() {
            if conditions.is_empty() {
                return Err(SchemaError::EmptyCompoundRule {
                    schema: name,
                    index,
                });
            }
            for (axis, value) in &conditions {
                let Some(values) = axes.get(axis) else {
                    return Err(SchemaError::UnknownCompoundAxis {
                        schema: name,
                        index,
                        axis: axis.clone(),
                    });
                };
                if !values.contains_key(value) {
                    return Err(SchemaError::DanglingCompoundValue {
                        schema: name,
                        index,
                        axis: axis.clone(),
                        value: value.clone(),
                    });
                }
            }
            let mut merged = IndexMap::with_capacity(conditions.len());
            for (axis, value) in conditions {
                if merged.contains_key(&axis) {
                    return Err(SchemaError::DuplicateCompoundAxis {
                        schema: name,
                        index,
                        axis,
                    });
                }
                merged.insert(axis, value);
            }
            compounds.push(CompoundRule {
                conditions: merged,
                directives: Directive::parse_list(&directives)?,
            });
        }

        let mut defaults = IndexMap::new();
        for (axis, value) in self.defaults {
            let Some(values) = axes.get(&axis) else {
                return Err(SchemaError::UnknownDefaultAxis { schema: name, axis });
            };
            if !values.contains_key(&value) {
                return Err(SchemaError::InvalidDefaultValue {
                    schema: name,
                    axis,
                    value,
                });
            }
            if defaults.contains_key(&axis) {
                return Err(SchemaError::DuplicateDefault { schema: name, axis });
            }
            defaults.insert(axis, value);
        }

        let schema = VariantSchema {
            id: SchemaId::next(),
            name,
            base,
            axes,
            flags: self.flags.into_iter().collect(),
            compounds,
            defaults,
            policy: self.policy,
        };
        tracing::debug!(
            "VariantSchema '{}' built: {} axes, {} compound rules",
            schema.name,
            schema.axes.len(),
            schema.compounds.len()
        );
        Ok(schema)
    }
}

// ========== Schema files ==========

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    name: String,
    #[serde(default)]
    base: ClassList,
    #[serde(default)]
    policy: ConflictPolicy,
    #[serde(default)]
    variants: IndexMap<String, IndexMap<String, ClassList>>,
    #[serde(default)]
    flags: IndexMap<String, ClassList>,
    #[serde(default)]
    compound: Vec<CompoundFile>,
    #[serde(default)]
    defaults: IndexMap<String, AxisValue>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompoundFile {
    when: IndexMap<String, AxisValue>,
    #[serde(default)]
    class: ClassList,
}

/// One string of directives or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassList {
    One(String),
    Many(Vec<String>),
}

impl Default for ClassList {
    fn default() -> Self {
        ClassList::Many(Vec::new())
    }
}

impl ClassList {
    fn joined(&self) -> String {
        match self {
            ClassList::One(s) => s.clone(),
            ClassList::Many(parts) => parts.join(" "),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AxisValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl AxisValue {
    fn into_string(self) -> String {
        match self {
            AxisValue::Flag(b) => b.to_string(),
            AxisValue::Number(n) => n.to_string(),
            AxisValue::Text(s) => s,
        }
    }
}

impl SchemaFile {
    fn into_builder(self) -> VariantSchemaBuilder {
        let mut builder = VariantSchemaBuilder::new(self.name)
            .base(&self.base.joined())
            .policy(self.policy);
        for (axis, values) in self.variants {
            for (value, classes) in values {
                builder = builder.variant(axis.clone(), value, &classes.joined());
            }
        }
        for (axis, classes) in self.flags {
            builder = builder.flag(axis, &classes.joined());
        }
        for rule in self.compound {
            let conditions = rule
                .when
                .into_iter()
                .map(|(axis, value)| (axis, value.into_string()));
            builder = builder.compound(conditions, &rule.class.joined());
        }
        for (axis, value) in self.defaults {
            builder = builder.default_variant(axis, value.into_string());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized() -> VariantSchemaBuilder {
        VariantSchema::builder("sized")
            .base("inline-flex")
            .variant("size", "sm", "h-8 px-3")
            .variant("size", "md", "h-10 px-5")
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let schema = sized()
            .variant("tone", "quiet", "opacity-80")
            .flag("block", "w-full")
            .build()
            .unwrap();
        assert_eq!(schema.axes().collect::<Vec<_>>(), vec!["size", "tone", "block"]);
        assert_eq!(schema.values("size").collect::<Vec<_>>(), vec!["sm", "md"]);
        assert!(schema.is_flag("block"));
        assert_eq!(schema.directives("block", "false"), Some(&[][..]));
    }

    #[test]
    fn test_schema_ids_are_unique() {
        let a = sized().build().unwrap();
        let b = sized().build().unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_compound_validation() {
        assert_eq!(
            sized().compound([("size", "xl")], "text-lg").build().unwrap_err(),
            SchemaError::DanglingCompoundValue {
                schema: "sized".into(),
                index: 0,
                axis: "size".into(),
                value: "xl".into()
            }
        );
        assert!(matches!(
            sized().compound([("tone", "loud")], "text-lg").build(),
            Err(SchemaError::UnknownCompoundAxis { .. })
        ));
        assert!(matches!(
            sized()
                .compound(Vec::<(&str, &str)>::new(), "text-lg")
                .build(),
            Err(SchemaError::EmptyCompoundRule { index: 0, .. })
        ));
    }

    #[test]
    fn test_default_validation() {
        assert!(matches!(
            sized().default_variant("tone", "quiet").build(),
            Err(SchemaError::UnknownDefaultAxis { .. })
        ));
        assert_eq!(
            sized().default_variant("size", "xl").build().unwrap_err(),
            SchemaError::InvalidDefaultValue {
                schema: "sized".into(),
                axis: "size".into(),
                value: "xl".into()
            }
        );
    }

    #[test]
    fn test_compound_axis_named_twice() {
        assert_eq!(
            sized()
                .compound([("size", "sm"), ("size", "md")], "text-lg")
                .build()
                .unwrap_err(),
            SchemaError::DuplicateCompoundAxis {
                schema: "sized".into(),
                index: 0,
                axis: "size".into()
            }
        );
    }

    #[test]
    fn test_default_given_twice() {
        assert_eq!(
            sized()
                .default_variant("size", "sm")
                .default_variant("size", "md")
                .build()
                .unwrap_err(),
            SchemaError::DuplicateDefault {
                schema: "sized".into(),
                axis: "size".into()
            }
        );
    }

    #[test]
    fn test_duplicate_value() {
        assert!(matches!(
            sized().variant("size", "sm", "h-7").build(),
            Err(SchemaError::DuplicateVariantValue { .. })
        ));
    }

    #[test]
    fn test_directives_are_checked_at_build() {
        assert!(matches!(
            sized().base("bg-[{colors.nope").build(),
            Err(SchemaError::MalformedDirective { .. })
        ));
        assert!(matches!(
            sized().variant("size", "lg", "text-[{fonts.body}]").build(),
            Err(SchemaError::UnknownTokenGroup { .. })
        ));
    }

    #[test]
    fn test_check_tokens() {
        let store = TokenStore::builtin();
        let good = sized()
            .base("text-[{colors.figma.text.primary}]")
            .build()
            .unwrap();
        assert!(good.check_tokens(&store).is_ok());

        let bad = sized()
            .compound([("size", "md")], "bg-[{colors.figma.nope}]")
            .build()
            .unwrap();
        assert!(bad.check_tokens(&store).is_err());
    }
}
