use veneer_variants::{OverrideMode, Selection};

/// Caller classes appended after a component's own directives
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ExtraClasses {
    classes: Vec<String>,
    mode: OverrideMode,
}

impl ExtraClasses {
    pub(crate) fn push(&mut self, classes: &str) {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
    }

    pub(crate) fn merge(&mut self) {
        self.mode = OverrideMode::Merge;
    }

    pub(crate) fn apply(&self, mut selection: Selection) -> Selection {
        for class in &self.classes {
            selection.push_class(class);
        }
        selection.mode(self.mode)
    }
}

/// Build a built-in schema, panicking with the schema's name if it is invalid
macro_rules! builtin_schema {
    ($builder:expr) => {{
        static SCHEMA: std::sync::OnceLock<veneer_variants::VariantSchema> =
            std::sync::OnceLock::new();
        SCHEMA.get_or_init(|| {
            let builder = $builder;
            builder
                .build()
                .unwrap_or_else(|err| panic!("built-in schema is invalid: {err}"))
        })
    }};
}

pub(crate) use builtin_schema;

/// A built-in schema made of one fixed class list
macro_rules! fixed_schema {
    ($name:literal, $classes:expr) => {
        $crate::components::shared::builtin_schema!(
            veneer_variants::VariantSchema::builder($name)
                .base($classes)
                .policy(veneer_variants::ConflictPolicy::Collapse)
        )
    };
}

pub(crate) use fixed_schema;
