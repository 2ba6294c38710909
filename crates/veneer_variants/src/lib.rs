//! Veneer Variant Resolver
//!
//! Turns a component's declared visual variants plus a caller's selection
//! into an ordered, de-duplicated list of utility classes.
//!
//! # Overview
//!
//! - [`VariantSchema`]: base directives, axes (`variant`, `size`, ...),
//!   compound rules and defaults, validated at build time
//! - [`Selection`]: the caller's axis values (fixed or per breakpoint), extra
//!   classes and whether those classes supersede or merge
//! - [`Resolver`]: resolves a selection against a token store and a viewport
//!   [`Classification`]; [`resolve`] uses the global store
//! - [`CachedResolver`]: LRU memoization in front of a resolver
//!
//! Directives may reference design tokens as `{group.name}`; references are
//! looked up at resolution time.
//!
//! # Example
//!
//! ```rust
//! use veneer_variants::{resolve, Selection, VariantSchema};
//!
//! let button = VariantSchema::builder("button")
//!     .base("inline-flex items-center rounded-full")
//!     .variant("variant", "primary", "bg-neutral-900 text-neutral-100")
//!     .variant("variant", "accent", "bg-[{colors.figma.accent.primary}] text-neutral-900")
//!     .variant("size", "sm", "h-8 px-3")
//!     .variant("size", "md", "h-10 px-5")
//!     .compound([("variant", "accent"), ("size", "md")], "shadow-md")
//!     .default_variant("variant", "primary")
//!     .default_variant("size", "md")
//!     .build()
//!     .unwrap();
//!
//! let styles = resolve(&button, &Selection::new().set("variant", "accent").class("px-8")).unwrap();
//! assert_eq!(
//!     styles.class_string(),
//!     "inline-flex items-center rounded-full bg-[#E9EBDF] text-neutral-900 h-10 shadow-md px-8"
//! );
//! ```

mod cache;
mod directive;
mod error;
mod property;
mod resolve;
mod schema;
mod selection;
mod styles;

pub use cache::{CacheStats, CachedResolver};
pub use directive::Directive;
pub use error::{ResolveError, SchemaError};
pub use property::{PropertyClassifier, PropertyId, TailwindClassifier};
pub use resolve::{resolve, EffectiveValues, Resolver};
pub use schema::{CompoundRule, ConflictPolicy, SchemaId, VariantSchema, VariantSchemaBuilder};
pub use selection::{AxisSelection, OverrideMode, Selection};
pub use styles::{class_names, ResolvedStyles};

pub use veneer_viewport::{Breakpoint, Classification, Responsive};
