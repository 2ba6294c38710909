//! Veneer Design Tokens
//!
//! An immutable table of design values keyed by semantic name.
//!
//! # Overview
//!
//! Tokens are the atomic values that make up the design system:
//!
//! - **Colors**: brand scales, neutrals, semantic states, alpha overlays
//! - **Spacing**: 4px-based scale plus named padding/margin/gap values
//! - **Radii**: border radii
//! - **Typography**: font sizes, weights, line heights, letter spacing
//! - **Shadows**: box shadows
//! - **Z-index**: stacking layers
//! - **Motion**: easings and durations
//!
//! A [`TokenStore`] is built once from a nested literal table (or taken from
//! the built-in catalog) and only read afterwards.
//!
//! # Quick Start
//!
//! ```rust
//! use veneer_tokens::{TokenGroup, TokenStore};
//!
//! let store = TokenStore::builtin();
//! let accent = store.get(TokenGroup::Colors, "figma.accent.primary").unwrap();
//! assert_eq!(accent.value().to_string(), "#E9EBDF");
//!
//! let store = TokenStore::from_toml_str(r##"
//!     [colors.brand]
//!     ink = "#151515"
//!
//!     [spacing]
//!     gutter = "24px"
//! "##).unwrap();
//! assert_eq!(store.lookup("spacing.gutter").unwrap().value().to_string(), "24px");
//! ```
//!
//! # Global store
//!
//! ```rust
//! use veneer_tokens::TokenStore;
//!
//! // First call wins; later calls are ignored.
//! TokenStore::init(TokenStore::builtin());
//! let store = TokenStore::global();
//! assert!(!store.is_empty());
//! ```

mod builtin;
mod color;
mod error;
mod group;
mod store;
mod value;

pub use builtin::palette;
pub use color::Color;
pub use error::{Result, TokenError};
pub use group::TokenGroup;
pub use store::{Token, TokenLiteral, TokenNode, TokenStore, TokenTable};
pub use value::TokenValue;
