//! Veneer Component Styles
//!
//! Button, card, input, modal and text styles built on the variant resolver,
//! plus composite content tiles. Each component binds a built-in
//! [`VariantSchema`](veneer_variants::VariantSchema) to a typed builder; `classes(&StyleContext)` resolves it against a token
//! store and a viewport classification.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//! use veneer_viewport::{MediaState, ViewportObserver};
//!
//! let observer = ViewportObserver::default();
//! observer.update(MediaState::desktop(1280.0));
//!
//! let ctx = StyleContext::default().with_observer(&observer);
//! let cta = cn::button()
//!     .variant(ButtonVariant::Accent)
//!     .responsive_size(Responsive::new().sm(ButtonSize::Sm).lg(ButtonSize::Lg));
//! assert!(cta.classes(&ctx).unwrap().contains("h-12"));
//! ```

pub mod components;
mod context;

pub use context::StyleContext;

/// Result of resolving component classes
pub type Result<T> = std::result::Result<T, veneer_variants::ResolveError>;

/// Component constructors
pub mod cn {
    pub use crate::components::button::{
        button, button_group, icon_button, link_button, presets,
    };
    pub use crate::components::card::card;
    pub use crate::components::input::{
        form_field, input, input_group, password_input, search_input, textarea,
    };
    pub use crate::components::modal::modal;
    pub use crate::components::showcase::{article_card, community_card, feature_card, stats_card};
    pub use crate::components::text::text;
}

pub mod prelude {
    pub use crate::cn;
    pub use crate::components::*;
    pub use crate::context::StyleContext;
    pub use veneer_variants::{ResolvedStyles, Responsive};
}
