//! Button component styles
//!
//! Pill-shaped buttons in five variants and five sizes. The size may differ
//! per breakpoint.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let ctx = StyleContext::default();
//! let start = cn::button()
//!     .variant(ButtonVariant::Accent)
//!     .size(ButtonSize::Lg)
//!     .class("mt-6");
//! let classes = start.classes(&ctx).unwrap();
//! assert!(classes.contains("bg-[#E9EBDF]"));
//! assert!(classes.contains("h-12"));
//! assert!(start.is_interactive());
//! ```

use veneer_variants::{class_names, ConflictPolicy, ResolvedStyles, Selection, VariantSchema};
use veneer_viewport::Responsive;

use super::shared::{builtin_schema, ExtraClasses};
use crate::context::StyleContext;
use crate::Result;

/// Button variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Dark filled button
    #[default]
    Primary,
    /// Transparent with a border
    Secondary,
    /// Transparent without a border
    Ghost,
    /// Text-only link
    Link,
    /// Filled with the accent color
    Accent,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
            ButtonVariant::Accent => "accent",
        }
    }

    pub fn all() -> &'static [ButtonVariant] {
        &[
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
            ButtonVariant::Accent,
        ]
    }
}

/// Button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// 32px tall
    Sm,
    /// 40px tall
    #[default]
    Md,
    /// 48px tall
    Lg,
    /// 56px tall
    Xl,
    /// 40px square
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
            ButtonSize::Xl => "xl",
            ButtonSize::Icon => "icon",
        }
    }

    pub fn all() -> &'static [ButtonSize] {
        &[
            ButtonSize::Sm,
            ButtonSize::Md,
            ButtonSize::Lg,
            ButtonSize::Xl,
            ButtonSize::Icon,
        ]
    }
}

/// Classes of the spinner overlay shown while loading
pub const SPINNER_OVERLAY_CLASSES: &str = "absolute inset-0 flex items-center justify-center";
/// Classes of the spinner itself
pub const SPINNER_CLASSES: &str =
    "w-4 h-4 border-2 border-current border-t-transparent rounded-full animate-spin";

const CONTENT_CLASSES: &str = "flex items-center justify-center gap-2";

/// The button variant schema
pub fn button_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("button")
        .base("inline-flex items-center justify-center")
        .base("font-normal text-sm leading-tight")
        .base("transition-all duration-200 ease-out")
        .base("focus:outline-none focus:ring-2 focus:ring-offset-2")
        .base("disabled:opacity-50 disabled:cursor-not-allowed")
        .base("relative overflow-hidden")
        .variant(
            "variant",
            "primary",
            "bg-neutral-900 text-neutral-100 border border-neutral-700 \
             hover:bg-neutral-800 hover:border-neutral-600 focus:ring-neutral-500 \
             active:bg-neutral-950",
        )
        .variant(
            "variant",
            "secondary",
            "bg-transparent text-neutral-100 border border-neutral-600 \
             hover:bg-neutral-800/20 hover:border-neutral-500 focus:ring-neutral-500 \
             active:bg-neutral-800/40",
        )
        .variant(
            "variant",
            "ghost",
            "bg-transparent text-neutral-100 border border-transparent \
             hover:bg-neutral-800/20 focus:ring-neutral-500 active:bg-neutral-800/40",
        )
        .variant(
            "variant",
            "link",
            "bg-transparent text-neutral-100 border border-transparent \
             hover:text-neutral-200 hover:underline focus:ring-neutral-500 \
             p-0 h-auto font-normal",
        )
        .variant(
            "variant",
            "accent",
            "bg-[{colors.figma.accent.primary}] text-neutral-900 \
             border border-[{colors.figma.accent.primary}] \
             hover:bg-[{colors.primary.200}] hover:border-[{colors.primary.200}] \
             focus:ring-[{colors.figma.accent.primary}] active:bg-[{colors.primary.300}]",
        )
        .variant("size", "sm", "h-8 px-3 text-xs rounded-full")
        .variant("size", "md", "h-10 px-5 text-sm rounded-full")
        .variant("size", "lg", "h-12 px-6 text-base rounded-full")
        .variant("size", "xl", "h-14 px-8 text-lg rounded-full")
        .variant("size", "icon", "h-10 w-10 rounded-full p-0")
        .flag("loading", "cursor-wait")
        .flag("full_width", "w-full")
        .default_variant("variant", "primary")
        .default_variant("size", "md")
        .policy(ConflictPolicy::Collapse))
}

/// Button style builder
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    variant: ButtonVariant,
    size: Responsive<ButtonSize>,
    loading: bool,
    full_width: bool,
    disabled: bool,
    extra: ExtraClasses,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::default(),
            size: Responsive::fixed(ButtonSize::default()),
            loading: false,
            full_width: false,
            disabled: false,
            extra: ExtraClasses::default(),
        }
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Responsive::fixed(size);
        self
    }

    /// Size picked per breakpoint, e.g. `sm` on phones and `lg` from `lg` up
    pub fn responsive_size(mut self, size: Responsive<ButtonSize>) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra classes; they replace conflicting button classes
    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    /// Keep conflicting button classes next to the extra classes
    pub fn merge_classes(mut self) -> Self {
        self.extra.merge();
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether clicks should be handled; false while disabled or loading
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn selection(&self) -> Selection {
        let selection = Selection::new()
            .set("variant", self.variant.as_str())
            .set("size", self.size.map(|size| size.as_str()))
            .flag("loading", self.loading)
            .flag("full_width", self.full_width);
        self.extra.apply(selection)
    }

    /// Classes of the button element
    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(button_schema(), &self.selection())
    }

    /// Classes of the inner label span, hidden while loading
    pub fn content_classes(&self) -> String {
        class_names([Some(CONTENT_CLASSES), self.loading.then_some("opacity-0")])
    }

    /// Spinner overlay and spinner classes, present while loading
    pub fn spinner_classes(&self) -> Option<(&'static str, &'static str)> {
        self.loading
            .then_some((SPINNER_OVERLAY_CLASSES, SPINNER_CLASSES))
    }
}

/// Row of buttons
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonGroup {
    extra: ExtraClasses,
}

impl ButtonGroup {
    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let schema = builtin_schema!(VariantSchema::builder("button_group")
            .base("inline-flex items-center gap-2")
            .policy(ConflictPolicy::Collapse));
        ctx.resolver().resolve(schema, &self.extra.apply(Selection::new()))
    }
}

/// Trailing icon of a link that opens elsewhere
pub const EXTERNAL_ICON_CLASSES: &str = "w-3 h-3 ml-1";

/// Anchor rendered as a link-variant button
#[derive(Clone, Debug, PartialEq)]
pub struct LinkButton {
    button: Button,
    href: String,
    external: bool,
}

impl LinkButton {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            button: Button::new().variant(ButtonVariant::Link),
            href: href.into(),
            external: false,
        }
    }

    /// Open the target in a new browsing context
    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.button = self.button.size(size);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.button = self.button.class(classes);
        self
    }

    pub fn merge_classes(mut self) -> Self {
        self.button = self.button.merge_classes();
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Extra anchor attributes; external links get `target` and `rel`
    pub fn attributes(&self) -> &'static [(&'static str, &'static str)] {
        if self.external {
            &[("target", "_blank"), ("rel", "noopener noreferrer")]
        } else {
            &[]
        }
    }

    pub fn external_icon_classes(&self) -> Option<&'static str> {
        self.external.then_some(EXTERNAL_ICON_CLASSES)
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.button.classes(ctx)
    }
}

pub fn button() -> Button {
    Button::new()
}

pub fn link_button(href: impl Into<String>) -> LinkButton {
    LinkButton::new(href)
}

/// Square icon-only button
pub fn icon_button() -> Button {
    Button::new().size(ButtonSize::Icon)
}

pub fn button_group() -> ButtonGroup {
    ButtonGroup::default()
}

/// Call-to-action buttons from the marketing pages
pub mod presets {
    use super::{Button, ButtonSize, ButtonVariant};

    /// "Start for free"
    pub fn start_for_free() -> Button {
        Button::new()
            .variant(ButtonVariant::Accent)
            .size(ButtonSize::Md)
    }

    /// "Book a demo"
    pub fn book_demo() -> Button {
        Button::new()
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Md)
    }

    /// "Sign in"
    pub fn sign_in() -> Button {
        Button::new().variant(ButtonVariant::Link).size(ButtonSize::Sm)
    }
}
