//! Input component styles
//!
//! Text inputs (and text areas) with an optional label and helper text. An
//! error message takes precedence over the success state, which takes
//! precedence over the chosen variant. Search and password fields wrap an
//! [`Input`] with a trailing adornment.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let ctx = StyleContext::default();
//! let email = cn::input()
//!     .label("Email")
//!     .required(true)
//!     .success(true)
//!     .error("Enter a valid address");
//! assert_eq!(email.effective_variant(), InputVariant::Error);
//! assert_eq!(email.helper_message(), Some("Enter a valid address"));
//! assert!(email.classes(&ctx).unwrap().contains("border-red-500"));
//! assert!(email.helper_classes(&ctx).unwrap().contains("text-red-400"));
//! ```

use veneer_variants::{ConflictPolicy, ResolvedStyles, Selection, VariantSchema};

use super::shared::{builtin_schema, fixed_schema, ExtraClasses};
use crate::context::StyleContext;
use crate::Result;

/// Input variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputVariant {
    #[default]
    Default,
    /// Border only on hover
    Ghost,
    Error,
    Success,
}

impl InputVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputVariant::Default => "default",
            InputVariant::Ghost => "ghost",
            InputVariant::Error => "error",
            InputVariant::Success => "success",
        }
    }

    pub fn all() -> &'static [InputVariant] {
        &[
            InputVariant::Default,
            InputVariant::Ghost,
            InputVariant::Error,
            InputVariant::Success,
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSize::Sm => "sm",
            InputSize::Md => "md",
            InputSize::Lg => "lg",
        }
    }

    pub fn all() -> &'static [InputSize] {
        &[InputSize::Sm, InputSize::Md, InputSize::Lg]
    }
}

/// The input field schema
pub fn input_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("input")
        .base("w-full transition-all duration-200 ease-out")
        .base("font-normal text-sm leading-tight")
        .base("placeholder:text-neutral-500")
        .base("focus:outline-none focus:ring-2 focus:ring-offset-0")
        .base("disabled:opacity-50 disabled:cursor-not-allowed")
        .base("bg-neutral-800/50 backdrop-blur-sm")
        .variant(
            "variant",
            "default",
            "border border-neutral-600 text-[{colors.figma.text.primary}] \
             hover:border-neutral-500 focus:border-[{colors.figma.accent.primary}] \
             focus:ring-[{colors.figma.accent.primary}]/20",
        )
        .variant(
            "variant",
            "ghost",
            "border border-transparent text-[{colors.figma.text.primary}] \
             hover:border-neutral-600 focus:border-[{colors.figma.accent.primary}] \
             focus:ring-[{colors.figma.accent.primary}]/20",
        )
        .variant(
            "variant",
            "error",
            "border border-red-500 text-[{colors.figma.text.primary}] \
             hover:border-red-400 focus:border-red-500 focus:ring-red-500/20",
        )
        .variant(
            "variant",
            "success",
            "border border-green-500 text-[{colors.figma.text.primary}] \
             hover:border-green-400 focus:border-green-500 focus:ring-green-500/20",
        )
        .variant("size", "sm", "h-8 px-3 text-xs rounded-md")
        .variant("size", "md", "h-10 px-4 text-sm rounded-md")
        .variant("size", "lg", "h-12 px-5 text-base rounded-lg")
        .flag("multiline", "resize-y min-h-[80px]")
        .default_variant("variant", "default")
        .default_variant("size", "md")
        .policy(ConflictPolicy::Collapse))
}

/// The field label schema
pub fn label_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("input_label")
        .base("block text-sm font-normal mb-2 text-[{colors.figma.text.secondary}]")
        .flag(
            "required",
            "after:content-[\"*\"] after:text-red-400 after:ml-1",
        )
        .flag("disabled", "opacity-50")
        .policy(ConflictPolicy::Collapse))
}

/// The helper text schema
pub fn helper_text_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("input_helper_text")
        .base("mt-2 text-xs")
        .variant("variant", "default", "text-[{colors.figma.text.muted}]")
        .variant("variant", "error", "text-red-400")
        .variant("variant", "success", "text-green-400")
        .default_variant("variant", "default")
        .policy(ConflictPolicy::Collapse))
}

/// Input style builder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    variant: InputVariant,
    size: InputSize,
    label: Option<String>,
    helper_text: Option<String>,
    error: Option<String>,
    success: bool,
    required: bool,
    disabled: bool,
    multiline: bool,
    extra: ExtraClasses,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line text area; always medium sized and vertically resizable
    pub fn textarea() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    pub fn merge_classes(mut self) -> Self {
        self.extra.merge();
        self
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// `Error` with an error message, else `Success` when successful, else the
    /// chosen variant
    pub fn effective_variant(&self) -> InputVariant {
        if self.error.is_some() {
            InputVariant::Error
        } else if self.success {
            InputVariant::Success
        } else {
            self.variant
        }
    }

    /// Text shown under the field: the error message, else the helper text
    pub fn helper_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.helper_text.as_deref())
    }

    pub fn selection(&self) -> Selection {
        let size = if self.multiline {
            InputSize::Md
        } else {
            self.size
        };
        let selection = Selection::new()
            .set("variant", self.effective_variant().as_str())
            .set("size", size.as_str())
            .flag("multiline", self.multiline);
        self.extra.apply(selection)
    }

    /// Classes of the input element
    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(input_schema(), &self.selection())
    }

    pub fn label_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let selection = Selection::new()
            .flag("required", self.required)
            .flag("disabled", self.disabled);
        ctx.resolver().resolve(label_schema(), &selection)
    }

    /// Helper text tone follows the error and success states, never the
    /// chosen variant
    pub fn helper_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let tone = if self.error.is_some() {
            "error"
        } else if self.success {
            "success"
        } else {
            "default"
        };
        ctx.resolver()
            .resolve(helper_text_schema(), &Selection::new().set("variant", tone))
    }
}

/// Vertical stack of fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputGroup {
    extra: ExtraClasses,
}

impl InputGroup {
    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let schema = fixed_schema!("input_group", "space-y-4");
        ctx.resolver().resolve(schema, &self.extra.apply(Selection::new()))
    }
}

/// Wrapper of a single field; shakes while it has an error
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormField {
    error: bool,
    extra: ExtraClasses,
}

impl FormField {
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let schema = builtin_schema!(VariantSchema::builder("form_field")
            .base("space-y-2")
            .flag("error", "animate-shake")
            .policy(ConflictPolicy::Collapse));
        let selection = self
            .extra
            .apply(Selection::new().flag("error", self.error));
        ctx.resolver().resolve(schema, &selection)
    }
}

/// Positioning wrapper of a field with a trailing adornment
pub const ADORNED_WRAPPER_CLASSES: &str = "relative";

/// Trailing icon or button inside an adorned field
pub const ADORNMENT_CLASSES: &str = "absolute right-3 top-1/2 -translate-y-1/2 \
    text-neutral-400 hover:text-neutral-300 transition-colors";

pub const ADORNMENT_ICON_CLASSES: &str = "w-4 h-4";

/// Room left for the adornment
const ADORNED_PADDING: &str = "pr-10";

/// Search field with a trailing submit button; Enter submits
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInput {
    input: Input,
    placeholder: String,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            input: Input::new().class(ADORNED_PADDING),
            placeholder: "Search...".to_string(),
        }
    }
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.input = self.input.size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.input = self.input.disabled(disabled);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.input = self.input.class(classes);
        self
    }

    pub fn merge_classes(mut self) -> Self {
        self.input = self.input.merge_classes();
        self
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// Whether pressing `key` submits the query
    pub fn submits_on(&self, key: &str) -> bool {
        key == "Enter"
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.input.classes(ctx)
    }

    pub fn wrapper_classes(&self) -> &'static str {
        ADORNED_WRAPPER_CLASSES
    }

    pub fn button_classes(&self) -> &'static str {
        ADORNMENT_CLASSES
    }

    pub fn icon_classes(&self) -> &'static str {
        ADORNMENT_ICON_CLASSES
    }
}

/// Icon of the password visibility toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PasswordToggleIcon {
    /// Reveal the password
    Show,
    /// Mask the password
    Hide,
}

/// Password field with a visibility toggle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordInput {
    input: Input,
    visible: bool,
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self {
            input: Input::new().class(ADORNED_PADDING),
            visible: false,
        }
    }
}

impl PasswordInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Flip between masked and plain text
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Value of the element's `type` attribute
    pub fn input_type(&self) -> &'static str {
        if self.visible {
            "text"
        } else {
            "password"
        }
    }

    /// A visible password offers to hide it and vice versa
    pub fn toggle_icon(&self) -> PasswordToggleIcon {
        if self.visible {
            PasswordToggleIcon::Hide
        } else {
            PasswordToggleIcon::Show
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.input = self.input.label(label);
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.input = self.input.helper_text(text);
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.input = self.input.error(message);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.input = self.input.required(required);
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.input = self.input.size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.input = self.input.disabled(disabled);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.input = self.input.class(classes);
        self
    }

    pub fn merge_classes(mut self) -> Self {
        self.input = self.input.merge_classes();
        self
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.input.classes(ctx)
    }

    pub fn label_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.input.label_classes(ctx)
    }

    pub fn helper_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.input.helper_classes(ctx)
    }

    pub fn wrapper_classes(&self) -> &'static str {
        ADORNED_WRAPPER_CLASSES
    }

    pub fn toggle_classes(&self) -> &'static str {
        ADORNMENT_CLASSES
    }

    pub fn icon_classes(&self) -> &'static str {
        ADORNMENT_ICON_CLASSES
    }
}

pub fn input() -> Input {
    Input::new()
}

pub fn textarea() -> Input {
    Input::textarea()
}

pub fn input_group() -> InputGroup {
    InputGroup::default()
}

pub fn form_field() -> FormField {
    FormField::default()
}

pub fn search_input() -> SearchInput {
    SearchInput::new()
}

pub fn password_input() -> PasswordInput {
    PasswordInput::new()
}
