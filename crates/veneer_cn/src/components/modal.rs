//! Modal component styles
//!
//! Overlay, centering container and content panel classes, the panel's max
//! width per size, and the rules for when user events close the modal.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let modal = cn::modal().open(true).size(ModalSize::Sm).close_on_overlay_click(false);
//! assert_eq!(modal.max_width(), 384.0);
//! assert!(modal.should_close(ModalEvent::EscapePressed));
//! assert!(!modal.should_close(ModalEvent::OverlayClicked));
//! ```

use veneer_variants::{ConflictPolicy, ResolvedStyles, Selection, VariantSchema};

use super::shared::{builtin_schema, ExtraClasses};
use crate::context::StyleContext;
use crate::Result;

/// Content panel sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalSize {
    /// 384px wide
    Sm,
    /// 448px wide
    #[default]
    Md,
    /// 512px wide
    Lg,
    /// 576px wide
    Xl,
}

impl ModalSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Xl => "xl",
        }
    }

    /// Maximum panel width in pixels
    pub fn max_width(&self) -> f32 {
        match self {
            ModalSize::Sm => 384.0,
            ModalSize::Md => 448.0,
            ModalSize::Lg => 512.0,
            ModalSize::Xl => 576.0,
        }
    }

    pub fn all() -> &'static [ModalSize] {
        &[ModalSize::Sm, ModalSize::Md, ModalSize::Lg, ModalSize::Xl]
    }
}

/// User events that may close an open modal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalEvent {
    EscapePressed,
    OverlayClicked,
    CloseButtonClicked,
    /// A click inside the panel; never closes
    ContentClicked,
}

pub fn overlay_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("modal_overlay")
        .base("fixed inset-0 bg-black/60 backdrop-blur-sm")
        .policy(ConflictPolicy::Collapse))
}

pub fn container_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("modal_container")
        .base("fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6")
        .policy(ConflictPolicy::Collapse))
}

pub fn content_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("modal_content")
        .base("relative bg-[{colors.figma.background.secondary}]/95 backdrop-blur-md")
        .base("border border-[{colors.figma.border.primary}] rounded-xl")
        .base("shadow-xl shadow-black/40")
        .policy(ConflictPolicy::Collapse))
}

pub fn close_button_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("modal_close_button")
        .base("absolute top-4 right-4 z-10 w-8 h-8 rounded-full")
        .base("bg-[{colors.figma.border.primary}]/50 backdrop-blur-sm")
        .base("border border-[{colors.figma.text.muted}]/30 text-[{colors.figma.text.secondary}]")
        .base("flex items-center justify-center transition-all duration-200 ease-out")
        .base("hover:bg-[{colors.figma.text.muted}]/20 hover:border-[{colors.figma.text.muted}]")
        .base("hover:text-[{colors.figma.text.primary}] hover:scale-110")
        .base("focus:outline-none focus:ring-2 focus:ring-[{colors.figma.text.primary}]/20")
        .base("active:scale-95")
        .policy(ConflictPolicy::Collapse))
}

/// Modal style and behavior builder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modal {
    open: bool,
    size: ModalSize,
    close_on_escape: bool,
    close_on_overlay_click: bool,
    show_close_button: bool,
    extra: ExtraClasses,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            open: false,
            size: ModalSize::default(),
            close_on_escape: true,
            close_on_overlay_click: true,
            show_close_button: true,
            extra: ExtraClasses::default(),
        }
    }
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    pub fn close_on_overlay_click(mut self, close: bool) -> Self {
        self.close_on_overlay_click = close;
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Extra classes for the content panel
    pub fn class(mut self, classes: &str) -> Self {
        self.extra.push(classes);
        self
    }

    pub fn merge_classes(mut self) -> Self {
        self.extra.merge();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_close_button(&self) -> bool {
        self.show_close_button
    }

    /// Page scrolling is locked while the modal is open
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    pub fn max_width(&self) -> f32 {
        self.size.max_width()
    }

    /// Whether `event` should close the modal. A closed modal ignores
    /// everything.
    pub fn should_close(&self, event: ModalEvent) -> bool {
        if !self.open {
            return false;
        }
        match event {
            ModalEvent::EscapePressed => self.close_on_escape,
            ModalEvent::OverlayClicked => self.close_on_overlay_click,
            ModalEvent::CloseButtonClicked => self.show_close_button,
            ModalEvent::ContentClicked => false,
        }
    }

    pub fn overlay_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(overlay_schema(), &Selection::new())
    }

    pub fn container_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(container_schema(), &Selection::new())
    }

    /// Classes of the content panel, extra classes included
    pub fn content_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver()
            .resolve(content_schema(), &self.extra.apply(Selection::new()))
    }

    pub fn close_button_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(close_button_schema(), &Selection::new())
    }
}

pub fn modal() -> Modal {
    Modal::new()
}
