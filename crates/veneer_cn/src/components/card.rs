//! Card component styles
//!
//! A bordered surface in six variants, plus classes for the header, title,
//! description, content and footer parts.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let ctx = StyleContext::default();
//! let card = cn::card().variant(CardVariant::Content).clickable(true);
//! let classes = card.classes(&ctx).unwrap();
//! assert!(classes.contains("border-[#433E38]"));
//! assert!(classes.contains("cursor-pointer"));
//!
//! let title = CardPart::Title.classes(&ctx, "text-lg").unwrap();
//! assert!(title.contains("text-[#E9EBDF]"));
//! ```

use veneer_variants::{ConflictPolicy, ResolvedStyles, Selection, VariantSchema};

use super::shared::{builtin_schema, ExtraClasses};
use crate::context::StyleContext;
use crate::Result;

/// Card variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardVariant {
    /// Translucent dark surface
    #[default]
    Default,
    /// Raised surface with a shadow
    Elevated,
    /// Frosted glass
    Glass,
    /// No surface or border
    Ghost,
    /// Outlined content tile
    Content,
    /// Outlined blog article tile
    Article,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Elevated => "elevated",
            CardVariant::Glass => "glass",
            CardVariant::Ghost => "ghost",
            CardVariant::Content => "content",
            CardVariant::Article => "article",
        }
    }

    pub fn all() -> &'static [CardVariant] {
        &[
            CardVariant::Default,
            CardVariant::Elevated,
            CardVariant::Glass,
            CardVariant::Ghost,
            CardVariant::Content,
            CardVariant::Article,
        ]
    }
}

/// Card padding and corner sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl CardSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSize::Sm => "sm",
            CardSize::Md => "md",
            CardSize::Lg => "lg",
            CardSize::Xl => "xl",
        }
    }

    pub fn all() -> &'static [CardSize] {
        &[CardSize::Sm, CardSize::Md, CardSize::Lg, CardSize::Xl]
    }
}

/// The card variant schema
pub fn card_schema() -> &'static VariantSchema {
    builtin_schema!(VariantSchema::builder("card")
        .base("relative overflow-hidden transition-all duration-200 ease-out")
        .variant(
            "variant",
            "default",
            "bg-neutral-900/50 backdrop-blur-sm border border-neutral-700 \
             hover:bg-neutral-900/70 hover:border-neutral-600",
        )
        .variant(
            "variant",
            "elevated",
            "bg-neutral-800/80 backdrop-blur-sm border border-neutral-600 \
             shadow-lg shadow-black/20 hover:bg-neutral-800/90 hover:border-neutral-500 \
             hover:shadow-xl hover:shadow-black/30",
        )
        .variant(
            "variant",
            "glass",
            "bg-white/5 backdrop-blur-md border border-white/10 \
             hover:bg-white/10 hover:border-white/20",
        )
        .variant(
            "variant",
            "ghost",
            "bg-transparent border border-transparent hover:bg-neutral-800/20",
        )
        .variant(
            "variant",
            "content",
            "bg-transparent border border-[{colors.figma.border.primary}] \
             hover:border-[{colors.figma.border.secondary}]",
        )
        .variant(
            "variant",
            "article",
            "bg-transparent border border-[{colors.figma.border.primary}] \
             hover:border-[{colors.figma.border.secondary}] transition-all duration-300",
        )
        .variant("size", "sm", "p-4 rounded-lg")
        .variant("size", "md", "p-6 rounded-lg")
        .variant("size", "lg", "p-8 rounded-xl")
        .variant("size", "xl", "p-10 rounded-2xl")
        .flag("clickable", "cursor-pointer select-none")
        .flag("shadow", "shadow-md shadow-black/10")
        .default_variant("variant", "default")
        .default_variant("size", "md")
        .policy(ConflictPolicy::Collapse))
}

/// Card style builder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    variant: CardVariant,
    size: CardSize,
    clickable: bool,
    shadow: bool,
    extra: ExtraClasses,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
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

    /// Clicks are only forwarded for clickable cards
    pub fn is_interactive(&self) -> bool {
        self.clickable
    }

    pub fn selection(&self) -> Selection {
        let selection = Selection::new()
            .set("variant", self.variant.as_str())
            .set("size", self.size.as_str())
            .flag("clickable", self.clickable)
            .flag("shadow", self.shadow);
        self.extra.apply(selection)
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(card_schema(), &self.selection())
    }
}

/// Named parts inside a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardPart {
    Header,
    Title,
    Description,
    Content,
    Footer,
}

impl CardPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardPart::Header => "header",
            CardPart::Title => "title",
            CardPart::Description => "description",
            CardPart::Content => "content",
            CardPart::Footer => "footer",
        }
    }

    pub fn all() -> &'static [CardPart] {
        &[
            CardPart::Header,
            CardPart::Title,
            CardPart::Description,
            CardPart::Content,
            CardPart::Footer,
        ]
    }

    pub fn schema(&self) -> &'static VariantSchema {
        match self {
            CardPart::Header => builtin_schema!(VariantSchema::builder("card_header")
                .base("flex items-start justify-between mb-4")
                .policy(ConflictPolicy::Collapse)),
            CardPart::Title => builtin_schema!(VariantSchema::builder("card_title")
                .base("text-xl font-light text-[{colors.figma.text.primary}] leading-tight")
                .base("tracking-[-1.07%]")
                .policy(ConflictPolicy::Collapse)),
            CardPart::Description => builtin_schema!(VariantSchema::builder("card_description")
                .base("text-sm font-light text-[{colors.figma.text.secondary}] leading-relaxed")
                .base("tracking-[1.08%]")
                .policy(ConflictPolicy::Collapse)),
            CardPart::Content => builtin_schema!(VariantSchema::builder("card_content")
                .base("flex-1")
                .policy(ConflictPolicy::Collapse)),
            CardPart::Footer => builtin_schema!(VariantSchema::builder("card_footer")
                .base("flex items-center justify-between mt-4 pt-4")
                .base("border-t border-neutral-700/50")
                .policy(ConflictPolicy::Collapse)),
        }
    }

    /// Classes of this part with `extra` classes superseding its own
    pub fn classes(&self, ctx: &StyleContext<'_>, extra: &str) -> Result<ResolvedStyles> {
        ctx.resolver()
            .resolve(self.schema(), &Selection::new().class(extra))
    }
}

pub fn card() -> Card {
    Card::new()
}
