//! Composite content tiles
//!
//! Community, article, stats and feature tiles assembled from a [`Card`]
//! surface and its [`CardPart`]s. A tile with a link is clickable and opens
//! the link elsewhere.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let ctx = StyleContext::default();
//! let tile = cn::community_card("Guide", "Getting started")
//!     .description("Set up tokens and variants")
//!     .href("https://example.com/guide");
//! assert!(tile.is_interactive());
//! assert!(tile.classes(&ctx).unwrap().contains("h-60"));
//! assert!(tile.label_classes(&ctx).unwrap().contains("text-[#CBCCC4]"));
//! ```

use veneer_variants::{ResolvedStyles, Selection, VariantSchema};

use super::card::{Card, CardPart, CardVariant};
use super::shared::fixed_schema;
use crate::context::StyleContext;
use crate::Result;

fn resolve_fixed(
    ctx: &StyleContext<'_>,
    schema: &'static VariantSchema,
) -> Result<ResolvedStyles> {
    ctx.resolver().resolve(schema, &Selection::new())
}

/// Tile linking to a community resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityCard {
    card: Card,
    label: String,
    title: String,
    description: Option<String>,
    href: Option<String>,
}

impl CommunityCard {
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            card: Card::new().variant(CardVariant::Content).class("h-60"),
            label: label.into(),
            title: title.into(),
            description: None,
            href: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self.card = self.card.clickable(true);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.card = self.card.class(classes);
        self
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn is_interactive(&self) -> bool {
        self.card.is_interactive()
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.card.classes(ctx)
    }

    pub fn layout_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!("community_card_layout", "flex flex-col h-full justify-between"),
        )
    }

    pub fn label_row_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(ctx, fixed_schema!("community_card_label_row", "mb-4"))
    }

    pub fn label_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!(
                "community_card_label",
                "text-xs font-normal text-[{colors.figma.text.secondary}] uppercase \
                 tracking-[1.08%] leading-tight"
            ),
        )
    }

    /// The title row takes the free height and centers the title
    pub fn title_row_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!("community_card_title_row", "flex-1 flex items-center"),
        )
    }

    pub fn title_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Title.classes(ctx, "text-lg font-light leading-tight tracking-[-1.07%]")
    }

    pub fn description_row_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(ctx, fixed_schema!("community_card_description_row", "mt-4"))
    }

    pub fn description_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Description.classes(ctx, "")
    }
}

/// Blog article tile with an optional cover image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleCard {
    card: Card,
    title: String,
    author: Option<String>,
    image: Option<String>,
    href: Option<String>,
}

impl ArticleCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            card: Card::new()
                .variant(CardVariant::Article)
                .class("overflow-hidden"),
            title: title.into(),
            author: None,
            image: None,
            href: None,
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self.card = self.card.clickable(true);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.card = self.card.class(classes);
        self
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// "By <author>", when the article has one
    pub fn byline(&self) -> Option<String> {
        self.author.as_ref().map(|author| format!("By {author}"))
    }

    pub fn is_interactive(&self) -> bool {
        self.card.is_interactive()
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.card.classes(ctx)
    }

    pub fn image_frame_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!(
                "article_card_image_frame",
                "aspect-video w-full bg-neutral-800 mb-4 rounded-md overflow-hidden"
            ),
        )
    }

    pub fn image_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(ctx, fixed_schema!("article_card_image", "w-full h-full object-cover"))
    }

    pub fn body_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(ctx, fixed_schema!("article_card_body", "p-6"))
    }

    pub fn title_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Title.classes(ctx, "mb-4 text-lg font-light leading-tight")
    }

    pub fn byline_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Description.classes(ctx, "text-xs uppercase tracking-[1.08%]")
    }
}

/// Customer story tile: a headline figure over a company logo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsCard {
    card: Card,
    title: String,
    company: String,
    logo: Option<String>,
    href: Option<String>,
}

impl StatsCard {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            card: Card::new()
                .variant(CardVariant::Elevated)
                .class("bg-[#242424] h-64"),
            title: title.into(),
            company: company.into(),
            logo: None,
            href: None,
        }
    }

    pub fn logo(mut self, src: impl Into<String>) -> Self {
        self.logo = Some(src.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self.card = self.card.clickable(true);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.card = self.card.class(classes);
        self
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn logo_src(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn is_interactive(&self) -> bool {
        self.card.is_interactive()
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.card.classes(ctx)
    }

    pub fn layout_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!("stats_card_layout", "flex flex-col h-full justify-between p-6"),
        )
    }

    pub fn title_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Title.classes(ctx, "text-lg font-light leading-tight mb-8")
    }

    pub fn logo_area_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!(
                "stats_card_logo_area",
                "flex items-center justify-center bg-neutral-800/50 rounded p-4 h-12"
            ),
        )
    }

    /// Classes of the logo image, or of the company name standing in for it
    pub fn logo_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        let schema = if self.logo.is_some() {
            fixed_schema!("stats_card_logo", "h-6 object-contain")
        } else {
            fixed_schema!(
                "stats_card_company",
                "text-[{colors.figma.text.primary}] text-sm font-normal"
            )
        };
        resolve_fixed(ctx, schema)
    }
}

/// Centered feature highlight; never clickable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    card: Card,
    title: String,
    description: String,
    icon: Option<String>,
}

impl FeatureCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            card: Card::new().variant(CardVariant::Ghost).class("text-center"),
            title: title.into(),
            description: description.into(),
            icon: None,
        }
    }

    /// Name of the icon drawn above the title
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.card = self.card.class(classes);
        self
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn description_text(&self) -> &str {
        &self.description
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn is_interactive(&self) -> bool {
        self.card.is_interactive()
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        self.card.classes(ctx)
    }

    pub fn icon_row_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(ctx, fixed_schema!("feature_card_icon_row", "flex justify-center mb-4"))
    }

    pub fn icon_frame_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!("feature_card_icon_frame", "w-9 h-9 flex items-center justify-center"),
        )
    }

    pub fn icon_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        resolve_fixed(
            ctx,
            fixed_schema!("feature_card_icon", "w-6 h-6 text-[{colors.figma.text.muted}]"),
        )
    }

    pub fn title_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Title.classes(ctx, "mb-4 text-lg font-light")
    }

    pub fn description_classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        CardPart::Description.classes(ctx, "text-sm font-light leading-relaxed")
    }
}

pub fn community_card(label: impl Into<String>, title: impl Into<String>) -> CommunityCard {
    CommunityCard::new(label, title)
}

pub fn article_card(title: impl Into<String>) -> ArticleCard {
    ArticleCard::new(title)
}

pub fn stats_card(title: impl Into<String>, company: impl Into<String>) -> StatsCard {
    StatsCard::new(title, company)
}

pub fn feature_card(title: impl Into<String>, description: impl Into<String>) -> FeatureCard {
    FeatureCard::new(title, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_makes_tiles_interactive() {
        assert!(!community_card("Guide", "Start").is_interactive());
        assert!(community_card("Guide", "Start").href("/start").is_interactive());
        assert!(!article_card("Release notes").is_interactive());
        assert!(article_card("Release notes").href("/notes").is_interactive());
        assert!(!stats_card("3x faster", "Acme").is_interactive());
        assert!(stats_card("3x faster", "Acme").href("/acme").is_interactive());
        assert!(!feature_card("Tokens", "Shared values").is_interactive());
    }

    #[test]
    fn test_byline() {
        assert_eq!(article_card("Notes").byline(), None);
        assert_eq!(
            article_card("Notes").author("Sam Lee").byline().as_deref(),
            Some("By Sam Lee")
        );
    }
}
