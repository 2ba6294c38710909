//! Typography presets
//!
//! Each [`TextStyle`] sets size, leading, weight and tracking from the
//! `typography.text-style.*` tokens. Label styles are set in capitals.
//!
//! # Example
//!
//! ```rust
//! use veneer_cn::prelude::*;
//!
//! let ctx = StyleContext::default();
//! let heading = cn::text().style(TextStyle::DisplayXxl);
//! let classes = heading.classes(&ctx).unwrap();
//! assert!(classes.contains("text-[45.9375px]"));
//! assert!(classes.contains("tracking-[-1.04%]"));
//! ```

use veneer_variants::{ConflictPolicy, ResolvedStyles, Selection, VariantSchema};

use super::shared::{builtin_schema, ExtraClasses};
use crate::context::StyleContext;
use crate::Result;

/// Named text styles, largest first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    DisplayXxl,
    DisplayXl,
    DisplayLg,
    HeadingXl,
    HeadingLg,
    HeadingMd,
    BodyLg,
    #[default]
    BodyMd,
    BodySm,
    LabelLg,
    LabelMd,
    LabelSm,
}

impl TextStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextStyle::DisplayXxl => "display-2xl",
            TextStyle::DisplayXl => "display-xl",
            TextStyle::DisplayLg => "display-lg",
            TextStyle::HeadingXl => "heading-xl",
            TextStyle::HeadingLg => "heading-lg",
            TextStyle::HeadingMd => "heading-md",
            TextStyle::BodyLg => "body-lg",
            TextStyle::BodyMd => "body-md",
            TextStyle::BodySm => "body-sm",
            TextStyle::LabelLg => "label-lg",
            TextStyle::LabelMd => "label-md",
            TextStyle::LabelSm => "label-sm",
        }
    }

    pub fn all() -> &'static [TextStyle] {
        &[
            TextStyle::DisplayXxl,
            TextStyle::DisplayXl,
            TextStyle::DisplayLg,
            TextStyle::HeadingXl,
            TextStyle::HeadingLg,
            TextStyle::HeadingMd,
            TextStyle::BodyLg,
            TextStyle::BodyMd,
            TextStyle::BodySm,
            TextStyle::LabelLg,
            TextStyle::LabelMd,
            TextStyle::LabelSm,
        ]
    }

    /// Display, heading and large body text is light; the rest is regular
    pub fn is_light(&self) -> bool {
        matches!(
            self,
            TextStyle::DisplayXxl
                | TextStyle::DisplayXl
                | TextStyle::DisplayLg
                | TextStyle::HeadingXl
                | TextStyle::HeadingLg
                | TextStyle::HeadingMd
                | TextStyle::BodyLg
                | TextStyle::BodyMd
        )
    }

    pub fn is_uppercase(&self) -> bool {
        matches!(self, TextStyle::LabelMd | TextStyle::LabelSm)
    }

    fn directives(&self) -> String {
        let name = self.as_str();
        let weight = if self.is_light() {
            "font-light"
        } else {
            "font-normal"
        };
        let mut directives = format!(
            "text-[{{typography.text-style.{name}.font-size}}] \
             leading-[{{typography.text-style.{name}.line-height}}] \
             {weight} tracking-[{{typography.text-style.{name}.letter-spacing}}]"
        );
        if self.is_uppercase() {
            directives.push_str(" uppercase");
        }
        directives
    }
}

/// The text style schema
pub fn text_schema() -> &'static VariantSchema {
    builtin_schema!(TextStyle::all()
        .iter()
        .fold(VariantSchema::builder("text"), |builder, style| {
            builder.variant("style", style.as_str(), &style.directives())
        })
        .default_variant("style", TextStyle::default().as_str())
        .policy(ConflictPolicy::Collapse))
}

/// Text style builder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    style: TextStyle,
    extra: ExtraClasses,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
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

    pub fn selection(&self) -> Selection {
        self.extra
            .apply(Selection::new().set("style", self.style.as_str()))
    }

    pub fn classes(&self, ctx: &StyleContext<'_>) -> Result<ResolvedStyles> {
        ctx.resolver().resolve(text_schema(), &self.selection())
    }
}

pub fn text() -> Text {
    Text::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_every_style() {
        let schema = text_schema();
        for style in TextStyle::all() {
            assert!(schema.has_value("style", style.as_str()));
        }
        assert_eq!(schema.default_value("style"), Some("body-md"));
    }

    #[test]
    fn test_label_directives() {
        let label = TextStyle::LabelSm.directives();
        assert!(label.contains("font-normal"));
        assert!(label.ends_with(" uppercase"));
        assert!(!TextStyle::BodyMd.directives().contains("uppercase"));
    }
}
