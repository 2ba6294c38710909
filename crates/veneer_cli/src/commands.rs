//! Subcommand implementations

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use veneer_cn::components::{button, card, input, modal};
use veneer_cn::StyleContext;
use veneer_tokens::{TokenGroup, TokenStore};
use veneer_variants::{Classification, Selection, VariantSchema};
use veneer_viewport::{ColorScheme, MediaState, PointerKind, ViewportObserver};

use crate::config::{load_token_store, VeneerConfig};

/// Media options shared by every command that needs a viewport
#[derive(Args, Debug, Default)]
pub struct MediaArgs {
    /// Viewport width in CSS pixels
    #[arg(long)]
    pub width: Option<f32>,

    /// Viewport height in CSS pixels
    #[arg(long)]
    pub height: Option<f32>,

    /// Prefer a dark color scheme
    #[arg(long, conflicts_with_all = ["light", "system_scheme"])]
    pub dark: bool,

    /// Prefer a light color scheme
    #[arg(long, conflicts_with = "system_scheme")]
    pub light: bool,

    /// Use the operating system's color scheme
    #[arg(long)]
    pub system_scheme: bool,

    /// Touch screen: no hover, coarse pointer
    #[arg(long)]
    pub touch: bool,

    /// Prefer reduced motion
    #[arg(long)]
    pub reduced_motion: bool,

    /// Prefer high contrast
    #[arg(long)]
    pub high_contrast: bool,

    /// Token table replacing the configured store
    #[arg(long)]
    pub tokens: Option<std::path::PathBuf>,
}

impl MediaArgs {
    /// The configured media state with these options applied
    pub fn media_state(&self, config: &VeneerConfig) -> MediaState {
        let mut media = config.media_state();
        if let Some(width) = self.width {
            media.width = width;
        }
        if let Some(height) = self.height {
            media.height = height;
        }
        if self.touch {
            media.hover = false;
            media.pointer = PointerKind::Coarse;
        }
        if self.dark {
            media.color_scheme = Some(ColorScheme::Dark);
        } else if self.light {
            media.color_scheme = Some(ColorScheme::Light);
        } else if self.system_scheme {
            media = media.with_system_color_scheme();
        }
        if self.reduced_motion {
            media.reduced_motion = true;
        }
        if self.high_contrast {
            media.high_contrast = true;
        }
        media
    }

    pub fn classification(&self, config: &VeneerConfig) -> Classification {
        let observer = ViewportObserver::new(config.viewport);
        observer.update(self.media_state(config));
        *observer.current()
    }

    pub fn token_store(&self, config: &VeneerConfig, base: &Path) -> Result<TokenStore> {
        match &self.tokens {
            Some(path) => load_token_store(path),
            None => config.token_store(base),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Component {
    Button,
    Card,
    Input,
    Modal,
}

pub struct ComponentArgs {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub classes: Vec<String>,
    pub merge: bool,
}

impl ComponentArgs {
    fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        if let Some(variant) = &self.variant {
            selection.insert("variant", variant.as_str());
        }
        if let Some(size) = &self.size {
            selection.insert("size", size.as_str());
        }
        with_overrides(selection, &self.classes, self.merge)
    }
}

fn with_overrides(mut selection: Selection, classes: &[String], merge: bool) -> Selection {
    for class in classes {
        selection.push_class(class);
    }
    if merge {
        selection = selection.merge();
    }
    selection
}

/// Parse `axis=value`
pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((axis, value)) if !axis.trim().is_empty() && !value.trim().is_empty() => {
            Ok((axis.trim(), value.trim()))
        }
        _ => bail!("expected axis=value, got '{}'", raw),
    }
}

pub fn tokens(
    config: &VeneerConfig,
    base: &Path,
    group: Option<&str>,
    toml: Option<&Path>,
    css: bool,
) -> Result<()> {
    let store = match toml {
        Some(path) => load_token_store(path)?,
        None => config.token_store(base)?,
    };
    let group = group
        .map(|id| id.parse::<TokenGroup>())
        .transpose()
        .context("Invalid --group")?;

    let tokens: Vec<_> = match group {
        Some(group) => store.group(group).collect(),
        None => store.iter().collect(),
    };
    for token in tokens {
        if css {
            println!("{}: {};", token.css_variable(), token.value());
        } else {
            println!("{} = {}", token.path(), token.value());
        }
    }
    Ok(())
}

pub fn classify(config: &VeneerConfig, media: &MediaArgs, json: bool) -> Result<()> {
    let classification = media.classification(config);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&classification)
                .context("Failed to serialize classification")?
        );
        return Ok(());
    }

    let c = &classification;
    println!("breakpoint: {}", c.breakpoint);
    println!("frame: {}", c.frame);
    let flags = [
        ("mobile", c.is_mobile),
        ("tablet", c.is_tablet),
        ("desktop", c.is_desktop),
        ("large-desktop", c.is_large_desktop),
        ("extra-large", c.is_extra_large),
        ("hover", c.can_hover),
        ("touch", c.is_touch),
        ("dark", c.prefers_dark),
        ("light", c.prefers_light),
        ("reduced-motion", c.prefers_reduced_motion),
        ("high-contrast", c.prefers_high_contrast),
    ];
    let set: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    println!("flags: {}", set.join(" "));
    Ok(())
}

pub fn resolve_component(
    config: &VeneerConfig,
    base: &Path,
    component: Component,
    args: ComponentArgs,
    media: &MediaArgs,
) -> Result<()> {
    let store = media.token_store(config, base)?;
    let ctx = StyleContext::new(&store).with_classification(media.classification(config));

    let schema = match component {
        Component::Button => button::button_schema(),
        Component::Card => card::card_schema(),
        Component::Input => input::input_schema(),
        Component::Modal => return resolve_modal(&ctx, args),
    };
    let styles = ctx
        .resolver()
        .resolve(schema, &args.selection())
        .with_context(|| format!("Failed to resolve {}", schema.name()))?;
    println!("{}", styles);
    Ok(())
}

fn resolve_modal(ctx: &StyleContext<'_>, args: ComponentArgs) -> Result<()> {
    if args.variant.is_some() {
        bail!("modal has no variants");
    }
    let size = match args.size.as_deref() {
        None => modal::ModalSize::default(),
        Some(id) => modal::ModalSize::all()
            .iter()
            .copied()
            .find(|size| size.as_str() == id)
            .with_context(|| format!("Unknown modal size '{}' (sm, md, lg, xl)", id))?,
    };

    let mut modal = modal::modal().size(size);
    for class in &args.classes {
        modal = modal.class(class);
    }
    if args.merge {
        modal = modal.merge_classes();
    }

    println!("overlay: {}", modal.overlay_classes(ctx)?);
    println!("container: {}", modal.container_classes(ctx)?);
    println!("content: {}", modal.content_classes(ctx)?);
    println!("close: {}", modal.close_button_classes(ctx)?);
    println!("max-width: {}px", modal.max_width());
    Ok(())
}

pub fn resolve_schema(
    config: &VeneerConfig,
    base: &Path,
    file: &Path,
    values: &[String],
    classes: &[String],
    merge: bool,
    media: &MediaArgs,
) -> Result<()> {
    let src = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let schema = VariantSchema::from_toml_str(&src)
        .with_context(|| format!("Invalid schema {}", file.display()))?;

    let mut selection = Selection::new();
    for raw in values {
        let (axis, value) = parse_assignment(raw)?;
        selection.insert(axis, value);
    }
    let selection = with_overrides(selection, classes, merge);

    let store = media.token_store(config, base)?;
    let resolver = StyleContext::new(&store)
        .with_classification(media.classification(config))
        .resolver();
    let styles = resolver
        .resolve(&schema, &selection)
        .with_context(|| format!("Failed to resolve {}", schema.name()))?;
    println!("{}", styles);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use veneer_variants::Breakpoint;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("size=lg").unwrap(), ("size", "lg"));
        assert_eq!(parse_assignment(" tone = accent ").unwrap(), ("tone", "accent"));
        assert!(parse_assignment("size").is_err());
        assert!(parse_assignment("=lg").is_err());
        assert!(parse_assignment("size=").is_err());
    }

    #[test]
    fn test_media_args() {
        let config = VeneerConfig::default();
        let args = MediaArgs {
            width: Some(390.0),
            touch: true,
            dark: true,
            ..MediaArgs::default()
        };
        let media = args.media_state(&config);
        assert_eq!(media.width, 390.0);
        assert!(!media.hover);
        assert_eq!(media.pointer, PointerKind::Coarse);
        assert_eq!(media.color_scheme, Some(ColorScheme::Dark));

        let c = args.classification(&config);
        assert_eq!(c.breakpoint, Breakpoint::Sm);
        assert!(c.is_mobile && c.is_touch && c.prefers_dark);
    }

    #[test]
    fn test_default_media_is_wide_desktop() {
        let c = MediaArgs::default().classification(&VeneerConfig::default());
        assert_eq!(c.breakpoint, Breakpoint::Xl);
        assert!(c.is_desktop && c.can_hover);
    }

    #[test]
    fn test_component_selection() {
        let args = ComponentArgs {
            variant: Some("accent".into()),
            size: None,
            classes: vec!["px-8 mt-2".into()],
            merge: true,
        };
        let selection = args.selection();
        assert!(selection.get("size").is_none());
        assert_eq!(selection.overrides(), ["px-8", "mt-2"]);

        let store = TokenStore::builtin();
        let styles = StyleContext::new(&store)
            .resolver()
            .resolve(button::button_schema(), &selection)
            .unwrap();
        assert!(styles.contains("bg-[#E9EBDF]"));
        assert!(styles.contains("px-5"));
    }
}
