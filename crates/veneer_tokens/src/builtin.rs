//! Built-in design system catalog
//!
//! A warm-neutral dark palette with a pale sage accent, plus the spacing,
//! radius, typography, shadow, layering and motion scales that go with it.

use crate::color::Color;
use crate::group::TokenGroup;
use crate::store::Token;
use crate::value::TokenValue;

/// Named colors of the built-in palette
pub mod palette {
    use crate::color::Color;

    // Text
    pub const TEXT_PRIMARY: Color = Color::from_hex(0xE9EBDF);
    pub const TEXT_SECONDARY: Color = Color::from_hex(0xCBCCC4);
    pub const TEXT_MUTED: Color = Color::from_hex(0x8B867F);

    // Backgrounds
    pub const BG_PRIMARY: Color = Color::from_hex(0x151515);
    pub const BG_SECONDARY: Color = Color::from_hex(0x242424);
    pub const BG_CARD: Color = Color::from_hex(0x1A1A1A);

    // Borders
    pub const BORDER_PRIMARY: Color = Color::from_hex(0x433E38);
    pub const BORDER_SECONDARY: Color = Color::from_hex(0x8B867F);
    pub const BORDER_MUTED: Color = Color::rgba(233, 235, 223, 0.12);

    // Accent
    pub const ACCENT_PRIMARY: Color = Color::from_hex(0xE9EBDF);
    pub const ACCENT_SECONDARY: Color = Color::from_hex(0xCBCCC4);
}

const PRIMARY: [(&str, u32); 10] = [
    ("50", 0xF5F6F2),
    ("100", 0xE9EBDF),
    ("200", 0xD3D7CB),
    ("300", 0xBDC3B7),
    ("400", 0xA7AFA3),
    ("500", 0x919B8F),
    ("600", 0x7B877B),
    ("700", 0x657367),
    ("800", 0x4F5F53),
    ("900", 0x394B3F),
];

const NEUTRAL: [(&str, u32); 11] = [
    ("50", 0xFAFAFA),
    ("100", 0xF5F5F5),
    ("200", 0xE5E5E5),
    ("300", 0xD4D4D4),
    ("400", 0xA3A3A3),
    ("500", 0x737373),
    ("600", 0x525252),
    ("700", 0x404040),
    ("800", 0x262626),
    ("900", 0x171717),
    ("950", 0x0A0A0A),
];

/// (state, light, default, dark)
const SEMANTIC: [(&str, u32, u32, u32); 4] = [
    ("success", 0x22C55E, 0x16A34A, 0x15803D),
    ("warning", 0xF59E0B, 0xD97706, 0xB45309),
    ("error", 0xEF4444, 0xDC2626, 0xB91C1C),
    ("info", 0x3B82F6, 0x2563EB, 0x1D4ED8),
];

const SPACING_SCALE: [(&str, f32); 35] = [
    ("0", 0.0),
    ("0.5", 2.0),
    ("1", 4.0),
    ("1.5", 6.0),
    ("2", 8.0),
    ("2.5", 10.0),
    ("3", 12.0),
    ("3.5", 14.0),
    ("4", 16.0),
    ("5", 20.0),
    ("6", 24.0),
    ("7", 28.0),
    ("8", 32.0),
    ("9", 36.0),
    ("10", 40.0),
    ("11", 44.0),
    ("12", 48.0),
    ("14", 56.0),
    ("16", 64.0),
    ("18", 72.0),
    ("20", 80.0),
    ("24", 96.0),
    ("28", 112.0),
    ("32", 128.0),
    ("36", 144.0),
    ("40", 160.0),
    ("44", 176.0),
    ("48", 192.0),
    ("52", 208.0),
    ("56", 224.0),
    ("60", 240.0),
    ("64", 256.0),
    ("72", 288.0),
    ("80", 320.0),
    ("96", 384.0),
];

const FIGMA_PADDING: [(&str, f32); 8] = [
    ("xs", 6.0),
    ("sm", 8.0),
    ("md", 16.0),
    ("lg", 24.0),
    ("xl", 32.0),
    ("2xl", 40.0),
    ("3xl", 56.0),
    ("4xl", 64.0),
];

const FIGMA_MARGIN: [(&str, f32); 8] = [
    ("xs", 4.0),
    ("sm", 8.0),
    ("md", 16.0),
    ("lg", 24.0),
    ("xl", 32.0),
    ("2xl", 48.0),
    ("3xl", 64.0),
    ("4xl", 80.0),
];

const FIGMA_GAP: [(&str, f32); 6] = [
    ("xs", 4.0),
    ("sm", 8.0),
    ("md", 16.0),
    ("lg", 24.0),
    ("xl", 32.0),
    ("2xl", 40.0),
];

const LAYOUT_PAGE: [(&str, f32); 4] = [
    ("mobile", 16.0),
    ("tablet", 24.0),
    ("desktop", 32.0),
    ("wide", 40.0),
];

const LAYOUT_SECTION: [(&str, f32); 5] = [
    ("xs", 24.0),
    ("sm", 32.0),
    ("md", 48.0),
    ("lg", 64.0),
    ("xl", 96.0),
];

const RADII: [(&str, f32); 13] = [
    ("none", 0.0),
    ("xs", 2.0),
    ("sm", 4.0),
    ("md", 6.0),
    ("lg", 8.0),
    ("xl", 12.0),
    ("2xl", 16.0),
    ("3xl", 24.0),
    ("full", 9999.0),
    ("figma.button", 9999.0),
    ("figma.card", 4.0),
    ("figma.input", 6.0),
    ("figma.container", 8.0),
];

const SHADOWS: [(&str, &str); 12] = [
    ("none", "none"),
    ("xs", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    ("sm", "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px -1px rgba(0, 0, 0, 0.1)"),
    ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)"),
    ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)"),
    ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)"),
    ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.05)"),
    ("dark.xs", "0 1px 2px 0 rgba(0, 0, 0, 0.3)"),
    ("dark.sm", "0 1px 3px 0 rgba(0, 0, 0, 0.4), 0 1px 2px -1px rgba(0, 0, 0, 0.4)"),
    ("dark.md", "0 4px 6px -1px rgba(0, 0, 0, 0.4), 0 2px 4px -2px rgba(0, 0, 0, 0.4)"),
    ("dark.lg", "0 10px 15px -3px rgba(0, 0, 0, 0.4), 0 4px 6px -4px rgba(0, 0, 0, 0.4)"),
];

/// (name, font size px, line height)
const FONT_SIZES: [(&str, f32, f64); 13] = [
    ("xs", 10.875, 1.32),
    ("sm", 11.0625, 1.30),
    ("base", 13.34375, 1.05),
    ("lg", 13.78125, 1.02),
    ("xl", 14.75, 1.63),
    ("2xl", 15.0, 1.60),
    ("3xl", 22.125, 1.30),
    ("4xl", 22.3125, 1.29),
    ("5xl", 22.5, 1.28),
    ("6xl", 22.6875, 1.27),
    ("7xl", 30.0, 1.12),
    ("8xl", 33.609375, 1.12),
    ("9xl", 45.9375, 1.10),
];

const FONT_WEIGHTS: [(&str, f64); 9] = [
    ("thin", 100.0),
    ("extralight", 200.0),
    ("light", 300.0),
    ("normal", 400.0),
    ("medium", 500.0),
    ("semibold", 600.0),
    ("bold", 700.0),
    ("extrabold", 800.0),
    ("black", 900.0),
];

const LINE_HEIGHTS: [(&str, f64); 6] = [
    ("none", 1.0),
    ("tight", 1.1),
    ("snug", 1.2),
    ("normal", 1.3),
    ("relaxed", 1.4),
    ("loose", 1.6),
];

const LETTER_SPACING: [(&str, f32); 6] = [
    ("tighter", -0.05),
    ("tight", -0.025),
    ("normal", 0.0),
    ("wide", 0.025),
    ("wider", 0.05),
    ("widest", 0.1),
];

const LINE_HEIGHTS_FIGMA: [(&str, f64); 4] = [
    ("tight", 1.02),
    ("compact", 1.12),
    ("normal", 1.30),
    ("relaxed", 1.60),
];

const LETTER_SPACING_FIGMA: [(&str, f32); 3] = [("tight", -1.07), ("normal", 1.07), ("wide", 1.10)];

/// Composite text style: font size step, weight, tracking in percent and
/// whether it is set in capitals
struct TextStyle {
    name: &'static str,
    size: &'static str,
    weight: f64,
    tracking: Option<f32>,
    uppercase: bool,
}

const fn text_style(
    name: &'static str,
    size: &'static str,
    weight: f64,
    tracking: Option<f32>,
    uppercase: bool,
) -> TextStyle {
    TextStyle {
        name,
        size,
        weight,
        tracking,
        uppercase,
    }
}

const TEXT_STYLES: [TextStyle; 12] = [
    text_style("display-2xl", "9xl", 300.0, Some(-1.04), false),
    text_style("display-xl", "8xl", 300.0, Some(-1.07), false),
    text_style("display-lg", "7xl", 300.0, Some(-1.07), false),
    text_style("heading-xl", "5xl", 300.0, Some(-1.07), false),
    text_style("heading-lg", "4xl", 300.0, None, false),
    text_style("heading-md", "3xl", 300.0, None, false),
    text_style("body-lg", "2xl", 300.0, Some(1.08), false),
    text_style("body-md", "xl", 300.0, None, false),
    text_style("body-sm", "base", 400.0, None, false),
    text_style("label-lg", "lg", 400.0, None, false),
    text_style("label-md", "sm", 400.0, Some(1.08), true),
    text_style("label-sm", "xs", 400.0, None, true),
];

const Z_INDEX: [(&str, f64); 12] = [
    ("hide", -1.0),
    ("base", 0.0),
    ("docked", 10.0),
    ("dropdown", 1000.0),
    ("sticky", 1100.0),
    ("banner", 1200.0),
    ("overlay", 1300.0),
    ("modal", 1400.0),
    ("popover", 1500.0),
    ("skip-link", 1600.0),
    ("toast", 1700.0),
    ("tooltip", 1800.0),
];

const EASINGS: [(&str, &str); 6] = [
    ("linear", "linear"),
    ("ease-in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("ease-out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("slide-in", "cubic-bezier(0.16, 1, 0.3, 1)"),
    ("slide-out", "cubic-bezier(0.7, 0, 0.84, 0)"),
];

const DURATIONS: [(&str, f32); 7] = [
    ("fast", 150.0),
    ("normal", 250.0),
    ("slow", 350.0),
    ("slower", 500.0),
    ("spring.fast", 300.0),
    ("spring.normal", 500.0),
    ("spring.slow", 800.0),
];

const SANS_STACK: &str = "Inter, system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";
const MONO_STACK: &str = "\"Fira Code\", Monaco, \"Cascadia Code\", \"Roboto Mono\", \"Source Code Pro\", \"Courier New\", monospace";

pub(crate) fn tokens() -> Vec<Token> {
    let mut out = Vec::with_capacity(256);
    colors(&mut out);
    spacing(&mut out);
    radii(&mut out);
    typography(&mut out);
    shadows(&mut out);
    z_index(&mut out);
    motion(&mut out);
    out
}

fn push(out: &mut Vec<Token>, group: TokenGroup, name: impl Into<String>, value: TokenValue) {
    out.push(Token::new(group, name, value));
}

fn colors(out: &mut Vec<Token>) {
    use TokenGroup::Colors;

    for (step, hex) in PRIMARY {
        push(out, Colors, format!("primary.{step}"), Color::from_hex(hex).into());
    }
    for (step, hex) in NEUTRAL {
        push(out, Colors, format!("neutral.{step}"), Color::from_hex(hex).into());
    }
    for (state, light, default, dark) in SEMANTIC {
        push(out, Colors, format!("semantic.{state}.light"), Color::from_hex(light).into());
        push(out, Colors, format!("semantic.{state}.DEFAULT"), Color::from_hex(default).into());
        push(out, Colors, format!("semantic.{state}.dark"), Color::from_hex(dark).into());
    }

    let figma = [
        ("text.primary", palette::TEXT_PRIMARY),
        ("text.secondary", palette::TEXT_SECONDARY),
        ("text.muted", palette::TEXT_MUTED),
        ("background.primary", palette::BG_PRIMARY),
        ("background.secondary", palette::BG_SECONDARY),
        ("background.card", palette::BG_CARD),
        ("border.primary", palette::BORDER_PRIMARY),
        ("border.secondary", palette::BORDER_SECONDARY),
        ("border.muted", palette::BORDER_MUTED),
        ("accent.primary", palette::ACCENT_PRIMARY),
        ("accent.secondary", palette::ACCENT_SECONDARY),
    ];
    for (name, color) in figma {
        push(out, Colors, format!("figma.{name}"), color.into());
    }

    for step in (10..=90).step_by(10).chain(std::iter::once(5)) {
        let alpha = step as f32 / 100.0;
        push(out, Colors, format!("alpha.white.{step}"), Color::WHITE.with_alpha(alpha).into());
        push(out, Colors, format!("alpha.black.{step}"), Color::BLACK.with_alpha(alpha).into());
    }
}

fn spacing(out: &mut Vec<Token>) {
    use TokenGroup::Spacing;

    for (step, px) in SPACING_SCALE {
        push(out, Spacing, step, TokenValue::Px(px));
    }
    for (name, px) in FIGMA_PADDING {
        push(out, Spacing, format!("figma.padding.{name}"), TokenValue::Px(px));
    }
    for (name, px) in FIGMA_MARGIN {
        push(out, Spacing, format!("figma.margin.{name}"), TokenValue::Px(px));
    }
    for (name, px) in FIGMA_GAP {
        push(out, Spacing, format!("figma.gap.{name}"), TokenValue::Px(px));
    }
    for (name, px) in LAYOUT_PAGE {
        push(out, Spacing, format!("layout.page.{name}"), TokenValue::Px(px));
    }
    for (name, px) in LAYOUT_SECTION {
        push(out, Spacing, format!("layout.section.{name}"), TokenValue::Px(px));
    }
}

fn radii(out: &mut Vec<Token>) {
    for (name, px) in RADII {
        push(out, TokenGroup::Radii, name, TokenValue::Px(px));
    }
}

fn typography(out: &mut Vec<Token>) {
    use TokenGroup::Typography;

    push(out, Typography, "font-family.sans", SANS_STACK.into());
    push(out, Typography, "font-family.mono", MONO_STACK.into());
    for (name, px, leading) in FONT_SIZES {
        push(out, Typography, format!("font-size.{name}"), TokenValue::Px(px));
        push(out, Typography, format!("font-size.{name}.line-height"), TokenValue::Number(leading));
    }
    for (name, weight) in FONT_WEIGHTS {
        push(out, Typography, format!("font-weight.{name}"), TokenValue::Number(weight));
    }
    for (name, leading) in LINE_HEIGHTS {
        push(out, Typography, format!("line-height.{name}"), TokenValue::Number(leading));
    }
    for (name, em) in LETTER_SPACING {
        push(out, Typography, format!("letter-spacing.{name}"), TokenValue::Em(em));
    }
    for (name, leading) in LINE_HEIGHTS_FIGMA {
        push(out, Typography, format!("line-height.figma.{name}"), TokenValue::Number(leading));
    }
    for (name, pct) in LETTER_SPACING_FIGMA {
        push(out, Typography, format!("letter-spacing.figma.{name}"), TokenValue::Percent(pct));
    }
    text_styles(out);
}

/// `text-style.<name>.*` tokens, each expanded from a font size step
fn text_styles(out: &mut Vec<Token>) {
    use TokenGroup::Typography;

    for style in &TEXT_STYLES {
        let Some((_, px, leading)) = FONT_SIZES.iter().find(|(step, ..)| *step == style.size) else {
            continue;
        };
        let prefix = format!("text-style.{}", style.name);
        push(out, Typography, format!("{prefix}.font-size"), TokenValue::Px(*px));
        push(out, Typography, format!("{prefix}.line-height"), TokenValue::Number(*leading));
        push(out, Typography, format!("{prefix}.font-weight"), TokenValue::Number(style.weight));
        push(
            out,
            Typography,
            format!("{prefix}.letter-spacing"),
            TokenValue::Percent(style.tracking.unwrap_or(0.0)),
        );
        let transform = if style.uppercase { "uppercase" } else { "none" };
        push(out, Typography, format!("{prefix}.text-transform"), transform.into());
    }
}

fn shadows(out: &mut Vec<Token>) {
    for (name, shadow) in SHADOWS {
        push(out, TokenGroup::Shadows, name, shadow.into());
    }
}

fn z_index(out: &mut Vec<Token>) {
    for (name, layer) in Z_INDEX {
        push(out, TokenGroup::ZIndex, name, TokenValue::Number(layer));
    }
    push(out, TokenGroup::ZIndex, "auto", "auto".into());
}

fn motion(out: &mut Vec<Token>) {
    use TokenGroup::Motion;

    for (name, easing) in EASINGS {
        push(out, Motion, format!("easing.{name}"), easing.into());
    }
    for (name, ms) in DURATIONS {
        push(out, Motion, format!("duration.{name}"), TokenValue::Duration(ms));
    }
}

#[cfg(test)]
mod tests {
    use crate::{TokenGroup, TokenStore, TokenValue};

    #[test]
    fn builtin_covers_every_group() {
        let store = TokenStore::builtin();
        for group in TokenGroup::all() {
            assert!(store.group(*group).next().is_some(), "{group} is empty");
        }
    }

    #[test]
    fn text_styles_expand_font_sizes() {
        let store = TokenStore::builtin();
        let value = |path: &str| store.lookup(path).unwrap().value().to_string();

        assert_eq!(value("typography.text-style.display-2xl.font-size"), "45.9375px");
        assert_eq!(value("typography.text-style.display-2xl.line-height"), "1.1");
        assert_eq!(value("typography.text-style.display-2xl.font-weight"), "300");
        assert_eq!(value("typography.text-style.display-2xl.letter-spacing"), "-1.04%");
        assert_eq!(value("typography.text-style.heading-md.letter-spacing"), "0%");
        assert_eq!(value("typography.text-style.label-md.text-transform"), "uppercase");
        assert_eq!(value("typography.text-style.label-sm.font-size"), "10.875px");
        assert_eq!(value("typography.text-style.body-md.text-transform"), "none");
        assert_eq!(value("typography.letter-spacing.figma.tight"), "-1.07%");
        assert_eq!(value("typography.line-height.figma.compact"), "1.12");

        let styles = store
            .group(TokenGroup::Typography)
            .filter(|token| {
                token.name().starts_with("text-style.") && token.name().ends_with(".font-size")
            })
            .count();
        assert_eq!(styles, 12);
    }

    #[test]
    fn builtin_values() {
        let store = TokenStore::builtin();
        assert_eq!(
            store.lookup("colors.figma.border.muted").unwrap().value().to_string(),
            "rgba(233, 235, 223, 0.12)"
        );
        assert_eq!(
            store.lookup("spacing.figma.padding.md").unwrap().value(),
            &TokenValue::Px(16.0)
        );
        assert_eq!(
            store.lookup("z-index.modal").unwrap().value(),
            &TokenValue::Number(1400.0)
        );
        assert_eq!(
            store.lookup("motion.duration.normal").unwrap().value(),
            &TokenValue::Duration(250.0)
        );
        assert_eq!(
            store.lookup("colors.alpha.white.5").unwrap().value().to_string(),
            "rgba(255, 255, 255, 0.05)"
        );
    }
}
