//! Property identity of utility classes
//!
//! Two directives conflict when they set the same CSS property under the same
//! variant modifiers. `px-4` and `px-6` conflict, `px-4` and `hover:px-6` do
//! not, and `p-4` written after `px-6` overrides it because padding covers
//! padding-x.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Variant modifiers, important flag and property family of one directive
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId {
    modifiers: SmallVec<[String; 2]>,
    important: bool,
    family: Cow<'static, str>,
}

impl PropertyId {
    /// Modifiers are compared as a set, so their order does not matter.
    pub fn new<I, S>(modifiers: I, important: bool, family: impl Into<Cow<'static, str>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut modifiers: SmallVec<[String; 2]> = modifiers.into_iter().map(Into::into).collect();
        modifiers.sort_unstable();
        modifiers.dedup();
        Self {
            modifiers,
            important,
            family: family.into(),
        }
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Same modifiers and important flag, any family
    pub fn same_scope(&self, other: &PropertyId) -> bool {
        self.important == other.important && self.modifiers == other.modifiers
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}:")?;
        }
        if self.important {
            f.write_str("!")?;
        }
        f.write_str(&self.family)
    }
}

/// Maps directives to property identities
pub trait PropertyClassifier: Send + Sync {
    fn classify(&self, directive: &str) -> PropertyId;

    /// Identifies the classification rules in resolution cache keys.
    /// Classifiers whose rules depend on their own state must override it.
    fn id(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether `later` replaces an earlier directive with identity `earlier`
    fn supersedes(&self, later: &PropertyId, earlier: &PropertyId) -> bool {
        later == earlier
    }
}

/// Classifier following Tailwind CSS utility semantics
#[derive(Clone, Copy, Debug, Default)]
pub struct TailwindClassifier;

impl PropertyClassifier for TailwindClassifier {
    fn classify(&self, directive: &str) -> PropertyId {
        let parts = split_modifiers(directive);
        let (modifiers, utility) = parts.split_at(parts.len() - 1);
        let mut utility = utility[0];

        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }

        let family = utility_family(utility);
        PropertyId::new(modifiers.iter().copied(), important, family)
    }

    fn supersedes(&self, later: &PropertyId, earlier: &PropertyId) -> bool {
        later.same_scope(earlier)
            && (later.family == earlier.family
                || conflicting_families(&later.family)
                    .iter()
                    .any(|family| *family == earlier.family()))
    }
}

/// Split at `:` outside brackets and parentheses. Always yields at least one
/// part; the last one is the utility.
fn split_modifiers(directive: &str) -> SmallVec<[&str; 3]> {
    let mut parts = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in directive.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&directive[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&directive[start..]);
    parts
}

/// Drop a trailing `/opacity` (or fraction) outside brackets
fn strip_slash_modifier(utility: &str) -> &str {
    let mut depth = 0usize;
    let mut cut = None;
    for (i, c) in utility.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => cut = Some(i),
            _ => {}
        }
    }
    cut.map_or(utility, |i| &utility[..i])
}

fn utility_family(utility: &str) -> Cow<'static, str> {
    // Arbitrary property: [mask-type:luminance]
    if utility.starts_with('[') && utility.ends_with(']') {
        if let Some((property, _)) = utility[1..].split_once(':') {
            return Cow::Owned(format!("[{property}]"));
        }
    }

    let base = strip_slash_modifier(utility.strip_prefix('-').unwrap_or(utility));

    if let Some(family) = exact_family(base) {
        return Cow::Borrowed(family);
    }

    let matched = STEMS
        .iter()
        .filter(|(stem, _)| {
            base == *stem
                || (base.starts_with(stem) && base.as_bytes().get(stem.len()) == Some(&b'-'))
        })
        .max_by_key(|(stem, _)| stem.len());

    match matched {
        Some((stem, rule)) => {
            let value = base[stem.len()..].trim_start_matches('-');
            Cow::Borrowed(rule.family(value))
        }
        None => Cow::Owned(utility.to_string()),
    }
}

fn exact_family(utility: &str) -> Option<&'static str> {
    let family = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
        | "inline-table" | "table-caption" | "table-cell" | "table-column" | "table-row"
        | "flow-root" | "grid" | "inline-grid" | "contents" | "list-item" | "hidden" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration-line",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "truncate" => "text-overflow",
        "sr-only" | "not-sr-only" => "sr-only",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "outline-none" => "outline-style",
        "isolate" => "isolation",
        "transform" | "transform-gpu" | "transform-none" => "transform",
        _ => return None,
    };
    Some(family)
}

#[derive(Clone, Copy, Debug)]
enum Rule {
    Fixed(&'static str),
    Text,
    Font,
    Border,
    BorderSide {
        width: &'static str,
        color: &'static str,
    },
    Background,
    Ring,
    RingOffset,
    Shadow,
    Outline,
    WidthOrColor {
        width: &'static str,
        color: &'static str,
    },
    Decoration,
    Flex,
    Content,
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

impl Rule {
    fn family(self, value: &str) -> &'static str {
        match self {
            Rule::Fixed(family) => family,
            Rule::Text => match value {
                v if FONT_SIZES.contains(&v) => "font-size",
                "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
                "ellipsis" | "clip" => "text-overflow",
                "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
                v if arbitrary(v) == Some(Arbitrary::Length) => "font-size",
                _ => "text-color",
            },
            Rule::Font => match value {
                v if FONT_WEIGHTS.contains(&v) => "font-weight",
                v if arbitrary(v) == Some(Arbitrary::Number) => "font-weight",
                _ => "font-family",
            },
            Rule::Border => match value {
                v if is_width(v) => "border-w",
                v if LINE_STYLES.contains(&v) => "border-style",
                "collapse" | "separate" => "border-collapse",
                _ => "border-color",
            },
            Rule::BorderSide { width, color } | Rule::WidthOrColor { width, color } => {
                if is_width(value) {
                    width
                } else {
                    color
                }
            }
            Rule::Background => match value {
                v if arbitrary(v) == Some(Arbitrary::Image) => "bg-image",
                v if v == "none" || v.starts_with("gradient") => "bg-image",
                "fixed" | "local" | "scroll" => "bg-attachment",
                "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right"
                | "right-bottom" | "right-top" | "top" => "bg-position",
                "auto" | "cover" | "contain" => "bg-size",
                "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round"
                | "repeat-space" => "bg-repeat",
                v if v.starts_with("clip-") => "bg-clip",
                v if v.starts_with("origin-") => "bg-origin",
                v if v.starts_with("blend-") => "bg-blend",
                _ => "bg-color",
            },
            Rule::Ring => match value {
                v if is_width(v) => "ring-w",
                "inset" => "ring-inset",
                _ => "ring-color",
            },
            Rule::RingOffset => {
                if is_width(value) {
                    "ring-offset-w"
                } else {
                    "ring-offset-color"
                }
            }
            Rule::Shadow => match value {
                "" => "shadow",
                v if SHADOW_SIZES.contains(&v) => "shadow",
                v if arbitrary(v) == Some(Arbitrary::Other) => "shadow",
                _ => "shadow-color",
            },
            Rule::Outline => match value {
                "" => "outline-style",
                v if is_width(v) => "outline-w",
                v if LINE_STYLES.contains(&v) => "outline-style",
                _ => "outline-color",
            },
            Rule::Decoration => match value {
                "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
                "auto" | "from-font" => "decoration-thickness",
                v if is_width(v) => "decoration-thickness",
                _ => "decoration-color",
            },
            Rule::Flex => match value {
                "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
                "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
                _ => "flex",
            },
            Rule::Content => match value {
                "normal" | "center" | "start" | "end" | "between" | "around" | "evenly"
                | "baseline" | "stretch" => "align-content",
                _ => "content",
            },
        }
    }
}

/// Bare utility, a numeric scale step or an arbitrary length
fn is_width(value: &str) -> bool {
    value.is_empty()
        || value == "px"
        || value.parse::<f64>().is_ok()
        || matches!(arbitrary(value), Some(Arbitrary::Length | Arbitrary::Number))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arbitrary {
    Color,
    Length,
    Number,
    Image,
    Other,
}

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "svh", "lvh", "dvh", "vmin", "vmax", "ch", "ex", "pt",
];

/// Classify the content of an arbitrary value (`[...]`); `None` for named
/// values
fn arbitrary(value: &str) -> Option<Arbitrary> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;

    // Explicit type hints: text-[length:var(--size)]
    if let Some((hint, _)) = inner.split_once(':') {
        let kind = match hint {
            "color" => Some(Arbitrary::Color),
            "length" | "size" | "percentage" => Some(Arbitrary::Length),
            "number" => Some(Arbitrary::Number),
            "url" | "image" => Some(Arbitrary::Image),
            _ => None,
        };
        if kind.is_some() {
            return kind;
        }
    }

    let kind = if inner.starts_with('#')
        || ["rgb(", "rgba(", "hsl(", "hsla(", "oklch("]
            .iter()
            .any(|f| inner.starts_with(f))
    {
        Arbitrary::Color
    } else if inner.starts_with("url(") || inner.contains("gradient(") {
        Arbitrary::Image
    } else if ["calc(", "min(", "max(", "clamp("]
        .iter()
        .any(|f| inner.starts_with(f))
    {
        Arbitrary::Length
    } else if inner.parse::<f64>().is_ok() {
        Arbitrary::Number
    } else if LENGTH_UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .is_some_and(|n| n.parse::<f64>().is_ok())
    }) {
        Arbitrary::Length
    } else {
        Arbitrary::Other
    };
    Some(kind)
}

const STEMS: &[(&str, Rule)] = &[
    // Padding / margin
    ("p", Rule::Fixed("p")),
    ("px", Rule::Fixed("px")),
    ("py", Rule::Fixed("py")),
    ("pt", Rule::Fixed("pt")),
    ("pr", Rule::Fixed("pr")),
    ("pb", Rule::Fixed("pb")),
    ("pl", Rule::Fixed("pl")),
    ("ps", Rule::Fixed("ps")),
    ("pe", Rule::Fixed("pe")),
    ("m", Rule::Fixed("m")),
    ("mx", Rule::Fixed("mx")),
    ("my", Rule::Fixed("my")),
    ("mt", Rule::Fixed("mt")),
    ("mr", Rule::Fixed("mr")),
    ("mb", Rule::Fixed("mb")),
    ("ml", Rule::Fixed("ml")),
    ("ms", Rule::Fixed("ms")),
    ("me", Rule::Fixed("me")),
    ("space-x", Rule::Fixed("space-x")),
    ("space-y", Rule::Fixed("space-y")),
    // Sizing
    ("w", Rule::Fixed("w")),
    ("min-w", Rule::Fixed("min-w")),
    ("max-w", Rule::Fixed("max-w")),
    ("h", Rule::Fixed("h")),
    ("min-h", Rule::Fixed("min-h")),
    ("max-h", Rule::Fixed("max-h")),
    ("size", Rule::Fixed("size")),
    // Position
    ("inset", Rule::Fixed("inset")),
    ("inset-x", Rule::Fixed("inset-x")),
    ("inset-y", Rule::Fixed("inset-y")),
    ("top", Rule::Fixed("top")),
    ("right", Rule::Fixed("right")),
    ("bottom", Rule::Fixed("bottom")),
    ("left", Rule::Fixed("left")),
    ("start", Rule::Fixed("start")),
    ("end", Rule::Fixed("end")),
    ("z", Rule::Fixed("z")),
    ("float", Rule::Fixed("float")),
    ("clear", Rule::Fixed("clear")),
    ("box", Rule::Fixed("box-sizing")),
    ("overflow", Rule::Fixed("overflow")),
    ("overflow-x", Rule::Fixed("overflow-x")),
    ("overflow-y", Rule::Fixed("overflow-y")),
    ("object", Rule::Fixed("object")),
    ("aspect", Rule::Fixed("aspect")),
    ("columns", Rule::Fixed("columns")),
    ("container", Rule::Fixed("container")),
    // Flex / grid
    ("flex", Rule::Flex),
    ("basis", Rule::Fixed("basis")),
    ("grow", Rule::Fixed("grow")),
    ("shrink", Rule::Fixed("shrink")),
    ("order", Rule::Fixed("order")),
    ("grid-cols", Rule::Fixed("grid-cols")),
    ("grid-rows", Rule::Fixed("grid-rows")),
    ("grid-flow", Rule::Fixed("grid-flow")),
    ("col-span", Rule::Fixed("col-span")),
    ("col-start", Rule::Fixed("col-start")),
    ("col-end", Rule::Fixed("col-end")),
    ("row-span", Rule::Fixed("row-span")),
    ("row-start", Rule::Fixed("row-start")),
    ("row-end", Rule::Fixed("row-end")),
    ("gap", Rule::Fixed("gap")),
    ("gap-x", Rule::Fixed("gap-x")),
    ("gap-y", Rule::Fixed("gap-y")),
    ("items", Rule::Fixed("align-items")),
    ("self", Rule::Fixed("align-self")),
    ("content", Rule::Content),
    ("justify", Rule::Fixed("justify-content")),
    ("justify-items", Rule::Fixed("justify-items")),
    ("justify-self", Rule::Fixed("justify-self")),
    ("place-content", Rule::Fixed("place-content")),
    ("place-items", Rule::Fixed("place-items")),
    ("place-self", Rule::Fixed("place-self")),
    // Typography
    ("text", Rule::Text),
    ("font", Rule::Font),
    ("leading", Rule::Fixed("leading")),
    ("tracking", Rule::Fixed("tracking")),
    ("whitespace", Rule::Fixed("whitespace")),
    ("break", Rule::Fixed("break")),
    ("line-clamp", Rule::Fixed("line-clamp")),
    ("list", Rule::Fixed("list")),
    ("align", Rule::Fixed("vertical-align")),
    ("indent", Rule::Fixed("indent")),
    ("decoration", Rule::Decoration),
    ("underline-offset", Rule::Fixed("underline-offset")),
    // Backgrounds
    ("bg", Rule::Background),
    ("from", Rule::Fixed("gradient-from")),
    ("via", Rule::Fixed("gradient-via")),
    ("to", Rule::Fixed("gradient-to")),
    // Borders
    ("border", Rule::Border),
    ("border-x", Rule::BorderSide { width: "border-w-x", color: "border-color-x" }),
    ("border-y", Rule::BorderSide { width: "border-w-y", color: "border-color-y" }),
    ("border-s", Rule::BorderSide { width: "border-w-s", color: "border-color-s" }),
    ("border-e", Rule::BorderSide { width: "border-w-e", color: "border-color-e" }),
    ("border-t", Rule::BorderSide { width: "border-w-t", color: "border-color-t" }),
    ("border-r", Rule::BorderSide { width: "border-w-r", color: "border-color-r" }),
    ("border-b", Rule::BorderSide { width: "border-w-b", color: "border-color-b" }),
    ("border-l", Rule::BorderSide { width: "border-w-l", color: "border-color-l" }),
    ("divide-x", Rule::Fixed("divide-x")),
    ("divide-y", Rule::Fixed("divide-y")),
    ("divide", Rule::Fixed("divide-color")),
    ("rounded", Rule::Fixed("rounded")),
    ("rounded-s", Rule::Fixed("rounded-s")),
    ("rounded-e", Rule::Fixed("rounded-e")),
    ("rounded-t", Rule::Fixed("rounded-t")),
    ("rounded-r", Rule::Fixed("rounded-r")),
    ("rounded-b", Rule::Fixed("rounded-b")),
    ("rounded-l", Rule::Fixed("rounded-l")),
    ("rounded-ss", Rule::Fixed("rounded-ss")),
    ("rounded-se", Rule::Fixed("rounded-se")),
    ("rounded-ee", Rule::Fixed("rounded-ee")),
    ("rounded-es", Rule::Fixed("rounded-es")),
    ("rounded-tl", Rule::Fixed("rounded-tl")),
    ("rounded-tr", Rule::Fixed("rounded-tr")),
    ("rounded-br", Rule::Fixed("rounded-br")),
    ("rounded-bl", Rule::Fixed("rounded-bl")),
    ("outline", Rule::Outline),
    ("outline-offset", Rule::Fixed("outline-offset")),
    ("ring", Rule::Ring),
    ("ring-offset", Rule::RingOffset),
    // Effects
    ("shadow", Rule::Shadow),
    ("opacity", Rule::Fixed("opacity")),
    ("mix-blend", Rule::Fixed("mix-blend")),
    ("blur", Rule::Fixed("blur")),
    ("brightness", Rule::Fixed("brightness")),
    ("contrast", Rule::Fixed("contrast")),
    ("grayscale", Rule::Fixed("grayscale")),
    ("saturate", Rule::Fixed("saturate")),
    ("backdrop-blur", Rule::Fixed("backdrop-blur")),
    ("backdrop-brightness", Rule::Fixed("backdrop-brightness")),
    ("backdrop-saturate", Rule::Fixed("backdrop-saturate")),
    // Transitions / transforms
    ("transition", Rule::Fixed("transition")),
    ("duration", Rule::Fixed("duration")),
    ("ease", Rule::Fixed("ease")),
    ("delay", Rule::Fixed("delay")),
    ("animate", Rule::Fixed("animate")),
    ("scale", Rule::Fixed("scale")),
    ("scale-x", Rule::Fixed("scale-x")),
    ("scale-y", Rule::Fixed("scale-y")),
    ("rotate", Rule::Fixed("rotate")),
    ("translate-x", Rule::Fixed("translate-x")),
    ("translate-y", Rule::Fixed("translate-y")),
    ("skew-x", Rule::Fixed("skew-x")),
    ("skew-y", Rule::Fixed("skew-y")),
    ("origin", Rule::Fixed("origin")),
    // Interactivity
    ("cursor", Rule::Fixed("cursor")),
    ("select", Rule::Fixed("select")),
    ("pointer-events", Rule::Fixed("pointer-events")),
    ("resize", Rule::Fixed("resize")),
    ("appearance", Rule::Fixed("appearance")),
    ("touch", Rule::Fixed("touch")),
    ("scroll", Rule::Fixed("scroll")),
    ("will-change", Rule::Fixed("will-change")),
    // SVG
    ("fill", Rule::Fixed("fill")),
    ("stroke", Rule::WidthOrColor { width: "stroke-w", color: "stroke" }),
];

/// Families a later directive of `family` overrides besides its own
fn conflicting_families(family: &str) -> &'static [&'static str] {
    match family {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left", "start", "end"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "flex" => &["basis", "grow", "shrink"],
        "font-size" => &["leading"],
        "scale" => &["scale-x", "scale-y"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
            "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(directive: &str) -> String {
        TailwindClassifier.classify(directive).family().to_string()
    }

    fn overrides(later: &str, earlier: &str) -> bool {
        let c = TailwindClassifier;
        c.supersedes(&c.classify(later), &c.classify(earlier))
    }

    #[test]
    fn test_text_utilities_split_by_value() {
        assert_eq!(family("text-sm"), "font-size");
        assert_eq!(family("text-neutral-100"), "text-color");
        assert_eq!(family("text-[#E9EBDF]"), "text-color");
        assert_eq!(family("text-[14px]"), "font-size");
        assert_eq!(family("text-center"), "text-align");
        assert_eq!(family("text-white/80"), "text-color");
    }

    #[test]
    fn test_border_utilities_split_by_value() {
        assert_eq!(family("border"), "border-w");
        assert_eq!(family("border-2"), "border-w");
        assert_eq!(family("border-neutral-700"), "border-color");
        assert_eq!(family("border-[#433E38]"), "border-color");
        assert_eq!(family("border-dashed"), "border-style");
        assert_eq!(family("border-t-transparent"), "border-color-t");
        assert_eq!(family("border-t-2"), "border-w-t");
    }

    #[test]
    fn test_other_ambiguous_stems() {
        assert_eq!(family("font-light"), "font-weight");
        assert_eq!(family("font-mono"), "font-family");
        assert_eq!(family("shadow-lg"), "shadow");
        assert_eq!(family("shadow-black/20"), "shadow-color");
        assert_eq!(family("ring-2"), "ring-w");
        assert_eq!(family("ring-neutral-500"), "ring-color");
        assert_eq!(family("ring-offset-2"), "ring-offset-w");
        assert_eq!(family("bg-gradient-to-r"), "bg-image");
        assert_eq!(family("bg-[#242424]/95"), "bg-color");
        assert_eq!(family("flex"), "display");
        assert_eq!(family("flex-1"), "flex");
        assert_eq!(family("flex-col"), "flex-direction");
        assert_eq!(family("content-center"), "align-content");
        assert_eq!(family("after:content-[\"*\"]"), "content");
        assert_eq!(family("-translate-y-1/2"), "translate-y");
        assert_eq!(family("rounded-tl-lg"), "rounded-tl");
        assert_eq!(family("[mask-type:luminance]"), "[mask-type]");
    }

    #[test]
    fn test_modifiers_and_important() {
        let id = TailwindClassifier.classify("focus:hover:!bg-white");
        assert_eq!(id.modifiers(), ["focus", "hover"]);
        assert!(id.is_important());
        assert_eq!(id.to_string(), "focus:hover:!bg-color");

        // Modifier order does not matter
        assert_eq!(
            TailwindClassifier.classify("hover:focus:bg-black"),
            TailwindClassifier.classify("focus:hover:bg-white")
        );
        // Colons inside arbitrary values are not modifiers
        assert!(TailwindClassifier
            .classify("bg-[url(https://x.test/a.png)]")
            .modifiers()
            .is_empty());
    }

    #[test]
    fn test_supersession() {
        assert!(overrides("px-6", "px-4"));
        assert!(overrides("p-0", "px-5"));
        assert!(!overrides("px-5", "p-0"));
        assert!(overrides("rounded-lg", "rounded-t-none"));
        assert!(overrides("text-lg", "leading-tight"));
        assert!(!overrides("hover:px-6", "px-4"));
        assert!(!overrides("!px-6", "px-4"));
        assert!(!overrides("text-red-500", "text-sm"));
        assert!(overrides("bg-[#E9EBDF]", "bg-neutral-900"));
    }

    #[test]
    fn test_unknown_utilities_only_match_themselves() {
        assert_eq!(family("card-title"), "card-title");
        assert!(!overrides("card-title", "card-body"));
        assert!(overrides("animate-shake", "animate-spin"));
    }
}
