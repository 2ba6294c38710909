//! Token values

use std::fmt::{Display, Formatter};

use crate::color::Color;

/// A token's literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Color(Color),
    /// Length in CSS pixels
    Px(f32),
    /// Length relative to the root font size
    Rem(f32),
    /// Length relative to the element font size
    Em(f32),
    Percent(f32),
    /// Duration in milliseconds, kept exactly as written
    Duration(f32),
    Number(f64),
    /// Anything else, rendered verbatim (easings, font stacks, shadows)
    Raw(String),
}

impl TokenValue {
    /// Parse a leaf literal.
    ///
    /// Strings that look like colors (`#..`, `rgb(..)`, `rgba(..)`) must parse
    /// as colors; everything that is not a recognised length, duration or
    /// number is kept as a raw literal.
    pub fn parse(literal: &str) -> Result<Self, String> {
        let s = literal.trim();
        if s.starts_with('#') || s.starts_with("rgb(") || s.starts_with("rgba(") {
            return Color::parse(s)
                .map(TokenValue::Color)
                .ok_or_else(|| format!("'{s}' is not a valid color"));
        }

        let number = |suffix: &str| {
            s.strip_suffix(suffix)
                .and_then(|n| n.trim().parse::<f32>().ok())
        };

        if let Some(ms) = number("ms") {
            return Ok(TokenValue::Duration(ms));
        }
        if let Some(rem) = number("rem") {
            return Ok(TokenValue::Rem(rem));
        }
        if let Some(em) = number("em") {
            return Ok(TokenValue::Em(em));
        }
        if let Some(px) = number("px") {
            return Ok(TokenValue::Px(px));
        }
        if let Some(pct) = number("%") {
            return Ok(TokenValue::Percent(pct));
        }
        if let Some(secs) = s
            .strip_suffix('s')
            .and_then(|n| n.trim().parse::<f64>().ok())
        {
            return Ok(TokenValue::Duration((secs * 1000.0) as f32));
        }
        if let Ok(n) = s.parse::<f64>() {
            return Ok(TokenValue::Number(n));
        }
        Ok(TokenValue::Raw(s.to_string()))
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Length in pixels, converting rem at 16px.
    pub fn as_px(&self) -> Option<f32> {
        match self {
            TokenValue::Px(px) => Some(*px),
            TokenValue::Rem(rem) => Some(rem * 16.0),
            _ => None,
        }
    }

    pub fn as_duration_ms(&self) -> Option<f32> {
        match self {
            TokenValue::Duration(ms) => Some(*ms),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Color(c) => write!(f, "{c}"),
            TokenValue::Px(v) => write!(f, "{v}px"),
            TokenValue::Rem(v) => write!(f, "{v}rem"),
            TokenValue::Em(v) => write!(f, "{v}em"),
            TokenValue::Percent(v) => write!(f, "{v}%"),
            TokenValue::Duration(ms) => write!(f, "{ms}ms"),
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Raw(s) => f.write_str(s),
        }
    }
}

impl From<Color> for TokenValue {
    fn from(color: Color) -> Self {
        TokenValue::Color(color)
    }
}

impl From<&str> for TokenValue {
    fn from(raw: &str) -> Self {
        TokenValue::Raw(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_and_durations() {
        assert_eq!(TokenValue::parse("16px"), Ok(TokenValue::Px(16.0)));
        assert_eq!(TokenValue::parse("1.5rem"), Ok(TokenValue::Rem(1.5)));
        assert_eq!(TokenValue::parse("-0.025em"), Ok(TokenValue::Em(-0.025)));
        assert_eq!(TokenValue::parse("1.07%"), Ok(TokenValue::Percent(1.07)));
        assert_eq!(TokenValue::parse("150ms"), Ok(TokenValue::Duration(150.0)));
        assert_eq!(TokenValue::parse("0.3s"), Ok(TokenValue::Duration(300.0)));
        assert_eq!(TokenValue::parse("1400"), Ok(TokenValue::Number(1400.0)));
    }

    #[test]
    fn durations_keep_precision_and_sign() {
        assert_eq!(TokenValue::parse("1.5ms"), Ok(TokenValue::Duration(1.5)));
        assert_eq!(TokenValue::parse("-5ms"), Ok(TokenValue::Duration(-5.0)));
        assert_eq!(TokenValue::parse("0.25s"), Ok(TokenValue::Duration(250.0)));
        assert_eq!(TokenValue::Duration(1.5).to_string(), "1.5ms");
        assert_eq!(TokenValue::Duration(-5.0).to_string(), "-5ms");
        assert_eq!(TokenValue::parse("1.5ms").unwrap().as_duration_ms(), Some(1.5));
    }

    #[test]
    fn raw_literals_pass_through() {
        let easing = "cubic-bezier(0.16, 1, 0.3, 1)";
        assert_eq!(
            TokenValue::parse(easing),
            Ok(TokenValue::Raw(easing.to_string()))
        );
        assert_eq!(TokenValue::parse("auto"), Ok(TokenValue::Raw("auto".into())));
        assert_eq!(
            TokenValue::parse("ease-in-outs"),
            Ok(TokenValue::Raw("ease-in-outs".into()))
        );
    }

    #[test]
    fn malformed_color_is_rejected() {
        assert!(TokenValue::parse("#zzzzzz").is_err());
        assert!(TokenValue::parse("rgba(1, 2)").is_err());
    }

    #[test]
    fn display_renders_css() {
        assert_eq!(TokenValue::Px(16.0).to_string(), "16px");
        assert_eq!(TokenValue::Rem(0.5).to_string(), "0.5rem");
        assert_eq!(TokenValue::Duration(250.0).to_string(), "250ms");
        assert_eq!(TokenValue::Number(1.1).to_string(), "1.1");
    }

    #[test]
    fn rem_converts_to_px() {
        assert_eq!(TokenValue::Rem(1.5).as_px(), Some(24.0));
        assert_eq!(TokenValue::Duration(10.0).as_px(), None);
    }
}
