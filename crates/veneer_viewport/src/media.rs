//! Raw media state and the predicates evaluated from it

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, DesignFrame, ViewportThresholds};

/// Color scheme preference reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Accuracy of the primary pointing device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Mouse, trackpad or stylus
    #[default]
    Fine,
    /// Finger on a touch screen
    Coarse,
    /// No pointing device
    None,
}

/// One snapshot of the host's viewport and media features
///
/// All fields default, so a config file only needs the ones it cares about:
///
/// ```toml
/// width = 390
/// hover = false
/// pointer = "coarse"
/// color-scheme = "dark"
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MediaState {
    /// Viewport width in CSS pixels
    pub width: f32,
    /// Viewport height in CSS pixels
    pub height: f32,
    /// Primary input can hover
    pub hover: bool,
    pub pointer: PointerKind,
    /// `None` when the host reports no preference
    pub color_scheme: Option<ColorScheme>,
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl MediaState {
    /// A mouse-driven viewport of the given width
    pub fn desktop(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// A touch-driven viewport of the given width
    pub fn touch(width: f32) -> Self {
        Self {
            width,
            hover: false,
            pointer: PointerKind::Coarse,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_high_contrast(mut self, high: bool) -> Self {
        self.high_contrast = high;
        self
    }

    /// Fill the color scheme from the operating system preference
    #[cfg(feature = "system-scheme")]
    pub fn with_system_color_scheme(mut self) -> Self {
        self.color_scheme = crate::platform::detect_system_color_scheme();
        self
    }
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            hover: true,
            pointer: PointerKind::Fine,
            color_scheme: None,
            reduced_motion: false,
            high_contrast: false,
        }
    }
}

/// The independent media-query answers a classification is derived from
///
/// Two media states with equal predicates produce equal classifications, so
/// the observer compares predicates to decide whether anything changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MediaPredicates {
    pub min_md: bool,
    pub min_lg: bool,
    pub min_xl: bool,
    pub min_xxl: bool,
    pub frame: DesignFrame,
    pub hover: bool,
    pub coarse_pointer: bool,
    pub prefers_dark: bool,
    pub prefers_light: bool,
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl MediaPredicates {
    pub fn evaluate(media: &MediaState, thresholds: &ViewportThresholds) -> Self {
        let width = media.width;
        Self {
            min_md: width >= thresholds.min_width(Breakpoint::Md),
            min_lg: width >= thresholds.min_width(Breakpoint::Lg),
            min_xl: width >= thresholds.min_width(Breakpoint::Xl),
            min_xxl: width >= thresholds.min_width(Breakpoint::Xxl),
            frame: thresholds.frames.frame_for_width(width),
            hover: media.hover,
            coarse_pointer: media.pointer == PointerKind::Coarse,
            prefers_dark: media.color_scheme == Some(ColorScheme::Dark),
            prefers_light: media.color_scheme == Some(ColorScheme::Light),
            reduced_motion: media.reduced_motion,
            high_contrast: media.high_contrast,
        }
    }
}
