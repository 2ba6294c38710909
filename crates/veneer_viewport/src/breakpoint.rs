//! Breakpoints, design frames and their width thresholds
//!
//! The breakpoint scale follows the Tailwind naming (`sm`, `md`, `lg`, `xl`,
//! `2xl`) with the tablet boundary at 640px. A second, coarser scale of
//! design frames mirrors the artboard sizes used in the design files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewportError;

/// Ordered viewport size classes
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Below the tablet threshold
    #[default]
    Sm,
    /// Tablet
    Md,
    /// Desktop
    Lg,
    /// Large desktop
    Xl,
    /// Extra large desktop
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, smallest first
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Sm,
            Breakpoint::Md,
            Breakpoint::Lg,
            Breakpoint::Xl,
            Breakpoint::Xxl,
        ]
    }

    /// Short identifier used in schemas and config files
    pub fn id(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Parse an identifier produced by [`Breakpoint::id`]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|bp| bp.id() == id)
    }

    /// Position in the ordered scale (`sm` is 0)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Breakpoint {
    type Err = ViewportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ViewportError::UnknownBreakpoint(s.to_string()))
    }
}

/// Artboard size classes from the design files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignFrame {
    #[default]
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl DesignFrame {
    pub fn id(&self) -> &'static str {
        match self {
            DesignFrame::Mobile => "mobile",
            DesignFrame::Tablet => "tablet",
            DesignFrame::Desktop => "desktop",
            DesignFrame::Wide => "wide",
        }
    }
}

impl fmt::Display for DesignFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Minimum widths of the design frames
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignFrames {
    pub tablet: f32,
    pub desktop: f32,
    pub wide: f32,
}

impl DesignFrames {
    pub const DEFAULT: Self = Self {
        tablet: 375.0,
        desktop: 768.0,
        wide: 1440.0,
    };

    /// Frame a viewport of `width` pixels falls into
    pub fn frame_for_width(&self, width: f32) -> DesignFrame {
        if width >= self.wide {
            DesignFrame::Wide
        } else if width >= self.desktop {
            DesignFrame::Desktop
        } else if width >= self.tablet {
            DesignFrame::Tablet
        } else {
            DesignFrame::Mobile
        }
    }
}

impl Default for DesignFrames {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Minimum widths (in CSS pixels) at which each breakpoint starts
///
/// `sm` has no threshold: it covers everything below `md`. Missing keys in a
/// config file fall back to the defaults:
///
/// ```toml
/// md = 640
/// lg = 1024
/// xl = 1280
/// 2xl = 1536
///
/// [frames]
/// tablet = 375
/// desktop = 768
/// wide = 1440
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportThresholds {
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xxl: f32,
    pub frames: DesignFrames,
}

impl ViewportThresholds {
    pub const DEFAULT: Self = Self {
        md: 640.0,
        lg: 1024.0,
        xl: 1280.0,
        xxl: 1536.0,
        frames: DesignFrames::DEFAULT,
    };

    /// Minimum width of a breakpoint
    pub fn min_width(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Sm => 0.0,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// Whether thresholds increase strictly from `md` to `2xl`
    pub fn is_ascending(&self) -> bool {
        self.md < self.lg && self.lg < self.xl && self.xl < self.xxl
    }
}

impl Default for ViewportThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_ordering() {
        assert!(Breakpoint::Sm < Breakpoint::Md);
        assert!(Breakpoint::Xl < Breakpoint::Xxl);
        assert_eq!(Breakpoint::Lg.index(), 2);
        assert_eq!(Breakpoint::all().len(), 5);
    }

    #[test]
    fn test_breakpoint_ids() {
        for bp in Breakpoint::all() {
            assert_eq!(bp.id().parse::<Breakpoint>(), Ok(*bp));
        }
        assert_eq!(
            "3xl".parse::<Breakpoint>(),
            Err(ViewportError::UnknownBreakpoint("3xl".into()))
        );
        assert_eq!(Breakpoint::Xxl.to_string(), "2xl");
    }

    #[test]
    fn test_threshold_order() {
        let t = ViewportThresholds::DEFAULT;
        assert_eq!(t.min_width(Breakpoint::Sm), 0.0);
        assert_eq!(t.min_width(Breakpoint::Lg), 1024.0);
        assert!(t.is_ascending());
        assert!(!ViewportThresholds { xl: 1600.0, ..t }.is_ascending());
    }

    #[test]
    fn test_design_frames() {
        let frames = DesignFrames::DEFAULT;
        assert_eq!(frames.frame_for_width(374.0), DesignFrame::Mobile);
        assert_eq!(frames.frame_for_width(375.0), DesignFrame::Tablet);
        assert_eq!(frames.frame_for_width(768.0), DesignFrame::Desktop);
        assert_eq!(frames.frame_for_width(1439.0), DesignFrame::Desktop);
        assert_eq!(frames.frame_for_width(1440.0), DesignFrame::Wide);
    }
}
