use serde::Serialize;

use crate::breakpoint::{Breakpoint, DesignFrame};
use crate::media::MediaPredicates;

/// Breakpoint and capability flags derived from one media snapshot
///
/// Classifications are immutable values. The observer builds a fresh one on
/// every change and readers hold on to whichever one they were given.
///
/// Size flags are read off the breakpoint label, so exactly one of
/// `is_mobile`, `is_tablet` and `is_desktop` is true for a measured
/// viewport even when thresholds are misconfigured. The default value is the pre-measurement state: `sm`
/// with every flag false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub breakpoint: Breakpoint,
    pub frame: DesignFrame,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_large_desktop: bool,
    pub is_extra_large: bool,
    pub can_hover: bool,
    pub is_touch: bool,
    pub prefers_dark: bool,
    pub prefers_light: bool,
    pub prefers_reduced_motion: bool,
    pub prefers_high_contrast: bool,
}

impl Classification {
    pub fn from_predicates(p: &MediaPredicates) -> Self {
        // Largest satisfied threshold wins
        let breakpoint = if p.min_xxl {
            Breakpoint::Xxl
        } else if p.min_xl {
            Breakpoint::Xl
        } else if p.min_lg {
            Breakpoint::Lg
        } else if p.min_md {
            Breakpoint::Md
        } else {
            Breakpoint::Sm
        };

        Self {
            breakpoint,
            frame: p.frame,
            is_mobile: breakpoint == Breakpoint::Sm,
            is_tablet: breakpoint == Breakpoint::Md,
            is_desktop: breakpoint >= Breakpoint::Lg,
            is_large_desktop: breakpoint >= Breakpoint::Xl,
            is_extra_large: breakpoint == Breakpoint::Xxl,
            can_hover: p.hover,
            is_touch: !p.hover && p.coarse_pointer,
            prefers_dark: p.prefers_dark,
            prefers_light: p.prefers_light,
            prefers_reduced_motion: p.reduced_motion,
            prefers_high_contrast: p.high_contrast,
        }
    }

    /// Current breakpoint is exactly `breakpoint`
    pub fn is(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint == breakpoint
    }

    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint >= breakpoint
    }

    pub fn is_at_most(&self, breakpoint: Breakpoint) -> bool {
        self.breakpoint <= breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::ViewportThresholds;
    use crate::media::{MediaState, PointerKind};

    fn classify(media: MediaState) -> Classification {
        Classification::from_predicates(&MediaPredicates::evaluate(
            &media,
            &ViewportThresholds::DEFAULT,
        ))
    }

    #[test]
    fn test_exactly_one_size_class() {
        for width in [0.0, 320.0, 639.0, 640.0, 900.0, 1024.0, 1300.0, 2000.0] {
            let c = classify(MediaState::desktop(width));
            let count = [c.is_mobile, c.is_tablet, c.is_desktop]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert_eq!(count, 1, "width {width}");
        }
    }

    #[test]
    fn test_breakpoint_boundaries() {
        for (width, expected) in [
            (0.0, Breakpoint::Sm),
            (639.0, Breakpoint::Sm),
            (640.0, Breakpoint::Md),
            (1023.0, Breakpoint::Md),
            (1024.0, Breakpoint::Lg),
            (1280.0, Breakpoint::Xl),
            (1536.0, Breakpoint::Xxl),
        ] {
            assert_eq!(classify(MediaState::desktop(width)).breakpoint, expected, "width {width}");
        }
    }

    #[test]
    fn test_unordered_thresholds_keep_one_size_class() {
        let thresholds = ViewportThresholds {
            md: 1000.0,
            lg: 800.0,
            ..ViewportThresholds::DEFAULT
        };
        assert!(!thresholds.is_ascending());

        for width in [500.0, 900.0, 1100.0] {
            let c = Classification::from_predicates(&MediaPredicates::evaluate(
                &MediaState::desktop(width),
                &thresholds,
            ));
            let count = [c.is_mobile, c.is_tablet, c.is_desktop]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert_eq!(count, 1, "width {width}");
        }

        let c = Classification::from_predicates(&MediaPredicates::evaluate(
            &MediaState::desktop(900.0),
            &thresholds,
        ));
        assert_eq!(c.breakpoint, Breakpoint::Lg);
        assert!(c.is_desktop && !c.is_mobile && !c.is_tablet);
    }

    #[test]
    fn test_wide_desktop() {
        let c = classify(MediaState::desktop(1600.0));
        assert_eq!(c.breakpoint, Breakpoint::Xxl);
        assert!(c.is_desktop && c.is_large_desktop && c.is_extra_large);
        assert_eq!(c.frame, DesignFrame::Wide);
        assert!(c.is_at_least(Breakpoint::Lg));
        assert!(!c.is_at_most(Breakpoint::Xl));
    }

    #[test]
    fn test_tablet_is_md() {
        let c = classify(MediaState::desktop(800.0));
        assert_eq!(c.breakpoint, Breakpoint::Md);
        assert!(c.is_tablet && !c.is_mobile && !c.is_desktop);
        assert!(c.is(Breakpoint::Md));
    }

    #[test]
    fn test_touch_requires_no_hover_and_coarse_pointer() {
        assert!(classify(MediaState::touch(390.0)).is_touch);

        let mut hybrid = MediaState::touch(390.0);
        hybrid.hover = true;
        assert!(!classify(hybrid).is_touch);

        let mut stylus = MediaState::touch(390.0);
        stylus.pointer = PointerKind::Fine;
        assert!(!classify(stylus).is_touch);
    }

    #[test]
    fn test_default_is_unmeasured() {
        let c = Classification::default();
        assert_eq!(c.breakpoint, Breakpoint::Sm);
        assert!(!c.is_mobile && !c.is_tablet && !c.is_desktop);
        assert!(!c.can_hover && !c.is_touch);
    }
}
