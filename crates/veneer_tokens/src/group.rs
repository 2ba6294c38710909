//! Token groups

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TokenError;

/// The group a token belongs to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TokenGroup {
    Colors,
    Spacing,
    Radii,
    Typography,
    Shadows,
    ZIndex,
    /// Easings and durations
    Motion,
}

impl TokenGroup {
    /// Stable group id used in paths and tables.
    pub fn id(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Radii => "radii",
            Self::Typography => "typography",
            Self::Shadows => "shadows",
            Self::ZIndex => "z-index",
            Self::Motion => "motion",
        }
    }

    /// All groups in display order.
    pub fn all() -> &'static [TokenGroup] {
        const GROUPS: [TokenGroup; 7] = [
            TokenGroup::Colors,
            TokenGroup::Spacing,
            TokenGroup::Radii,
            TokenGroup::Typography,
            TokenGroup::Shadows,
            TokenGroup::ZIndex,
            TokenGroup::Motion,
        ];
        &GROUPS
    }

    /// Parse a group id, accepting the common aliases used by design tools.
    pub fn from_id(id: &str) -> Option<Self> {
        let group = match id {
            "colors" | "color" => Self::Colors,
            "spacing" | "space" => Self::Spacing,
            "radii" | "radius" | "border-radius" | "borderRadius" => Self::Radii,
            "typography" | "type" => Self::Typography,
            "shadows" | "shadow" | "box-shadow" | "boxShadow" => Self::Shadows,
            "z-index" | "zIndex" | "z_index" => Self::ZIndex,
            "motion" | "animation" | "animations" => Self::Motion,
            _ => return None,
        };
        Some(group)
    }
}

impl Display for TokenGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TokenGroup {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| TokenError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for group in TokenGroup::all() {
            assert_eq!(group.id().parse::<TokenGroup>().unwrap(), *group);
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(TokenGroup::from_id("borderRadius"), Some(TokenGroup::Radii));
        assert_eq!(TokenGroup::from_id("zIndex"), Some(TokenGroup::ZIndex));
        assert_eq!(TokenGroup::from_id("boxShadow"), Some(TokenGroup::Shadows));
        assert_eq!(TokenGroup::from_id("palette"), None);
    }

    #[test]
    fn unknown_group_error() {
        let err = "palette".parse::<TokenGroup>().unwrap_err();
        assert_eq!(err, TokenError::UnknownGroup("palette".into()));
    }
}
