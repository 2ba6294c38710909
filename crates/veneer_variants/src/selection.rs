//! Caller-side variant selections

use veneer_viewport::{Breakpoint, Responsive};

/// The value chosen for one axis
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisSelection {
    Fixed(String),
    /// Picked per breakpoint when the selection is resolved
    Responsive(Responsive<String>),
}

impl AxisSelection {
    /// Value in effect at `breakpoint`; `None` for an empty responsive value
    pub fn derive(&self, breakpoint: Breakpoint) -> Option<&str> {
        match self {
            AxisSelection::Fixed(value) => Some(value.as_str()),
            AxisSelection::Responsive(values) => {
                values.resolve(breakpoint).ok().map(String::as_str)
            }
        }
    }
}

impl From<&str> for AxisSelection {
    fn from(value: &str) -> Self {
        AxisSelection::Fixed(value.to_string())
    }
}

impl From<String> for AxisSelection {
    fn from(value: String) -> Self {
        AxisSelection::Fixed(value)
    }
}

impl From<bool> for AxisSelection {
    fn from(value: bool) -> Self {
        AxisSelection::Fixed(value.to_string())
    }
}

impl From<Responsive<String>> for AxisSelection {
    fn from(values: Responsive<String>) -> Self {
        AxisSelection::Responsive(values)
    }
}

impl From<Responsive<&str>> for AxisSelection {
    fn from(values: Responsive<&str>) -> Self {
        AxisSelection::Responsive(values.map(|v| v.to_string()))
    }
}

/// How caller overrides combine with earlier directives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverrideMode {
    /// An override removes earlier directives on the same property
    #[default]
    Supersede,
    /// Keep everything in emitted order and let the cascade decide
    Merge,
}

/// Axis values, override directives and override mode for one resolution
///
/// ```rust
/// use veneer_variants::{Responsive, Selection};
///
/// let selection = Selection::new()
///     .set("variant", "accent")
///     .set("size", Responsive::new().sm("sm").lg("lg"))
///     .flag("loading", true)
///     .class("mt-4 px-8");
/// assert_eq!(selection.overrides(), ["mt-4", "px-8"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    values: Vec<(String, AxisSelection)>,
    overrides: Vec<String>,
    mode: OverrideMode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an axis, replacing any earlier choice
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<AxisSelection>) -> Self {
        self.insert(axis, value);
        self
    }

    pub fn flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.set(axis, on)
    }

    /// Append override directives (whitespace separated)
    pub fn class(mut self, directives: &str) -> Self {
        self.push_class(directives);
        self
    }

    /// Keep overrides alongside conflicting directives
    pub fn merge(mut self) -> Self {
        self.mode = OverrideMode::Merge;
        self
    }

    pub fn mode(mut self, mode: OverrideMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<AxisSelection>) {
        let axis = axis.into();
        let value = value.into();
        match self.values.iter_mut().find(|(name, _)| *name == axis) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((axis, value)),
        }
    }

    pub fn remove(&mut self, axis: &str) -> Option<AxisSelection> {
        let index = self.values.iter().position(|(name, _)| name == axis)?;
        Some(self.values.remove(index).1)
    }

    pub fn push_class(&mut self, directives: &str) {
        self.overrides
            .extend(directives.split_whitespace().map(str::to_string));
    }

    pub fn get(&self, axis: &str) -> Option<&AxisSelection> {
        self.values
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }

    /// Chosen axes in insertion order
    pub fn axes(&self) -> impl Iterator<Item = (&str, &AxisSelection)> {
        self.values
            .iter()
            .map(|(axis, value)| (axis.as_str(), value))
    }

    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    pub fn override_mode(&self) -> OverrideMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let selection = Selection::new().set("size", "sm").set("size", "lg");
        assert_eq!(selection.axes().count(), 1);
        assert_eq!(selection.get("size"), Some(&AxisSelection::from("lg")));
    }

    #[test]
    fn test_responsive_derive() {
        let size = AxisSelection::from(Responsive::new().sm("sm").lg("lg"));
        assert_eq!(size.derive(Breakpoint::Md), Some("sm"));
        assert_eq!(size.derive(Breakpoint::Xl), Some("lg"));

        let empty = AxisSelection::Responsive(Responsive::new());
        assert_eq!(empty.derive(Breakpoint::Md), None);
    }

    #[test]
    fn test_flags_and_overrides() {
        let mut selection = Selection::new().flag("loading", true).class(" w-full  mt-2 ");
        assert_eq!(selection.get("loading"), Some(&AxisSelection::from("true")));
        assert_eq!(selection.overrides(), ["w-full", "mt-2"]);
        assert_eq!(selection.override_mode(), OverrideMode::Supersede);
        assert!(selection.remove("loading").is_some());
        assert!(selection.get("loading").is_none());
        assert_eq!(selection.merge().override_mode(), OverrideMode::Merge);
    }
}
