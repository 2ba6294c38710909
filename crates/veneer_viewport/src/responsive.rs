//! Values that vary by breakpoint

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;
use crate::error::ViewportError;

/// A value given per breakpoint, with an optional default
///
/// Resolution at breakpoint `b` picks the entry of the largest breakpoint
/// not above `b`. If there is none it falls back to the default entry, then
/// to the smallest breakpoint that has an entry.
///
/// ```rust
/// use veneer_viewport::{Breakpoint, Responsive};
///
/// let gap = Responsive::new().md("16px").xl("32px");
/// assert_eq!(gap.resolve(Breakpoint::Lg), Ok(&"16px"));
/// assert_eq!(gap.resolve(Breakpoint::Xxl), Ok(&"32px"));
/// // Nothing at or below `sm` and no default: smallest entry
/// assert_eq!(gap.resolve(Breakpoint::Sm), Ok(&"16px"));
/// ```
///
/// In config files a responsive value is a table keyed by breakpoint id,
/// plus an optional `default` key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, T>",
    into = "HashMap<String, T>",
    bound(deserialize = "T: Deserialize<'de>", serialize = "T: Serialize + Clone")
)]
pub struct Responsive<T> {
    values: [Option<T>; 5],
    default: Option<T>,
}

impl<T> Responsive<T> {
    pub fn new() -> Self {
        Self {
            values: [None, None, None, None, None],
            default: None,
        }
    }

    /// The same value at every breakpoint
    pub fn fixed(value: T) -> Self {
        Self::new().with_default(value)
    }

    /// Set the entry for one breakpoint
    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.values[breakpoint.index()] = Some(value);
        self
    }

    pub fn sm(self, value: T) -> Self {
        self.at(Breakpoint::Sm, value)
    }

    pub fn md(self, value: T) -> Self {
        self.at(Breakpoint::Md, value)
    }

    pub fn lg(self, value: T) -> Self {
        self.at(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.at(Breakpoint::Xl, value)
    }

    pub fn xxl(self, value: T) -> Self {
        self.at(Breakpoint::Xxl, value)
    }

    /// Set the entry used when no breakpoint entry applies
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Entry set for exactly this breakpoint
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.values[breakpoint.index()].as_ref()
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.values.iter().all(Option::is_none)
    }

    /// Breakpoint entries that are set, smallest first
    pub fn entries(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::all()
            .iter()
            .filter_map(|bp| self.get(*bp).map(|value| (*bp, value)))
    }

    /// Pick the value that applies at `current`
    pub fn resolve(&self, current: Breakpoint) -> Result<&T, ViewportError> {
        self.entries()
            .filter(|(bp, _)| *bp <= current)
            .last()
            .map(|(_, value)| value)
            .or(self.default.as_ref())
            .or_else(|| self.entries().next().map(|(_, value)| value))
            .ok_or(ViewportError::NoApplicableValue)
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Responsive<U> {
        let mut mapped = Responsive::new();
        for (bp, value) in self.entries() {
            mapped = mapped.at(bp, f(value));
        }
        if let Some(value) = &self.default {
            mapped = mapped.with_default(f(value));
        }
        mapped
    }
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Breakpoint, T)> for Responsive<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (bp, value)| acc.at(bp, value))
    }
}

impl<T> TryFrom<HashMap<String, T>> for Responsive<T> {
    type Error = ViewportError;

    fn try_from(map: HashMap<String, T>) -> Result<Self, Self::Error> {
        let mut responsive = Self::new();
        for (key, value) in map {
            if key == "default" {
                responsive.default = Some(value);
            } else {
                let bp: Breakpoint = key.parse()?;
                responsive.values[bp.index()] = Some(value);
            }
        }
        Ok(responsive)
    }
}

impl<T> From<Responsive<T>> for HashMap<String, T> {
    fn from(responsive: Responsive<T>) -> Self {
        let mut map = HashMap::new();
        for (bp, value) in Breakpoint::all().iter().zip(responsive.values) {
            if let Some(value) = value {
                map.insert(bp.id().to_string(), value);
            }
        }
        if let Some(value) = responsive.default {
            map.insert("default".to_string(), value);
        }
        map
    }
}
