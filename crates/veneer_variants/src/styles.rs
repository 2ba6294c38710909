use std::fmt;

use indexmap::IndexMap;

use crate::property::{PropertyClassifier, PropertyId};

/// Ordered, de-duplicated directives produced by a resolution
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResolvedStyles {
    directives: Vec<String>,
}

impl ResolvedStyles {
    pub(crate) fn new(directives: Vec<String>) -> Self {
        Self { directives }
    }

    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.directives.iter().any(|d| d == directive)
    }

    /// Directives joined with single spaces, ready for a `class` attribute
    pub fn class_string(&self) -> String {
        self.directives.join(" ")
    }

    /// The directive in effect for each property identity
    ///
    /// Later directives supersede earlier ones exactly as overrides do, so
    /// two style sets with equal maps style an element identically.
    pub fn property_map(&self, classifier: &dyn PropertyClassifier) -> IndexMap<PropertyId, String> {
        let mut entries = Vec::with_capacity(self.directives.len());
        for directive in &self.directives {
            supersede(&mut entries, directive.clone(), classifier);
        }
        entries.into_iter().map(|(d, id)| (id, d)).collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.directives
    }
}

impl fmt::Display for ResolvedStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_string())
    }
}

impl AsRef<[String]> for ResolvedStyles {
    fn as_ref(&self) -> &[String] {
        &self.directives
    }
}

impl<'a> IntoIterator for &'a ResolvedStyles {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}

/// Append `directive`, dropping every earlier entry it supersedes
pub(crate) fn supersede(
    entries: &mut Vec<(String, PropertyId)>,
    directive: String,
    classifier: &dyn PropertyClassifier,
) {
    let id = classifier.classify(&directive);
    entries.retain(|(_, earlier)| !classifier.supersedes(&id, earlier));
    entries.push((directive, id));
}

/// Join optional class fragments, dropping empty ones
///
/// ```rust
/// use veneer_variants::class_names;
///
/// let loading = true;
/// assert_eq!(
///     class_names([Some("flex items-center"), loading.then_some("opacity-0"), None, Some(" ")]),
///     "flex items-center opacity-0"
/// );
/// ```
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TailwindClassifier;

    #[test]
    fn test_property_map_applies_supersession() {
        let styles = ResolvedStyles::new(vec![
            "px-5".into(),
            "h-10".into(),
            "p-0".into(),
            "hover:bg-neutral-800".into(),
        ]);
        let map = styles.property_map(&TailwindClassifier);
        let kept: Vec<&str> = map.values().map(String::as_str).collect();
        assert_eq!(kept, vec!["h-10", "p-0", "hover:bg-neutral-800"]);
    }

    #[test]
    fn test_class_string() {
        let styles = ResolvedStyles::new(vec!["a".into(), "b".into()]);
        assert_eq!(styles.class_string(), "a b");
        assert_eq!(styles.to_string(), "a b");
        assert!(ResolvedStyles::default().class_string().is_empty());
    }
}
