//! Directive templates
//!
//! A directive is one utility class. It may embed token references written
//! `{group.name}`, which are looked up in the token store when the schema is
//! resolved, never when it is declared:
//!
//! ```text
//! bg-[{colors.figma.accent.primary}]  ->  bg-[#E9EBDF]
//! ```

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;
use veneer_tokens::{TokenError, TokenGroup, TokenStore};

use crate::error::SchemaError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Segment {
    Text(String),
    Token { group: TokenGroup, name: String },
}

/// A parsed directive template
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Directive {
    source: String,
    segments: SmallVec<[Segment; 3]>,
}

impl Directive {
    /// Parse a single directive. Whitespace is not allowed inside one.
    pub fn parse(source: &str) -> Result<Self, SchemaError> {
        let malformed = |reason: &str| SchemaError::MalformedDirective {
            directive: source.to_string(),
            reason: reason.to_string(),
        };

        if source.is_empty() {
            return Err(malformed("empty directive"));
        }
        if source.chars().any(char::is_whitespace) {
            return Err(malformed("directive contains whitespace"));
        }

        let mut segments = SmallVec::new();
        let mut rest = source;
        while !rest.is_empty() {
            match rest.find(|c: char| c == '{' || c == '}') {
                None => {
                    segments.push(Segment::Text(rest.to_string()));
                    break;
                }
                Some(pos) if rest[pos..].starts_with('}') => {
                    return Err(malformed("unmatched '}'"));
                }
                Some(open) => {
                    if open > 0 {
                        segments.push(Segment::Text(rest[..open].to_string()));
                    }
                    let after = &rest[open + 1..];
                    let close = after
                        .find('}')
                        .ok_or_else(|| malformed("unclosed token reference"))?;
                    let reference = &after[..close];
                    if reference.contains('{') {
                        return Err(malformed("nested token reference"));
                    }
                    let (group_id, name) = reference
                        .split_once('.')
                        .filter(|(g, n)| !g.is_empty() && !n.is_empty())
                        .ok_or_else(|| malformed("token references are written {group.name}"))?;
                    let group = TokenGroup::from_id(group_id).ok_or_else(|| {
                        SchemaError::UnknownTokenGroup {
                            directive: source.to_string(),
                            group: group_id.to_string(),
                        }
                    })?;
                    segments.push(Segment::Token {
                        group,
                        name: name.to_string(),
                    });
                    rest = &after[close + 1..];
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Parse a whitespace-separated list of directives
    pub fn parse_list(source: &str) -> Result<Vec<Self>, SchemaError> {
        source.split_whitespace().map(Self::parse).collect()
    }

    /// The template as written
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_references(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Token { .. }))
    }

    /// Token references in template order
    pub fn references(&self) -> impl Iterator<Item = (TokenGroup, &str)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token { group, name } => Some((*group, name.as_str())),
            Segment::Text(_) => None,
        })
    }

    /// Substitute token references with their CSS literals
    ///
    /// Whitespace inside a substituted value becomes `_`, the arbitrary-value
    /// space escape, so the result stays a single class.
    pub fn render(&self, store: &TokenStore) -> Result<Cow<'_, str>, TokenError> {
        if !self.has_references() {
            return Ok(Cow::Borrowed(&self.source));
        }

        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Token { group, name } => {
                    let literal = store.get(*group, name)?.value().to_string();
                    out.extend(
                        literal
                            .chars()
                            .map(|c| if c.is_whitespace() { '_' } else { c }),
                    );
                }
            }
        }
        Ok(Cow::Owned(out))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
