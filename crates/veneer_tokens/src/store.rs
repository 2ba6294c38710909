//! Immutable token store
//!
//! The store is built once from a nested literal table and only read
//! afterwards. A process-wide instance can be installed with
//! [`TokenStore::init`]; [`TokenStore::global`] falls back to the built-in
//! catalog when nothing was installed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::builtin;
use crate::error::{Result, TokenError};
use crate::group::TokenGroup;
use crate::value::TokenValue;

/// Global token store instance
static GLOBAL_STORE: OnceLock<TokenStore> = OnceLock::new();

/// Source of store generations; every constructed store gets a fresh one.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A named design value.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    group: TokenGroup,
    name: String,
    value: TokenValue,
}

impl Token {
    pub fn new(group: TokenGroup, name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        Self {
            group,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn group(&self) -> TokenGroup {
        self.group
    }

    /// Dotted name within the group, e.g. `figma.text.primary`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Full path including the group, e.g. `colors.figma.text.primary`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.group.id(), self.name)
    }

    /// Custom property name, e.g. `--colors-figma-text-primary`.
    pub fn css_variable(&self) -> String {
        format!("--{}-{}", self.group.id(), self.name.replace('.', "-"))
    }
}

/// A leaf literal in a token table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenLiteral {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for TokenLiteral {
    fn from(s: &str) -> Self {
        TokenLiteral::Text(s.to_string())
    }
}

impl From<i64> for TokenLiteral {
    fn from(n: i64) -> Self {
        TokenLiteral::Integer(n)
    }
}

impl From<f64> for TokenLiteral {
    fn from(n: f64) -> Self {
        TokenLiteral::Float(n)
    }
}

/// A node in a token table: a leaf literal or a nested table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenLiteral),
    Table(IndexMap<String, TokenNode>),
}

/// A nested literal table: group id -> nested names -> literal.
///
/// ```toml
/// [colors.figma.text]
/// primary = "#E9EBDF"
///
/// [z-index]
/// modal = 1400
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TokenTable {
    groups: IndexMap<String, TokenNode>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf at a dotted path (`colors.brand.ink`), creating
    /// intermediate tables. Replaces anything already at that path.
    pub fn insert(&mut self, path: &str, literal: impl Into<TokenLiteral>) {
        let mut segments = path.split('.').peekable();
        let mut table = &mut self.groups;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                table.insert(segment.to_string(), TokenNode::Leaf(literal.into()));
                return;
            }
            let node = table
                .entry(segment.to_string())
                .or_insert_with(|| TokenNode::Table(IndexMap::new()));
            if let TokenNode::Leaf(_) = node {
                *node = TokenNode::Table(IndexMap::new());
            }
            table = match node {
                TokenNode::Table(inner) => inner,
                TokenNode::Leaf(_) => return,
            };
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, path: &str, literal: impl Into<TokenLiteral>) -> Self {
        self.insert(path, literal);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Immutable lookup table of design tokens.
#[derive(Clone, Debug)]
pub struct TokenStore {
    groups: FxHashMap<TokenGroup, IndexMap<String, Token>>,
    generation: u64,
}

impl TokenStore {
    /// Build a store from a nested literal table.
    ///
    /// Top-level keys must be group ids (see [`TokenGroup::from_id`]); nested
    /// tables flatten into dotted names. Fails on the first unknown group or
    /// unparseable literal; no partial store is ever returned.
    pub fn from_table(table: &TokenTable) -> Result<Self> {
        let mut tokens = Vec::new();
        for (group_id, node) in &table.groups {
            let group = group_id.parse::<TokenGroup>()?;
            match node {
                TokenNode::Table(entries) => {
                    flatten(group, String::new(), entries, &mut tokens)?;
                }
                TokenNode::Leaf(_) => {
                    return Err(TokenError::InvalidValue {
                        path: group_id.clone(),
                        reason: "a group must be a table of tokens".to_string(),
                    });
                }
            }
        }
        Ok(Self::from_tokens(tokens))
    }

    /// Parse a TOML document into a table and build a store from it.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let table: TokenTable = toml::from_str(src)?;
        Self::from_table(&table)
    }

    /// The built-in design system catalog.
    pub fn builtin() -> Self {
        Self::from_tokens(builtin::tokens())
    }

    pub(crate) fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut groups: FxHashMap<TokenGroup, IndexMap<String, Token>> = FxHashMap::default();
        for token in tokens {
            let entries = groups.entry(token.group).or_default();
            if entries.contains_key(&token.name) {
                tracing::trace!("TokenStore: '{}' redefined, last value wins", token.path());
            }
            entries.insert(token.name.clone(), token);
        }

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            "TokenStore: built generation {} with {} tokens",
            generation,
            groups.values().map(IndexMap::len).sum::<usize>()
        );

        Self { groups, generation }
    }

    /// Look up a token by group and name.
    pub fn get(&self, group: TokenGroup, name: &str) -> Result<&Token> {
        self.groups
            .get(&group)
            .and_then(|entries| entries.get(name))
            .ok_or_else(|| TokenError::unknown(group, name))
    }

    /// Look up a token by full path (`colors.primary.500`).
    ///
    /// An unknown group is reported as [`TokenError::UnknownToken`] as well,
    /// since the path as a whole names no token.
    pub fn lookup(&self, path: &str) -> Result<&Token> {
        let (group_id, name) = split_path(path).ok_or_else(|| TokenError::UnknownToken {
            group: path.to_string(),
            name: String::new(),
        })?;
        let group = TokenGroup::from_id(group_id).ok_or_else(|| TokenError::UnknownToken {
            group: group_id.to_string(),
            name: name.to_string(),
        })?;
        self.get(group, name)
    }

    pub fn contains(&self, group: TokenGroup, name: &str) -> bool {
        self.get(group, name).is_ok()
    }

    /// Tokens of one group in declaration order.
    pub fn group(&self, group: TokenGroup) -> impl Iterator<Item = &Token> {
        self.groups.get(&group).into_iter().flat_map(IndexMap::values)
    }

    /// All tokens, grouped in [`TokenGroup::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        TokenGroup::all().iter().flat_map(|g| self.group(*g))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Process-unique number identifying this store's contents.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Custom property map (`--colors-primary-500` -> `#919B8F`), in group
    /// then declaration order.
    pub fn to_css_variables(&self) -> IndexMap<String, String> {
        self.iter()
            .map(|token| (token.css_variable(), token.value().to_string()))
            .collect()
    }

    // ========== Global Store ==========

    /// Install the process-wide store. The first call wins; returns `false`
    /// if a store was already installed.
    pub fn init(store: TokenStore) -> bool {
        GLOBAL_STORE.set(store).is_ok()
    }

    /// The process-wide store, if one was installed or already defaulted.
    pub fn try_global() -> Option<&'static TokenStore> {
        GLOBAL_STORE.get()
    }

    /// The process-wide store, defaulting to [`TokenStore::builtin`].
    pub fn global() -> &'static TokenStore {
        GLOBAL_STORE.get_or_init(TokenStore::builtin)
    }
}

/// Split `group.rest.of.name` at the first dot. The group id itself may not
/// contain dots.
fn split_path(path: &str) -> Option<(&str, &str)> {
    let (group, name) = path.split_once('.')?;
    if group.is_empty() || name.is_empty() {
        return None;
    }
    Some((group, name))
}

fn flatten(
    group: TokenGroup,
    prefix: String,
    entries: &IndexMap<String, TokenNode>,
    out: &mut Vec<Token>,
) -> Result<()> {
    for (key, node) in entries {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TokenNode::Table(inner) => flatten(group, name, inner, out)?,
            TokenNode::Leaf(literal) => {
                let value = match literal {
                    TokenLiteral::Integer(n) => TokenValue::Number(*n as f64),
                    TokenLiteral::Float(n) => TokenValue::Number(*n),
                    TokenLiteral::Text(s) => {
                        TokenValue::parse(s).map_err(|reason| TokenError::InvalidValue {
                            path: format!("{}.{}", group.id(), name),
                            reason,
                        })?
                    }
                };
                out.push(Token { group, name, value });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn sample() -> TokenTable {
        TokenTable::new()
            .with("colors.brand.ink", "#151515")
            .with("colors.brand.paper", "#E9EBDF")
            .with("spacing.gutter", "24px")
            .with("z-index.modal", 1400)
    }

    #[test]
    fn table_insert_nests_paths() {
        let table = sample();
        let store = TokenStore::from_table(&table).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.get(TokenGroup::Colors, "brand.ink").unwrap().value(),
            &TokenValue::Color(Color::from_hex(0x151515))
        );
        assert_eq!(
            store.get(TokenGroup::ZIndex, "modal").unwrap().value(),
            &TokenValue::Number(1400.0)
        );
    }

    #[test]
    fn unknown_name_and_group() {
        let store = TokenStore::from_table(&sample()).unwrap();
        assert_eq!(
            store.get(TokenGroup::Colors, "brand.chalk").unwrap_err(),
            TokenError::UnknownToken {
                group: "colors".into(),
                name: "brand.chalk".into()
            }
        );
        assert!(store.get(TokenGroup::Motion, "fast").is_err());
        assert!(matches!(
            store.lookup("palette.brand.ink"),
            Err(TokenError::UnknownToken { .. })
        ));
        assert!(store.lookup("colors").is_err());
    }

    #[test]
    fn unknown_group_in_table_fails_construction() {
        let table = sample().with("palette.ink", "#000000");
        assert_eq!(
            TokenStore::from_table(&table).unwrap_err(),
            TokenError::UnknownGroup("palette".into())
        );
    }

    #[test]
    fn invalid_color_fails_construction() {
        let table = TokenTable::new().with("colors.bad", "#nothex");
        let err = TokenStore::from_table(&table).unwrap_err();
        assert!(matches!(err, TokenError::InvalidValue { ref path, .. } if path == "colors.bad"));
    }

    #[test]
    fn leaf_group_is_rejected() {
        let table = TokenTable::new().with("spacing", "4px");
        assert!(matches!(
            TokenStore::from_table(&table),
            Err(TokenError::InvalidValue { .. })
        ));
    }

    #[test]
    fn generations_are_unique() {
        let a = TokenStore::from_table(&sample()).unwrap();
        let b = TokenStore::from_table(&sample()).unwrap();
        assert_ne!(a.generation(), b.generation());
    }

    #[test]
    fn css_variables_follow_declaration_order() {
        let store = TokenStore::from_table(&sample()).unwrap();
        let vars: Vec<(String, String)> = store.to_css_variables().into_iter().collect();
        assert_eq!(vars[0], ("--colors-brand-ink".into(), "#151515".into()));
        assert_eq!(vars[1], ("--colors-brand-paper".into(), "#E9EBDF".into()));
        assert_eq!(vars[2], ("--spacing-gutter".into(), "24px".into()));
        assert_eq!(vars[3], ("--z-index-modal".into(), "1400".into()));
    }
}
