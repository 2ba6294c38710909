use pretty_assertions::assert_eq;
use veneer_tokens::{Color, TokenError, TokenGroup, TokenStore, TokenValue};

const THEME: &str = r##"
[colors.figma.text]
primary = "#E9EBDF"
muted = "#8B867F"

[colors.alpha]
overlay = "rgba(0, 0, 0, 0.6)"

[spacing.figma.padding]
md = "16px"
"2xl" = "40px"

[radii]
full = "9999px"

[z-index]
modal = 1400
auto = "auto"

[motion.easing]
slide-in = "cubic-bezier(0.16, 1, 0.3, 1)"

[motion.duration]
fast = "150ms"
spring = "0.3s"
"##;

#[test]
fn toml_table_builds_a_store() {
    let store = TokenStore::from_toml_str(THEME).unwrap();

    assert_eq!(
        store.get(TokenGroup::Colors, "figma.text.primary").unwrap().value(),
        &TokenValue::Color(Color::from_hex(0xE9EBDF))
    );
    assert_eq!(
        store.lookup("colors.alpha.overlay").unwrap().value(),
        &TokenValue::Color(Color::rgba(0, 0, 0, 0.6))
    );
    assert_eq!(
        store.lookup("spacing.figma.padding.2xl").unwrap().value(),
        &TokenValue::Px(40.0)
    );
    assert_eq!(
        store.lookup("z-index.auto").unwrap().value(),
        &TokenValue::Raw("auto".into())
    );
    assert_eq!(
        store.lookup("motion.duration.spring").unwrap().value(),
        &TokenValue::Duration(300.0)
    );
}

#[test]
fn group_listing_keeps_document_order() {
    let store = TokenStore::from_toml_str(THEME).unwrap();
    let names: Vec<&str> = store.group(TokenGroup::Colors).map(|t| t.name()).collect();
    assert_eq!(
        names,
        vec!["figma.text.primary", "figma.text.muted", "alpha.overlay"]
    );
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(matches!(
        TokenStore::from_toml_str("[colors\nbroken = 1"),
        Err(TokenError::Parse(_))
    ));
    assert_eq!(
        TokenStore::from_toml_str("[palette]\nink = \"#000000\"").unwrap_err(),
        TokenError::UnknownGroup("palette".into())
    );
}

#[test]
fn lookup_reports_the_missing_path() {
    let store = TokenStore::from_toml_str(THEME).unwrap();
    let err = store.lookup("colors.figma.text.loud").unwrap_err();
    assert_eq!(err.to_string(), "unknown token 'colors.figma.text.loud'");
}

#[test]
fn global_store_is_installed_once() {
    let first = TokenStore::global();
    assert!(!first.is_empty());
    // A store already exists (installed or defaulted), so this is ignored.
    assert!(!TokenStore::init(TokenStore::from_toml_str(THEME).unwrap()));
    assert_eq!(TokenStore::global().generation(), first.generation());
    assert!(TokenStore::try_global().is_some());
}
