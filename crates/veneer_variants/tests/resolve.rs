//! Resolution tests against the built-in token catalog

use pretty_assertions::assert_eq;
use veneer_tokens::{TokenError, TokenStore};
use veneer_variants::{
    Breakpoint, CachedResolver, Classification, ConflictPolicy, PropertyClassifier, PropertyId,
    ResolveError, Resolver, Responsive, Selection, TailwindClassifier, VariantSchema,
};

fn button() -> VariantSchema {
    VariantSchema::builder("button")
        .base("inline-flex items-center rounded-full")
        .variant("variant", "primary", "bg-neutral-900 text-neutral-100")
        .variant(
            "variant",
            "accent",
            "bg-[{colors.figma.accent.primary}] text-neutral-900",
        )
        .variant("size", "sm", "h-8 px-3")
        .variant("size", "md", "h-10 px-5")
        .variant("size", "lg", "h-12 px-8")
        .flag("loading", "cursor-wait")
        .compound([("variant", "accent"), ("size", "lg")], "shadow-lg")
        .default_variant("variant", "primary")
        .default_variant("size", "md")
        .build()
        .unwrap()
}

fn at(breakpoint: Breakpoint) -> Classification {
    Classification {
        breakpoint,
        ..Classification::default()
    }
}

fn classes(store: &TokenStore, schema: &VariantSchema, selection: &Selection) -> Vec<String> {
    Resolver::new(store)
        .resolve(schema, selection)
        .unwrap()
        .into_vec()
}

#[test]
fn test_defaults_fill_omitted_axes() {
    let store = TokenStore::builtin();
    assert_eq!(
        classes(&store, &button(), &Selection::new()),
        vec![
            "inline-flex",
            "items-center",
            "rounded-full",
            "bg-neutral-900",
            "text-neutral-100",
            "h-10",
            "px-5",
        ]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let store = TokenStore::builtin();
    let schema = button();
    let selection = Selection::new()
        .set("variant", "accent")
        .set("size", "lg")
        .class("mt-2");
    let first = Resolver::new(&store).resolve(&schema, &selection).unwrap();
    let second = Resolver::new(&store).resolve(&schema, &selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_token_references_render() {
    let store = TokenStore::builtin();
    let styles = classes(&store, &button(), &Selection::new().set("variant", "accent"));
    assert!(styles.contains(&"bg-[#E9EBDF]".to_string()));

    let custom = TokenStore::from_toml_str(
        r##"
        [colors.figma.accent]
        primary = "#FF0000"
        "##,
    )
    .unwrap();
    let styles = classes(&custom, &button(), &Selection::new().set("variant", "accent"));
    assert!(styles.contains(&"bg-[#FF0000]".to_string()));
}

#[test]
fn test_compound_rules_follow_axes() {
    let store = TokenStore::builtin();
    let schema = button();

    let fired = classes(
        &store,
        &schema,
        &Selection::new().set("variant", "accent").set("size", "lg"),
    );
    assert_eq!(fired.last().map(String::as_str), Some("shadow-lg"));

    let quiet = classes(
        &store,
        &schema,
        &Selection::new().set("variant", "accent").set("size", "sm"),
    );
    assert!(!quiet.contains(&"shadow-lg".to_string()));

    let primary = classes(&store, &schema, &Selection::new().set("size", "lg"));
    assert!(!primary.contains(&"shadow-lg".to_string()));
}

#[test]
fn test_flags() {
    let store = TokenStore::builtin();
    let schema = button();
    let on = classes(&store, &schema, &Selection::new().flag("loading", true));
    assert!(on.contains(&"cursor-wait".to_string()));
    let off = classes(&store, &schema, &Selection::new().flag("loading", false));
    assert_eq!(off, classes(&store, &schema, &Selection::new()));
}

#[test]
fn test_superseding_override() {
    let store = TokenStore::builtin();
    let styles = classes(&store, &button(), &Selection::new().class("px-8 mt-2"));
    assert_eq!(
        styles,
        vec![
            "inline-flex",
            "items-center",
            "rounded-full",
            "bg-neutral-900",
            "text-neutral-100",
            "h-10",
            "px-8",
            "mt-2",
        ]
    );
}

#[test]
fn test_merging_override_keeps_conflicts() {
    let store = TokenStore::builtin();
    let styles = classes(
        &store,
        &button(),
        &Selection::new().class("px-8 inline-flex").merge(),
    );
    assert_eq!(
        styles,
        vec![
            "inline-flex",
            "items-center",
            "rounded-full",
            "bg-neutral-900",
            "text-neutral-100",
            "h-10",
            "px-5",
            "px-8",
        ]
    );
}

#[test]
fn test_repeated_overrides_are_stable() {
    let store = TokenStore::builtin();
    let schema = button();
    let once = Resolver::new(&store)
        .resolve(&schema, &Selection::new().class("px-2 bg-red-500"))
        .unwrap();
    let twice = Resolver::new(&store)
        .resolve(
            &schema,
            &Selection::new().class("px-2 bg-red-500 px-2 bg-red-500"),
        )
        .unwrap();
    assert_eq!(
        once.property_map(&TailwindClassifier),
        twice.property_map(&TailwindClassifier)
    );
    assert_eq!(once, twice);
}

#[test]
fn test_resolved_styles_reapplied_as_overrides() {
    let store = TokenStore::builtin();
    let schema = VariantSchema::builder("field")
        .base("p-2 px-4 text-sm leading-tight")
        .variant("size", "sm", "text-xs px-2")
        .variant("size", "lg", "text-lg px-6")
        .build()
        .unwrap();
    let empty = VariantSchema::builder("empty").build().unwrap();

    for merge in [false, true] {
        let mut selection = Selection::new()
            .set("size", "lg")
            .class("px-8 hover:bg-red-500 p-1");
        if merge {
            selection = selection.merge();
        }
        let first = Resolver::new(&store).resolve(&schema, &selection).unwrap();

        let mut replay = Selection::new().class(&first.class_string());
        if merge {
            replay = replay.merge();
        }
        let second = Resolver::new(&store).resolve(&empty, &replay).unwrap();

        assert_eq!(
            first.property_map(&TailwindClassifier),
            second.property_map(&TailwindClassifier),
            "merge = {merge}"
        );
    }
}

#[test]
fn test_invalid_value() {
    let store = TokenStore::builtin();
    let err = Resolver::new(&store)
        .resolve(&button(), &Selection::new().set("size", "xxl"))
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidVariantValue {
            axis: "size".into(),
            value: "xxl".into()
        }
    );
    assert_eq!(err.to_string(), "invalid value 'xxl' for variant axis 'size'");
}

#[test]
fn test_undeclared_axis_is_ignored() {
    let store = TokenStore::builtin();
    let schema = button();
    assert_eq!(
        classes(&store, &schema, &Selection::new().set("tone", "loud")),
        classes(&store, &schema, &Selection::new())
    );
}

#[test]
fn test_unknown_token() {
    let store = TokenStore::builtin();
    let schema = VariantSchema::builder("label")
        .base("text-[{colors.figma.text.loud}]")
        .build()
        .unwrap();
    assert_eq!(
        Resolver::new(&store)
            .resolve(&schema, &Selection::new())
            .unwrap_err(),
        ResolveError::UnknownToken(TokenError::UnknownToken {
            group: "colors".into(),
            name: "figma.text.loud".into()
        })
    );
}

#[test]
fn test_responsive_selection() {
    let store = TokenStore::builtin();
    let schema = button();
    let selection = Selection::new().set("size", Responsive::new().sm("sm").lg("lg"));

    let narrow = Resolver::new(&store)
        .with_classification(at(Breakpoint::Md))
        .resolve(&schema, &selection)
        .unwrap();
    assert!(narrow.contains("h-8"));

    let wide = Resolver::new(&store)
        .with_classification(at(Breakpoint::Xxl))
        .resolve(&schema, &selection)
        .unwrap();
    assert!(wide.contains("h-12"));

    let resolver = Resolver::new(&store).with_classification(at(Breakpoint::Lg));
    let effective = resolver.effective_values(&schema, &selection).unwrap();
    assert_eq!(effective.get("size").map(String::as_str), Some("lg"));
    assert_eq!(effective.get("variant").map(String::as_str), Some("primary"));
}

#[test]
fn test_empty_responsive_selection() {
    let store = TokenStore::builtin();
    let selection = Selection::new().set("size", Responsive::<&str>::new());
    assert_eq!(
        Resolver::new(&store)
            .resolve(&button(), &selection)
            .unwrap_err(),
        ResolveError::NoApplicableValue {
            axis: "size".into()
        }
    );
}

#[test]
fn test_exact_duplicates_removed() {
    let store = TokenStore::builtin();
    let schema = VariantSchema::builder("stack")
        .base("flex flex-col gap-2")
        .variant("align", "center", "flex items-center")
        .default_variant("align", "center")
        .build()
        .unwrap();
    assert_eq!(
        classes(&store, &schema, &Selection::new().class("gap-2")),
        vec!["flex", "flex-col", "items-center", "gap-2"]
    );
}

#[test]
fn test_conflict_policy() {
    let store = TokenStore::builtin();
    let schema = |policy| {
        VariantSchema::builder("chip")
            .base("rounded-md px-2")
            .variant("shape", "pill", "rounded-full")
            .default_variant("shape", "pill")
            .policy(policy)
            .build()
            .unwrap()
    };
    assert_eq!(
        classes(&store, &schema(ConflictPolicy::Keep), &Selection::new()),
        vec!["rounded-md", "px-2", "rounded-full"]
    );
    assert_eq!(
        classes(&store, &schema(ConflictPolicy::Collapse), &Selection::new()),
        vec!["px-2", "rounded-full"]
    );
}

#[test]
fn test_schema_from_toml() {
    let schema = VariantSchema::from_toml_str(
        r#"
        name = "badge"
        base = "inline-flex items-center"

        [variants.tone]
        neutral = "bg-neutral-800 text-neutral-100"
        accent = ["bg-[{colors.figma.accent.primary}]", "text-neutral-900"]

        [flags]
        pill = "rounded-full"

        [[compound]]
        when = { tone = "accent", pill = true }
        class = "shadow-md"

        [defaults]
        tone = "neutral"
        "#,
    )
    .unwrap();
    assert_eq!(schema.name(), "badge");
    assert!(schema.is_flag("pill"));

    let store = TokenStore::builtin();
    assert_eq!(
        classes(
            &store,
            &schema,
            &Selection::new().set("tone", "accent").flag("pill", true)
        ),
        vec![
            "inline-flex",
            "items-center",
            "bg-[#E9EBDF]",
            "text-neutral-900",
            "rounded-full",
            "shadow-md",
        ]
    );
}

#[test]
fn test_cached_resolution_matches_uncached() {
    let store = TokenStore::builtin();
    let schema = button();
    let cache = CachedResolver::with_capacity(8);
    let resolver = Resolver::new(&store);
    let selection = Selection::new().set("variant", "accent").class("px-2");

    let miss = cache.resolve(&resolver, &schema, &selection).unwrap();
    let hit = cache.resolve(&resolver, &schema, &selection).unwrap();
    assert_eq!(miss, hit);
    assert_eq!(miss, resolver.resolve(&schema, &selection).unwrap());

    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));

    cache.clear();
    assert_eq!(cache.stats().entries, 0);
}

#[test]
fn test_cache_keys_on_effective_values() {
    let store = TokenStore::builtin();
    let schema = button();
    let cache = CachedResolver::default();
    let resolver = Resolver::new(&store);

    // Explicit default and omitted axis derive the same values
    cache.resolve(&resolver, &schema, &Selection::new()).unwrap();
    cache
        .resolve(&resolver, &schema, &Selection::new().set("size", "md"))
        .unwrap();
    assert_eq!(cache.stats().hits, 1);

    // A responsive selection is derived before the lookup
    let responsive = Selection::new().set("size", Responsive::new().sm("sm").lg("lg"));
    let narrow = cache
        .resolve(
            &resolver.with_classification(at(Breakpoint::Sm)),
            &schema,
            &responsive,
        )
        .unwrap();
    let wide = cache
        .resolve(
            &resolver.with_classification(at(Breakpoint::Xl)),
            &schema,
            &responsive,
        )
        .unwrap();
    assert!(narrow.contains("h-8"));
    assert!(wide.contains("h-12"));
}

#[test]
fn test_cache_separates_token_stores() {
    let schema = button();
    let cache = CachedResolver::default();
    let selection = Selection::new().set("variant", "accent");

    let builtin = TokenStore::builtin();
    let custom = TokenStore::from_toml_str(
        r##"
        [colors.figma.accent]
        primary = "#FF0000"
        "##,
    )
    .unwrap();

    let a = cache
        .resolve(&Resolver::new(&builtin), &schema, &selection)
        .unwrap();
    let b = cache
        .resolve(&Resolver::new(&custom), &schema, &selection)
        .unwrap();
    assert!(a.contains("bg-[#E9EBDF]"));
    assert!(b.contains("bg-[#FF0000]"));
    assert_eq!(cache.stats().misses, 2);
}

/// Every distinct directive text is its own property
struct Verbatim;

impl PropertyClassifier for Verbatim {
    fn classify(&self, directive: &str) -> PropertyId {
        PropertyId::new(std::iter::empty::<String>(), false, directive.to_string())
    }
}

#[test]
fn test_cache_separates_classifiers() {
    let store = TokenStore::builtin();
    let schema = button();
    let cache = CachedResolver::default();
    let selection = Selection::new().class("px-8");

    let tailwind = Resolver::new(&store);
    let verbatim = Resolver::new(&store).with_classifier(&Verbatim);

    let a = cache.resolve(&tailwind, &schema, &selection).unwrap();
    let b = cache.resolve(&verbatim, &schema, &selection).unwrap();
    assert!(!a.contains("px-5"));
    assert!(b.contains("px-5") && b.contains("px-8"));
    assert_eq!(b, verbatim.resolve(&schema, &selection).unwrap());
    assert_eq!(cache.stats().misses, 2);
}

#[test]
fn test_cache_does_not_store_errors() {
    let store = TokenStore::builtin();
    let cache = CachedResolver::default();
    let bad = Selection::new().set("size", "huge");
    assert!(cache
        .resolve(&Resolver::new(&store), &button(), &bad)
        .is_err());
    assert_eq!(cache.stats().entries, 0);
}
