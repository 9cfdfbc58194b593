#![cfg(test)]
//! Custom-property contract of the theme the desktop shell inlines.
//!
//! The desktop build embeds `ui/assets/theme/main.css` with `include_str!`,
//! so a broken `var()` reference or a dark palette that misses a surface
//! token only shows up at runtime. These checks catch it at build time.

use std::collections::BTreeSet;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Surface tokens that must flip in dark mode. Brand colors stay the same.
const NEUTRAL_TOKENS: &[&str] = &[
    "--color-bg",
    "--color-surface",
    "--color-muted",
    "--color-text",
    "--color-text-muted",
    "--color-border",
];

/// Body of the first rule whose selector is exactly `selector`.
fn block<'a>(css: &'a str, selector: &str) -> &'a str {
    let open = format!("{selector} {{");
    css.split(open.as_str())
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_else(|| panic!("theme has no `{selector}` rule"))
}

/// Custom properties declared in a rule body.
fn declared(body: &str) -> BTreeSet<&str> {
    body.split(';')
        .filter_map(|decl| decl.trim().split_once(':'))
        .map(|(name, _)| name.trim())
        .filter(|name| name.starts_with("--"))
        .collect()
}

/// Custom properties referenced through `var(...)`.
fn referenced(css: &str) -> BTreeSet<&str> {
    css.split("var(")
        .skip(1)
        .map(str::trim_start)
        .filter_map(|rest| {
            rest.split(|c: char| c == ')' || c == ',' || c.is_whitespace())
                .next()
        })
        .collect()
}

#[test]
fn every_var_reference_is_declared_in_root() {
    let root = declared(block(THEME_CSS, ":root"));
    let mut undeclared: Vec<_> = referenced(THEME_CSS)
        .union(&referenced(NAVBAR_CSS))
        .filter(|name| !root.contains(*name))
        .copied()
        .collect();
    undeclared.sort();
    assert!(
        undeclared.is_empty(),
        "var() references without a :root declaration: {undeclared:?}"
    );
}

#[test]
fn dark_palette_overrides_only_known_tokens() {
    let root = declared(block(THEME_CSS, ":root"));
    let dark = declared(block(THEME_CSS, ".dark"));
    let unknown: Vec<_> = dark.difference(&root).collect();
    assert!(unknown.is_empty(), "dark palette sets undeclared tokens: {unknown:?}");

    for token in NEUTRAL_TOKENS {
        assert!(dark.contains(token), "dark palette does not override {token}");
    }
}

#[test]
fn stat_figures_keep_their_shape_in_arabic() {
    // Counting digits must not jitter, and "500+" must not reorder in RTL.
    assert!(block(THEME_CSS, ".stat__value").contains("font-variant-numeric: tabular-nums"));
    assert!(block(THEME_CSS, "[dir=\"rtl\"] .stat__value").contains("unicode-bidi: isolate"));
}
