#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the selectors the shared components render (header, counters,
  carousel, accordion, booking form) stay present in the unified theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, preventing a silent
  styling regression in packaged (embedded) desktop builds.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".site {",
    ".page {",
    ".container {",
    // Buttons & cards
    ".button {",
    ".button--primary",
    ".button--secondary",
    ".card {",
    ".card__title",
    // Home
    ".hero__video",
    ".stats-grid",
    ".stat__value",
    ".testimonial__controls",
    ".dot--active",
    // Content pages
    ".gallery-grid",
    ".accordion__item--open",
    ".form__control--invalid",
    ".form__notice--error",
    ".contact-map__frame",
    // Footer
    ".footer__grid",
    ".footer__rights",
    // Responsive block
    "@media (max-width: 960px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn right_to_left_rules_present() {
    assert!(THEME_CSS.contains("[dir=\"rtl\"]"));
    assert!(NAVBAR_CSS.contains("[dir=\"rtl\"]"));
    assert!(NAVBAR_CSS.contains(".is-active"));
}

#[test]
fn header_has_a_scrolled_state() {
    assert!(NAVBAR_CSS.contains(".navbar--scrolled {"));
}
