#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  storefront sections) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (product cards, filter tabs, section layouts, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".container {",
    ".visually-hidden",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--glass",
    ".button--gold",
    ".link-button",
    ".brand__accent",
    // Hero
    ".hero__backdrop",
    ".hero__overlay",
    ".hero__title-highlight",
    // Features
    ".feature-card",
    ".feature-card__icon-wrap",
    // Product gallery
    ".products__filters",
    ".filter-tab",
    ".filter-tab--active",
    ".products__grid",
    ".product-card",
    ".product-card__category",
    ".product-card__price",
    ".product-card__add",
    // About
    ".about__stat",
    ".about__points",
    // Newsletter & footer
    ".cta__form",
    ".cta__input",
    ".footer__grid",
    ".footer__contact-item",
    ".footer__bottom",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
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
fn filter_tab_states_are_paired() {
    // Active tab styling only works if the base tab rule exists too.
    let has_base = THEME_CSS.contains(".filter-tab {");
    let has_active = THEME_CSS.contains(".filter-tab--active");
    assert!(
        has_base && has_active,
        "Filter tab selectors missing (base: {has_base}, active: {has_active})"
    );
}
