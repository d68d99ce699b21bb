#![cfg(test)]
//! The desktop window inlines `ui::THEME_CSS_INLINE` instead of loading a
//! stylesheet from disk, so a truncated or relocated theme would only show up
//! at runtime. These checks move that failure to `cargo test`.

const EMBEDDED_CSS: &str = ui::THEME_CSS_INLINE;

const ON_DISK_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_matches_shared_theme_file() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS appears to be empty."
    );
    assert_eq!(EMBEDDED_CSS, ON_DISK_CSS);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--lesson-accent",
        ".lesson-card",
        "body {",
        ".button--primary",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_fallback_variables_are_declared() {
    // navbar.css reads these with fallbacks; the theme should still define them.
    for var in [
        "--color-border:",
        "--color-web:",
        "--color-text:",
        "--color-text-secondary:",
        "--color-text-muted:",
    ] {
        assert!(EMBEDDED_CSS.contains(var), "theme does not declare `{var}`");
    }
}
