//! Every class the components render must have a rule in the shared theme
//! or the navbar stylesheet.
//!
//! Literal `class: "..."` attributes are scanned from `src/components` and
//! `src/views`; classes built at runtime (difficulty badges, platform
//! presets, code-block tones) are listed from the enums that produce them.
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Difficulty, ProjectCategory};
use crate::core::platform::PlatformPreset;
use crate::THEME_CSS_INLINE;

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// `.name` followed by something that cannot continue a class name.
fn has_selector(css: &str, class: &str) -> bool {
    let needle = format!(".{class}");
    css.match_indices(&needle).any(|(at, _)| {
        css[at + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_class_char(c))
    })
}

fn is_styled(class: &str) -> bool {
    has_selector(THEME_CSS_INLINE, class) || has_selector(NAVBAR_CSS, class)
}

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

fn rendered_classes() -> BTreeSet<String> {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    collect_rs_files(&src.join("components"), &mut files);
    collect_rs_files(&src.join("views"), &mut files);

    let needle = "class: \"";
    let mut classes = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for (at, _) in content.match_indices(needle) {
            let rest = &content[at + needle.len()..];
            let Some(end) = rest.find('"') else {
                continue;
            };
            let literal = &rest[..end];
            // Interpolated attributes are covered by `runtime_classes_are_styled`.
            if literal.contains('{') {
                continue;
            }
            classes.extend(literal.split_whitespace().map(str::to_string));
        }
    }
    classes
}

#[test]
fn scanner_finds_component_markup() {
    let classes = rendered_classes();
    for expected in ["lesson-card", "flexbox__box", "translator__panes", "playground__textarea"] {
        assert!(classes.contains(expected), "scanner missed `{expected}`");
    }
}

#[test]
fn helper_built_classes_are_not_scanned() {
    // `template_class()` builds this one; the runtime list has to carry it.
    assert!(!rendered_classes().contains("template-card"));
}

#[test]
fn every_rendered_class_is_styled() {
    let missing: Vec<_> = rendered_classes()
        .into_iter()
        .filter(|class| !is_styled(class))
        .collect();
    assert!(
        missing.is_empty(),
        "classes rendered without a stylesheet rule:\n{}",
        missing.join("\n")
    );
}

#[test]
fn runtime_classes_are_styled() {
    let mut classes: Vec<String> = Vec::new();
    for difficulty in Difficulty::ALL {
        classes.extend(difficulty.badge_class().split_whitespace().map(str::to_string));
    }
    for category in ProjectCategory::ALL {
        classes.extend(category.badge_class().split_whitespace().map(str::to_string));
    }
    for preset in PlatformPreset::ALL {
        classes.push(format!("flexbox__preset--{preset}"));
    }
    classes.extend(
        [
            "flexbox__preset",
            "flexbox__preset--active",
            "chip",
            "chip--active",
            "template-card",
            "template-card--active",
            "code-block",
            "code-block--web",
            "code-block--native",
            "code-block--scroll",
        ]
        .map(str::to_string),
    );

    let missing: Vec<_> = classes.iter().filter(|class| !is_styled(class)).collect();
    assert!(missing.is_empty(), "runtime classes without a rule: {missing:?}");
}

#[test]
fn theme_defines_lesson_accent_variable() {
    // Lesson pages override this per lesson through an inline style.
    assert!(THEME_CSS_INLINE.contains("--lesson-accent:"));
    assert!(THEME_CSS_INLINE.contains("@media (max-width: 720px)"));
}

#[test]
fn selector_match_respects_class_boundaries() {
    let css = ".chip--active { color: red; }";
    assert!(has_selector(css, "chip--active"));
    assert!(!has_selector(css, "chip"));
}
