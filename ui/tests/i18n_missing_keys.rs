//! Translation hygiene beyond key parity (which `src/tests/i18n_completeness.rs`
//! covers): no locale may carry keys the en-US fallback lacks, define a key
//! twice, or leave a message empty.
//!
//! A new locale goes in `LOCALES` below as well as under `ui/i18n/`.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/academy-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/academy-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/academy-ui.ftl")),
];

/// One `key = value` message per line; comments and blank lines skipped.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| {
            !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
        .collect()
}

fn keys(src: &str) -> BTreeSet<&str> {
    messages(src).into_iter().map(|(key, _)| key).collect()
}

fn all_files() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    std::iter::once(&FALLBACK).chain(LOCALES.iter())
}

#[test]
fn locales_have_no_keys_missing_from_fallback() {
    let fallback = keys(FALLBACK.1);
    let orphans: BTreeMap<&str, Vec<&str>> = LOCALES
        .iter()
        .map(|(locale, src)| {
            let extra = keys(src).difference(&fallback).copied().collect::<Vec<_>>();
            (*locale, extra)
        })
        .filter(|(_, extra)| !extra.is_empty())
        .collect();

    assert!(
        orphans.is_empty(),
        "keys translated but never defined in en-US (dead strings): {orphans:?}"
    );
}

#[test]
fn no_file_defines_a_key_twice() {
    for (locale, src) in all_files() {
        let mut seen = BTreeSet::new();
        let dups: Vec<_> = messages(src)
            .into_iter()
            .filter(|(key, _)| !seen.insert(*key))
            .map(|(key, _)| key)
            .collect();
        assert!(dups.is_empty(), "{locale} defines {dups:?} more than once");
    }
}

#[test]
fn no_message_is_empty() {
    for (locale, src) in all_files() {
        let empty: Vec<_> = messages(src)
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key)
            .collect();
        assert!(empty.is_empty(), "{locale} has empty messages: {empty:?}");
    }
}

#[test]
fn messages_avoid_placeables() {
    // The loader would wrap placeable arguments in bidi isolation marks.
    for (locale, src) in all_files() {
        let with_braces: Vec<_> = messages(src)
            .into_iter()
            .filter(|(_, value)| value.contains('{') || value.contains('}'))
            .map(|(key, _)| key)
            .collect();
        assert!(
            with_braces.is_empty(),
            "{locale} uses placeables in {with_braces:?}"
        );
    }
}

#[test]
fn helper_parses_keys_and_skips_comments() {
    let parsed = messages("# note\n\n## Section\nnav-home = Home\n");
    assert_eq!(parsed, vec![("nav-home", "Home")]);
}
