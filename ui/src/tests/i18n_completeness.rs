use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::FALLBACK_LANGUAGE;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "prestamos_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Any line shaped `<identifier> =` counts;
/// comments, terms (`-` prefix), attributes and blank lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal `t!("...")` key used under `src_root`.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for chunk in content.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fallback_keys() -> BTreeSet<String> {
    let path = crate_root()
        .join(I18N_DIR)
        .join(FALLBACK_LANGUAGE)
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&path).expect("Failed to read fallback FTL file");
    parse_ftl_keys(&content)
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = fallback_keys();
    assert!(!fallback.is_empty(), "No message keys parsed from fallback FTL");

    let referenced = extract_translation_keys_from_source(&crate_root().join("src"));
    assert!(referenced.contains("connect-wallet"));

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in sources: {}", unused.join(", "));
    }
}

#[test]
fn every_locale_covers_fallback() {
    let fallback = fallback_keys();
    let i18n_root = crate_root().join(I18N_DIR);

    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == FALLBACK_LANGUAGE));

    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale {locale:?} missing expected file {path:?}"));
        let keys = parse_ftl_keys(&content);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    assert!(
        per_locale_missing.is_empty(),
        "Locales with missing translations relative to fallback: {per_locale_missing:?}"
    );
}
