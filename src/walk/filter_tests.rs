use std::path::Path;

use super::*;

#[test]
fn empty_extension_list_includes_everything() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();
    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(filter.should_include(Path::new("README.md")));
}

#[test]
fn extension_allowlist_filters() {
    let filter = GlobFilter::new(vec!["rs".to_string(), "go".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(filter.should_include(Path::new("pkg/mod.go")));
    assert!(!filter.should_include(Path::new("script.py")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn exclude_globs_drop_matches() {
    let filter = GlobFilter::new(vec![], &["target/**".to_string(), "*.min.js".to_string()])
        .unwrap();
    assert!(!filter.should_include(Path::new("target/debug/main.rs")));
    assert!(!filter.should_include(Path::new("bundle.min.js")));
    assert!(filter.should_include(Path::new("src/main.rs")));
}

#[test]
fn exclusion_beats_extension_match() {
    let filter = GlobFilter::new(vec!["rs".to_string()], &["**/generated/**".to_string()])
        .unwrap();
    assert!(!filter.should_include(Path::new("src/generated/schema.rs")));
    assert!(filter.should_include(Path::new("src/schema.rs")));
}

#[test]
fn invalid_glob_is_a_configuration_error() {
    let err = GlobFilter::new(vec![], &["a{b".to_string()]).unwrap_err();
    assert!(matches!(err, crate::CensusError::InvalidGlob { .. }));
}

#[test]
fn filter_is_debug_formattable() {
    // unwrap_err above relies on this; keep the derive pinned.
    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();
    let rendered = format!("{filter:?}");
    assert!(rendered.contains("GlobFilter"));
}
