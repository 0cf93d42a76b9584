//! Shared profile constructors for classification tests.

use crate::language::{BlockPattern, PatternProfile};

pub(super) fn rust_profile() -> PatternProfile {
    PatternProfile::new("Rust", vec!["rs"], vec!["//"], vec![(r"/\*", r"\*/")]).unwrap()
}

pub(super) fn python_profile() -> PatternProfile {
    PatternProfile::new(
        "Python",
        vec!["py"],
        vec!["#"],
        vec![("'''", "'''"), ("\"\"\"", "\"\"\"")],
    )
    .unwrap()
}

pub(super) fn ruby_profile() -> PatternProfile {
    PatternProfile::new("Ruby", vec!["rb"], vec!["#"], vec![("=begin", "=end")]).unwrap()
}

pub(super) fn c_block() -> BlockPattern {
    BlockPattern::new(r"/\*", r"\*/").unwrap()
}

pub(super) fn triple_quote_block() -> BlockPattern {
    BlockPattern::new("'''", "'''").unwrap()
}
