use std::collections::HashMap;

use crate::config::Config;
use crate::error::Result;

use super::PatternProfile;

/// Builtin language table: name, extensions, single-line markers, block
/// delimiter pairs. Markers are regex fragments; anchoring is applied when
/// profiles are compiled.
const BUILTIN_LANGUAGES: &[(&str, &[&str], &[&str], &[(&str, &str)])] = &[
    ("Rust", &["rs"], &["//"], &[(r"/\*", r"\*/")]),
    ("C", &["c", "h"], &["//"], &[(r"/\*", r"\*/")]),
    (
        "C++",
        &["cpp", "hpp", "cc", "cxx", "hxx"],
        &["//"],
        &[(r"/\*", r"\*/")],
    ),
    ("Go", &["go"], &["//"], &[(r"/\*", r"\*/")]),
    ("Java", &["java"], &["//"], &[(r"/\*", r"\*/")]),
    (
        "JavaScript",
        &["js", "mjs", "cjs"],
        &["//"],
        &[(r"/\*", r"\*/")],
    ),
    (
        "TypeScript",
        &["ts", "mts", "cts", "tsx"],
        &["//"],
        &[(r"/\*", r"\*/")],
    ),
    (
        "Python",
        &["py", "pyi"],
        &["#"],
        &[("'''", "'''"), ("\"\"\"", "\"\"\"")],
    ),
    ("Ruby", &["rb"], &["#"], &[("=begin", "=end")]),
    ("Shell", &["sh", "bash", "zsh"], &["#"], &[]),
    ("Lua", &["lua"], &["--"], &[(r"--\[\[", r"\]\]")]),
    ("SQL", &["sql"], &["--"], &[(r"/\*", r"\*/")]),
    ("Haskell", &["hs"], &["--"], &[(r"\{-", r"-\}")]),
    ("HTML", &["html", "htm"], &[], &[("<!--", "-->")]),
    ("CSS", &["css"], &[], &[(r"/\*", r"\*/")]),
    ("YAML", &["yaml", "yml"], &["#"], &[]),
    ("TOML", &["toml"], &["#"], &[]),
];

/// Maps file extensions to the comment-syntax profile used to scan them.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: Vec<PatternProfile>,
    extension_map: HashMap<String, usize>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the builtin language table.
    ///
    /// # Errors
    /// Returns a configuration error if a builtin pattern fails to compile.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for &(name, extensions, single_line, blocks) in BUILTIN_LANGUAGES {
            registry.register(PatternProfile::new(
                name,
                extensions.to_vec(),
                single_line.to_vec(),
                blocks.to_vec(),
            )?);
        }
        Ok(registry)
    }

    /// Builtin table extended with user-defined languages from the config
    /// file. User entries shadow builtin ones on extension collision.
    ///
    /// # Errors
    /// Returns a configuration error if any pattern fails to compile.
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut registry = Self::builtin()?;
        for language in &config.language {
            registry.register(PatternProfile::from_config(language)?);
        }
        Ok(registry)
    }

    pub fn register(&mut self, profile: PatternProfile) {
        let idx = self.profiles.len();
        for ext in profile.extensions() {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.profiles.push(profile);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&PatternProfile> {
        self.extension_map.get(ext).map(|&idx| &self.profiles[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[PatternProfile] {
        &self.profiles
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
