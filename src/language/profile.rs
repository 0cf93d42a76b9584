use regex::Regex;

use crate::config::LanguageConfig;
use crate::error::{CensusError, Result};

/// A begin/end delimiter pair for comments that may span multiple lines.
///
/// The begin pattern only matches at line start (leading whitespace
/// tolerated); the end pattern matches anywhere. Begin and end may be
/// identical for symmetric delimiters like triple quotes.
#[derive(Debug, Clone)]
pub struct BlockPattern {
    begin: Regex,
    end: Regex,
}

impl BlockPattern {
    /// Build a block pattern from two regex fragments.
    ///
    /// # Errors
    /// Returns an error if either fragment is empty or fails to compile.
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        if begin.is_empty() || end.is_empty() {
            return Err(CensusError::Config(
                "block comment delimiters must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            begin: compile_anchored(begin)?,
            end: compile(end)?,
        })
    }

    /// Match the begin delimiter at the start of the line.
    /// Returns the byte offset just past the match.
    #[must_use]
    pub fn begin_match(&self, line: &str) -> Option<usize> {
        self.begin.find(line).map(|m| m.end())
    }

    /// Match the end delimiter anywhere in `text`.
    #[must_use]
    pub fn end_match(&self, text: &str) -> bool {
        self.end.is_match(text)
    }
}

/// Immutable description of one language's comment syntax.
///
/// Constructed once before scanning begins and never mutated during a scan;
/// all per-file state lives in the scanner, not here.
#[derive(Debug, Clone)]
pub struct PatternProfile {
    name: String,
    extensions: Vec<String>,
    single_line: Vec<Regex>,
    blocks: Vec<BlockPattern>,
}

impl PatternProfile {
    /// Build a profile from regex fragments.
    ///
    /// # Errors
    /// Returns a configuration error if any fragment fails to compile.
    pub fn new(
        name: &str,
        extensions: Vec<&str>,
        single_line: Vec<&str>,
        blocks: Vec<(&str, &str)>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            single_line: single_line
                .into_iter()
                .map(compile_anchored)
                .collect::<Result<_>>()?,
            blocks: blocks
                .into_iter()
                .map(|(begin, end)| BlockPattern::new(begin, end))
                .collect::<Result<_>>()?,
        })
    }

    /// Build a profile from a user-defined language entry.
    ///
    /// # Errors
    /// Returns a configuration error if any pattern fails to compile.
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        Self::new(
            &config.name,
            config.extensions.iter().map(String::as_str).collect(),
            config.single_line.iter().map(String::as_str).collect(),
            config
                .block
                .iter()
                .map(|b| (b.begin.as_str(), b.end.as_str()))
                .collect(),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Block-delimiter pairs in declared order. Order matters: the first
    /// pattern to claim a line wins.
    #[must_use]
    pub fn blocks(&self) -> &[BlockPattern] {
        &self.blocks
    }

    /// Whether any single-line comment marker matches at the start of `line`.
    #[must_use]
    pub fn matches_single_line(&self, line: &str) -> bool {
        self.single_line.iter().any(|re| re.is_match(line))
    }
}

/// Compile a marker fragment anchored at line start, tolerating indentation.
fn compile_anchored(source: &str) -> Result<Regex> {
    compile(&format!(r"^\s*(?:{source})"))
}

fn compile(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| CensusError::InvalidPattern {
        pattern: source.to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
