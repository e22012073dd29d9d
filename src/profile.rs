//! Syntax profiles: the bundle of category sets defining a language's
//! lexical rules, loaded from a declarative TOML description.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::charset::CategorySet;
use crate::error::LoadError;

/// Lexical rules for one language.
///
/// Block comments open with a lead character followed by a trail character
/// (`/` then `*`) and close with the mirror image (`*` then `/`); the
/// profile stores the two single-character sets rather than delimiter
/// strings. Line comments are `line_comment_len` consecutive characters
/// drawn from `line_comment_chars`, which covers one-character markers
/// like `#` as well as two-character markers like `//`.
#[derive(Debug, Clone)]
pub struct SyntaxProfile {
    pub keywords: CategorySet,
    pub line_comment_chars: CategorySet,
    pub line_comment_len: usize,
    pub block_lead: CategorySet,
    pub block_trail: CategorySet,
    pub string_delims: CategorySet,
    pub functions: CategorySet,
    pub symbols: CategorySet,
    pub operators: CategorySet,
}

/// On-disk profile layout. Every list is optional; an absent category is
/// simply empty.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    line_comment: Vec<String>,
    #[serde(default = "default_line_comment_len")]
    line_comment_len: usize,
    #[serde(default)]
    block_comment_lead: Vec<String>,
    #[serde(default)]
    block_comment_trail: Vec<String>,
    #[serde(default)]
    strings: Vec<String>,
    #[serde(default)]
    functions: Vec<String>,
    #[serde(default)]
    symbols: Vec<String>,
    #[serde(default)]
    operators: Vec<String>,
}

fn default_line_comment_len() -> usize {
    1
}

/// The scanner tests these sets one position at a time, so their entries
/// must be single characters.
fn require_single_chars(name: &str, tokens: &[String], source_ref: &str) -> Result<(), LoadError> {
    for token in tokens {
        if token.chars().count() != 1 {
            return Err(LoadError::new(
                source_ref,
                format!("{name} entries must be single characters, got {token:?}"),
            ));
        }
    }
    Ok(())
}

impl SyntaxProfile {
    /// Load a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<SyntaxProfile, LoadError> {
        let path = path.as_ref();
        let source_ref = path.display().to_string();
        let text =
            fs::read_to_string(path).map_err(|e| LoadError::new(source_ref.as_str(), e.to_string()))?;
        SyntaxProfile::from_toml_str(&text, &source_ref)
    }

    /// Parse a profile from TOML text. `source_ref` identifies the source
    /// in any resulting error.
    pub fn from_toml_str(src: &str, source_ref: &str) -> Result<SyntaxProfile, LoadError> {
        let raw: RawProfile =
            toml::from_str(src).map_err(|e| LoadError::new(source_ref, e.to_string()))?;

        if raw.line_comment_len == 0 {
            return Err(LoadError::new(source_ref, "line_comment_len must be at least 1"));
        }
        require_single_chars("line_comment", &raw.line_comment, source_ref)?;
        require_single_chars("block_comment_lead", &raw.block_comment_lead, source_ref)?;
        require_single_chars("block_comment_trail", &raw.block_comment_trail, source_ref)?;
        require_single_chars("strings", &raw.strings, source_ref)?;

        Ok(SyntaxProfile {
            keywords: CategorySet::build(raw.keywords),
            line_comment_chars: CategorySet::build(raw.line_comment),
            line_comment_len: raw.line_comment_len,
            block_lead: CategorySet::build(raw.block_comment_lead),
            block_trail: CategorySet::build(raw.block_comment_trail),
            string_delims: CategorySet::build(raw.strings),
            functions: CategorySet::build(raw.functions),
            symbols: CategorySet::build(raw.symbols),
            operators: CategorySet::build(raw.operators),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_LIKE: &str = r#"
        keywords = ["int", "return"]
        line_comment = ["/"]
        line_comment_len = 2
        block_comment_lead = ["/"]
        block_comment_trail = ["*"]
        strings = ["\""]
        functions = ["printf"]
        symbols = ["{", "}", ";"]
        operators = ["+", "-"]
    "#;

    #[test]
    fn parses_all_categories() {
        let p = SyntaxProfile::from_toml_str(C_LIKE, "test").unwrap();
        assert!(p.keywords.contains("return"));
        assert_eq!(p.line_comment_len, 2);
        assert!(p.block_lead.contains_char('/'));
        assert!(p.block_trail.contains_char('*'));
        assert!(p.string_delims.contains_char('"'));
        assert!(p.functions.contains("printf"));
        assert!(p.symbols.contains_char('{'));
        assert!(p.operators.contains_char('+'));
    }

    #[test]
    fn absent_categories_are_empty() {
        let p = SyntaxProfile::from_toml_str("keywords = [\"if\"]", "test").unwrap();
        assert!(p.operators.is_empty());
        assert!(p.string_delims.is_empty());
        assert_eq!(p.line_comment_len, 1);
    }

    #[test]
    fn zero_marker_length_is_rejected() {
        let err = SyntaxProfile::from_toml_str("line_comment_len = 0", "bad.toml").unwrap_err();
        assert_eq!(err.source_ref, "bad.toml");
        assert!(err.reason.contains("line_comment_len"));
    }

    #[test]
    fn multi_char_delimiter_entry_is_rejected() {
        let err = SyntaxProfile::from_toml_str("strings = [\"'''\"]", "bad.toml").unwrap_err();
        assert!(err.reason.contains("single characters"));
    }

    #[test]
    fn malformed_toml_reports_source() {
        let err = SyntaxProfile::from_toml_str("keywords = [", "broken.toml").unwrap_err();
        assert_eq!(err.source_ref, "broken.toml");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SyntaxProfile::from_toml_str("colours = [\"red\"]", "test").is_err());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = SyntaxProfile::load("/nonexistent/profile.toml").unwrap_err();
        assert!(err.source_ref.contains("profile.toml"));
    }
}
