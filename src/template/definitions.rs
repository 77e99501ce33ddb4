//! Substitution definitions and identifier validation.
//!
//! A [`Definitions`] map carries the values a render runs against. A fresh
//! map is seeded with `year` so copyright headers date themselves; everything
//! else is supplied by the caller.

use crate::error::{JoistError, Result};
use chrono::{Datelike, Local};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Placeholder name to value map for one render.
#[derive(Debug, Clone)]
pub struct Definitions {
    values: BTreeMap<String, String>,
}

impl Definitions {
    /// Create a definitions map seeded with the current `year`.
    pub fn new() -> Self {
        let mut values = BTreeMap::new();
        values.insert("year".to_string(), Local::now().year().to_string());
        Self { values }
    }

    /// Create an unseeded definitions map.
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set a definition, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Definitions::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a definition.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a definition exists.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Defined names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Default for Definitions {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a string is a valid identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_valid_identifier(s: &str) -> bool {
    IDENT_RE.is_match(s)
}

/// Validate that a value is identifier-shaped, naming the offending
/// parameter in the error message.
///
/// Project, application, and library names double as directory names,
/// C++ namespace parts, and include paths, so all of them must satisfy
/// this before any filesystem mutation happens.
pub fn validate_identifier(value: &str, what: &str) -> Result<()> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(JoistError::UserError(format!(
            "invalid {} '{}': must be an identifier ([A-Za-z_][A-Za-z0-9_]*)",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;

    #[test]
    fn new_seeds_year() {
        let defs = Definitions::new();
        let year = defs.get("year").expect("year is seeded");
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_has_no_seed() {
        let defs = Definitions::empty();
        assert!(!defs.contains("year"));
    }

    #[test]
    fn set_and_get() {
        let mut defs = Definitions::empty();
        defs.set("libname", "bar");
        assert_eq!(defs.get("libname"), Some("bar"));
        assert_eq!(defs.get("missing"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut defs = Definitions::empty();
        defs.set("namespace", "ns");
        defs.set("namespace", "foo");
        assert_eq!(defs.get("namespace"), Some("foo"));
    }

    #[test]
    fn with_builder_chains() {
        let defs = Definitions::empty()
            .with("namespace", "foo")
            .with("class", "BarTest");
        assert_eq!(defs.get("namespace"), Some("foo"));
        assert_eq!(defs.get("class"), Some("BarTest"));
    }

    #[test]
    fn names_are_sorted() {
        let defs = Definitions::empty().with("b", "2").with("a", "1");
        let names: Vec<&str> = defs.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn valid_identifiers() {
        for s in ["foo", "BarTest", "_private", "lib2", "snake_case"] {
            assert!(is_valid_identifier(s), "{} should be valid", s);
        }
    }

    #[test]
    fn invalid_identifiers() {
        for s in ["", "2lib", "my-lib", "my lib", "foo::bar", "lib.h"] {
            assert!(!is_valid_identifier(s), "{} should be invalid", s);
        }
    }

    #[test]
    fn validate_identifier_names_the_parameter() {
        let err = validate_identifier("my-lib", "library name").unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("library name"));
        assert!(err.to_string().contains("my-lib"));
    }
}
