//! Placeholder substitution engine.
//!
//! Renders a template body by substituting `{name}` placeholders with values
//! from a [`Definitions`] map. The bodies joist renders are C++ and CMake
//! sources full of literal braces, so substitution is gated on the set of
//! placeholder names a template declares:
//!
//! - `{name}` where `name` is declared substitutes the defined value, and is
//!   an error if no value was supplied.
//! - Any other brace content (`{}`, `{ return x; }`, `{CMAKE_SOURCE_DIR}`)
//!   passes through untouched.
//!
//! The engine is fail-safe: a declared placeholder without a value causes an
//! error rather than silent substitution with an empty string. Rendering is
//! pure, so identical inputs always yield byte-identical output.

use super::definitions::Definitions;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// Matches an identifier-shaped `{name}` occurrence.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A declared placeholder appears in the body but no value was supplied.
    UndefinedPlaceholder {
        /// The name of the placeholder.
        name: String,
        /// Byte offset of the placeholder in the template body.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedPlaceholder { name, position } => {
                write!(f, "undefined placeholder '{}' at position {}", name, position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template body by substituting declared placeholders.
///
/// # Arguments
///
/// * `body` - The template body containing `{name}` placeholders
/// * `declared` - Placeholder names this template substitutes
/// * `definitions` - Values for the declared placeholders
///
/// Returns the rendered string, or [`TemplateError::UndefinedPlaceholder`]
/// if a declared placeholder occurs in the body without a supplied value.
pub fn render(
    body: &str,
    declared: &[&str],
    definitions: &Definitions,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(body.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(body) {
        let whole = caps.get(0).expect("match always has group 0");
        let name = caps.get(1).expect("capture group 1").as_str();

        if !declared.contains(&name) {
            // Literal brace content (C++ block, CMake variable, ...).
            continue;
        }

        result.push_str(&body[last..whole.start()]);

        match definitions.get(name) {
            Some(value) => result.push_str(value),
            None => {
                return Err(TemplateError::UndefinedPlaceholder {
                    name: name.to_string(),
                    position: whole.start(),
                });
            }
        }

        last = whole.end();
    }

    result.push_str(&body[last..]);
    Ok(result)
}

/// Collect every identifier-shaped `{name}` occurrence in a body.
///
/// Used by tests and the `templates` listing to cross-check declared
/// placeholder sets against what a body actually contains.
pub fn scan_placeholders(body: &str) -> BTreeSet<String> {
    PLACEHOLDER_RE
        .captures_iter(body)
        .map(|caps| caps.get(1).expect("capture group 1").as_str().to_string())
        .collect()
}
