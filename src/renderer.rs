//! Placeholder substitution for template files.
//!
//! Templates mark substitution points with `__key__` tokens. All keys of a
//! data set are recognized in a single left-to-right pass, so a substituted
//! value is never scanned again: a value that itself contains another key's
//! token is emitted verbatim instead of being expanded a second time.

use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string, returning the substituted text.
    fn render(&self, template: &str) -> String;
}

/// Renderer replacing `__key__` tokens with values from a fixed data set.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    /// Alternation of all keys, longest first; `None` for an empty data set
    token_pattern: Option<Regex>,
    values: IndexMap<String, String>,
}

impl PlaceholderRenderer {
    /// Creates a renderer for the given key→value mapping.
    pub fn new(data: &IndexMap<String, String>) -> Self {
        let mut keys: Vec<&str> =
            data.keys().map(String::as_str).filter(|key| !key.is_empty()).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()));

        let token_pattern = (!keys.is_empty()).then(|| {
            let alternation: Vec<String> = keys.iter().map(|key| regex::escape(key)).collect();
            Regex::new(&format!("__({})__", alternation.join("|")))
                .expect("escaped placeholder keys form a valid pattern")
        });

        Self { token_pattern, values: data.clone() }
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str) -> String {
        match &self.token_pattern {
            Some(pattern) => pattern
                .replace_all(template, |caps: &Captures| self.values[&caps[1]].clone())
                .into_owned(),
            None => template.to_string(),
        }
    }
}

/// Replaces every `__key__` token in `content` with the matching value.
///
/// Tokens whose key is absent from `data` are left untouched.
pub fn substitute(content: &str, data: &IndexMap<String, String>) -> String {
    PlaceholderRenderer::new(data).render(content)
}
