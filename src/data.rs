//! Caller input and the resolved record that drives generation.

use indexmap::IndexMap;

use crate::abbr::derive_abbreviation;
use crate::error::{Error, Result};

/// Raw caller input, as collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub author: Option<String>,
    /// Description words, joined with single spaces
    pub description: Vec<String>,
    pub keywords: Vec<String>,
    pub repository: Option<String>,
    pub namespace: Option<String>,
    /// Whether to run the dependency installer after generation
    pub install: bool,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ProjectInput {
    /// Returns the package name or [`Error::MissingField`].
    pub fn require_name(&self) -> Result<&str> {
        non_empty(self.name.as_deref()).ok_or(Error::MissingField { field: "name" })
    }

    /// Returns the package author or [`Error::MissingField`].
    pub fn require_author(&self) -> Result<&str> {
        non_empty(self.author.as_deref()).ok_or(Error::MissingField { field: "author" })
    }
}

/// Fully resolved values substituted into the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub name: String,
    pub description: String,
    pub author: String,
    pub namespace: String,
    pub year: String,
}

impl TemplateData {
    /// Resolves every field, applying defaults for the optional ones.
    ///
    /// # Errors
    /// * `Error::MissingField` if `name` or `author` is absent or empty
    pub fn resolve(input: &ProjectInput, year: impl Into<String>) -> Result<Self> {
        let name = input.require_name()?.to_string();
        let author = input.require_author()?.to_string();

        let description = match input.description.join(" ") {
            desc if desc.is_empty() => format!("This is {name}."),
            desc => desc,
        };
        let namespace = match non_empty(input.namespace.as_deref()) {
            Some(namespace) => namespace.to_string(),
            None => derive_abbreviation(&name),
        };

        Ok(Self { name, description, author, namespace, year: year.into() })
    }

    /// Flattens the record into the placeholder mapping used by templates.
    ///
    /// Keys: `name`, `desc`, `author`, `year`, `umd`.
    pub fn placeholders(&self) -> IndexMap<String, String> {
        IndexMap::from([
            ("name".to_string(), self.name.clone()),
            ("desc".to_string(), self.description.clone()),
            ("author".to_string(), self.author.clone()),
            ("year".to_string(), self.year.clone()),
            ("umd".to_string(), self.namespace.clone()),
        ])
    }
}
