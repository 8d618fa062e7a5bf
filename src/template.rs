//! The template manifest: which directories and files make up a project.

use std::path::Path;

use crate::error::{Error, Result};

/// Static declaration of the directories and files instantiated per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateManifest {
    /// Directories created before any file, in declared order
    pub directories: &'static [&'static str],
    /// Template files, relative to the template source and the project root
    pub files: &'static [&'static str],
}

/// The bundled TypeScript library template.
pub const DEFAULT_MANIFEST: TemplateManifest = TemplateManifest {
    directories: &["src"],
    files: &[
        "src/index.ts",
        ".babelrc",
        "CHANGELOG.md",
        "index.d.ts",
        "LICENSE",
        "README.md",
        "rollup.config.js",
        "stat.js",
        "terser.json",
        "tsconfig.json",
    ],
};

impl Default for TemplateManifest {
    fn default() -> Self {
        DEFAULT_MANIFEST
    }
}

fn parent_of(path: &str) -> Option<&str> {
    Path::new(path)
        .parent()
        .and_then(|parent| parent.to_str())
        .filter(|parent| !parent.is_empty())
}

impl TemplateManifest {
    /// Checks that every directory is declared after its parent and that every
    /// file lives in the project root or a declared directory.
    ///
    /// The materializer never creates directories implicitly, so a manifest
    /// failing this check could not be written.
    pub fn validate(&self) -> Result<()> {
        for (index, dir) in self.directories.iter().enumerate() {
            if let Some(parent) = parent_of(dir) {
                if !self.directories[..index].contains(&parent) {
                    return Err(Error::Template(format!(
                        "directory '{dir}' is declared before its parent '{parent}'"
                    )));
                }
            }
        }

        for file in self.files {
            if let Some(parent) = parent_of(file) {
                if !self.directories.contains(&parent) {
                    return Err(Error::Template(format!(
                        "parent directory '{parent}' of '{file}' is not declared"
                    )));
                }
            }
        }

        Ok(())
    }
}
