//! Template sources.
//!
//! The bundled template set is compiled into the binary with [`include_str!`];
//! a directory on disk can be used instead to try out modified templates.

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Source of template file contents, addressed by manifest-relative path.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Reads the template at `relative` as UTF-8 text.
    async fn read(&self, relative: &str) -> io::Result<String>;
}

const EMBEDDED: &[(&str, &str)] = &[
    ("src/index.ts", include_str!("../template/src/index.ts")),
    (".babelrc", include_str!("../template/.babelrc")),
    ("CHANGELOG.md", include_str!("../template/CHANGELOG.md")),
    ("index.d.ts", include_str!("../template/index.d.ts")),
    ("LICENSE", include_str!("../template/LICENSE")),
    ("README.md", include_str!("../template/README.md")),
    ("rollup.config.js", include_str!("../template/rollup.config.js")),
    ("stat.js", include_str!("../template/stat.js")),
    ("terser.json", include_str!("../template/terser.json")),
    ("tsconfig.json", include_str!("../template/tsconfig.json")),
];

/// Templates bundled with the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Returns the bundled template at `relative`, if any.
    pub fn get(relative: &str) -> Option<&'static str> {
        EMBEDDED.iter().find(|(path, _)| *path == relative).map(|(_, content)| *content)
    }
}

#[async_trait]
impl TemplateStore for EmbeddedTemplates {
    async fn read(&self, relative: &str) -> io::Result<String> {
        Self::get(relative).map(str::to_string).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such bundled template")
        })
    }
}

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateStore for DirectoryTemplates {
    async fn read(&self, relative: &str) -> io::Result<String> {
        tokio::fs::read_to_string(self.root.join(relative)).await
    }
}

/// Where templates are loaded from, as selected on the command line.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Bundled template set
    Embedded,
    /// Template directory on disk
    Directory(PathBuf),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Embedded => write!(f, "bundled templates"),
            TemplateSource::Directory(path) => write!(f, "local path: '{}'", path.display()),
        }
    }
}

impl TemplateSource {
    /// Selects the directory source when a path is given, else the bundled set.
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        dir.map_or(Self::Embedded, Self::Directory)
    }

    /// Opens the store for this source.
    pub fn open(self) -> Box<dyn TemplateStore> {
        match self {
            TemplateSource::Embedded => Box::new(EmbeddedTemplates),
            TemplateSource::Directory(root) => Box::new(DirectoryTemplates::new(root)),
        }
    }
}
