//! Common constants used throughout pkg-scaffold.

/// Ignore file written into every generated project
pub const IGNORE_FILE: &str = ".gitignore";

/// Paths listed in the generated ignore file, one per line
pub const IGNORED_PATHS: [&str; 4] = ["node_modules", "types", "js", "dist"];

/// Generated package manifest file name
pub const PACKAGE_FILE: &str = "package.json";

/// Initial version of every generated package
pub const INITIAL_VERSION: &str = "0.1.0";

/// License identifier of every generated package
pub const LICENSE: &str = "MIT";

/// Default program installing the generated project's dependencies
pub const INSTALL_PROGRAM: &str = "npm";

/// Arguments passed to [`INSTALL_PROGRAM`]
pub const INSTALL_ARGS: [&str; 1] = ["i"];

/// Environment variable selecting a template directory on disk
pub const TEMPLATE_DIR_ENV: &str = "PKG_SCAFFOLD_TEMPLATE_DIR";
