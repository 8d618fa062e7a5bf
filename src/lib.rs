//! pkg-scaffold creates TypeScript library projects from a fixed template set.
//! It substitutes `__key__` placeholders in the bundled templates, writes a
//! synthesized `package.json` and `.gitignore`, and optionally installs the
//! project's development dependencies.

/// Default UMD namespace derivation
pub mod abbr;

/// Command-line interface module
pub mod cli;

pub mod constants;

/// Caller input and resolved template data
pub mod data;

/// Error types and handling
pub mod error;

/// Filesystem capability
pub mod fs;

/// Orchestration of a generation run
pub mod generator;

/// Dependency installation
pub mod installer;

/// Logger setup for the binary
pub mod logger;

/// `package.json` and `.gitignore` synthesis
pub mod package;

/// Template tree materialization
pub mod processor;

/// Placeholder substitution
pub mod renderer;

/// Template sources: bundled or on disk
pub mod store;

/// The template manifest
pub mod template;
