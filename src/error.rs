//! Error handling for pkg-scaffold.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a project.
///
/// Every variant is terminal for the current run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input field (`name` or `author`) was not supplied
    #[error("Package {field} is not provided.")]
    MissingField { field: &'static str },

    /// The project directory is already present in the working directory
    #[error("Path \"{path}\" already exists.")]
    DestinationExists { path: String },

    /// A declared template file could not be read from the template source
    #[error("Failed to read template '{path}': {source}.")]
    TemplateRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A directory or file in the generated project could not be written
    #[error("Failed to write '{path}': {source}.")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template manifest is inconsistent
    #[error("Template error: {0}.")]
    Template(String),

    /// The dependency installer process could not be started
    #[error("Failed to run '{command}': {source}.")]
    Install {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a [`Error::Write`] for `path`.
    pub fn write(path: impl std::fmt::Display, source: io::Error) -> Self {
        Error::Write { path: path.to_string(), source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
