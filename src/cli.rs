//! Command-line interface implementation for pkg-scaffold.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::TEMPLATE_DIR_ENV;
use crate::data::ProjectInput;
use crate::store::TemplateSource;

/// Command-line arguments structure for pkg-scaffold.
///
/// `name` and `author` are optional here so that a missing value is reported
/// by the generator like any other validation failure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Scaffold a TypeScript library package", long_about = None)]
pub struct Args {
    /// The name of the package
    #[arg(short, long, value_name = "PKG")]
    pub name: Option<String>,

    /// The author of the package
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// The description of the package
    #[arg(short, long = "desc", value_name = "DESCRIPTION", num_args = 1..)]
    pub desc: Vec<String>,

    /// The keywords of the package
    #[arg(short, long, value_name = "WORDS", num_args = 1..)]
    pub keywords: Vec<String>,

    /// The repository of the package
    #[arg(short, long = "repo", value_name = "REPOSITORY")]
    pub repo: Option<String>,

    /// The global namespace to use
    #[arg(short, long, value_name = "NAMESPACE")]
    pub umd: Option<String>,

    /// Do not install dependencies instantly
    #[arg(long)]
    pub no_install: bool,

    /// Read templates from this directory instead of the bundled set
    #[arg(short, long, value_name = "DIR", env = TEMPLATE_DIR_ENV)]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Converts the parsed arguments into generator input.
    pub fn project_input(&self) -> ProjectInput {
        ProjectInput {
            name: self.name.clone(),
            author: self.author.clone(),
            description: self.desc.clone(),
            keywords: self.keywords.clone(),
            repository: self.repo.clone(),
            namespace: self.umd.clone(),
            install: !self.no_install,
        }
    }

    pub fn template_source(&self) -> TemplateSource {
        TemplateSource::from_option(self.template_dir.clone())
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default handling for `--help`, `--version` and argument errors
pub fn get_args() -> Args {
    Args::parse()
}
