//! Dependency installation for a freshly generated project.

use async_trait::async_trait;
use log::warn;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::constants::{INSTALL_ARGS, INSTALL_PROGRAM};
use crate::error::{Error, Result};

/// Installs the dependencies declared by a generated project.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, project_dir: &Path) -> Result<()>;
}

/// Runs an external command in the project directory with inherited stdio.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(INSTALL_PROGRAM, INSTALL_ARGS)
    }
}

impl CommandInstaller {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// The command line, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl Installer for CommandInstaller {
    /// Runs the command and waits for it to exit.
    ///
    /// A non-zero exit status is only logged: the installer reports its own
    /// failure on the inherited stderr, and the generated files stay valid.
    ///
    /// # Errors
    /// * `Error::Install` if the process cannot be started
    async fn install(&self, project_dir: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::Install { command: self.command_line(), source: e })?;

        if !status.success() {
            warn!("'{}' exited with {}", self.command_line(), status);
        }

        Ok(())
    }
}
