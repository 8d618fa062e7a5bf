//! One generation run: validation, template materialization, synthesized
//! files and dependency installation.

use chrono::Datelike;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    constants::{IGNORE_FILE, PACKAGE_FILE},
    data::{ProjectInput, TemplateData},
    error::{Error, Result},
    fs::FileSystem,
    installer::Installer,
    package::{ignore_file_contents, synthesize_manifest, ManifestOptions},
    processor::Processor,
    store::TemplateStore,
    template::TemplateManifest,
};

/// Generates projects through injected template, filesystem and installer
/// capabilities.
pub struct Generator<'a> {
    templates: &'a dyn TemplateStore,
    fs: &'a dyn FileSystem,
    installer: &'a dyn Installer,
    manifest: TemplateManifest,
    year: String,
}

impl<'a> Generator<'a> {
    pub fn new(
        templates: &'a dyn TemplateStore,
        fs: &'a dyn FileSystem,
        installer: &'a dyn Installer,
    ) -> Self {
        Self {
            templates,
            fs,
            installer,
            manifest: TemplateManifest::default(),
            year: chrono::Local::now().year().to_string(),
        }
    }

    /// Uses a different template manifest.
    pub fn with_manifest(mut self, manifest: TemplateManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Overrides the year substituted for `__year__`.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Generates the project `input.name` inside `cwd`.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the generated project
    ///
    /// # Errors
    /// * `Error::Template` if the manifest declares a file in an undeclared directory
    /// * `Error::MissingField` if the name or author is missing
    /// * `Error::DestinationExists` if `cwd/name` already exists
    /// * `Error::TemplateRead` / `Error::Write` on I/O failures
    /// * `Error::Install` if the installer cannot be started
    ///
    /// Nothing is written before the input and destination are validated.
    /// Files written before a later failure are left in place.
    pub async fn generate(&self, cwd: &Path, input: &ProjectInput) -> Result<PathBuf> {
        self.manifest.validate()?;

        let name = input.require_name()?;
        let project_dir = cwd.join(name);
        let exists = self
            .fs
            .exists(&project_dir)
            .await
            .map_err(|e| Error::write(project_dir.display(), e))?;
        if exists {
            return Err(Error::DestinationExists { path: name.to_string() });
        }

        let data = TemplateData::resolve(input, self.year.clone())?;
        debug!("Resolved template data: {data:?}");

        self.fs
            .create_dir(&project_dir)
            .await
            .map_err(|e| Error::write(project_dir.display(), e))?;

        info!("Generating files...");
        Processor::new(self.templates, self.fs, &self.manifest)
            .materialize(&project_dir, &data)
            .await?;

        self.write(&project_dir.join(IGNORE_FILE), &ignore_file_contents()).await?;

        let options = ManifestOptions {
            repository: input.repository.clone(),
            keywords: input.keywords.clone(),
        };
        let package_path = project_dir.join(PACKAGE_FILE);
        let package_json = synthesize_manifest(&data, &options)
            .to_json()
            .map_err(|e| Error::write(package_path.display(), e.into()))?;
        self.write(&package_path, &package_json).await?;

        if input.install {
            info!("Installing dev dependencies...");
            self.installer.install(&project_dir).await?;
        } else {
            info!("Dependencies not installed.");
        }

        Ok(project_dir)
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        debug!("Writing file: {}", path.display());
        self.fs.write(path, contents).await.map_err(|e| Error::write(path.display(), e))
    }
}
