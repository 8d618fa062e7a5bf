//! Template tree materialization.
//!
//! Writes the manifest's directories, then every template file with its
//! placeholders substituted, under a destination root that already exists.
//!
//! Files already written are not removed when a later file fails: a failed
//! run can leave a partially generated project behind.

use futures::future::try_join_all;
use log::{debug, error};
use std::path::Path;

use crate::{
    data::TemplateData,
    error::{Error, Result},
    fs::FileSystem,
    renderer::{PlaceholderRenderer, TemplateRenderer},
    store::TemplateStore,
    template::TemplateManifest,
};

/// Instantiates a [`TemplateManifest`] from a template store onto a filesystem.
pub struct Processor<'a> {
    templates: &'a dyn TemplateStore,
    fs: &'a dyn FileSystem,
    manifest: &'a TemplateManifest,
}

impl<'a> Processor<'a> {
    pub fn new(
        templates: &'a dyn TemplateStore,
        fs: &'a dyn FileSystem,
        manifest: &'a TemplateManifest,
    ) -> Self {
        Self { templates, fs, manifest }
    }

    /// Creates all declared directories, then renders all declared files.
    ///
    /// # Errors
    /// * `Error::Write` if a directory already exists or cannot be created,
    ///   or if a file cannot be written
    /// * `Error::TemplateRead` if a template cannot be read
    pub async fn materialize(&self, dest_root: &Path, data: &TemplateData) -> Result<()> {
        self.create_directories(dest_root).await?;

        let renderer = PlaceholderRenderer::new(&data.placeholders());
        try_join_all(
            self.manifest.files.iter().map(|file| self.render_file(dest_root, file, &renderer)),
        )
        .await?;

        Ok(())
    }

    async fn create_directories(&self, dest_root: &Path) -> Result<()> {
        for dir in self.manifest.directories {
            let target = dest_root.join(dir);
            debug!("Creating directory: {}", target.display());
            self.fs.create_dir(&target).await.map_err(|e| {
                error!("Failed to create directory '{}'", target.display());
                Error::write(target.display(), e)
            })?;
        }
        Ok(())
    }

    async fn render_file(
        &self,
        dest_root: &Path,
        relative: &str,
        renderer: &dyn TemplateRenderer,
    ) -> Result<()> {
        let content = self.templates.read(relative).await.map_err(|e| {
            error!("Failed to read template '{relative}'");
            Error::TemplateRead { path: relative.to_string(), source: e }
        })?;

        let target = dest_root.join(relative);
        debug!("Writing file: {}", target.display());
        self.fs.write(&target, &renderer.render(&content)).await.map_err(|e| {
            error!("Failed to write '{}'", target.display());
            Error::write(target.display(), e)
        })
    }
}
