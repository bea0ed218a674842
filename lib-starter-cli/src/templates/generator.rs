//! Project generation
//!
//! Copies a template directory verbatim into the destination. There is no
//! rendering step: bytes and layout are preserved exactly, existing files at
//! the destination are overwritten, and other existing entries are left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use walkdir::WalkDir;

use super::TemplateId;
use crate::error::{Result, StarterError};

/// Counts reported after a successful copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Regular files written
    pub files: usize,
    /// Directories created or reused
    pub directories: usize,
}

/// Copies templates from a templates root into new projects
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    templates_root: PathBuf,
}

impl ProjectGenerator {
    /// Create a generator reading from `templates_root`
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }

    /// Directory templates are looked up in
    #[must_use]
    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Resolve the directory for `template`
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::TemplateNotFound`] if no such directory exists.
    pub fn template_dir(&self, template: &TemplateId) -> Result<PathBuf> {
        let template_dir = self.templates_root.join(template.as_str());

        if !template_dir.is_dir() {
            return Err(StarterError::TemplateNotFound {
                template: template.to_string(),
                root: self.templates_root.clone(),
            });
        }

        Ok(template_dir)
    }

    /// Copy `template` into `target_dir`
    ///
    /// The spinner is cleared on every exit path. A failure part way through
    /// leaves whatever was already copied in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The template directory does not exist
    /// - The destination cannot be created
    /// - Any file cannot be read or written
    pub fn generate(
        &self,
        project_name: &str,
        template: &TemplateId,
        target_dir: &Path,
    ) -> Result<CopySummary> {
        debug!(templates_root = %self.templates_root.display(), "Resolving template");
        debug!(target_dir = %target_dir.display(), "Generation target");

        let template_dir = self.template_dir(template)?;
        debug!(template_dir = %template_dir.display(), "Template found");

        let _spinner = Spinner::start(format!("Generating project files for \"{project_name}\"..."));

        copy_tree(&template_dir, target_dir)
    }
}

/// Recursively copy `source` into `dest`, creating `dest` if needed
///
/// # Errors
///
/// Returns an error if a directory cannot be created, the source tree cannot
/// be walked, or a file cannot be copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<CopySummary> {
    create_dir(dest)?;

    let mut summary = CopySummary::default();

    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let target = destination_for(entry.path(), source, dest)?;

        if entry.file_type().is_dir() {
            create_dir(&target)?;
            summary.directories += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| StarterError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
            summary.files += 1;
        }
    }

    Ok(summary)
}

/// Map a walked `path` under `source` to the same place under `dest`
fn destination_for(path: &Path, source: &Path, dest: &Path) -> Result<PathBuf> {
    let relative = path.strip_prefix(source).map_err(|err| StarterError::Copy {
        from: path.to_path_buf(),
        to: dest.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, err),
    })?;

    Ok(dest.join(relative))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| StarterError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Spinner that clears itself when dropped
struct Spinner(ProgressBar);

impl Spinner {
    fn start(message: String) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self(bar)
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}
