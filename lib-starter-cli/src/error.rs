//! Error types and exit-code classification

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, StarterError>;

/// Exit code for a successful run or a user cancellation
pub const SUCCESS_CODE: u8 = 0;

/// Exit code for a missing template or a failed copy
pub const GENERATION_FAILURE_CODE: u8 = 2;

/// Exit code for anything nobody planned for
pub const UNEXPECTED_FAILURE_CODE: u8 = 1;

/// Everything that can stop a scaffolding run
#[derive(Debug, Error)]
pub enum StarterError {
    /// The user aborted one of the prompts
    #[error("Operation cancelled.")]
    Cancelled,

    /// No template directory exists for the requested identifier
    #[error("Template \"{template}\" does not exist in {}", root.display())]
    TemplateNotFound {
        /// Template identifier that was looked up
        template: String,
        /// Templates root that was searched
        root: PathBuf,
    },

    /// The destination (or one of its subdirectories) could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A template file could not be copied
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file inside the template
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Walking the template tree failed
    #[error("Failed to read template tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The target directory could not be inspected
    #[error("Failed to inspect {}: {source}", path.display())]
    Inspect {
        /// Path that was inspected
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The terminal prompt failed for a reason other than cancellation
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl StarterError {
    /// Whether this error came out of project generation (template lookup or copy)
    #[must_use]
    pub const fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::TemplateNotFound { .. } | Self::CreateDir { .. } | Self::Copy { .. } | Self::Walk(_)
        )
    }

    /// Raw process status for this error
    ///
    /// Cancellation is a deliberate quit and exits 0. A missing template or a
    /// failed copy is an installation problem and exits 2. Everything else is 1.
    #[must_use]
    pub const fn status(&self) -> u8 {
        if matches!(self, Self::Cancelled) {
            SUCCESS_CODE
        } else if self.is_generation_failure() {
            GENERATION_FAILURE_CODE
        } else {
            UNEXPECTED_FAILURE_CODE
        }
    }
}
