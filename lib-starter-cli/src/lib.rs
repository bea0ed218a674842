//! lib-starter CLI library
//!
//! Interactive scaffolding for TypeScript and JavaScript library projects:
//! ask for a name, a language and a bundler, then copy the matching template
//! directory into place.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod observability;
pub mod package_manager;
pub mod project;
pub mod prompt;
pub mod report;
pub mod templates;

pub use commands::{CreateCommand, Created};
pub use config::Config;
pub use directory::DirectoryState;
pub use error::{Result, StarterError};
pub use package_manager::PackageManagerInfo;
pub use project::{format_project_name, ProjectDetails, ProjectName};
pub use prompt::{Prompter, TerminalPrompter};
pub use report::{FailureReport, Stream};
pub use templates::{Bundler, Language, ProjectGenerator, Selection, TemplateId, BUNDLERS};
