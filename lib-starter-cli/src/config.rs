//! Runtime configuration
//!
//! There is no config file. Settings come from command-line flags and a few
//! environment variables, resolved once at startup:
//!
//! 1. `--templates-dir`
//! 2. `LIB_STARTER_TEMPLATES_DIR`
//! 3. A `templates` directory next to the installed executable
//! 4. The crate's own `templates` directory (development builds)
//!
//! The first of these that exists is used.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::package_manager::PackageManagerInfo;

/// Environment variable overriding the templates root
pub const TEMPLATES_DIR_ENV: &str = "LIB_STARTER_TEMPLATES_DIR";

/// Environment variable set by npm, pnpm, yarn and bun when they launch a tool
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Name of the directory that holds the shipped templates
const TEMPLATES_DIR_NAME: &str = "templates";

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Current working directory relative names resolve against
    pub cwd: PathBuf,
    /// Directory template identifiers are looked up in
    pub templates_root: PathBuf,
    /// Package manager that launched us, if any
    pub package_manager: Option<PackageManagerInfo>,
}

impl Config {
    /// Resolve configuration from flags and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be read.
    pub fn from_env(templates_dir: Option<PathBuf>) -> std::io::Result<Self> {
        let cwd = env::current_dir()?;
        let env_dir = env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        let templates_root = locate_templates_root(
            templates_dir.as_deref(),
            env_dir.as_deref(),
            exe_dir.as_deref(),
            Path::new(env!("CARGO_MANIFEST_DIR")),
        );
        debug!(templates_root = %templates_root.display(), "Templates root resolved");

        let package_manager = env::var(USER_AGENT_ENV)
            .ok()
            .and_then(|agent| PackageManagerInfo::from_user_agent(&agent));

        Ok(Self {
            cwd,
            templates_root,
            package_manager,
        })
    }
}

/// Pick the templates root
///
/// Candidates are tried in order and the first existing directory wins: the
/// `--templates-dir` flag, `LIB_STARTER_TEMPLATES_DIR`, then `templates` next
/// to the executable or up to two levels above it, then the crate's own
/// `templates`. When none exists the first candidate is returned (the flag,
/// else the env path, else `<exe_dir>/../templates`) so the missing-template
/// error names the place the user most likely meant.
#[must_use]
pub fn locate_templates_root(
    flag_dir: Option<&Path>,
    env_dir: Option<&Path>,
    exe_dir: Option<&Path>,
    manifest_dir: &Path,
) -> PathBuf {
    let overrides: Vec<PathBuf> = flag_dir
        .into_iter()
        .chain(env_dir)
        .map(Path::to_path_buf)
        .collect();

    let mut candidates = overrides.clone();
    if let Some(exe_dir) = exe_dir {
        // <prefix>/bin/lib-starter, target/<profile>/lib-starter, or alongside the binary
        candidates.push(exe_dir.join(TEMPLATES_DIR_NAME));
        for ancestor in exe_dir.ancestors().skip(1).take(2) {
            candidates.push(ancestor.join(TEMPLATES_DIR_NAME));
        }
    }
    candidates.push(manifest_dir.join(TEMPLATES_DIR_NAME));

    if let Some(found) = candidates.into_iter().find(|candidate| candidate.is_dir()) {
        return found;
    }

    if let Some(first) = overrides.into_iter().next() {
        return first;
    }

    exe_dir
        .and_then(Path::parent)
        .map_or_else(|| manifest_dir.join(TEMPLATES_DIR_NAME), |prefix| prefix.join(TEMPLATES_DIR_NAME))
}
