//! Project name normalization
//!
//! Turns whatever the user typed at the name prompt into a target directory and
//! a package name. Scoped names (`@scope/pkg`) are kept whole; everything else
//! is reduced to its last path segment.

use std::path::{is_separator, Path, PathBuf};

/// Package name and target directory derived from the name prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    /// Name used for the package (`@scope/pkg` or the last path segment)
    pub package_name: String,
    /// Trimmed input without trailing separators
    pub target_dir: String,
}

/// Everything the generator needs to know about where the project goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    /// Raw answer from the name prompt
    pub project_name: String,
    /// Normalized target directory, possibly relative
    pub target_dir: String,
    /// Absolute destination
    pub dist_folder: PathBuf,
    /// Derived package name
    pub package_name: String,
}

impl ProjectDetails {
    /// Build details for a raw project name relative to `cwd`
    #[must_use]
    pub fn resolve(project_name: &str, cwd: &Path) -> Self {
        let ProjectName {
            package_name,
            target_dir,
        } = format_project_name(project_name);
        let dist_folder = resolve_dist_folder(cwd, &target_dir);

        Self {
            project_name: project_name.to_string(),
            target_dir,
            dist_folder,
            package_name,
        }
    }
}

/// Normalize a raw project name
///
/// Trims whitespace and strips every trailing path separator. Empty input is
/// accepted and yields empty strings.
#[must_use]
pub fn format_project_name(input: &str) -> ProjectName {
    let formatted = input.trim().trim_end_matches(is_separator);

    let package_name = if formatted.starts_with('@') {
        formatted
    } else {
        basename(formatted)
    };

    ProjectName {
        package_name: package_name.to_string(),
        target_dir: formatted.to_string(),
    }
}

/// Absolute destination for a target directory
#[must_use]
pub fn resolve_dist_folder(cwd: &Path, target_dir: &str) -> PathBuf {
    let target = Path::new(target_dir);
    if target.is_absolute() {
        target.to_path_buf()
    } else {
        cwd.join(target)
    }
}

// Last segment as written, so `a/..` keeps `..` the way a shell basename would.
fn basename(path: &str) -> &str {
    path.rfind(is_separator)
        .map_or(path, |index| &path[index + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trailing_separators_are_stripped() {
        let name = format_project_name("my-app///");
        assert_eq!(name.target_dir, "my-app");
        assert_eq!(name.package_name, "my-app");
    }

    #[test]
    fn test_scoped_name_is_kept_whole() {
        let name = format_project_name("@scope/pkg");
        assert_eq!(name.package_name, "@scope/pkg");
        assert_eq!(name.target_dir, "@scope/pkg");
    }

    #[test]
    fn test_nested_path_reduces_to_last_segment() {
        let name = format_project_name("a/b/my-app");
        assert_eq!(name.package_name, "my-app");
        assert_eq!(name.target_dir, "a/b/my-app");
    }

    #[test]
    fn test_whitespace_is_trimmed_before_stripping() {
        let name = format_project_name("  demo/  ");
        assert_eq!(name.target_dir, "demo");
        assert_eq!(name.package_name, "demo");
    }

    #[test]
    fn test_empty_input_is_accepted() {
        let name = format_project_name("");
        assert_eq!(name.target_dir, "");
        assert_eq!(name.package_name, "");
    }

    #[test]
    fn test_relative_target_joins_cwd() {
        let cwd = Path::new("/home/dev");
        assert_eq!(
            resolve_dist_folder(cwd, "a/b/my-app"),
            PathBuf::from("/home/dev/a/b/my-app")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_target_is_kept() {
        let cwd = Path::new("/home/dev");
        assert_eq!(resolve_dist_folder(cwd, "/srv/lib"), PathBuf::from("/srv/lib"));
    }

    #[test]
    fn test_details_resolve() {
        let details = ProjectDetails::resolve(" libs/@acme/util/ ", Path::new("/work"));
        assert_eq!(details.project_name, " libs/@acme/util/ ");
        assert_eq!(details.target_dir, "libs/@acme/util");
        assert_eq!(details.package_name, "util");
        assert_eq!(details.dist_folder, PathBuf::from("/work/libs/@acme/util"));
    }

    proptest! {
        #[test]
        fn prop_target_dir_never_ends_with_separator(input in "[ a-z@/._-]{0,24}") {
            let name = format_project_name(&input);
            prop_assert!(!name.target_dir.ends_with('/'));
            prop_assert!(!name.target_dir.starts_with(' '));
        }

        #[test]
        fn prop_package_name_is_suffix_of_target(input in "[a-z@/._-]{0,24}") {
            let name = format_project_name(&input);
            prop_assert!(name.target_dir.ends_with(&name.package_name));
        }
    }
}
