//! Invoking package manager detection

use std::fmt;

/// Package manager parsed from `npm_config_user_agent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerInfo {
    /// Tool name, e.g. `pnpm`
    pub name: String,
    /// Tool version, when the agent carries one
    pub version: Option<String>,
}

impl PackageManagerInfo {
    /// Package manager assumed when none launched us
    pub const DEFAULT_NAME: &'static str = "npm";

    /// Parse a user agent like `pnpm/8.6.0 npm/? node/v20.3.0 linux x64`
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        let product = user_agent.split_whitespace().next()?;
        let mut parts = product.split('/');
        let name = parts.next().filter(|name| !name.is_empty())?;
        let version = parts.next().filter(|version| !version.is_empty());

        Some(Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// Name to use in suggested commands
    #[must_use]
    pub fn command_name(info: Option<&Self>) -> &str {
        info.map_or(Self::DEFAULT_NAME, |info| info.name.as_str())
    }
}

impl fmt::Display for PackageManagerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {version}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnpm_agent() {
        let info = PackageManagerInfo::from_user_agent("pnpm/8.6.0 npm/? node/v20.3.0 linux x64").unwrap();
        assert_eq!(info.name, "pnpm");
        assert_eq!(info.version.as_deref(), Some("8.6.0"));
        assert_eq!(info.to_string(), "pnpm 8.6.0");
    }

    #[test]
    fn test_agent_without_version() {
        let info = PackageManagerInfo::from_user_agent("bun").unwrap();
        assert_eq!(info.name, "bun");
        assert!(info.version.is_none());
    }

    #[test]
    fn test_blank_agent() {
        assert!(PackageManagerInfo::from_user_agent("").is_none());
        assert!(PackageManagerInfo::from_user_agent("   ").is_none());
    }

    #[test]
    fn test_command_name_falls_back_to_npm() {
        assert_eq!(PackageManagerInfo::command_name(None), "npm");

        let yarn = PackageManagerInfo::from_user_agent("yarn/1.22.19 npm/? node/v18").unwrap();
        assert_eq!(PackageManagerInfo::command_name(Some(&yarn)), "yarn");
    }
}
