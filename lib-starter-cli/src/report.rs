//! Turning a failed run into a message and an exit status

use crate::error::{StarterError, UNEXPECTED_FAILURE_CODE};

/// Where a failure message is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Alongside the prompts (cancellation is not an error)
    Stdout,
    /// Error output
    Stderr,
}

/// What the entry point prints and exits with after a failed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Text shown to the user
    pub message: String,
    /// Stream the message belongs on
    pub stream: Stream,
    /// Process exit status
    pub status: u8,
}

impl FailureReport {
    /// Classify `err`
    ///
    /// A [`StarterError`] already renders its cause in its own message, so it
    /// is printed with plain `Display`. Other errors only carry `anyhow`
    /// context, which the alternate form joins into one line.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<StarterError>() {
            Some(starter @ StarterError::Cancelled) => Self {
                message: starter.to_string(),
                stream: Stream::Stdout,
                status: starter.status(),
            },
            Some(starter) if starter.is_generation_failure() => Self {
                message: format!("Error generating project: {starter}"),
                stream: Stream::Stderr,
                status: starter.status(),
            },
            Some(starter) => Self {
                message: format!("An unexpected error occurred: {starter}"),
                stream: Stream::Stderr,
                status: starter.status(),
            },
            None => Self {
                message: format!("An unexpected error occurred: {err:#}"),
                stream: Stream::Stderr,
                status: UNEXPECTED_FAILURE_CODE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_cancellation_report() {
        let report = FailureReport::from_error(&anyhow::Error::from(StarterError::Cancelled));

        assert_eq!(report.message, "Operation cancelled.");
        assert_eq!(report.stream, Stream::Stdout);
        assert_eq!(report.status, 0);
    }

    #[test]
    fn test_missing_template_report() {
        let err = StarterError::TemplateNotFound {
            template: "parcel-vanilla-ts".to_string(),
            root: PathBuf::from("/opt/lib-starter/templates"),
        };
        let report = FailureReport::from_error(&anyhow::Error::from(err));

        assert_eq!(
            report.message,
            "Error generating project: Template \"parcel-vanilla-ts\" does not exist in /opt/lib-starter/templates"
        );
        assert_eq!(report.stream, Stream::Stderr);
        assert_eq!(report.status, 2);
    }

    #[test]
    fn test_copy_failure_names_cause_once() {
        let err = StarterError::Copy {
            from: PathBuf::from("templates/a/package.json"),
            to: PathBuf::from("demo/package.json"),
            source: io::Error::other("disk full"),
        };
        let report = FailureReport::from_error(&anyhow::Error::from(err));

        assert!(report.message.starts_with("Error generating project: Failed to copy"));
        assert_eq!(report.message.matches("disk full").count(), 1);
        assert_eq!(report.status, 2);
    }

    #[test]
    fn test_prompt_failure_names_cause_once() {
        let err = StarterError::Prompt(dialoguer::Error::IO(io::Error::other("not a terminal")));
        let report = FailureReport::from_error(&anyhow::Error::from(err));

        assert!(report.message.starts_with("An unexpected error occurred: Prompt failed"));
        assert_eq!(report.message.matches("not a terminal").count(), 1);
        assert_eq!(report.status, 1);
    }

    #[test]
    fn test_inspect_failure_is_unexpected() {
        let err = StarterError::Inspect {
            path: PathBuf::from("/srv/demo"),
            source: io::Error::other("permission denied"),
        };
        let report = FailureReport::from_error(&anyhow::Error::from(err));

        assert_eq!(
            report.message,
            "An unexpected error occurred: Failed to inspect /srv/demo: permission denied"
        );
        assert_eq!(report.status, 1);
    }

    #[test]
    fn test_plain_error_keeps_context_chain() {
        let err = anyhow::Error::new(io::Error::other("gone")).context("Failed to read current directory");
        let report = FailureReport::from_error(&err);

        assert_eq!(
            report.message,
            "An unexpected error occurred: Failed to read current directory: gone"
        );
        assert_eq!(report.stream, Stream::Stderr);
        assert_eq!(report.status, 1);
    }
}
