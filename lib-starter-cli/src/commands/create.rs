//! Project scaffolding command

use console::{style, Emoji};
use tracing::{info, warn};

use crate::config::Config;
use crate::directory::DirectoryState;
use crate::error::Result;
use crate::package_manager::PackageManagerInfo;
use crate::project::ProjectDetails;
use crate::prompt::Prompter;
use crate::templates::generator::CopySummary;
use crate::templates::{ProjectGenerator, Selection, TemplateId};

static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✓ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠ ", "! ");

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct Created {
    /// Where the project went and what it is called
    pub details: ProjectDetails,
    /// Template that was copied
    pub template: TemplateId,
    /// Files and directories copied
    pub summary: CopySummary,
}

/// Interactive "create a new library" command
pub struct CreateCommand<P> {
    config: Config,
    generator: ProjectGenerator,
    prompter: P,
}

impl<P: Prompter> CreateCommand<P> {
    /// Create a command instance
    pub fn new(config: Config, prompter: P) -> Self {
        let generator = ProjectGenerator::new(config.templates_root.clone());
        Self {
            config,
            generator,
            prompter,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user cancels a prompt ([`crate::StarterError::Cancelled`])
    /// - The target directory cannot be inspected
    /// - The template is missing or the copy fails
    pub fn execute(&mut self) -> Result<Created> {
        println!(
            "{}{}",
            PACKAGE,
            style("Library Starter CLI").cyan().bold()
        );
        println!();

        if let Some(pm) = &self.config.package_manager {
            info!(package_manager = %pm, "Launched by package manager");
        }

        let details = self.project_details()?;
        let selection = Selection {
            language: self.prompter.language()?,
            bundler: self.prompter.bundler()?,
        };
        let template = selection.template_id();
        info!(%template, bundler = selection.bundler.id, language = %selection.language, "Template selected");

        let summary = self
            .generator
            .generate(&details.project_name, &template, &details.dist_folder)?;
        info!(
            destination = %details.dist_folder.display(),
            files = summary.files,
            directories = summary.directories,
            "Project generated"
        );

        self.print_success(&details);

        Ok(Created {
            details,
            template,
            summary,
        })
    }

    /// Ask for a name until it points somewhere we may write
    ///
    /// Declining an overwrite, or naming something that is not a directory,
    /// starts over from the name prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cancels or the target cannot be inspected.
    pub fn project_details(&mut self) -> Result<ProjectDetails> {
        loop {
            let name = self.prompter.project_name()?;
            let details = ProjectDetails::resolve(&name, &self.config.cwd);

            match DirectoryState::of(&details.dist_folder)? {
                DirectoryState::Missing | DirectoryState::Empty => return Ok(details),
                DirectoryState::NonEmpty => {
                    if self.prompter.confirm_overwrite(&details.target_dir)? {
                        return Ok(details);
                    }
                    warn!(target_dir = %details.target_dir, "Overwrite declined");
                }
                DirectoryState::NotADirectory => {
                    warn!(target_dir = %details.target_dir, "Target is not a directory");
                    println!(
                        "{}{}",
                        WARNING,
                        style(format!(
                            "\"{}\" already exists and is not a directory.",
                            details.target_dir
                        ))
                        .yellow()
                    );
                }
            }
        }
    }

    /// Print success message with next steps
    fn print_success(&self, details: &ProjectDetails) {
        let pm = PackageManagerInfo::command_name(self.config.package_manager.as_ref());

        println!(
            "{}{}",
            SUCCESS,
            style(format!(
                "Project \"{}\" created successfully at {}",
                details.project_name.trim(),
                details.dist_folder.display()
            ))
            .green()
            .bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("cd {}", details.target_dir)).cyan());
        println!();
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("{pm} install")).cyan());
        println!();
        println!("  {} Build the library:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("{pm} run build")).cyan());
        println!();
    }
}
