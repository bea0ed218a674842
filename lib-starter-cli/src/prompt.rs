//! Interactive prompts
//!
//! Every prompt can be cancelled (Ctrl-C, or Esc on selections). Cancellation
//! comes back as [`StarterError::Cancelled`] so callers can unwind with `?`.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, StarterError};
use crate::templates::{Bundler, Language, BUNDLERS};

/// Message shown when the name prompt gets an empty answer
pub const NAME_REQUIRED: &str = "Project name is required!";

/// Source of answers for the scaffolding flow
pub trait Prompter {
    /// Ask for the project name; never returns a blank name
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::Cancelled`] if the user aborts.
    fn project_name(&mut self) -> Result<String>;

    /// Ask whether a non-empty `target_dir` may be overwritten
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::Cancelled`] if the user aborts.
    fn confirm_overwrite(&mut self, target_dir: &str) -> Result<bool>;

    /// Ask for the language
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::Cancelled`] if the user aborts.
    fn language(&mut self) -> Result<Language>;

    /// Ask for the bundler
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::Cancelled`] if the user aborts.
    fn bundler(&mut self) -> Result<&'static Bundler>;
}

/// Validate an answer to the name prompt
///
/// # Errors
///
/// Returns [`NAME_REQUIRED`] if the answer is blank.
pub fn validate_project_name(input: &str) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err(NAME_REQUIRED)
    } else {
        Ok(())
    }
}

/// Question asked before overwriting `target_dir`
#[must_use]
pub fn overwrite_question(target_dir: &str) -> String {
    format!("\"{target_dir}\" already exists and is not empty. Do you want to override it?")
}

/// Prompts rendered on the terminal with dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn project_name(&mut self) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt("What is the name of your project?")
            .allow_empty(true)
            .validate_with(|input: &String| validate_project_name(input))
            .interact_text();

        interrupted_as_cancel(answer)
    }

    fn confirm_overwrite(&mut self, target_dir: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(overwrite_question(target_dir))
            .default(false)
            .interact_opt();

        interrupted_as_cancel(answer)?.ok_or(StarterError::Cancelled)
    }

    fn language(&mut self) -> Result<Language> {
        let labels: Vec<String> = Language::ALL
            .iter()
            .map(|language| format!("{} ({})", language.label(), language.id()))
            .collect();
        let default = Language::ALL
            .iter()
            .position(|language| *language == Language::default())
            .unwrap_or(0);

        let answer = Select::with_theme(&self.theme)
            .with_prompt("Select language")
            .items(&labels[..])
            .default(default)
            .interact_opt();

        interrupted_as_cancel(answer)?
            .and_then(|index| Language::ALL.get(index).copied())
            .ok_or(StarterError::Cancelled)
    }

    fn bundler(&mut self) -> Result<&'static Bundler> {
        let labels: Vec<&str> = BUNDLERS.iter().map(|bundler| bundler.label).collect();

        let answer = Select::with_theme(&self.theme)
            .with_prompt("Select Bundling library")
            .items(&labels[..])
            .default(0)
            .interact_opt();

        interrupted_as_cancel(answer)?
            .and_then(|index| BUNDLERS.get(index))
            .ok_or(StarterError::Cancelled)
    }
}

/// Ctrl-C inside a prompt surfaces as an interrupted read
fn interrupted_as_cancel<T>(answer: dialoguer::Result<T>) -> Result<T> {
    match answer {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Err(StarterError::Cancelled)
        }
        Err(err) => Err(err.into()),
    }
}
