//! Template registry
//!
//! Languages and bundlers the prompts offer, and the rule each bundler uses to
//! name its template directory. Adding a bundler is one more row in
//! [`BUNDLERS`] plus its template directories under `templates/`.

use std::fmt;

pub mod generator;

pub use generator::ProjectGenerator;

/// Source language of the generated library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// TypeScript (default)
    #[default]
    Ts,
    /// JavaScript
    Js,
}

impl Language {
    /// Every language, in prompt order
    pub const ALL: [Self; 2] = [Self::Ts, Self::Js];

    /// Identifier used in template names
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
        }
    }

    /// Human-readable name shown in the prompt
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ts => "TypeScript",
            Self::Js => "JavaScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A bundling library and how its templates are named
#[derive(Debug)]
pub struct Bundler {
    /// Identifier shown in logs and used by the naming rule
    pub id: &'static str,
    /// Human-readable name shown in the prompt
    pub label: &'static str,
    template_rule: fn(&'static str, Language) -> String,
}

impl Bundler {
    /// Template identifier for this bundler and `language`
    #[must_use]
    pub fn template_id(&self, language: Language) -> TemplateId {
        TemplateId((self.template_rule)(self.id, language))
    }

    /// Look a bundler up by identifier
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        BUNDLERS.iter().find(|bundler| bundler.id == id)
    }
}

/// `{bundler}-vanilla-{language}`
fn vanilla(bundler: &'static str, language: Language) -> String {
    format!("{bundler}-vanilla-{language}")
}

/// Bundlers offered by the bundler prompt, in prompt order
pub static BUNDLERS: &[Bundler] = &[Bundler {
    id: "parcel",
    label: "parcel",
    template_rule: vanilla,
}];

/// Name of a template directory under the templates root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap an identifier that did not come from a bundler rule
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers from the language and bundler prompts
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    /// Chosen language
    pub language: Language,
    /// Chosen bundler
    pub bundler: &'static Bundler,
}

impl Selection {
    /// Template identifier for this selection
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.bundler.template_id(self.language)
    }
}
