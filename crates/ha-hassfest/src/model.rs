//! Run configuration, collected errors and the plugin interface

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{HassfestError, HassfestResult};

/// Requirements file holding the test and tooling pins
pub const REQUIREMENTS_TEST: &str = "requirements_test.txt";

/// What a hassfest run does after validating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Only report problems
    #[default]
    Validate,
    /// Regenerate files after validating
    Generate,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validate" => Ok(Action::Validate),
            "generate" => Ok(Action::Generate),
            other => Err(format!(
                "invalid action '{}', expected 'validate' or 'generate'",
                other
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Validate => write!(f, "validate"),
            Action::Generate => write!(f, "generate"),
        }
    }
}

/// A problem found by a plugin during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Plugin that reported the error
    pub plugin: String,
    pub error: String,
    /// Whether running hassfest in generate mode fixes it
    pub fixable: bool,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.plugin.to_uppercase(), self.error)
    }
}

/// Configuration and collected errors of one hassfest run
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root
    pub root: PathBuf,
    pub action: Action,
    /// Requirements file, relative to the root
    pub requirements_file: String,
    errors: Vec<ValidationError>,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, action: Action) -> Self {
        Self {
            root: root.into(),
            action,
            requirements_file: REQUIREMENTS_TEST.to_string(),
            errors: Vec::new(),
        }
    }

    /// Use a different requirements file
    pub fn with_requirements_file(mut self, file: impl Into<String>) -> Self {
        self.requirements_file = file.into();
        self
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(&self.requirements_file)
    }

    /// Resolve a path relative to the root
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Record a validation error
    pub fn add_error(&mut self, plugin: &str, error: impl Into<String>, fixable: bool) {
        self.errors.push(ValidationError {
            plugin: plugin.to_string(),
            error: error.into(),
            fixable,
        });
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Drop errors that a generate run has just fixed
    pub fn clear_fixable_errors(&mut self) {
        self.errors.retain(|e| !e.fixable);
    }
}

/// Output rendered during validation, consumed by generation in the same run
#[derive(Debug, Clone, Default)]
pub struct GenerationCache {
    dockerfile: Option<String>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dockerfile(&mut self, content: String) {
        self.dockerfile = Some(content);
    }

    /// Rendered Dockerfile, or `MissingCacheEntry` if validation did not run
    pub fn dockerfile(&self) -> HassfestResult<&str> {
        self.dockerfile
            .as_deref()
            .ok_or(HassfestError::MissingCacheEntry { key: "dockerfile" })
    }
}

/// A hassfest plugin
///
/// `validate` always runs first and may stash output in the cache that
/// `generate` later writes.
pub trait Plugin {
    /// Name used on the command line and in error reports
    fn name(&self) -> &'static str;

    fn validate(&self, config: &mut Config, cache: &mut GenerationCache) -> HassfestResult<()>;

    fn generate(&self, config: &Config, cache: &GenerationCache) -> HassfestResult<()>;
}
