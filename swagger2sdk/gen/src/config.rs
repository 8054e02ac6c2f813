//! Generation run configuration.
//!
//! Everything the pipeline needs beyond the API description itself is carried
//! in a [`GeneratorConfig`] passed to the entry points in [`crate::output`].

use std::path::{Path, PathBuf};

use swagger2sdk_define::AuthStrategy;

use crate::emit::TargetLanguage;
use crate::errors::{GeneratorError, Result};

/// Configuration for one generation run.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::AuthStrategy;
/// use swagger2sdk_gen::config::GeneratorConfig;
/// use swagger2sdk_gen::emit::TargetLanguage;
///
/// let config = GeneratorConfig::new("PetStore")
///     .with_auth(AuthStrategy::Bearer)
///     .with_output_dir("out")
///     .with_target(TargetLanguage::Python);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.output_file(), std::path::Path::new("out/PetStore.py"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Client type name and output file stem.
    pub sdk_name: String,
    /// Authentication strategy of the generated client.
    pub auth: AuthStrategy,
    /// Overrides the document's first server URL when set.
    pub base_url: Option<String>,
    /// Directory the output file is written to.
    pub output_dir: PathBuf,
    /// Language of the generated source.
    pub target: TargetLanguage,
    /// Print instead of writing files.
    pub dry_run: bool,
    /// Also write a `Cargo.toml` next to a generated Rust client.
    pub write_manifest: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with no auth, no base URL override, the
    /// current directory as output and the Rust target.
    pub fn new(sdk_name: impl Into<String>) -> Self {
        Self {
            sdk_name: sdk_name.into(),
            auth: AuthStrategy::None,
            base_url: None,
            output_dir: PathBuf::from("."),
            target: TargetLanguage::default(),
            dry_run: false,
            write_manifest: false,
        }
    }

    pub fn with_auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_target(mut self, target: TargetLanguage) -> Self {
        self.target = target;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    /// Checks that the SDK name can be used as a type name in every target.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::ConfigError`] when the name is empty, starts
    /// with a digit, or contains anything other than ASCII letters, digits
    /// and underscores.
    pub fn validate(&self) -> Result<()> {
        let name = &self.sdk_name;
        if name.is_empty() {
            return Err(GeneratorError::ConfigError(
                "SDK name must not be empty".to_string(),
            ));
        }
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(GeneratorError::ConfigError(format!(
                "SDK name '{}' must not start with a digit",
                name
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(GeneratorError::ConfigError(format!(
                "SDK name '{}' must contain only ASCII letters, digits and underscores",
                name
            )));
        }
        Ok(())
    }

    /// Path of the generated source file.
    pub fn output_file(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.sdk_name, self.target.extension()))
    }

    /// Directory the optional manifest is written to.
    pub fn manifest_dir(&self) -> &Path {
        &self.output_dir
    }
}
